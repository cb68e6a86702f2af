//! Category routing helpers.
//!
//! Category pages are addressed by a lower-case route segment
//! (`/categories/design`). The query engine only matches exact stored
//! names, so the segment is resolved to a stored label here before it
//! reaches a filter.

/// Turn a route segment into a stored category label.
///
/// First character upper-cased, the rest lower-cased: `design` and
/// `DESIGN` both become `Design`.
pub fn normalize_category(segment: &str) -> String {
    let segment = segment.trim();
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Map a route segment onto one of the `known` category labels.
///
/// Matching ignores case, so `personal development` finds
/// `Personal Development`. Segments naming no known category fall back to
/// [`normalize_category`].
pub fn resolve_category(segment: &str, known: &[String]) -> String {
    let segment = segment.trim();
    known
        .iter()
        .find(|label| label.to_lowercase() == segment.to_lowercase())
        .cloned()
        .unwrap_or_else(|| normalize_category(segment))
}

/// Blurb shown under a category heading
pub fn category_description(category: &str) -> &'static str {
    match category.to_lowercase().as_str() {
        "programming" => {
            "Master coding skills with hands-on projects and expert instruction in the latest technologies."
        }
        "design" => {
            "Create stunning visuals and user experiences with professional design principles and tools."
        }
        "marketing" => {
            "Build your brand and reach your audience with proven marketing strategies and tactics."
        }
        "business" => {
            "Develop entrepreneurial skills and business acumen to succeed in today's competitive market."
        }
        "creative" => {
            "Express your creativity through various artistic mediums and innovative techniques."
        }
        "health" => {
            "Improve your physical and mental wellbeing with evidence-based health and wellness practices."
        }
        _ => "Explore courses in this exciting category.",
    }
}
