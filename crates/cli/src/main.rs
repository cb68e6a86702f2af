use anyhow::{Context, Result, bail};
use catalog::{Catalog, Course, CourseId};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use query::{
    CourseQuery, DEFAULT_MAX_PRICE, DEFAULT_MIN_PRICE, FilterSpec, PAGE_SIZE_OPTIONS, PageSpec,
    QueryResult, SortField, SortOrder, SortSpec,
};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};
use storefront::{
    DEFAULT_FEATURED_LIMIT, MatchKind, PreferenceStore, Storefront, Theme, format_price,
    format_students,
};
use tokio::sync::Semaphore;
use tracing::debug;

/// GrowFast - browse the online course catalog
#[derive(Parser)]
#[command(name = "growfast")]
#[command(about = "Browse, filter and search the GrowFast course catalog", long_about = None)]
struct Cli {
    /// Path to the course catalog JSON file
    #[arg(short, long, default_value = "data/courses.json")]
    data: PathBuf,

    /// Path to the preference file
    #[arg(long, default_value = ".growfast/preferences.json")]
    prefs: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List courses with filters, sorting and pagination
    Courses {
        /// Category to include (repeatable); none means all categories
        #[arg(long = "category")]
        categories: Vec<String>,

        #[arg(long, default_value_t = DEFAULT_MIN_PRICE)]
        min_price: f64,

        #[arg(long, default_value_t = DEFAULT_MAX_PRICE)]
        max_price: f64,

        /// Minimum rating, 0 to 5
        #[arg(long, default_value_t = 0.0)]
        min_rating: f64,

        /// rating-desc, rating-asc, price-asc, price-desc, students-desc, title-asc, ...
        #[arg(long, default_value = "rating-desc")]
        sort: String,

        /// 1-based page number
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Courses per page: 8, 12, 16 or 24
        #[arg(long, default_value_t = query::DEFAULT_PAGE_SIZE, value_parser = parse_page_size)]
        per_page: usize,

        /// Show the filtered courses in random order, starting at page 1
        #[arg(long)]
        shuffle: bool,
    },

    /// Show one course with related courses
    Course {
        #[arg(long)]
        id: CourseId,
    },

    /// Show a category page
    Category {
        /// Category name as it appears in a link, e.g. `design`
        #[arg(long)]
        name: String,

        #[arg(long, default_value_t = 1)]
        page: usize,

        #[arg(long, default_value_t = query::DEFAULT_PAGE_SIZE, value_parser = parse_page_size)]
        per_page: usize,
    },

    /// Show the highest-rated courses
    Featured {
        #[arg(long, default_value_t = DEFAULT_FEATURED_LIMIT)]
        limit: usize,
    },

    /// List categories with course counts and averages
    Categories,

    /// Search course titles and instructors
    Search {
        /// Search term (case-insensitive substring match)
        #[arg(long)]
        term: String,

        #[arg(long, default_value = "20")]
        limit: usize,
    },

    /// Show or change the color theme
    Theme {
        #[arg(value_enum, default_value_t = ThemeAction::Show)]
        action: ThemeAction,
    },

    /// Run benchmark to test query performance
    Benchmark {
        /// Number of requests to make
        #[arg(long, default_value = "1000")]
        requests: usize,

        /// Number of concurrent requests
        #[arg(long, default_value = "10")]
        concurrent: usize,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ThemeAction {
    Show,
    Toggle,
    Light,
    Dark,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // The theme lives outside the catalog
    if let Commands::Theme { action } = cli.command {
        return handle_theme(&cli.prefs, action);
    }

    println!("Loading course catalog from {}...", cli.data.display());
    let start = Instant::now();
    let catalog = Arc::new(
        Catalog::load_from_file(&cli.data).context("Failed to load course catalog")?,
    );
    println!(
        "{} Loaded {} courses in {:?}",
        "✓".green(),
        catalog.len(),
        start.elapsed()
    );

    let storefront = Storefront::new(catalog);

    match cli.command {
        Commands::Courses {
            categories,
            min_price,
            max_price,
            min_rating,
            sort,
            page,
            per_page,
            shuffle,
        } => {
            let filter = FilterSpec::default()
                .with_categories(categories)
                .with_price_range(min_price, max_price)
                .with_min_rating(min_rating);
            let sort: SortSpec = sort
                .parse()
                .with_context(|| format!("Invalid --sort value '{}'", sort))?;
            handle_courses(&storefront, filter, sort, PageSpec::new(page, per_page), shuffle)
        }
        Commands::Course { id } => handle_course(&storefront, id)?,
        Commands::Category {
            name,
            page,
            per_page,
        } => handle_category(&storefront, &name, PageSpec::new(page, per_page)),
        Commands::Featured { limit } => handle_featured(&storefront, limit),
        Commands::Categories => handle_categories(storefront.catalog()),
        Commands::Search { term, limit } => handle_search(&storefront, &term, limit),
        Commands::Benchmark {
            requests,
            concurrent,
        } => handle_benchmark(storefront, requests, concurrent).await?,
        Commands::Theme { .. } => unreachable!("handled before loading the catalog"),
    }

    Ok(())
}

fn parse_page_size(value: &str) -> std::result::Result<usize, String> {
    let size: usize = value
        .parse()
        .map_err(|_| format!("'{}' is not a number", value))?;
    if PAGE_SIZE_OPTIONS.contains(&size) {
        Ok(size)
    } else {
        Err(format!("page size must be one of {:?}", PAGE_SIZE_OPTIONS))
    }
}

/// Handle the 'courses' command
fn handle_courses(
    storefront: &Storefront,
    filter: FilterSpec,
    sort: SortSpec,
    page: PageSpec,
    shuffle: bool,
) {
    let listing = if shuffle {
        // Shuffling always lands on the first page
        storefront.browse_shuffled(&filter, PageSpec::first(page.page_size))
    } else {
        storefront.browse(&CourseQuery { filter, sort, page })
    };

    let order = if shuffle {
        "shuffled".to_string()
    } else {
        sort.to_string()
    };
    println!(
        "{}",
        format!(
            "{} of {} courses ({})",
            listing.result.total_matched, listing.catalog_size, order
        )
        .bold()
        .blue()
    );
    if listing.active_filters > 0 {
        println!("{}Active filters: {}", "• ".cyan(), listing.active_filters);
    }

    if listing.result.total_matched == 0 {
        println!("No courses found. Try adjusting your filters.");
        return;
    }

    print_course_list(&listing.result.items);
    print_pagination(&listing.result);
}

/// Handle the 'course' command
fn handle_course(storefront: &Storefront, id: CourseId) -> Result<()> {
    let detail = storefront.course_detail(id)?;
    let course = detail.course;

    println!("{}", course.title.bold().blue());
    println!("{}Instructor: {}", "• ".green(), course.instructor);
    println!("{}Category: {}", "• ".green(), course.category);
    println!("{}Rating: {:.1}", "• ".green(), course.rating);
    println!("{}Price: {}", "• ".green(), format_price(course.price));
    println!("{}Students: {}", "• ".green(), format_students(course.students));
    println!("{}Duration: {}", "• ".green(), course.duration);
    if let Some(preview) = &course.video_preview {
        println!("{}Preview: {}", "• ".green(), preview);
    }
    println!();
    println!("{}", course.description);

    if !detail.related.is_empty() {
        println!();
        println!("{}", "Related courses:".bold());
        print_course_list(&detail.related);
    }
    Ok(())
}

/// Handle the 'category' command
fn handle_category(storefront: &Storefront, name: &str, page: PageSpec) {
    let category = storefront.category_page(name, page);

    println!("{}", format!("{} Courses", category.category).bold().blue());
    println!("{}", category.description);
    println!("{} courses available", category.result.total_matched);

    if category.result.total_matched == 0 {
        println!("No courses found in this category yet.");
        return;
    }
    print_course_list(&category.result.items);
    print_pagination(&category.result);
}

/// Handle the 'featured' command
fn handle_featured(storefront: &Storefront, limit: usize) {
    println!("{}", "Featured Courses:".bold().blue());
    print_course_list(&storefront.featured(limit));
}

/// Handle the 'categories' command
fn handle_categories(catalog: &Catalog) {
    println!("{}", "Categories:".bold().blue());
    for name in catalog.categories() {
        match catalog.get_category_stats(name) {
            Some(stats) => println!(
                "{}{}: {} courses, avg rating {:.2}, {} students, {} - {}",
                "• ".green(),
                name,
                stats.course_count,
                stats.avg_rating,
                stats.total_students,
                format_price(stats.min_price),
                format_price(stats.max_price)
            ),
            None => println!("{}{}", "• ".green(), name),
        }
    }
}

/// Handle the 'search' command
fn handle_search(storefront: &Storefront, term: &str, limit: usize) {
    let hits = storefront.search(term, limit);

    println!("{}", format!("Search results for '{}':", term).bold().blue());
    if hits.is_empty() {
        println!("No courses match.");
        return;
    }
    for hit in hits {
        let marker = match hit.matched {
            MatchKind::ExactTitle => "=".green(),
            MatchKind::Title => "~".cyan(),
            MatchKind::Instructor => "@".yellow(),
        };
        println!(
            "{} {}: {} by {} ({:.1})",
            marker, hit.course.id, hit.course.title, hit.course.instructor, hit.course.rating
        );
    }
}

/// Handle the 'theme' command
fn handle_theme(path: &Path, action: ThemeAction) -> Result<()> {
    let mut store = PreferenceStore::open(path).context("Failed to read preferences")?;

    let theme = match action {
        ThemeAction::Show => store.theme(),
        ThemeAction::Toggle => store.toggle()?,
        ThemeAction::Light => {
            store.set_theme(Theme::Light)?;
            Theme::Light
        }
        ThemeAction::Dark => {
            store.set_theme(Theme::Dark)?;
            Theme::Dark
        }
    };

    println!("Theme: {}", theme.to_string().bold());
    Ok(())
}

/// Handle the 'benchmark' command
async fn handle_benchmark(
    storefront: Storefront,
    requests: usize,
    concurrent: usize,
) -> Result<()> {
    if requests == 0 || concurrent == 0 {
        bail!("--requests and --concurrent must both be at least 1");
    }

    let queries = random_queries(storefront.catalog(), requests);
    let semaphore = Arc::new(Semaphore::new(concurrent));

    let wall_clock = Instant::now();
    let mut handles = Vec::with_capacity(requests);
    for query in queries {
        let storefront = storefront.clone();
        let semaphore = semaphore.clone();
        handles.push(tokio::spawn(async move {
            let _permit = semaphore.acquire_owned().await?;
            let elapsed = tokio::task::spawn_blocking(move || {
                let start = Instant::now();
                let listing = storefront.browse(&query);
                debug!("Benchmark query matched {}", listing.result.total_matched);
                start.elapsed()
            })
            .await?;
            Ok::<_, anyhow::Error>(elapsed)
        }));
    }

    let mut timings: Vec<Duration> = Vec::with_capacity(requests);
    for handle in handles {
        timings.push(handle.await??);
    }
    let total_time = wall_clock.elapsed();

    timings.sort();
    let busy: Duration = timings.iter().sum();
    let avg_latency = busy / timings.len() as u32;
    let percentile = |p: f64| timings[((timings.len() - 1) as f64 * p).round() as usize];
    let throughput = requests as f64 / total_time.as_secs_f64();

    println!("{}", "Benchmark results:".bold().blue());
    println!("Requests: {} ({} concurrent)", requests, concurrent);
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(0.50));
    println!("P95 latency: {:?}", percentile(0.95));
    println!("P99 latency: {:?}", percentile(0.99));
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}

/// Browse queries with random filters, sort and page, mimicking real traffic
fn random_queries(catalog: &Catalog, count: usize) -> Vec<CourseQuery> {
    const FIELDS: [SortField; 4] = [
        SortField::Rating,
        SortField::Price,
        SortField::Students,
        SortField::Title,
    ];
    const ORDERS: [SortOrder; 2] = [SortOrder::Ascending, SortOrder::Descending];

    let mut rng = rand::rng();
    let categories = catalog.categories();

    (0..count)
        .map(|_| {
            let mut filter = FilterSpec::default();
            if rng.random_bool(0.5) {
                filter = filter.with_categories(categories.choose(&mut rng).cloned());
            }
            if rng.random_bool(0.3) {
                filter = filter.with_min_rating(rng.random_range(3.0..=5.0));
            }
            if rng.random_bool(0.3) {
                let max = rng.random_range(DEFAULT_MIN_PRICE..=DEFAULT_MAX_PRICE);
                filter = filter.with_price_range(DEFAULT_MIN_PRICE, max);
            }

            let field = *FIELDS.choose(&mut rng).unwrap_or(&SortField::Rating);
            let order = *ORDERS.choose(&mut rng).unwrap_or(&SortOrder::Descending);
            let page_size = *PAGE_SIZE_OPTIONS
                .choose(&mut rng)
                .unwrap_or(&query::DEFAULT_PAGE_SIZE);

            CourseQuery {
                filter,
                sort: SortSpec::new(field, order),
                page: PageSpec::new(rng.random_range(1..=3), page_size),
            }
        })
        .collect()
}

fn print_course_list(courses: &[&Course]) {
    for course in courses {
        println!(
            "{}. {} ({}) by {} - {} {:.1} | {} students | {}",
            course.id.to_string().green(),
            course.title.bold(),
            course.category,
            course.instructor,
            "★".yellow(),
            course.rating,
            format_students(course.students),
            format_price(course.price)
        );
    }
}

fn print_pagination(result: &QueryResult<'_>) {
    println!("{}", pagination_summary(result));
}

/// Footer under a result list; page buttons only when there is more than one page
fn pagination_summary(result: &QueryResult<'_>) -> String {
    let Some((first, last)) = result.item_range() else {
        return format!(
            "Page {} is past the end ({} pages)",
            result.page.page_index, result.total_pages
        );
    };

    let summary = format!("Showing {} to {} of {} results", first, last, result.total_matched);
    if result.total_pages <= 1 {
        return summary;
    }

    let pages = result
        .visible_pages()
        .into_iter()
        .map(|p| {
            if p == result.page.page_index {
                format!("[{}]", p).bold().to_string()
            } else {
                p.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    format!("{} | pages: {}", summary, pages)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn courses(count: u32) -> Vec<Course> {
        (1..=count)
            .map(|id| Course {
                id,
                title: format!("Course {id}"),
                category: "Design".to_string(),
                price: 20.0,
                rating: 4.5,
                instructor: "Mike Chen".to_string(),
                description: String::new(),
                image: String::new(),
                video_preview: None,
                duration: "4 hours".to_string(),
                students: 100,
            })
            .collect()
    }

    fn summary_for(courses: &[Course], page: PageSpec) -> String {
        colored::control::set_override(false);
        let result = query::apply(courses, &FilterSpec::default(), SortSpec::default(), page);
        pagination_summary(&result)
    }

    #[test]
    fn test_single_page_has_no_page_buttons() {
        let courses = courses(5);
        assert_eq!(
            summary_for(&courses, PageSpec::first(12)),
            "Showing 1 to 5 of 5 results"
        );
    }

    #[test]
    fn test_multiple_pages_show_window() {
        let courses = courses(80);
        assert_eq!(
            summary_for(&courses, PageSpec::new(3, 8)),
            "Showing 17 to 24 of 80 results | pages: 1 2 [3] 4 5"
        );
    }

    #[test]
    fn test_page_past_end() {
        let courses = courses(80);
        assert_eq!(
            summary_for(&courses, PageSpec::new(20, 8)),
            "Page 20 is past the end (10 pages)"
        );
    }
}
