//! Errors for turning user input into query values.
//!
//! Running a query never fails; only parsing a sort option can.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// Not of the form `<field>-<order>`
    #[error("Invalid sort option '{0}', expected <field>-<asc|desc>")]
    InvalidSort(String),

    #[error("Unknown sort field '{0}', expected rating, price, students or title")]
    InvalidSortField(String),

    #[error("Unknown sort order '{0}', expected asc or desc")]
    InvalidSortOrder(String),
}
