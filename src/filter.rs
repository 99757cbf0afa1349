//! To-do filtering by completion status and title substring.

use crate::api::Todo;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Completion status filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    /// Show every to-do
    #[default]
    All,
    /// Show only unfinished to-dos
    Active,
    /// Show only finished to-dos
    Completed,
}

impl StatusFilter {
    /// All filters in display order.
    pub const ALL: [StatusFilter; 3] = [
        StatusFilter::All,
        StatusFilter::Active,
        StatusFilter::Completed,
    ];

    /// Check whether a to-do passes this filter.
    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => !todo.completed,
            StatusFilter::Completed => todo.completed,
        }
    }

    /// Next filter, wrapping: All -> Active -> Completed -> All
    pub fn next(self) -> Self {
        match self {
            StatusFilter::All => StatusFilter::Active,
            StatusFilter::Active => StatusFilter::Completed,
            StatusFilter::Completed => StatusFilter::All,
        }
    }

    /// Previous filter, wrapping.
    pub fn prev(self) -> Self {
        match self {
            StatusFilter::All => StatusFilter::Completed,
            StatusFilter::Active => StatusFilter::All,
            StatusFilter::Completed => StatusFilter::Active,
        }
    }

    /// Label shown in the filter bar.
    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Active => "Active",
            StatusFilter::Completed => "Completed",
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Active => "active",
            StatusFilter::Completed => "completed",
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filter to-dos by status and title query.
///
/// # Arguments
/// * `todos` - Fetched to-dos
/// * `filter` - Completion status filter
/// * `query` - Title substring, matched case-insensitively (empty matches all)
///
/// # Returns
/// * `Vec<Todo>` - Matching to-dos in their original order
pub fn filter_todos(todos: &[Todo], filter: StatusFilter, query: &str) -> Vec<Todo> {
    let query = query.to_lowercase();

    todos
        .iter()
        .filter(|todo| filter.matches(todo))
        .filter(|todo| query.is_empty() || todo.title.to_lowercase().contains(&query))
        .cloned()
        .collect()
}
