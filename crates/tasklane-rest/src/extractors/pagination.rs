//! Pagination and filter query extractors.

use serde::Deserialize;
use tasklane_core::{PageRequest, Sort, SortDirection, TaskFilter};

/// Query parameters for pagination and sorting.
///
/// Mirrors the frontend's query contract: `?page=0&size=10&sortBy=id&sortDir=asc`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationQuery {
    #[serde(default)]
    pub page: Option<usize>,
    #[serde(default)]
    pub size: Option<usize>,
    #[serde(default)]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub sort_dir: Option<String>,
}

impl From<PaginationQuery> for PageRequest {
    fn from(query: PaginationQuery) -> Self {
        let direction = query
            .sort_dir
            .as_deref()
            .map(SortDirection::parse)
            .unwrap_or_default();
        let field = query.sort_by.unwrap_or_else(|| "id".to_string());

        PageRequest::new(
            query.page.unwrap_or(0),
            query.size.unwrap_or(PageRequest::DEFAULT_SIZE),
        )
        .with_sort(Sort::new(field, direction))
    }
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self {
            page: Some(0),
            size: Some(PageRequest::DEFAULT_SIZE),
            sort_by: None,
            sort_dir: None,
        }
    }
}

/// Optional task list filters: `?title=report&completed=true`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskFilterQuery {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub completed: Option<bool>,
}

impl From<TaskFilterQuery> for TaskFilter {
    fn from(query: TaskFilterQuery) -> Self {
        TaskFilter::new(query.title, query.completed)
    }
}
