//! Search parameters and paginated results.

use serde::Serialize;

/// Page size used when the query does not name one.
pub const DEFAULT_PER_PAGE: usize = 20;

/// Largest page size a query may ask for.
pub const MAX_PER_PAGE: usize = 100;

/// Filters and pagination for [`Roster::search`](super::Roster::search).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeQuery {
    /// Case-insensitive substring of name, employee number or department.
    pub q: Option<String>,
    /// Exact department name.
    pub department: Option<String>,
    /// 1-based page number.
    pub page: Option<usize>,
    /// Items per page, clamped to `1..=MAX_PER_PAGE`.
    pub per_page: Option<usize>,
}

impl EmployeeQuery {
    /// The trimmed, lowercased search text, if any.
    pub fn needle(&self) -> Option<String> {
        self.q
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase)
    }

    /// The requested page, never below 1.
    pub fn page(&self) -> usize {
        self.page.unwrap_or(1).max(1)
    }

    /// The requested page size after clamping.
    pub fn per_page(&self) -> usize {
        self.per_page
            .unwrap_or(DEFAULT_PER_PAGE)
            .clamp(1, MAX_PER_PAGE)
    }
}

/// One page of results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// 1-based page number.
    pub page: usize,
    /// Page size used.
    pub per_page: usize,
    /// Matches across all pages.
    pub total_items: usize,
    /// Number of pages; 0 when nothing matched.
    pub total_pages: usize,
}

impl<T> Page<T> {
    /// Cuts one page out of a full result list.
    pub fn paginate(all: Vec<T>, page: usize, per_page: usize) -> Self {
        let total_items = all.len();
        let total_pages = total_items.div_ceil(per_page);
        let items = all
            .into_iter()
            .skip((page - 1).saturating_mul(per_page))
            .take(per_page)
            .collect();

        Self {
            items,
            page,
            per_page,
            total_items,
            total_pages,
        }
    }

    /// Converts every item, keeping the pagination fields.
    pub fn try_map<U, E>(self, f: impl FnMut(T) -> Result<U, E>) -> Result<Page<U>, E> {
        Ok(Page {
            items: self.items.into_iter().map(f).collect::<Result<_, _>>()?,
            page: self.page,
            per_page: self.per_page,
            total_items: self.total_items,
            total_pages: self.total_pages,
        })
    }
}
