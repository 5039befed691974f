//! Page requests and the pagination metadata the panel returns with lists.

use serde::{Deserialize, Serialize};

/// Page size used by the pagination walker when the caller passes zero.
pub const DEFAULT_PER_PAGE: u32 = 100;

/// What page of a list to request, and which relations to embed.
///
/// Every field is optional; an unset or zero `page`/`per_page` is left out
/// of the query so the panel default applies.
///
/// # Example
///
/// ```rust
/// use pterodactyl_api::rest::PaginationOptions;
///
/// let options = PaginationOptions::new()
///     .page(2)
///     .per_page(50)
///     .include(["allocations", "user"]);
///
/// assert_eq!(
///     options.to_query_pairs(),
///     vec![
///         ("page".to_string(), "2".to_string()),
///         ("per_page".to_string(), "50".to_string()),
///         ("include".to_string(), "allocations,user".to_string()),
///     ]
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaginationOptions {
    /// 1-based page number.
    pub page: Option<u32>,
    /// Items per page.
    pub per_page: Option<u32>,
    /// Relations to embed, sent as one comma-joined `include` parameter.
    pub include: Vec<String>,
}

impl PaginationOptions {
    /// Creates empty options; the panel defaults apply.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page number.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the page size.
    #[must_use]
    pub const fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Appends relations to embed.
    #[must_use]
    pub fn include<I, S>(mut self, relations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include.extend(relations.into_iter().map(Into::into));
        self
    }

    /// Returns the query parameters these options encode to, in a fixed
    /// order: `page`, `per_page`, `include`.
    #[must_use]
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(3);
        if let Some(page) = self.page.filter(|p| *p > 0) {
            pairs.push(("page".to_string(), page.to_string()));
        }
        if let Some(per_page) = self.per_page.filter(|p| *p > 0) {
            pairs.push(("per_page".to_string(), per_page.to_string()));
        }
        if !self.include.is_empty() {
            pairs.push(("include".to_string(), self.include.join(",")));
        }
        pairs
    }
}

/// Server-reported position of a list response within the full result set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pagination {
    /// Total number of items across all pages.
    pub total: u64,
    /// Number of items on this page.
    pub count: u64,
    /// Page size the panel applied.
    pub per_page: u32,
    /// 1-based number of this page.
    pub current_page: u32,
    /// Number of pages. Zero for an empty result set.
    pub total_pages: u32,
}

impl Pagination {
    /// Returns `true` once `current_page` has reached `total_pages`.
    ///
    /// An empty result set reports `total_pages: 0` and counts as the last
    /// page.
    #[must_use]
    pub const fn is_last_page(&self) -> bool {
        self.current_page >= self.total_pages
    }

    /// Returns the number of the following page, if there is one.
    #[must_use]
    pub const fn next_page(&self) -> Option<u32> {
        if self.is_last_page() {
            None
        } else {
            Some(self.current_page + 1)
        }
    }
}

/// The `meta` object of a list response.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    /// Pagination counters.
    #[serde(default)]
    pub pagination: Pagination,
}
