//! One page of a list response.
//!
//! [`Page<T>`] pairs the flattened items with the pagination counters the
//! panel reported. It implements `Deref<Target = Vec<T>>`, so it can be used
//! like the item list directly:
//!
//! ```rust,ignore
//! let page = client.application().nodes().list(None).await?;
//!
//! for node in page.iter() {
//!     println!("{}", node.name);
//! }
//!
//! if page.has_next_page() {
//!     // request page.pagination().current_page + 1
//! }
//! ```

use std::ops::{Deref, DerefMut};

use crate::rest::pagination::{Meta, Pagination};

/// A page of items with its pagination metadata.
///
/// # Example
///
/// ```rust
/// use pterodactyl_api::rest::{Page, Pagination};
///
/// let page = Page::new(
///     vec!["a", "b"],
///     Pagination { total: 3, count: 2, per_page: 2, current_page: 1, total_pages: 2 },
/// );
///
/// assert_eq!(page.len(), 2);
/// assert_eq!(page[0], "a");
/// assert!(page.has_next_page());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Page<T> {
    items: Vec<T>,
    pagination: Pagination,
}

impl<T> Page<T> {
    /// Creates a page from its items and counters.
    #[must_use]
    pub const fn new(items: Vec<T>, pagination: Pagination) -> Self {
        Self { items, pagination }
    }

    /// Returns the pagination counters.
    #[must_use]
    pub const fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// Returns the counters wrapped as the panel's `meta` object.
    #[must_use]
    pub const fn meta(&self) -> Meta {
        Meta {
            pagination: self.pagination,
        }
    }

    /// Returns `true` if the panel reported more pages after this one.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        !self.pagination.is_last_page()
    }

    /// Consumes the page and returns its items.
    #[must_use]
    pub fn into_inner(self) -> Vec<T> {
        self.items
    }

    /// Consumes the page and returns its items and counters.
    #[must_use]
    pub fn into_parts(self) -> (Vec<T>, Pagination) {
        (self.items, self.pagination)
    }
}

impl<T> Deref for Page<T> {
    type Target = Vec<T>;

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<T> DerefMut for Page<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.items
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
