//! Pagination and sorting request types.
//!
//! The list endpoint accepts `page`, `size`, and `sort` query parameters.
//! `sort` uses the `key,direction` form, e.g. `sort=amount,asc`. Sorting and
//! pagination always apply within a single owner's record set, never
//! globally — the store enforces that; these types only carry the request.

use crate::{Error, Result};

/// Default page size when the `size` parameter is absent.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Field a listing can be sorted by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Sort by record id.
    #[default]
    Id,
    /// Sort by amount.
    Amount,
}

/// Sort direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// A parsed sort specification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sort {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Sort {
    /// Parse a `key,direction` sort parameter.
    ///
    /// The direction is optional and defaults to ascending, so `amount`,
    /// `amount,asc`, and `amount,desc` are all valid. Unknown keys or
    /// directions are an [`Error::InvalidInput`].
    pub fn parse(raw: &str) -> Result<Self> {
        let mut parts = raw.splitn(2, ',');

        let key = match parts.next().unwrap_or("").trim() {
            "id" => SortKey::Id,
            "amount" => SortKey::Amount,
            other => {
                return Err(Error::invalid_input(format!("unknown sort key: {other}")));
            }
        };

        let direction = match parts.next().map(str::trim) {
            None | Some("") | Some("asc") => SortDirection::Ascending,
            Some("desc") => SortDirection::Descending,
            Some(other) => {
                return Err(Error::invalid_input(format!(
                    "unknown sort direction: {other}"
                )));
            }
        };

        Ok(Self { key, direction })
    }
}

/// A paginated, sorted listing request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    /// Zero-based page index.
    pub page: usize,

    /// Maximum number of records per page.
    pub size: usize,

    /// Sort applied before slicing the page window.
    pub sort: Sort,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            sort: Sort::default(),
        }
    }
}

impl PageRequest {
    /// Build a page request from raw query parameters.
    ///
    /// Absent parameters fall back to page 0, size [`DEFAULT_PAGE_SIZE`],
    /// and id-ascending sort. A `size` of zero is rejected.
    pub fn from_params(
        page: Option<usize>,
        size: Option<usize>,
        sort: Option<&str>,
    ) -> Result<Self> {
        let size = size.unwrap_or(DEFAULT_PAGE_SIZE);
        if size == 0 {
            return Err(Error::invalid_input("page size must be positive"));
        }

        let sort = match sort {
            Some(raw) => Sort::parse(raw)?,
            None => Sort::default(),
        };

        Ok(Self {
            page: page.unwrap_or(0),
            size,
            sort,
        })
    }

    /// Offset of the first record in the page window.
    pub fn offset(&self) -> usize {
        self.page.saturating_mul(self.size)
    }
}
