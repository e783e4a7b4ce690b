//! Offset/limit pagination types shared by the list operations.

use serde::{Deserialize, Serialize};

/// Default page size used when the caller does not specify one.
pub const DEFAULT_LIMIT: u32 = 200;
/// Largest page size the API accepts.
pub const MAX_LIMIT: u32 = 1000;

/// Offset/limit parameters for paginated list operations.
///
/// The API paginates with a zero-based `offset` into the full result set and
/// a `limit` page size. Walking pages is the caller's loop; the list
/// responses expose the `next`/`previous` href objects the API returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListParams {
    /// Number of resources to skip.
    pub offset: u32,
    /// Maximum number of resources to return.
    pub limit: u32,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl ListParams {
    /// Clamp values to ranges the API accepts.
    ///
    /// - `limit` is clamped to `1..=MAX_LIMIT`
    /// - `offset` is passed through (the API tolerates any offset)
    #[must_use]
    pub fn validated(&self) -> Self {
        Self {
            offset: self.offset,
            limit: self.limit.clamp(1, MAX_LIMIT),
        }
    }

    /// Render as a query string fragment, e.g. `offset=0&limit=200`.
    pub(crate) fn to_query(&self) -> String {
        let v = self.validated();
        format!("offset={}&limit={}", v.offset, v.limit)
    }
}

/// An href object pointing at a page of a list result.
///
/// The API returns these under `first`, `last`, `next` and `previous` in
/// every paginated list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageLink {
    /// Absolute URL of the referenced page.
    pub href: String,
}
