/// Pagination engine - deterministic count-then-slice over a filtered set.
///
/// A listing is described by a [`PagedQuery`]: one value owns both the count
/// pass and the slice pass, so the two cannot disagree about which documents
/// are in the filtered universe.
use async_trait::async_trait;
use serde::Serialize;

use crate::error::Result;

/// Default page size when the caller supplies none
pub const DEFAULT_LIMIT: u32 = 10;
/// Upper bound on page size
pub const MAX_LIMIT: u32 = 100;

/// A validated (page, limit) pair.
///
/// Out-of-range values are clamped rather than rejected: page below 1 becomes
/// 1, limit is forced into 1..=MAX_LIMIT. Clamping keeps malformed transport
/// input from ever turning into a skipped or oversized slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl PageRequest {
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: page.max(1),
            limit: limit.clamp(1, MAX_LIMIT),
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Number of documents before the requested page
    pub fn skip(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, DEFAULT_LIMIT)
    }
}

/// One page of a listing, with the totals for the whole filtered set
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: i64,
    pub total_pages: i64,
    pub current_page: u32,
    pub limit: u32,
}

/// A filtered, sorted collection that can be counted and sliced.
///
/// `count` and `fetch` must apply identical filter predicates; implementors
/// guarantee this by deriving both from the same filter value. `fetch` returns
/// at most `limit` items.
#[async_trait]
pub trait PagedQuery: Sync {
    type Item: Send;

    /// Size of the full filtered set
    async fn count(&self) -> Result<i64>;

    /// One sorted window of the filtered set
    async fn fetch(&self, skip: i64, limit: i64) -> Result<Vec<Self::Item>>;
}

/// Run the two-pass count-then-slice aggregation.
///
/// A request beyond the last page yields an empty item list, never an error;
/// the slice query is skipped outright since the counted total already proves
/// it would be empty.
pub async fn paginate<Q: PagedQuery>(query: &Q, request: PageRequest) -> Result<Page<Q::Item>> {
    let total_count = query.count().await?;

    let limit = i64::from(request.limit());
    let total_pages = if total_count == 0 {
        0
    } else {
        (total_count + limit - 1) / limit
    };

    let skip = request.skip();
    let items = if skip >= total_count {
        Vec::new()
    } else {
        query.fetch(skip, limit).await?
    };

    Ok(Page {
        items,
        total_count,
        total_pages,
        current_page: request.page(),
        limit: request.limit(),
    })
}
