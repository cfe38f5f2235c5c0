pub mod channel;
pub mod history;
pub mod listing;
pub mod pagination;

use std::collections::HashMap;

use uuid::Uuid;

pub use channel::ChannelService;
pub use history::WatchHistoryService;
pub use listing::ListingService;
pub use pagination::{paginate, Page, PageRequest, PagedQuery};

/// Materialize one batched lookup back into key order.
///
/// Keys whose document was deleted are silently omitted; duplicate keys yield
/// duplicate documents. This is the shared enrichment step behind the channel
/// and watch-history aggregations.
pub(crate) fn resolve_in_order<T: Clone>(keys: &[Uuid], resolved: &HashMap<Uuid, T>) -> Vec<T> {
    keys.iter()
        .filter_map(|key| resolved.get(key).cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_key_order_and_drops_unresolved() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let missing = Uuid::new_v4();

        let mut resolved = HashMap::new();
        resolved.insert(a, "a");
        resolved.insert(b, "b");

        let out = resolve_in_order(&[b, missing, a, b], &resolved);
        assert_eq!(out, vec!["b", "a", "b"]);
    }
}
