/// Watch-history aggregation.
///
/// Resolves a user's ordered watched-video references and attaches a reduced
/// owner projection to each. The user is the anchor (`NotFound` when absent);
/// deleted videos are dropped, deleted owners leave `owner: None`.
use std::sync::Arc;

use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::{VideoOwner, WatchedVideo};
use crate::services::resolve_in_order;
use crate::store::DocumentStore;

#[derive(Clone)]
pub struct WatchHistoryService {
    store: Arc<dyn DocumentStore>,
}

impl WatchHistoryService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// The user's watched videos, most recent first, each enriched with its
    /// owner's public profile.
    pub async fn watch_history(&self, user_id: Uuid) -> Result<Vec<WatchedVideo>> {
        let refs = self
            .store
            .watch_history(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user '{}' not found", user_id)))?;

        if refs.is_empty() {
            return Ok(Vec::new());
        }

        // Stored order is the output order; deleted videos drop out.
        let video_docs = self.store.resolve_videos(&refs).await?;
        let videos = resolve_in_order(&refs, &video_docs);

        let mut owner_ids: Vec<Uuid> = videos.iter().map(|v| v.owner_id).collect();
        owner_ids.sort_unstable();
        owner_ids.dedup();
        let owners = self.store.resolve_users(&owner_ids).await?;

        Ok(videos
            .into_iter()
            .map(|video| {
                let owner = owners.get(&video.owner_id).map(VideoOwner::from);
                WatchedVideo { video, owner }
            })
            .collect())
    }
}
