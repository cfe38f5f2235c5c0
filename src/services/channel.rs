/// Channel profile aggregation.
///
/// Joins the subscriptions collection against users in both directions and
/// returns one denormalized profile document. The channel itself is the
/// anchor: its absence is a `NotFound`. Edges whose other endpoint has been
/// deleted are dropped from the result, never surfaced as failures.
use std::sync::Arc;

use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::ChannelProfile;
use crate::services::resolve_in_order;
use crate::store::DocumentStore;

#[derive(Clone)]
pub struct ChannelService {
    store: Arc<dyn DocumentStore>,
}

impl ChannelService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Build the denormalized profile for `handle`, as seen by `viewer`
    /// (the viewer's handle, or `None` for anonymous requests).
    pub async fn channel_profile(
        &self,
        handle: &str,
        viewer: Option<&str>,
    ) -> Result<ChannelProfile> {
        let handle = handle.trim();
        if handle.is_empty() {
            return Err(AppError::InvalidInput(
                "channel handle must not be empty".to_string(),
            ));
        }

        let channel = self
            .store
            .find_user_by_handle(handle)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("channel '{}' not found", handle)))?;

        // Edges in both directions, then one batched user lookup per side.
        let (inbound, outbound) = tokio::try_join!(
            self.store.subscriptions_to_channel(channel.id),
            self.store.subscriptions_of_subscriber(channel.id),
        )?;

        let subscriber_ids: Vec<Uuid> = inbound.iter().map(|s| s.subscriber_id).collect();
        let channel_ids: Vec<Uuid> = outbound.iter().map(|s| s.channel_id).collect();

        let (subscriber_docs, channel_docs) = tokio::try_join!(
            self.store.resolve_users(&subscriber_ids),
            self.store.resolve_users(&channel_ids),
        )?;

        // Orphaned edges (deleted accounts) drop out here.
        let subscribers: Vec<String> = resolve_in_order(&subscriber_ids, &subscriber_docs)
            .iter()
            .map(|u| u.username.clone())
            .collect();
        let subscribed_to: Vec<String> = resolve_in_order(&channel_ids, &channel_docs)
            .iter()
            .map(|u| u.username.clone())
            .collect();

        let is_viewer_subscribed = match viewer {
            Some(viewer_handle) => {
                let viewer_handle = viewer_handle.trim();
                subscribers
                    .iter()
                    .any(|s| s.eq_ignore_ascii_case(viewer_handle))
            }
            None => false,
        };

        Ok(ChannelProfile {
            username: channel.username,
            full_name: channel.full_name,
            email: channel.email,
            avatar_url: channel.avatar_url,
            cover_image_url: channel.cover_image_url,
            subscribers_count: subscribers.len() as i64,
            subscribed_to_count: subscribed_to.len() as i64,
            subscribers,
            subscribed_to,
            is_viewer_subscribed,
        })
    }
}
