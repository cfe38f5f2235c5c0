/// Store port - the narrow contract the aggregation core consumes from the
/// persistence layer.
///
/// Three primitive capabilities per collection: count a filtered set, fetch a
/// sorted/sliced window of it, and resolve a batch of foreign keys in one
/// round trip. The production implementation lives in [`postgres`]; tests
/// provide an in-memory implementation of the same trait.
pub mod postgres;

use std::collections::HashMap;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Comment, Playlist, Subscription, Tweet, User, Video};

/// Sort direction for paged queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Sortable video columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoSortField {
    CreatedAt,
    Views,
}

/// Sort specification for video listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoSort {
    pub field: VideoSortField,
    pub direction: SortDirection,
}

impl Default for VideoSort {
    fn default() -> Self {
        Self {
            field: VideoSortField::CreatedAt,
            direction: SortDirection::Ascending,
        }
    }
}

/// Filter predicates for video listings.
///
/// The same filter value drives both the count pass and the slice pass of a
/// paged listing, so the two always see the same universe of documents.
#[derive(Debug, Clone, Default)]
pub struct VideoFilter {
    /// Restrict to videos owned by this user
    pub owner_id: Option<Uuid>,
    /// Case-insensitive substring match over title and description
    pub search: Option<String>,
    /// Restrict to published videos
    pub published_only: bool,
}

/// Read-only persistence contract for the aggregation core.
///
/// All operations are snapshots; nothing here mutates the store.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Handle lookup is case-insensitive; callers trim first.
    async fn find_user_by_handle(&self, handle: &str) -> Result<Option<User>>;

    async fn count_videos(&self, filter: &VideoFilter) -> Result<i64>;

    async fn find_videos(
        &self,
        filter: &VideoFilter,
        sort: VideoSort,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<Video>>;

    async fn count_comments_for_video(&self, video_id: Uuid) -> Result<i64>;

    /// Comments for a video, newest first
    async fn find_comments_for_video(
        &self,
        video_id: Uuid,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<Comment>>;

    async fn count_tweets_by_owner(&self, owner_id: Uuid) -> Result<i64>;

    /// Tweets by a user, newest first
    async fn find_tweets_by_owner(
        &self,
        owner_id: Uuid,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<Tweet>>;

    async fn count_playlists_by_owner(&self, owner_id: Uuid) -> Result<i64>;

    /// Playlists of a user, newest first
    async fn find_playlists_by_owner(
        &self,
        owner_id: Uuid,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<Playlist>>;

    /// All subscription edges pointing at this channel
    async fn subscriptions_to_channel(&self, channel_id: Uuid) -> Result<Vec<Subscription>>;

    /// All subscription edges created by this subscriber
    async fn subscriptions_of_subscriber(&self, subscriber_id: Uuid) -> Result<Vec<Subscription>>;

    /// Batched user lookup; absent keys are simply missing from the map
    async fn resolve_users(&self, ids: &[Uuid]) -> Result<HashMap<Uuid, User>>;

    /// Batched video lookup; absent keys are simply missing from the map
    async fn resolve_videos(&self, ids: &[Uuid]) -> Result<HashMap<Uuid, Video>>;

    /// A user's ordered watched-video references; `None` when the user
    /// itself does not exist (distinct from an empty history).
    async fn watch_history(&self, user_id: Uuid) -> Result<Option<Vec<Uuid>>>;
}
