/// Data models for vidtube-service
///
/// Entity structs map 1:1 onto the collections in the store; the projection
/// structs at the bottom are the denormalized shapes the aggregation core
/// returns to callers.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity - an account that owns videos, comments, tweets and playlists
/// and can subscribe to other users ("channels").
///
/// `password_hash` and `refresh_token` are opaque to this service and are
/// never serialized into responses.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    /// Unique handle, stored lowercase
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub avatar_url: Option<String>,
    pub cover_image_url: Option<String>,
    #[serde(skip_serializing)]
    pub password_hash: String,
    #[serde(skip_serializing)]
    pub refresh_token: Option<String>,
    /// Watched video references, most recent first; duplicates permitted
    pub watch_history: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Video entity
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Video {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub thumbnail_url: String,
    pub duration_secs: i32,
    pub is_published: bool,
    pub views: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Comment entity - a comment on a video
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Comment {
    pub id: Uuid,
    pub video_id: Uuid,
    pub owner_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Tweet entity - a short text post by a user
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Tweet {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Playlist entity - an ordered collection of video references
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Playlist {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub description: String,
    pub video_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Subscription edge - `subscriber` follows `channel`.
///
/// Uniqueness of (subscriber, channel) is not enforced by the store;
/// aggregations tolerate duplicate edges.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Subscription {
    pub id: Uuid,
    pub subscriber_id: Uuid,
    pub channel_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Denormalized channel profile returned by the channel aggregation.
///
/// Carries only public profile fields; credential and token fields never
/// appear here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelProfile {
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub avatar_url: Option<String>,
    pub cover_image_url: Option<String>,
    /// Handles of users subscribed to this channel
    pub subscribers: Vec<String>,
    /// Handles of channels this user is subscribed to
    pub subscribed_to: Vec<String>,
    pub subscribers_count: i64,
    pub subscribed_to_count: i64,
    pub is_viewer_subscribed: bool,
}

/// Reduced owner projection attached to watch-history entries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoOwner {
    pub username: String,
    pub full_name: String,
    pub avatar_url: Option<String>,
}

impl From<&User> for VideoOwner {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            full_name: user.full_name.clone(),
            avatar_url: user.avatar_url.clone(),
        }
    }
}

/// Watch-history entry: a video enriched with its owner's public profile.
/// `owner` is `None` when the owning account has been deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchedVideo {
    #[serde(flatten)]
    pub video: Video,
    pub owner: Option<VideoOwner>,
}
