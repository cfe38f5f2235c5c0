//! Shared test fixtures: an in-memory DocumentStore and entity builders.
//!
//! The memory store mirrors the filter/sort semantics of the PostgreSQL
//! implementation so the aggregation services can be exercised without a
//! database.
#![allow(dead_code)]

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use uuid::Uuid;

use vidtube_service::error::Result;
use vidtube_service::models::{Comment, Playlist, Subscription, Tweet, User, Video};
use vidtube_service::store::{
    DocumentStore, SortDirection, VideoFilter, VideoSort, VideoSortField,
};

#[derive(Default)]
pub struct MemoryStore {
    pub users: Vec<User>,
    pub videos: Vec<Video>,
    pub comments: Vec<Comment>,
    pub tweets: Vec<Tweet>,
    pub playlists: Vec<Playlist>,
    pub subscriptions: Vec<Subscription>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches_filter(video: &Video, filter: &VideoFilter) -> bool {
    if let Some(owner_id) = filter.owner_id {
        if video.owner_id != owner_id {
            return false;
        }
    }
    if let Some(search) = &filter.search {
        let needle = search.to_lowercase();
        if !video.title.to_lowercase().contains(&needle)
            && !video.description.to_lowercase().contains(&needle)
        {
            return false;
        }
    }
    if filter.published_only && !video.is_published {
        return false;
    }
    true
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn find_user_by_handle(&self, handle: &str) -> Result<Option<User>> {
        Ok(self
            .users
            .iter()
            .find(|u| u.username.eq_ignore_ascii_case(handle))
            .cloned())
    }

    async fn count_videos(&self, filter: &VideoFilter) -> Result<i64> {
        Ok(self
            .videos
            .iter()
            .filter(|v| matches_filter(v, filter))
            .count() as i64)
    }

    async fn find_videos(
        &self,
        filter: &VideoFilter,
        sort: VideoSort,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<Video>> {
        let mut matching: Vec<Video> = self
            .videos
            .iter()
            .filter(|v| matches_filter(v, filter))
            .cloned()
            .collect();

        matching.sort_by(|a, b| {
            let ordering = match sort.field {
                VideoSortField::CreatedAt => a.created_at.cmp(&b.created_at),
                VideoSortField::Views => a.views.cmp(&b.views),
            };
            match sort.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });

        Ok(matching
            .into_iter()
            .skip(skip as usize)
            .take(limit as usize)
            .collect())
    }

    async fn count_comments_for_video(&self, video_id: Uuid) -> Result<i64> {
        Ok(self
            .comments
            .iter()
            .filter(|c| c.video_id == video_id)
            .count() as i64)
    }

    async fn find_comments_for_video(
        &self,
        video_id: Uuid,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<Comment>> {
        let mut matching: Vec<Comment> = self
            .comments
            .iter()
            .filter(|c| c.video_id == video_id)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(matching
            .into_iter()
            .skip(skip as usize)
            .take(limit as usize)
            .collect())
    }

    async fn count_tweets_by_owner(&self, owner_id: Uuid) -> Result<i64> {
        Ok(self
            .tweets
            .iter()
            .filter(|t| t.owner_id == owner_id)
            .count() as i64)
    }

    async fn find_tweets_by_owner(
        &self,
        owner_id: Uuid,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<Tweet>> {
        let mut matching: Vec<Tweet> = self
            .tweets
            .iter()
            .filter(|t| t.owner_id == owner_id)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(matching
            .into_iter()
            .skip(skip as usize)
            .take(limit as usize)
            .collect())
    }

    async fn count_playlists_by_owner(&self, owner_id: Uuid) -> Result<i64> {
        Ok(self
            .playlists
            .iter()
            .filter(|p| p.owner_id == owner_id)
            .count() as i64)
    }

    async fn find_playlists_by_owner(
        &self,
        owner_id: Uuid,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<Playlist>> {
        let mut matching: Vec<Playlist> = self
            .playlists
            .iter()
            .filter(|p| p.owner_id == owner_id)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(matching
            .into_iter()
            .skip(skip as usize)
            .take(limit as usize)
            .collect())
    }

    async fn subscriptions_to_channel(&self, channel_id: Uuid) -> Result<Vec<Subscription>> {
        Ok(self
            .subscriptions
            .iter()
            .filter(|s| s.channel_id == channel_id)
            .cloned()
            .collect())
    }

    async fn subscriptions_of_subscriber(
        &self,
        subscriber_id: Uuid,
    ) -> Result<Vec<Subscription>> {
        Ok(self
            .subscriptions
            .iter()
            .filter(|s| s.subscriber_id == subscriber_id)
            .cloned()
            .collect())
    }

    async fn resolve_users(&self, ids: &[Uuid]) -> Result<HashMap<Uuid, User>> {
        Ok(self
            .users
            .iter()
            .filter(|u| ids.contains(&u.id))
            .map(|u| (u.id, u.clone()))
            .collect())
    }

    async fn resolve_videos(&self, ids: &[Uuid]) -> Result<HashMap<Uuid, Video>> {
        Ok(self
            .videos
            .iter()
            .filter(|v| ids.contains(&v.id))
            .map(|v| (v.id, v.clone()))
            .collect())
    }

    async fn watch_history(&self, user_id: Uuid) -> Result<Option<Vec<Uuid>>> {
        Ok(self
            .users
            .iter()
            .find(|u| u.id == user_id)
            .map(|u| u.watch_history.clone()))
    }
}

// ============================================
// Entity builders
// ============================================

pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

pub fn user(handle: &str) -> User {
    let now = base_time();
    User {
        id: Uuid::new_v4(),
        username: handle.to_lowercase(),
        full_name: format!("{} Fullname", handle),
        email: format!("{}@example.com", handle.to_lowercase()),
        avatar_url: Some(format!("https://cdn.example.com/avatars/{}.png", handle)),
        cover_image_url: None,
        password_hash: "argon2-hash".to_string(),
        refresh_token: None,
        watch_history: Vec::new(),
        created_at: now,
        updated_at: now,
    }
}

/// Video created `age_index` minutes after the base time, so creation order
/// is controllable from tests.
pub fn video(owner_id: Uuid, title: &str, age_index: i64) -> Video {
    let created_at = base_time() + Duration::minutes(age_index);
    Video {
        id: Uuid::new_v4(),
        owner_id,
        title: title.to_string(),
        description: format!("description of {}", title),
        video_url: format!("https://cdn.example.com/videos/{}.mp4", title),
        thumbnail_url: format!("https://cdn.example.com/thumbs/{}.jpg", title),
        duration_secs: 120,
        is_published: true,
        views: 0,
        created_at,
        updated_at: created_at,
    }
}

pub fn comment(video_id: Uuid, owner_id: Uuid, content: &str, age_index: i64) -> Comment {
    let created_at = base_time() + Duration::minutes(age_index);
    Comment {
        id: Uuid::new_v4(),
        video_id,
        owner_id,
        content: content.to_string(),
        created_at,
        updated_at: created_at,
    }
}

pub fn subscription(subscriber_id: Uuid, channel_id: Uuid) -> Subscription {
    Subscription {
        id: Uuid::new_v4(),
        subscriber_id,
        channel_id,
        created_at: base_time(),
    }
}
