/// PostgreSQL implementation of the store port
use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Comment, Playlist, Subscription, Tweet, User, Video};
use crate::store::{
    DocumentStore, SortDirection, VideoFilter, VideoSort, VideoSortField,
};

const USER_COLUMNS: &str = "id, username, full_name, email, avatar_url, cover_image_url, \
     password_hash, refresh_token, watch_history, created_at, updated_at";

const VIDEO_COLUMNS: &str = "id, owner_id, title, description, video_url, thumbnail_url, \
     duration_secs, is_published, views, created_at, updated_at";

/// One WHERE fragment shared by the count query and the slice query of a
/// video listing, so both passes apply identical predicates.
const VIDEO_FILTER_WHERE: &str = "($1::uuid IS NULL OR owner_id = $1) \
     AND ($2::text IS NULL OR title ILIKE '%' || $2 || '%' OR description ILIKE '%' || $2 || '%') \
     AND (NOT $3 OR is_published)";

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl VideoSort {
    /// Column name and direction keywords for the ORDER BY clause.
    /// Values are fixed identifiers, never caller input.
    fn order_by(self) -> (&'static str, &'static str) {
        let column = match self.field {
            VideoSortField::CreatedAt => "created_at",
            VideoSortField::Views => "views",
        };
        let direction = match self.direction {
            SortDirection::Ascending => "ASC",
            SortDirection::Descending => "DESC",
        };
        (column, direction)
    }
}

#[async_trait]
impl DocumentStore for PgStore {
    async fn find_user_by_handle(&self, handle: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = LOWER($1)"
        ))
        .bind(handle)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn count_videos(&self, filter: &VideoFilter) -> Result<i64> {
        let count: i64 = sqlx::query_scalar(&format!(
            "SELECT COUNT(*) FROM videos WHERE {VIDEO_FILTER_WHERE}"
        ))
        .bind(filter.owner_id)
        .bind(filter.search.as_deref())
        .bind(filter.published_only)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    async fn find_videos(
        &self,
        filter: &VideoFilter,
        sort: VideoSort,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<Video>> {
        let (column, direction) = sort.order_by();

        let videos = sqlx::query_as::<_, Video>(&format!(
            "SELECT {VIDEO_COLUMNS} FROM videos WHERE {VIDEO_FILTER_WHERE} \
             ORDER BY {column} {direction} LIMIT $4 OFFSET $5"
        ))
        .bind(filter.owner_id)
        .bind(filter.search.as_deref())
        .bind(filter.published_only)
        .bind(limit)
        .bind(skip)
        .fetch_all(&self.pool)
        .await?;

        Ok(videos)
    }

    async fn count_comments_for_video(&self, video_id: Uuid) -> Result<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM comments WHERE video_id = $1")
                .bind(video_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(count)
    }

    async fn find_comments_for_video(
        &self,
        video_id: Uuid,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<Comment>> {
        let comments = sqlx::query_as::<_, Comment>(
            r#"
            SELECT id, video_id, owner_id, content, created_at, updated_at
            FROM comments
            WHERE video_id = $1
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(video_id)
        .bind(limit)
        .bind(skip)
        .fetch_all(&self.pool)
        .await?;

        Ok(comments)
    }

    async fn count_tweets_by_owner(&self, owner_id: Uuid) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tweets WHERE owner_id = $1")
            .bind(owner_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn find_tweets_by_owner(
        &self,
        owner_id: Uuid,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<Tweet>> {
        let tweets = sqlx::query_as::<_, Tweet>(
            r#"
            SELECT id, owner_id, content, created_at, updated_at
            FROM tweets
            WHERE owner_id = $1
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(owner_id)
        .bind(limit)
        .bind(skip)
        .fetch_all(&self.pool)
        .await?;

        Ok(tweets)
    }

    async fn count_playlists_by_owner(&self, owner_id: Uuid) -> Result<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM playlists WHERE owner_id = $1")
                .bind(owner_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(count)
    }

    async fn find_playlists_by_owner(
        &self,
        owner_id: Uuid,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<Playlist>> {
        let playlists = sqlx::query_as::<_, Playlist>(
            r#"
            SELECT id, owner_id, name, description, video_ids, created_at, updated_at
            FROM playlists
            WHERE owner_id = $1
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(owner_id)
        .bind(limit)
        .bind(skip)
        .fetch_all(&self.pool)
        .await?;

        Ok(playlists)
    }

    async fn subscriptions_to_channel(&self, channel_id: Uuid) -> Result<Vec<Subscription>> {
        let edges = sqlx::query_as::<_, Subscription>(
            r#"
            SELECT id, subscriber_id, channel_id, created_at
            FROM subscriptions
            WHERE channel_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(channel_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(edges)
    }

    async fn subscriptions_of_subscriber(
        &self,
        subscriber_id: Uuid,
    ) -> Result<Vec<Subscription>> {
        let edges = sqlx::query_as::<_, Subscription>(
            r#"
            SELECT id, subscriber_id, channel_id, created_at
            FROM subscriptions
            WHERE subscriber_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(subscriber_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(edges)
    }

    async fn resolve_users(&self, ids: &[Uuid]) -> Result<HashMap<Uuid, User>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = ANY($1)"
        ))
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(users.into_iter().map(|u| (u.id, u)).collect())
    }

    async fn resolve_videos(&self, ids: &[Uuid]) -> Result<HashMap<Uuid, Video>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let videos = sqlx::query_as::<_, Video>(&format!(
            "SELECT {VIDEO_COLUMNS} FROM videos WHERE id = ANY($1)"
        ))
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(videos.into_iter().map(|v| (v.id, v)).collect())
    }

    async fn watch_history(&self, user_id: Uuid) -> Result<Option<Vec<Uuid>>> {
        let history: Option<Vec<Uuid>> =
            sqlx::query_scalar("SELECT watch_history FROM users WHERE id = $1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(history)
    }
}
