/// Paged listing queries over the store port.
///
/// Each listing couples its filter to both halves of the pagination contract:
/// the `PagedQuery` value holds one filter and derives both `count` and
/// `fetch` from it.
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Comment, Playlist, Tweet, Video};
use crate::services::pagination::{paginate, Page, PageRequest, PagedQuery};
use crate::store::{DocumentStore, VideoFilter, VideoSort};

/// Video listing filtered by owner/search/publication state
struct VideoSearch<'a> {
    store: &'a dyn DocumentStore,
    filter: VideoFilter,
    sort: VideoSort,
}

#[async_trait]
impl PagedQuery for VideoSearch<'_> {
    type Item = Video;

    async fn count(&self) -> Result<i64> {
        self.store.count_videos(&self.filter).await
    }

    async fn fetch(&self, skip: i64, limit: i64) -> Result<Vec<Video>> {
        self.store
            .find_videos(&self.filter, self.sort, skip, limit)
            .await
    }
}

/// Comments of one video, newest first
struct VideoComments<'a> {
    store: &'a dyn DocumentStore,
    video_id: Uuid,
}

#[async_trait]
impl PagedQuery for VideoComments<'_> {
    type Item = Comment;

    async fn count(&self) -> Result<i64> {
        self.store.count_comments_for_video(self.video_id).await
    }

    async fn fetch(&self, skip: i64, limit: i64) -> Result<Vec<Comment>> {
        self.store
            .find_comments_for_video(self.video_id, skip, limit)
            .await
    }
}

/// Tweets of one user, newest first
struct OwnerTweets<'a> {
    store: &'a dyn DocumentStore,
    owner_id: Uuid,
}

#[async_trait]
impl PagedQuery for OwnerTweets<'_> {
    type Item = Tweet;

    async fn count(&self) -> Result<i64> {
        self.store.count_tweets_by_owner(self.owner_id).await
    }

    async fn fetch(&self, skip: i64, limit: i64) -> Result<Vec<Tweet>> {
        self.store
            .find_tweets_by_owner(self.owner_id, skip, limit)
            .await
    }
}

/// Playlists of one user, newest first
struct OwnerPlaylists<'a> {
    store: &'a dyn DocumentStore,
    owner_id: Uuid,
}

#[async_trait]
impl PagedQuery for OwnerPlaylists<'_> {
    type Item = Playlist;

    async fn count(&self) -> Result<i64> {
        self.store.count_playlists_by_owner(self.owner_id).await
    }

    async fn fetch(&self, skip: i64, limit: i64) -> Result<Vec<Playlist>> {
        self.store
            .find_playlists_by_owner(self.owner_id, skip, limit)
            .await
    }
}

#[derive(Clone)]
pub struct ListingService {
    store: Arc<dyn DocumentStore>,
}

impl ListingService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn list_videos(
        &self,
        filter: VideoFilter,
        sort: VideoSort,
        request: PageRequest,
    ) -> Result<Page<Video>> {
        let query = VideoSearch {
            store: self.store.as_ref(),
            filter,
            sort,
        };
        paginate(&query, request).await
    }

    pub async fn list_comments(
        &self,
        video_id: Uuid,
        request: PageRequest,
    ) -> Result<Page<Comment>> {
        let query = VideoComments {
            store: self.store.as_ref(),
            video_id,
        };
        paginate(&query, request).await
    }

    pub async fn list_tweets(&self, owner_id: Uuid, request: PageRequest) -> Result<Page<Tweet>> {
        let query = OwnerTweets {
            store: self.store.as_ref(),
            owner_id,
        };
        paginate(&query, request).await
    }

    pub async fn list_playlists(
        &self,
        owner_id: Uuid,
        request: PageRequest,
    ) -> Result<Page<Playlist>> {
        let query = OwnerPlaylists {
            store: self.store.as_ref(),
            owner_id,
        };
        paginate(&query, request).await
    }
}
