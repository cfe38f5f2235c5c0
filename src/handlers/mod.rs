/// HTTP handlers - thin glue between actix-web and the aggregation services
pub mod comments;
pub mod health;
pub mod playlists;
pub mod tweets;
pub mod users;
pub mod videos;

use std::sync::Arc;

use actix_web::web;

use crate::services::pagination::DEFAULT_LIMIT;
use crate::services::{ChannelService, ListingService, PageRequest, WatchHistoryService};
use crate::store::DocumentStore;

/// Shared application state, constructed once at startup
#[derive(Clone)]
pub struct AppState {
    pub channels: ChannelService,
    pub history: WatchHistoryService,
    pub listings: ListingService,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            channels: ChannelService::new(store.clone()),
            history: WatchHistoryService::new(store.clone()),
            listings: ListingService::new(store),
        }
    }
}

/// Route table for the service
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/healthz", web::get().to(health::healthz)).service(
        web::scope("/api/v1")
            .route("/videos", web::get().to(videos::list_videos))
            .route(
                "/videos/{video_id}/comments",
                web::get().to(comments::list_video_comments),
            )
            .route("/channels/{handle}", web::get().to(users::channel_profile))
            .route(
                "/users/{user_id}/history",
                web::get().to(users::watch_history),
            )
            .route("/users/{user_id}/tweets", web::get().to(tweets::list_tweets))
            .route(
                "/users/{user_id}/playlists",
                web::get().to(playlists::list_playlists),
            ),
    );
}

/// Common page/limit query parameters
#[derive(Debug, serde::Deserialize)]
pub struct PageParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl PageParams {
    pub fn to_request(&self) -> PageRequest {
        PageRequest::new(self.page.unwrap_or(1), self.limit.unwrap_or(DEFAULT_LIMIT))
    }
}
