/// Video listing endpoint
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::Result;
use crate::handlers::AppState;
use crate::services::pagination::DEFAULT_LIMIT;
use crate::services::PageRequest;
use crate::store::{SortDirection, VideoFilter, VideoSort, VideoSortField};

#[derive(Debug, Deserialize)]
pub struct VideoListParams {
    pub owner_id: Option<Uuid>,
    /// Free-text search over title and description
    pub query: Option<String>,
    pub published: Option<bool>,
    /// `created_at` (default) or `views`
    pub sort_by: Option<String>,
    /// `asc` (default) or `desc`
    pub sort_type: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl VideoListParams {
    fn sort(&self) -> VideoSort {
        let field = match self.sort_by.as_deref() {
            Some("views") => VideoSortField::Views,
            _ => VideoSortField::CreatedAt,
        };
        let direction = match self.sort_type.as_deref() {
            Some("desc") | Some("des") => SortDirection::Descending,
            _ => SortDirection::Ascending,
        };
        VideoSort { field, direction }
    }
}

/// List videos with optional owner/search filters, sorted and paginated
pub async fn list_videos(
    state: web::Data<AppState>,
    params: web::Query<VideoListParams>,
) -> Result<HttpResponse> {
    let filter = VideoFilter {
        owner_id: params.owner_id,
        search: params.query.clone().filter(|q| !q.trim().is_empty()),
        published_only: params.published.unwrap_or(false),
    };
    let request = PageRequest::new(
        params.page.unwrap_or(1),
        params.limit.unwrap_or(DEFAULT_LIMIT),
    );

    let page = state
        .listings
        .list_videos(filter, params.sort(), request)
        .await?;

    Ok(HttpResponse::Ok().json(page))
}
