/// Comment listing endpoint
use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::error::Result;
use crate::handlers::{AppState, PageParams};

/// List comments for a video, newest first, paginated
pub async fn list_video_comments(
    state: web::Data<AppState>,
    video_id: web::Path<Uuid>,
    params: web::Query<PageParams>,
) -> Result<HttpResponse> {
    let page = state
        .listings
        .list_comments(*video_id, params.to_request())
        .await?;

    Ok(HttpResponse::Ok().json(page))
}
