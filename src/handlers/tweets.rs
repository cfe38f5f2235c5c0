/// Tweet listing endpoint
use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::error::Result;
use crate::handlers::{AppState, PageParams};

/// List a user's tweets, newest first, paginated
pub async fn list_tweets(
    state: web::Data<AppState>,
    user_id: web::Path<Uuid>,
    params: web::Query<PageParams>,
) -> Result<HttpResponse> {
    let page = state
        .listings
        .list_tweets(*user_id, params.to_request())
        .await?;

    Ok(HttpResponse::Ok().json(page))
}
