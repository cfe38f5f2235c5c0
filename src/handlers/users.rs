/// Channel profile and watch-history endpoints
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::Result;
use crate::handlers::AppState;

#[derive(Debug, Deserialize)]
pub struct ChannelProfileParams {
    /// Handle of the requesting user; absent for anonymous viewers.
    /// Normally injected by the auth layer, surfaced here as a query
    /// parameter because token handling lives outside this service.
    pub viewer: Option<String>,
}

/// Denormalized channel profile with subscriber counts
pub async fn channel_profile(
    state: web::Data<AppState>,
    handle: web::Path<String>,
    params: web::Query<ChannelProfileParams>,
) -> Result<HttpResponse> {
    let profile = state
        .channels
        .channel_profile(&handle, params.viewer.as_deref())
        .await?;

    Ok(HttpResponse::Ok().json(profile))
}

/// A user's watch history, most recent first, with owner info attached
pub async fn watch_history(
    state: web::Data<AppState>,
    user_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let history = state.history.watch_history(*user_id).await?;

    Ok(HttpResponse::Ok().json(history))
}
