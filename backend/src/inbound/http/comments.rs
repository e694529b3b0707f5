//! Comment HTTP handlers.
//!
//! ```text
//! GET  /api/v1/plants/{id}/comments
//! POST /api/v1/plants/{id}/comments
//! ```

use actix_web::{HttpResponse, get, post, web};

use crate::domain::{CommentDraft, PlantId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// List comments on a plant, newest first.
#[get("/plants/{id}/comments")]
pub async fn list_comments(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let plant_id = PlantId::new(path.into_inner());
    let comments = state.catalogue.list_comments(&plant_id).await?;
    Ok(HttpResponse::Ok().json(comments))
}

/// Attach a comment to a plant.
#[post("/plants/{id}/comments")]
pub async fn add_comment(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<CommentDraft>,
) -> ApiResult<HttpResponse> {
    let plant_id = PlantId::new(path.into_inner());
    let comment = state
        .catalogue_commands
        .add_comment(&plant_id, payload.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(comment))
}
