//! Plant HTTP handlers.
//!
//! ```text
//! GET    /api/v1/plants?searchTerm=&location=&climate=&season=&uses=
//! GET    /api/v1/plants/{id}
//! POST   /api/v1/plants
//! PATCH  /api/v1/plants/{id}
//! DELETE /api/v1/plants/{id}
//! ```

use actix_web::{HttpResponse, delete, get, patch, post, web};

use crate::domain::{Error, PlantDraft, PlantFilter, PlantId, PlantPatch};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// List plants matching the query filters.
#[get("/plants")]
pub async fn list_plants(
    state: web::Data<HttpState>,
    filter: web::Query<PlantFilter>,
) -> ApiResult<HttpResponse> {
    let plants = state.catalogue.list_plants(&filter).await?;
    Ok(HttpResponse::Ok().json(plants))
}

/// Fetch one plant.
#[get("/plants/{id}")]
pub async fn get_plant(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = PlantId::new(path.into_inner());
    let plant = state
        .catalogue
        .get_plant(&id)
        .await?
        .ok_or_else(|| Error::not_found(format!("plant {id} not found")))?;
    Ok(HttpResponse::Ok().json(plant))
}

/// Create a plant.
#[post("/plants")]
pub async fn create_plant(
    state: web::Data<HttpState>,
    payload: web::Json<PlantDraft>,
) -> ApiResult<HttpResponse> {
    let plant = state
        .catalogue_commands
        .create_plant(payload.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(plant))
}

/// Merge a partial update over a plant.
#[patch("/plants/{id}")]
pub async fn update_plant(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<PlantPatch>,
) -> ApiResult<HttpResponse> {
    let id = PlantId::new(path.into_inner());
    let plant = state
        .catalogue_commands
        .update_plant(&id, payload.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(plant))
}

/// Delete a plant and its comments.
#[delete("/plants/{id}")]
pub async fn delete_plant(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = PlantId::new(path.into_inner());
    state.catalogue_commands.delete_plant(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}
