//! Filter vocabulary HTTP handlers.
//!
//! ```text
//! GET    /api/v1/filters/{category}
//! POST   /api/v1/filters/{category}
//! DELETE /api/v1/filters/{category}/{value}
//! ```
//!
//! `category` is one of `locations`, `climates`, `uses`, or `seasons`. Seasons
//! are read-only.

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::{Error, FilterCategory, OptionCategory};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Request payload for registering a filter value.
#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct NewOptionRequest {
    pub value: String,
}

fn parse_category(raw: &str) -> Result<FilterCategory, Error> {
    raw.parse().map_err(|_| {
        Error::invalid_request(format!("unknown filter category: {raw}")).with_details(json!({
            "field": "category",
            "value": raw,
            "code": "unknown_category",
        }))
    })
}

fn editable_category(raw: &str) -> Result<OptionCategory, Error> {
    match parse_category(raw)? {
        FilterCategory::Dynamic(category) => Ok(category),
        FilterCategory::Seasons => Err(Error::invalid_request("seasons cannot be edited")
            .with_details(json!({
                "field": "category",
                "value": raw,
                "code": "read_only_category",
            }))),
    }
}

/// Sorted, unique options for a filter control.
#[get("/filters/{category}")]
pub async fn list_filter_options(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let category = parse_category(&path)?;
    let options = state.catalogue.filter_options(category).await?;
    Ok(HttpResponse::Ok().json(options))
}

/// Register a user-supplied filter value.
#[post("/filters/{category}")]
pub async fn add_filter_option(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<NewOptionRequest>,
) -> ApiResult<HttpResponse> {
    let category = editable_category(&path)?;
    state
        .catalogue_commands
        .add_option(category, &payload.value)
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Remove a user-supplied filter value.
#[delete("/filters/{category}/{value}")]
pub async fn delete_filter_option(
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
) -> ApiResult<HttpResponse> {
    let (category, value) = path.into_inner();
    let category = editable_category(&category)?;
    state
        .catalogue_commands
        .delete_option(category, &value)
        .await?;
    Ok(HttpResponse::NoContent().finish())
}
