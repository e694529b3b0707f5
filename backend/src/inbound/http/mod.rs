//! HTTP inbound adapter exposing REST endpoints.

pub mod comments;
pub mod error;
pub mod filters;
pub mod plants;
pub mod state;
#[cfg(test)]
pub mod test_utils;

use actix_web::web;

pub use error::ApiResult;

/// Register every catalogue endpoint and extractor configuration on `cfg`.
///
/// Callers mount this under their API prefix, e.g. `/api/v1`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(error::json_config())
        .app_data(error::query_config())
        .service(plants::list_plants)
        .service(plants::create_plant)
        .service(comments::list_comments)
        .service(comments::add_comment)
        .service(plants::get_plant)
        .service(plants::update_plant)
        .service(plants::delete_plant)
        .service(filters::list_filter_options)
        .service(filters::add_filter_option)
        .service(filters::delete_filter_option);
}
