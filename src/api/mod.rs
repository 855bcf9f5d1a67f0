pub mod bias;
pub mod error;
pub mod health;
pub mod openapi;

use actix_web::web;

/// JSON body extractor settings shared by all routes
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(error::json_error_handler)
}
