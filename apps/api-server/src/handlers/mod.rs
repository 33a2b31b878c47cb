//! HTTP handlers and route configuration.

mod graphql;
mod health;

use actix_web::{HttpResponse, error::InternalError, web};
use blog_shared::ErrorResponse;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        let body = ErrorResponse::bad_request(err.to_string());
        InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
    }))
    .service(
        web::resource("/graphql")
            .route(web::post().to(graphql::graphql_handler))
            .route(web::get().to(graphql::graphiql)),
    )
    .service(web::scope("/api").route("/health", web::get().to(health::health_check)));
}
