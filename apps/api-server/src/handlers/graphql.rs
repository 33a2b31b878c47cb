//! GraphQL endpoint and GraphiQL page.

use actix_web::{HttpResponse, http::StatusCode, web};
use juniper::http::GraphQLRequest;
use juniper::http::graphiql::graphiql_source;

use crate::graphql::GraphQLContext;
use crate::middleware::auth::RequestIdentity;
use crate::state::AppState;

/// POST /graphql
pub async fn graphql_handler(
    state: web::Data<AppState>,
    identity: RequestIdentity,
    body: web::Json<GraphQLRequest>,
) -> HttpResponse {
    let context = GraphQLContext::new(state.service.clone(), identity.into_inner());
    let response = body.execute(&*state.schema, &context).await;

    let status = if response.is_ok() {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };

    HttpResponse::build(status).json(response)
}

/// GET /graphql
pub async fn graphiql(state: web::Data<AppState>) -> HttpResponse {
    if !state.graphiql {
        return HttpResponse::NotFound().finish();
    }

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(graphiql_source("/graphql", None))
}
