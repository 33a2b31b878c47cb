//! Request identity extractor.

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header, web};
use std::future::{Ready, ready};

use blog_core::CallerIdentity;
use blog_core::identity::resolve_identity;

use crate::state::AppState;

/// The caller behind a request, resolved once from its `Authorization` header.
///
/// Never rejects a request: a missing or invalid token yields an anonymous
/// identity and each operation decides whether that is acceptable.
#[derive(Debug, Clone, Copy)]
pub struct RequestIdentity(pub CallerIdentity);

impl RequestIdentity {
    pub fn into_inner(self) -> CallerIdentity {
        self.0
    }
}

impl FromRequest for RequestIdentity {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let Some(state) = req.app_data::<web::Data<AppState>>() else {
            tracing::error!("AppState not found in app data");
            return ready(Ok(Self(CallerIdentity::Anonymous)));
        };

        let header = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok());

        let identity = resolve_identity(header, state.service.tokens().as_ref());
        ready(Ok(Self(identity)))
    }
}
