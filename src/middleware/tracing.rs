// ABOUTME: Request tracing middleware for correlation and structured logging
// ABOUTME: Assigns request IDs, opens an http_request span per request and exposes the ID to handlers

use std::convert::Infallible;

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::{HeaderMap, Request};
use tower_http::request_id::{MakeRequestId, RequestId};
use tracing::Span;
use uuid::Uuid;

use crate::constants::headers::REQUEST_ID as REQUEST_ID_HEADER;

const REQUEST_ID_LENGTH: usize = 10;

/// Generates short hex correlation tokens for requests that arrive without one
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestHexId;

impl MakeRequestId for MakeRequestHexId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let token = generate_request_id();
        token.parse().ok().map(RequestId::new)
    }
}

/// Fresh 10-character hex correlation token
#[must_use]
pub fn generate_request_id() -> String {
    let mut token = Uuid::new_v4().simple().to_string();
    token.truncate(REQUEST_ID_LENGTH);
    token
}

fn request_id_from(headers: &HeaderMap) -> Option<String> {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(ToOwned::to_owned)
}

/// Request context that flows through the handler
///
/// Only used to tag error responses; the lifecycle service never sees it.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    /// Correlation id, absent when the request-id layer is not installed
    pub request_id: Option<String>,
}

#[async_trait]
impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self {
            request_id: request_id_from(&parts.headers),
        })
    }
}

/// Create a tracing span for HTTP requests
pub fn create_request_span<B>(request: &Request<B>) -> Span {
    let request_id = request_id_from(request.headers()).unwrap_or_default();
    tracing::info_span!(
        "http_request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id,
    )
}
