//! Request ID middleware for correlating logs with requests.
//!
//! Each request gets a UUID v4. It is handed to handlers as a `RequestId`
//! extension, returned to the caller in `x-request-id`, and recorded on the
//! `request` span so that a load run's events can be matched to the client
//! that asked for it.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use http::header::{HeaderName, HeaderValue};
use tracing::Instrument;
use uuid::Uuid;

/// Response header carrying the request ID
pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Request ID, available to handlers through request extensions.
#[derive(Clone, Copy, Debug)]
pub struct RequestId(pub Uuid);

impl RequestId {
    fn header_value(&self) -> HeaderValue {
        let mut buf = Uuid::encode_buffer();
        HeaderValue::from_str(self.0.hyphenated().encode_lower(&mut buf))
            .unwrap_or_else(|_| HeaderValue::from_static("invalid"))
    }
}

/// Outermost layer: assigns the request ID and times the request.
pub async fn request_id_layer(mut request: Request, next: Next) -> Response {
    let id = RequestId(Uuid::new_v4());
    let span = tracing::info_span!(
        "request",
        request_id = %id.0,
        method = %request.method(),
        path = %request.uri().path(),
        duration_ms = tracing::field::Empty,
    );
    request.extensions_mut().insert(id);

    let start = Instant::now();
    let mut response = next.run(request).instrument(span.clone()).await;
    let duration_ms = start.elapsed().as_millis() as u64;

    response
        .headers_mut()
        .insert(X_REQUEST_ID, id.header_value());

    span.record("duration_ms", duration_ms);
    span.in_scope(|| {
        tracing::info!(
            status = response.status().as_u16(),
            duration_ms,
            "Request completed"
        );
    });

    response
}
