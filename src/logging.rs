//! Middleware for logging requests and responses.

use std::fmt::Debug;

use axum::{
    body::Body,
    extract::Request,
    middleware::Next,
    response::Response,
};

/// The number of bytes of a request or response body to log at the `info` level.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level.
/// If a body is longer than [LOG_BODY_LENGTH_LIMIT] bytes, it is truncated
/// and the full body is logged at the `debug` level.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let body_text = read_body(body, "request").await;
    log_message("Received request", &parts, &body_text);

    let response = next.run(Request::from_parts(parts, body_text.into())).await;

    let (parts, body) = response.into_parts();
    let body_text = read_body(body, "response").await;
    log_message("Sending response", &parts, &body_text);

    Response::from_parts(parts, body_text.into())
}

/// Read the whole body as text. A body that cannot be read is logged and
/// replaced with an empty one.
async fn read_body(body: Body, kind: &str) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .inspect_err(|error| tracing::warn!("could not read {kind} body: {error}"))
        .unwrap_or_default();

    String::from_utf8_lossy(&bytes).into_owned()
}

fn log_message(label: &str, parts: &impl Debug, body: &str) {
    if body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::info!(
            "{label}: {parts:#?}\nbody: {}...",
            truncate(body, LOG_BODY_LENGTH_LIMIT)
        );
        tracing::debug!("{label}, full body: {body:?}");
    } else {
        tracing::info!("{label}: {parts:#?}\nbody: {body:?}");
    }
}

/// Cut `body` to at most `limit` bytes without splitting a character.
///
/// Transfer statuses are Arabic, so bodies often contain multi-byte characters.
fn truncate(body: &str, limit: usize) -> &str {
    if body.len() <= limit {
        return body;
    }

    let end = body
        .char_indices()
        .map(|(index, _)| index)
        .take_while(|&index| index <= limit)
        .last()
        .unwrap_or(0);

    &body[..end]
}
