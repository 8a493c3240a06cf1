use axum::{
    body::Body,
    http::{StatusCode, header::CONTENT_TYPE},
    response::Response,
};
use axum_htmx::HX_REDIRECT;

#[track_caller]
pub(crate) fn assert_status_ok(response: &Response<Body>) {
    assert_eq!(response.status(), StatusCode::OK);
}

#[track_caller]
pub(crate) fn assert_content_type(response: &Response<Body>, content_type: &str) {
    let got = response
        .headers()
        .get(CONTENT_TYPE)
        .expect("content-type header missing");

    assert_eq!(got, content_type);
}

/// Assert that htmx will navigate the browser to `endpoint`.
#[track_caller]
pub(crate) fn assert_hx_redirect(response: &Response<Body>, endpoint: &str) {
    let got = response
        .headers()
        .get(HX_REDIRECT)
        .expect("Headers missing hx-redirect")
        .to_str()
        .expect("Could not convert to str");

    assert_eq!(got, endpoint);
}
