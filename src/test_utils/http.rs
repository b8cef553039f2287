use std::marker::PhantomData;

use axum::{Json, body::Body, http::StatusCode, response::Response};
use axum_extra::extract::WithRejection;
use serde::de::DeserializeOwned;

use crate::Error;

#[track_caller]
pub(crate) fn assert_status(response: &Response<Body>, status: StatusCode) {
    assert_eq!(response.status(), status);
}

#[track_caller]
pub(crate) fn assert_content_type(response: &Response<Body>, content_type: &str) {
    let content_type_header = response
        .headers()
        .get("content-type")
        .expect("content-type header missing");
    assert_eq!(content_type_header, content_type);
}

/// Read the body of `response` as JSON.
pub(crate) async fn parse_json<T: DeserializeOwned>(response: Response<Body>) -> T {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("could not read response body");

    serde_json::from_slice(&body).expect("response body is not the expected JSON")
}

/// Wrap `value` the way the JSON body extractor hands it to a handler.
pub(crate) fn json_body<T>(value: T) -> WithRejection<Json<T>, Error> {
    WithRejection(Json(value), PhantomData)
}
