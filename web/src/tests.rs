/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::WebError;
use axum::body::to_bytes;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use todo_core::error::StoreError;
use todo_core::types::ErrorResponse;

async fn render(err: WebError) -> (StatusCode, ErrorResponse) {
    let response = err.into_response();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_store_error_renders_not_found() {
    let (status, body) = render(StoreError::UserNotFound(7).into()).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        ErrorResponse {
            message: "Not found user with id = 7".to_string(),
            code: 404,
        }
    );
}

#[tokio::test]
async fn test_job_error_renders_not_found() {
    let (status, body) = render(WebError::Store(StoreError::JobNotFound(2))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.message, "Not found job with id = 2");
    assert_eq!(body.code, 404);
}

#[tokio::test]
async fn test_not_found_code_mirrors_status() {
    let (status, body) = render(WebError::NotFound("Not Found".to_string())).await;

    assert_eq!(status.as_u16(), body.code);
    assert_eq!(body.message, "Not Found");
}

#[test]
fn test_error_display() {
    let err = WebError::Store(StoreError::JobNotFound(4));
    assert_eq!(err.to_string(), "Not found job with id = 4");
    assert!(std::error::Error::source(&err).is_some());

    let err = WebError::NotFound("gone".to_string());
    assert_eq!(err.to_string(), "Not Found: gone");
    assert!(std::error::Error::source(&err).is_none());
}
