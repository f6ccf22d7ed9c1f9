/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::fmt;
use todo_core::error::StoreError;
use todo_core::types::ErrorResponse;

#[derive(Debug)]
pub enum WebError {
    NotFound(String),
    Store(StoreError),
    JsonParsing(JsonRejection),
    PathParsing(PathRejection),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WebError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            WebError::Store(err) => write!(f, "{}", err),
            WebError::JsonParsing(err) => write!(f, "JSON parsing error: {}", err),
            WebError::PathParsing(err) => write!(f, "Path parsing error: {}", err),
        }
    }
}

impl std::error::Error for WebError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WebError::Store(err) => Some(err),
            WebError::JsonParsing(err) => Some(err),
            WebError::PathParsing(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for WebError {
    fn from(err: StoreError) -> Self {
        WebError::Store(err)
    }
}

impl From<JsonRejection> for WebError {
    fn from(err: JsonRejection) -> Self {
        WebError::JsonParsing(err)
    }
}

impl From<PathRejection> for WebError {
    fn from(err: PathRejection) -> Self {
        WebError::PathParsing(err)
    }
}

impl WebError {
    pub fn status(&self) -> StatusCode {
        match self {
            WebError::NotFound(_) | WebError::Store(_) => StatusCode::NOT_FOUND,
            WebError::JsonParsing(_) => StatusCode::BAD_REQUEST,
            // a path segment that is not an integer id names no route
            WebError::PathParsing(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            WebError::NotFound(msg) => msg,
            WebError::Store(err) => err.to_string(),
            WebError::JsonParsing(err) => format!("Invalid JSON: {}", err.body_text()),
            WebError::PathParsing(err) => {
                tracing::debug!("Rejected path: {}", err.body_text());
                "Not Found".to_string()
            }
        };

        let body = Json(ErrorResponse {
            message,
            code: status.as_u16(),
        });

        (status, body).into_response()
    }
}

pub type WebResult<T> = Result<T, WebError>;
