/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::WebResult;
use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use todo_core::models::*;
use todo_core::types::ServerState;

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeUserRequest {
    pub username: String,
    #[serde(default)]
    pub jobs: i64,
    #[serde(default)]
    pub jobs_complete: i64,
}

impl From<MakeUserRequest> for NewUser {
    fn from(body: MakeUserRequest) -> Self {
        NewUser {
            username: body.username,
            jobs: body.jobs,
            jobs_complete: body.jobs_complete,
        }
    }
}

pub async fn get(state: State<Arc<ServerState>>) -> WebResult<Json<Users>> {
    let store = state.store.lock().await;
    Ok(Json(store.users().clone()))
}

pub async fn post(
    state: State<Arc<ServerState>>,
    body: Result<Json<MakeUserRequest>, JsonRejection>,
) -> WebResult<(StatusCode, Json<Record<User>>)> {
    let Json(body) = body?;
    let user = state.store.lock().await.create_user(body.into());

    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn delete(
    state: State<Arc<ServerState>>,
    user_id: Result<Path<Id>, PathRejection>,
) -> WebResult<Json<Record<User>>> {
    let Path(user_id) = user_id?;
    let user = state.store.lock().await.delete_user(user_id)?;

    Ok(Json(user))
}
