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
pub struct MakeJobRequest {
    pub name: String,
    pub user_id: Id,
    pub description: String,
    #[serde(default)]
    pub complete: bool,
}

/// Only the fields present in the body are applied.
#[derive(Serialize, Deserialize, Debug)]
pub struct PatchJobRequest {
    pub id: Id,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complete: Option<bool>,
}

impl From<MakeJobRequest> for NewJob {
    fn from(body: MakeJobRequest) -> Self {
        NewJob {
            name: body.name,
            user_id: body.user_id,
            description: body.description,
            complete: body.complete,
        }
    }
}

impl From<PatchJobRequest> for JobPatch {
    fn from(body: PatchJobRequest) -> Self {
        JobPatch {
            id: body.id,
            name: body.name,
            description: body.description,
            complete: body.complete,
        }
    }
}

pub async fn get(state: State<Arc<ServerState>>) -> WebResult<Json<Jobs>> {
    let store = state.store.lock().await;
    Ok(Json(store.jobs().clone()))
}

pub async fn get_for_user(
    state: State<Arc<ServerState>>,
    user_id: Result<Path<Id>, PathRejection>,
) -> WebResult<Json<Jobs>> {
    let Path(user_id) = user_id?;
    let jobs = state.store.lock().await.jobs_for_user(user_id)?;

    Ok(Json(jobs))
}

pub async fn post(
    state: State<Arc<ServerState>>,
    body: Result<Json<MakeJobRequest>, JsonRejection>,
) -> WebResult<(StatusCode, Json<Record<Job>>)> {
    let Json(body) = body?;
    let job = state.store.lock().await.create_job(body.into())?;

    Ok((StatusCode::CREATED, Json(job)))
}

pub async fn put(
    state: State<Arc<ServerState>>,
    body: Result<Json<PatchJobRequest>, JsonRejection>,
) -> WebResult<Json<Record<Job>>> {
    let Json(body) = body?;
    let job = state.store.lock().await.update_job(body.into())?;

    Ok(Json(job))
}

pub async fn delete(
    state: State<Arc<ServerState>>,
    job_id: Result<Path<Id>, PathRejection>,
) -> WebResult<Json<Record<Job>>> {
    let Path(job_id) = job_id?;
    let job = state.store.lock().await.delete_job(job_id)?;

    Ok(Json(job))
}
