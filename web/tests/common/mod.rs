/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

#![allow(dead_code)]

use axum_test::TestServer;
use serde_json::{Value, json};
use std::sync::Arc;
use todo_core::logging::LogFormat;
use todo_core::types::*;

pub fn create_mock_cli() -> Cli {
    Cli {
        log_level: "debug".to_string(),
        log_format: LogFormat::Compact,
        ip: "127.0.0.1".to_string(),
        port: 3000,
    }
}

pub fn create_mock_state() -> Arc<ServerState> {
    Arc::new(ServerState::new(create_mock_cli()))
}

pub fn create_test_server() -> (TestServer, Arc<ServerState>) {
    let state = create_mock_state();
    let server = TestServer::new(web::create_router(Arc::clone(&state))).unwrap();
    (server, state)
}

pub async fn create_user(server: &TestServer, username: &str) -> Value {
    server
        .post("/user/")
        .json(&json!({ "username": username }))
        .await
        .json::<Value>()
}

pub async fn create_job(server: &TestServer, user_id: i64, name: &str) -> Value {
    server
        .post("/jobs/")
        .json(&json!({ "name": name, "user_id": user_id, "description": "d" }))
        .await
        .json::<Value>()
}

pub async fn get_user(server: &TestServer, user_id: i64) -> Value {
    let users = server.get("/user/").await.json::<Value>();
    users[user_id.to_string()].clone()
}
