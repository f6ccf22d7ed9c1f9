/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod endpoints;
pub mod error;

#[cfg(test)]
mod tests;

use axum::Router;
use axum::routing::{delete, get};
use std::sync::Arc;
use todo_core::input::url_to_addr;
use todo_core::types::ServerState;
use tower_http::trace::TraceLayer;

pub fn create_router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/", get(endpoints::get_index))
        .route("/health", get(endpoints::get_health))
        .route(
            "/user/",
            get(endpoints::user::get).post(endpoints::user::post),
        )
        .route("/user/{id}", delete(endpoints::user::delete))
        .route(
            "/jobs/",
            get(endpoints::jobs::get)
                .post(endpoints::jobs::post)
                .put(endpoints::jobs::put),
        )
        .route("/jobs/{id}/", get(endpoints::jobs::get_for_user))
        .route("/jobs/{id}", delete(endpoints::jobs::delete))
        .fallback(endpoints::handle_404)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve_web(state: Arc<ServerState>) -> std::io::Result<()> {
    let addr = url_to_addr(&state.cli.ip, state.cli.port)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;
    let app = create_router(Arc::clone(&state));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await
}
