/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use std::sync::Arc;
use todo_core::init_state;

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    let state = init_state().await?;

    if let Err(e) = web::serve_web(Arc::clone(&state)).await {
        tracing::error!("Web server stopped: {}", e);
        return Err(e.into());
    }

    Ok(())
}
