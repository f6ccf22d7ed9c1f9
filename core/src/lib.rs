/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod consts;
pub mod error;
pub mod input;
pub mod jobs;
pub mod logging;
pub mod models;
pub mod store;
pub mod types;
pub mod users;

use anyhow::Context;
use clap::Parser;
use logging::init_logging;
use std::sync::Arc;
use types::*;

pub async fn init_state() -> anyhow::Result<Arc<ServerState>> {
    let cli = Cli::parse();

    init_logging(&cli).context("Failed to initialize logging")?;
    tracing::info!("Starting Todo Server on {}:{}", cli.ip, cli.port);

    Ok(Arc::new(ServerState::new(cli)))
}
