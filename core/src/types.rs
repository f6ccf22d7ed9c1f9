/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::input::{log_format, port_in_range};
use super::logging::LogFormat;
use super::store::Store;
use clap::Parser;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

#[derive(Parser, Debug)]
#[command(name = "Todo", display_name = "Todo", bin_name = "todo-server", author = "Wavelens", version, about, long_about = None)]
pub struct Cli {
    #[arg(long, env = "TODO_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
    #[arg(long, env = "TODO_LOG_FORMAT", value_parser = log_format, default_value = "compact")]
    pub log_format: LogFormat,
    #[arg(long, env = "TODO_IP", default_value = "127.0.0.1")]
    pub ip: String,
    #[arg(long, env = "TODO_PORT", value_parser = port_in_range, default_value_t = 3000)]
    pub port: u16,
}

#[derive(Debug)]
pub struct ServerState {
    /// Held for the whole of each request's mutation.
    pub store: Mutex<Store>,
    pub cli: Cli,
}

impl ServerState {
    pub fn new(cli: Cli) -> Self {
        Self {
            store: Mutex::new(Store::new()),
            cli,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct BaseResponse<T> {
    pub error: bool,
    pub message: T,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    pub message: String,
    pub code: u16,
}
