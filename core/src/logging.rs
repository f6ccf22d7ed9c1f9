/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

use super::consts::NOISY_LOG_TARGETS;
use super::types::Cli;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `timestamp LEVEL target: message`
    Compact,
    /// One JSON object per event.
    Json,
}

pub fn build_env_filter(level: &str) -> anyhow::Result<EnvFilter> {
    let mut directives = vec![level.to_string()];

    for (target, lvl) in NOISY_LOG_TARGETS {
        directives.push(format!("{}={}", target, lvl));
    }

    let filter_str = directives.join(",");
    EnvFilter::try_new(&filter_str)
        .with_context(|| format!("Invalid tracing filter '{}'", filter_str))
}

/// Installs the global subscriber. Fails if one is already set.
pub fn init_logging(cli: &Cli) -> anyhow::Result<()> {
    let filter = build_env_filter(&cli.log_level)?;

    let layer: Box<dyn Layer<Registry> + Send + Sync> = match cli.log_format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .boxed(),
        LogFormat::Compact => tracing_subscriber::fmt::layer()
            .compact()
            .with_target(true)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(layer.with_filter(filter))
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::debug!(
        "Logging initialized: level={}, format={:?}",
        cli.log_level,
        cli.log_format
    );

    Ok(())
}
