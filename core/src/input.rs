/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use std::net::{SocketAddr, ToSocketAddrs};

use super::consts::*;
use super::logging::LogFormat;

pub fn url_to_addr(host: &str, port: u16) -> Result<SocketAddr, Box<dyn std::error::Error>> {
    if !PORT_RANGE.contains(&(port as usize)) {
        return Err(format!(
            "port out of range {}-{}",
            PORT_RANGE.start(),
            PORT_RANGE.end()
        )
        .into());
    }

    let uri = format!("{}:{}", host, port);
    let url = uri
        .to_socket_addrs()?
        .next()
        .ok_or(format!("{} is not a valid address", uri))?;
    Ok(url)
}

pub fn port_in_range(s: &str) -> Result<u16, String> {
    let port: usize = s
        .parse()
        .map_err(|_| format!("`{s}` is not a port number"))?;

    if PORT_RANGE.contains(&port) {
        Ok(port as u16)
    } else {
        Err(format!(
            "port not in range {}-{}",
            PORT_RANGE.start(),
            PORT_RANGE.end()
        ))
    }
}

pub fn log_format(s: &str) -> Result<LogFormat, String> {
    match s.trim().to_lowercase().as_str() {
        "compact" | "text" => Ok(LogFormat::Compact),
        "json" | "jsonl" => Ok(LogFormat::Json),
        _ => Err(format!("`{s}` is not a log format (compact, json)")),
    }
}
