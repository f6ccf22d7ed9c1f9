/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for input validation and parsing functions

use todo_core::input::*;
use todo_core::logging::LogFormat;

#[test]
fn test_url_to_addr() {
    let addr = url_to_addr("127.0.0.1", 8080).unwrap();
    assert_eq!(addr.to_string(), "127.0.0.1:8080");

    let addr = url_to_addr("127.0.0.1", 0).unwrap_err();
    assert_eq!(addr.to_string(), "port out of range 1-65535");
}

#[test]
fn test_port_in_range() {
    let port = port_in_range("8080").unwrap();
    assert_eq!(port, 8080);

    let port = port_in_range("65535").unwrap();
    assert_eq!(port, 65535);

    let port = port_in_range("65536").unwrap_err();
    assert_eq!(port, "port not in range 1-65535");

    let port = port_in_range("0").unwrap_err();
    assert_eq!(port, "port not in range 1-65535");

    let port = port_in_range("http").unwrap_err();
    assert_eq!(port, "`http` is not a port number");
}

#[test]
fn test_log_format() {
    assert_eq!(log_format("compact").unwrap(), LogFormat::Compact);
    assert_eq!(log_format("JSON").unwrap(), LogFormat::Json);
    assert_eq!(log_format(" jsonl ").unwrap(), LogFormat::Json);

    let err = log_format("xml").unwrap_err();
    assert_eq!(err, "`xml` is not a log format (compact, json)");
}
