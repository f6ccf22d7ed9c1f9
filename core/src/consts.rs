/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use std::ops::RangeInclusive;

pub const PORT_RANGE: RangeInclusive<usize> = 1..=65535;

/// Id handed out when a collection is empty.
pub const FIRST_ID: i64 = 1;

pub const WELCOME_MESSAGE: &str = "Welcome to my todo application";

/// Targets that drown out request logs at `info`.
pub const NOISY_LOG_TARGETS: [(&str, &str); 3] =
    [("hyper", "warn"), ("hyper_util", "warn"), ("tower", "warn")];
