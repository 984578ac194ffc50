// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Human-readable size with base-1024 units, capped at GB.
///
/// Whole byte counts are written without a fraction; everything else uses one
/// decimal place.
pub fn format_bytes(bytes: f64) -> String {
    let mut unit = 0;
    let mut num = bytes;
    while num.abs() >= 1024.0 && unit < UNITS.len() - 1 {
        num /= 1024.0;
        unit += 1;
    }
    if num == 0.0 {
        // Avoid printing "-0".
        num = 0.0;
    }
    if unit == 0 && num.fract() == 0.0 {
        format!("{num:.0}{}", UNITS[unit])
    } else {
        format!("{num:.1}{}", UNITS[unit])
    }
}
