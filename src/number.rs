// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.
#![allow(clippy::float_cmp, clippy::as_conversions)]

use core::hash::{Hash, Hasher};

use num_bigint::BigInt;
use num_traits::Num;
use serde::ser::Serializer;

/// Largest integer `n` such that `n` and `n + 1` are both exactly representable as f64.
pub const MAX_SAFE_INTEGER: u64 = 9_007_199_254_740_991; // 2^53 - 1

const F64_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0; // 2^53

/// SameValueZero on numbers: NaN equals NaN and +0 equals -0.
pub fn same_value_zero(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

/// Hashes a number consistently with [`same_value_zero`].
pub fn hash_number<H: Hasher>(n: f64, state: &mut H) {
    let bits = if n == 0.0 {
        0u64
    } else if n.is_nan() {
        f64::NAN.to_bits()
    } else {
        n.to_bits()
    };
    bits.hash(state);
}

/// Integral values within the safe range are written without a fractional part.
/// Non-finite values have no JSON form and are written as null.
pub fn serialize_number<S>(n: f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if !n.is_finite() {
        return serializer.serialize_unit();
    }
    if n.fract() == 0.0 && n.abs() < F64_SAFE_INTEGER {
        // Normalize -0 to 0.
        return serializer.serialize_i64(n as i64);
    }
    serializer.serialize_f64(n)
}

/// Parses a decimal bigint literal. A trailing `n` is accepted.
pub fn parse_bigint(literal: &str) -> Option<BigInt> {
    let trimmed = literal.trim();
    let digits = trimmed.strip_suffix('n').unwrap_or(trimmed).replace('_', "");
    if digits.is_empty() {
        return None;
    }
    BigInt::from_str_radix(&digits, 10).ok()
}
