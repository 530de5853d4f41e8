// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Conversion of digit strings into numeric digit arrays.

use crate::error::ValidationError;

/// Parse exactly `N` ASCII digits into their numeric values.
///
/// The length is checked in bytes before any character is inspected, so a
/// wrong-length value always reports `InvalidLength` even if it also holds
/// non-digits.
pub(crate) fn parse<const N: usize>(value: &str) -> Result<[u8; N], ValidationError> {
    if value.len() != N {
        return Err(ValidationError::invalid_length(value));
    }

    let mut digits = [0u8; N];
    for (index, (slot, found)) in digits.iter_mut().zip(value.chars()).enumerate() {
        *slot = match found.to_digit(10) {
            Some(d) => d as u8,
            None => return Err(ValidationError::NonDigitCharacter { index, found }),
        };
    }
    Ok(digits)
}

/// True when no two adjacent digits differ
pub(crate) fn is_repeated(digits: &[u8]) -> bool {
    digits.windows(2).all(|pair| pair[0] == pair[1])
}

#[cfg(test)]
#[path = "digits_tests.rs"]
mod tests;
