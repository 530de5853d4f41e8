// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CNPJ check digits.
//!
//! Weights cycle 2..=9 from the right. The weighted sum is reduced mod 11, and
//! a remainder below 2 maps to 0, otherwise to `11 - r`.

use crate::digits;
use crate::error::ValidationError;
use crate::kind::IdentifierKind;

const LEN: usize = 14;

const FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Validate a 14-digit CNPJ.
pub fn validate_cnpj(value: &str) -> Result<(), ValidationError> {
    let digits = digits::parse::<LEN>(value)?;

    if digits::is_repeated(&digits) {
        return Err(ValidationError::RepeatedDigit {
            kind: IdentifierKind::Cnpj,
            value: value.to_string(),
        });
    }

    let checks: [(&[u32], u8); 2] = [(&FIRST_WEIGHTS, 13), (&SECOND_WEIGHTS, 14)];
    for (weights, position) in checks {
        let offset = weights.len();
        let expected = check_digit(&digits[..offset], weights);
        let got = digits[offset];
        if expected != got {
            return Err(ValidationError::CheckDigitMismatch {
                position,
                expected,
                got,
            });
        }
    }

    Ok(())
}

/// Compute both check digits for a 12-digit CNPJ base.
pub fn check_digits(base: &[u8; 12]) -> [u8; 2] {
    let first = check_digit(base, &FIRST_WEIGHTS);
    let mut extended = [0u8; 13];
    extended[..12].copy_from_slice(base);
    extended[12] = first;
    [first, check_digit(&extended, &SECOND_WEIGHTS)]
}

fn check_digit(digits: &[u8], weights: &[u32]) -> u8 {
    let sum: u32 = digits
        .iter()
        .zip(weights)
        .map(|(&d, &weight)| u32::from(d) * weight)
        .sum();
    match sum % 11 {
        r if r < 2 => 0,
        r => (11 - r) as u8,
    }
}

#[cfg(test)]
#[path = "cnpj_tests.rs"]
mod tests;
