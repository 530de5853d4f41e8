// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CPF check digits.
//!
//! Both digits use descending weights (10..=2, then 11..=2) and reduce the
//! weighted sum as `sum * 10 % 11 % 10`.

use crate::digits;
use crate::error::ValidationError;
use crate::kind::IdentifierKind;

const LEN: usize = 11;

/// Validate an 11-digit CPF.
pub fn validate_cpf(value: &str) -> Result<(), ValidationError> {
    let digits = digits::parse::<LEN>(value)?;

    if digits::is_repeated(&digits) {
        return Err(ValidationError::RepeatedDigit {
            kind: IdentifierKind::Cpf,
            value: value.to_string(),
        });
    }

    // Second digit's sum covers the first check digit, so check in order.
    for (offset, position) in [(9, 10), (10, 11)] {
        let expected = check_digit(&digits[..offset]);
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

/// Compute both check digits for a 9-digit CPF base.
pub fn check_digits(base: &[u8; 9]) -> [u8; 2] {
    let first = check_digit(base);
    let mut extended = [0u8; 10];
    extended[..9].copy_from_slice(base);
    extended[9] = first;
    [first, check_digit(&extended)]
}

/// Weights run from `len + 1` down to 2.
fn check_digit(digits: &[u8]) -> u8 {
    let top = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .zip((2..=top).rev())
        .map(|(&d, weight)| u32::from(d) * weight)
        .sum();
    (sum * 10 % 11 % 10) as u8
}

#[cfg(test)]
#[path = "cpf_tests.rs"]
mod tests;
