// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Validation errors.

use crate::kind::IdentifierKind;
use thiserror::Error;

/// Reason an identifier was rejected
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid CPF or CNPJ with length {len}: {value}")]
    InvalidLength { len: usize, value: String },

    #[error("non-digit character '{found}' at index {index}")]
    NonDigitCharacter { index: usize, found: char },

    #[error("invalid {kind} with no distinct digit: {value}")]
    RepeatedDigit { kind: IdentifierKind, value: String },

    /// `position` is 1-based: 10 and 11 for CPF, 13 and 14 for CNPJ.
    #[error("expected digit at position {position} to be {expected}, but got {got}")]
    CheckDigitMismatch { position: u8, expected: u8, got: u8 },
}

impl ValidationError {
    pub(crate) fn invalid_length(value: &str) -> Self {
        Self::InvalidLength {
            len: value.len(),
            value: value.to_string(),
        }
    }

    /// Position of the mismatched check digit, if that is what failed
    pub fn position(&self) -> Option<u8> {
        match self {
            Self::CheckDigitMismatch { position, .. } => Some(*position),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
