// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Length-dispatched validation.

use crate::cnpj::validate_cnpj;
use crate::cpf::validate_cpf;
use crate::error::ValidationError;
use crate::kind::IdentifierKind;

/// Validate a bare-digit CPF or CNPJ, picking the algorithm by length.
///
/// Checks run in a fixed order and stop at the first failure: length, digit
/// characters, repeated digit, first check digit, second check digit.
/// Returns which kind of identifier was validated.
pub fn validate(value: &str) -> Result<IdentifierKind, ValidationError> {
    let kind = IdentifierKind::from_len(value.len())
        .ok_or_else(|| ValidationError::invalid_length(value))?;

    match kind {
        IdentifierKind::Cpf => validate_cpf(value)?,
        IdentifierKind::Cnpj => validate_cnpj(value)?,
    }
    Ok(kind)
}

#[cfg(test)]
#[path = "identifier_tests.rs"]
mod tests;
