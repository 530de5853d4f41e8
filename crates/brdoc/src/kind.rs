// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Identifier kinds and their lengths.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which taxpayer identifier a digit string is
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierKind {
    /// Cadastro de Pessoas Físicas (individuals)
    Cpf,
    /// Cadastro Nacional da Pessoa Jurídica (legal entities)
    Cnpj,
}

impl IdentifierKind {
    /// Pick the kind from a digit count. Only 11 and 14 are recognized.
    pub fn from_len(len: usize) -> Option<Self> {
        match len {
            11 => Some(Self::Cpf),
            14 => Some(Self::Cnpj),
            _ => None,
        }
    }

    /// Number of digits, check digits included
    #[allow(clippy::len_without_is_empty)]
    pub fn len(self) -> usize {
        match self {
            Self::Cpf => 11,
            Self::Cnpj => 14,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cpf => "CPF",
            Self::Cnpj => "CNPJ",
        }
    }
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "kind_tests.rs"]
mod tests;
