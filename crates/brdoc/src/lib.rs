// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check digit validation for Brazilian taxpayer identifiers.
//!
//! Validates CPF (11 digits, individuals) and CNPJ (14 digits, legal entities)
//! by recomputing both trailing check digits. Input must already be reduced to
//! bare digits; punctuation such as `123.456.789-09` is not stripped here.
//!
//! ```
//! use brdoc::{validate, IdentifierKind, ValidationError};
//!
//! assert_eq!(validate("66849734008"), Ok(IdentifierKind::Cpf));
//! assert_eq!(validate("11222333000181"), Ok(IdentifierKind::Cnpj));
//! assert!(matches!(
//!     validate("66849734018"),
//!     Err(ValidationError::CheckDigitMismatch { position: 10, .. })
//! ));
//! ```

pub mod cnpj;
pub mod cpf;
mod digits;
mod error;
mod identifier;
mod kind;

pub use cnpj::validate_cnpj;
pub use cpf::validate_cpf;
pub use error::ValidationError;
pub use identifier::validate;
pub use kind::IdentifierKind;
