// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Public API behavior of the identifier validator.

#![allow(clippy::panic)]

use brdoc::{cnpj, cpf, validate, validate_cnpj, validate_cpf, IdentifierKind, ValidationError};
use yare::parameterized;

#[parameterized(
    empty = { "", true },
    ten_digits = { "0123456789", true },
    twelve_digits = { "012345678910", true },
    sixteen_digits = { "0123456789101213", true },
    valid_cpf = { "66849734008", false },
    tenth_digit_changed = { "66849734018", true },
    eleventh_digit_changed = { "66849734005", true },
    second_valid_cpf = { "45091647007", false },
    third_digit_changed = { "45291647007", true },
    seventh_digit_changed = { "45091607007", true },
    valid_cnpj = { "11222333000181", false },
    thirteenth_digit_changed = { "11222333000171", true },
    fourteenth_digit_changed = { "11222333000182", true },
)]
fn rejects_exactly_the_invalid(input: &str, want_err: bool) {
    let result = validate(input);
    assert_eq!(result.is_err(), want_err, "{input}: {result:?}");
}

#[test]
fn error_messages_describe_failure() {
    let message = |input: &str| validate(input).err().map(|e| e.to_string());

    assert_eq!(
        message("0123456789"),
        Some("invalid CPF or CNPJ with length 10: 0123456789".to_string())
    );
    assert_eq!(
        message("00000000000"),
        Some("invalid CPF with no distinct digit: 00000000000".to_string())
    );
    assert_eq!(
        message("66849734018"),
        Some("expected digit at position 10 to be 0, but got 1".to_string())
    );
    assert_eq!(
        message("11222333000182"),
        Some("expected digit at position 14 to be 1, but got 2".to_string())
    );
}

#[test]
fn per_kind_validators_agree_with_dispatch() {
    assert_eq!(validate_cpf("66849734008"), Ok(()));
    assert_eq!(validate_cnpj("11222333000181"), Ok(()));
    assert_eq!(validate("66849734008"), Ok(IdentifierKind::Cpf));
    assert!(matches!(
        validate_cpf("11222333000181"),
        Err(ValidationError::InvalidLength { .. })
    ));
}

#[test]
fn generated_identifiers_validate() {
    let base = [1, 2, 3, 4, 5, 6, 7, 8, 9];
    let digits: String = base
        .iter()
        .chain(cpf::check_digits(&base).iter())
        .map(|d| char::from(b'0' + d))
        .collect();
    assert_eq!(digits, "12345678909");
    assert_eq!(validate(&digits), Ok(IdentifierKind::Cpf));

    let base = [1, 1, 2, 2, 2, 3, 3, 3, 0, 0, 0, 1];
    assert_eq!(cnpj::check_digits(&base), [8, 1]);
}

#[test]
fn validation_is_usable_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| validate("45091647007")))
        .collect();
    for handle in handles {
        assert!(matches!(handle.join(), Ok(Ok(IdentifierKind::Cpf))));
    }
}
