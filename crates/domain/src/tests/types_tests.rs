// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Contract, ContractField, ContractId, ContractRow, DomainError, Inn, Role, derive_status,
    parse_end_date,
};
use std::str::FromStr;
use time::Date;
use time::macros::date;

fn create_test_contract(end_date: Option<Date>) -> Contract {
    Contract {
        contract_id: ContractId::new("ab12cd34"),
        name: String::from("Acme LLC"),
        director: String::from("J. Doe"),
        address: String::from("1 Main St"),
        inn: Inn::new("7701234567"),
        end_date,
        value: 1500.5,
        comments: String::from("renewal pending"),
        lawyer: String::from("K. Smith"),
    }
}

#[test]
fn test_parse_end_date_empty_means_no_expiry() {
    assert_eq!(parse_end_date("").unwrap(), None);
    assert_eq!(parse_end_date("   ").unwrap(), None);
}

#[test]
fn test_parse_end_date_iso() {
    let parsed: Option<Date> = parse_end_date("2026-09-15").unwrap();
    assert_eq!(parsed, Some(date!(2026 - 09 - 15)));
}

#[test]
fn test_parse_end_date_rejects_garbage() {
    let err: DomainError = parse_end_date("not-a-date").unwrap_err();
    assert!(matches!(err, DomainError::InvalidEndDate { .. }));
}

#[test]
fn test_role_round_trips_through_str() {
    assert_eq!(Role::from_str("admin").unwrap(), Role::Admin);
    assert_eq!(Role::from_str("Staff").unwrap(), Role::Staff);
    assert_eq!(Role::Admin.as_str(), "admin");
}

#[test]
fn test_unknown_role_is_rejected() {
    let err: DomainError = Role::from_str("superuser").unwrap_err();
    assert_eq!(err, DomainError::InvalidRole(String::from("superuser")));
}

#[test]
fn test_contract_field_parses_every_editable_column() {
    for field in ContractField::ALL {
        assert_eq!(ContractField::from_str(field.as_str()).unwrap(), *field);
    }
}

#[test]
fn test_status_and_id_are_not_editable_fields() {
    assert!(ContractField::from_str("status").is_err());
    assert!(ContractField::from_str("contract_id").is_err());
}

#[test]
fn test_field_text_uses_canonical_forms() {
    let contract: Contract = create_test_contract(Some(date!(2026 - 09 - 15)));
    assert_eq!(contract.field_text(ContractField::EndDate), "2026-09-15");
    assert_eq!(contract.field_text(ContractField::Value), "1500.5");
    assert_eq!(contract.field_text(ContractField::Inn), "7701234567");
}

#[test]
fn test_absent_end_date_renders_empty() {
    let contract: Contract = create_test_contract(None);
    assert_eq!(contract.field_text(ContractField::EndDate), "");
}

#[test]
fn test_column_texts_match_persisted_column_order() {
    let today: Date = date!(2026 - 08 - 30);
    let contract: Contract = create_test_contract(None);
    let row: ContractRow = ContractRow {
        status: derive_status(contract.end_date, today),
        contract,
    };

    let texts: Vec<String> = row.column_texts();
    assert_eq!(texts.len(), crate::CONTRACT_COLUMNS.len());
    assert_eq!(texts[0], "ab12cd34");
    assert_eq!(texts[4], "7701234567");
    assert_eq!(texts[5], "");
    assert_eq!(texts[7], "no end date");
}

#[test]
fn test_inn_is_trimmed() {
    assert_eq!(Inn::new(" 7701234567 ").value(), "7701234567");
}
