// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use contract_desk_domain::StatusUrgency;
use time::macros::date;

use crate::error::ApiError;
use crate::registry::OrgInfo;
use crate::request_response::{ContractResponse, CreateContractRequest};
use crate::tests::helpers::create_test_row;

fn create_request() -> CreateContractRequest {
    CreateContractRequest {
        name: String::from("ООО Ромашка"),
        director: String::from("Иванов И. И."),
        address: String::from("г Москва"),
        inn: String::from("7707083893"),
        end_date: String::from("2027-01-15"),
        value: 250_000.0,
        comments: String::from("Renewal"),
        lawyer: String::from("Petrova"),
        prefill_from_registry: false,
    }
}

#[test]
fn test_to_new_contract_parses_end_date() {
    let request = create_request();
    let input = request.to_new_contract().expect("Request should be valid");

    assert_eq!(input.name, "ООО Ромашка");
    assert_eq!(input.inn.value(), "7707083893");
    assert_eq!(input.end_date, Some(date!(2027 - 01 - 15)));
}

#[test]
fn test_to_new_contract_empty_end_date_is_open_ended() {
    let mut request = create_request();
    request.end_date = String::new();

    let input = request.to_new_contract().expect("Request should be valid");
    assert_eq!(input.end_date, None);
}

#[test]
fn test_to_new_contract_rejects_empty_name() {
    let mut request = create_request();
    request.name = String::from("  ");

    let Err(ApiError::InvalidInput { field, .. }) = request.to_new_contract() else {
        panic!("Expected invalid input rejection");
    };
    assert_eq!(field, "name");
}

#[test]
fn test_to_new_contract_rejects_bad_inn() {
    let mut request = create_request();
    request.inn = String::from("12345");

    let Err(ApiError::InvalidInput { field, .. }) = request.to_new_contract() else {
        panic!("Expected invalid input rejection");
    };
    assert_eq!(field, "inn");
}

#[test]
fn test_to_new_contract_rejects_bad_end_date() {
    let mut request = create_request();
    request.end_date = String::from("15.01.2027");

    let Err(ApiError::InvalidInput { field, .. }) = request.to_new_contract() else {
        panic!("Expected invalid input rejection");
    };
    assert_eq!(field, "end_date");
}

#[test]
fn test_prefill_fills_only_empty_fields() {
    let mut request = create_request();
    request.director = String::new();
    request.address = String::from("   ");

    request.apply_prefill(&OrgInfo {
        name: String::from("Registry Name"),
        director: String::from("Registry Director"),
        address: String::from("Registry Address"),
        inn: String::from("7707083893"),
    });

    assert_eq!(request.name, "ООО Ромашка");
    assert_eq!(request.director, "Registry Director");
    assert_eq!(request.address, "Registry Address");
}

#[test]
fn test_contract_response_carries_derived_status() {
    let row = create_test_row("a1b2c3d4", "Acme", Some(date!(2026 - 09 - 10)));

    let response = ContractResponse::from(&row);
    assert_eq!(response.contract_id, "a1b2c3d4");
    assert_eq!(response.status, StatusUrgency::ExpiringSoon);
    assert_eq!(response.status_label, "expires in 11 days");
    assert_eq!(response.end_date, "2026-09-10");
}

#[test]
fn test_create_request_defaults_optional_fields() {
    let body = r#"{"inn":"7707083893","name":"Acme"}"#;
    let request: CreateContractRequest =
        serde_json::from_str(body).expect("Body should deserialize");

    assert_eq!(request.end_date, "");
    assert_eq!(request.value, 0.0);
    assert!(!request.prefill_from_registry);
}
