// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde_json::json;

use crate::registry::{RegistryConfig, parse_registry_response};

#[test]
fn test_parse_full_response() {
    let body = json!({
        "suggestions": [
            {
                "value": "ООО \"Ромашка\"",
                "data": {
                    "inn": "7707083893",
                    "name": { "short_with_opf": "ООО \"Ромашка\"" },
                    "management": { "name": "Иванов Иван Иванович" },
                    "address": { "value": "г Москва, ул Ленина, д 1" }
                }
            }
        ]
    });

    let org = parse_registry_response(&body).expect("Expected a match");
    assert_eq!(org.name, "ООО \"Ромашка\"");
    assert_eq!(org.director, "Иванов Иван Иванович");
    assert_eq!(org.address, "г Москва, ул Ленина, д 1");
    assert_eq!(org.inn, "7707083893");
}

#[test]
fn test_parse_empty_suggestions_is_no_match() {
    let body = json!({ "suggestions": [] });
    assert!(parse_registry_response(&body).is_none());
}

#[test]
fn test_parse_missing_suggestions_is_no_match() {
    let body = json!({ "status": "ok" });
    assert!(parse_registry_response(&body).is_none());
}

#[test]
fn test_parse_non_object_body_is_no_match() {
    let body = json!("oops");
    assert!(parse_registry_response(&body).is_none());
}

#[test]
fn test_parse_missing_leaves_default_to_empty() {
    // Sole proprietors have no management block and often no short name.
    let body = json!({
        "suggestions": [
            {
                "data": {
                    "inn": "500100732259",
                    "address": { "value": "г Тверь" }
                }
            }
        ]
    });

    let org = parse_registry_response(&body).expect("Expected a match");
    assert_eq!(org.name, "");
    assert_eq!(org.director, "");
    assert_eq!(org.address, "г Тверь");
    assert_eq!(org.inn, "500100732259");
}

#[test]
fn test_first_suggestion_wins() {
    let body = json!({
        "suggestions": [
            { "data": { "inn": "7707083893", "name": { "short_with_opf": "First" } } },
            { "data": { "inn": "7707083894", "name": { "short_with_opf": "Second" } } }
        ]
    });

    let org = parse_registry_response(&body).expect("Expected a match");
    assert_eq!(org.name, "First");
}

#[test]
fn test_config_from_env_requires_credentials() {
    // No other test touches these variables.
    unsafe {
        std::env::remove_var("DADATA_API_KEY");
        std::env::remove_var("DADATA_SECRET_KEY");
    }
    let result = RegistryConfig::from_env(String::from(RegistryConfig::DEFAULT_URL));
    assert!(result.is_err());
}
