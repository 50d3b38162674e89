// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Client for the external organization registry.
//!
//! The registry resolves a tax identifier to organization details used
//! to pre-fill new contracts. Every failure mode (network, auth,
//! response shape) collapses into one [`LookupError`]; callers report
//! the message and skip pre-fill, they never fail an insertion on it.

use contract_desk_domain::Inn;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

/// Environment variable holding the registry API key.
const API_KEY_ENV: &str = "DADATA_API_KEY";

/// Environment variable holding the registry secret key.
const SECRET_KEY_ENV: &str = "DADATA_SECRET_KEY";

/// Errors from the registry lookup.
#[derive(Debug, Error)]
pub enum LookupError {
    /// A credential environment variable is missing.
    #[error("Registry credentials missing: set {0}")]
    MissingCredentials(&'static str),

    /// The HTTP request could not be built or sent.
    #[error("Registry request failed: {0}")]
    Http(String),

    /// The registry answered with a non-success status.
    #[error("Registry answered with HTTP status {status}")]
    BadStatus {
        /// The HTTP status code.
        status: u16,
    },

    /// The response body was not the expected JSON shape.
    #[error("Malformed registry response: {0}")]
    MalformedResponse(String),
}

/// Organization details resolved from a tax identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgInfo {
    /// Short organization name.
    pub name: String,
    /// Director name.
    pub director: String,
    /// Registered address.
    pub address: String,
    /// The tax identifier as the registry records it.
    pub inn: String,
}

/// Configuration for the registry client.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// The lookup endpoint URL.
    pub base_url: String,
    /// The API key, sent as `Authorization: Token <key>`.
    pub api_key: String,
    /// The secret key, sent as `X-Secret`.
    pub secret_key: String,
    /// Request timeout. The registry defines none; we impose our own.
    pub timeout: Duration,
}

impl RegistryConfig {
    /// The default registry endpoint.
    pub const DEFAULT_URL: &'static str =
        "https://suggestions.dadata.ru/suggestions/api/4_1/rs/findById/party";

    /// The default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Builds a configuration from credential environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `DADATA_API_KEY` or `DADATA_SECRET_KEY` is
    /// not set.
    pub fn from_env(base_url: String) -> Result<Self, LookupError> {
        let api_key: String = std::env::var(API_KEY_ENV)
            .map_err(|_| LookupError::MissingCredentials(API_KEY_ENV))?;
        let secret_key: String = std::env::var(SECRET_KEY_ENV)
            .map_err(|_| LookupError::MissingCredentials(SECRET_KEY_ENV))?;
        Ok(Self {
            base_url,
            api_key,
            secret_key,
            timeout: Self::DEFAULT_TIMEOUT,
        })
    }
}

/// HTTP client for the organization registry.
#[derive(Debug, Clone)]
pub struct RegistryClient {
    /// The underlying HTTP client, carrying the configured timeout.
    http: reqwest::Client,
    /// The endpoint and credentials.
    config: RegistryConfig,
}

impl RegistryClient {
    /// Creates a client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: RegistryConfig) -> Result<Self, LookupError> {
        let http: reqwest::Client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| LookupError::Http(err.to_string()))?;
        Ok(Self { http, config })
    }

    /// Resolves a tax identifier to organization details.
    ///
    /// Returns `Ok(None)` when the registry has no match for the
    /// identifier.
    ///
    /// # Errors
    ///
    /// Returns a `LookupError` for network failures, non-success HTTP
    /// statuses and undecodable response bodies.
    pub async fn find_by_inn(&self, inn: &Inn) -> Result<Option<OrgInfo>, LookupError> {
        let response = self
            .http
            .post(&self.config.base_url)
            .header("Authorization", format!("Token {}", self.config.api_key))
            .header("X-Secret", &self.config.secret_key)
            .json(&serde_json::json!({ "query": inn.value() }))
            .send()
            .await
            .map_err(|err| LookupError::Http(err.to_string()))?;

        let status: u16 = response.status().as_u16();
        if !response.status().is_success() {
            warn!(inn = %inn, status, "Registry lookup rejected");
            return Err(LookupError::BadStatus { status });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|err| LookupError::MalformedResponse(err.to_string()))?;

        Ok(parse_registry_response(&body))
    }
}

/// Extracts organization details from a registry response body.
///
/// The registry answers with a `suggestions` array; the first element's
/// `data` object yields the name (`name.short_with_opf`), director
/// (`management.name`) and address (`address.value`). Missing leaves
/// render as empty strings; an empty or absent `suggestions` array
/// means "no match".
#[must_use]
pub fn parse_registry_response(body: &Value) -> Option<OrgInfo> {
    let data: &Value = body.get("suggestions")?.as_array()?.first()?.get("data")?;

    let text = |pointer: &str| -> String {
        data.pointer(pointer)
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string()
    };

    Some(OrgInfo {
        name: text("/name/short_with_opf"),
        director: text("/management/name"),
        address: text("/address/value"),
        inn: text("/inn"),
    })
}
