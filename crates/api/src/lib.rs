// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

//! API boundary layer for ContractDesk.
//!
//! Translates between the wire shapes the server exposes and the domain,
//! core and persistence layers underneath. Also hosts the external
//! organization-registry client: the one outbound network dependency.

mod auth;
mod error;
mod registry;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::AuthenticationService;
pub use error::{ApiError, AuthError, translate_core_error, translate_domain_error};
pub use registry::{
    LookupError, OrgInfo, RegistryClient, RegistryConfig, parse_registry_response,
};
pub use request_response::{
    ContractResponse, CreateContractRequest, EditContractRequest, HistoryEntryResponse,
    HistoryResponse, LoginRequest, LoginResponse, OrgInfoResponse, RegisterUserRequest,
    RegisterUserResponse,
};
