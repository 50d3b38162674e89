// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication services over the user store.

use std::str::FromStr;

use contract_desk_domain::{Role, UserProfile};
use contract_desk_persistence::UserStore;
use tracing::info;

use crate::error::{ApiError, AuthError, translate_domain_error};
use crate::request_response::RegisterUserRequest;

/// One message for every credential failure, so the response shape does
/// not reveal whether the username exists.
const BAD_CREDENTIALS: &str = "Invalid username or password";

/// Authentication service over the persisted user table.
pub struct AuthenticationService;

impl AuthenticationService {
    /// Authenticates a username/password pair.
    ///
    /// # Arguments
    ///
    /// * `users` - The user store
    /// * `username` - The login name
    /// * `password` - The cleartext password
    ///
    /// # Returns
    ///
    /// The authenticated user's profile.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::AuthenticationFailed` for unknown usernames,
    /// wrong passwords and user-store failures alike.
    pub fn login(
        users: &UserStore,
        username: &str,
        password: &str,
    ) -> Result<UserProfile, AuthError> {
        let verified = users.verify(username, password).map_err(|err| {
            AuthError::AuthenticationFailed {
                reason: format!("User store error: {err}"),
            }
        })?;

        let Some(profile) = verified else {
            return Err(AuthError::AuthenticationFailed {
                reason: String::from(BAD_CREDENTIALS),
            });
        };

        info!(username = %profile.username, role = %profile.role, "User authenticated");
        Ok(profile)
    }

    /// Registers a new user.
    ///
    /// # Arguments
    ///
    /// * `users` - The user store
    /// * `request` - The registration request
    ///
    /// # Errors
    ///
    /// Returns an error if the username or password is empty, the role
    /// string is not recognized, the username is already registered, or
    /// the user store fails.
    pub fn register_user(users: &UserStore, request: &RegisterUserRequest) -> Result<(), ApiError> {
        if request.username.trim().is_empty() {
            return Err(ApiError::InvalidInput {
                field: String::from("username"),
                message: String::from("Username cannot be empty"),
            });
        }
        if request.password.is_empty() {
            return Err(ApiError::InvalidInput {
                field: String::from("password"),
                message: String::from("Password cannot be empty"),
            });
        }

        let role: Role = Role::from_str(&request.role).map_err(translate_domain_error)?;

        let created: bool = users.register(
            request.username.trim(),
            &request.password,
            role,
            &request.full_name,
        )?;
        if !created {
            return Err(ApiError::DuplicateUsername {
                username: request.username.trim().to_string(),
            });
        }

        info!(username = %request.username.trim(), role = %role, "User registered");
        Ok(())
    }
}
