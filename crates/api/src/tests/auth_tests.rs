// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use contract_desk_domain::Role;
use contract_desk_persistence::UserStore;

use crate::auth::AuthenticationService;
use crate::error::{ApiError, AuthError};
use crate::request_response::RegisterUserRequest;
use crate::tests::helpers::temp_data_dir;

#[test]
fn test_login_seeded_admin() {
    let dir = temp_data_dir();
    let users = UserStore::new(&dir);
    users.init().expect("Failed to init user store");

    let profile = AuthenticationService::login(&users, "admin", "admin")
        .expect("Seeded admin should authenticate");

    assert_eq!(profile.username, "admin");
    assert_eq!(profile.role, Role::Admin);
}

#[test]
fn test_login_wrong_password_fails() {
    let dir = temp_data_dir();
    let users = UserStore::new(&dir);
    users.init().expect("Failed to init user store");

    let result = AuthenticationService::login(&users, "admin", "nope");

    let Err(AuthError::AuthenticationFailed { reason }) = result else {
        panic!("Expected authentication failure");
    };
    assert_eq!(reason, "Invalid username or password");
}

#[test]
fn test_login_unknown_user_same_message_as_wrong_password() {
    let dir = temp_data_dir();
    let users = UserStore::new(&dir);
    users.init().expect("Failed to init user store");

    let unknown = AuthenticationService::login(&users, "ghost", "admin");
    let wrong = AuthenticationService::login(&users, "admin", "wrong");

    let Err(AuthError::AuthenticationFailed { reason: unknown_reason }) = unknown else {
        panic!("Expected authentication failure for unknown user");
    };
    let Err(AuthError::AuthenticationFailed { reason: wrong_reason }) = wrong else {
        panic!("Expected authentication failure for wrong password");
    };
    assert_eq!(unknown_reason, wrong_reason);
}

#[test]
fn test_register_then_login() {
    let dir = temp_data_dir();
    let users = UserStore::new(&dir);

    let request = RegisterUserRequest {
        username: String::from("ivanova"),
        password: String::from("s3cret"),
        role: String::from("staff"),
        full_name: String::from("A. Ivanova"),
    };
    AuthenticationService::register_user(&users, &request).expect("Registration should succeed");

    let profile = AuthenticationService::login(&users, "ivanova", "s3cret")
        .expect("Registered user should authenticate");
    assert_eq!(profile.role, Role::Staff);
    assert_eq!(profile.full_name, "A. Ivanova");
}

#[test]
fn test_register_duplicate_username_rejected() {
    let dir = temp_data_dir();
    let users = UserStore::new(&dir);

    let request = RegisterUserRequest {
        username: String::from("ivanova"),
        password: String::from("s3cret"),
        role: String::from("staff"),
        full_name: String::from("A. Ivanova"),
    };
    AuthenticationService::register_user(&users, &request).expect("Registration should succeed");

    let result = AuthenticationService::register_user(&users, &request);
    let Err(ApiError::DuplicateUsername { username }) = result else {
        panic!("Expected duplicate username rejection");
    };
    assert_eq!(username, "ivanova");
}

#[test]
fn test_register_empty_username_rejected() {
    let dir = temp_data_dir();
    let users = UserStore::new(&dir);

    let request = RegisterUserRequest {
        username: String::from("   "),
        password: String::from("s3cret"),
        role: String::from("staff"),
        full_name: String::from("Nobody"),
    };
    let result = AuthenticationService::register_user(&users, &request);

    let Err(ApiError::InvalidInput { field, .. }) = result else {
        panic!("Expected invalid input rejection");
    };
    assert_eq!(field, "username");
}

#[test]
fn test_register_empty_password_rejected() {
    let dir = temp_data_dir();
    let users = UserStore::new(&dir);

    let request = RegisterUserRequest {
        username: String::from("ivanova"),
        password: String::new(),
        role: String::from("staff"),
        full_name: String::from("A. Ivanova"),
    };
    let result = AuthenticationService::register_user(&users, &request);

    let Err(ApiError::InvalidInput { field, .. }) = result else {
        panic!("Expected invalid input rejection");
    };
    assert_eq!(field, "password");
}

#[test]
fn test_register_bad_role_rejected() {
    let dir = temp_data_dir();
    let users = UserStore::new(&dir);

    let request = RegisterUserRequest {
        username: String::from("ivanova"),
        password: String::from("s3cret"),
        role: String::from("superuser"),
        full_name: String::from("A. Ivanova"),
    };
    let result = AuthenticationService::register_user(&users, &request);

    let Err(ApiError::InvalidInput { field, .. }) = result else {
        panic!("Expected invalid input rejection");
    };
    assert_eq!(field, "role");
}
