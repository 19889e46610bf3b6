// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use taxi_service::domain::services::password_hasher::{self, PasswordHasher};
use taxi_service::domain::services::password_validation::{validate_password, UserAttributes};

#[test]
fn test_hash_is_salted_and_verifiable() {
    let hasher = PasswordHasher::new(10);
    let first = hasher.hash("Kq7!vRw2#pLm");
    let second = hasher.hash("Kq7!vRw2#pLm");

    assert_ne!(first, second);
    assert!(first.starts_with("pbkdf2_sha256$10$"));
    assert!(password_hasher::verify_password("Kq7!vRw2#pLm", &first));
    assert!(password_hasher::verify_password("Kq7!vRw2#pLm", &second));
    assert!(!password_hasher::verify_password("kq7!vRw2#pLm", &first));
}

#[test]
fn test_unusable_password_never_verifies() {
    let unusable = password_hasher::make_unusable_password();

    assert!(!password_hasher::is_usable(&unusable));
    assert!(!password_hasher::verify_password("", &unusable));
    assert!(!password_hasher::verify_password("anything", "not-a-hash"));
}

#[test]
fn test_strong_password_passes() {
    let user = UserAttributes {
        username: "john_doe",
        ..Default::default()
    };

    assert!(validate_password("Kq7!vRw2#pLm", &user).is_empty());
}

#[test]
fn test_rules_accumulate() {
    let errors = validate_password("1234567", &UserAttributes::default());

    assert!(errors.contains(
        &"This password is too short. It must contain at least 8 characters.".to_string()
    ));
    assert!(errors.contains(&"This password is entirely numeric.".to_string()));
}

#[test]
fn test_similarity_to_personal_attributes() {
    let user = UserAttributes {
        username: "alice",
        first_name: "Margaret",
        last_name: "Thatcherson",
        email: "alice@example.com",
    };

    let errors = validate_password("thatcherson", &user);
    assert_eq!(errors, vec!["The password is too similar to the last name.".to_string()]);
}

#[test]
fn test_rearranged_username_is_too_similar() {
    let user = UserAttributes {
        username: "testtest",
        ..Default::default()
    };

    let errors = validate_password("tseTtseT99", &user);
    assert_eq!(errors, vec!["The password is too similar to the username.".to_string()]);
}
