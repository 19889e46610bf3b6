// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{create_test_app, location, PASSWORD};
use axum::http::StatusCode;
use serde_json::Value;
use taxi_service::domain::models::driver::DriverChanges;
use taxi_service::domain::repositories::driver_repository::DriverRepository;

#[tokio::test]
async fn list_endpoints_require_login() {
    let app = create_test_app().await;

    for path in ["/manufacturers/", "/drivers/", "/cars/"] {
        let response = app.server.get(path).await;
        assert_ne!(response.status_code(), StatusCode::OK, "{path}");
        assert_eq!(response.status_code(), StatusCode::FOUND, "{path}");
        assert!(location(&response).starts_with("/accounts/login/?next="));
    }
}

#[tokio::test]
async fn create_and_detail_endpoints_require_login() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/manufacturers/create/")
        .form(&[("name", "Lada"), ("country", "Russia")])
        .await;
    assert_eq!(response.status_code(), StatusCode::FOUND);

    let response = app.server.get("/drivers/1/").await;
    assert_eq!(response.status_code(), StatusCode::FOUND);
    assert_eq!(location(&response), "/accounts/login/?next=%2Fdrivers%2F1%2F");

    let response = app.server.get("/").await;
    assert_eq!(response.status_code(), StatusCode::FOUND);
}

#[tokio::test]
async fn login_sets_session_cookie_and_redirects() {
    let app = create_test_app().await;
    app.create_driver("alice", false).await;

    let response = app
        .server
        .post("/accounts/login/")
        .form(&[
            ("username", "alice"),
            ("password", PASSWORD),
            ("next", "/cars/"),
        ])
        .await;

    assert_eq!(response.status_code(), StatusCode::FOUND);
    assert_eq!(location(&response), "/cars/");
    let cookie = response.header("set-cookie");
    let cookie = cookie.to_str().unwrap();
    assert!(cookie.starts_with("sessionid="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("Path=/"));

    let alice = app.drivers.find_by_username("alice").await.unwrap().unwrap();
    assert!(alice.last_login.is_some());
}

#[tokio::test]
async fn login_ignores_external_next() {
    let app = create_test_app().await;
    app.create_driver("bob", false).await;

    let response = app
        .server
        .post("/accounts/login/")
        .form(&[
            ("username", "bob"),
            ("password", PASSWORD),
            ("next", "https://example.com/"),
        ])
        .await;

    assert_eq!(response.status_code(), StatusCode::FOUND);
    assert_eq!(location(&response), "/");
}

#[tokio::test]
async fn login_rejects_wrong_password() {
    let app = create_test_app().await;
    app.create_driver("carol", false).await;

    let response = app
        .server
        .post("/accounts/login/")
        .form(&[("username", "carol"), ("password", "wrong-password")])
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["errors"]["__all__"][0]
        .as_str()
        .unwrap()
        .starts_with("Please enter a correct username and password."));

    let response = app
        .server
        .post("/accounts/login/")
        .form(&[("username", "nobody"), ("password", PASSWORD)])
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn login_requires_both_fields() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/accounts/login/")
        .form(&[("username", "")])
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["errors"]["username"][0], "This field is required.");
    assert_eq!(body["errors"]["password"][0], "This field is required.");
}

#[tokio::test]
async fn inactive_driver_cannot_log_in_or_use_session() {
    let app = create_test_app().await;
    let session = app.login_new_driver("dave").await;

    app.drivers
        .update(
            session.driver.id,
            &DriverChanges {
                first_name: "Dave".into(),
                is_active: false,
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let response = app.get(&session, "/drivers/").await;
    assert_eq!(response.status_code(), StatusCode::FOUND);

    let response = app
        .server
        .post("/accounts/login/")
        .form(&[("username", "dave"), ("password", PASSWORD)])
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn logout_ends_session() {
    let app = create_test_app().await;
    let session = app.login_new_driver("erin").await;

    let response = app.get(&session, "/drivers/").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let response = app.post(&session, "/accounts/logout/").await;
    assert_eq!(response.status_code(), StatusCode::FOUND);
    assert_eq!(location(&response), "/accounts/login/");

    let response = app.get(&session, "/drivers/").await;
    assert_eq!(response.status_code(), StatusCode::FOUND);
}
