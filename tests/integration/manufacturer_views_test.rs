// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{create_test_app, location};
use axum::http::StatusCode;
use serde_json::Value;
use taxi_service::domain::models::car::NewCar;
use taxi_service::domain::repositories::car_repository::CarRepository;
use taxi_service::domain::repositories::manufacturer_repository::ManufacturerRepository;

fn names(body: &Value) -> Vec<String> {
    body["manufacturer_list"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["name"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn list_is_ordered_by_name() {
    let app = create_test_app().await;
    let session = app.login_new_driver("viewer").await;
    for (name, country) in [("Toyota", "Japan"), ("Audi", "Germany"), ("Fiat", "Italy")] {
        app.create_manufacturer(name, country).await;
    }

    let response = app.get(&session, "/manufacturers/").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(names(&body), ["Audi", "Fiat", "Toyota"]);
    assert_eq!(body["search_form"]["name"], "");
}

#[tokio::test]
async fn search_by_name_substring() {
    let app = create_test_app().await;
    let session = app.login_new_driver("viewer").await;
    for name in ["Mitsubishi", "Toyota", "Mazda"] {
        app.create_manufacturer(name, "Japan").await;
    }

    let response = app.get(&session, "/manufacturers/?name=M").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(names(&body), ["Mazda", "Mitsubishi"]);
    assert_eq!(body["search_form"]["name"], "M");
}

#[tokio::test]
async fn search_is_case_sensitive() {
    let app = create_test_app().await;
    let session = app.login_new_driver("viewer").await;
    app.create_manufacturer("Mazda", "Japan").await;

    let response = app.get(&session, "/manufacturers/?name=maz").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert!(names(&body).is_empty());
}

#[tokio::test]
async fn search_without_matches_returns_empty_list() {
    let app = create_test_app().await;
    let session = app.login_new_driver("viewer").await;
    app.create_manufacturer("Toyota", "Japan").await;

    let response = app.get(&session, "/manufacturers/?name=Zzz").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["manufacturer_list"], Value::Array(vec![]));
}

#[tokio::test]
async fn create_manufacturer_redirects_to_list() {
    let app = create_test_app().await;
    let session = app.login_new_driver("viewer").await;

    let response = app
        .post(&session, "/manufacturers/create/")
        .form(&[("name", "Skoda"), ("country", "Czech Republic")])
        .await;

    assert_eq!(response.status_code(), StatusCode::FOUND);
    assert_eq!(location(&response), "/manufacturers/");

    let saved = app.manufacturers.find_by_name("Skoda").await.unwrap().unwrap();
    assert_eq!(saved.country, "Czech Republic");
    assert_eq!(saved.to_string(), "Skoda Czech Republic");
}

#[tokio::test]
async fn create_manufacturer_rejects_invalid_form() {
    let app = create_test_app().await;
    let session = app.login_new_driver("viewer").await;
    app.create_manufacturer("Skoda", "Czech Republic").await;

    let response = app
        .post(&session, "/manufacturers/create/")
        .form(&[("name", ""), ("country", "Nowhere")])
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["errors"]["name"][0], "This field is required.");

    let response = app
        .post(&session, "/manufacturers/create/")
        .form(&[("name", "Skoda"), ("country", "Elsewhere")])
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(
        body["errors"]["name"][0],
        "Manufacturer with this Name already exists."
    );
    assert_eq!(app.manufacturers.count().await.unwrap(), 1);
}

#[tokio::test]
async fn update_manufacturer() {
    let app = create_test_app().await;
    let session = app.login_new_driver("viewer").await;
    let manufacturer = app.create_manufacturer("Lada", "USSR").await;

    let response = app
        .post(
            &session,
            &format!("/manufacturers/{}/update/", manufacturer.id),
        )
        .form(&[("name", "Lada"), ("country", "Russia")])
        .await;

    assert_eq!(response.status_code(), StatusCode::FOUND);
    let updated = app
        .manufacturers
        .find_by_id(manufacturer.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.country, "Russia");

    let response = app
        .post(&session, "/manufacturers/999/update/")
        .form(&[("name", "Ghost"), ("country", "")])
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_manufacturer_cascades_to_cars() {
    let app = create_test_app().await;
    let session = app.login_new_driver("viewer").await;
    let manufacturer = app.create_manufacturer("Saab", "Sweden").await;
    app.cars
        .create(&NewCar {
            model: "9-3".to_string(),
            manufacturer_id: manufacturer.id,
            driver_ids: vec![session.driver.id],
        })
        .await
        .unwrap();

    let response = app
        .post(
            &session,
            &format!("/manufacturers/{}/delete/", manufacturer.id),
        )
        .await;

    assert_eq!(response.status_code(), StatusCode::FOUND);
    assert_eq!(location(&response), "/manufacturers/");
    assert_eq!(app.manufacturers.count().await.unwrap(), 0);
    assert_eq!(app.cars.count().await.unwrap(), 0);
}
