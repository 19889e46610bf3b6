// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{create_test_app, location};
use axum::http::StatusCode;
use serde_json::Value;
use taxi_service::domain::models::car::NewCar;
use taxi_service::domain::repositories::car_repository::CarRepository;

#[tokio::test]
async fn create_car_with_manufacturer_and_driver() {
    let app = create_test_app().await;
    let session = app.login_new_driver("viewer").await;
    let manufacturer = app.create_manufacturer("Toyota", "Japan").await;
    let driver = app.create_driver("assigned", false).await;

    let manufacturer_id = manufacturer.id.to_string();
    let driver_id = driver.id.to_string();
    let response = app
        .post(&session, "/cars/create/")
        .form(&[
            ("model", "Prius"),
            ("manufacturer", manufacturer_id.as_str()),
            ("drivers", driver_id.as_str()),
        ])
        .await;

    assert_eq!(response.status_code(), StatusCode::FOUND);
    assert_eq!(location(&response), "/cars/");

    let cars = app.cars.list(None).await.unwrap();
    assert_eq!(cars.len(), 1);
    assert_eq!(cars[0].model, "Prius");
    assert_eq!(cars[0].manufacturer.id, manufacturer.id);
    assert_eq!(cars[0].driver_ids, vec![driver.id]);
}

#[tokio::test]
async fn create_car_accepts_repeated_driver_keys() {
    let app = create_test_app().await;
    let session = app.login_new_driver("viewer").await;
    let manufacturer = app.create_manufacturer("Kia", "Korea").await;
    let first = app.create_driver("first", false).await;
    let second = app.create_driver("second", false).await;

    let manufacturer_id = manufacturer.id.to_string();
    let first_id = first.id.to_string();
    let second_id = second.id.to_string();
    let response = app
        .post(&session, "/cars/create/")
        .form(&[
            ("model", "Rio"),
            ("manufacturer", manufacturer_id.as_str()),
            ("drivers", second_id.as_str()),
            ("drivers", first_id.as_str()),
            ("drivers", first_id.as_str()),
        ])
        .await;

    assert_eq!(response.status_code(), StatusCode::FOUND);
    let car = &app.cars.list(Some("Rio")).await.unwrap()[0];
    assert_eq!(car.driver_ids, vec![first.id, second.id]);
}

#[tokio::test]
async fn create_car_without_drivers() {
    let app = create_test_app().await;
    let session = app.login_new_driver("viewer").await;
    let manufacturer = app.create_manufacturer("Dacia", "Romania").await;

    let manufacturer_id = manufacturer.id.to_string();
    let response = app
        .post(&session, "/cars/create/")
        .form(&[("model", "Logan"), ("manufacturer", manufacturer_id.as_str())])
        .await;

    assert_eq!(response.status_code(), StatusCode::FOUND);
    let cars = app.cars.list(None).await.unwrap();
    assert!(cars[0].driver_ids.is_empty());
}

#[tokio::test]
async fn create_car_rejects_unknown_references() {
    let app = create_test_app().await;
    let session = app.login_new_driver("viewer").await;
    let manufacturer = app.create_manufacturer("Honda", "Japan").await;
    let manufacturer_id = manufacturer.id.to_string();

    let response = app
        .post(&session, "/cars/create/")
        .form(&[("model", "Civic"), ("manufacturer", "999")])
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(
        body["errors"]["manufacturer"][0],
        "Select a valid choice. That choice is not one of the available choices."
    );

    let response = app
        .post(&session, "/cars/create/")
        .form(&[
            ("model", "Civic"),
            ("manufacturer", manufacturer_id.as_str()),
            ("drivers", "777"),
        ])
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(
        body["errors"]["drivers"][0],
        "Select a valid choice. 777 is not one of the available choices."
    );

    let response = app
        .post(&session, "/cars/create/")
        .form(&[("manufacturer", manufacturer_id.as_str())])
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["errors"]["model"][0], "This field is required.");

    assert_eq!(app.cars.count().await.unwrap(), 0);
}

#[tokio::test]
async fn search_cars_by_model() {
    let app = create_test_app().await;
    let session = app.login_new_driver("viewer").await;
    let manufacturer = app.create_manufacturer("BMW", "Germany").await;
    for model in ["X5", "M3", "X3"] {
        app.cars
            .create(&NewCar {
                model: model.to_string(),
                manufacturer_id: manufacturer.id,
                driver_ids: vec![],
            })
            .await
            .unwrap();
    }

    let response = app.get(&session, "/cars/?model=X").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    let models: Vec<&str> = body["car_list"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["model"].as_str().unwrap())
        .collect();
    assert_eq!(models, ["X5", "X3"]);
    assert_eq!(body["car_list"][0]["manufacturer"]["name"], "BMW");

    let response = app.get(&session, "/cars/?model=Z4").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert!(body["car_list"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn toggle_assign_adds_then_removes_current_driver() {
    let app = create_test_app().await;
    let session = app.login_new_driver("viewer").await;
    let manufacturer = app.create_manufacturer("Ford", "USA").await;
    let car = app
        .cars
        .create(&NewCar {
            model: "Focus".to_string(),
            manufacturer_id: manufacturer.id,
            driver_ids: vec![],
        })
        .await
        .unwrap();
    let path = format!("/cars/{}/toggle-assign/", car.id);

    let response = app.post(&session, &path).await;
    assert_eq!(response.status_code(), StatusCode::FOUND);
    assert_eq!(location(&response), format!("/cars/{}/", car.id));

    let detail: Value = app
        .get(&session, &format!("/cars/{}/", car.id))
        .await
        .json();
    assert_eq!(detail["drivers"][0]["username"], "viewer");
    assert_eq!(detail["car"]["manufacturer"]["name"], "Ford");

    app.post(&session, &path).await;
    let car = app.cars.find_by_id(car.id).await.unwrap().unwrap();
    assert!(!car.has_driver(session.driver.id));
}

#[tokio::test]
async fn update_and_delete_car() {
    let app = create_test_app().await;
    let session = app.login_new_driver("viewer").await;
    let old = app.create_manufacturer("Opel", "Germany").await;
    let new = app.create_manufacturer("Vauxhall", "UK").await;
    let car = app
        .cars
        .create(&NewCar {
            model: "Astra".to_string(),
            manufacturer_id: old.id,
            driver_ids: vec![session.driver.id],
        })
        .await
        .unwrap();

    let new_id = new.id.to_string();
    let response = app
        .post(&session, &format!("/cars/{}/update/", car.id))
        .form(&[("model", "Astra GTC"), ("manufacturer", new_id.as_str())])
        .await;
    assert_eq!(response.status_code(), StatusCode::FOUND);

    let updated = app.cars.find_by_id(car.id).await.unwrap().unwrap();
    assert_eq!(updated.model, "Astra GTC");
    assert_eq!(updated.manufacturer.id, new.id);
    assert!(updated.driver_ids.is_empty());

    let response = app
        .post(&session, &format!("/cars/{}/delete/", car.id))
        .await;
    assert_eq!(response.status_code(), StatusCode::FOUND);
    assert_eq!(location(&response), "/cars/");
    assert!(app.cars.find_by_id(car.id).await.unwrap().is_none());

    let response = app.get(&session, &format!("/cars/{}/", car.id)).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
