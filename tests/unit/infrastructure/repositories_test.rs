// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::Duration;
use crate::unit::setup_db;
use taxi_service::domain::models::car::NewCar;
use taxi_service::domain::models::driver::NewDriver;
use taxi_service::domain::models::manufacturer::NewManufacturer;
use taxi_service::domain::repositories::car_repository::CarRepository;
use taxi_service::domain::repositories::driver_repository::DriverRepository;
use taxi_service::domain::repositories::manufacturer_repository::ManufacturerRepository;
use taxi_service::domain::repositories::session_repository::SessionRepository;
use taxi_service::domain::repositories::RepositoryError;
use taxi_service::infrastructure::repositories::car_repo_impl::CarRepositoryImpl;
use taxi_service::infrastructure::repositories::driver_repo_impl::DriverRepositoryImpl;
use taxi_service::infrastructure::repositories::manufacturer_repo_impl::ManufacturerRepositoryImpl;
use taxi_service::infrastructure::repositories::session_repo_impl::SessionRepositoryImpl;

fn new_driver(username: &str) -> NewDriver {
    NewDriver {
        username: username.to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_session_visits_and_expiry() {
    let db = setup_db().await;
    let drivers = DriverRepositoryImpl::new(db.clone());
    let sessions = SessionRepositoryImpl::new(db);
    let driver = drivers.create(&new_driver("alice")).await.unwrap();

    let session = sessions.create(driver.id, Duration::hours(1)).await.unwrap();
    assert_eq!(session.num_visits, 0);
    assert_eq!(sessions.increment_visits(&session.session_key).await.unwrap(), 1);
    assert_eq!(sessions.increment_visits(&session.session_key).await.unwrap(), 2);

    let expired = sessions.create(driver.id, Duration::seconds(-1)).await.unwrap();
    assert!(sessions
        .find_active(&expired.session_key)
        .await
        .unwrap()
        .is_none());
    assert!(sessions
        .find_active(&session.session_key)
        .await
        .unwrap()
        .is_some());

    sessions.delete(&session.session_key).await.unwrap();
    assert!(sessions
        .find_active(&session.session_key)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_duplicate_username_is_reported() {
    let db = setup_db().await;
    let drivers = DriverRepositoryImpl::new(db);
    drivers.create(&new_driver("alice")).await.unwrap();

    let result = drivers.create(&new_driver("alice")).await;
    assert!(matches!(result, Err(RepositoryError::Duplicate(_))));
}

#[tokio::test]
async fn test_deleting_manufacturer_cascades_to_cars() {
    let db = setup_db().await;
    let manufacturers = ManufacturerRepositoryImpl::new(db.clone());
    let cars = CarRepositoryImpl::new(db);
    let manufacturer = manufacturers
        .create(&NewManufacturer::new("Lada", "Russia"))
        .await
        .unwrap();
    let car = cars
        .create(&NewCar {
            model: "Niva".to_string(),
            manufacturer_id: manufacturer.id,
            driver_ids: vec![],
        })
        .await
        .unwrap();

    manufacturers.delete(manufacturer.id).await.unwrap();

    assert!(cars.find_by_id(car.id).await.unwrap().is_none());
    assert!(matches!(
        manufacturers.delete(manufacturer.id).await,
        Err(RepositoryError::NotFound)
    ));
}

#[tokio::test]
async fn test_deleting_driver_removes_assignments() {
    let db = setup_db().await;
    let manufacturers = ManufacturerRepositoryImpl::new(db.clone());
    let drivers = DriverRepositoryImpl::new(db.clone());
    let cars = CarRepositoryImpl::new(db);
    let manufacturer = manufacturers
        .create(&NewManufacturer::new("Fiat", "Italy"))
        .await
        .unwrap();
    let keep = drivers.create(&new_driver("keep")).await.unwrap();
    let leave = drivers.create(&new_driver("leave")).await.unwrap();
    let car = cars
        .create(&NewCar {
            model: "Panda".to_string(),
            manufacturer_id: manufacturer.id,
            driver_ids: vec![leave.id, keep.id],
        })
        .await
        .unwrap();
    assert_eq!(car.driver_ids, vec![keep.id, leave.id]);

    drivers.delete(leave.id).await.unwrap();

    let car = cars.find_by_id(car.id).await.unwrap().unwrap();
    assert_eq!(car.driver_ids, vec![keep.id]);
    assert_eq!(cars.list_by_driver(keep.id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_toggle_driver() {
    let db = setup_db().await;
    let manufacturers = ManufacturerRepositoryImpl::new(db.clone());
    let drivers = DriverRepositoryImpl::new(db.clone());
    let cars = CarRepositoryImpl::new(db);
    let manufacturer = manufacturers
        .create(&NewManufacturer::new("Mini", "UK"))
        .await
        .unwrap();
    let driver = drivers.create(&new_driver("bob")).await.unwrap();
    let car = cars
        .create(&NewCar {
            model: "Cooper".to_string(),
            manufacturer_id: manufacturer.id,
            driver_ids: vec![],
        })
        .await
        .unwrap();

    assert!(cars.toggle_driver(car.id, driver.id).await.unwrap());
    assert!(!cars.toggle_driver(car.id, driver.id).await.unwrap());
    assert!(matches!(
        cars.toggle_driver(999, driver.id).await,
        Err(RepositoryError::NotFound)
    ));
}
