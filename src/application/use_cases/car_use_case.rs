// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use tracing::{debug, info};

use super::UseCaseError;
use crate::{
    application::dto::{car_form::CarForm, form_errors::FormErrors},
    domain::{
        models::car::{Car, NewCar},
        repositories::{
            car_repository::CarRepository, driver_repository::DriverRepository,
            manufacturer_repository::ManufacturerRepository, RepositoryError,
        },
    },
    infrastructure::metrics,
};

pub const INVALID_CHOICE_MESSAGE: &str =
    "Select a valid choice. That choice is not one of the available choices.";

/// 车辆的创建、更新、删除与司机分配
pub struct CarUseCase<C, M, D> {
    cars: Arc<C>,
    manufacturers: Arc<M>,
    drivers: Arc<D>,
}

impl<C, M, D> CarUseCase<C, M, D>
where
    C: CarRepository + 'static,
    M: ManufacturerRepository + 'static,
    D: DriverRepository + 'static,
{
    pub fn new(cars: Arc<C>, manufacturers: Arc<M>, drivers: Arc<D>) -> Self {
        Self {
            cars,
            manufacturers,
            drivers,
        }
    }

    pub async fn create(&self, form: CarForm) -> Result<Car, UseCaseError> {
        let new_car = self.clean(&form).await?;
        let car = self.cars.create(&new_car).await.map_err(stale_reference)?;

        metrics::record_created("car");
        info!(
            "Created car {} ({}) with {} driver(s)",
            car.id,
            car.model,
            car.driver_ids.len()
        );
        Ok(car)
    }

    pub async fn update(&self, id: i32, form: CarForm) -> Result<Car, UseCaseError> {
        if self.cars.find_by_id(id).await?.is_none() {
            return Err(UseCaseError::not_found());
        }
        let new_car = self.clean(&form).await?;
        Ok(self
            .cars
            .update(id, &new_car)
            .await
            .map_err(stale_reference)?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), UseCaseError> {
        self.cars.delete(id).await?;
        info!("Deleted car {}", id);
        Ok(())
    }

    /// 将司机加入或移出车辆，返回操作后司机是否已分配
    pub async fn toggle_assign(&self, car_id: i32, driver_id: i32) -> Result<bool, UseCaseError> {
        let assigned = self.cars.toggle_driver(car_id, driver_id).await?;
        debug!(
            "Driver {} {} car {}",
            driver_id,
            if assigned { "assigned to" } else { "removed from" },
            car_id
        );
        Ok(assigned)
    }

    /// 校验表单并解析制造商与司机引用
    async fn clean(&self, form: &CarForm) -> Result<NewCar, UseCaseError> {
        let mut errors = form.clean().err().unwrap_or_default();

        let mut manufacturer_id = None;
        if !errors.has_field("manufacturer") {
            let parsed = form.manufacturer.trim().parse::<i32>().ok();
            let exists = match parsed {
                Some(id) => self.manufacturers.find_by_id(id).await?.is_some(),
                None => false,
            };
            if exists {
                manufacturer_id = parsed;
            } else {
                errors.add("manufacturer", INVALID_CHOICE_MESSAGE);
            }
        }

        let driver_ids = self.resolve_drivers(&form.drivers, &mut errors).await?;

        errors.into_result()?;
        let manufacturer_id = manufacturer_id.ok_or_else(|| {
            UseCaseError::field("manufacturer", INVALID_CHOICE_MESSAGE)
        })?;

        Ok(NewCar {
            model: form.model.trim().to_string(),
            manufacturer_id,
            driver_ids,
        })
    }

    async fn resolve_drivers(
        &self,
        submitted: &[String],
        errors: &mut FormErrors,
    ) -> Result<Vec<i32>, UseCaseError> {
        let mut ids = Vec::with_capacity(submitted.len());
        for value in submitted {
            match value.trim().parse::<i32>() {
                Ok(id) => ids.push(id),
                Err(_) => {
                    errors.add("drivers", format!("“{}” is not a valid value.", value));
                }
            }
        }
        ids.sort_unstable();
        ids.dedup();

        if ids.is_empty() {
            return Ok(ids);
        }

        let found = self.drivers.find_many(&ids).await?;
        for id in &ids {
            if !found.iter().any(|driver| driver.id == *id) {
                errors.add(
                    "drivers",
                    format!(
                        "Select a valid choice. {} is not one of the available choices.",
                        id
                    ),
                );
            }
        }
        Ok(ids)
    }
}

/// 校验之后被并发删除的引用
fn stale_reference(err: RepositoryError) -> UseCaseError {
    match err {
        RepositoryError::InvalidReference(_) => {
            UseCaseError::field("manufacturer", INVALID_CHOICE_MESSAGE)
        }
        other => other.into(),
    }
}
