// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::car::{Car, NewCar};
use crate::domain::repositories::car_repository::{CarQueryParams, CarRepository};
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::database::entities::{car, car_driver, manufacturer};
use crate::infrastructure::database::filters::{contains_case_sensitive, contains_literal, non_empty};
use async_trait::async_trait;
use sea_orm::*;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

/// 车辆仓库实现
#[derive(Clone)]
pub struct CarRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl CarRepositoryImpl {
    /// 创建新的车辆仓库实现
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn select() -> SelectTwo<car::Entity, manufacturer::Entity> {
        car::Entity::find().find_also_related(manufacturer::Entity)
    }

    /// 为查询结果补齐司机分配
    async fn hydrate<C: ConnectionTrait>(
        conn: &C,
        rows: Vec<(car::Model, Option<manufacturer::Model>)>,
    ) -> Result<Vec<Car>, RepositoryError> {
        let ids: Vec<i32> = rows.iter().map(|(car, _)| car.id).collect();
        let mut assignments: HashMap<i32, Vec<i32>> = HashMap::new();

        if !ids.is_empty() {
            let links = car_driver::Entity::find()
                .filter(car_driver::Column::CarId.is_in(ids))
                .order_by_asc(car_driver::Column::DriverId)
                .all(conn)
                .await?;

            for link in links {
                assignments.entry(link.car_id).or_default().push(link.driver_id);
            }
        }

        rows.into_iter()
            .map(|(car, manufacturer)| {
                let manufacturer = manufacturer.ok_or_else(|| {
                    RepositoryError::InvalidReference(format!(
                        "car {} references a missing manufacturer",
                        car.id
                    ))
                })?;

                Ok(Car {
                    id: car.id,
                    model: car.model,
                    manufacturer: manufacturer.into(),
                    driver_ids: assignments.remove(&car.id).unwrap_or_default(),
                })
            })
            .collect()
    }

    /// 用给定司机集合替换车辆的全部分配
    async fn replace_drivers<C: ConnectionTrait>(
        conn: &C,
        car_id: i32,
        driver_ids: &[i32],
    ) -> Result<(), RepositoryError> {
        car_driver::Entity::delete_many()
            .filter(car_driver::Column::CarId.eq(car_id))
            .exec(conn)
            .await?;

        let unique: BTreeSet<i32> = driver_ids.iter().copied().collect();
        if unique.is_empty() {
            return Ok(());
        }

        let links = unique.into_iter().map(|driver_id| car_driver::ActiveModel {
            car_id: Set(car_id),
            driver_id: Set(driver_id),
        });

        car_driver::Entity::insert_many(links)
            .exec_without_returning(conn)
            .await?;
        Ok(())
    }

    async fn fetch(&self, id: i32) -> Result<Car, RepositoryError> {
        self.find_by_id(id).await?.ok_or(RepositoryError::NotFound)
    }
}

#[async_trait]
impl CarRepository for CarRepositoryImpl {
    async fn create(&self, new_car: &NewCar) -> Result<Car, RepositoryError> {
        let txn = self.db.begin().await?;

        let saved = car::ActiveModel {
            id: NotSet,
            model: Set(new_car.model.clone()),
            manufacturer_id: Set(new_car.manufacturer_id),
        }
        .insert(&txn)
        .await?;

        Self::replace_drivers(&txn, saved.id, &new_car.driver_ids).await?;
        txn.commit().await?;

        self.fetch(saved.id).await
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Car>, RepositoryError> {
        let rows = Self::select()
            .filter(car::Column::Id.eq(id))
            .all(self.db.as_ref())
            .await?;

        Ok(Self::hydrate(self.db.as_ref(), rows).await?.into_iter().next())
    }

    async fn list(&self, model: Option<&str>) -> Result<Vec<Car>, RepositoryError> {
        let mut query = Self::select();

        if let Some(model) = non_empty(model) {
            query = query.filter(contains_case_sensitive(
                self.db.get_database_backend(),
                (car::Entity, car::Column::Model),
                model,
            ));
        }

        let rows = query
            .order_by_asc(car::Column::Id)
            .all(self.db.as_ref())
            .await?;

        Self::hydrate(self.db.as_ref(), rows).await
    }

    async fn query(&self, params: CarQueryParams) -> Result<Vec<Car>, RepositoryError> {
        let mut query = Self::select();

        if let Some(model) = params.model.as_deref().filter(|m| !m.is_empty()) {
            query = query.filter(contains_literal(car::Column::Model, model));
        }

        if let Some(manufacturer_id) = params.manufacturer_id {
            query = query.filter(car::Column::ManufacturerId.eq(manufacturer_id));
        }

        let rows = query
            .order_by_asc(car::Column::Id)
            .all(self.db.as_ref())
            .await?;

        Self::hydrate(self.db.as_ref(), rows).await
    }

    async fn list_by_driver(&self, driver_id: i32) -> Result<Vec<Car>, RepositoryError> {
        let car_ids: Vec<i32> = car_driver::Entity::find()
            .filter(car_driver::Column::DriverId.eq(driver_id))
            .all(self.db.as_ref())
            .await?
            .into_iter()
            .map(|link| link.car_id)
            .collect();

        if car_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = Self::select()
            .filter(car::Column::Id.is_in(car_ids))
            .order_by_asc(car::Column::Id)
            .all(self.db.as_ref())
            .await?;

        Self::hydrate(self.db.as_ref(), rows).await
    }

    async fn update(&self, id: i32, changes: &NewCar) -> Result<Car, RepositoryError> {
        let txn = self.db.begin().await?;

        let mut model: car::ActiveModel = car::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(RepositoryError::NotFound)?
            .into();

        model.model = Set(changes.model.clone());
        model.manufacturer_id = Set(changes.manufacturer_id);
        model.update(&txn).await?;

        Self::replace_drivers(&txn, id, &changes.driver_ids).await?;
        txn.commit().await?;

        self.fetch(id).await
    }

    async fn toggle_driver(&self, car_id: i32, driver_id: i32) -> Result<bool, RepositoryError> {
        let txn = self.db.begin().await?;

        if car::Entity::find_by_id(car_id).one(&txn).await?.is_none() {
            return Err(RepositoryError::NotFound);
        }

        let existing = car_driver::Entity::find_by_id((car_id, driver_id))
            .one(&txn)
            .await?;

        let assigned = match existing {
            Some(_) => {
                car_driver::Entity::delete_by_id((car_id, driver_id))
                    .exec(&txn)
                    .await?;
                false
            }
            None => {
                car_driver::Entity::insert(car_driver::ActiveModel {
                    car_id: Set(car_id),
                    driver_id: Set(driver_id),
                })
                .exec_without_returning(&txn)
                .await?;
                true
            }
        };

        txn.commit().await?;
        Ok(assigned)
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let result = car::Entity::delete_by_id(id).exec(self.db.as_ref()).await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        Ok(car::Entity::find().count(self.db.as_ref()).await?)
    }
}
