// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::driver::{Driver, DriverChanges, NewDriver};
use crate::domain::repositories::driver_repository::DriverRepository;
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::database::entities::driver;
use crate::infrastructure::database::filters::{contains_case_sensitive, contains_literal, non_empty};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{sea_query::Expr, *};
use std::sync::Arc;

/// 司机仓库实现
#[derive(Clone)]
pub struct DriverRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl DriverRepositoryImpl {
    /// 创建新的司机仓库实现
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn get(&self, id: i32) -> Result<driver::Model, RepositoryError> {
        driver::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or(RepositoryError::NotFound)
    }
}

#[async_trait]
impl DriverRepository for DriverRepositoryImpl {
    async fn create(&self, new_driver: &NewDriver) -> Result<Driver, RepositoryError> {
        let model = driver::ActiveModel {
            id: NotSet,
            username: Set(new_driver.username.clone()),
            password: Set(new_driver.password.clone()),
            first_name: Set(new_driver.first_name.clone()),
            last_name: Set(new_driver.last_name.clone()),
            email: Set(new_driver.email.clone()),
            license_number: Set(new_driver.license_number.clone()),
            is_staff: Set(new_driver.is_staff),
            is_superuser: Set(new_driver.is_superuser),
            is_active: Set(true),
            date_joined: Set(Utc::now().into()),
            last_login: Set(None),
        };

        let saved = model.insert(self.db.as_ref()).await?;
        Ok(saved.into())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Driver>, RepositoryError> {
        let model = driver::Entity::find_by_id(id).one(self.db.as_ref()).await?;
        Ok(model.map(Into::into))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Driver>, RepositoryError> {
        let model = driver::Entity::find()
            .filter(driver::Column::Username.eq(username))
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn list(&self, username: Option<&str>) -> Result<Vec<Driver>, RepositoryError> {
        let mut query = driver::Entity::find();

        if let Some(username) = non_empty(username) {
            query = query.filter(contains_case_sensitive(
                self.db.get_database_backend(),
                (driver::Entity, driver::Column::Username),
                username,
            ));
        }

        let models = query
            .order_by_asc(driver::Column::Id)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn search(&self, query: &str) -> Result<Vec<Driver>, RepositoryError> {
        let mut select = driver::Entity::find();

        if !query.is_empty() {
            select = select.filter(
                Condition::any()
                    .add(contains_literal(driver::Column::Username, query))
                    .add(contains_literal(driver::Column::FirstName, query))
                    .add(contains_literal(driver::Column::LastName, query))
                    .add(contains_literal(driver::Column::Email, query)),
            );
        }

        let models = select
            .order_by_asc(driver::Column::Username)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_many(&self, ids: &[i32]) -> Result<Vec<Driver>, RepositoryError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = driver::Entity::find()
            .filter(driver::Column::Id.is_in(ids.to_vec()))
            .order_by_asc(driver::Column::Id)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn username_taken(&self, username: &str) -> Result<bool, RepositoryError> {
        let count = driver::Entity::find()
            .filter(driver::Column::Username.eq(username))
            .count(self.db.as_ref())
            .await?;

        Ok(count > 0)
    }

    async fn license_number_taken(
        &self,
        license_number: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, RepositoryError> {
        let mut query =
            driver::Entity::find().filter(driver::Column::LicenseNumber.eq(license_number));

        if let Some(id) = exclude_id {
            query = query.filter(driver::Column::Id.ne(id));
        }

        Ok(query.count(self.db.as_ref()).await? > 0)
    }

    async fn update_license_number(
        &self,
        id: i32,
        license_number: &str,
    ) -> Result<Driver, RepositoryError> {
        let mut model: driver::ActiveModel = self.get(id).await?.into();
        model.license_number = Set(Some(license_number.to_string()));

        let saved = model.update(self.db.as_ref()).await?;
        Ok(saved.into())
    }

    async fn update(&self, id: i32, changes: &DriverChanges) -> Result<Driver, RepositoryError> {
        let mut model: driver::ActiveModel = self.get(id).await?.into();

        model.first_name = Set(changes.first_name.clone());
        model.last_name = Set(changes.last_name.clone());
        model.email = Set(changes.email.clone());
        model.license_number = Set(changes.license_number.clone());
        model.is_active = Set(changes.is_active);
        model.is_staff = Set(changes.is_staff);
        model.is_superuser = Set(changes.is_superuser);

        let saved = model.update(self.db.as_ref()).await?;
        Ok(saved.into())
    }

    async fn touch_last_login(&self, id: i32, at: DateTime<Utc>) -> Result<(), RepositoryError> {
        driver::Entity::update_many()
            .col_expr(driver::Column::LastLogin, Expr::value(Some(at.fixed_offset())))
            .filter(driver::Column::Id.eq(id))
            .exec(self.db.as_ref())
            .await?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let result = driver::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        Ok(driver::Entity::find().count(self.db.as_ref()).await?)
    }
}

impl From<driver::Model> for Driver {
    fn from(model: driver::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            password: model.password,
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            license_number: model.license_number,
            is_staff: model.is_staff,
            is_superuser: model.is_superuser,
            is_active: model.is_active,
            date_joined: model.date_joined.into(),
            last_login: model.last_login.map(Into::into),
        }
    }
}
