// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::manufacturer::{Manufacturer, NewManufacturer};
use crate::domain::repositories::manufacturer_repository::ManufacturerRepository;
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::database::entities::manufacturer;
use crate::infrastructure::database::filters::{contains_case_sensitive, contains_literal, non_empty};
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;

/// 制造商仓库实现
#[derive(Clone)]
pub struct ManufacturerRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl ManufacturerRepositoryImpl {
    /// 创建新的制造商仓库实现
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn backend(&self) -> DbBackend {
        self.db.get_database_backend()
    }
}

#[async_trait]
impl ManufacturerRepository for ManufacturerRepositoryImpl {
    async fn create(
        &self,
        manufacturer: &NewManufacturer,
    ) -> Result<Manufacturer, RepositoryError> {
        let model = manufacturer::ActiveModel {
            id: NotSet,
            name: Set(manufacturer.name.clone()),
            country: Set(manufacturer.country.clone()),
        };

        let saved = model.insert(self.db.as_ref()).await?;
        Ok(saved.into())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Manufacturer>, RepositoryError> {
        let model = manufacturer::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Manufacturer>, RepositoryError> {
        let model = manufacturer::Entity::find()
            .filter(manufacturer::Column::Name.eq(name))
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn list(&self, name: Option<&str>) -> Result<Vec<Manufacturer>, RepositoryError> {
        let mut query = manufacturer::Entity::find();

        if let Some(name) = non_empty(name) {
            query = query.filter(contains_case_sensitive(
                self.backend(),
                (manufacturer::Entity, manufacturer::Column::Name),
                name,
            ));
        }

        let models = query
            .order_by_asc(manufacturer::Column::Name)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn search(&self, query: &str) -> Result<Vec<Manufacturer>, RepositoryError> {
        let mut select = manufacturer::Entity::find();

        if !query.is_empty() {
            select = select.filter(
                Condition::any()
                    .add(contains_literal(manufacturer::Column::Name, query))
                    .add(contains_literal(manufacturer::Column::Country, query)),
            );
        }

        let models = select
            .order_by_asc(manufacturer::Column::Name)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn name_taken(
        &self,
        name: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, RepositoryError> {
        let mut query = manufacturer::Entity::find().filter(manufacturer::Column::Name.eq(name));

        if let Some(id) = exclude_id {
            query = query.filter(manufacturer::Column::Id.ne(id));
        }

        Ok(query.count(self.db.as_ref()).await? > 0)
    }

    async fn update(&self, manufacturer: &Manufacturer) -> Result<Manufacturer, RepositoryError> {
        let mut model: manufacturer::ActiveModel = manufacturer::Entity::find_by_id(manufacturer.id)
            .one(self.db.as_ref())
            .await?
            .ok_or(RepositoryError::NotFound)?
            .into();

        model.name = Set(manufacturer.name.clone());
        model.country = Set(manufacturer.country.clone());

        let saved = model.update(self.db.as_ref()).await?;
        Ok(saved.into())
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let result = manufacturer::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        Ok(manufacturer::Entity::find().count(self.db.as_ref()).await?)
    }
}

impl From<manufacturer::Model> for Manufacturer {
    fn from(model: manufacturer::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            country: model.country,
        }
    }
}
