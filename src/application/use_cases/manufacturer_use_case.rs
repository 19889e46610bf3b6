// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use tracing::info;

use super::UseCaseError;
use crate::{
    application::dto::manufacturer_form::ManufacturerForm,
    domain::{
        models::manufacturer::{Manufacturer, NewManufacturer},
        repositories::{manufacturer_repository::ManufacturerRepository, RepositoryError},
    },
    infrastructure::metrics,
};

pub const NAME_TAKEN_MESSAGE: &str = "Manufacturer with this Name already exists.";

/// 制造商的创建、更新与删除
pub struct ManufacturerUseCase<M> {
    repo: Arc<M>,
}

impl<M> ManufacturerUseCase<M>
where
    M: ManufacturerRepository + 'static,
{
    pub fn new(repo: Arc<M>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, form: ManufacturerForm) -> Result<Manufacturer, UseCaseError> {
        self.clean(&form, None).await?;

        let manufacturer = self
            .repo
            .create(&NewManufacturer::new(form.cleaned_name(), form.country.trim()))
            .await
            .map_err(duplicate_name)?;

        metrics::record_created("manufacturer");
        info!("Created manufacturer {} ({})", manufacturer.id, manufacturer);
        Ok(manufacturer)
    }

    pub async fn update(
        &self,
        id: i32,
        form: ManufacturerForm,
    ) -> Result<Manufacturer, UseCaseError> {
        let mut manufacturer = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(UseCaseError::not_found)?;

        self.clean(&form, Some(id)).await?;

        manufacturer.name = form.cleaned_name();
        manufacturer.country = form.country.trim().to_string();
        Ok(self
            .repo
            .update(&manufacturer)
            .await
            .map_err(duplicate_name)?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), UseCaseError> {
        self.repo.delete(id).await?;
        info!("Deleted manufacturer {}", id);
        Ok(())
    }

    async fn clean(
        &self,
        form: &ManufacturerForm,
        exclude_id: Option<i32>,
    ) -> Result<(), UseCaseError> {
        let mut errors = form.clean().err().unwrap_or_default();
        if !errors.has_field("name")
            && self
                .repo
                .name_taken(&form.cleaned_name(), exclude_id)
                .await?
        {
            errors.add("name", NAME_TAKEN_MESSAGE);
        }
        Ok(errors.into_result()?)
    }
}

/// 并发写入时的唯一约束冲突同样报告为字段错误
fn duplicate_name(err: RepositoryError) -> UseCaseError {
    match err {
        RepositoryError::Duplicate(_) => UseCaseError::field("name", NAME_TAKEN_MESSAGE),
        other => other.into(),
    }
}
