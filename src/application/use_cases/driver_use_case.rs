// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use tracing::{debug, info};

use super::UseCaseError;
use crate::{
    application::dto::{
        driver_form::{
            DriverAdminChangeForm, DriverCreationForm, DriverLicenseUpdateForm,
            LICENSE_TAKEN_MESSAGE, PASSWORD_MISMATCH_MESSAGE, USERNAME_TAKEN_MESSAGE,
        },
        form_errors::FormErrors,
    },
    domain::{
        models::driver::{Driver, DriverChanges, NewDriver},
        repositories::{driver_repository::DriverRepository, RepositoryError},
        services::{
            password_hasher::PasswordHasher,
            password_validation::{validate_password, UserAttributes},
        },
    },
    infrastructure::metrics,
};

/// 司机账号相关用例
///
/// 创建（注册表单与后台添加共用）、驾照号码更新、后台编辑和删除
pub struct DriverUseCase<D> {
    repo: Arc<D>,
    hasher: PasswordHasher,
}

impl<D> DriverUseCase<D>
where
    D: DriverRepository + 'static,
{
    pub fn new(repo: Arc<D>, hasher: PasswordHasher) -> Self {
        Self { repo, hasher }
    }

    /// 校验注册表单并创建司机
    ///
    /// 校验顺序：字段格式、两次密码一致、密码强度、用户名与驾照号码唯一性。
    /// 全部通过后才会对 `password1` 进行哈希并写入数据库
    pub async fn create(&self, form: DriverCreationForm) -> Result<Driver, UseCaseError> {
        self.clean_creation(&form).await?;

        let hasher = self.hasher.clone();
        let raw_password = form.password1.clone();
        let password = tokio::task::spawn_blocking(move || hasher.hash(&raw_password))
            .await
            .map_err(anyhow::Error::from)?;

        let new_driver = NewDriver {
            username: form.username,
            password,
            first_name: form.first_name,
            last_name: form.last_name,
            email: String::new(),
            license_number: Some(form.license_number),
            is_staff: false,
            is_superuser: false,
        };

        let driver = self
            .repo
            .create(&new_driver)
            .await
            .map_err(duplicate_on_create)?;

        metrics::record_created("driver");
        info!("Created driver {} ({})", driver.id, driver.username);
        Ok(driver)
    }

    /// 更新司机的驾照号码
    pub async fn update_license(
        &self,
        id: i32,
        form: DriverLicenseUpdateForm,
    ) -> Result<Driver, UseCaseError> {
        self.find(id).await?;

        let mut errors = form.clean().err().unwrap_or_default();
        self.check_license(&mut errors, Some(form.license_number.as_str()), Some(id))
            .await?;
        errors.into_result()?;

        let driver = self
            .repo
            .update_license_number(id, &form.license_number)
            .await
            .map_err(duplicate_license)?;
        debug!("Updated license number of driver {}", id);
        Ok(driver)
    }

    /// 后台编辑司机
    pub async fn admin_change(
        &self,
        id: i32,
        form: DriverAdminChangeForm,
    ) -> Result<Driver, UseCaseError> {
        self.find(id).await?;

        let mut errors = form.clean().err().unwrap_or_default();
        self.check_license(&mut errors, form.license_number.as_deref(), Some(id))
            .await?;
        errors.into_result()?;

        let changes = DriverChanges {
            first_name: form.first_name.trim().to_string(),
            last_name: form.last_name.trim().to_string(),
            email: form.email.unwrap_or_default(),
            license_number: form.license_number,
            is_active: form.is_active,
            is_staff: form.is_staff,
            is_superuser: form.is_superuser,
        };
        let driver = self
            .repo
            .update(id, &changes)
            .await
            .map_err(duplicate_license)?;
        info!("Driver {} changed via admin", id);
        Ok(driver)
    }

    pub async fn delete(&self, id: i32) -> Result<(), UseCaseError> {
        self.repo.delete(id).await?;
        info!("Deleted driver {}", id);
        Ok(())
    }

    async fn find(&self, id: i32) -> Result<Driver, UseCaseError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(UseCaseError::not_found)
    }

    async fn clean_creation(&self, form: &DriverCreationForm) -> Result<(), UseCaseError> {
        let mut errors = form.clean().err().unwrap_or_default();

        // strength rules only run once both password fields are present and equal
        if !errors.has_field("password1") && !errors.has_field("password2") {
            if form.password1 != form.password2 {
                errors.add("password2", PASSWORD_MISMATCH_MESSAGE);
            } else {
                let attributes = UserAttributes {
                    username: &form.username,
                    first_name: &form.first_name,
                    last_name: &form.last_name,
                    email: "",
                };
                for message in validate_password(&form.password2, &attributes) {
                    errors.add("password2", message);
                }
            }
        }

        if !errors.has_field("username") && self.repo.username_taken(&form.username).await? {
            errors.add("username", USERNAME_TAKEN_MESSAGE);
        }

        self.check_license(&mut errors, Some(form.license_number.as_str()), None)
            .await?;

        Ok(errors.into_result()?)
    }

    async fn check_license(
        &self,
        errors: &mut FormErrors,
        license_number: Option<&str>,
        exclude_id: Option<i32>,
    ) -> Result<(), UseCaseError> {
        let Some(license_number) = license_number else {
            return Ok(());
        };
        if !errors.has_field("license_number")
            && self
                .repo
                .license_number_taken(license_number, exclude_id)
                .await?
        {
            errors.add("license_number", LICENSE_TAKEN_MESSAGE);
        }
        Ok(())
    }
}

/// 插入时的唯一约束冲突按约束所在列映射到表单字段
fn duplicate_on_create(err: RepositoryError) -> UseCaseError {
    match err {
        RepositoryError::Duplicate(message) if message.contains("license_number") => {
            UseCaseError::field("license_number", LICENSE_TAKEN_MESSAGE)
        }
        RepositoryError::Duplicate(_) => UseCaseError::field("username", USERNAME_TAKEN_MESSAGE),
        other => other.into(),
    }
}

fn duplicate_license(err: RepositoryError) -> UseCaseError {
    match err {
        RepositoryError::Duplicate(_) => {
            UseCaseError::field("license_number", LICENSE_TAKEN_MESSAGE)
        }
        other => other.into(),
    }
}
