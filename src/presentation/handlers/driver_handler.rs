// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, Path, Query},
    response::Response,
    Form, Json,
};
use serde_json::{json, Value};
use std::sync::Arc;

use super::found;
use crate::{
    application::{
        dto::{
            driver_form::{DriverCreationForm, DriverLicenseUpdateForm},
            search_query::DriverSearchQuery,
        },
        use_cases::{driver_use_case::DriverUseCase, UseCaseError},
    },
    domain::{
        repositories::{car_repository::CarRepository, driver_repository::DriverRepository},
        services::password_hasher::PasswordHasher,
    },
    presentation::errors::AppError,
};

const LIST_URL: &str = "/drivers/";

/// 司机列表，按ID排序，支持 `?username=` 子串搜索
pub async fn list_drivers<D>(
    Extension(repo): Extension<Arc<D>>,
    Query(query): Query<DriverSearchQuery>,
) -> Result<Json<Value>, AppError>
where
    D: DriverRepository + 'static,
{
    let drivers = repo.list(query.username.as_deref()).await?;

    Ok(Json(json!({
        "driver_list": drivers,
        "search_form": { "username": query.username.unwrap_or_default() },
    })))
}

/// 司机详情，附带其被分配的车辆
pub async fn driver_detail<D, C>(
    Extension(drivers): Extension<Arc<D>>,
    Extension(cars): Extension<Arc<C>>,
    Path(pk): Path<i32>,
) -> Result<Json<Value>, AppError>
where
    D: DriverRepository + 'static,
    C: CarRepository + 'static,
{
    let driver = drivers
        .find_by_id(pk)
        .await?
        .ok_or_else(UseCaseError::not_found)?;
    let assigned = cars.list_by_driver(driver.id).await?;

    Ok(Json(json!({
        "driver": driver,
        "cars": assigned,
    })))
}

/// 提交注册表单，成功后跳转到新司机的详情页
pub async fn create_driver<D>(
    Extension(repo): Extension<Arc<D>>,
    Extension(hasher): Extension<PasswordHasher>,
    Form(form): Form<DriverCreationForm>,
) -> Result<Response, AppError>
where
    D: DriverRepository + 'static,
{
    let driver = DriverUseCase::new(repo, hasher).create(form).await?;
    Ok(found(driver.absolute_url()))
}

pub async fn update_driver_license<D>(
    Extension(repo): Extension<Arc<D>>,
    Extension(hasher): Extension<PasswordHasher>,
    Path(pk): Path<i32>,
    Form(form): Form<DriverLicenseUpdateForm>,
) -> Result<Response, AppError>
where
    D: DriverRepository + 'static,
{
    DriverUseCase::new(repo, hasher)
        .update_license(pk, form)
        .await?;
    Ok(found(LIST_URL))
}

pub async fn delete_driver<D>(
    Extension(repo): Extension<Arc<D>>,
    Extension(hasher): Extension<PasswordHasher>,
    Path(pk): Path<i32>,
) -> Result<Response, AppError>
where
    D: DriverRepository + 'static,
{
    DriverUseCase::new(repo, hasher).delete(pk).await?;
    Ok(found(LIST_URL))
}
