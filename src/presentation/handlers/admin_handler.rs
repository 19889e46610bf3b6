// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 管理后台
//!
//! 只对员工账号开放（见 `staff_middleware`）。司机的列表展示包含驾照号码，
//! 编辑页在默认账号分组之外增加 "Additional info" 分组。

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
            driver_form::{DriverAdminChangeForm, DriverCreationForm},
            search_query::AdminListQuery,
        },
        use_cases::{driver_use_case::DriverUseCase, UseCaseError},
    },
    domain::{
        models::driver::Driver,
        repositories::{
            car_repository::{CarQueryParams, CarRepository},
            driver_repository::DriverRepository,
            manufacturer_repository::ManufacturerRepository,
        },
        services::password_hasher::{self, PasswordHasher},
    },
    presentation::errors::AppError,
};

pub const DRIVER_LIST_DISPLAY: [&str; 6] = [
    "username",
    "email",
    "first_name",
    "last_name",
    "is_staff",
    "license_number",
];
const DRIVER_SEARCH_FIELDS: [&str; 4] = ["username", "first_name", "last_name", "email"];
const DRIVER_CHANGELIST_URL: &str = "/admin/taxi/driver/";

/// 司机列表
pub async fn driver_changelist<D>(
    Extension(repo): Extension<Arc<D>>,
    Query(query): Query<AdminListQuery>,
) -> Result<Json<Value>, AppError>
where
    D: DriverRepository + 'static,
{
    let q = query.q.unwrap_or_default();
    let drivers = repo.search(q.trim()).await?;

    let results: Vec<Value> = drivers
        .iter()
        .map(|d| {
            json!({
                "id": d.id,
                "username": d.username,
                "email": d.email,
                "first_name": d.first_name,
                "last_name": d.last_name,
                "is_staff": d.is_staff,
                "license_number": d.license_number,
            })
        })
        .collect();

    Ok(Json(json!({
        "model": "driver",
        "list_display": DRIVER_LIST_DISPLAY,
        "search_fields": DRIVER_SEARCH_FIELDS,
        "q": q,
        "result_count": results.len(),
        "results": results,
    })))
}

/// 司机编辑页
pub async fn driver_change_view<D>(
    Extension(repo): Extension<Arc<D>>,
    Path(pk): Path<i32>,
) -> Result<Json<Value>, AppError>
where
    D: DriverRepository + 'static,
{
    let driver = repo
        .find_by_id(pk)
        .await?
        .ok_or_else(UseCaseError::not_found)?;

    Ok(Json(json!({
        "original": driver.to_string(),
        "object_id": driver.id,
        "fieldsets": driver_fieldsets(&driver),
    })))
}

pub async fn driver_change<D>(
    Extension(repo): Extension<Arc<D>>,
    Extension(hasher): Extension<PasswordHasher>,
    Path(pk): Path<i32>,
    Form(form): Form<DriverAdminChangeForm>,
) -> Result<Response, AppError>
where
    D: DriverRepository + 'static,
{
    DriverUseCase::new(repo, hasher)
        .admin_change(pk, form)
        .await?;
    Ok(found(DRIVER_CHANGELIST_URL))
}

/// 司机添加页的字段分组
pub async fn driver_add_view() -> Json<Value> {
    Json(json!({
        "add_fieldsets": [
            { "name": null, "fields": ["username", "password1", "password2"] },
            {
                "name": "Additional info",
                "fields": ["first_name", "last_name", "license_number"]
            },
        ]
    }))
}

/// 后台添加司机，校验规则与注册表单相同，成功后进入编辑页
pub async fn driver_add<D>(
    Extension(repo): Extension<Arc<D>>,
    Extension(hasher): Extension<PasswordHasher>,
    Form(form): Form<DriverCreationForm>,
) -> Result<Response, AppError>
where
    D: DriverRepository + 'static,
{
    let driver = DriverUseCase::new(repo, hasher).create(form).await?;
    Ok(found(format!("{}{}/change/", DRIVER_CHANGELIST_URL, driver.id)))
}

pub async fn car_changelist<C, M>(
    Extension(cars): Extension<Arc<C>>,
    Extension(manufacturers): Extension<Arc<M>>,
    Query(query): Query<AdminListQuery>,
) -> Result<Json<Value>, AppError>
where
    C: CarRepository + 'static,
    M: ManufacturerRepository + 'static,
{
    let q = query.q.unwrap_or_default();
    let cars = cars
        .query(CarQueryParams {
            model: Some(q.trim().to_string()),
            manufacturer_id: query.manufacturer_id,
        })
        .await?;
    let filter_choices: Vec<Value> = manufacturers
        .list(None)
        .await?
        .iter()
        .map(|m| json!({ "id": m.id, "display": m.to_string() }))
        .collect();

    let results: Vec<Value> = cars
        .iter()
        .map(|car| {
            json!({
                "id": car.id,
                "model": car.model,
                "manufacturer": car.manufacturer.to_string(),
            })
        })
        .collect();

    Ok(Json(json!({
        "model": "car",
        "search_fields": ["model"],
        "list_filter": { "manufacturer": filter_choices },
        "q": q,
        "manufacturer__id__exact": query.manufacturer_id,
        "result_count": results.len(),
        "results": results,
    })))
}

pub async fn manufacturer_changelist<M>(
    Extension(repo): Extension<Arc<M>>,
    Query(query): Query<AdminListQuery>,
) -> Result<Json<Value>, AppError>
where
    M: ManufacturerRepository + 'static,
{
    let q = query.q.unwrap_or_default();
    let manufacturers = repo.search(q.trim()).await?;

    Ok(Json(json!({
        "model": "manufacturer",
        "search_fields": ["name", "country"],
        "q": q,
        "result_count": manufacturers.len(),
        "results": manufacturers,
    })))
}

fn driver_fieldsets(driver: &Driver) -> Value {
    json!([
        {
            "name": null,
            "fields": {
                "username": driver.username,
                "password": password_summary(&driver.password),
            }
        },
        {
            "name": "Personal info",
            "fields": {
                "first_name": driver.first_name,
                "last_name": driver.last_name,
                "email": driver.email,
            }
        },
        {
            "name": "Permissions",
            "fields": {
                "is_active": driver.is_active,
                "is_staff": driver.is_staff,
                "is_superuser": driver.is_superuser,
            }
        },
        {
            "name": "Important dates",
            "fields": {
                "last_login": driver.last_login,
                "date_joined": driver.date_joined,
            }
        },
        {
            "name": "Additional info",
            "fields": { "license_number": driver.license_number }
        },
    ])
}

/// 只展示算法与迭代次数，不暴露盐和哈希
fn password_summary(encoded: &str) -> String {
    if !password_hasher::is_usable(encoded) {
        return "No password set.".to_string();
    }
    let mut parts = encoded.split('$');
    match (parts.next(), parts.next()) {
        (Some(algorithm), Some(iterations)) => {
            format!("algorithm: {} iterations: {}", algorithm, iterations)
        }
        _ => "Invalid password format or unknown hashing algorithm.".to_string(),
    }
}
