// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, Path, Query},
    response::Response,
    Json,
};
// repeated `drivers` keys need the serde_html_form based extractor
use axum_extra::extract::Form;
use serde_json::{json, Value};
use std::sync::Arc;

use super::found;
use crate::{
    application::{
        dto::{car_form::CarForm, search_query::CarSearchQuery},
        use_cases::{car_use_case::CarUseCase, UseCaseError},
    },
    domain::repositories::{
        car_repository::CarRepository, driver_repository::DriverRepository,
        manufacturer_repository::ManufacturerRepository,
    },
    presentation::{errors::AppError, extractors::current_driver::CurrentDriver},
};

const LIST_URL: &str = "/cars/";

/// 车辆列表，按ID排序，支持 `?model=` 子串搜索
pub async fn list_cars<C>(
    Extension(repo): Extension<Arc<C>>,
    Query(query): Query<CarSearchQuery>,
) -> Result<Json<Value>, AppError>
where
    C: CarRepository + 'static,
{
    let cars = repo.list(query.model.as_deref()).await?;

    Ok(Json(json!({
        "car_list": cars,
        "search_form": { "model": query.model.unwrap_or_default() },
    })))
}

/// 车辆详情，附带制造商与已分配的司机
pub async fn car_detail<C, D>(
    Extension(cars): Extension<Arc<C>>,
    Extension(drivers): Extension<Arc<D>>,
    Path(pk): Path<i32>,
) -> Result<Json<Value>, AppError>
where
    C: CarRepository + 'static,
    D: DriverRepository + 'static,
{
    let car = cars
        .find_by_id(pk)
        .await?
        .ok_or_else(UseCaseError::not_found)?;
    let assigned = drivers.find_many(&car.driver_ids).await?;

    Ok(Json(json!({
        "car": car,
        "drivers": assigned,
    })))
}

pub async fn create_car<C, M, D>(
    Extension(cars): Extension<Arc<C>>,
    Extension(manufacturers): Extension<Arc<M>>,
    Extension(drivers): Extension<Arc<D>>,
    Form(form): Form<CarForm>,
) -> Result<Response, AppError>
where
    C: CarRepository + 'static,
    M: ManufacturerRepository + 'static,
    D: DriverRepository + 'static,
{
    CarUseCase::new(cars, manufacturers, drivers)
        .create(form)
        .await?;
    Ok(found(LIST_URL))
}

pub async fn update_car<C, M, D>(
    Extension(cars): Extension<Arc<C>>,
    Extension(manufacturers): Extension<Arc<M>>,
    Extension(drivers): Extension<Arc<D>>,
    Path(pk): Path<i32>,
    Form(form): Form<CarForm>,
) -> Result<Response, AppError>
where
    C: CarRepository + 'static,
    M: ManufacturerRepository + 'static,
    D: DriverRepository + 'static,
{
    CarUseCase::new(cars, manufacturers, drivers)
        .update(pk, form)
        .await?;
    Ok(found(LIST_URL))
}

pub async fn delete_car<C, M, D>(
    Extension(cars): Extension<Arc<C>>,
    Extension(manufacturers): Extension<Arc<M>>,
    Extension(drivers): Extension<Arc<D>>,
    Path(pk): Path<i32>,
) -> Result<Response, AppError>
where
    C: CarRepository + 'static,
    M: ManufacturerRepository + 'static,
    D: DriverRepository + 'static,
{
    CarUseCase::new(cars, manufacturers, drivers)
        .delete(pk)
        .await?;
    Ok(found(LIST_URL))
}

/// 将当前登录的司机加入或移出该车辆
pub async fn toggle_assign_to_car<C, M, D>(
    Extension(cars): Extension<Arc<C>>,
    Extension(manufacturers): Extension<Arc<M>>,
    Extension(drivers): Extension<Arc<D>>,
    current: CurrentDriver,
    Path(pk): Path<i32>,
) -> Result<Response, AppError>
where
    C: CarRepository + 'static,
    M: ManufacturerRepository + 'static,
    D: DriverRepository + 'static,
{
    CarUseCase::new(cars, manufacturers, drivers)
        .toggle_assign(pk, current.driver.id)
        .await?;
    Ok(found(format!("/cars/{}/", pk)))
}
