// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{extract::Extension, Json};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::{
    domain::repositories::{
        car_repository::CarRepository, driver_repository::DriverRepository,
        manufacturer_repository::ManufacturerRepository, session_repository::SessionRepository,
    },
    presentation::{errors::AppError, extractors::current_driver::CurrentDriver},
};

/// 首页：记录数量统计与本会话的访问次数
pub async fn index<M, D, C, S>(
    Extension(manufacturers): Extension<Arc<M>>,
    Extension(drivers): Extension<Arc<D>>,
    Extension(cars): Extension<Arc<C>>,
    Extension(sessions): Extension<Arc<S>>,
    current: CurrentDriver,
) -> Result<Json<Value>, AppError>
where
    M: ManufacturerRepository + 'static,
    D: DriverRepository + 'static,
    C: CarRepository + 'static,
    S: SessionRepository + 'static,
{
    let num_visits = sessions.increment_visits(&current.session_key).await?;

    Ok(Json(json!({
        "num_drivers": drivers.count().await?,
        "num_cars": cars.count().await?,
        "num_manufacturers": manufacturers.count().await?,
        "num_visits": num_visits,
    })))
}
