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
        dto::{manufacturer_form::ManufacturerForm, search_query::ManufacturerSearchQuery},
        use_cases::manufacturer_use_case::ManufacturerUseCase,
    },
    domain::repositories::manufacturer_repository::ManufacturerRepository,
    presentation::errors::AppError,
};

const LIST_URL: &str = "/manufacturers/";

/// 制造商列表，按名称排序，支持 `?name=` 子串搜索
pub async fn list_manufacturers<M>(
    Extension(repo): Extension<Arc<M>>,
    Query(query): Query<ManufacturerSearchQuery>,
) -> Result<Json<Value>, AppError>
where
    M: ManufacturerRepository + 'static,
{
    let manufacturers = repo.list(query.name.as_deref()).await?;

    Ok(Json(json!({
        "manufacturer_list": manufacturers,
        "search_form": { "name": query.name.unwrap_or_default() },
    })))
}

pub async fn create_manufacturer<M>(
    Extension(repo): Extension<Arc<M>>,
    Form(form): Form<ManufacturerForm>,
) -> Result<Response, AppError>
where
    M: ManufacturerRepository + 'static,
{
    ManufacturerUseCase::new(repo).create(form).await?;
    Ok(found(LIST_URL))
}

pub async fn update_manufacturer<M>(
    Extension(repo): Extension<Arc<M>>,
    Path(pk): Path<i32>,
    Form(form): Form<ManufacturerForm>,
) -> Result<Response, AppError>
where
    M: ManufacturerRepository + 'static,
{
    ManufacturerUseCase::new(repo).update(pk, form).await?;
    Ok(found(LIST_URL))
}

/// 删除制造商，其车辆随之级联删除
pub async fn delete_manufacturer<M>(
    Extension(repo): Extension<Arc<M>>,
    Path(pk): Path<i32>,
) -> Result<Response, AppError>
where
    M: ManufacturerRepository + 'static,
{
    ManufacturerUseCase::new(repo).delete(pk).await?;
    Ok(found(LIST_URL))
}
