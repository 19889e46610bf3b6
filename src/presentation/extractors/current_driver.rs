// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::FromRequestParts;
use axum::http::{request::Parts, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::domain::models::driver::Driver;

/// 当前登录的司机
///
/// 由认证中间件写入请求扩展，处理器通过提取器读取
#[derive(Debug, Clone)]
pub struct CurrentDriver {
    pub driver: Driver,
    pub session_key: String,
}

impl<S> FromRequestParts<S> for CurrentDriver
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentDriver>()
            .cloned()
            .ok_or_else(|| {
                let body = Json(json!({ "error": "Authentication required" }));
                (StatusCode::UNAUTHORIZED, body).into_response()
            })
    }
}
