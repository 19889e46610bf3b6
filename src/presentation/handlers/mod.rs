// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

/// HTTP请求处理器模块
///
/// 包含各个端点的具体处理逻辑
/// 每个处理器负责处理特定类型的HTTP请求并返回JSON响应或重定向
pub mod admin_handler;
pub mod auth_handler;
pub mod car_handler;
pub mod driver_handler;
pub mod index_handler;
pub mod manufacturer_handler;

/// 302 重定向
pub fn found(location: impl AsRef<str>) -> Response {
    (
        StatusCode::FOUND,
        [(header::LOCATION, location.as_ref().to_string())],
    )
        .into_response()
}
