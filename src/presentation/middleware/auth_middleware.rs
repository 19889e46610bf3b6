// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::extract::CookieJar;
use sea_orm::DatabaseConnection;
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

use crate::{
    application::use_cases::auth_use_case::AuthUseCase,
    config::settings::AuthSettings,
    infrastructure::repositories::{
        driver_repo_impl::DriverRepositoryImpl, session_repo_impl::SessionRepositoryImpl,
    },
    presentation::{errors::AppError, extractors::current_driver::CurrentDriver},
};

/// 认证状态
#[derive(Clone)]
pub struct AuthState {
    /// 数据库连接
    pub db: Arc<DatabaseConnection>,
    /// 会话配置
    pub settings: Arc<AuthSettings>,
}

impl AuthState {
    pub fn new(db: Arc<DatabaseConnection>, settings: AuthSettings) -> Self {
        Self {
            db,
            settings: Arc::new(settings),
        }
    }

    pub fn auth_use_case(&self) -> AuthUseCase<DriverRepositoryImpl, SessionRepositoryImpl> {
        AuthUseCase::new(
            Arc::new(DriverRepositoryImpl::new(self.db.clone())),
            Arc::new(SessionRepositoryImpl::new(self.db.clone())),
            chrono::Duration::seconds(self.settings.session_ttl_secs),
        )
    }
}

/// 认证中间件
///
/// 从会话Cookie解析当前司机并写入请求扩展。
/// 没有有效会话的请求被重定向到登录页，`next` 参数携带原始路径
pub async fn auth_middleware(
    State(state): State<AuthState>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path_and_query = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());
    debug!("AuthMiddleware processing path: {}", path_and_query);

    let session_key = jar
        .get(&state.settings.session_cookie_name)
        .map(|cookie| cookie.value().to_string())
        .filter(|key| !key.is_empty());

    let current = match session_key {
        Some(key) => state.auth_use_case().current_driver(&key).await?,
        None => None,
    };

    match current {
        Some((driver, session)) => {
            req.extensions_mut().insert(CurrentDriver {
                driver,
                session_key: session.session_key,
            });
            Ok(next.run(req).await)
        }
        None => {
            debug!("Anonymous request to {}, redirecting to login", path_and_query);
            Ok(login_redirect(&state.settings.login_url, &path_and_query))
        }
    }
}

/// 后台权限中间件
///
/// 必须放在认证中间件之内；非员工账号返回 403
pub async fn staff_middleware(req: Request, next: Next) -> Response {
    let is_staff = req
        .extensions()
        .get::<CurrentDriver>()
        .map(|current| current.driver.is_active && current.driver.is_staff)
        .unwrap_or(false);

    if !is_staff {
        let body = Json(json!({ "error": "You do not have permission to access this page." }));
        return (StatusCode::FORBIDDEN, body).into_response();
    }

    next.run(req).await
}

/// 构造 302 跳转到登录页的响应
pub fn login_redirect(login_url: &str, next: &str) -> Response {
    let location = format!("{}?next={}", login_url, urlencoding::encode(next));
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}
