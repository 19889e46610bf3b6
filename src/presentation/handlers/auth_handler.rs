// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Query, State},
    response::Response,
    Form, Json,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use serde_json::{json, Value};

use super::found;
use crate::{
    application::dto::login_form::LoginForm,
    presentation::{errors::AppError, middleware::auth_middleware::AuthState},
};

#[derive(Debug, Default, Deserialize)]
pub struct LoginPageQuery {
    pub next: Option<String>,
}

/// 登录页：返回表单字段与跳转目标
pub async fn login_page(Query(query): Query<LoginPageQuery>) -> Json<Value> {
    Json(json!({
        "form": { "fields": ["username", "password"] },
        "next": query.next.unwrap_or_default(),
    }))
}

/// 校验账号密码，成功后设置会话Cookie并跳转
pub async fn login(
    State(state): State<AuthState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Result<(CookieJar, Response), AppError> {
    let (_driver, session) = state.auth_use_case().login(&form).await?;

    let cookie = Cookie::build((state.settings.session_cookie_name.clone(), session.session_key))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();

    Ok((jar.add(cookie), found(form.redirect_target())))
}

/// 删除当前会话并清除Cookie
pub async fn logout(
    State(state): State<AuthState>,
    jar: CookieJar,
) -> Result<(CookieJar, Response), AppError> {
    let name = state.settings.session_cookie_name.clone();
    if let Some(cookie) = jar.get(&name) {
        state.auth_use_case().logout(cookie.value()).await?;
    }

    let removal = Cookie::build((name, "")).path("/").build();
    Ok((jar.remove(removal), found(&state.settings.login_url)))
}
