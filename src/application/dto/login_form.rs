// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::form_errors::{clean_form, FormErrors};

pub const INVALID_LOGIN_MESSAGE: &str = "Please enter a correct username and password. Note that both fields may be case-sensitive.";

/// 登录表单
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct LoginForm {
    #[validate(length(max = 150, message = "Ensure this value has at most 150 characters."))]
    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub password: String,

    /// 登录成功后的跳转地址
    #[serde(default)]
    pub next: Option<String>,
}

impl LoginForm {
    pub fn clean(&self) -> Result<(), FormErrors> {
        clean_form(
            self,
            &[("username", self.username.as_str()), ("password", self.password.as_str())],
        )
    }

    /// 返回安全的跳转地址
    ///
    /// 只接受以单个 `/` 开头的站内路径，其余情况回退到首页
    pub fn redirect_target(&self) -> String {
        match self.next.as_deref() {
            Some(next) if is_local_path(next) => next.to_string(),
            _ => "/".to_string(),
        }
    }
}

/// 是否为站内相对路径
pub fn is_local_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//") && !path.contains('\\')
}
