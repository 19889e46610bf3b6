// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::services::password_hasher;

/// 司机实体
///
/// 司机同时也是系统的登录账号：除了驾照号码以外，还携带用户名、
/// 密码哈希以及员工/超级用户标记。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Driver {
    /// 主键
    pub id: i32,
    /// 登录用户名，全局唯一
    pub username: String,
    /// 密码哈希，永远不会序列化到响应中
    #[serde(skip_serializing, default)]
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// 驾照号码，格式为三个大写字母加五位数字
    pub license_number: Option<String>,
    /// 是否可以访问管理后台
    pub is_staff: bool,
    pub is_superuser: bool,
    pub is_active: bool,
    pub date_joined: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

impl Driver {
    /// 司机详情页地址
    pub fn absolute_url(&self) -> String {
        format!("/drivers/{}/", self.id)
    }

    /// 校验明文密码是否与存储的哈希匹配
    pub fn check_password(&self, raw_password: &str) -> bool {
        password_hasher::verify_password(raw_password, &self.password)
    }

    /// 是否设置了可用密码
    pub fn has_usable_password(&self) -> bool {
        password_hasher::is_usable(&self.password)
    }
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} {})",
            self.username, self.first_name, self.last_name
        )
    }
}

/// 待创建的司机
///
/// `password` 必须已经是哈希值（或不可用密码标记）
#[derive(Debug, Clone, Default)]
pub struct NewDriver {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub license_number: Option<String>,
    pub is_staff: bool,
    pub is_superuser: bool,
}

/// 管理后台可编辑的司机字段
#[derive(Debug, Clone, Default)]
pub struct DriverChanges {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub license_number: Option<String>,
    pub is_active: bool,
    pub is_staff: bool,
    pub is_superuser: bool,
}
