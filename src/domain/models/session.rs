// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 登录会话
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// 会话密钥，写入Cookie
    pub session_key: String,
    pub driver_id: i32,
    /// 首页访问计数
    pub num_visits: i32,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}
