// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::RepositoryError;
use crate::domain::models::session::Session;
use async_trait::async_trait;
use chrono::Duration;

/// 会话仓库特质
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// 为司机创建新会话
    async fn create(&self, driver_id: i32, ttl: Duration) -> Result<Session, RepositoryError>;
    /// 查找未过期的会话
    async fn find_active(&self, session_key: &str) -> Result<Option<Session>, RepositoryError>;
    /// 访问计数加一并返回新值
    async fn increment_visits(&self, session_key: &str) -> Result<i32, RepositoryError>;
    /// 删除会话
    async fn delete(&self, session_key: &str) -> Result<(), RepositoryError>;
    /// 清理过期会话
    async fn purge_expired(&self) -> Result<u64, RepositoryError>;
}
