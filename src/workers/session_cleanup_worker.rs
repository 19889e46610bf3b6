// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::repositories::session_repository::SessionRepository;
use crate::domain::repositories::RepositoryError;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// 过期会话清理工作器
///
/// 定期删除已过期的会话记录
pub struct SessionCleanupWorker<R>
where
    R: SessionRepository + 'static,
{
    repository: Arc<R>,
    interval: Duration,
}

impl<R> SessionCleanupWorker<R>
where
    R: SessionRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            interval: Duration::from_secs(60 * 60), // 每小时运行一次
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// 运行工作器
    pub async fn run(&self) {
        info!("Session cleanup worker started");

        let mut interval = tokio::time::interval(self.interval);

        loop {
            interval.tick().await;

            match self.cleanup_expired_sessions().await {
                Ok(count) => {
                    if count > 0 {
                        info!("Cleaned up {} expired sessions", count);
                    }
                }
                Err(e) => {
                    error!("Failed to cleanup expired sessions: {}", e);
                }
            }
        }
    }

    /// 启动后台运行
    pub fn start(self) -> JoinHandle<()> {
        tokio::spawn(async move {
            self.run().await;
        })
    }

    pub async fn cleanup_expired_sessions(&self) -> Result<u64, RepositoryError> {
        self.repository.purge_expired().await
    }
}

#[cfg(test)]
#[path = "session_cleanup_worker_test.rs"]
mod tests;
