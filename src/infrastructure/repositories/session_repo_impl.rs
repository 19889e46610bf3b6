// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::session::Session;
use crate::domain::repositories::session_repository::SessionRepository;
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::database::entities::session;
use async_trait::async_trait;
use chrono::{Duration, Utc};
use sea_orm::{sea_query::Expr, *};
use std::sync::Arc;

/// 会话仓库实现
#[derive(Clone)]
pub struct SessionRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl SessionRepositoryImpl {
    /// 创建新的会话仓库实现
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

/// 生成64位十六进制会话密钥
fn generate_session_key() -> String {
    hex::encode(rand::random::<[u8; 32]>())
}

#[async_trait]
impl SessionRepository for SessionRepositoryImpl {
    async fn create(&self, driver_id: i32, ttl: Duration) -> Result<Session, RepositoryError> {
        let now = Utc::now();
        let model = session::ActiveModel {
            session_key: Set(generate_session_key()),
            driver_id: Set(driver_id),
            num_visits: Set(0),
            created_at: Set(now.into()),
            expires_at: Set((now + ttl).into()),
        };

        let saved = model.insert(self.db.as_ref()).await?;
        Ok(saved.into())
    }

    async fn find_active(&self, session_key: &str) -> Result<Option<Session>, RepositoryError> {
        let model = session::Entity::find_by_id(session_key.to_string())
            .one(self.db.as_ref())
            .await?;

        Ok(model
            .map(Session::from)
            .filter(|s| !s.is_expired(Utc::now())))
    }

    async fn increment_visits(&self, session_key: &str) -> Result<i32, RepositoryError> {
        session::Entity::update_many()
            .col_expr(
                session::Column::NumVisits,
                Expr::col(session::Column::NumVisits).add(1),
            )
            .filter(session::Column::SessionKey.eq(session_key))
            .exec(self.db.as_ref())
            .await?;

        let model = session::Entity::find_by_id(session_key.to_string())
            .one(self.db.as_ref())
            .await?
            .ok_or(RepositoryError::NotFound)?;

        Ok(model.num_visits)
    }

    async fn delete(&self, session_key: &str) -> Result<(), RepositoryError> {
        session::Entity::delete_by_id(session_key.to_string())
            .exec(self.db.as_ref())
            .await?;
        Ok(())
    }

    async fn purge_expired(&self) -> Result<u64, RepositoryError> {
        let now = Utc::now().fixed_offset();
        let result = session::Entity::delete_many()
            .filter(session::Column::ExpiresAt.lte(now))
            .exec(self.db.as_ref())
            .await?;

        Ok(result.rows_affected)
    }
}

impl From<session::Model> for Session {
    fn from(model: session::Model) -> Self {
        Self {
            session_key: model.session_key,
            driver_id: model.driver_id,
            num_visits: model.num_visits,
            created_at: model.created_at.into(),
            expires_at: model.expires_at.into(),
        }
    }
}
