// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{Duration, Utc};
use std::sync::Arc;
use tracing::{info, warn};

use super::UseCaseError;
use crate::{
    application::dto::{
        form_errors::NON_FIELD_ERRORS,
        login_form::{LoginForm, INVALID_LOGIN_MESSAGE},
    },
    domain::{
        models::{driver::Driver, session::Session},
        repositories::{driver_repository::DriverRepository, session_repository::SessionRepository},
        services::password_hasher,
    },
    infrastructure::metrics,
};

/// 会话登录、登出与当前用户解析
pub struct AuthUseCase<D, S> {
    drivers: Arc<D>,
    sessions: Arc<S>,
    session_ttl: Duration,
}

impl<D, S> AuthUseCase<D, S>
where
    D: DriverRepository + 'static,
    S: SessionRepository + 'static,
{
    pub fn new(drivers: Arc<D>, sessions: Arc<S>, session_ttl: Duration) -> Self {
        Self {
            drivers,
            sessions,
            session_ttl,
        }
    }

    /// 校验用户名和密码并创建会话
    ///
    /// 用户不存在、密码错误或账号被停用都返回同一个非字段错误
    pub async fn login(&self, form: &LoginForm) -> Result<(Driver, Session), UseCaseError> {
        form.clean()?;

        let Some(driver) = self.authenticate(&form.username, &form.password).await? else {
            metrics::record_login("failure");
            warn!("Failed login attempt for username {:?}", form.username);
            return Err(UseCaseError::field(NON_FIELD_ERRORS, INVALID_LOGIN_MESSAGE));
        };

        let session = self.sessions.create(driver.id, self.session_ttl).await?;
        self.drivers.touch_last_login(driver.id, Utc::now()).await?;

        metrics::record_login("success");
        info!("Driver {} logged in", driver.username);
        Ok((driver, session))
    }

    pub async fn logout(&self, session_key: &str) -> Result<(), UseCaseError> {
        self.sessions.delete(session_key).await?;
        Ok(())
    }

    /// 根据会话键解析当前登录的司机
    ///
    /// 会话不存在、已过期或账号已停用时返回 `None`
    pub async fn current_driver(
        &self,
        session_key: &str,
    ) -> Result<Option<(Driver, Session)>, UseCaseError> {
        let Some(session) = self.sessions.find_active(session_key).await? else {
            return Ok(None);
        };
        let driver = self.drivers.find_by_id(session.driver_id).await?;
        Ok(driver
            .filter(|driver| driver.is_active)
            .map(|driver| (driver, session)))
    }

    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<Driver>, UseCaseError> {
        let Some(driver) = self.drivers.find_by_username(username).await? else {
            return Ok(None);
        };
        if !driver.is_active || !driver.has_usable_password() {
            return Ok(None);
        }

        let encoded = driver.password.clone();
        let raw_password = password.to_string();
        let valid = tokio::task::spawn_blocking(move || {
            password_hasher::verify_password(&raw_password, &encoded)
        })
        .await
        .map_err(anyhow::Error::from)?;

        Ok(valid.then_some(driver))
    }
}
