// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::application::dto::form_errors::FormErrors;
use crate::application::use_cases::UseCaseError;
use crate::domain::repositories::RepositoryError;

/// 应用错误类型
///
/// 封装所有可能的应用层错误，提供统一的错误处理接口：
/// 表单错误返回 400 与字段错误表，记录不存在返回 404，其余返回 500
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl AppError {
    fn status(&self) -> StatusCode {
        if let Some(err) = self.0.downcast_ref::<UseCaseError>() {
            return match err {
                UseCaseError::Validation(_) => StatusCode::BAD_REQUEST,
                UseCaseError::Repository(repo_err) => repository_status(repo_err),
                UseCaseError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
        }
        if let Some(err) = self.0.downcast_ref::<RepositoryError>() {
            return repository_status(err);
        }
        if self.0.downcast_ref::<FormErrors>().is_some() {
            return StatusCode::BAD_REQUEST;
        }
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn form_errors(&self) -> Option<&FormErrors> {
        match self.0.downcast_ref::<UseCaseError>() {
            Some(UseCaseError::Validation(errors)) => Some(errors),
            _ => self.0.downcast_ref::<FormErrors>(),
        }
    }
}

fn repository_status(err: &RepositoryError) -> StatusCode {
    match err {
        RepositoryError::NotFound => StatusCode::NOT_FOUND,
        RepositoryError::Duplicate(_) | RepositoryError::InvalidReference(_) => {
            StatusCode::BAD_REQUEST
        }
        RepositoryError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if let Some(errors) = self.form_errors() {
            return (status, Json(json!({ "errors": errors }))).into_response();
        }

        if status.is_server_error() {
            tracing::error!("Request failed: {:#}", self.0);
        }

        let body = Json(json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
