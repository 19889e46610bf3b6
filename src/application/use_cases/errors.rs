// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

use crate::application::dto::form_errors::FormErrors;
use crate::domain::repositories::RepositoryError;

/// 用例执行错误
#[derive(Error, Debug)]
pub enum UseCaseError {
    /// 表单校验失败，携带字段级错误
    #[error("Validation failed: {0}")]
    Validation(FormErrors),
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl UseCaseError {
    /// 单个字段的校验错误
    pub fn field(field: &str, message: impl Into<String>) -> Self {
        let mut errors = FormErrors::new();
        errors.add(field, message);
        UseCaseError::Validation(errors)
    }

    pub fn not_found() -> Self {
        UseCaseError::Repository(RepositoryError::NotFound)
    }
}

impl From<FormErrors> for UseCaseError {
    fn from(errors: FormErrors) -> Self {
        UseCaseError::Validation(errors)
    }
}
