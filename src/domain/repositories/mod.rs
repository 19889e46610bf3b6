// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

pub mod car_repository;
/// 仓库接口模块
///
/// 该模块定义了领域层的仓库接口，遵循依赖倒置原则。
/// 具体实现由基础设施层提供。
///
/// 包含的仓库接口：
/// - 车辆仓库（car_repository）：车辆及其司机分配
/// - 司机仓库（driver_repository）：司机账号
/// - 制造商仓库（manufacturer_repository）
/// - 会话仓库（session_repository）：登录会话
pub mod driver_repository;
pub mod manufacturer_repository;
pub mod session_repository;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(DbErr),
    /// 记录未找到
    #[error("Record not found")]
    NotFound,
    /// 违反唯一约束
    #[error("Duplicate value: {0}")]
    Duplicate(String),
    /// 引用了不存在的记录
    #[error("Invalid reference: {0}")]
    InvalidReference(String),
}

impl From<DbErr> for RepositoryError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => RepositoryError::Duplicate(msg),
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
                RepositoryError::InvalidReference(msg)
            }
            _ => match err {
                DbErr::RecordNotFound(_) => RepositoryError::NotFound,
                other => RepositoryError::Database(other),
            },
        }
    }
}
