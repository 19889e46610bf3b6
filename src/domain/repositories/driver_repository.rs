// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::RepositoryError;
use crate::domain::models::driver::{Driver, DriverChanges, NewDriver};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// 司机仓库特质
///
/// 定义司机（账号）数据访问接口，列表按ID排序
#[async_trait]
pub trait DriverRepository: Send + Sync {
    /// 创建司机
    async fn create(&self, driver: &NewDriver) -> Result<Driver, RepositoryError>;
    /// 根据ID查找司机
    async fn find_by_id(&self, id: i32) -> Result<Option<Driver>, RepositoryError>;
    /// 根据用户名查找司机
    async fn find_by_username(&self, username: &str) -> Result<Option<Driver>, RepositoryError>;
    /// 列出司机，`username` 非空时按子串过滤（区分大小写）
    async fn list(&self, username: Option<&str>) -> Result<Vec<Driver>, RepositoryError>;
    /// 管理后台搜索：用户名、姓名或邮箱包含关键字
    async fn search(&self, query: &str) -> Result<Vec<Driver>, RepositoryError>;
    /// 批量查找，按ID排序，不存在的ID被忽略
    async fn find_many(&self, ids: &[i32]) -> Result<Vec<Driver>, RepositoryError>;
    /// 用户名是否已存在
    async fn username_taken(&self, username: &str) -> Result<bool, RepositoryError>;
    /// 驾照号码是否已被其它司机使用
    async fn license_number_taken(
        &self,
        license_number: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, RepositoryError>;
    /// 更新驾照号码
    async fn update_license_number(
        &self,
        id: i32,
        license_number: &str,
    ) -> Result<Driver, RepositoryError>;
    /// 管理后台更新可编辑字段
    async fn update(&self, id: i32, changes: &DriverChanges) -> Result<Driver, RepositoryError>;
    /// 记录最近登录时间
    async fn touch_last_login(&self, id: i32, at: DateTime<Utc>) -> Result<(), RepositoryError>;
    /// 删除司机
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
    /// 司机总数
    async fn count(&self) -> Result<u64, RepositoryError>;
}
