// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::RepositoryError;
use crate::domain::models::manufacturer::{Manufacturer, NewManufacturer};
use async_trait::async_trait;

/// 制造商仓库特质
///
/// 定义制造商数据访问接口，列表按名称排序
#[async_trait]
pub trait ManufacturerRepository: Send + Sync {
    /// 创建制造商
    async fn create(&self, manufacturer: &NewManufacturer)
        -> Result<Manufacturer, RepositoryError>;
    /// 根据ID查找制造商
    async fn find_by_id(&self, id: i32) -> Result<Option<Manufacturer>, RepositoryError>;
    /// 根据名称精确查找
    async fn find_by_name(&self, name: &str) -> Result<Option<Manufacturer>, RepositoryError>;
    /// 列出制造商，`name` 非空时按子串过滤（区分大小写）
    async fn list(&self, name: Option<&str>) -> Result<Vec<Manufacturer>, RepositoryError>;
    /// 管理后台搜索：名称或国家包含关键字
    async fn search(&self, query: &str) -> Result<Vec<Manufacturer>, RepositoryError>;
    /// 名称是否已被其它记录使用
    async fn name_taken(&self, name: &str, exclude_id: Option<i32>)
        -> Result<bool, RepositoryError>;
    /// 更新制造商
    async fn update(&self, manufacturer: &Manufacturer) -> Result<Manufacturer, RepositoryError>;
    /// 删除制造商（级联删除其车辆）
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
    /// 制造商总数
    async fn count(&self) -> Result<u64, RepositoryError>;
}
