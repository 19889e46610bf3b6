// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::RepositoryError;
use crate::domain::models::car::{Car, NewCar};
use async_trait::async_trait;

/// 管理后台车辆查询参数
#[derive(Debug, Default, Clone)]
pub struct CarQueryParams {
    /// 车型包含的关键字
    pub model: Option<String>,
    /// 只返回该制造商的车辆
    pub manufacturer_id: Option<i32>,
}

/// 车辆仓库特质
///
/// 定义车辆数据访问接口，列表按ID排序，车辆总是携带其制造商
#[async_trait]
pub trait CarRepository: Send + Sync {
    /// 创建车辆及其司机分配（单个事务）
    async fn create(&self, car: &NewCar) -> Result<Car, RepositoryError>;
    /// 根据ID查找车辆
    async fn find_by_id(&self, id: i32) -> Result<Option<Car>, RepositoryError>;
    /// 列出车辆，`model` 非空时按子串过滤（区分大小写）
    async fn list(&self, model: Option<&str>) -> Result<Vec<Car>, RepositoryError>;
    /// 高级查询
    async fn query(&self, params: CarQueryParams) -> Result<Vec<Car>, RepositoryError>;
    /// 某个司机被分配的所有车辆
    async fn list_by_driver(&self, driver_id: i32) -> Result<Vec<Car>, RepositoryError>;
    /// 更新车辆并替换司机分配（单个事务）
    async fn update(&self, id: i32, car: &NewCar) -> Result<Car, RepositoryError>;
    /// 切换司机分配，返回切换后该司机是否被分配
    async fn toggle_driver(&self, car_id: i32, driver_id: i32) -> Result<bool, RepositoryError>;
    /// 删除车辆
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
    /// 车辆总数
    async fn count(&self) -> Result<u64, RepositoryError>;
}
