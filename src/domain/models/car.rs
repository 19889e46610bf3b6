// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::manufacturer::Manufacturer;

/// 车辆实体
///
/// 每辆车恰好属于一个制造商，可以分配给零个或多个司机。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    pub id: i32,
    /// 车型名称
    pub model: String,
    /// 所属制造商
    pub manufacturer: Manufacturer,
    /// 已分配司机的ID，按ID升序
    pub driver_ids: Vec<i32>,
}

impl Car {
    pub fn has_driver(&self, driver_id: i32) -> bool {
        self.driver_ids.contains(&driver_id)
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.model)
    }
}

/// 待创建（或更新）的车辆
#[derive(Debug, Clone, Default)]
pub struct NewCar {
    pub model: String,
    pub manufacturer_id: i32,
    pub driver_ids: Vec<i32>,
}
