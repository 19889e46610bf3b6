// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::fmt;

/// 汽车制造商实体
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manufacturer {
    /// 主键
    pub id: i32,
    /// 制造商名称，全局唯一
    pub name: String,
    /// 所在国家，可以为空
    pub country: String,
}

/// 待创建的制造商
#[derive(Debug, Clone, Default)]
pub struct NewManufacturer {
    pub name: String,
    pub country: String,
}

impl NewManufacturer {
    pub fn new(name: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
        }
    }
}

impl fmt::Display for Manufacturer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.country)
    }
}
