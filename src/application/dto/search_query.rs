// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 制造商列表搜索参数
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ManufacturerSearchQuery {
    pub name: Option<String>,
}

/// 司机列表搜索参数
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DriverSearchQuery {
    pub username: Option<String>,
}

/// 车辆列表搜索参数
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CarSearchQuery {
    pub model: Option<String>,
}

/// 管理后台列表参数
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AdminListQuery {
    /// 搜索关键字
    pub q: Option<String>,
    /// 按制造商过滤（仅车辆列表）
    #[serde(rename = "manufacturer__id__exact")]
    pub manufacturer_id: Option<i32>,
}
