// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::form_errors::{clean_form, FormErrors};

/// 车辆表单（创建与更新共用）
///
/// `manufacturer` 与 `drivers` 以原始字符串接收，便于在用例中给出字段级错误
/// 而不是在提取阶段直接拒绝整个请求；`drivers` 可重复提交
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct CarForm {
    #[validate(length(max = 255, message = "Ensure this value has at most 255 characters."))]
    #[serde(default)]
    pub model: String,

    #[serde(default)]
    pub manufacturer: String,

    #[serde(default)]
    pub drivers: Vec<String>,
}

impl CarForm {
    pub fn clean(&self) -> Result<(), FormErrors> {
        clean_form(
            self,
            &[
                ("model", self.model.trim()),
                ("manufacturer", self.manufacturer.trim()),
            ],
        )
    }
}
