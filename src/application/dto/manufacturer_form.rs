// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::form_errors::{clean_form, FormErrors};

/// 制造商表单（创建与更新共用）
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct ManufacturerForm {
    #[validate(length(max = 255, message = "Ensure this value has at most 255 characters."))]
    #[serde(default)]
    pub name: String,

    #[validate(length(max = 255, message = "Ensure this value has at most 255 characters."))]
    #[serde(default)]
    pub country: String,
}

impl ManufacturerForm {
    pub fn clean(&self) -> Result<(), FormErrors> {
        clean_form(self, &[("name", self.name.trim())])
    }

    /// 去除首尾空白后的名称
    pub fn cleaned_name(&self) -> String {
        self.name.trim().to_string()
    }
}
