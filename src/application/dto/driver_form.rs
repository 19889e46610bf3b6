// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::form_errors::{clean_form, FormErrors};

/// 驾照号码格式：三个大写字母加五位数字
pub static LICENSE_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{3}[0-9]{5}$").expect("valid license number regex"));

/// 用户名允许的字符
pub static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w.@+-]+$").expect("valid username regex"));

pub const LICENSE_NUMBER_MESSAGE: &str =
    "License number must consist of 3 uppercase letters followed by 5 digits.";
pub const USERNAME_MESSAGE: &str = "Enter a valid username. This value may contain only letters, numbers, and @/./+/-/_ characters.";
pub const PASSWORD_MISMATCH_MESSAGE: &str = "The two password fields didn’t match.";
pub const USERNAME_TAKEN_MESSAGE: &str = "A user with that username already exists.";
pub const LICENSE_TAKEN_MESSAGE: &str = "Driver with this License number already exists.";

/// 司机注册表单
///
/// 字段与登录账号表单一致，另外附带驾照号码
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct DriverCreationForm {
    #[validate(
        length(max = 150, message = "Ensure this value has at most 150 characters."),
        regex(path = *USERNAME_RE, message = "Enter a valid username. This value may contain only letters, numbers, and @/./+/-/_ characters.")
    )]
    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub password1: String,

    #[serde(default)]
    pub password2: String,

    #[validate(length(max = 150, message = "Ensure this value has at most 150 characters."))]
    #[serde(default)]
    pub first_name: String,

    #[validate(length(max = 150, message = "Ensure this value has at most 150 characters."))]
    #[serde(default)]
    pub last_name: String,

    #[validate(regex(
        path = *LICENSE_NUMBER_RE,
        message = "License number must consist of 3 uppercase letters followed by 5 digits."
    ))]
    #[serde(default)]
    pub license_number: String,
}

impl DriverCreationForm {
    /// 字段级校验，返回全部字段错误
    pub fn clean(&self) -> Result<(), FormErrors> {
        clean_form(
            self,
            &[
                ("username", self.username.as_str()),
                ("password1", self.password1.as_str()),
                ("password2", self.password2.as_str()),
                ("license_number", self.license_number.as_str()),
            ],
        )
    }
}

/// 驾照号码更新表单
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct DriverLicenseUpdateForm {
    #[validate(regex(
        path = *LICENSE_NUMBER_RE,
        message = "License number must consist of 3 uppercase letters followed by 5 digits."
    ))]
    #[serde(default)]
    pub license_number: String,
}

impl DriverLicenseUpdateForm {
    pub fn clean(&self) -> Result<(), FormErrors> {
        clean_form(self, &[("license_number", self.license_number.as_str())])
    }
}

/// 后台司机编辑表单
///
/// 复选框未勾选时浏览器不会提交该字段，因此布尔字段缺省为 false
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct DriverAdminChangeForm {
    #[validate(length(max = 150, message = "Ensure this value has at most 150 characters."))]
    #[serde(default)]
    pub first_name: String,

    #[validate(length(max = 150, message = "Ensure this value has at most 150 characters."))]
    #[serde(default)]
    pub last_name: String,

    #[validate(email(message = "Enter a valid email address."))]
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub email: Option<String>,

    #[validate(regex(
        path = *LICENSE_NUMBER_RE,
        message = "License number must consist of 3 uppercase letters followed by 5 digits."
    ))]
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub license_number: Option<String>,

    #[serde(default, deserialize_with = "checkbox")]
    pub is_active: bool,

    #[serde(default, deserialize_with = "checkbox")]
    pub is_staff: bool,

    #[serde(default, deserialize_with = "checkbox")]
    pub is_superuser: bool,
}

impl DriverAdminChangeForm {
    pub fn clean(&self) -> Result<(), FormErrors> {
        clean_form(self, &[])
    }
}

/// 将空字符串视为未填写
fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()))
}

/// HTML 复选框：任何非假值都视为勾选
fn checkbox<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(!matches!(
        value.to_ascii_lowercase().as_str(),
        "" | "0" | "false" | "off" | "no"
    ))
}
