// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use validator::{Validate, ValidationErrors};

/// 必填字段缺失时的提示
pub const REQUIRED_MESSAGE: &str = "This field is required.";

/// 非字段错误使用的键
pub const NON_FIELD_ERRORS: &str = "__all__";

/// 字段级表单错误
///
/// 键为字段名，值为该字段的全部错误信息，按提交顺序保留
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormErrors(BTreeMap<String, Vec<String>>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// 为字段追加一条错误
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// 某个字段的错误信息
    pub fn field(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// 用一条错误替换字段已有的全部错误
    pub fn replace(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), vec![message.into()]);
    }

    /// 没有错误时返回 `Ok(())`
    pub fn into_result(self) -> Result<(), FormErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// 执行表单的派生校验并补充必填检查
///
/// 必填字段为空时只报告 "This field is required."，不再附带格式错误
pub fn clean_form<F: Validate>(form: &F, required: &[(&str, &str)]) -> Result<(), FormErrors> {
    let mut errors = match form.validate() {
        Ok(()) => FormErrors::new(),
        Err(e) => FormErrors::from(e),
    };
    for (field, value) in required {
        if value.is_empty() {
            errors.replace(*field, REQUIRED_MESSAGE);
        }
    }
    errors.into_result()
}

impl From<ValidationErrors> for FormErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut out = FormErrors::new();
        for (field, field_errors) in errors.field_errors() {
            for error in field_errors.iter() {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value ({}).", error.code));
                out.add(field.to_string(), message);
            }
        }
        out
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.0.keys().map(String::as_str).collect();
        write!(f, "form validation failed for: {}", fields.join(", "))
    }
}

impl std::error::Error for FormErrors {}
