// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据传输对象模块
///
/// 定义提交表单与查询参数，以及字段级错误的表示
pub mod car_form;
pub mod driver_form;
pub mod form_errors;
pub mod login_form;
pub mod manufacturer_form;
pub mod search_query;
