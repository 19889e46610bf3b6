// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 用例模块
///
/// 包含应用程序的所有业务用例实现
/// 每个用例代表一个完整的业务流程：校验表单、检查唯一性、持久化并记录指标
pub mod auth_use_case;
pub mod car_use_case;
pub mod driver_use_case;
pub mod errors;
pub mod manufacturer_use_case;

pub use errors::UseCaseError;
