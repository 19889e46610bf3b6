// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库实现模块
///
/// 提供领域仓库接口的 SeaORM 实现
pub mod car_repo_impl;
pub mod driver_repo_impl;
pub mod manufacturer_repo_impl;
pub mod session_repo_impl;
