// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 制造商（manufacturer）
/// - 司机（driver）：同时也是登录账号
/// - 车辆（car）：属于一个制造商，可分配给多个司机
/// - 会话（session）：登录状态
pub mod car;
pub mod driver;
pub mod manufacturer;
pub mod session;
