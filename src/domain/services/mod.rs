// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// - 密码哈希（password_hasher）：PBKDF2-SHA256 的编码与校验
/// - 密码校验（password_validation）：密码强度规则
pub mod password_hasher;
pub mod password_validation;
