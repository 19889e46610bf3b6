// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! PBKDF2-SHA256 密码哈希
//!
//! 存储格式为 `pbkdf2_sha256$<迭代次数>$<盐>$<base64哈希>`，
//! 与主流Web框架的默认格式兼容。

use base64::{engine::general_purpose::STANDARD, Engine as _};
use pbkdf2::pbkdf2_hmac;
use rand::{distr::Alphanumeric, Rng};
use sha2::Sha256;
use subtle::ConstantTimeEq;

const ALGORITHM: &str = "pbkdf2_sha256";
const SALT_LENGTH: usize = 22;
const UNUSABLE_PASSWORD_PREFIX: char = '!';
const UNUSABLE_SUFFIX_LENGTH: usize = 40;

/// 密码哈希器
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    iterations: u32,
}

impl PasswordHasher {
    /// 创建新的哈希器，迭代次数至少为1
    pub fn new(iterations: u32) -> Self {
        Self {
            iterations: iterations.max(1),
        }
    }

    /// 使用随机盐对明文密码进行哈希
    pub fn hash(&self, raw_password: &str) -> String {
        encode(raw_password, &random_string(SALT_LENGTH), self.iterations)
    }
}

/// 使用指定盐和迭代次数编码密码
pub fn encode(raw_password: &str, salt: &str, iterations: u32) -> String {
    let hash = pbkdf2_sha256(raw_password.as_bytes(), salt.as_bytes(), iterations);
    format!(
        "{}${}${}${}",
        ALGORITHM,
        iterations,
        salt,
        STANDARD.encode(hash)
    )
}

/// 校验明文密码与编码后的哈希是否匹配
///
/// 不可用密码、格式错误或未知算法一律返回 `false`
pub fn verify_password(raw_password: &str, encoded: &str) -> bool {
    let mut parts = encoded.splitn(4, '$');
    let (Some(algorithm), Some(iterations), Some(salt), Some(hash)) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return false;
    };

    if algorithm != ALGORITHM {
        return false;
    }

    let Ok(iterations) = iterations.parse::<u32>() else {
        return false;
    };
    if iterations == 0 {
        return false;
    }

    let Ok(expected) = STANDARD.decode(hash) else {
        return false;
    };

    let computed = pbkdf2_sha256(raw_password.as_bytes(), salt.as_bytes(), iterations);
    computed[..].ct_eq(&expected[..]).into()
}

/// 生成一个永远无法通过校验的密码标记
pub fn make_unusable_password() -> String {
    format!(
        "{}{}",
        UNUSABLE_PASSWORD_PREFIX,
        random_string(UNUSABLE_SUFFIX_LENGTH)
    )
}

/// 编码后的密码是否可用于登录
pub fn is_usable(encoded: &str) -> bool {
    encoded.starts_with(ALGORITHM) && !encoded.starts_with(UNUSABLE_PASSWORD_PREFIX)
}

fn random_string(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// PBKDF2-HMAC-SHA256，派生长度等于摘要长度32字节
fn pbkdf2_sha256(password: &[u8], salt: &[u8], iterations: u32) -> [u8; 32] {
    let mut output = [0u8; 32];
    pbkdf2_hmac::<Sha256>(password, salt, iterations, &mut output);
    output
}
