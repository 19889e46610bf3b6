// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};

const MIN_LENGTH: usize = 8;
const MAX_SIMILARITY: f64 = 0.7;

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\W+").expect("valid regex"));

/// 常见密码表，每行一个，均为小写
static COMMON_PASSWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    include_str!("common_passwords.txt")
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
});

/// 参与相似度校验的用户属性
#[derive(Debug, Clone, Copy, Default)]
pub struct UserAttributes<'a> {
    pub username: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
}

/// 按顺序执行全部密码强度规则，返回所有错误信息
///
/// 规则：与用户属性不能过于相似、长度至少8位、不能是常见密码、不能是纯数字
pub fn validate_password(password: &str, user: &UserAttributes<'_>) -> Vec<String> {
    let mut errors = Vec::new();

    if let Some(field) = too_similar_attribute(password, user) {
        errors.push(format!("The password is too similar to the {}.", field));
    }

    if password.chars().count() < MIN_LENGTH {
        errors.push(format!(
            "This password is too short. It must contain at least {} characters.",
            MIN_LENGTH
        ));
    }

    if COMMON_PASSWORDS.contains(password.trim().to_lowercase().as_str()) {
        errors.push("This password is too common.".to_string());
    }

    if !password.is_empty() && password.chars().all(|c| c.is_ascii_digit()) {
        errors.push("This password is entirely numeric.".to_string());
    }

    errors
}

fn too_similar_attribute(password: &str, user: &UserAttributes<'_>) -> Option<&'static str> {
    let password = password.to_lowercase();
    let attributes = [
        ("username", user.username),
        ("first name", user.first_name),
        ("last name", user.last_name),
        ("email address", user.email),
    ];

    attributes.into_iter().find_map(|(label, value)| {
        if value.is_empty() {
            return None;
        }
        let value = value.to_lowercase();
        let similar = NON_WORD
            .split(&value)
            .chain(std::iter::once(value.as_str()))
            .filter(|part| !part.is_empty())
            .filter(|part| !exceeds_length_ratio(&password, part))
            .any(|part| overlap_ratio(&password, part) >= MAX_SIMILARITY);
        similar.then_some(label)
    })
}

/// 密码远长于属性片段时不做比较
fn exceeds_length_ratio(password: &str, part: &str) -> bool {
    let password_len = password.chars().count();
    let part_len = part.chars().count();
    password_len >= 10 * part_len && (part_len as f64) < MAX_SIMILARITY / 2.0 * password_len as f64
}

/// 字符多重集重叠比例 `2*M/T`
///
/// `M` 为两串共有的字符数（按出现次数取交集），`T` 为两串长度之和。
fn overlap_ratio(a: &str, b: &str) -> f64 {
    let mut available: HashMap<char, usize> = HashMap::new();
    for ch in b.chars() {
        *available.entry(ch).or_default() += 1;
    }

    let mut matches = 0usize;
    for ch in a.chars() {
        if let Some(count) = available.get_mut(&ch) {
            if *count > 0 {
                *count -= 1;
                matches += 1;
            }
        }
    }

    let total = a.chars().count() + b.chars().count();
    if total == 0 {
        return 0.0;
    }
    2.0 * matches as f64 / total as f64
}
