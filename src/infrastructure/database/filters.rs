// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::sea_query::{Alias, Expr, Func, IntoColumnRef, LikeExpr, SimpleExpr};
use sea_orm::DbBackend;

/// 区分大小写的子串匹配
///
/// `LIKE` 在 SQLite 中对 ASCII 不区分大小写，因此按后端选择
/// `INSTR`（SQLite/MySQL）或 `STRPOS`（PostgreSQL）。
pub fn contains_case_sensitive<C>(backend: DbBackend, column: C, needle: &str) -> SimpleExpr
where
    C: IntoColumnRef,
{
    let position = match backend {
        DbBackend::Postgres => Func::cust(Alias::new("STRPOS"))
            .arg(Expr::col(column))
            .arg(needle.to_owned()),
        _ => Func::cust(Alias::new("INSTR"))
            .arg(Expr::col(column))
            .arg(needle.to_owned()),
    };
    Expr::expr(position).gt(0)
}

/// 管理后台搜索使用的 `LIKE '%needle%'`
///
/// `needle` 按字面匹配：`%`、`_` 与转义符 `!` 都会被转义。
pub fn contains_literal<C>(column: C, needle: &str) -> SimpleExpr
where
    C: IntoColumnRef,
{
    let pattern = format!("%{}%", escape_like(needle));
    Expr::col(column).like(LikeExpr::new(pattern).escape(LIKE_ESCAPE))
}

const LIKE_ESCAPE: char = '!';

fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(ch, LIKE_ESCAPE | '%' | '_') {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(ch);
    }
    escaped
}

/// 空字符串查询参数视为未提供
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
