//! SHOW 语句模板：片段组合子的调用方，本身不含额外的逻辑。

use crate::encode::LiteralValueType;
use crate::error::Result;
use crate::fragment::{FirstOf, Fragment, MultiSlot, Slot};
use crate::objects::{IntegrationKind, ObjectKind};
use crate::statement;

/// 当前用户被授予的所有角色。
pub fn show_grants(indent_level: usize) -> Result<String> {
    statement!(indent_level; "SHOW GRANTS")
}

/// 账户级（全局）权限的授予情况。
pub fn show_grants_on_account(indent_level: usize) -> Result<String> {
    statement!(indent_level; "SHOW GRANTS ON ACCOUNT")
}

/// 某个对象上的权限授予情况。
pub fn show_grants_on(kind: ObjectKind, qualified_name: &str, indent_level: usize) -> Result<String> {
    statement!(indent_level;
        "SHOW GRANTS ON",
        kind.as_str(),
        Slot::new("%%", qualified_name),
    )
}

/// `SHOW GRANTS TO` 的目标，多个目标同时给出时按字段声明顺序取第一个。
#[derive(Debug, Clone, Default)]
pub struct GrantsTo {
    pub application_role: Option<String>,
    pub application: Option<String>,
    pub role: Option<String>,
    pub share: Option<String>,
    /// 只和 `share` 一起生效。
    pub in_application_package: Option<String>,
    pub user: Option<String>,
}

/// 与片段相同的真值规则：空串视为缺省。
fn is_present(v: &Option<String>) -> bool {
    v.as_deref().is_some_and(|s| !s.is_empty())
}

/// 授予给某个目标的权限与角色；没有任何目标时返回 `Ok(None)`。
pub fn show_grants_to(target: &GrantsTo, indent_level: usize) -> Result<Option<String>> {
    let mut clause = FirstOf::new();
    if is_present(&target.application_role) {
        clause.push(
            MultiSlot::new("APPLICATION ROLE %0%1")
                .slot("%%.", target.application.as_deref())
                .slot("%%", target.application_role.as_deref()),
        );
    }
    clause.push(Slot::new("APPLICATION %%", target.application.as_deref()));
    clause.push(Slot::new("ROLE %%", target.role.as_deref()));
    if is_present(&target.share) {
        clause.push(
            MultiSlot::new("SHARE %0 %1")
                .slot("%%", target.share.as_deref())
                .slot("IN APPLICATION PACKAGE %%", target.in_application_package.as_deref()),
        );
    }
    clause.push(Slot::new("USER %%", target.user.as_deref()));

    let Some(clause) = clause.resolve()? else {
        log::warn!(
            "one of application_role, application, role, share or user must be provided to show grants to"
        );
        return Ok(None);
    };

    statement!(indent_level; "SHOW GRANTS TO", clause).map(Some)
}

/// 应用角色被授予给了哪些用户与角色；`application` 缺省时使用当前应用。
pub fn show_grants_of_application_role(
    application_role: &str,
    application: Option<&str>,
    indent_level: usize,
) -> Result<String> {
    statement!(indent_level;
        "SHOW GRANTS OF",
        MultiSlot::new("APPLICATION ROLE %0%1")
            .slot("%%.", application)
            .slot("%%", application_role),
    )
}

/// 角色被授予给了哪些用户与角色。
pub fn show_grants_of_role(role: &str, indent_level: usize) -> Result<String> {
    statement!(indent_level; "SHOW GRANTS OF", Slot::new("ROLE %%", role))
}

/// 共享的所有账户，以及正在使用该共享的账户。
pub fn show_grants_of_share(share: &str, indent_level: usize) -> Result<String> {
    statement!(indent_level; "SHOW GRANTS OF", Slot::new("SHARE %%", share))
}

pub fn show_future_grants_in_schema(schema: &str, indent_level: usize) -> Result<String> {
    statement!(indent_level; "SHOW FUTURE GRANTS IN", Slot::new("SCHEMA %%", schema))
}

pub fn show_future_grants_in_database(database: &str, indent_level: usize) -> Result<String> {
    statement!(indent_level; "SHOW FUTURE GRANTS IN", Slot::new("DATABASE %%", database))
}

pub fn show_future_grants_to_role(role: &str, indent_level: usize) -> Result<String> {
    statement!(indent_level; "SHOW FUTURE GRANTS TO", Slot::new("ROLE %%", role))
}

/// `like` 为大小写不敏感的名称模式，支持 `%` 与 `_`。
pub fn show_integrations(
    kind: IntegrationKind,
    like: Option<&str>,
    indent_level: usize,
) -> Result<String> {
    statement!(indent_level;
        "SHOW",
        kind.as_str(),
        "INTEGRATIONS",
        Slot::new("LIKE %%", like).value_type(LiteralValueType::PlainValue),
    )
}

pub fn show_roles(like: Option<&str>, indent_level: usize) -> Result<String> {
    statement!(indent_level;
        "SHOW ROLES",
        Slot::new("LIKE %%", like).value_type(LiteralValueType::PlainValue),
    )
}

/// `SHOW USERS` 的选项。
#[derive(Debug, Clone, Default)]
pub struct ShowUsers {
    /// 只返回部分列。
    pub terse: bool,
    pub like: Option<String>,
    /// 区分大小写的名称前缀。
    pub starts_with: Option<String>,
    pub limit: Option<u64>,
    /// 分页游标：从名称匹配该字符串的行之后开始返回。
    pub from: Option<String>,
}

impl ShowUsers {
    pub fn build(&self, indent_level: usize) -> Result<String> {
        statement!(indent_level;
            "SHOW",
            Slot::flag("TERSE", self.terse),
            "USERS",
            Slot::new("LIKE %%", self.like.as_deref()).value_type(LiteralValueType::ForcedString),
            Slot::new("STARTS WITH %%", self.starts_with.as_deref())
                .value_type(LiteralValueType::ForcedString),
            Slot::new("LIMIT %%", self.limit).value_type(LiteralValueType::PlainValue),
            Slot::new("FROM %%", self.from.as_deref()).value_type(LiteralValueType::ForcedString),
        )
    }
}
