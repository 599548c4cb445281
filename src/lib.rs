//! snowstmt：为 Snowflake 方言安全拼接 SQL 语句。
//!
//! 标识符格式化、字面量编码，以及按可选参数决定子句取舍的片段组合子。

pub mod data_type;
pub mod encode;
pub mod error;
pub mod escape;
pub mod executor;
#[cfg(test)]
mod executor_tests;
pub mod fragment;
pub mod ident;
pub mod indent;
#[cfg(test)]
mod indent_tests;
pub mod listers;
#[cfg(test)]
mod listers_tests;
pub mod objects;
pub mod statement;
mod string_builder;
pub mod value;

pub use crate::data_type::DataType;
pub use crate::encode::{EncodeMode, LiteralValueType, encode, render_literal};
pub use crate::error::{Result, StatementError};
pub use crate::escape::{escape_quotes, unescape_quotes};
pub use crate::executor::{Executable, Executor, RunError};
pub use crate::fragment::{FirstOf, Fragment, MultiSlot, Slot};
pub use crate::ident::{
    NameAnchor, QualifiedName, compose_qualified_name, format_identifier, format_qualified_name,
    unquote_identifier, validate_identifier,
};
pub use crate::indent::{
    IndentUnit, default_indent_unit, format_query, indent, set_default_indent_unit,
    set_default_indent_unit_scoped,
};
pub use crate::listers::{GrantsTo, ShowUsers};
pub use crate::objects::{IntegrationKind, ObjectKind};
pub use crate::statement::{Statement, StatementPart, build_statement};
pub use crate::value::SqlValue;
