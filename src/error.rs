//! 错误类型：语句拼接过程中唯一会向调用方暴露的错误。

use crate::ident::NameAnchor;

/// 语句拼接错误。
///
/// 所有操作都是纯函数，重试不会改变结果；出错时不会返回部分拼接的语句。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StatementError {
    /// 标识符片段不合法（目前只检查长度上限）。
    #[error("Bad identifier: {reason}. Identifier = {identifier}")]
    BadIdentifier { identifier: String, reason: String },

    /// 值的类别无法按请求的字面量类型 / 声明类型渲染。
    #[error("unexpected value type: expected {expected}, found {found}")]
    UnexpectedValueType {
        expected: &'static str,
        found: &'static str,
    },

    /// 限定名的段数超出 anchor 能解析的范围。
    #[error("unable to parse qualified name {value:?} anchored at {anchor}")]
    AmbiguousQualifiedName { value: String, anchor: NameAnchor },

    /// 无法识别的数据类型名。
    #[error("unknown data type {0:?}")]
    UnknownDataType(String),

    /// 值无法序列化为文本（例如超出 RFC 3339 年份范围的时间）。
    #[error("failed to serialize value: {0}")]
    Serialization(String),
}

pub type Result<T, E = StatementError> = std::result::Result<T, E>;
