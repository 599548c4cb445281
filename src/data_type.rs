//! Snowflake 数据类型：声明类型、别名解析与判空表达式。

use crate::error::StatementError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Array,
    Binary,
    Boolean,
    Date,
    Float,
    Integer,
    Object,
    Text,
    Time,
    TimestampNtz,
    TimestampLtz,
    TimestampTz,
    Variant,
}

impl DataType {
    /// 规范的 SQL 类型名。
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Array => "ARRAY",
            Self::Binary => "BINARY",
            Self::Boolean => "BOOLEAN",
            Self::Date => "DATE",
            Self::Float => "FLOAT",
            Self::Integer => "INTEGER",
            Self::Object => "OBJECT",
            Self::Text => "TEXT",
            Self::Time => "TIME",
            Self::TimestampNtz => "TIMESTAMP_NTZ",
            Self::TimestampLtz => "TIMESTAMP_LTZ",
            Self::TimestampTz => "TIMESTAMP_TZ",
            Self::Variant => "VARIANT",
        }
    }

    /// ARRAY / OBJECT / VARIANT
    pub fn is_semi_structured(self) -> bool {
        matches!(self, Self::Array | Self::Object | Self::Variant)
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Integer | Self::Float)
    }

    /// 判断列表达式 `expr` 是否为空的 SQL 谓词。
    pub fn emptiness_expression(self, expr: &str) -> String {
        match self {
            Self::Array => format!("{expr}::string IS NULL OR ARRAY_SIZE({expr}) = 0"),
            Self::Object => format!("{expr}::string IS NULL OR {expr} = PARSE_JSON('{{}}')"),
            Self::Text => format!("{expr}::string IS NULL OR LENGTH({expr}) = 0"),
            _ => format!("{expr} IS NULL"),
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataType {
    type Err = StatementError;

    /// 大小写不敏感，接受方言的类型别名。
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        let ty = match upper.as_str() {
            "FIXED" | "NUMBER" | "NUMERIC" | "DECIMAL" | "INT" | "INTEGER" | "BIGINT"
            | "SMALLINT" | "TINYINT" | "BYTEINT" => Self::Integer,
            "REAL" | "FLOAT" | "FLOAT4" | "FLOAT8" | "DOUBLE" | "DOUBLE PRECISION" => Self::Float,
            "TEXT" | "VARCHAR" | "CHAR" | "CHARACTER" | "STRING" => Self::Text,
            "BINARY" | "VARBINARY" => Self::Binary,
            "BOOLEAN" => Self::Boolean,
            "DATE" => Self::Date,
            "TIME" => Self::Time,
            "TIMESTAMP" | "DATETIME" | "TIMESTAMP_NTZ" => Self::TimestampNtz,
            "TIMESTAMP_LTZ" => Self::TimestampLtz,
            "TIMESTAMP_TZ" => Self::TimestampTz,
            "VARIANT" => Self::Variant,
            "ARRAY" => Self::Array,
            "OBJECT" => Self::Object,
            _ => return Err(StatementError::UnknownDataType(upper)),
        };
        Ok(ty)
    }
}
