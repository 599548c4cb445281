//! 字面量编码：把 `SqlValue` 渲染成 Snowflake 方言的字面量文本。
//!
//! 语句不会做参数绑定，所有值都在这里内联编码，注入安全完全依赖本模块。

use crate::data_type::DataType;
use crate::error::{Result, StatementError};
use crate::escape::quote_string;
use crate::ident::format_qualified_name;
use crate::value::{SqlValue, format_datetime, format_float};

/// 编码方式：按值的运行时类别推断，或按显式声明的数据类型。
///
/// `*Json` 变体把集合（以及声明为半结构化类型的值）包成 `PARSE_JSON('...')`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EncodeMode {
    #[default]
    Deduce,
    DeduceJson,
    ByType(DataType),
    ByTypeJson(DataType),
}

/// 片段占位符的渲染方式，挂在片段上而不是值上。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LiteralValueType {
    /// 值是（限定）标识符，必须是字符串。
    #[default]
    Identifier,
    /// 普通值，按类别推断编码。
    PlainValue,
    /// 总是编码为 `PARSE_JSON('...')`。
    JsonValue,
    /// 取显示文本，转义后用单引号包裹。
    ForcedString,
    /// 取显示文本，原样输出。
    AsIs,
}

pub fn encode(value: &SqlValue, mode: EncodeMode) -> Result<String> {
    let mut out = String::new();
    match mode {
        EncodeMode::Deduce => encode_deduced(&mut out, value, false)?,
        EncodeMode::DeduceJson => encode_deduced(&mut out, value, true)?,
        EncodeMode::ByType(ty) => encode_by_type(&mut out, value, ty, false)?,
        EncodeMode::ByTypeJson(ty) => encode_by_type(&mut out, value, ty, true)?,
    }
    Ok(out)
}

/// 按片段声明的 `LiteralValueType` 渲染值。
pub fn render_literal(value: &SqlValue, ty: LiteralValueType) -> Result<String> {
    match ty {
        LiteralValueType::Identifier => match value {
            SqlValue::String(s) => Ok(format_qualified_name(s)),
            other => Err(unexpected("string", other)),
        },
        LiteralValueType::PlainValue => encode(value, EncodeMode::Deduce),
        LiteralValueType::JsonValue => {
            let mut out = String::new();
            encode_json(&mut out, value, true)?;
            Ok(out)
        }
        LiteralValueType::ForcedString => {
            let mut out = String::new();
            quote_string(&mut out, &value.to_text()?);
            Ok(out)
        }
        LiteralValueType::AsIs => value.to_text(),
    }
}

fn encode_deduced(out: &mut String, value: &SqlValue, parse_json: bool) -> Result<()> {
    match value {
        SqlValue::Null => out.push_str("null"),
        SqlValue::Bool(b) => encode_bool(out, *b),
        SqlValue::I64(n) => out.push_str(&n.to_string()),
        SqlValue::U64(n) => out.push_str(&n.to_string()),
        SqlValue::F64(n) => encode_float(out, *n),
        SqlValue::String(s) => quote_string(out, s),
        SqlValue::DateTime(dt) => quote_string(out, &format_datetime(dt)?),
        SqlValue::Array(_) | SqlValue::Object(_) => encode_json(out, value, parse_json)?,
        SqlValue::Other(s) => quote_string(out, s),
    }
    Ok(())
}

fn encode_by_type(
    out: &mut String,
    value: &SqlValue,
    ty: DataType,
    parse_json: bool,
) -> Result<()> {
    if ty.is_semi_structured() {
        match value {
            // 声明为集合的 null 在 JSON 模式下仍是 JSON null。
            SqlValue::Null if !parse_json => out.push_str("null"),
            _ => encode_json(out, value, parse_json)?,
        }
        return Ok(());
    }

    if matches!(value, SqlValue::Null) {
        out.push_str("null");
        return Ok(());
    }

    match ty {
        DataType::Integer | DataType::Float => match value {
            SqlValue::I64(n) => out.push_str(&n.to_string()),
            SqlValue::U64(n) => out.push_str(&n.to_string()),
            SqlValue::F64(n) => encode_float(out, *n),
            SqlValue::Bool(b) => out.push(if *b { '1' } else { '0' }),
            other => return Err(unexpected("number", other)),
        },
        DataType::Boolean => match value {
            SqlValue::Bool(b) => encode_bool(out, *b),
            SqlValue::I64(_) | SqlValue::U64(_) | SqlValue::F64(_) => {
                encode_bool(out, value.is_truthy())
            }
            other => return Err(unexpected("bool", other)),
        },
        _ => quote_string(out, &value.to_text()?),
    }
    Ok(())
}

fn encode_bool(out: &mut String, b: bool) {
    out.push_str(if b { "TRUE" } else { "FALSE" });
}

fn encode_float(out: &mut String, n: f64) {
    if n.is_finite() {
        out.push_str(&format_float(n));
    } else {
        quote_string(out, &format_float(n));
    }
}

fn encode_json(out: &mut String, value: &SqlValue, parse_json: bool) -> Result<()> {
    let json = value.to_json()?;
    if parse_json {
        out.push_str("PARSE_JSON(");
        quote_string(out, &json);
        out.push(')');
    } else {
        quote_string(out, &json);
    }
    Ok(())
}

fn unexpected(expected: &'static str, found: &SqlValue) -> StatementError {
    StatementError::UnexpectedValueType {
        expected,
        found: found.kind(),
    }
}
