//! 标识符：单段格式化、限定名（database.schema.object）的组合与拆分。

use crate::error::{Result, StatementError};
use std::fmt;

/// 标识符引号。
pub const IDENT_QUOTE: char = '"';

/// 单段标识符的最大长度（字符数）。
pub const MAX_IDENTIFIER_LEN: usize = 255;

/// 三段式限定名之间的分隔符：`"DB"."SCHEMA"."OBJECT"`。
const QUOTED_DELIMITER: &str = "\".\"";

/// 格式化单段标识符。
///
/// - 空串原样返回；
/// - 首尾都是 `"` 的输入视为已格式化，原样返回（只看边界，不做完整语法分析）；
/// - 否则内部的 `"` 加倍、转大写，再用 `"` 包裹。
pub fn format_identifier(segment: &str) -> String {
    if segment.is_empty() || is_fully_quoted(segment) {
        return segment.to_string();
    }

    let mut out = String::with_capacity(segment.len() + 2);
    out.push(IDENT_QUOTE);
    for c in segment.chars() {
        if c == IDENT_QUOTE {
            out.push(IDENT_QUOTE);
            out.push(IDENT_QUOTE);
        } else {
            out.extend(c.to_uppercase());
        }
    }
    out.push(IDENT_QUOTE);
    out
}

/// 按不在引号内的 `.` 拆分，逐段格式化后再用 `.` 拼回。
pub fn format_qualified_name(qualified_name: &str) -> String {
    split_unquoted_dots(qualified_name)
        .into_iter()
        .map(format_identifier)
        .collect::<Vec<_>>()
        .join(".")
}

/// 去掉完整包裹的一层引号；未包裹时原样返回。
pub fn unquote_identifier(segment: &str) -> &str {
    if is_fully_quoted(segment) {
        &segment[1..segment.len() - 1]
    } else {
        segment
    }
}

/// 校验单段标识符：空串返回 `Ok(false)`，超长返回 `BadIdentifier`。
pub fn validate_identifier(segment: &str) -> Result<bool> {
    if segment.is_empty() {
        return Ok(false);
    }

    let len = segment.chars().count();
    if len > MAX_IDENTIFIER_LEN {
        return Err(StatementError::BadIdentifier {
            identifier: segment.to_string(),
            reason: format!("Identifier is too long: {len} / {MAX_IDENTIFIER_LEN}"),
        });
    }

    Ok(true)
}

/// 组合限定名：校验并格式化每个存在的段，用 `"."` 连接后整体包一层引号，
/// 得到 `"DB"."SCHEMA"."OBJECT"`。
pub fn compose_qualified_name(
    object: &str,
    schema: Option<&str>,
    database: Option<&str>,
) -> Result<String> {
    let mut parts = Vec::with_capacity(3);
    for segment in [database, schema, Some(object)].into_iter().flatten() {
        if validate_identifier(segment)? {
            let formatted = format_identifier(segment);
            parts.push(unquote_identifier(&formatted).to_string());
        }
    }

    let mut out = String::with_capacity(parts.iter().map(|p| p.len() + 3).sum::<usize>() + 2);
    out.push(IDENT_QUOTE);
    out.push_str(&parts.join(QUOTED_DELIMITER));
    out.push(IDENT_QUOTE);
    Ok(out)
}

/// 拆分限定名时，单段（或两段）名字从哪一级开始解释。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NameAnchor {
    Database,
    Schema,
    #[default]
    Object,
}

impl fmt::Display for NameAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Database => "database",
            Self::Schema => "schema",
            Self::Object => "object",
        };
        f.write_str(s)
    }
}

/// 限定名：至多三段，至少一段存在。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QualifiedName {
    pub database: Option<String>,
    pub schema: Option<String>,
    pub object: Option<String>,
}

impl QualifiedName {
    pub fn object(name: impl Into<String>) -> Self {
        Self {
            object: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn schema(name: impl Into<String>) -> Self {
        Self {
            schema: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn database(name: impl Into<String>) -> Self {
        Self {
            database: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn in_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    pub fn in_database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    /// 拆分限定名（decompose）。
    ///
    /// 先按 `"."` 拆，其次按 `.` 拆，都没有时整串作为一段，按 `anchor` 解释。
    /// 两段 / 三段名按 `anchor` 逐位分配；超过三段返回 `AmbiguousQualifiedName`。
    pub fn parse(value: &str, anchor: NameAnchor) -> Result<Self> {
        let parts: Vec<&str> = if value.contains(QUOTED_DELIMITER) {
            let inner = value.strip_prefix(IDENT_QUOTE).unwrap_or(value);
            let inner = inner.strip_suffix(IDENT_QUOTE).unwrap_or(inner);
            inner.split(QUOTED_DELIMITER).collect()
        } else if value.contains('.') {
            value.split('.').collect()
        } else {
            let segment = Some(unquote_identifier(value).to_string());
            return Ok(match anchor {
                NameAnchor::Database => Self {
                    database: segment,
                    ..Self::default()
                },
                NameAnchor::Schema => Self {
                    schema: segment,
                    ..Self::default()
                },
                NameAnchor::Object => Self {
                    object: segment,
                    ..Self::default()
                },
            });
        };

        let part = |i: usize| {
            parts
                .get(i)
                .filter(|p| !p.is_empty())
                .map(|p| p.to_string())
        };

        let name = match (parts.len(), anchor) {
            (3, _) => Self {
                database: part(0),
                schema: part(1),
                object: part(2),
            },
            (2, NameAnchor::Database) => Self {
                database: part(0),
                schema: part(1),
                object: None,
            },
            (2, NameAnchor::Schema | NameAnchor::Object) => Self {
                database: None,
                schema: part(0),
                object: part(1),
            },
            _ => {
                return Err(StatementError::AmbiguousQualifiedName {
                    value: value.to_string(),
                    anchor,
                });
            }
        };

        log::trace!("decomposed {value:?} anchored at {anchor}: {name:?}");
        Ok(name)
    }

    /// 组合为 `"DB"."SCHEMA"."OBJECT"` 形式；最深的已有段作为最后一段。
    pub fn to_sql(&self) -> Result<String> {
        let database = self.database.as_deref();
        match (self.object.as_deref(), self.schema.as_deref()) {
            (Some(object), schema) => compose_qualified_name(object, schema, database),
            (None, Some(schema)) => compose_qualified_name(schema, database, None),
            (None, None) => match database {
                Some(database) => compose_qualified_name(database, None, None),
                None => Err(StatementError::BadIdentifier {
                    identifier: String::new(),
                    reason: "Qualified name has no segment".to_string(),
                }),
            },
        }
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<&str> = [
            self.database.as_deref(),
            self.schema.as_deref(),
            self.object.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect();
        f.write_str(&parts.join("."))
    }
}

fn is_fully_quoted(segment: &str) -> bool {
    segment.len() >= 2 && segment.starts_with(IDENT_QUOTE) && segment.ends_with(IDENT_QUOTE)
}

/// 按不在 `"` 内的 `.` 拆分；`""` 视为引号内的转义引号。
fn split_unquoted_dots(value: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut in_quote = false;
    let mut start = 0usize;

    for (i, c) in value.char_indices() {
        match c {
            IDENT_QUOTE => in_quote = !in_quote,
            '.' if !in_quote => {
                parts.push(&value[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&value[start..]);
    parts
}
