//! 语句拼装：按顺序求值关键字与片段，丢弃缺省/空的部分，以单个空格连接并加缩进。

use crate::error::Result;
use crate::fragment::{FirstOf, Fragment, MultiSlot, Slot};
use crate::indent::format_query;
use crate::string_builder::StringBuilder;
use std::borrow::Cow;

/// 语句的一个组成部分：固定关键字或待求值的片段。
#[derive(Debug, Clone)]
pub enum StatementPart {
    Keyword(Cow<'static, str>),
    Fragment(Box<dyn Fragment>),
}

impl StatementPart {
    fn resolve(&self) -> Result<Option<Cow<'_, str>>> {
        match self {
            Self::Keyword(k) => Ok(Some(collapse_whitespace(k))),
            Self::Fragment(f) => Ok(f.resolve()?.map(Cow::Owned)),
        }
    }
}

/// 关键字内部的连续空白（含换行）折叠为单个空格；片段渲染出的字面量不经过这里。
fn collapse_whitespace(keyword: &str) -> Cow<'_, str> {
    let mut prev_space = false;
    let needs_collapse = keyword.chars().any(|c| {
        let collapse = c.is_whitespace() && (c != ' ' || prev_space);
        prev_space = c.is_whitespace();
        collapse
    });
    if !needs_collapse {
        return Cow::Borrowed(keyword);
    }
    Cow::Owned(keyword.split_whitespace().collect::<Vec<_>>().join(" "))
}

impl From<&'static str> for StatementPart {
    fn from(v: &'static str) -> Self {
        Self::Keyword(Cow::Borrowed(v))
    }
}

impl From<String> for StatementPart {
    fn from(v: String) -> Self {
        Self::Keyword(Cow::Owned(v))
    }
}

impl From<Box<dyn Fragment>> for StatementPart {
    fn from(v: Box<dyn Fragment>) -> Self {
        Self::Fragment(v)
    }
}

impl From<Slot> for StatementPart {
    fn from(v: Slot) -> Self {
        Self::Fragment(Box::new(v))
    }
}

impl From<MultiSlot> for StatementPart {
    fn from(v: MultiSlot) -> Self {
        Self::Fragment(Box::new(v))
    }
}

impl From<FirstOf> for StatementPart {
    fn from(v: FirstOf) -> Self {
        Self::Fragment(Box::new(v))
    }
}

/// 拼装语句。
///
/// 缺省与空白的部分被丢弃；每个部分去掉首尾空白后以单个空格连接。
/// 关键字内部的空白折叠为单个空格；片段内部的空白保持原样（字面量里的空格不能被折叠）。
pub fn build_statement<I>(indent_level: usize, parts: I) -> Result<String>
where
    I: IntoIterator,
    I::Item: Into<StatementPart>,
{
    let mut sb = StringBuilder::with_capacity(64);
    for part in parts {
        let part = part.into();
        if let Some(text) = part.resolve()? {
            sb.write_leading(text.trim());
        }
    }

    let statement = format_query(&sb.into_string(), indent_level);
    log::debug!("built statement: {statement}");
    Ok(statement)
}

/// 逐步追加部分的语句 builder。
#[derive(Debug, Clone, Default)]
pub struct Statement {
    parts: Vec<StatementPart>,
    indent_level: usize,
}

impl Statement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keyword(&mut self, keyword: impl Into<Cow<'static, str>>) -> &mut Self {
        self.parts.push(StatementPart::Keyword(keyword.into()));
        self
    }

    pub fn fragment(&mut self, fragment: impl Fragment + 'static) -> &mut Self {
        self.parts.push(StatementPart::Fragment(Box::new(fragment)));
        self
    }

    pub fn part(&mut self, part: impl Into<StatementPart>) -> &mut Self {
        self.parts.push(part.into());
        self
    }

    pub fn indent(&mut self, level: usize) -> &mut Self {
        self.indent_level = level;
        self
    }

    pub fn build(&self) -> Result<String> {
        build_statement(self.indent_level, self.parts.iter().cloned())
    }
}

/// 以可变参数形式拼装语句：`statement!(part, ...)` 或 `statement!(indent; part, ...)`。
#[macro_export]
macro_rules! statement {
    ($indent:expr; $($part:expr),* $(,)?) => {
        $crate::statement::build_statement(
            $indent,
            {
                let parts: ::std::vec::Vec<$crate::statement::StatementPart> =
                    ::std::vec![$($crate::statement::StatementPart::from($part)),*];
                parts
            },
        )
    };
    ($($part:expr),* $(,)?) => {
        $crate::statement!(0; $($part),*)
    };
}
