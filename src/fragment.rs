//! 语句片段：按候选值的真值决定子句是否出现，以及占位符替换成什么字面量。
//!
//! - `Slot`：单个 `%%` 占位符；
//! - `MultiSlot`：多个子片段通过 `%0`、`%1`… 合并进外层模板；
//! - `FirstOf`：依次求值，取第一个存在的结果。
//!
//! 求值是纯函数，不修改任何状态；“缺省”（`None`）与空串是两种不同结果。

use crate::encode::{LiteralValueType, render_literal};
use crate::error::Result;
use crate::value::SqlValue;
use dyn_clone::DynClone;
use std::fmt;

/// 单值占位符。
pub const PLACEHOLDER: &str = "%%";

/// 可求值的语句片段。
pub trait Fragment: DynClone + fmt::Debug {
    /// `Ok(None)` 表示省略该子句。
    fn resolve(&self) -> Result<Option<String>>;
}

dyn_clone::clone_trait_object!(Fragment);

/// 用渲染后的值替换模板中第一个 `%%`；模板没有占位符时不渲染值。
fn substitute(template: &str, value: &SqlValue, ty: LiteralValueType) -> Result<String> {
    if !template.contains(PLACEHOLDER) {
        return Ok(template.to_string());
    }
    let rendered = render_literal(value, ty)?;
    Ok(template.replacen(PLACEHOLDER, &rendered, 1))
}

/// 单占位符片段：值为真时替换 `%%`，否则返回 `otherwise` 文本（默认省略）。
#[derive(Debug, Clone)]
pub struct Slot {
    template: String,
    value: SqlValue,
    otherwise: Option<String>,
    value_type: LiteralValueType,
}

impl Slot {
    pub fn new(template: impl Into<String>, value: impl Into<SqlValue>) -> Self {
        Self {
            template: template.into(),
            value: value.into(),
            otherwise: None,
            value_type: LiteralValueType::default(),
        }
    }

    /// 关键字开关：`enabled` 为真时输出 `keyword`。
    pub fn flag(keyword: impl Into<String>, enabled: bool) -> Self {
        Self::new(keyword, enabled)
    }

    pub fn otherwise(mut self, text: impl Into<String>) -> Self {
        self.otherwise = Some(text.into());
        self
    }

    pub fn value_type(mut self, ty: LiteralValueType) -> Self {
        self.value_type = ty;
        self
    }
}

impl Fragment for Slot {
    fn resolve(&self) -> Result<Option<String>> {
        let resolved = if self.value.is_truthy() {
            Some(substitute(&self.template, &self.value, self.value_type)?)
        } else {
            self.otherwise.clone()
        };
        log::trace!("slot {:?} resolved to {resolved:?}", self.template);
        Ok(resolved)
    }
}

#[derive(Debug, Clone)]
struct SubSlot {
    template: String,
    value: SqlValue,
    fallback: Option<String>,
}

/// 多占位符片段。
///
/// 外层模板中的 `%N` 替换为第 N 个子片段的结果：值为真时是替换了 `%%` 的子模板，
/// 否则是该子片段的 fallback（没有则为空串）。结果去掉首尾空白。
/// 外层模板没有引用的子片段不会被求值；超出子片段数量的 `%N` 原样保留。
#[derive(Debug, Clone)]
pub struct MultiSlot {
    template: String,
    slots: Vec<SubSlot>,
    value_type: LiteralValueType,
}

impl MultiSlot {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            slots: Vec::new(),
            value_type: LiteralValueType::default(),
        }
    }

    pub fn slot(self, template: impl Into<String>, value: impl Into<SqlValue>) -> Self {
        self.push_slot(template.into(), value.into(), None)
    }

    pub fn slot_or(
        self,
        template: impl Into<String>,
        value: impl Into<SqlValue>,
        fallback: impl Into<String>,
    ) -> Self {
        self.push_slot(template.into(), value.into(), Some(fallback.into()))
    }

    pub fn value_type(mut self, ty: LiteralValueType) -> Self {
        self.value_type = ty;
        self
    }

    fn push_slot(mut self, template: String, value: SqlValue, fallback: Option<String>) -> Self {
        self.slots.push(SubSlot {
            template,
            value,
            fallback,
        });
        self
    }

    fn render_slot(&self, slot: &SubSlot) -> Result<String> {
        if slot.value.is_truthy() {
            substitute(&slot.template, &slot.value, self.value_type)
        } else {
            Ok(slot.fallback.clone().unwrap_or_default())
        }
    }
}

impl Fragment for MultiSlot {
    fn resolve(&self) -> Result<Option<String>> {
        let mut rendered: Vec<Option<String>> = vec![None; self.slots.len()];
        let mut out = String::with_capacity(self.template.len() + 32);
        let mut chars = self.template.char_indices().peekable();

        while let Some((i, c)) = chars.next() {
            if c != '%' {
                out.push(c);
                continue;
            }

            let start = i + 1;
            let mut end = start;
            while let Some(&(j, d)) = chars.peek() {
                if !d.is_ascii_digit() {
                    break;
                }
                end = j + d.len_utf8();
                chars.next();
            }

            let index = self.template[start..end].parse::<usize>().ok();
            match index.filter(|&n| n < self.slots.len()) {
                Some(n) => {
                    if rendered[n].is_none() {
                        rendered[n] = Some(self.render_slot(&self.slots[n])?);
                    }
                    out.push_str(rendered[n].as_deref().unwrap_or_default());
                }
                None => out.push_str(&self.template[i..end]),
            }
        }

        let resolved = out.trim().to_string();
        log::trace!("multi slot {:?} resolved to {resolved:?}", self.template);
        Ok(Some(resolved))
    }
}

/// 取第一个存在的候选结果；全部缺省时结果也是缺省（而不是空串）。
#[derive(Debug, Clone, Default)]
pub struct FirstOf {
    candidates: Vec<Box<dyn Fragment>>,
}

impl FirstOf {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn or(mut self, candidate: impl Fragment + 'static) -> Self {
        self.candidates.push(Box::new(candidate));
        self
    }

    pub fn push(&mut self, candidate: impl Fragment + 'static) -> &mut Self {
        self.candidates.push(Box::new(candidate));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

impl Fragment for FirstOf {
    fn resolve(&self) -> Result<Option<String>> {
        for candidate in &self.candidates {
            if let Some(resolved) = candidate.resolve()? {
                return Ok(Some(resolved));
            }
        }
        Ok(None)
    }
}

/// 以可变参数形式构造 `FirstOf`。
#[macro_export]
macro_rules! first_of {
    ($($candidate:expr),* $(,)?) => {
        $crate::fragment::FirstOf::new()$(.or($candidate))*
    };
}
pub use crate::first_of;
