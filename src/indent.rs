//! 缩进单位：进程级默认值，以及按 (单位, 层级) 缓存的缩进字符串。

use std::borrow::Cow;
use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{LazyLock, Mutex, MutexGuard};

/// 语句前缀使用的缩进单位。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IndentUnit {
    #[default]
    Tab,
    TwoSpaces,
    FourSpaces,
}

static DEFAULT_INDENT_UNIT: AtomicU8 = AtomicU8::new(IndentUnit::Tab as u8);
static DEFAULT_INDENT_UNIT_LOCK: Mutex<()> = Mutex::new(());

/// 缓存的最大层级（含）；更深的层级每次现算。
const CACHED_LEVELS: usize = 16;

static INDENT_CACHE: LazyLock<Vec<Vec<String>>> = LazyLock::new(|| {
    IndentUnit::ALL
        .iter()
        .map(|unit| (0..=CACHED_LEVELS).map(|n| unit.as_str().repeat(n)).collect())
        .collect()
});

impl IndentUnit {
    const ALL: [IndentUnit; 3] = [Self::Tab, Self::TwoSpaces, Self::FourSpaces];

    fn from_u8(v: u8) -> Self {
        match v {
            1 => Self::TwoSpaces,
            2 => Self::FourSpaces,
            _ => Self::Tab,
        }
    }

    fn to_u8(self) -> u8 {
        self as u8
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tab => "\t",
            Self::TwoSpaces => "  ",
            Self::FourSpaces => "    ",
        }
    }

    /// `level` 个缩进单位。
    pub fn repeat(self, level: usize) -> Cow<'static, str> {
        let cache: &'static Vec<Vec<String>> = &INDENT_CACHE;
        match cache[self.to_u8() as usize].get(level) {
            Some(s) => Cow::Borrowed(s.as_str()),
            None => Cow::Owned(self.as_str().repeat(level)),
        }
    }
}

impl fmt::Display for IndentUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Tab => "tab",
            Self::TwoSpaces => "two spaces",
            Self::FourSpaces => "four spaces",
        };
        f.write_str(s)
    }
}

/// 获取当前全局默认缩进单位。
pub fn default_indent_unit() -> IndentUnit {
    IndentUnit::from_u8(DEFAULT_INDENT_UNIT.load(Ordering::Relaxed))
}

/// 设置全局默认缩进单位，返回旧值。
pub fn set_default_indent_unit(unit: IndentUnit) -> IndentUnit {
    let old = DEFAULT_INDENT_UNIT.swap(unit.to_u8(), Ordering::Relaxed);
    IndentUnit::from_u8(old)
}

/// 修改全局默认缩进单位的 RAII guard（会持有一个全局锁，避免并行测试互相干扰）。
pub struct DefaultIndentUnitGuard {
    _lock: MutexGuard<'static, ()>,
    old: IndentUnit,
}

impl Drop for DefaultIndentUnitGuard {
    fn drop(&mut self) {
        set_default_indent_unit(self.old);
    }
}

/// 在一个作用域内临时设置默认缩进单位，并保证退出作用域后自动恢复。
pub fn set_default_indent_unit_scoped(unit: IndentUnit) -> DefaultIndentUnitGuard {
    let lock = DEFAULT_INDENT_UNIT_LOCK
        .lock()
        .unwrap_or_else(|e| e.into_inner());
    let old = set_default_indent_unit(unit);
    DefaultIndentUnitGuard { _lock: lock, old }
}

/// 按默认缩进单位生成 `level` 层缩进。
pub fn indent(level: usize) -> Cow<'static, str> {
    default_indent_unit().repeat(level)
}

/// 给语句加上 `level` 层缩进前缀。
pub fn format_query(query: &str, level: usize) -> String {
    let prefix = indent(level);
    let mut out = String::with_capacity(prefix.len() + query.len());
    out.push_str(&prefix);
    out.push_str(query);
    out
}
