//! 引号转义：在字符串字面量内部给未转义的引号补上反斜杠。

/// 单引号字符串字面量使用的引号。
pub const SINGLE_QUOTE: char = '\'';

/// 在 `text` 中每个未被转义的 `quote` 前插入 `\`。
///
/// “已转义”按单次出现判断：紧邻的前一个字符是 `\` 即视为已转义，
/// 不统计反斜杠串的奇偶。
pub fn escape_quotes(text: &str, quote: char) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    let mut prev: Option<char> = None;

    for c in text.chars() {
        if c == quote && prev != Some('\\') {
            out.push('\\');
        }
        out.push(c);
        prev = Some(c);
    }

    out
}

/// `escape_quotes` 的逆操作：把 `\<quote>` 还原成 `<quote>`，其余字符原样保留。
pub fn unescape_quotes(text: &str, quote: char) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' && chars.peek() == Some(&quote) {
            continue;
        }
        out.push(c);
    }

    out
}

/// 转义单引号后用单引号包裹，结果总是一个闭合的字面量。
///
/// 与 `escape_quotes` 不同，这里按紧邻的反斜杠串的奇偶判断引号是否已转义：
/// 奇数个视为已转义，偶数个（含零个）补一个反斜杠。结尾的反斜杠串为奇数个时
/// 再补一个，避免收尾的引号被吃掉。
pub(crate) fn quote_string(out: &mut String, s: &str) {
    out.push(SINGLE_QUOTE);
    let mut run = 0usize;
    for c in s.chars() {
        if c == SINGLE_QUOTE && run % 2 == 0 {
            out.push('\\');
        }
        run = if c == '\\' { run + 1 } else { 0 };
        out.push(c);
    }
    if run % 2 == 1 {
        out.push('\\');
    }
    out.push(SINGLE_QUOTE);
}
