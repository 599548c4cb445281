//! 以单个空格拼接语句各部分的字符串缓冲。

#[derive(Debug, Default, Clone)]
pub(crate) struct StringBuilder {
    buf: String,
}

impl StringBuilder {
    pub(crate) fn with_capacity(n: usize) -> Self {
        Self {
            buf: String::with_capacity(n),
        }
    }

    /// 写入 `s`；如果不是首次写入，会先写入一个空格。空串不写入。
    pub(crate) fn write_leading(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        if !self.buf.is_empty() {
            self.buf.push(' ');
        }
        self.buf.push_str(s);
    }

    pub(crate) fn into_string(self) -> String {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::StringBuilder;
    use pretty_assertions::assert_eq;

    #[test]
    fn write_leading_skips_empty() {
        let mut sb = StringBuilder::with_capacity(16);
        sb.write_leading("");
        sb.write_leading("SHOW");
        sb.write_leading("");
        sb.write_leading("ROLES");
        assert_eq!(sb.into_string(), "SHOW ROLES");
    }
}
