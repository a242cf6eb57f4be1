use std::fmt::Write;

use crate::{
    dialect::Dialect,
    error::{Error, Result},
    value::Value,
};

/// Append `raw` wrapped in `open`/`close`, doubling any embedded `close`
/// delimiter so the identifier cannot escape its brackets.
pub(crate) fn push_quoted(buf: &mut String, raw: &str, open: char, close: char) {
    buf.push(open);
    let mut last = 0;
    for (index, char) in raw.char_indices() {
        if char == close {
            if index != last {
                buf.push_str(&raw[last..index]);
            }
            buf.push(close);
            buf.push(close);
            last = index + char.len_utf8();
        }
    }
    // trailing slice
    if last < raw.len() {
        buf.push_str(&raw[last..]);
    }
    buf.push(close);
}

/// Append `raw`, doubling every occurrence of a character in `doubled`.
/// Used for string-literal bodies; the caller supplies the surrounding quotes.
pub(crate) fn push_doubled(buf: &mut String, raw: &str, doubled: &[char]) {
    let mut last = 0;
    for (index, char) in raw.char_indices() {
        if doubled.contains(&char) {
            if index != last {
                buf.push_str(&raw[last..index]);
            }
            buf.push(char);
            buf.push(char);
            last = index + char.len_utf8();
        }
    }
    if last < raw.len() {
        buf.push_str(&raw[last..]);
    }
}

const HEX: &[u8; 16] = b"0123456789ABCDEF";

pub(crate) fn push_hex(buf: &mut String, bytes: &[u8]) {
    for byte in bytes {
        buf.push(HEX[(byte >> 4) as usize] as char);
        buf.push(HEX[(byte & 0x0F) as usize] as char);
    }
}

/// True when `text` contains anything outside the printable 7-bit range,
/// which routes it through the dialect's extended-literal path.
pub(crate) fn is_extended(text: &str) -> bool {
    text.chars().any(|char| !(' '..='~').contains(&char))
}

/// Composition context for the query builders: a growing statement plus the
/// dialect every fragment is rendered against.
pub(crate) struct SqlWriter<'a> {
    buf: String,
    pub(crate) dialect: &'a dyn Dialect,
}

impl<'a> SqlWriter<'a> {
    pub(crate) fn new(dialect: &'a dyn Dialect) -> Self {
        let size_hint = 64;
        Self {
            buf: String::with_capacity(size_hint),
            dialect,
        }
    }

    pub(crate) fn push(&mut self, fragment: &str) {
        self.buf.push_str(fragment);
    }

    pub(crate) fn push_ident(&mut self, name: &str) {
        let quoted = self.dialect.quote_identifier(name);
        self.buf.push_str(&quoted);
    }

    /// The literal-vs-quoted decision: numerics are emitted bare, temporal
    /// values go through the dialect's timestamp format, text picks the plain
    /// or extended quoting path, blobs become hex literals. Non-finite floats
    /// have no SQL literal spelling and are rejected.
    pub(crate) fn push_value(&mut self, value: &Value) -> Result<()> {
        match value {
            Value::Null => self.buf.push_str("NULL"),
            Value::Bool(flag) => self.buf.push_str(self.dialect.bool_literal(*flag)),
            Value::Int(int) => {
                write!(self.buf, "{int}").expect("string writer does not fail");
            }
            Value::Float(float) => {
                if !float.is_finite() {
                    return Err(Error::invalid("value", "float literal must be finite"));
                }
                write!(self.buf, "{float}").expect("string writer does not fail");
            }
            Value::Text(text) => {
                let quoted = if is_extended(text) {
                    self.dialect.quote_extended_value(text)
                } else {
                    self.dialect.quote_value(text)
                };
                self.buf.push_str(&quoted);
            }
            Value::DateTime(instant) => {
                let formatted = self.dialect.format_timestamp(*instant);
                self.buf.push_str(&formatted);
            }
            Value::Blob(bytes) => {
                let quoted = self.dialect.quote_blob(bytes);
                self.buf.push_str(&quoted);
            }
        }
        Ok(())
    }

    pub(crate) fn finish(self) -> String {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_quoted_plain() {
        let mut buf = String::new();
        push_quoted(&mut buf, "users", '[', ']');
        assert_eq!("[users]", buf);
    }

    #[test]
    fn test_push_quoted_doubles_close() {
        let mut buf = String::new();
        push_quoted(&mut buf, "us]ers", '[', ']');
        assert_eq!("[us]]ers]", buf);
        let mut buf = String::new();
        push_quoted(&mut buf, "us`ers", '`', '`');
        assert_eq!("`us``ers`", buf);
    }

    #[test]
    fn test_push_doubled_multiple_targets() {
        let mut buf = String::new();
        push_doubled(&mut buf, r"it's a c:\path", &['\'', '\\']);
        assert_eq!(r"it''s a c:\\path", buf);
    }

    #[test]
    fn test_push_hex() {
        let mut buf = String::new();
        push_hex(&mut buf, &[0xDE, 0xAD, 0x01]);
        assert_eq!("DEAD01", buf);
    }

    #[test]
    fn test_is_extended() {
        assert!(!is_extended("plain ascii 123 ~"));
        assert!(is_extended("héllo"));
        assert!(is_extended("tab\there"));
        assert!(is_extended("日本語"));
    }
}
