//! Line format used by config files
//!
//! Each meaningful line is `key=value`. Blank lines and lines starting with
//! `#` are ignored, and so is any line without an `=`. Only the first `=`
//! separates key from value, so values may contain `=` themselves.

use std::io::{self, Write};

/// Parse one line into a trimmed `(key, value)` pair.
///
/// Returns `None` for blank lines, comments and lines with no `=`.
pub fn parse_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let (key, value) = line.split_once('=')?;
    Some((key.trim(), value.trim()))
}

/// Write a single entry as `key = value\n`.
pub fn write_entry<W: Write>(writer: &mut W, key: &str, value: &str) -> io::Result<()> {
    writeln!(writer, "{} = {}", key, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_pair() {
        assert_eq!(parse_line("db.host=localhost"), Some(("db.host", "localhost")));
    }

    #[test]
    fn test_parse_trims_key_and_value() {
        assert_eq!(parse_line("  server.port =  8080\t"), Some(("server.port", "8080")));
    }

    #[test]
    fn test_parse_splits_on_first_equals() {
        assert_eq!(parse_line("a=b=c"), Some(("a", "b=c")));
    }

    #[test]
    fn test_parse_skips_blank_and_comment_lines() {
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("   \t "), None);
        assert_eq!(parse_line("# comment = not an entry"), None);
        assert_eq!(parse_line("    # indented comment"), None);
    }

    #[test]
    fn test_parse_line_without_separator() {
        assert_eq!(parse_line("justtext"), None);
    }

    #[test]
    fn test_parse_empty_value_and_empty_key() {
        assert_eq!(parse_line("key="), Some(("key", "")));
        assert_eq!(parse_line("=value"), Some(("", "value")));
    }

    #[test]
    fn test_hash_inside_value_is_kept() {
        assert_eq!(parse_line("color = #ff0000"), Some(("color", "#ff0000")));
    }

    #[test]
    fn test_write_entry_format() {
        let mut buf = Vec::new();
        write_entry(&mut buf, "server.port", "8080").unwrap();
        write_entry(&mut buf, "empty", "").unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "server.port = 8080\nempty = \n");
    }
}
