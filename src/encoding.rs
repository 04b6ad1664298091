//! Character encoding detection and transcoding.
//!
//! Snapshots arrive as bytes more often than as strings. The byte entry
//! points sniff the charset declaration from the document head and convert
//! to UTF-8 before parsing, replacing undecodable sequences rather than
//! failing.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// Match `<meta charset="...">`.
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>]+)"#).expect("META_CHARSET regex")
});

/// Match `<meta http-equiv="Content-Type" content="...; charset=...">`.
static META_CONTENT_TYPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#,
    )
    .expect("META_CONTENT_TYPE regex")
});

/// Detect the declared character encoding of an HTML byte stream.
///
/// Examines only the first 1024 bytes; defaults to UTF-8 when no usable
/// declaration is found.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = &html[..html.len().min(1024)];
    let head_str = String::from_utf8_lossy(head);

    for pattern in [&*META_CHARSET, &*META_CONTENT_TYPE] {
        if let Some(label) = pattern.captures(&head_str).and_then(|c| c.get(1)) {
            if let Some(encoding) = Encoding::for_label(label.as_str().as_bytes()) {
                return encoding;
            }
        }
    }

    UTF_8
}

/// Transcode HTML bytes to a UTF-8 string, lossily.
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    let (text, _, _) = encoding.decode(html);
    text.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meta_charset_is_detected() {
        let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body></body></html>";
        assert_eq!(detect_encoding(html).name(), "windows-1252");
    }

    #[test]
    fn content_type_charset_is_detected() {
        let html = b"<html><head><meta http-equiv=\"Content-Type\" content=\"text/html; charset=windows-1251\"></head></html>";
        assert_eq!(detect_encoding(html).name(), "windows-1251");
    }

    #[test]
    fn missing_declaration_defaults_to_utf8() {
        assert_eq!(detect_encoding(b"<html><body></body></html>").name(), "UTF-8");
    }

    #[test]
    fn latin1_bytes_transcode() {
        let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body><p>Caf\xE9</p></body></html>";
        let text = transcode_to_utf8(html);
        assert!(text.contains("Café"));
    }
}
