//! Byte decoding and transcript line normalization.
//!
//! Mobile chat exports arrive with inconsistent encodings and Unicode
//! spacing artifacts; iOS in particular pads timestamps with narrow
//! no-break spaces (U+202F) instead of ordinary spaces. This stage flattens
//! all of that into plain trimmed lines so the extractor can rely on a
//! single line grammar.

use encoding_rs::Encoding;
use std::borrow::Cow;
use unicode_normalization::UnicodeNormalization;

/// Decode raw transcript bytes using the caller-declared encoding.
///
/// Falls back to permissive UTF-8 (undecodable bytes become replacement
/// characters) when no encoding is declared or the declared one reports
/// errors. Never fails.
pub fn decode_bytes<'a>(bytes: &'a [u8], encoding: Option<&'static Encoding>) -> Cow<'a, str> {
    if let Some(encoding) = encoding {
        let (text, _, had_errors) = encoding.decode(bytes);
        if !had_errors {
            return text;
        }
        tracing::debug!(
            encoding = encoding.name(),
            "declared encoding failed, falling back to lossy UTF-8"
        );
    }
    String::from_utf8_lossy(bytes)
}

/// Decode a byte buffer into the ordered sequence of non-empty, trimmed
/// transcript lines.
///
/// Applies NFKC normalization, replaces no-break (U+00A0) and narrow
/// no-break (U+202F) spaces with ordinary spaces, splits on line boundaries,
/// trims trailing whitespace, and drops empty lines. Always produces a
/// (possibly empty) sequence.
pub fn normalize_lines(bytes: &[u8], encoding: Option<&'static Encoding>) -> Vec<String> {
    let text = decode_bytes(bytes, encoding);
    let normalized: String = text
        .nfkc()
        .map(|c| match c {
            '\u{00A0}' | '\u{202F}' => ' ',
            other => other,
        })
        .collect();

    normalized
        .lines()
        .map(|line| line.trim_end().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_trims_and_drops_empty_lines() {
        let lines = normalize_lines(b"first line  \n\n  second\r\n\r\n", None);
        assert_eq!(lines, vec!["first line".to_string(), "  second".to_string()]);
    }

    #[test]
    fn replaces_no_break_spaces_with_ordinary_spaces() {
        // iOS-style narrow no-break space before the meridiem marker.
        let raw = "[1/2/24, 9:15:42\u{202F}PM] Ana: hi there\u{00A0}friend";
        let lines = normalize_lines(raw.as_bytes(), None);
        assert_eq!(lines, vec!["[1/2/24, 9:15:42 PM] Ana: hi there friend"]);
    }

    #[test]
    fn invalid_utf8_never_fails() {
        let bytes = [b'o', b'k', 0xFF, 0xFE, b'!', b'\n', b'x', b'y'];
        let lines = normalize_lines(&bytes, None);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("ok"));
    }

    #[test]
    fn declared_encoding_is_honored() {
        // "café" in Windows-1252: e9 is é.
        let bytes = [b'c', b'a', b'f', 0xE9];
        let lines = normalize_lines(&bytes, Some(encoding_rs::WINDOWS_1252));
        assert_eq!(lines, vec!["café".to_string()]);
    }

    #[test]
    fn failed_declared_encoding_falls_back_to_lossy_utf8() {
        // Valid UTF-8 but invalid UTF-16LE content with odd length.
        let bytes = "hello world".as_bytes();
        let lines = normalize_lines(bytes, Some(encoding_rs::UTF_16LE));
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn nfkc_folds_compatibility_characters() {
        // Fullwidth letters normalize to ASCII under NFKC.
        let lines = normalize_lines("ｈｅｌｌｏ".as_bytes(), None);
        assert_eq!(lines, vec!["hello".to_string()]);
    }
}
