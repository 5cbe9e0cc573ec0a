//! Removing markup and decoding percent escapes.

use crate::error::{Error, Result};
use regex::Regex;
use std::sync::OnceLock;

/// Removes HTML tags from `s` and returns the remaining text lines.
///
/// Comments, declarations and the bodies of `<script>` and `<style>` elements
/// are dropped along with the tags. Each remaining line is trimmed and blank
/// lines are skipped.
///
/// # Examples
///
/// ```rust
/// use strproc::strip_tags;
///
/// let html = "<html>\n<head><title>  Hello </title></head>\n<body>\n\n<p>World</p>\n</body></html>";
/// assert_eq!(strip_tags(html), "Hello\nWorld");
/// ```
#[must_use]
pub fn strip_tags(s: &str) -> String {
    static HIDDEN: OnceLock<Regex> = OnceLock::new();
    static TAG: OnceLock<Regex> = OnceLock::new();
    let hidden = HIDDEN.get_or_init(|| {
        Regex::new(r"(?is)<!--.*?-->|<script\b.*?</script\s*>|<style\b.*?</style\s*>")
            .expect("hidden content pattern")
    });
    let tag = TAG.get_or_init(|| Regex::new(r"(?s)<[^>]*>").expect("tag pattern"));

    let visible = hidden.replace_all(s, "");
    let text = tag.replace_all(&visible, "");
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Decodes a form-encoded string: `+` becomes a space and `%XX` escapes
/// become bytes.
///
/// # Examples
///
/// ```rust
/// use strproc::decode_url_encoded;
///
/// assert_eq!(decode_url_encoded("a+b%26c%3Dd").unwrap(), "a b&c=d");
/// assert_eq!(decode_url_encoded("%ED%95%9C").unwrap(), "한");
/// ```
///
/// # Errors
///
/// Returns [`Error::Decode`] when the decoded bytes are not valid UTF-8.
pub fn decode_url_encoded(s: &str) -> Result<String> {
    let spaced = s.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|decoded| decoded.into_owned())
        .map_err(|err| Error::decode(err.utf8_error().valid_up_to(), &err.to_string()))
}

/// Decodes `%uXXXX` UTF-16 escapes and `%XX` byte escapes.
///
/// A high surrogate must be followed by a low surrogate escape; the pair is
/// joined into one character.
///
/// # Examples
///
/// ```rust
/// use strproc::decode_unicode_entities;
///
/// assert_eq!(decode_unicode_entities("%uD55C%uAE00").unwrap(), "한글");
/// assert_eq!(decode_unicode_entities("%uD83D%uDE00!").unwrap(), "😀!");
/// assert_eq!(decode_unicode_entities("a%20b").unwrap(), "a b");
/// ```
///
/// # Errors
///
/// Returns [`Error::Decode`] for a truncated or non-hex escape, an unpaired
/// surrogate, or bytes that do not form valid UTF-8.
pub fn decode_unicode_entities(s: &str) -> Result<String> {
    let bytes = s.as_bytes();
    let mut out: Vec<u8> = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'%' {
            out.push(bytes[i]);
            i += 1;
            continue;
        }

        if bytes.get(i + 1) == Some(&b'u') {
            let unit = hex_at(bytes, i + 2, 4).ok_or_else(|| malformed(i))?;
            let (c, consumed) = if (0xD800..0xDC00).contains(&unit) {
                let low = low_surrogate_at(bytes, i + 6).ok_or_else(|| unpaired(i))?;
                let code = 0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
                (char::from_u32(code), 12)
            } else {
                (char::from_u32(unit), 6)
            };
            let c = c.ok_or_else(|| unpaired(i))?;
            let mut buf = [0u8; 4];
            out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            i += consumed;
        } else {
            let byte = hex_at(bytes, i + 1, 2).ok_or_else(|| malformed(i))?;
            out.push(byte as u8);
            i += 3;
        }
    }

    String::from_utf8(out).map_err(|err| {
        let offset = err.utf8_error().valid_up_to();
        Error::decode(offset, "decoded bytes are not valid UTF-8")
    })
}

fn hex_at(bytes: &[u8], start: usize, len: usize) -> Option<u32> {
    let digits = bytes.get(start..start + len)?;
    if !digits.iter().all(u8::is_ascii_hexdigit) {
        return None;
    }
    let text = std::str::from_utf8(digits).ok()?;
    u32::from_str_radix(text, 16).ok()
}

fn low_surrogate_at(bytes: &[u8], start: usize) -> Option<u32> {
    if bytes.get(start..start + 2) != Some(b"%u".as_slice()) {
        return None;
    }
    hex_at(bytes, start + 2, 4).filter(|unit| (0xDC00..0xE000).contains(unit))
}

fn malformed(offset: usize) -> Error {
    Error::decode(offset, "malformed escape sequence")
}

fn unpaired(offset: usize) -> Error {
    Error::decode(offset, "unpaired surrogate")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_tags_drops_script_and_comments() {
        let html = "<!DOCTYPE html>\n<p>keep</p><!-- gone\n still gone -->\n<script>\nvar x = '<b>';\n</script>\n<STYLE>p { }</STYLE>tail";
        assert_eq!(strip_tags(html), "keep\ntail");
    }

    #[test]
    fn test_strip_tags_plain_text_unchanged() {
        assert_eq!(strip_tags("just text"), "just text");
        assert_eq!(strip_tags(""), "");
    }

    #[test]
    fn test_decode_unicode_errors() {
        assert!(matches!(
            decode_unicode_entities("%u12"),
            Err(Error::Decode { offset: 0, .. })
        ));
        assert!(matches!(
            decode_unicode_entities("ab%zz"),
            Err(Error::Decode { offset: 2, .. })
        ));
        assert!(decode_unicode_entities("%uD83D").is_err());
        assert!(decode_unicode_entities("%uDE00").is_err());
        assert!(decode_unicode_entities("%FF").is_err());
    }

    #[test]
    fn test_decode_unicode_mixed() {
        assert_eq!(decode_unicode_entities("%ED%95%9C%u0021").unwrap(), "한!");
        assert_eq!(decode_unicode_entities("plain").unwrap(), "plain");
    }

    #[test]
    fn test_decode_url_encoded_invalid_utf8() {
        assert!(matches!(
            decode_url_encoded("%FF%FE"),
            Err(Error::Decode { .. })
        ));
    }
}
