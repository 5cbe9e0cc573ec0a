//! Validation of common textual formats.
//!
//! The boolean validators answer "does this look like X". The IP and pure-text
//! validators can also fail outright, for input that is not an address at all
//! or that carries markup.

use crate::error::{Error, Result};
use crate::markup::decode_url_encoded;
use regex::Regex;
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::OnceLock;

const MAX_LABEL_LEN: usize = 63;

const DOMAIN_PATTERN: &str = r"(?:[\p{L}\p{N}](?:[\p{L}\p{N}-]*[\p{L}\p{N}])?\.)+\p{L}{2,}";
const IPV4_PATTERN: &str = r"\d{1,3}(?:\.\d{1,3}){3}";

macro_rules! cached_regex {
    ($name:ident, $pattern:expr) => {
        fn $name() -> &'static Regex {
            static RE: OnceLock<Regex> = OnceLock::new();
            RE.get_or_init(|| Regex::new($pattern).expect(stringify!($name)))
        }
    };
}

cached_regex!(domain_re, &format!("^{}$", DOMAIN_PATTERN));
cached_regex!(
    email_re,
    &format!(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{{|}}~-]+@({})$", DOMAIN_PATTERN)
);
cached_regex!(
    url_re,
    &format!(
        r"^(?i:https?|ftp)://(?:[^\s:@/]+(?::[^\s@/]*)?@)?(?:{}|{}|(?i:localhost))(?::\d{{1,5}})?(?:[/?#]\S*)?$",
        DOMAIN_PATTERN, IPV4_PATTERN
    )
);
cached_regex!(
    mac_re,
    r"^(?:[0-9A-Fa-f]{2}(?::[0-9A-Fa-f]{2}){5}|[0-9A-Fa-f]{2}(?:-[0-9A-Fa-f]{2}){5}|[0-9A-Fa-f]{4}\.[0-9A-Fa-f]{4}\.[0-9A-Fa-f]{4})$"
);
cached_regex!(ipv4_shape_re, &format!("^{}$", IPV4_PATTERN));
cached_regex!(
    mapped_shape_re,
    &format!(r"^[0-9A-Fa-f:]*:{}$", IPV4_PATTERN)
);
cached_regex!(ipv6_shape_re, r"^[0-9A-Fa-f:]+$");
cached_regex!(file_name_re, r"^[A-Za-z0-9_-]+(?:\.[A-Za-z0-9_-]+)*$");
cached_regex!(relative_path_re, r"^[A-Za-z0-9_\-./ ]+$");
cached_regex!(element_re, r"<\s*/?\s*[a-zA-Z][^>]*>");
cached_regex!(declaration_re, r"<[!?][^>]*>");
cached_regex!(named_entity_re, r"&[a-zA-Z]+;");

/// Returns `true` for an address of the form `local@domain`.
///
/// # Examples
///
/// ```rust
/// use strproc::is_valid_email;
///
/// assert!(is_valid_email("a@golang.org"));
/// assert!(!is_valid_email("a@golang"));
/// ```
#[must_use]
pub fn is_valid_email(s: &str) -> bool {
    email_re()
        .captures(s)
        .and_then(|caps| caps.get(1))
        .is_some_and(|domain| labels_fit(domain.as_str()))
}

/// Returns `true` for a domain name of two or more labels.
///
/// Labels may hold letters and digits from any script, with inner hyphens.
/// The last label must be alphabetic and at least two letters long. A
/// trailing dot is rejected.
///
/// # Examples
///
/// ```rust
/// use strproc::is_valid_domain;
///
/// assert!(is_valid_domain("golang.org"));
/// assert!(is_valid_domain("中国互联网络信息中心.中国"));
/// assert!(!is_valid_domain("golang.org."));
/// assert!(!is_valid_domain("qwd-qwdqwd.1212"));
/// ```
#[must_use]
pub fn is_valid_domain(s: &str) -> bool {
    domain_re().is_match(s) && labels_fit(s)
}

fn labels_fit(domain: &str) -> bool {
    domain
        .split('.')
        .all(|label| label.chars().count() <= MAX_LABEL_LEN)
}

/// Returns `true` for an `http`, `https` or `ftp` URL.
///
/// The host is a domain name, a dotted IPv4 address or `localhost`, followed
/// by an optional port and any path, query or fragment without whitespace.
///
/// # Examples
///
/// ```rust
/// use strproc::is_valid_url;
///
/// assert!(is_valid_url("https://www.google.co.kr/url?sa=t&rct=j&q=&esrc=s&source=web"));
/// assert!(is_valid_url("http://localhost:8080/"));
/// assert!(!is_valid_url("mailto:a@golang.org"));
/// ```
#[must_use]
pub fn is_valid_url(s: &str) -> bool {
    url_re().is_match(s)
}

/// Returns `true` for a 48-bit MAC address.
///
/// Accepted forms are six hex octets separated by one consistent `:` or `-`,
/// and the dotted `xxxx.xxxx.xxxx` form.
///
/// # Examples
///
/// ```rust
/// use strproc::is_valid_mac_addr;
///
/// assert!(is_valid_mac_addr("02-f3-71-eb-9e-4b"));
/// assert!(is_valid_mac_addr("02f3.71eb.9e4b"));
/// assert!(!is_valid_mac_addr("02:f3-71:eb:9e:4b"));
/// ```
#[must_use]
pub fn is_valid_mac_addr(s: &str) -> bool {
    mac_re().is_match(s)
}

/// Shape of an IP address, optionally with a CIDR prefix length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IpAddrKind {
    V4,
    V4Cidr,
    V6,
    V6Cidr,
    /// IPv6 with the low 32 bits written as a dotted IPv4 address.
    V4MappedV6,
    V4MappedV6Cidr,
}

impl IpAddrKind {
    fn max_prefix(self) -> u32 {
        match self {
            IpAddrKind::V4 | IpAddrKind::V4Cidr => 32,
            _ => 128,
        }
    }

    fn with_prefix(self) -> IpAddrKind {
        match self {
            IpAddrKind::V4 => IpAddrKind::V4Cidr,
            IpAddrKind::V6 => IpAddrKind::V6Cidr,
            IpAddrKind::V4MappedV6 => IpAddrKind::V4MappedV6Cidr,
            other => other,
        }
    }
}

impl fmt::Display for IpAddrKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IpAddrKind::V4 => "IPv4",
            IpAddrKind::V4Cidr => "IPv4 CIDR",
            IpAddrKind::V6 => "IPv6",
            IpAddrKind::V6Cidr => "IPv6 CIDR",
            IpAddrKind::V4MappedV6 => "IPv4-mapped IPv6",
            IpAddrKind::V4MappedV6Cidr => "IPv4-mapped IPv6 CIDR",
        };
        f.write_str(name)
    }
}

/// Checks that `s` is a valid IP address of one of the requested kinds.
///
/// The kind of `s` is decided from its shape first, then the address and
/// prefix length are checked for range.
///
/// # Examples
///
/// ```rust
/// use strproc::{is_valid_ip_addr, IpAddrKind};
///
/// let kinds = [IpAddrKind::V4MappedV6, IpAddrKind::V4];
/// assert_eq!(is_valid_ip_addr("2001:470:1f09:495::3:217.126.185.21", &kinds), Ok(true));
/// assert_eq!(is_valid_ip_addr("999.1.1.1", &kinds), Ok(false));
/// assert_eq!(is_valid_ip_addr("10.0.0.0/8", &kinds), Ok(false));
/// assert!(is_valid_ip_addr("A.B.C.D", &kinds).is_err());
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidOption`] when `kinds` is empty and
/// [`Error::InvalidAddress`] when `s` has no IP address shape.
pub fn is_valid_ip_addr(s: &str, kinds: &[IpAddrKind]) -> Result<bool> {
    if kinds.is_empty() {
        return Err(Error::InvalidOption(
            "at least one IP address kind is required".to_string(),
        ));
    }

    let (addr, prefix) = match s.split_once('/') {
        Some((addr, prefix)) => {
            if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
                return Err(Error::invalid_address(s, "prefix length is not a number"));
            }
            (addr, Some(prefix))
        }
        None => (s, None),
    };

    let base = ip_shape(addr).ok_or_else(|| Error::invalid_address(s, "not an IP address"))?;
    let kind = if prefix.is_some() {
        base.with_prefix()
    } else {
        base
    };

    let addr_ok = match base {
        IpAddrKind::V4 => addr.parse::<Ipv4Addr>().is_ok(),
        _ => addr.parse::<Ipv6Addr>().is_ok(),
    };
    let prefix_ok = prefix.map_or(true, |p| {
        p.parse::<u32>().is_ok_and(|len| len <= kind.max_prefix())
    });

    Ok(addr_ok && prefix_ok && kinds.contains(&kind))
}

fn ip_shape(addr: &str) -> Option<IpAddrKind> {
    if ipv4_shape_re().is_match(addr) {
        return Some(IpAddrKind::V4);
    }
    let colons = addr.matches(':').count();
    if colons < 2 {
        return None;
    }
    if mapped_shape_re().is_match(addr) {
        Some(IpAddrKind::V4MappedV6)
    } else if ipv6_shape_re().is_match(addr) {
        Some(IpAddrKind::V6)
    } else {
        None
    }
}

/// Returns `true` for a bare file name: runs of letters, digits, `_` and `-`
/// joined by single dots.
///
/// # Examples
///
/// ```rust
/// use strproc::is_valid_file_path;
///
/// assert!(is_valid_file_path("a-qwdqwd_qwdqwdqwd-123.txt"));
/// assert!(!is_valid_file_path("a-1-s-d-v-we-wd_+qwd-qwd-qwd.txt"));
/// assert!(!is_valid_file_path("../../etc/passwd"));
/// ```
#[must_use]
pub fn is_valid_file_path(s: &str) -> bool {
    file_name_re().is_match(s)
}

/// Like [`is_valid_file_path`] but also allows `/`, `.` segments and spaces.
///
/// # Examples
///
/// ```rust
/// use strproc::is_valid_file_path_with_relative_path;
///
/// assert!(is_valid_file_path_with_relative_path("../../qwdqwdqwd/../qwdqwdqwd.txt"));
/// assert!(!is_valid_file_path_with_relative_path("a.txt;rm -rf /"));
/// ```
#[must_use]
pub fn is_valid_file_path_with_relative_path(s: &str) -> bool {
    relative_path_re().is_match(s)
}

/// Checks that `s` is plain text without HTML elements, comments or
/// declarations.
///
/// Percent-encoded input is decoded first. Surrounding whitespace is ignored;
/// empty text and text with inner control characters (tabs included) are not
/// pure.
///
/// # Examples
///
/// ```rust
/// use strproc::{is_pure_text_normal, Error};
///
/// assert_eq!(is_pure_text_normal("I <3 Ponies!"), Ok(true));
/// assert_eq!(is_pure_text_normal("I &amp; like Rust"), Ok(true));
/// assert_eq!(
///     is_pure_text_normal(r#"Foo<script type="text/javascript">alert(1337)</script>Bar"#),
///     Err(Error::MarkupDetected("HTML element"))
/// );
/// ```
///
/// # Errors
///
/// Returns [`Error::MarkupDetected`] when markup is found.
pub fn is_pure_text_normal(s: &str) -> Result<bool> {
    pure_text(s, false)
}

/// Like [`is_pure_text_normal`] but also rejects named HTML entities such as
/// `&amp;`. Numeric entities (`&#32;`) are allowed.
///
/// # Errors
///
/// Returns [`Error::MarkupDetected`] when markup or a named entity is found.
pub fn is_pure_text_strict(s: &str) -> Result<bool> {
    pure_text(s, true)
}

fn pure_text(s: &str, strict: bool) -> Result<bool> {
    let decoded = decode_url_encoded(s).unwrap_or_else(|_| s.to_string());
    let text = decoded.trim();
    if text.is_empty() || text.chars().any(char::is_control) {
        return Ok(false);
    }

    let tagged = element_re().is_match(text) || declaration_re().is_match(text);
    if tagged {
        return Err(Error::MarkupDetected(if strict { "tag" } else { "HTML element" }));
    }
    if strict && named_entity_re().is_match(text) {
        return Err(Error::MarkupDetected("HTML entity"));
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ip_shape() {
        assert_eq!(ip_shape("127.0.0.1"), Some(IpAddrKind::V4));
        assert_eq!(ip_shape("::FFFF:222.1.41.90"), Some(IpAddrKind::V4MappedV6));
        assert_eq!(ip_shape("fe80::1"), Some(IpAddrKind::V6));
        assert_eq!(ip_shape(":F"), None);
        assert_eq!(ip_shape("127127127127"), None);
    }

    #[test]
    fn test_ip_prefix_ranges() {
        assert_eq!(is_valid_ip_addr("8.8.8.8/32", &[IpAddrKind::V4Cidr]), Ok(true));
        assert_eq!(is_valid_ip_addr("8.8.8.8/33", &[IpAddrKind::V4Cidr]), Ok(false));
        assert_eq!(is_valid_ip_addr("2000::/128", &[IpAddrKind::V6Cidr]), Ok(true));
        assert!(matches!(
            is_valid_ip_addr("8.8.8.8/x", &[IpAddrKind::V4Cidr]),
            Err(Error::InvalidAddress { .. })
        ));
    }

    #[test]
    fn test_empty_kinds() {
        assert!(matches!(
            is_valid_ip_addr("127.0.0.1", &[]),
            Err(Error::InvalidOption(_))
        ));
    }

    #[test]
    fn test_long_label_rejected() {
        let label = "a".repeat(64);
        assert!(!is_valid_domain(&format!("{}.com", label)));
        assert!(is_valid_domain(&format!("{}.com", &label[..63])));
    }

    #[test]
    fn test_pure_text_control_chars() {
        assert_eq!(is_pure_text_normal(""), Ok(false));
        assert_eq!(is_pure_text_normal("\tq\tq\t\nq"), Ok(false));
        assert_eq!(is_pure_text_normal("I like Rust\t\n"), Ok(true));
    }

    #[test]
    fn test_strict_entity_message() {
        assert_eq!(
            is_pure_text_strict("I &amp; like Rust"),
            Err(Error::MarkupDetected("HTML entity"))
        );
        assert_eq!(is_pure_text_strict("I &#32; like Rust"), Ok(true));
    }
}
