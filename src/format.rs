//! Number and size formatting.
//!
//! Floats are rendered in the shortest form that round-trips, switching to
//! exponent notation when the decimal exponent is below -4 or at least 6
//! (`1.1234561e+06`, `1.5e-07`). Integers are always plain decimal.

use crate::error::{Error, Result};
use crate::options::SizeUnitStyle;
use crate::value::{Number, Value};
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use tracing::debug;

const EXPONENT_THRESHOLD: i32 = 6;
const GROUP_SIZE: usize = 3;
const KIBI: f64 = 1024.0;

fn numeric_text() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[-+]?[0-9]*\.?[0-9]+([eE][-+]?[0-9]+)?$").expect("numeric text pattern")
    })
}

/// Formats a number with `,` between groups of three integral digits.
///
/// Accepts any integer or float, or a string holding a decimal number. Only
/// the digits before the decimal point or exponent are grouped.
///
/// # Examples
///
/// ```rust
/// use strproc::number_fmt;
///
/// assert_eq!(number_fmt(123456789101112i64).unwrap(), "123,456,789,101,112");
/// assert_eq!(number_fmt(-123456.1234).unwrap(), "-123,456.1234");
/// assert_eq!(number_fmt(1.1234561e+06).unwrap(), "1.1234561e+06");
/// assert_eq!(number_fmt("1234.5").unwrap(), "1,234.5");
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidNumber`] for text that is not a decimal number and
/// [`Error::UnsupportedType`] for anything that is neither a real number nor
/// text.
pub fn number_fmt<T: Into<Value>>(value: T) -> Result<String> {
    let text = match value.into() {
        Value::Number(n) => real_to_text(&n)?,
        Value::String(s) => {
            if !numeric_text().is_match(&s) {
                return Err(Error::InvalidNumber(s));
            }
            s
        }
        other => return Err(Error::UnsupportedType(other.kind().to_string())),
    };
    Ok(group_integral_digits(&text))
}

fn real_to_text(n: &Number) -> Result<String> {
    match *n {
        Number::F32(v) => finite_text(v.is_finite(), || shortest_float(&format!("{:e}", v))),
        Number::F64(v) => finite_text(v.is_finite(), || shortest_float(&format!("{:e}", v))),
        Number::C64(_) | Number::C128(_) => Err(Error::unsupported_type("complex")),
        _ => Ok(n.to_string()),
    }
}

fn finite_text(finite: bool, render: impl FnOnce() -> String) -> Result<String> {
    if finite {
        Ok(render())
    } else {
        Err(Error::InvalidNumber(render()))
    }
}

/// Rewrites Rust's shortest scientific form (`1.1234561e6`) into the
/// `%g`-style form described in the module docs.
fn shortest_float(scientific: &str) -> String {
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific.to_string();
    };
    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };

    if exponent < -4 || exponent >= EXPONENT_THRESHOLD {
        let exp_sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}{}e{}{:02}", sign, mantissa, exp_sign, exponent.unsigned_abs());
    }

    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let point = exponent + 1;
    let body = if point <= 0 {
        format!("0.{}{}", "0".repeat(point.unsigned_abs() as usize), digits)
    } else {
        let point = point as usize;
        if point >= digits.len() {
            format!("{}{}", digits, "0".repeat(point - digits.len()))
        } else {
            format!("{}.{}", &digits[..point], &digits[point..])
        }
    };
    format!("{}{}", sign, body)
}

fn group_integral_digits(text: &str) -> String {
    let (sign, rest) = match text.as_bytes().first() {
        Some(b'-') | Some(b'+') => text.split_at(1),
        _ => ("", text),
    };
    let end = rest.find(['.', 'e', 'E']).unwrap_or(rest.len());
    let (integral, tail) = rest.split_at(end);
    if integral.len() <= GROUP_SIZE {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len() + integral.len() / GROUP_SIZE);
    out.push_str(sign);
    let lead = integral.len() % GROUP_SIZE;
    for (i, c) in integral.chars().enumerate() {
        if i > 0 && (i + GROUP_SIZE - lead) % GROUP_SIZE == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out.push_str(tail);
    out
}

/// Converts a scalar to its textual form.
///
/// # Examples
///
/// ```rust
/// use strproc::convert_to_str;
///
/// assert_eq!(convert_to_str(1234567u64).unwrap(), "1234567");
/// assert_eq!(convert_to_str(true).unwrap(), "true");
/// assert_eq!(convert_to_str(2.5e10).unwrap(), "2.5e+10");
/// ```
///
/// # Errors
///
/// Returns [`Error::UnsupportedType`] for null, containers and records.
pub fn convert_to_str<T: Into<Value>>(value: T) -> Result<String> {
    match value.into() {
        Value::String(s) => Ok(s),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n @ (Number::F32(_) | Number::F64(_))) => Ok(match real_to_text(&n) {
            Ok(text) => text,
            Err(_) => n.to_string(),
        }),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(Error::UnsupportedType(other.value_type().to_string())),
    }
}

/// Renders a byte count with a binary unit suffix.
///
/// The count is divided by 1024 until it drops below 1024 or the largest unit
/// is reached, then printed with `decimals` fractional digits.
///
/// # Examples
///
/// ```rust
/// use strproc::{human_byte_size, SizeUnitStyle};
///
/// assert_eq!(
///     human_byte_size(3276537856u64, 2, SizeUnitStyle::CamelCaseLong).unwrap(),
///     "3.05GigaByte"
/// );
/// assert_eq!(human_byte_size(512, 0, SizeUnitStyle::UpperCaseDouble).unwrap(), "512B");
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] for negative or non-finite sizes,
/// [`Error::InvalidNumber`] for text that is not a number and
/// [`Error::UnsupportedType`] for other values.
pub fn human_byte_size<T: Into<Value>>(
    size: T,
    decimals: usize,
    style: SizeUnitStyle,
) -> Result<String> {
    let bytes = match size.into() {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| Error::unsupported_type(n.number_type().name()))?,
        Value::String(s) => s.trim().parse::<f64>().map_err(|_| Error::InvalidNumber(s))?,
        other => return Err(Error::UnsupportedType(other.kind().to_string())),
    };
    if !bytes.is_finite() || bytes < 0.0 {
        return Err(Error::InvalidInput(format!("byte size {} is out of range", bytes)));
    }

    let mut scaled = bytes;
    let mut exponent = 0;
    while scaled >= KIBI && exponent < SizeUnitStyle::UNITS - 1 {
        scaled /= KIBI;
        exponent += 1;
    }
    Ok(format!("{:.*}{}", decimals, scaled, style.unit(exponent)))
}

/// Renders the size of a regular file like [`human_byte_size`].
///
/// # Errors
///
/// Returns [`Error::Io`] when the file cannot be inspected and
/// [`Error::InvalidInput`] when `path` is not a regular file.
pub fn human_file_size<P: AsRef<Path>>(
    path: P,
    decimals: usize,
    style: SizeUnitStyle,
) -> Result<String> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading file size");
    let metadata = fs::metadata(path)?;
    if !metadata.is_file() {
        return Err(Error::InvalidInput(format!(
            "{} is not a regular file",
            path.display()
        )));
    }
    human_byte_size(metadata.len(), decimals, style)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortest_float_switches_notation() {
        assert_eq!(shortest_float("1.1234561e6"), "1.1234561e+06");
        assert_eq!(shortest_float("1.23456e5"), "123456");
        assert_eq!(shortest_float("1.5e-7"), "1.5e-07");
        assert_eq!(shortest_float("1.5e-4"), "0.00015");
        assert_eq!(shortest_float("-1.212e24"), "-1.212e+24");
        assert_eq!(shortest_float("0e0"), "0");
        assert_eq!(shortest_float("1e100"), "1e+100");
    }

    #[test]
    fn test_grouping_leaves_fraction_alone() {
        assert_eq!(group_integral_digits("12.12123098123"), "12.12123098123");
        assert_eq!(group_integral_digits("1234"), "1,234");
        assert_eq!(group_integral_digits("+123456"), "+123,456");
        assert_eq!(group_integral_digits("123456789e10"), "123,456,789e10");
        assert_eq!(group_integral_digits(".5"), ".5");
    }

    #[test]
    fn test_number_fmt_rejects() {
        assert!(matches!(number_fmt("12a"), Err(Error::InvalidNumber(_))));
        assert!(matches!(number_fmt(true), Err(Error::UnsupportedType(_))));
        assert!(matches!(number_fmt(f64::NAN), Err(Error::InvalidNumber(_))));
    }

    #[test]
    fn test_number_fmt_f32_keeps_short_form() {
        assert_eq!(number_fmt(1234.5f32).unwrap(), "1,234.5");
    }

    #[test]
    fn test_human_byte_size_edges() {
        assert_eq!(
            human_byte_size(0, 1, SizeUnitStyle::LowerCaseDouble).unwrap(),
            "0.0b"
        );
        assert_eq!(
            human_byte_size(1024, 0, SizeUnitStyle::UpperCaseSingle).unwrap(),
            "1K"
        );
        assert_eq!(
            human_byte_size("2048", 1, SizeUnitStyle::CamelCaseDouble).unwrap(),
            "2.0Kb"
        );
        assert!(matches!(
            human_byte_size(-1, 2, SizeUnitStyle::default()),
            Err(Error::InvalidInput(_))
        ));
        assert!(human_byte_size(vec![1], 2, SizeUnitStyle::default()).is_err());
    }

    #[test]
    fn test_convert_to_str_rejects_containers() {
        assert_eq!(convert_to_str("x").unwrap(), "x");
        assert_eq!(convert_to_str(-5i8).unwrap(), "-5");
        assert!(matches!(
            convert_to_str(vec![1, 2]),
            Err(Error::UnsupportedType(_))
        ));
        assert!(convert_to_str(Value::Null).is_err());
    }
}
