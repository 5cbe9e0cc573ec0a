//! # strproc
//!
//! String processing, validation and deep-equality comparison utilities.
//!
//! ## Deep comparison
//!
//! [`compare`] decides whether two values are equivalent and, when they are
//! not, reports the first difference as a [`Mismatch`] carrying the
//! [`KeyPath`] to it. Any `T: Serialize` can be compared; values are first
//! converted into the dynamic [`Value`] model, which keeps exact numeric
//! widths.
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use strproc::{compare, MismatchKind};
//!
//! let mut a = BTreeMap::new();
//! a.insert("name", BTreeMap::from([("first", 1), ("last", 2)]));
//! let mut b = BTreeMap::new();
//! b.insert("name", BTreeMap::from([("first", 11), ("last", 2)]));
//!
//! let err = compare(&a, &b).unwrap_err();
//! assert_eq!(err.kind(), MismatchKind::ValueMismatch);
//! assert_eq!(err.path().to_string(), "[name][first]");
//! assert_eq!(
//!     err.to_string(),
//!     "different value: (obj1[name][first] := 1) != (obj2[name][first] := 11)"
//! );
//! ```
//!
//! ## String utilities
//!
//! ```rust
//! use strproc::{add_slashes, number_fmt, padding_both, upper_case_first_words, word_wrap_around};
//!
//! assert_eq!(add_slashes(r"a\b"), r"a\\b");
//! assert_eq!(number_fmt(1234567).unwrap(), "1,234,567");
//! assert_eq!(padding_both("ab", "*", 6), "**ab**");
//! assert_eq!(upper_case_first_words("hello world"), "Hello World");
//! assert_eq!(word_wrap_around("aaaa bbbb cccc", 4, "\n").unwrap(), "aaaa\nbbbb\ncccc");
//! ```
//!
//! ## Validation
//!
//! ```rust
//! use strproc::{is_valid_domain, is_valid_ip_addr, IpAddrKind};
//!
//! assert!(is_valid_domain("golang.org"));
//! assert_eq!(is_valid_ip_addr("192.168.1.1/24", &[IpAddrKind::V4Cidr]), Ok(true));
//! ```
//!
//! ## Assertion macros
//!
//! [`assert_equivalent!`] and [`assert_not_equivalent!`] wrap [`compare`] for
//! tests, and [`value!`] builds [`Value`] literals. [`assert_less_than!`] and
//! its siblings order numbers of any width by value.
//!
//! ## Logging
//!
//! The crate emits `tracing` events (`debug` for failed comparisons and file
//! access, `trace` for descent into nested containers) and installs no
//! subscriber.

pub mod compare;
pub mod error;
pub mod format;
pub mod hash;
pub mod macros;
pub mod map;
pub mod markup;
pub mod options;
pub mod path;
pub mod ser;
pub mod transform;
pub mod validator;
pub mod value;

pub use compare::{compare, compare_values, Comparator};
pub use error::{Error, Mismatch, MismatchKind, Result};
pub use format::{convert_to_str, human_byte_size, human_file_size, number_fmt};
pub use hash::{file_md5_hash, md5_hash};
pub use map::ValueMap;
pub use markup::{decode_unicode_entities, decode_url_encoded, strip_tags};
pub use options::{CompareOptions, PadSide, SizeUnitStyle};
pub use path::{KeyPath, Segment};
pub use ser::{to_value, ValueSerializer};
pub use transform::{
    add_slashes, lower_case_first_words, nl2br, padding, padding_both, padding_left,
    padding_right, reverse_normal_str, reverse_str, strip_slashes, swap_case_first_words,
    upper_case_first_words, word_wrap_around, word_wrap_simple,
};
pub use validator::{
    is_pure_text_normal, is_pure_text_strict, is_valid_domain, is_valid_email,
    is_valid_file_path, is_valid_file_path_with_relative_path, is_valid_ip_addr,
    is_valid_mac_addr, is_valid_url, IpAddrKind,
};
pub use value::{Kind, Number, NumberType, Record, Value, ValueType};

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize, Debug)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[test]
    fn test_to_value_keeps_record_name() {
        let value = to_value(&Point { x: 1, y: 2 }).unwrap();
        match value {
            Value::Record(record) => {
                assert_eq!(record.name, "Point");
                assert_eq!(record.fields.get("x"), Some(&Value::Number(Number::I32(1))));
            }
            other => panic!("Expected record, got {:?}", other),
        }
    }

    #[test]
    fn test_records_are_not_traversed() {
        let err = compare(&Point { x: 1, y: 2 }, &Point { x: 1, y: 2 }).unwrap_err();
        assert_eq!(err.kind(), MismatchKind::KindUnsupported);
    }

    #[test]
    fn test_utilities_share_error_type() {
        let errors: Vec<Error> = vec![
            word_wrap_simple("a b", 0, "*").unwrap_err(),
            number_fmt("x").unwrap_err(),
            decode_unicode_entities("%zz").unwrap_err(),
            is_valid_ip_addr("nope", &[IpAddrKind::V4]).unwrap_err(),
        ];
        assert!(errors.iter().all(|e| !e.to_string().is_empty()));
    }
}
