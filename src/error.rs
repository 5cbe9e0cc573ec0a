//! Error types for the string utilities and the deep comparator.
//!
//! Two families of errors live here:
//!
//! - [`Error`]: returned by the fallible utilities (formatters, decoders,
//!   validators, file helpers). Paired with the [`Result`] alias.
//! - [`Mismatch`]: returned by [`compare`](crate::compare) when two values are
//!   not equivalent. Each variant carries the [`KeyPath`] of the offending
//!   location and the textual form of both sides.
//!
//! ## Examples
//!
//! ```rust
//! use strproc::{compare, MismatchKind};
//!
//! let err = compare(&vec![1, 2, 3], &vec![1, 2]).unwrap_err();
//! assert_eq!(err.kind(), MismatchKind::LengthMismatch);
//! assert!(err.to_string().contains("length mismatch"));
//! ```

use crate::path::KeyPath;
use std::fmt;
use thiserror::Error;

/// Errors produced by the fallible string utilities.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// IO error while reading a file
    #[error("IO error: {0}")]
    Io(String),

    /// Value of a type the operation cannot handle
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Text that should hold a number but does not
    #[error("Invalid number: {0:?}")]
    InvalidNumber(String),

    /// Argument outside the accepted domain
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Option list the operation cannot work with
    #[error("Invalid option: {0}")]
    InvalidOption(String),

    /// Text that does not have the shape of any IP address
    #[error("Invalid address {addr:?}: {reason}")]
    InvalidAddress { addr: String, reason: String },

    /// Markup found where plain text was required
    #[error("Detected {0}")]
    MarkupDetected(&'static str),

    /// Malformed escape sequence
    #[error("Decode error at byte {offset}: {msg}")]
    Decode { offset: usize, msg: String },

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an unsupported type error.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates an invalid address error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strproc::Error;
    ///
    /// let err = Error::invalid_address("A.B.C.D", "not an IP address");
    /// assert!(err.to_string().contains("A.B.C.D"));
    /// ```
    pub fn invalid_address(addr: &str, reason: &str) -> Self {
        Error::InvalidAddress {
            addr: addr.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Creates a decode error located at `offset` bytes into the input.
    pub fn decode(offset: usize, msg: &str) -> Self {
        Error::Decode {
            offset,
            msg: msg.to_string(),
        }
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strproc::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// The category of a [`Mismatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MismatchKind {
    /// The operands, or two values under the same key, differ in type.
    TypeMismatch,
    /// Two containers differ in length.
    LengthMismatch,
    /// Two scalars or sequence elements differ in value.
    ValueMismatch,
    /// A value of a kind the comparator does not traverse.
    KindUnsupported,
}

impl fmt::Display for MismatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MismatchKind::TypeMismatch => "type mismatch",
            MismatchKind::LengthMismatch => "length mismatch",
            MismatchKind::ValueMismatch => "different value",
            MismatchKind::KindUnsupported => "unsupported kind",
        })
    }
}

/// Why two values were found not equivalent.
///
/// `obj1` names the first operand and `obj2` the second, each followed by the
/// rendered [`KeyPath`] of the location that failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Mismatch {
    #[error("type mismatch: (obj1{path} := {left}) is {left_type}, (obj2{path} := {right}) is {right_type}")]
    Type {
        path: KeyPath,
        left: String,
        right: String,
        left_type: String,
        right_type: String,
    },

    #[error("length mismatch: len(obj1{path}) = {left} != len(obj2{path}) = {right}")]
    Length {
        path: KeyPath,
        left: usize,
        right: usize,
    },

    #[error("different value: (obj1{path} := {left}) != (obj2{path} := {right})")]
    Value {
        path: KeyPath,
        left: String,
        right: String,
    },

    #[error("unsupported kind: (obj1{path} := {left}), (obj2{path} := {right})")]
    UnsupportedKind {
        path: KeyPath,
        left: String,
        right: String,
    },
}

impl Mismatch {
    /// Returns the category of this mismatch.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> MismatchKind {
        match self {
            Mismatch::Type { .. } => MismatchKind::TypeMismatch,
            Mismatch::Length { .. } => MismatchKind::LengthMismatch,
            Mismatch::Value { .. } => MismatchKind::ValueMismatch,
            Mismatch::UnsupportedKind { .. } => MismatchKind::KindUnsupported,
        }
    }

    /// Returns the location of the mismatch, empty for the operands themselves.
    #[inline]
    #[must_use]
    pub const fn path(&self) -> &KeyPath {
        match self {
            Mismatch::Type { path, .. }
            | Mismatch::Length { path, .. }
            | Mismatch::Value { path, .. }
            | Mismatch::UnsupportedKind { path, .. } => path,
        }
    }

    /// Returns the rendered values on both sides. Lengths for [`Mismatch::Length`].
    #[must_use]
    pub fn sides(&self) -> (String, String) {
        match self {
            Mismatch::Type { left, right, .. }
            | Mismatch::Value { left, right, .. }
            | Mismatch::UnsupportedKind { left, right, .. } => (left.clone(), right.clone()),
            Mismatch::Length { left, right, .. } => (left.to_string(), right.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_mismatch_message() {
        let mut path = KeyPath::new();
        path.push_key("F");
        path.push_key("name");
        path.push_key("first");
        let err = Mismatch::Value {
            path,
            left: "1".to_string(),
            right: "11".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "different value: (obj1[F][name][first] := 1) != (obj2[F][name][first] := 11)"
        );
        assert_eq!(err.kind(), MismatchKind::ValueMismatch);
        assert_eq!(err.path().len(), 3);
    }

    #[test]
    fn test_root_mismatch_has_empty_path() {
        let err = Mismatch::Length {
            path: KeyPath::new(),
            left: 3,
            right: 9,
        };
        assert_eq!(
            err.to_string(),
            "length mismatch: len(obj1) = 3 != len(obj2) = 9"
        );
        assert_eq!(err.sides(), ("3".to_string(), "9".to_string()));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(ref msg) if msg.contains("gone")));
    }
}
