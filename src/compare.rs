//! Deep equality of nested values.
//!
//! The comparator answers "are these two values equivalent?" and, when they
//! are not, says where and why. The rules, applied in order:
//!
//! 1. Both operands must have the same concrete type, or the result is a
//!    type mismatch. `5i32` and `5i64` are never comparable. [`compare`]
//!    checks the Rust types; [`compare_values`] infers a [`ValueType`] from
//!    the contents.
//! 2. Records and nulls at the top level are not traversed.
//! 3. Top-level scalars compare by equality. Unequal scalars give `Ok(false)`
//!    without a [`Mismatch`].
//! 4. Containers must have the same length.
//! 5. Sequence elements compare pairwise as opaque values, so a difference
//!    inside a nested element is reported at the element's index.
//! 6. Mapping entries are visited in the first mapping's order. Entries must
//!    agree in [`Kind`]. Nested mappings are walked recursively. Differing
//!    scalar entries are remembered and reported once every key has passed the
//!    kind check; the first such entry is the one reported.
//!
//! Steps 1 and 5 can be relaxed through [`CompareOptions`].
//!
//! ## Examples
//!
//! ```rust
//! use strproc::{compare, MismatchKind};
//!
//! assert_eq!(compare(&"abc", &"abc"), Ok(true));
//! assert_eq!(compare(&1, &2), Ok(false));
//!
//! let err = compare(&5i32, &5i64).unwrap_err();
//! assert_eq!(err.kind(), MismatchKind::TypeMismatch);
//! ```

use crate::error::Mismatch;
use crate::options::CompareOptions;
use crate::path::{KeyPath, Segment};
use crate::value::{Kind, Value, ValueType};
use crate::{to_value, ValueMap};
use serde::Serialize;
use std::any::type_name;
use tracing::{debug, trace};

const MISSING: &str = "(missing)";

/// A deep comparator configured by [`CompareOptions`].
///
/// Holds no per-call state and can be shared between threads.
///
/// # Examples
///
/// ```rust
/// use strproc::{value, Comparator, CompareOptions, MismatchKind};
///
/// let a = value!({ "items": [{ "id": 1 }, { "id": 2 }] });
/// let b = value!({ "items": [{ "id": 1 }, { "id": 3 }] });
///
/// let strict = Comparator::default();
/// let err = strict.compare_values(&a, &b).unwrap_err();
/// assert_eq!(err.kind(), MismatchKind::KindUnsupported);
///
/// let deep = Comparator::new(CompareOptions::new().with_recurse_sequences(true));
/// let err = deep.compare_values(&a, &b).unwrap_err();
/// assert_eq!(err.path().to_string(), "[items][1][id]");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Comparator {
    options: CompareOptions,
}

impl Comparator {
    #[must_use]
    pub fn new(options: CompareOptions) -> Self {
        Comparator { options }
    }

    #[must_use]
    pub fn options(&self) -> &CompareOptions {
        &self.options
    }

    /// Compares two serializable values.
    ///
    /// The type gate uses the Rust types of `A` and `B`, not the shapes of the
    /// converted values, so `Vec<Option<i32>>` is always comparable with
    /// itself and a tuple never matches a `Vec`. With
    /// [`strict_numeric_types`](CompareOptions::with_strict_numeric_types)
    /// cleared, types that differ only in numeric widths pass the gate.
    /// Operands that are both [`Value`]s carry their types in their contents
    /// and go through [`compare_values`](Self::compare_values).
    ///
    /// Both operands are converted with [`to_value`]. A value that cannot be
    /// converted is reported as [`Mismatch::UnsupportedKind`] at the root.
    ///
    /// # Errors
    ///
    /// Returns a [`Mismatch`] describing the first difference found.
    pub fn compare<A, B>(&self, a: &A, b: &B) -> Result<bool, Mismatch>
    where
        A: ?Sized + Serialize,
        B: ?Sized + Serialize,
    {
        let (left_name, right_name) = (type_name::<A>(), type_name::<B>());
        let dynamic = type_name::<Value>();
        let (left, right) = (to_value(a), to_value(b));

        if !self.same_static_type(left_name, right_name) {
            return self.report(Err(Mismatch::Type {
                path: KeyPath::new(),
                left: describe(&left),
                right: describe(&right),
                left_type: type_label(left_name, true, false),
                right_type: type_label(right_name, true, false),
            }));
        }

        match (left, right) {
            (Ok(left), Ok(right)) if left_name == dynamic && right_name == dynamic => {
                self.compare_values(&left, &right)
            }
            (Ok(left), Ok(right)) => {
                let mut walk = Traversal::new(&self.options);
                self.report(walk.operands(&left, &right))
            }
            (left, right) => self.report(Err(Mismatch::UnsupportedKind {
                path: KeyPath::new(),
                left: describe(&left),
                right: describe(&right),
            })),
        }
    }

    /// Compares two already converted values.
    ///
    /// # Errors
    ///
    /// Returns a [`Mismatch`] describing the first difference found.
    pub fn compare_values(&self, a: &Value, b: &Value) -> Result<bool, Mismatch> {
        let mut walk = Traversal::new(&self.options);
        self.report(walk.root(a, b))
    }

    fn same_static_type(&self, left: &str, right: &str) -> bool {
        left == right
            || (!self.options.strict_numeric_types
                && type_label(left, false, true) == type_label(right, false, true))
    }

    fn report(&self, result: Result<bool, Mismatch>) -> Result<bool, Mismatch> {
        if let Err(mismatch) = &result {
            debug!(
                kind = %mismatch.kind(),
                path = %mismatch.path(),
                "values are not equivalent"
            );
        }
        result
    }
}

fn describe(side: &crate::Result<Value>) -> String {
    match side {
        Ok(value) => value.to_string(),
        Err(err) => format!("<{}>", err),
    }
}

const NUMERIC_PRIMITIVES: &[&str] = &[
    "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64", "u128", "usize",
    "f32", "f64",
];

/// Rewrites a [`type_name`] for display or loose matching.
///
/// `strip_paths` drops module prefixes (`alloc::vec::Vec<i32>` becomes
/// `Vec<i32>`). `erase_widths` replaces every numeric primitive with `number`.
fn type_label(full: &str, strip_paths: bool, erase_widths: bool) -> String {
    let mut out = String::with_capacity(full.len());
    let mut ident = String::new();
    let mut chars = full.chars().peekable();
    let flush = |out: &mut String, ident: &mut String| {
        if erase_widths && NUMERIC_PRIMITIVES.contains(&ident.as_str()) {
            out.push_str("number");
        } else {
            out.push_str(ident);
        }
        ident.clear();
    };
    while let Some(c) = chars.next() {
        if c.is_alphanumeric() || c == '_' {
            ident.push(c);
        } else if c == ':' && strip_paths && chars.next_if_eq(&':').is_some() {
            ident.clear();
        } else {
            flush(&mut out, &mut ident);
            out.push(c);
        }
    }
    flush(&mut out, &mut ident);
    out
}

/// State of one top-level comparison. Created per call, so concurrent
/// comparisons never share a path.
struct Traversal<'a> {
    options: &'a CompareOptions,
    path: KeyPath,
}

impl<'a> Traversal<'a> {
    fn new(options: &'a CompareOptions) -> Self {
        Traversal {
            options,
            path: KeyPath::new(),
        }
    }

    /// Top level of a comparison whose operand types are only known from
    /// their contents.
    fn root(&mut self, a: &Value, b: &Value) -> Result<bool, Mismatch> {
        self.type_gate(a, b)?;
        self.operands(a, b)
    }

    /// Top level once the operand types are known to agree.
    fn operands(&mut self, a: &Value, b: &Value) -> Result<bool, Mismatch> {
        match (a, b) {
            (Value::Seq(x), Value::Seq(y)) => self.sequences(x, y).map(|()| true),
            (Value::Map(x), Value::Map(y)) => self.mappings(x, y).map(|()| true),
            _ if a.kind().is_scalar() => Ok(self.scalar_eq(a, b)),
            _ => Err(self.unsupported(a, b)),
        }
    }

    fn type_gate(&self, a: &Value, b: &Value) -> Result<(), Mismatch> {
        let (left, right) = (a.value_type(), b.value_type());
        let comparable = if self.options.strict_numeric_types {
            left.is_compatible(&right)
        } else {
            left.is_loosely_compatible(&right)
        };
        if comparable {
            Ok(())
        } else {
            Err(self.type_mismatch(a, b, &left, &right))
        }
    }

    fn sequences(&mut self, x: &[Value], y: &[Value]) -> Result<(), Mismatch> {
        if x.len() != y.len() {
            return Err(self.length(x.len(), y.len()));
        }
        for (index, (left, right)) in x.iter().zip(y).enumerate() {
            if self.options.recurse_sequences {
                if let Some(mismatch) = self.child(Segment::Index(index), left, right)? {
                    return Err(mismatch);
                }
            } else if !self.scalar_eq(left, right) {
                return Err(Mismatch::Value {
                    path: self.path.with_index(index),
                    left: left.to_string(),
                    right: right.to_string(),
                });
            }
        }
        Ok(())
    }

    fn mappings(&mut self, x: &ValueMap, y: &ValueMap) -> Result<(), Mismatch> {
        if x.len() != y.len() {
            return Err(self.length(x.len(), y.len()));
        }
        let mut pending = None;
        for (key, left) in x {
            let Some(right) = y.get(key) else {
                return Err(Mismatch::Type {
                    path: self.path.with_key(key),
                    left: left.to_string(),
                    right: MISSING.to_string(),
                    left_type: left.value_type().to_string(),
                    right_type: MISSING.to_string(),
                });
            };
            let differs = self.child(Segment::Key(key.clone()), left, right)?;
            if pending.is_none() {
                pending = differs;
            }
        }
        pending.map_or(Ok(()), Err)
    }

    /// Compares one entry or element with its segment pushed onto the path.
    ///
    /// Scalar differences come back as `Ok(Some(..))` so that mappings can
    /// finish their kind checks before reporting them.
    fn child(
        &mut self,
        segment: Segment,
        left: &Value,
        right: &Value,
    ) -> Result<Option<Mismatch>, Mismatch> {
        self.path.push(segment);
        let outcome = self.child_at_path(left, right);
        self.path.pop();
        outcome
    }

    fn child_at_path(&mut self, left: &Value, right: &Value) -> Result<Option<Mismatch>, Mismatch> {
        let kind = left.kind();
        if !self.same_kind(kind, right.kind()) {
            return Err(self.type_mismatch(left, right, &left.value_type(), &right.value_type()));
        }
        match (left, right) {
            (Value::Map(x), Value::Map(y)) => {
                trace!(depth = self.path.depth(), path = %self.path, "descending into mapping");
                self.mappings(x, y).map(|()| None)
            }
            (Value::Seq(x), Value::Seq(y)) if self.options.recurse_sequences => {
                trace!(depth = self.path.depth(), path = %self.path, "descending into sequence");
                self.sequences(x, y).map(|()| None)
            }
            _ if kind.is_scalar() => Ok((!self.scalar_eq(left, right)).then(|| Mismatch::Value {
                path: self.path.clone(),
                left: left.to_string(),
                right: right.to_string(),
            })),
            _ => Err(self.unsupported(left, right)),
        }
    }

    fn same_kind(&self, left: Kind, right: Kind) -> bool {
        let numeric = |k: Kind| matches!(k, Kind::Int | Kind::Uint | Kind::Float | Kind::Complex);
        left == right || (!self.options.strict_numeric_types && numeric(left) && numeric(right))
    }

    fn scalar_eq(&self, a: &Value, b: &Value) -> bool {
        if self.options.strict_numeric_types {
            a == b
        } else {
            a.numeric_eq(b)
        }
    }

    fn type_mismatch(
        &self,
        a: &Value,
        b: &Value,
        left: &ValueType,
        right: &ValueType,
    ) -> Mismatch {
        Mismatch::Type {
            path: self.path.clone(),
            left: a.to_string(),
            right: b.to_string(),
            left_type: left.to_string(),
            right_type: right.to_string(),
        }
    }

    fn length(&self, left: usize, right: usize) -> Mismatch {
        Mismatch::Length {
            path: self.path.clone(),
            left,
            right,
        }
    }

    fn unsupported(&self, a: &Value, b: &Value) -> Mismatch {
        Mismatch::UnsupportedKind {
            path: self.path.clone(),
            left: a.to_string(),
            right: b.to_string(),
        }
    }
}

/// Compares two serializable values with the default options.
///
/// # Examples
///
/// ```rust
/// use strproc::compare;
/// use std::collections::BTreeMap;
///
/// let mut a = BTreeMap::new();
/// a.insert("k", vec![1, 2]);
/// let b = a.clone();
/// assert_eq!(compare(&a, &b).unwrap_err().path().to_string(), "[k]");
/// assert_eq!(compare(&vec![1, 2], &vec![1, 2]), Ok(true));
/// ```
///
/// # Errors
///
/// Returns a [`Mismatch`] describing the first difference found.
pub fn compare<A, B>(a: &A, b: &B) -> Result<bool, Mismatch>
where
    A: ?Sized + Serialize,
    B: ?Sized + Serialize,
{
    Comparator::default().compare(a, b)
}

/// Compares two [`Value`]s with the default options.
///
/// # Errors
///
/// Returns a [`Mismatch`] describing the first difference found.
pub fn compare_values(a: &Value, b: &Value) -> Result<bool, Mismatch> {
    Comparator::default().compare_values(a, b)
}
