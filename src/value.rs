//! Dynamic value representation used by the comparator and the formatters.
//!
//! This module provides the [`Value`] enum, a self-describing tree that keeps the
//! exact concrete type of every scalar. An `i32` and an `i64` holding the same
//! number are different values here, which is what lets the comparator refuse
//! to compare them.
//!
//! ## Core Types
//!
//! - [`Value`]: null, bool, number, string, sequence, mapping or record
//! - [`Number`]: a number tagged with its width (`I8` .. `C128`)
//! - [`Kind`]: the broad category used for dispatch
//! - [`ValueType`]: the concrete type inferred from contents, used to gate
//!   [`compare_values`](crate::compare_values)
//!
//! ## Creating Values
//!
//! ```rust
//! use strproc::{to_value, value, Value, Kind};
//!
//! let n = Value::from(42i32);
//! assert_eq!(n.kind(), Kind::Int);
//! assert_eq!(n.value_type().to_string(), "i32");
//!
//! let obj = value!({ "name": "Alice", "tags": ["a", "b"] });
//! assert_eq!(obj.value_type().to_string(), "map[string]any");
//!
//! let seq = to_value(&vec![1u8, 2, 3]).unwrap();
//! assert_eq!(seq.value_type().to_string(), "[]u8");
//! ```

use crate::ValueMap;
use num_complex::{Complex32, Complex64};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// A dynamically-typed value that remembers its concrete type.
///
/// # Examples
///
/// ```rust
/// use strproc::{Number, Value};
///
/// let num = Value::Number(Number::I64(42));
/// let text = Value::from("hello");
///
/// assert!(num.is_number());
/// assert!(text.is_string());
/// assert_ne!(Value::from(5i32), Value::from(5i64));
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Seq(Vec<Value>),
    Map(ValueMap),
    Record(Record),
}

/// A number tagged with its concrete width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
    F32(f32),
    F64(f64),
    C64(Complex32),
    C128(Complex64),
}

/// A user-defined structure or enum variant.
///
/// Records are carried through so they can be reported, but the comparator
/// does not look inside them.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub name: String,
    pub fields: ValueMap,
}

/// Broad category of a value.
///
/// Every value maps to exactly one kind. `Null` and records are
/// [`Kind::Unsupported`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    String,
    Int,
    Uint,
    Float,
    Complex,
    Bool,
    Seq,
    Map,
    Unsupported,
}

impl Kind {
    /// Returns `true` for the kinds compared by plain equality.
    #[inline]
    #[must_use]
    pub const fn is_scalar(self) -> bool {
        matches!(
            self,
            Kind::String | Kind::Int | Kind::Uint | Kind::Float | Kind::Complex | Kind::Bool
        )
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Kind::String => "string",
            Kind::Int => "int",
            Kind::Uint => "uint",
            Kind::Float => "float",
            Kind::Complex => "complex",
            Kind::Bool => "bool",
            Kind::Seq => "sequence",
            Kind::Map => "mapping",
            Kind::Unsupported => "unsupported",
        })
    }
}

/// Concrete width of a [`Number`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumberType {
    I8,
    I16,
    I32,
    I64,
    Isize,
    U8,
    U16,
    U32,
    U64,
    Usize,
    F32,
    F64,
    C64,
    C128,
}

impl NumberType {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            NumberType::I8 => "i8",
            NumberType::I16 => "i16",
            NumberType::I32 => "i32",
            NumberType::I64 => "i64",
            NumberType::Isize => "isize",
            NumberType::U8 => "u8",
            NumberType::U16 => "u16",
            NumberType::U32 => "u32",
            NumberType::U64 => "u64",
            NumberType::Usize => "usize",
            NumberType::F32 => "f32",
            NumberType::F64 => "f64",
            NumberType::C64 => "complex64",
            NumberType::C128 => "complex128",
        }
    }
}

/// Concrete type of a value.
///
/// Container element types are inferred from the elements. An empty container
/// has an unknown element type (`None`) that is compatible with any element
/// type; elements of differing types widen to [`ValueType::Any`].
///
/// # Examples
///
/// ```rust
/// use strproc::{Value, ValueType};
///
/// let ints = Value::from(vec![1i32, 2]);
/// let empty = Value::Seq(vec![]);
/// let longs = Value::from(vec![1i64]);
///
/// assert!(ints.value_type().is_compatible(&empty.value_type()));
/// assert!(!ints.value_type().is_compatible(&longs.value_type()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueType {
    Nil,
    Bool,
    String,
    Number(NumberType),
    Seq(Option<Box<ValueType>>),
    Map(Option<Box<ValueType>>),
    Record(String),
    Any,
}

impl ValueType {
    /// Infers the concrete type of `value`.
    #[must_use]
    pub fn of(value: &Value) -> ValueType {
        match value {
            Value::Null => ValueType::Nil,
            Value::Bool(_) => ValueType::Bool,
            Value::String(_) => ValueType::String,
            Value::Number(n) => ValueType::Number(n.number_type()),
            Value::Seq(items) => ValueType::Seq(element_type(items.iter())),
            Value::Map(map) => ValueType::Map(element_type(map.values())),
            Value::Record(record) => ValueType::Record(record.name.clone()),
        }
    }

    /// Returns `true` if values of the two types may be compared.
    #[must_use]
    pub fn is_compatible(&self, other: &ValueType) -> bool {
        self.merge(other, true).is_some()
    }

    /// Like [`is_compatible`](Self::is_compatible), but any two numeric types
    /// are compatible regardless of width.
    #[must_use]
    pub fn is_loosely_compatible(&self, other: &ValueType) -> bool {
        self.merge(other, false).is_some()
    }

    fn merge(&self, other: &ValueType, strict_numbers: bool) -> Option<ValueType> {
        match (self, other) {
            (ValueType::Seq(a), ValueType::Seq(b)) => {
                merge_element(a, b, strict_numbers).map(ValueType::Seq)
            }
            (ValueType::Map(a), ValueType::Map(b)) => {
                merge_element(a, b, strict_numbers).map(ValueType::Map)
            }
            (ValueType::Number(_), ValueType::Number(_)) if !strict_numbers => Some(self.clone()),
            _ if self == other => Some(self.clone()),
            _ => None,
        }
    }
}

fn merge_element(
    a: &Option<Box<ValueType>>,
    b: &Option<Box<ValueType>>,
    strict_numbers: bool,
) -> Option<Option<Box<ValueType>>> {
    match (a, b) {
        (None, other) | (other, None) => Some(other.clone()),
        (Some(a), Some(b)) => a.merge(b, strict_numbers).map(|t| Some(Box::new(t))),
    }
}

fn element_type<'a>(values: impl Iterator<Item = &'a Value>) -> Option<Box<ValueType>> {
    let mut acc: Option<ValueType> = None;
    for value in values {
        let next = ValueType::of(value);
        acc = Some(match acc {
            None => next,
            Some(current) => current.merge(&next, true).unwrap_or(ValueType::Any),
        });
    }
    acc.map(Box::new)
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::Nil => f.write_str("nil"),
            ValueType::Bool => f.write_str("bool"),
            ValueType::String => f.write_str("string"),
            ValueType::Number(n) => f.write_str(n.name()),
            ValueType::Seq(Some(elem)) => write!(f, "[]{}", elem),
            ValueType::Seq(None) => f.write_str("[]_"),
            ValueType::Map(Some(elem)) => write!(f, "map[string]{}", elem),
            ValueType::Map(None) => f.write_str("map[string]_"),
            ValueType::Record(name) => f.write_str(name),
            ValueType::Any => f.write_str("any"),
        }
    }
}

impl Number {
    #[must_use]
    pub const fn number_type(&self) -> NumberType {
        match self {
            Number::I8(_) => NumberType::I8,
            Number::I16(_) => NumberType::I16,
            Number::I32(_) => NumberType::I32,
            Number::I64(_) => NumberType::I64,
            Number::Isize(_) => NumberType::Isize,
            Number::U8(_) => NumberType::U8,
            Number::U16(_) => NumberType::U16,
            Number::U32(_) => NumberType::U32,
            Number::U64(_) => NumberType::U64,
            Number::Usize(_) => NumberType::Usize,
            Number::F32(_) => NumberType::F32,
            Number::F64(_) => NumberType::F64,
            Number::C64(_) => NumberType::C64,
            Number::C128(_) => NumberType::C128,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Number::I8(_) | Number::I16(_) | Number::I32(_) | Number::I64(_) | Number::Isize(_) => {
                Kind::Int
            }
            Number::U8(_) | Number::U16(_) | Number::U32(_) | Number::U64(_) | Number::Usize(_) => {
                Kind::Uint
            }
            Number::F32(_) | Number::F64(_) => Kind::Float,
            Number::C64(_) | Number::C128(_) => Kind::Complex,
        }
    }

    /// Returns `true` for signed and unsigned integers.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self.kind(), Kind::Int | Kind::Uint)
    }

    /// Returns the value as an `i128` if it is an integer of any width.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strproc::Number;
    ///
    /// assert_eq!(Number::U64(u64::MAX).as_i128(), Some(u64::MAX as i128));
    /// assert_eq!(Number::F64(1.0).as_i128(), None);
    /// ```
    #[must_use]
    pub fn as_i128(&self) -> Option<i128> {
        match *self {
            Number::I8(v) => Some(v.into()),
            Number::I16(v) => Some(v.into()),
            Number::I32(v) => Some(v.into()),
            Number::I64(v) => Some(v.into()),
            Number::Isize(v) => Some(v as i128),
            Number::U8(v) => Some(v.into()),
            Number::U16(v) => Some(v.into()),
            Number::U32(v) => Some(v.into()),
            Number::U64(v) => Some(v.into()),
            Number::Usize(v) => Some(v as i128),
            _ => None,
        }
    }

    /// Returns the value as an `f64` unless it is complex.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Number::F32(v) => Some(v.into()),
            Number::F64(v) => Some(v),
            Number::C64(_) | Number::C128(_) => None,
            _ => self.as_i128().map(|i| i as f64),
        }
    }

    /// Returns the value on the complex plane.
    #[must_use]
    pub fn as_complex(&self) -> Complex64 {
        match *self {
            Number::C64(c) => Complex64::new(c.re.into(), c.im.into()),
            Number::C128(c) => c,
            _ => Complex64::new(self.as_f64().unwrap_or_default(), 0.0),
        }
    }

    /// Compares by numeric value, ignoring width.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strproc::Number;
    ///
    /// assert!(Number::I32(5).numeric_eq(&Number::U64(5)));
    /// assert!(Number::F32(0.5).numeric_eq(&Number::F64(0.5)));
    /// assert_ne!(Number::I32(5), Number::I64(5));
    /// ```
    #[must_use]
    pub fn numeric_eq(&self, other: &Number) -> bool {
        if let (Some(a), Some(b)) = (self.as_i128(), other.as_i128()) {
            return a == b;
        }
        match (self.kind(), other.kind()) {
            (Kind::Complex, _) | (_, Kind::Complex) => self.as_complex() == other.as_complex(),
            _ => self.as_f64() == other.as_f64(),
        }
    }

    /// Orders two numbers by value, ignoring width.
    ///
    /// Integers of any width compare exactly; otherwise both sides are
    /// widened to `f64`. Returns `None` for complex numbers and NaN.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::cmp::Ordering;
    /// use strproc::Number;
    ///
    /// assert_eq!(Number::I8(-1).numeric_cmp(&Number::U64(u64::MAX)), Some(Ordering::Less));
    /// assert_eq!(Number::F32(2.5).numeric_cmp(&Number::U8(2)), Some(Ordering::Greater));
    /// assert_eq!(Number::F64(f64::NAN).numeric_cmp(&Number::I32(0)), None);
    /// ```
    #[must_use]
    pub fn numeric_cmp(&self, other: &Number) -> Option<Ordering> {
        if let (Some(a), Some(b)) = (self.as_i128(), other.as_i128()) {
            return Some(a.cmp(&b));
        }
        self.as_f64()?.partial_cmp(&other.as_f64()?)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::I8(v) => write!(f, "{}", v),
            Number::I16(v) => write!(f, "{}", v),
            Number::I32(v) => write!(f, "{}", v),
            Number::I64(v) => write!(f, "{}", v),
            Number::Isize(v) => write!(f, "{}", v),
            Number::U8(v) => write!(f, "{}", v),
            Number::U16(v) => write!(f, "{}", v),
            Number::U32(v) => write!(f, "{}", v),
            Number::U64(v) => write!(f, "{}", v),
            Number::Usize(v) => write!(f, "{}", v),
            Number::F32(v) => write!(f, "{}", v),
            Number::F64(v) => write!(f, "{}", v),
            Number::C64(c) => write_complex(f, c.re.into(), c.im.into()),
            Number::C128(c) => write_complex(f, c.re, c.im),
        }
    }
}

fn write_complex(f: &mut fmt::Formatter<'_>, re: f64, im: f64) -> fmt::Result {
    if im.is_sign_negative() {
        write!(f, "({}{}i)", re, im)
    } else {
        write!(f, "({}+{}i)", re, im)
    }
}

impl Value {
    /// Returns the broad category of this value.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Value::Bool(_) => Kind::Bool,
            Value::Number(n) => n.kind(),
            Value::String(_) => Kind::String,
            Value::Seq(_) => Kind::Seq,
            Value::Map(_) => Kind::Map,
            Value::Null | Value::Record(_) => Kind::Unsupported,
        }
    }

    /// Returns the concrete type of this value. See [`ValueType::of`].
    #[must_use]
    pub fn value_type(&self) -> ValueType {
        ValueType::of(self)
    }

    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_seq(&self) -> bool {
        matches!(self, Value::Seq(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_record(&self) -> bool {
        matches!(self, Value::Record(_))
    }

    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    /// If the value is an integer of any width that fits in `i64`, returns it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strproc::Value;
    ///
    /// assert_eq!(Value::from(42u8).as_i64(), Some(42));
    /// assert_eq!(Value::from(u64::MAX).as_i64(), None);
    /// assert_eq!(Value::from(4.0).as_i64(), None);
    /// ```
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        self.as_number()
            .and_then(Number::as_i128)
            .and_then(|i| i64::try_from(i).ok())
    }

    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        self.as_number().and_then(Number::as_f64)
    }

    #[inline]
    #[must_use]
    pub fn as_seq(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Seq(items) => Some(items),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_map(&self) -> Option<&ValueMap> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Number of elements of a sequence or entries of a mapping.
    #[must_use]
    pub fn container_len(&self) -> Option<usize> {
        match self {
            Value::Seq(items) => Some(items.len()),
            Value::Map(map) => Some(map.len()),
            _ => None,
        }
    }

    /// Orders two numeric values by value. `None` unless both are real numbers.
    #[must_use]
    pub fn numeric_cmp(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a.numeric_cmp(b),
            _ => None,
        }
    }

    /// Structural equality where numbers compare by value regardless of width.
    #[must_use]
    pub fn numeric_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a.numeric_eq(b),
            (Value::Seq(a), Value::Seq(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.numeric_eq(y))
            }
            (Value::Map(a), Value::Map(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .all(|(k, x)| b.get(k).is_some_and(|y| x.numeric_eq(y)))
            }
            (Value::Record(a), Value::Record(b)) => {
                a.name == b.name
                    && a.fields.len() == b.fields.len()
                    && a.fields
                        .iter()
                        .all(|(k, x)| b.fields.get(k).is_some_and(|y| x.numeric_eq(y)))
            }
            _ => self == other,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("<nil>"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => f.write_str(s),
            Value::Seq(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Value::Map(map) => {
                f.write_str("map[")?;
                write_entries(f, map)?;
                f.write_str("]")
            }
            Value::Record(record) => {
                write!(f, "{}{{", record.name)?;
                write_entries(f, &record.fields)?;
                f.write_str("}")
            }
        }
    }
}

fn write_entries(f: &mut fmt::Formatter<'_>, map: &ValueMap) -> fmt::Result {
    for (i, (key, value)) in map.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{}:{}", key, value)?;
    }
    Ok(())
}

impl Serialize for Number {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match *self {
            Number::I8(v) => serializer.serialize_i8(v),
            Number::I16(v) => serializer.serialize_i16(v),
            Number::I32(v) => serializer.serialize_i32(v),
            Number::I64(v) => serializer.serialize_i64(v),
            Number::Isize(v) => serializer.serialize_i64(v as i64),
            Number::U8(v) => serializer.serialize_u8(v),
            Number::U16(v) => serializer.serialize_u16(v),
            Number::U32(v) => serializer.serialize_u32(v),
            Number::U64(v) => serializer.serialize_u64(v),
            Number::Usize(v) => serializer.serialize_u64(v as u64),
            Number::F32(v) => serializer.serialize_f32(v),
            Number::F64(v) => serializer.serialize_f64(v),
            Number::C64(c) => (c.re, c.im).serialize(serializer),
            Number::C128(c) => (c.re, c.im).serialize(serializer),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::{SerializeMap, SerializeSeq};

        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => n.serialize(serializer),
            Value::String(s) => serializer.serialize_str(s),
            Value::Seq(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Map(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (k, v) in map {
                    out.serialize_entry(k, v)?;
                }
                out.end()
            }
            Value::Record(record) => {
                let mut out = serializer.serialize_map(Some(record.fields.len()))?;
                for (k, v) in &record.fields {
                    out.serialize_entry(k, v)?;
                }
                out.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any self-describing value")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Value, E> {
                Ok(Value::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Value, E> {
                Ok(Value::Number(Number::I64(value)))
            }

            // Self-describing formats do not keep widths: every integer that
            // fits becomes `i64` so that `1` and `-1` share a type.
            fn visit_u64<E>(self, value: u64) -> Result<Value, E> {
                match i64::try_from(value) {
                    Ok(v) => Ok(Value::Number(Number::I64(v))),
                    Err(_) => Ok(Value::Number(Number::U64(value))),
                }
            }

            fn visit_f64<E>(self, value: f64) -> Result<Value, E> {
                Ok(Value::Number(Number::F64(value)))
            }

            fn visit_str<E>(self, value: &str) -> Result<Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Value, E> {
                Ok(Value::String(value))
            }

            fn visit_unit<E>(self) -> Result<Value, E> {
                Ok(Value::Null)
            }

            fn visit_none<E>(self) -> Result<Value, E> {
                Ok(Value::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(item) = seq.next_element()? {
                    items.push(item);
                }
                Ok(Value::Seq(items))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut values = ValueMap::new();
                while let Some((key, value)) = map.next_entry()? {
                    values.insert(key, value);
                }
                Ok(Value::Map(values))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

impl TryFrom<Value> for i64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        value
            .as_i64()
            .ok_or_else(|| crate::Error::custom(format!("expected integer, found {:?}", value)))
    }
}

impl TryFrom<Value> for f64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        value
            .as_f64()
            .ok_or_else(|| crate::Error::custom(format!("expected number, found {:?}", value)))
    }
}

impl TryFrom<Value> for bool {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Bool(b) => Ok(b),
            _ => Err(crate::Error::custom(format!(
                "expected bool, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            _ => Err(crate::Error::custom(format!(
                "expected string, found {:?}",
                value
            ))),
        }
    }
}

macro_rules! impl_from_number {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    Number::$variant(value)
                }
            }

            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Number(Number::$variant(value))
                }
            }
        )*
    };
}

impl_from_number! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    Complex32 => C64,
    Complex64 => C128,
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::Seq(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl From<ValueMap> for Value {
    fn from(value: ValueMap) -> Self {
        Value::Map(value)
    }
}

impl From<Record> for Value {
    fn from(value: Record) -> Self {
        Value::Record(value)
    }
}
