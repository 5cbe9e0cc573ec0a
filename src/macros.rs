use crate::to_value;
use serde::Serialize;
use std::cmp::Ordering;

/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// Scalars go through [`to_value`](crate::to_value), so an unsuffixed integer
/// literal is an `i32` and an unsuffixed float is an `f64`. Negative numbers
/// must be parenthesized inside arrays and objects: `value!([(-1), 2])`.
///
/// An expression that [`to_value`](crate::to_value) rejects, such as an
/// `i128`, becomes [`Value::Null`](crate::Value::Null). Call `to_value`
/// directly when the error matters.
///
/// # Examples
///
/// ```rust
/// use strproc::{value, Value};
///
/// let v = value!({ "name": "Alice", "scores": [1u8, 2u8], "ok": true });
/// assert_eq!(v.value_type().to_string(), "map[string]any");
/// assert_eq!(value!(null), Value::Null);
/// ```
#[macro_export]
macro_rules! value {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Seq(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Seq(vec![$($crate::value!($elem)),*])
    };

    ({}) => {
        $crate::Value::Map($crate::ValueMap::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut map = $crate::ValueMap::new();
        $(
            map.insert($key.to_string(), $crate::value!($value));
        )*
        $crate::Value::Map(map)
    }};

    ($other:expr) => {
        $crate::to_value(&$other).unwrap_or($crate::Value::Null)
    };
}

/// Asserts that two values are equivalent under [`compare`](crate::compare).
///
/// On failure the panic message names the calling file and line, the mismatch
/// (when there is one) and both values.
///
/// # Examples
///
/// ```rust
/// use strproc::assert_equivalent;
///
/// assert_equivalent!(vec![1, 2, 3], vec![1, 2, 3]);
/// ```
///
/// ```should_panic
/// use strproc::assert_equivalent;
///
/// assert_equivalent!(vec![1, 2, 3], vec![1, 2, 4]);
/// ```
#[macro_export]
macro_rules! assert_equivalent {
    ($left:expr, $right:expr $(,)?) => {
        $crate::assert_equivalent!($left, $right, "values are not equivalent")
    };
    ($left:expr, $right:expr, $($arg:tt)+) => {
        match (&$left, &$right) {
            (left, right) => match $crate::compare(left, right) {
                Ok(true) => {}
                Ok(false) => panic!(
                    "{}:{}: {}\n  left: {:?}\n right: {:?}",
                    file!(),
                    line!(),
                    format_args!($($arg)+),
                    left,
                    right
                ),
                Err(mismatch) => panic!(
                    "{}:{}: {}: {}\n  left: {:?}\n right: {:?}",
                    file!(),
                    line!(),
                    format_args!($($arg)+),
                    mismatch,
                    left,
                    right
                ),
            },
        }
    };
}

/// Asserts that two values are *not* equivalent under [`compare`](crate::compare).
///
/// # Examples
///
/// ```rust
/// use strproc::assert_not_equivalent;
///
/// assert_not_equivalent!(5i32, 5i64);
/// assert_not_equivalent!("a", "b");
/// ```
#[macro_export]
macro_rules! assert_not_equivalent {
    ($left:expr, $right:expr $(,)?) => {
        match (&$left, &$right) {
            (left, right) => {
                if let Ok(true) = $crate::compare(left, right) {
                    panic!(
                        "{}:{}: values are equivalent\n  left: {:?}\n right: {:?}",
                        file!(),
                        line!(),
                        left,
                        right
                    );
                }
            }
        }
    };
}

/// Orders two serializable numbers by value, whatever their widths.
///
/// Used by the ordering assertions. Returns `None` when either side is not
/// a real number (strings, booleans, containers, complex numbers, NaN).
#[doc(hidden)]
pub fn numeric_order<A, B>(a: &A, b: &B) -> Option<Ordering>
where
    A: ?Sized + Serialize,
    B: ?Sized + Serialize,
{
    let (a, b) = (to_value(a).ok()?, to_value(b).ok()?);
    a.numeric_cmp(&b)
}

#[doc(hidden)]
#[macro_export]
macro_rules! __assert_ordered {
    ($left:expr, $right:expr, $op:literal, $accept:pat) => {
        match (&$left, &$right) {
            (left, right) => match $crate::macros::numeric_order(left, right) {
                Some($accept) => {}
                Some(_) => panic!(
                    "{}:{}: expected left {} right\n  left: {:?}\n right: {:?}",
                    file!(),
                    line!(),
                    $op,
                    left,
                    right
                ),
                None => panic!(
                    "{}:{}: values are not comparable numbers\n  left: {:?}\n right: {:?}",
                    file!(),
                    line!(),
                    left,
                    right
                ),
            },
        }
    };
}

/// Asserts that `left < right`, comparing numbers of any width by value.
///
/// Panics with the calling file and line and both values when the ordering
/// does not hold or when either side is not a real number.
///
/// # Examples
///
/// ```rust
/// use strproc::assert_less_than;
///
/// assert_less_than!(3u8, 1000i64);
/// assert_less_than!(-1i32, 0.5f32);
/// ```
///
/// ```should_panic
/// use strproc::assert_less_than;
///
/// assert_less_than!(2, "3");
/// ```
#[macro_export]
macro_rules! assert_less_than {
    ($left:expr, $right:expr $(,)?) => {
        $crate::__assert_ordered!($left, $right, "<", ::std::cmp::Ordering::Less)
    };
}

/// Asserts that `left <= right`. See [`assert_less_than!`].
#[macro_export]
macro_rules! assert_less_than_equal_to {
    ($left:expr, $right:expr $(,)?) => {
        $crate::__assert_ordered!(
            $left,
            $right,
            "<=",
            ::std::cmp::Ordering::Less | ::std::cmp::Ordering::Equal
        )
    };
}

/// Asserts that `left > right`. See [`assert_less_than!`].
#[macro_export]
macro_rules! assert_greater_than {
    ($left:expr, $right:expr $(,)?) => {
        $crate::__assert_ordered!($left, $right, ">", ::std::cmp::Ordering::Greater)
    };
}

/// Asserts that `left >= right`. See [`assert_less_than!`].
#[macro_export]
macro_rules! assert_greater_than_equal_to {
    ($left:expr, $right:expr $(,)?) => {
        $crate::__assert_ordered!(
            $left,
            $right,
            ">=",
            ::std::cmp::Ordering::Greater | ::std::cmp::Ordering::Equal
        )
    };
}
