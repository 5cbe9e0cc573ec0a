use strproc::{
    assert_equivalent, assert_greater_than, assert_greater_than_equal_to, assert_less_than,
    assert_less_than_equal_to, assert_not_equivalent, value, Number, Value, ValueMap,
};

#[test]
fn test_value_macro_null() {
    let value = value!(null);
    assert_eq!(value, Value::Null);
    assert!(value.is_null());
}

#[test]
fn test_value_macro_booleans() {
    assert_eq!(value!(true), Value::Bool(true));
    assert_eq!(value!(false), Value::Bool(false));
}

#[test]
fn test_value_macro_numbers_keep_width() {
    assert_eq!(value!(42), Value::Number(Number::I32(42)));
    assert_eq!(value!(42i64), Value::Number(Number::I64(42)));
    assert_eq!(value!(7u8), Value::Number(Number::U8(7)));
    assert_eq!(value!(3.5), Value::Number(Number::F64(3.5)));
    assert_eq!(value!(-123), Value::Number(Number::I32(-123)));
}

#[test]
fn test_value_macro_strings() {
    assert_eq!(value!("hello world"), Value::String("hello world".to_string()));
    assert_eq!(value!(""), Value::String(String::new()));
}

#[test]
fn test_value_macro_sequences() {
    assert_eq!(value!([]), Value::Seq(vec![]));

    let numbers = value!([1, 2, 3]);
    assert_eq!(numbers.value_type().to_string(), "[]i32");
    assert_eq!(numbers.container_len(), Some(3));

    let mixed = value!([1, "hello", true, null]);
    assert_eq!(
        mixed,
        Value::Seq(vec![
            Value::Number(Number::I32(1)),
            Value::String("hello".to_string()),
            Value::Bool(true),
            Value::Null,
        ])
    );
    assert_eq!(mixed.value_type().to_string(), "[]any");
}

#[test]
fn test_value_macro_mappings() {
    assert_eq!(value!({}), Value::Map(ValueMap::new()));

    let user = value!({
        "user": {
            "id": 123u32,
            "name": "Bob"
        },
        "tags": ["admin", "developer"],
        "count": 42
    });

    let map = user.as_map().unwrap();
    assert_eq!(map.len(), 3);
    assert_eq!(
        map.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["user", "tags", "count"]
    );

    let inner = map.get("user").and_then(Value::as_map).unwrap();
    assert_eq!(inner.get("id"), Some(&Value::Number(Number::U32(123))));
    assert_eq!(inner.get("name").and_then(Value::as_str), Some("Bob"));

    let tags = map.get("tags").and_then(Value::as_seq).unwrap();
    assert_eq!(tags[1], Value::from("developer"));
}

#[test]
fn test_value_macro_expressions() {
    let name = String::from("Ada");
    let scores = vec![90u16, 85];
    let value = value!({ "name": name, "scores": scores });

    let map = value.as_map().unwrap();
    assert_eq!(map.get("name"), Some(&Value::from("Ada")));
    assert_eq!(map.get("scores").unwrap().value_type().to_string(), "[]u16");
}

#[test]
fn test_value_display() {
    assert_eq!(value!([1, 2, 3]).to_string(), "[1 2 3]");
    assert_eq!(value!({ "k": "v" }).to_string(), "map[k:v]");
    assert_eq!(value!(null).to_string(), "<nil>");
}

#[test]
fn test_assert_equivalent_accepts_equal_values() {
    assert_equivalent!(vec![1, 2, 3], vec![1, 2, 3]);
    assert_equivalent!(value!({ "a": { "b": 1 } }), value!({ "a": { "b": 1 } }));
    assert_equivalent!(String::from("text"), "text".to_string(), "strings differ for {}", "text");
}

#[test]
fn test_assert_not_equivalent() {
    assert_not_equivalent!(1u8, 1u16);
    assert_not_equivalent!(vec![1, 2], vec![1, 2, 3]);
    assert_not_equivalent!(value!({ "a": 1 }), value!({ "a": 2 }));
}

#[test]
#[should_panic(expected = "length mismatch")]
fn test_assert_equivalent_reports_length() {
    assert_equivalent!(vec![1, 2, 3], vec![1, 2]);
}

#[test]
#[should_panic(expected = "macro_tests.rs")]
fn test_assert_equivalent_reports_call_site() {
    assert_equivalent!(1, 2);
}

#[test]
#[should_panic(expected = "values are equivalent")]
fn test_assert_not_equivalent_panics_on_equal() {
    assert_not_equivalent!("same", "same");
}

#[test]
#[should_panic(expected = "type mismatch")]
fn test_assert_equivalent_rejects_str_against_string() {
    assert_equivalent!("text", String::from("text"));
}

#[test]
fn test_ordering_macros_mix_widths() {
    assert_less_than!(1i8, 2u64);
    assert_less_than!(-1i64, 0u8);
    assert_less_than!(1u32, 1.5f64);
    assert_less_than_equal_to!(7u16, 7i32);
    assert_less_than_equal_to!(0.25f32, 0.5f64);
    assert_greater_than!(u64::MAX, i64::MAX);
    assert_greater_than!(2.5f32, 2usize);
    assert_greater_than_equal_to!(3isize, 3u8);
    assert_greater_than_equal_to!(10i16, -10i16);
}

#[test]
#[should_panic(expected = "expected left < right")]
fn test_assert_less_than_fails_on_equal() {
    assert_less_than!(5u8, 5i64);
}

#[test]
#[should_panic(expected = "expected left <= right")]
fn test_assert_less_than_equal_to_fails() {
    assert_less_than_equal_to!(6, 5);
}

#[test]
#[should_panic(expected = "expected left > right")]
fn test_assert_greater_than_fails() {
    assert_greater_than!(-3i32, 0u64);
}

#[test]
#[should_panic(expected = "expected left >= right")]
fn test_assert_greater_than_equal_to_fails() {
    assert_greater_than_equal_to!(1.0f32, 1.5f64);
}

#[test]
#[should_panic(expected = "not comparable numbers")]
fn test_ordering_rejects_non_numbers() {
    assert_less_than!("1", 2);
}

#[test]
#[should_panic(expected = "not comparable numbers")]
fn test_ordering_rejects_nan() {
    assert_greater_than_equal_to!(f64::NAN, 0.0);
}

#[test]
#[should_panic(expected = "macro_tests.rs")]
fn test_ordering_reports_call_site() {
    assert_greater_than!(1, 2);
}
