//! Property-based tests for the comparator and the string transforms.

use proptest::prelude::*;
use std::collections::BTreeMap;
use strproc::{
    add_slashes, compare, padding, reverse_str, strip_slashes, word_wrap_simple, Comparator,
    CompareOptions, MismatchKind, PadSide,
};

proptest! {
    // Reflexivity
    #[test]
    fn prop_i64_equivalent_to_itself(n in any::<i64>()) {
        prop_assert_eq!(compare(&n, &n), Ok(true));
    }

    #[test]
    fn prop_string_equivalent_to_itself(s in ".*") {
        prop_assert_eq!(compare(&s, &s), Ok(true));
    }

    #[test]
    fn prop_vec_equivalent_to_itself(v in prop::collection::vec(any::<i32>(), 0..20)) {
        prop_assert_eq!(compare(&v, &v), Ok(true));
    }

    #[test]
    fn prop_nested_map_equivalent_to_itself(
        m in prop::collection::btree_map(
            "[a-z]{1,6}",
            prop::collection::btree_map("[a-z]{1,6}", any::<u16>(), 0..5),
            0..5,
        )
    ) {
        prop_assert_eq!(compare(&m, &m), Ok(true));
    }

    // Idempotence
    #[test]
    fn prop_comparison_is_idempotent(
        a in prop::collection::btree_map("[a-c]", any::<u8>(), 0..4),
        b in prop::collection::btree_map("[a-c]", any::<u8>(), 0..4),
    ) {
        prop_assert_eq!(compare(&a, &b), compare(&a, &b));
    }

    // Length gate symmetry
    #[test]
    fn prop_length_gate_is_symmetric(
        a in prop::collection::vec(any::<i32>(), 1..10),
        b in prop::collection::vec(any::<i32>(), 1..10),
    ) {
        prop_assume!(a.len() != b.len());
        let forward = compare(&a, &b).unwrap_err();
        let backward = compare(&b, &a).unwrap_err();
        prop_assert_eq!(forward.kind(), MismatchKind::LengthMismatch);
        prop_assert_eq!(backward.kind(), MismatchKind::LengthMismatch);
        let (l, r) = forward.sides();
        prop_assert_eq!(backward.sides(), (r, l));
    }

    // Width strictness
    #[test]
    fn prop_widths_never_mix(n in any::<i32>()) {
        let err = compare(&n, &i64::from(n)).unwrap_err();
        prop_assert_eq!(err.kind(), MismatchKind::TypeMismatch);

        let loose = Comparator::new(CompareOptions::new().with_strict_numeric_types(false));
        prop_assert_eq!(loose.compare(&n, &i64::from(n)), Ok(true));
    }

    #[test]
    fn prop_single_changed_entry_is_located(
        m in prop::collection::btree_map("[a-z]{1,4}", any::<i32>(), 1..8),
        pick in any::<prop::sample::Index>(),
    ) {
        let key = pick.get(&m.keys().collect::<Vec<_>>()).to_string();
        let mut changed: BTreeMap<String, i32> = m.clone();
        let entry = changed.get_mut(&key).unwrap();
        *entry = entry.wrapping_add(1);

        let err = compare(&m, &changed).unwrap_err();
        prop_assert_eq!(err.kind(), MismatchKind::ValueMismatch);
        prop_assert_eq!(err.path().to_string(), format!("[{}]", key));
    }

    // Transforms
    #[test]
    fn prop_strip_undoes_add_without_doubles(s in "[a-z\\\\]{0,20}") {
        prop_assume!(!s.contains("\\\\"));
        prop_assert_eq!(strip_slashes(&add_slashes(&s)), s);
    }

    #[test]
    fn prop_reverse_twice_is_identity(s in "\\PC*") {
        prop_assert_eq!(reverse_str(&reverse_str(&s)), s);
    }

    #[test]
    fn prop_padding_reaches_target(s in "[a-z]{0,10}", max in 0usize..30) {
        for side in [PadSide::Left, PadSide::Right, PadSide::Both] {
            let padded = padding(&s, "*", side, max);
            prop_assert_eq!(padded.len(), s.len().max(max));
            prop_assert!(padded.contains(&s));
        }
    }

    #[test]
    fn prop_wrap_without_spaces_is_identity(s in "[a-z]{0,40}", width in 1usize..10) {
        prop_assert_eq!(word_wrap_simple(&s, width, "\n").unwrap(), s);
    }
}
