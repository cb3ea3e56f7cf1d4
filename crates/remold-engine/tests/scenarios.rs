//! End-to-end scenarios for the reshaping engine.

use remold_core::{ArrayValue, RangeDescent, ReshapeError, ScalarType, Value};
use remold_engine::{deep_reshape, deep_reshape_with, describe, pack, reshape};
use remold_spec::{Spec, SpecExpr};
use smallvec::smallvec;

fn int_array(dims: &[usize], values: &[i64]) -> Value {
    Value::Array(ArrayValue::from_ints(dims.iter().copied().collect(), values).unwrap())
}

#[test]
fn reshape_3x2_to_2x3_follows_column_major_convention() {
    // 3x2 with columns [1,3,5] and [2,4,6]; flat order 1,3,5,2,4,6.
    let source = int_array(&[3, 2], &[1, 3, 5, 2, 4, 6]);
    let result = deep_reshape(&source, &SpecExpr::dims([2, 3])).unwrap();
    let array = result.as_array().unwrap();
    assert_eq!(array.dims(), &[2, 3]);

    // Read back row-wise: [[1, 5, 4], [3, 2, 6]].
    let rows: Vec<Vec<&Value>> = (0..2)
        .map(|i| (0..3).map(|j| array.get(&[i, j]).unwrap()).collect())
        .collect();
    assert_eq!(
        rows[0],
        vec![&Value::int(1), &Value::int(5), &Value::int(4)]
    );
    assert_eq!(
        rows[1],
        vec![&Value::int(3), &Value::int(2), &Value::int(6)]
    );
}

#[test]
fn reshape_two_concatenated_arrays_into_one() {
    let source = Value::tuple(vec![
        int_array(&[3, 2], &[1, 3, 5, 2, 4, 6]),
        int_array(&[3, 2], &[7, 9, 11, 8, 10, 12]),
    ]);
    let result = deep_reshape(&source, &SpecExpr::dims([4, 3])).unwrap();
    let array = result.as_array().unwrap();
    assert_eq!(array.dims(), &[4, 3]);
    assert_eq!(array.get(&[0, 0]), Some(&Value::int(1)));
    assert_eq!(array.get(&[3, 2]), Some(&Value::int(12)));
}

#[test]
fn describe_pair_of_int_arrays() {
    let value = Value::tuple(vec![
        int_array(&[10], &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]),
        int_array(&[2, 2], &[1, 2, 3, 4]),
    ]);
    assert_eq!(
        describe(&value),
        Spec::Tuple(vec![
            Spec::TypedArray(ScalarType::Int, smallvec![10]),
            Spec::TypedArray(ScalarType::Int, smallvec![2, 2]),
        ])
    );
}

#[test]
fn pack_then_reshape_reproduces_the_pair() {
    let a = int_array(&[10], &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    let b = int_array(&[2, 2], &[1, 2, 3, 4]);

    let (leaves, spec) = pack(&[a.clone(), b.clone()], Some(ScalarType::Int)).unwrap();
    assert_eq!(leaves.len(), 14);
    assert!(leaves
        .iter()
        .all(|v| v.as_scalar().map(|s| s.scalar_type()) == Some(ScalarType::Int)));

    let restored = reshape(&Value::Tuple(leaves), &spec).unwrap();
    assert_eq!(restored, Value::tuple(vec![a, b]));
}

#[test]
fn opaque_range_is_never_split_implicitly() {
    // Under the default predicate the whole range is one scalar, so a
    // 2x2 target is short three leaves. Count mismatches are hard
    // errors — no padding.
    let err = deep_reshape(&Value::range(0, 100), &SpecExpr::dims([2, 2])).unwrap_err();
    assert_eq!(
        err,
        ReshapeError::InsufficientScalars {
            needed: 4,
            available: 1,
            path: smallvec::SmallVec::new(),
        }
    );
}

#[test]
fn extended_descent_expands_the_range_instead() {
    let result =
        deep_reshape_with(&Value::range(0, 4), &SpecExpr::dims([2, 2]), &RangeDescent).unwrap();
    assert_eq!(result, int_array(&[2, 2], &[0, 1, 2, 3]));
}

#[test]
fn mixed_typed_scalars_and_typed_array() {
    let source = Value::tuple(vec![
        Value::float(1.23),
        Value::float(2.34),
        Value::int(3),
        Value::int(4),
        Value::int(5),
    ]);
    let spec = SpecExpr::Tuple(vec![
        SpecExpr::Type(ScalarType::Float),
        SpecExpr::Type(ScalarType::Float),
        SpecExpr::typed(ScalarType::Int, [3]),
    ]);
    let result = deep_reshape(&source, &spec).unwrap();
    assert_eq!(
        result,
        Value::tuple(vec![
            Value::float(1.23),
            Value::float(2.34),
            int_array(&[3], &[3, 4, 5]),
        ])
    );
}

#[test]
fn reshape_converts_across_scalar_types_exactly() {
    // Ints flow into float positions and vice versa, as long as every
    // conversion is exact.
    let source = Value::tuple(vec![Value::int(2), Value::float(7.0)]);
    let spec = SpecExpr::Tuple(vec![
        SpecExpr::Type(ScalarType::Float),
        SpecExpr::Type(ScalarType::Int),
    ]);
    assert_eq!(
        deep_reshape(&source, &spec).unwrap(),
        Value::tuple(vec![Value::float(2.0), Value::int(7)])
    );

    let inexact = Value::tuple(vec![Value::float(2.5)]);
    let err = deep_reshape(&inexact, &SpecExpr::Tuple(vec![SpecExpr::Type(ScalarType::Int)]))
        .unwrap_err();
    assert!(matches!(err, ReshapeError::Conversion { .. }));
}

#[test]
fn nested_structured_target_from_flat_source() {
    let source = Value::tuple(vec![
        Value::int(1),
        Value::int(2),
        Value::int(3),
        Value::int(4),
        Value::int(5),
        Value::int(6),
    ]);
    // ((2,), ((), (Int, 3)), ()) — an untyped pair, a nested tuple with
    // a typed 3-vector, and a trailing untyped scalar.
    let spec = SpecExpr::Tuple(vec![
        SpecExpr::dims([2]),
        SpecExpr::Tuple(vec![
            SpecExpr::any_scalar(),
            SpecExpr::typed(ScalarType::Int, [3]),
        ]),
    ]);
    let result = deep_reshape(&source, &spec).unwrap();
    assert_eq!(
        result,
        Value::tuple(vec![
            int_array(&[2], &[1, 2]),
            Value::tuple(vec![Value::int(3), int_array(&[3], &[4, 5, 6])]),
        ])
    );
}

#[test]
fn describe_to_expr_reparses_for_concrete_values() {
    let values = [
        Value::int(5),
        int_array(&[3, 2], &[1, 2, 3, 4, 5, 6]),
        Value::tuple(vec![Value::float(1.0), int_array(&[2], &[1, 2])]),
        Value::Array(
            ArrayValue::new(
                smallvec![2],
                vec![Value::tuple(vec![Value::int(1)]), Value::bool(false)],
            )
            .unwrap(),
        ),
    ];
    for value in &values {
        let spec = describe(value);
        assert_eq!(Spec::parse(&spec.to_expr()), Ok(spec));
    }
}
