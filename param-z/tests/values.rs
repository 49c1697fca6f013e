//! End-to-end checks of the typed value contract: strict construction,
//! lenient mutation, ordering, accessors, and clone independence.

use std::cmp::Ordering;
use std::sync::Arc;

use param_z::prelude::*;

fn def(name: &str, type_: ParameterType) -> Arc<ParameterDefinition> {
    Arc::new(ParameterDefinition::new(name, type_))
}

#[test]
fn test_construction_matrix() {
    let cases = [
        (ParameterType::Double, TypedValue::Double(1.5)),
        (ParameterType::Integer, TypedValue::Integer(1)),
        (ParameterType::Bool, TypedValue::Bool(true)),
        (ParameterType::String, TypedValue::String("x".into())),
    ];

    for (declared, value) in &cases {
        // Matching kind succeeds
        assert!(ParameterValue::new(def("p", *declared), value.clone()).is_ok());

        // Every other kind fails with InvalidValueType
        for (_, other) in cases.iter().filter(|(t, _)| t != declared) {
            let err = ParameterValue::new(def("p", *declared), other.clone()).unwrap_err();
            assert!(matches!(err, ParameterError::InvalidValueType { .. }));
        }
    }
}

#[test]
fn test_string_rendering() {
    let cases = [
        (ParameterType::Integer, TypedValue::Integer(42), "42"),
        (ParameterType::Bool, TypedValue::Bool(true), "true"),
        (ParameterType::Double, TypedValue::Double(3.5), "3.5"),
        (
            ParameterType::String,
            TypedValue::String("abc".into()),
            "abc",
        ),
    ];
    for (declared, value, expected) in cases {
        let v = ParameterValue::new(def("p", declared), value).unwrap();
        assert_eq!(v.as_string(), expected);
    }
}

#[test]
fn test_double_ordering_with_tolerance() {
    let d = def("p", ParameterType::Double);
    let a = ParameterValue::new(d.clone(), TypedValue::Double(1.0)).unwrap();
    let almost_a = ParameterValue::new(d.clone(), TypedValue::Double(1.0 + 1e-17)).unwrap();
    let b = ParameterValue::new(d, TypedValue::Double(2.0)).unwrap();

    assert_eq!(a.compare_to(&almost_a).unwrap(), Ordering::Equal);
    assert_eq!(a.compare_to(&b).unwrap(), Ordering::Less);
    assert_eq!(b.compare_to(&a).unwrap(), Ordering::Greater);
}

#[test]
fn test_mismatched_kind_comparison_fails() {
    let i = ParameterValue::new(def("count", ParameterType::Integer), TypedValue::Integer(1))
        .unwrap();
    let s = ParameterValue::new(
        def("mode", ParameterType::String),
        TypedValue::String("fast".into()),
    )
    .unwrap();

    let err = i.compare_to(&s).unwrap_err();
    assert!(matches!(err, ParameterError::UnsupportedComparison { .. }));
    // The message names the offending parameter and its declared type
    assert!(err.to_string().contains("count"));
    assert!(err.to_string().contains("integer"));
}

#[test]
fn test_bool_ordering() {
    let d = def("flag", ParameterType::Bool);
    let no = ParameterValue::new(d.clone(), TypedValue::Bool(false)).unwrap();
    let yes = ParameterValue::new(d, TypedValue::Bool(true)).unwrap();
    assert_eq!(no.compare_to(&yes).unwrap(), Ordering::Less);
}

#[test]
fn test_integer_truncates_toward_zero() {
    let v = ParameterValue::new(def("p", ParameterType::Double), TypedValue::Double(3.9)).unwrap();
    assert_eq!(v.as_i32().unwrap(), 3);

    let v = ParameterValue::new(def("p", ParameterType::Double), TypedValue::Double(-3.9)).unwrap();
    assert_eq!(v.as_i32().unwrap(), -3);
}

#[test]
fn test_unsupported_accessors() {
    let i = ParameterValue::new(def("p", ParameterType::Integer), TypedValue::Integer(1)).unwrap();
    assert!(matches!(
        i.as_bool().unwrap_err(),
        ParameterError::UnsupportedConversion { .. }
    ));

    let b = ParameterValue::new(def("p", ParameterType::Bool), TypedValue::Bool(true)).unwrap();
    assert!(b.as_f64().is_err());
    assert!(b.as_i32().is_err());

    let s = ParameterValue::new(
        def("p", ParameterType::String),
        TypedValue::String("1".into()),
    )
    .unwrap();
    assert!(s.as_f64().is_err());
    assert!(s.as_i32().is_err());
    assert!(s.as_bool().is_err());
}

#[test]
fn test_clone_is_independent() {
    let original =
        ParameterValue::new(def("p", ParameterType::Integer), TypedValue::Integer(1)).unwrap();
    let mut copy = original.clone();

    // Same definition instance, same value
    assert!(Arc::ptr_eq(original.definition(), copy.definition()));
    assert_eq!(original, copy);

    // Mutating the copy leaves the original untouched
    copy.set_value(2).unwrap();
    assert_eq!(original.value(), &TypedValue::Integer(1));
    assert_eq!(copy.value(), &TypedValue::Integer(2));
    assert_ne!(original, copy);
}

#[test]
fn test_double_parameter_scenario() {
    let v = ParameterValue::new(def("p", ParameterType::Double), TypedValue::Double(2.0)).unwrap();
    assert_eq!(v.as_f64().unwrap(), 2.0);
    assert_eq!(v.as_i32().unwrap(), 2);
    assert_eq!(v.as_string(), "2.0");
}

#[test]
fn test_set_value_is_the_lenient_path() {
    // Construction rejects a string for an integer parameter...
    let d = def("p", ParameterType::Integer);
    assert!(ParameterValue::new(d.clone(), TypedValue::String("5".into())).is_err());

    // ...but set_value coerces it.
    let mut v = ParameterValue::new(d, TypedValue::Integer(0)).unwrap();
    v.set_value("5").unwrap();
    assert_eq!(v.value(), &TypedValue::Integer(5));
}

#[test]
fn test_yaml_overrides_feed_the_store() {
    let overrides = param_z::yaml::parse_overrides("sensor.rate: \"12.5\"\n").unwrap();
    let mut store = ParameterStore::with_overrides(overrides);

    let rate_def =
        Arc::new(ParameterDefinition::new("rate", ParameterType::Double).in_namespace("sensor"));
    // The raw string override is coerced to the declared double type
    let initial = store.declare(rate_def, TypedValue::Double(1.0)).unwrap();
    assert_eq!(initial, TypedValue::Double(12.5));
}
