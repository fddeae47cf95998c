use enumkit::{method, Domain, EnumError, Enumerated, MethodMap, RangeType, RangeValue};

// =============================================================================
// Construction and membership
// =============================================================================

#[test]
fn bounds_are_inclusive() {
    let small = RangeType::new(1, 10);
    assert_eq!(small.from_int(1).unwrap().to_int(), 1);
    assert_eq!(small.from_int(5).unwrap().to_int(), 5);
    assert_eq!(small.from_int(10).unwrap().to_int(), 10);
}

#[test]
fn out_of_range_fails() {
    let small = RangeType::new(1, 10);
    assert_eq!(
        small.from_int(0).unwrap_err(),
        EnumError::OutOfRange { value: 0 }
    );
    assert_eq!(
        small.from_int(11).unwrap_err(),
        EnumError::OutOfRange { value: 11 }
    );
    assert_eq!(
        small.from_int(100).unwrap_err(),
        EnumError::OutOfRange { value: 100 }
    );
}

#[test]
fn negative_bounds() {
    let offset = RangeType::new(-5, 5);
    assert_eq!(offset.from_int(-5).unwrap().to_int(), -5);
    assert!(offset.from_int(-6).is_err());
}

#[test]
fn bounds_accessors() {
    let small = RangeType::new(1, 10);
    assert_eq!(small.minimum(), 1);
    assert_eq!(small.maximum(), 10);
}

#[test]
fn inverted_bounds_make_an_empty_domain() {
    // Inverted bounds are not rejected at construction; the interval
    // is simply empty and every lookup fails.
    let empty = RangeType::new(10, 1);
    assert!(empty.from_int(5).is_err());
    assert!(empty.first().is_err());
    assert!(empty.last().is_err());
}

// =============================================================================
// Display
// =============================================================================

#[test]
fn named_range_display() {
    let small = RangeType::named(1, 10, "SmallNum");
    assert_eq!(small.from_int(5).unwrap().to_string(), "SmallNum(5)");
}

#[test]
fn anonymous_range_display() {
    let small = RangeType::new(1, 10);
    assert_eq!(small.from_int(5).unwrap().to_string(), "5");
}

// =============================================================================
// Non-singleton values
// =============================================================================

#[test]
fn values_are_fresh_but_compare_equal() {
    let small = RangeType::new(1, 10);
    let a = small.from_int(7).unwrap();
    let b = small.from_int(7).unwrap();
    assert!(a.is_equal_to(&b));
    assert_eq!(a, b); // structural equality
    assert!(!a.is_equal_to(&small.from_int(8).unwrap()));
}

// =============================================================================
// Type-level surface
// =============================================================================

#[test]
fn first_and_last_are_the_bounds() {
    let small = RangeType::named(1, 10, "SmallNum");
    assert_eq!(small.first().unwrap().to_int(), 1);
    assert_eq!(small.last().unwrap().to_int(), 10);
}

#[test]
fn type_level_iteration() {
    let small = RangeType::new(1, 4);
    let values: Vec<i64> = small
        .iterator(None, None)
        .unwrap()
        .map(|v| v.to_int())
        .collect();
    assert_eq!(values, [1, 2, 3, 4]);
}

// =============================================================================
// Successor / predecessor and boundaries
// =============================================================================

#[test]
fn stepping_stays_in_bounds() {
    let small = RangeType::new(1, 3);
    let two = small.from_int(1).unwrap().next().unwrap();
    assert_eq!(two.to_int(), 2);
    assert_eq!(two.previous().unwrap().to_int(), 1);
}

#[test]
fn stepping_past_the_ends_fails() {
    let small = RangeType::new(1, 3);
    assert_eq!(
        small.last().unwrap().next().unwrap_err(),
        EnumError::OutOfRange { value: 4 }
    );
    assert_eq!(
        small.first().unwrap().previous().unwrap_err(),
        EnumError::OutOfRange { value: 0 }
    );
}

// =============================================================================
// Custom methods
// =============================================================================

#[test]
fn methods_apply_to_constructed_values() {
    let mut map = MethodMap::new();
    map.insert(
        "double".into(),
        method(|v: &RangeValue| (v.to_int() * 2).to_string()),
    );
    let small = RangeType::new(1, 10).methods(map).unwrap();
    assert_eq!(small.from_int(4).unwrap().call("double").unwrap(), "8");
}

#[test]
fn second_registration_fails() {
    let small = RangeType::new(1, 10).methods(MethodMap::new()).unwrap();
    assert_eq!(
        small.methods(MethodMap::new()).unwrap_err(),
        EnumError::AlreadyExtended
    );
}
