//! Basic tests for core OptionalBox functionality

use optbox::*;

#[test]
fn test_default_is_empty() {
    let b: OptionalBox<i32> = OptionalBox::default();
    assert!(!b.has_value());
    assert_eq!(b.value(), Err(BadOptionalAccess));
    assert_eq!(b.into_value(), Err(BadOptionalAccess));
}

#[test]
fn test_from_value_reports_occupied() {
    let b = OptionalBox::from_value(42);
    assert!(b.has_value());
    assert_eq!(b.value(), Ok(&42));

    let text = String::from("copied");
    let c = OptionalBox::from_ref(&text);
    assert_eq!(c.value(), Ok(&text));
}

#[test]
fn test_scenario_independence_after_reset() {
    let mut a: OptionalBox<i32> = OptionalBox::new();
    assert!(!a.has_value());

    a.emplace(5);
    assert_eq!(a.value(), Ok(&5));

    let b = a.clone();
    assert_eq!(b.value(), Ok(&5));

    a.reset();
    assert!(!a.has_value());
    assert_eq!(b.value(), Ok(&5));
}

#[test]
fn test_reset_is_idempotent() {
    let mut b = OptionalBox::from_value(vec![1, 2, 3]);
    b.reset();
    assert!(!b.has_value());
    assert_eq!(b.value(), Err(BadOptionalAccess));
    b.reset();
    assert!(!b.has_value());
}

#[test]
fn test_clone_has_no_aliasing() {
    let mut a = OptionalBox::from_value(vec![1, 2, 3]);
    let b = a.clone();

    a.value_mut().unwrap().push(4);
    assert_eq!(a.value().unwrap().len(), 4);
    assert_eq!(b.value().unwrap(), &vec![1, 2, 3]);
}

#[test]
fn test_emplace_round_trip() {
    let mut b: OptionalBox<String> = OptionalBox::new();
    b.emplace_from("first");
    assert_eq!(b.value().unwrap(), &String::from("first"));

    // Occupied box: the new value replaces the old one.
    b.emplace_from("second");
    assert_eq!(b.value().unwrap(), &String::from("second"));

    let r = b.emplace_with(|| "x".repeat(3));
    r.push('!');
    assert_eq!(b.value().unwrap(), "xxx!");
}

#[test]
fn test_assignment_shapes() {
    // value -> empty / occupied
    let mut target = OptionalBox::new();
    target.assign(1);
    target.assign(2);
    assert_eq!(target.value(), Ok(&2));

    // empty box -> occupied
    target.assign_from(&OptionalBox::new());
    assert!(!target.has_value());

    // occupied box -> empty (copy)
    let source = OptionalBox::from_value(7);
    target.assign_from(&source);
    assert_eq!(target.value(), Ok(&7));
    assert_eq!(source.value(), Ok(&7));

    // occupied box -> occupied (move)
    let mut source = OptionalBox::from_value(9);
    target.assign_take(&mut source);
    assert_eq!(target.value(), Ok(&9));
    assert!(!source.has_value());

    // empty box -> occupied (move)
    target.assign_take(&mut source);
    assert!(!target.has_value());
}

#[test]
fn test_move_from_keeps_source_occupancy() {
    let mut occupied = OptionalBox::from_value(String::from("payload"));
    let moved = OptionalBox::move_from(&mut occupied);
    assert_eq!(moved.value().unwrap(), "payload");
    assert!(occupied.has_value());
    assert_eq!(occupied.value().unwrap(), "");

    let mut empty: OptionalBox<String> = OptionalBox::new();
    let moved = OptionalBox::move_from(&mut empty);
    assert!(!moved.has_value());
    assert!(!empty.has_value());
}

#[test]
fn test_take_value_vs_take() {
    let mut b = OptionalBox::from_value(String::from("data"));

    // Taking the payload leaves a moved-from value behind; the flag stays set.
    assert_eq!(b.take_value().unwrap(), "data");
    assert!(b.has_value());
    assert_eq!(b.value().unwrap(), "");

    // `take` removes the object itself.
    assert_eq!(b.take(), Some(String::new()));
    assert!(!b.has_value());
    assert_eq!(b.take_value(), Err(BadOptionalAccess));
}

#[test]
fn test_rvalue_access() {
    let b = OptionalBox::from_value(String::from("owned"));
    let s: String = b.into_value().unwrap();
    assert_eq!(s, "owned");

    let b = OptionalBox::from_value(3u64);
    // SAFETY: occupied.
    assert_eq!(unsafe { b.into_inner_unchecked() }, 3);
}

#[test]
fn test_unchecked_access_matches_checked() {
    let mut b = OptionalBox::from_value([1u8, 2, 3]);
    // SAFETY: occupied for the whole block.
    unsafe {
        assert_eq!(b.get_unchecked(), b.value().unwrap());
        b.get_unchecked_mut()[0] = 9;
        assert_eq!((*b.as_ptr())[0], 9);
        (*b.as_mut_ptr())[1] = 8;
    }
    assert_eq!(b.value(), Ok(&[9, 8, 3]));
}

#[test]
fn test_checked_access_composes_with_anyhow() -> anyhow::Result<()> {
    let b = OptionalBox::from_value(10);
    let v = b.value()?;
    assert_eq!(*v, 10);

    let empty: OptionalBox<i32> = OptionalBox::new();
    let err = anyhow::Error::from(empty.value().unwrap_err());
    assert_eq!(err.to_string(), "Bad optional access");
    assert!(err.downcast_ref::<BadOptionalAccess>().is_some());
    Ok(())
}

#[test]
fn test_value_or_fallbacks() {
    let empty: OptionalBox<&str> = OptionalBox::new();
    assert_eq!(empty.value_or("fallback"), "fallback");
    assert_eq!(OptionalBox::from_value("set").value_or_else(|| "fallback"), "set");
}

#[test]
fn test_non_default_types() {
    struct NoDefault(u8);

    let mut b = OptionalBox::from_value(NoDefault(1));
    b.emplace(NoDefault(2));
    assert_eq!(b.value().unwrap().0, 2);
    assert_eq!(b.take().map(|n| n.0), Some(2));
}
