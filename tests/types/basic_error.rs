use error_link::{BasicError, ErrorValue};

#[test]
fn carries_exact_message() {
    let err = BasicError::new("abc");
    assert!(err.is_present());
    assert_eq!(err.message(), "abc");
}

#[test]
fn empty_message_is_the_absent_sentinel() {
    assert_eq!(BasicError::new(""), BasicError::default());
    assert!(!BasicError::new("").is_present());
}

#[test]
fn converts_from_strings() {
    let owned: BasicError = String::from("x").into();
    let borrowed: BasicError = "x".into();
    assert_eq!(owned, borrowed);
}

#[cfg(feature = "serde")]
#[test]
fn serde_round_trip_preserves_message_and_presence() {
    use error_link::make;

    let err: BasicError = make("disk full");
    let json = serde_json::to_string(&err).unwrap();
    let back: BasicError = serde_json::from_str(&json).unwrap();
    assert_eq!(back, err);
    assert!(back.is_present());
}
