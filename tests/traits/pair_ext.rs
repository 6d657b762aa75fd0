use error_link::{make, BasicError, ErrorValue, PairExt, ResultPairExt};

#[test]
fn pair_into_result_maps_presence() {
    let ok = (7u32, BasicError::default());
    assert_eq!(ok.into_result(), Ok(7));

    let failed = (0u32, make::<BasicError, _>("boom"));
    let err = failed.into_result().unwrap_err();
    assert_eq!(err.message(), "boom");
}

#[test]
fn result_into_pair_uses_the_default_sentinels() {
    let ok: Result<u32, BasicError> = Ok(3);
    let (value, error) = ok.into_pair();
    assert_eq!(value, 3);
    assert!(!error.is_present());

    let failed: Result<u32, BasicError> = Err(make("missing"));
    let (value, error) = failed.into_pair();
    assert_eq!(value, 0);
    assert!(error.is_present());
}

#[test]
fn pair_and_result_round_trip() {
    let pair = (9i64, make::<BasicError, _>("late failure"));
    let back: (i64, BasicError) = pair.clone().into_result().into_pair();
    assert_eq!(back.0, 0);
    assert_eq!(back.1, pair.1);
}
