use error_link::{make, try_then, BasicError, ErrorValue, PathError, Sequence};

use crate::support::Flag;

#[test]
fn short_circuits_without_invoking_the_continuation() {
    let prior: (u32, BasicError) = (0, make("early failure"));
    let mut invoked = false;
    let (value, error): (u32, BasicError) = try_then(prior, |_| {
        invoked = true;
        (1, BasicError::default())
    });
    assert!(!invoked);
    assert_eq!(value, 0);
    assert_eq!(error.message(), "early failure");
}

#[test]
fn adapts_the_prior_error_through_its_chain() {
    let prior: (Option<u8>, PathError) =
        (None, PathError::new("open", "data.bin", make("missing")));
    let (value, error): (u32, BasicError) =
        try_then(prior, |_| -> (u32, BasicError) { unreachable!() });
    assert_eq!(value, 0);
    assert_eq!(error.message(), "missing");
}

#[test]
fn adapts_the_continuation_error() {
    let prior = (2u32, BasicError::default());
    let (value, error): (String, BasicError) = try_then(prior, |n| {
        (String::new(), PathError::<BasicError>::new("lookup", n.to_string(), make("not found")))
    });
    assert_eq!(value, String::new());
    assert_eq!(error.message(), "not found");
}

#[test]
fn preserves_unconvertible_failures_as_text() {
    let prior: (u32, Flag) = (0, Flag { raised: true });
    let (_, error): (u32, BasicError) =
        try_then(prior, |_| -> (u32, BasicError) { unreachable!() });
    assert!(error.is_present());
    assert_eq!(error.message(), "flag raised");
}

#[test]
fn successful_steps_flow_through() {
    let prior = ("21".to_string(), BasicError::default());
    let (value, error): (i32, BasicError) = try_then(prior, |s| match s.parse::<i32>() {
        Ok(n) => (n * 2, BasicError::default()),
        Err(e) => (0, make(e.to_string())),
    });
    assert_eq!(value, 42);
    assert!(!error.is_present());
}

#[test]
fn sequence_composes_heterogeneous_steps() {
    let (value, error) = Sequence::<_, BasicError>::start("21")
        .then(|s| match s.parse::<i32>() {
            Ok(n) => (n, BasicError::default()),
            Err(e) => (0, make(e.to_string())),
        })
        .then(|n| (n * 2, BasicError::default()))
        .finish();
    assert_eq!(value, 42);
    assert!(!error.is_present());
}

#[test]
fn sequence_short_circuits_and_adapts() {
    let failed: (String, PathError) = (String::new(), PathError::new("open", "cfg", make("missing")));
    let result = Sequence::<_, BasicError>::new(failed)
        .then(|_| (0i64, BasicError::default()))
        .into_result();
    assert_eq!(result.unwrap_err().message(), "missing");
}

#[test]
fn sequence_into_result_passes_values_through() {
    let ok = Sequence::<_, BasicError>::start(5u8).into_result();
    assert_eq!(ok, Ok(5));
}
