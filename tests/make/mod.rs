use error_link::{format_err, make, BasicError, ErrorValue};

#[test]
fn make_sets_presence_and_exact_message() {
    let err: BasicError = make("abc");
    assert!(err.is_present());
    assert_eq!(err.message(), "abc");
}

#[test]
fn make_with_empty_message_is_absent() {
    let err: BasicError = make("");
    assert!(!err.is_present());
    assert_eq!(err, BasicError::default());
}

#[test]
fn format_err_substitutes_the_template_first() {
    let err: BasicError = format_err!("{} ({})", "No such file or directory", 2);
    assert!(err.is_present());
    assert_eq!(err.message(), "No such file or directory (2)");
}

#[test]
fn format_handles_long_messages_without_truncation() {
    let long = "x".repeat(16 * 1024);
    let err: BasicError = format_err!("{long}");
    assert_eq!(err.message().len(), 16 * 1024);
}
