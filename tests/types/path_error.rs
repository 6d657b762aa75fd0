use error_link::{chain, make, BasicError, ErrorValue, PathError};

#[test]
fn renders_op_path_and_cause() {
    let err: PathError =
        PathError::new("fopen", "testdata/1.txt", make("No such file or directory (2)"));
    assert_eq!(err.message(), "fopen testdata/1.txt: No such file or directory (2)");
    assert_eq!(err.op(), "fopen");
    assert_eq!(err.path(), "testdata/1.txt");
}

#[test]
fn presence_follows_the_cause() {
    let absent: PathError = PathError::new("read", "a.txt", BasicError::default());
    assert!(!absent.is_present());

    let present: PathError = PathError::new("read", "a.txt", make("eof"));
    assert!(present.is_present());
}

#[test]
fn unwrap_returns_the_immediate_cause() {
    let err: PathError = PathError::new("stat", "b.txt", make("missing"));
    assert_eq!(chain::unwrap(&err), make::<BasicError, _>("missing"));
}

#[test]
fn nests_for_deeper_chains() {
    let inner: PathError = PathError::new("open", "db", make("refused"));
    let outer: PathError<PathError> = PathError::new("fetch", "users", inner.clone());
    assert_eq!(chain::unwrap(&outer), inner);
    assert_eq!(outer.message(), "fetch users: open db: refused");
}
