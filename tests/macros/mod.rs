use error_shape::{errorf, get_cause, get_code_string, has_code, wrapf};

#[test]
fn errorf_formats_message_without_cause() {
    let attempts = 3;
    let err = errorf!("gave up after {} attempts", attempts);

    assert_eq!(err.to_string(), "gave up after 3 attempts");
    assert_eq!(err.message(), "");
    assert!(err.cause().is_none());
    assert!(has_code(&err, ""));
}

#[test]
fn errorf_accepts_inline_captures() {
    let host = "db";
    let err = errorf!("cannot reach {host}");

    assert_eq!(err.to_string(), "cannot reach db");
}

#[test]
fn wrapf_formats_message_and_keeps_cause() {
    let cause = std::io::Error::other("refused");
    let err = wrapf!(cause, "connecting to {}:{}", "db", 5432);

    assert_eq!(err.to_string(), "connecting to db:5432; caused by: refused");
    assert_eq!(get_cause(&err).map(|c| c.to_string()), Some("refused".to_string()));
    assert_eq!(get_code_string(&err), "");
}

#[test]
fn macros_capture_stack_by_default() {
    let err = errorf!("boom");
    assert!(err.has_stack_trace());
}
