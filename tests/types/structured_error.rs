use error_shape::{code, message, wrap, StructuredError};
use std::error::Error;
use std::sync::Arc;

#[test]
fn display_without_cause_is_the_rendered_message() {
    let err = code("X").error("fallback text");
    assert_eq!(err.to_string(), "fallback text");
}

#[test]
fn display_with_cause_uses_the_separator() {
    let err = message("M").wrap(std::io::Error::other("C"), "fallback");
    assert_eq!(err.to_string(), "M; caused by: C");
}

#[test]
fn source_is_the_cause() {
    let err = wrap(std::io::Error::other("root"), "top");
    let source = err.source().unwrap();

    assert_eq!(source.to_string(), "root");
    assert!(source.downcast_ref::<std::io::Error>().is_some());
}

#[test]
fn accessors_expose_every_field() {
    let err = message("explicit")
        .with_code("DB_ERR")
        .with_context("retries", 3_u8)
        .with_sdc("trace_id", "t1")
        .with_stack_trace(false)
        .error("fallback");

    assert_eq!(err.message(), "explicit");
    assert_eq!(err.rendered_message(), "explicit");
    assert_eq!(err.code().as_str(), "DB_ERR");
    assert_eq!(err.context_value("retries").and_then(|v| v.downcast_ref::<u8>()), Some(&3));
    assert!(err.context_value("missing").is_none());
    assert_eq!(err.sdc_value("trace_id"), Some("t1"));
    assert_eq!(err.sdc_value("missing"), None);
    assert!(err.cause().is_none());
    assert!(!err.has_stack_trace());
}

#[test]
fn errors_are_send_sync_and_shareable() {
    fn assert_send_sync<T: Send + Sync + 'static>() {}
    assert_send_sync::<StructuredError>();

    let err = Arc::new(code("SHARED").error("shared"));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let err = Arc::clone(&err);
            std::thread::spawn(move || (err.code().to_string(), err.stack_trace().len()))
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(results.iter().all(|r| r == &results[0]));
    assert_eq!(results[0].0, "SHARED");
}

#[test]
fn debug_includes_code_and_message() {
    let err = code("DBG").with_stack_trace(false).error("debug me");
    let debug = format!("{:?}", err);

    assert!(debug.contains("StructuredError"));
    assert!(debug.contains("DBG"));
    assert!(debug.contains("debug me"));
}

#[test]
fn boxes_into_dyn_error() {
    let boxed: Box<dyn Error + Send + Sync> = Box::new(code("BOX").error("boxed"));
    assert_eq!(boxed.to_string(), "boxed");
    assert!(boxed.downcast_ref::<StructuredError>().is_some());
}
