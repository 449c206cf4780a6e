use error_shape::{
    as_structured, code, get_cause, get_code, get_code_string, get_context, get_context_value,
    get_message, get_sdc, get_sdc_value, get_stack_trace, has_code, has_context_key, has_sdc_key,
    is_structured, message, SharedError,
};
use std::error::Error;
use std::sync::Arc;

fn plain() -> std::io::Error {
    std::io::Error::other("plain")
}

#[test]
fn accessors_degrade_to_zero_values_for_none() {
    let none = None::<&dyn Error>;

    assert!(as_structured(none).is_none());
    assert!(!is_structured(none));
    assert!(get_code(none).is_empty());
    assert_eq!(get_code_string(none), "");
    assert_eq!(get_message(none), "");
    assert!(get_context(none).is_none());
    assert!(get_context_value(none, "k").is_none());
    assert!(get_sdc(none).is_none());
    assert_eq!(get_sdc_value(none, "k"), "");
    assert!(get_stack_trace(none).is_empty());
    assert!(get_cause(none).is_none());
    assert!(!has_context_key(none, "k"));
    assert!(!has_sdc_key(none, "k"));
}

#[test]
fn accessors_degrade_to_zero_values_for_plain_errors() {
    let err = plain();

    assert!(as_structured(&err).is_none());
    assert_eq!(get_code_string(&err), "");
    assert_eq!(get_message(&err), "");
    assert!(get_context(&err).is_none());
    assert!(get_sdc(&err).is_none());
    assert_eq!(get_sdc_value(&err, "trace_id"), "");
    assert!(get_stack_trace(&err).is_empty());
    assert!(get_cause(&err).is_none());
}

#[test]
fn has_code_agrees_with_get_code_string() {
    let structured = code("DB_ERR").error("x");
    let uncoded = message("m").error("x");
    let plain = plain();

    for candidate in ["DB_ERR", "", "OTHER"] {
        assert_eq!(has_code(&structured, candidate), get_code_string(&structured) == candidate);
        assert_eq!(has_code(&uncoded, candidate), get_code_string(&uncoded) == candidate);
        assert_eq!(has_code(&plain, candidate), get_code_string(&plain) == candidate);
    }
    assert!(has_code(&plain, ""));
    assert!(has_code(None::<&dyn Error>, ""));
}

#[test]
fn accessors_read_structured_fields() {
    let err = message("explicit")
        .with_code("NET_ERR")
        .with_context("port", 5432_u16)
        .with_sdc("trace_id", "t1")
        .wrap(plain(), "fallback");

    assert!(is_structured(&err));
    assert_eq!(get_message(&err), "explicit");
    assert_eq!(get_context_value(&err, "port").and_then(|v| v.downcast_ref::<u16>()), Some(&5432));
    assert!(get_context_value(&err, "missing").is_none());
    assert_eq!(get_sdc_value(&err, "trace_id"), "t1");
    assert_eq!(get_sdc_value(&err, "missing"), "");
    assert!(has_context_key(&err, "port"));
    assert!(!has_context_key(&err, "trace_id"));
    assert!(has_sdc_key(&err, "trace_id"));
    assert!(!has_sdc_key(&err, "port"));
    assert_eq!(get_cause(&err).map(|c| c.to_string()), Some("plain".to_string()));
    assert!(!get_stack_trace(&err).is_empty());
}

#[test]
fn accessors_accept_trait_objects_and_shared_errors() {
    let shared: SharedError = Arc::new(code("SHARED").error("x"));
    let as_dyn: &(dyn Error + Send + Sync) = &*shared;
    let boxed: Box<dyn Error> = Box::new(code("BOXED").error("y"));

    assert_eq!(get_code_string(&shared), "SHARED");
    assert_eq!(get_code_string(as_dyn), "SHARED");
    assert_eq!(get_code_string(&*boxed), "BOXED");
    assert_eq!(get_code_string(Some(&shared)), "SHARED");
}

#[test]
fn outermost_structured_link_wins() {
    let inner = code("INNER").error("inner");
    let outer = code("OUTER").wrap(inner, "outer");

    assert_eq!(get_code_string(&outer), "OUTER");
    let cause = get_cause(&outer).unwrap();
    assert_eq!(get_code_string(cause), "INNER");
}
