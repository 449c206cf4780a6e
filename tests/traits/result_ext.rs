use error_shape::traits::ResultExt;
use error_shape::{get_cause, get_code_string, get_sdc_value, StructuredError};

fn failing() -> Result<u32, std::io::Error> {
    Err(std::io::Error::other("timeout"))
}

#[test]
fn wrap_err_wraps_the_error_as_cause() {
    let err = failing().wrap_err("query failed").unwrap_err();

    assert_eq!(err.to_string(), "query failed; caused by: timeout");
    assert!(get_cause(&err).is_some());
}

#[test]
fn wrap_err_passes_ok_through() {
    let ok: Result<u32, std::io::Error> = Ok(7);
    assert_eq!(ok.wrap_err("unused").unwrap(), 7);
}

#[test]
fn wrap_err_with_is_lazy() {
    let mut called = false;
    let ok: Result<(), std::io::Error> = Ok(());
    let _ = ok.wrap_err_with(|| {
        called = true;
        "never".to_string()
    });
    assert!(!called, "closure must not run for Ok");

    let err = failing().wrap_err_with(|| format!("attempt {}", 2)).unwrap_err();
    assert_eq!(err.to_string(), "attempt 2; caused by: timeout");
}

#[test]
fn wrap_err_as_configures_the_builder() {
    let err = failing()
        .wrap_err_as(|b| b.with_code("DB_ERR").with_sdc("trace_id", "t1"), "query failed")
        .unwrap_err();

    assert_eq!(get_code_string(&err), "DB_ERR");
    assert_eq!(get_sdc_value(&err, "trace_id"), "t1");
    assert_eq!(err.to_string(), "query failed; caused by: timeout");
}

#[test]
fn wrapped_results_propagate_with_question_mark() {
    fn load() -> Result<u32, StructuredError> {
        let value = failing().wrap_err("loading")?;
        Ok(value + 1)
    }

    assert_eq!(load().unwrap_err().to_string(), "loading; caused by: timeout");
}

#[test]
fn wrap_err_captures_the_calling_function() {
    let err = failing().wrap_err("located").unwrap_err();
    let frames = err.stack_trace();

    assert!(err.has_stack_trace());
    assert!(frames.iter().all(|f| !f.function.contains("as error_shape::traits::")));
}
