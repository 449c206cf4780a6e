use error_shape::{code, error, message, StackFrame, MAX_STACK_DEPTH};

#[test]
fn stack_frame_display_is_function_file_line() {
    let frame = StackFrame::new("app::handler", "src/app.rs", 42);
    assert_eq!(frame.to_string(), "app::handler:src/app.rs:42");
}

#[test]
fn disabled_capture_yields_no_frames() {
    let err = message("m").with_stack_trace(false).error("x");

    assert!(!err.has_stack_trace());
    assert!(err.stack_trace().is_empty());
    assert!(err.stack_trace().is_empty());
}

#[test]
fn stack_trace_is_cached_after_first_access() {
    let err = code("S").error("x");

    let first = err.stack_trace();
    let second = err.stack_trace();

    assert_eq!(first, second);
    assert_eq!(first.as_ptr(), second.as_ptr());
}

#[test]
fn stack_trace_is_bounded() {
    fn recurse(depth: usize) -> error_shape::StructuredError {
        if depth == 0 {
            error("deep")
        } else {
            recurse(depth - 1)
        }
    }

    let err = recurse(40);
    assert!(err.stack_trace().len() <= MAX_STACK_DEPTH);
}

#[test]
#[cfg(debug_assertions)]
fn stack_trace_starts_at_the_caller() {
    let err = error("located");
    let frames = err.stack_trace();

    assert!(err.has_stack_trace());
    let first = frames.first().expect("a captured stack has frames");
    assert!(
        first.function.contains("stack_trace_starts_at_the_caller"),
        "unexpected frame 0: {} in {:?}",
        first,
        frames
    );
    assert!(
        frames.iter().all(|f| !f.function.starts_with("error_shape::builder::")),
        "builder frames should be skipped: {:?}",
        frames
    );
    assert!(
        frames.iter().all(|f| !f.function.starts_with("backtrace::")),
        "capture frames should be skipped: {:?}",
        frames
    );
}

#[test]
fn concurrent_readers_observe_the_same_frames() {
    let err = std::sync::Arc::new(code("C").error("concurrent"));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let err = std::sync::Arc::clone(&err);
            std::thread::spawn(move || err.stack_trace().to_vec())
        })
        .collect();

    let all: Vec<Vec<StackFrame>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(all.iter().all(|frames| frames == &all[0]));
    assert_eq!(err.stack_trace(), all[0].as_slice());
}
