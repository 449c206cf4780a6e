use error_shape::traits::IntoErrorRef;
use error_shape::{code, into_shared, SharedError, StructuredError};
use std::error::Error;
use std::sync::Arc;

#[test]
fn concrete_references_are_viewed_as_errors() {
    let io = std::io::Error::other("io");
    let view = (&io).into_error_ref().unwrap();

    assert_eq!(view.to_string(), "io");
    assert!(view.downcast_ref::<std::io::Error>().is_some());
}

#[test]
fn none_is_no_error() {
    assert!(None::<&dyn Error>.into_error_ref().is_none());
    assert!(None::<&std::io::Error>.into_error_ref().is_none());
}

#[test]
fn shared_errors_are_viewed_as_their_pointee() {
    let shared: SharedError = Arc::new(code("S").error("shared"));

    let view = (&shared).into_error_ref().unwrap();
    assert!(view.downcast_ref::<StructuredError>().is_some());

    let send_sync: &(dyn Error + Send + Sync) = &*shared;
    assert!(send_sync.into_error_ref().unwrap().downcast_ref::<StructuredError>().is_some());
}

#[test]
fn into_shared_does_not_rewrap() {
    let first = into_shared(std::io::Error::other("once"));
    let second = into_shared(Arc::clone(&first));

    assert!(Arc::ptr_eq(&first, &second));
    assert!(second.downcast_ref::<std::io::Error>().is_some());
}
