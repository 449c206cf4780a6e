pub mod into_error_ref;
pub mod result_ext;
