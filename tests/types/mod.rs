pub mod stack;
pub mod structured_error;
