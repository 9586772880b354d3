//! Process-level initialization for the binary and for library callers that
//! want the same log output.

mod logger;

pub use logger::init_logger_with;
