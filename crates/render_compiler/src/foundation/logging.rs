//! Logging utilities and structured logging support

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system
pub fn init() {
    env_logger::init();
}

/// Initialize the logging system for tests
///
/// Unlike [`init`], repeated calls are tolerated so that individual tests
/// can each request logging without coordinating.
pub fn init_for_tests() {
    let _ = env_logger::builder().is_test(true).try_init();
}
