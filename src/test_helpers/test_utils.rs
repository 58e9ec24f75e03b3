//! # Test Utilities
//!
//! Environment helpers that work both locally and in CI: existing variables
//! always win over the defaults set here.

use dotenvy::dotenv;
use std::env;

/// Setup test environment with all necessary environment variables
///
/// Loads a `.env` file when present, marks the environment as `test` unless
/// `TODO_ENV` is already set, and initializes logging.
pub fn setup_test_environment() {
    dotenv().ok();

    if env::var("TODO_ENV").is_err() {
        env::set_var("TODO_ENV", "test");
    }

    crate::logging::init_structured_logging();
}
