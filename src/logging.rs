//! # Structured Logging Module
//!
//! Environment-aware structured logging for tests and tools built on this crate.
//! Console output is human readable by default and JSON lines when
//! `TODO_LOG_FORMAT=json`.

use chrono::Utc;
use std::sync::OnceLock;
use tracing::Subscriber;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize structured logging with environment-specific configuration
///
/// Safe to call from every test: only the first call installs a subscriber,
/// and an already installed global subscriber is left in place.
pub fn init_structured_logging() {
    LOGGER_INITIALIZED.get_or_init(|| {
        let environment = get_environment();
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(get_log_level(&environment)));

        let console = console_layer(wants_json(), filter);

        if tracing_subscriber::registry().with(console).try_init().is_err() {
            tracing::debug!("Global tracing subscriber already initialized - continuing with existing subscriber");
        }

        tracing::info!(environment = %environment, "structured logging initialized");
    });
}

/// Console output through libtest's capturing writer, text or JSON lines
fn console_layer<S>(json: bool, filter: EnvFilter) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a> + 'static,
{
    let layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_test_writer();

    if json {
        layer.with_ansi(false).json().with_filter(filter).boxed()
    } else {
        layer.with_filter(filter).boxed()
    }
}

/// Get current environment from environment variables
fn get_environment() -> String {
    environment_from(|key| std::env::var(key).ok())
}

fn environment_from(lookup: impl Fn(&str) -> Option<String>) -> String {
    lookup("TODO_ENV")
        .or_else(|| lookup("APP_ENV"))
        .unwrap_or_else(|| "development".to_string())
}

/// Get log level based on environment
fn get_log_level(environment: &str) -> String {
    match environment {
        "production" => "info".to_string(),
        _ => "debug".to_string(),
    }
}

fn wants_json() -> bool {
    std::env::var("TODO_LOG_FORMAT")
        .map(|format| format.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

/// Log structured data for database operations
pub fn log_database_operation(
    operation: &str,
    table: Option<&str>,
    record_id: Option<i64>,
    status: &str,
    details: Option<&str>,
) {
    tracing::info!(
        operation = %operation,
        table = table,
        record_id = record_id,
        status = %status,
        details = details,
        timestamp = %Utc::now().to_rfc3339(),
        "DATABASE_OPERATION"
    );
}

/// Log structured data for container lifecycle events
pub fn log_container_operation(
    operation: &str,
    image: &str,
    endpoint: Option<&str>,
    status: &str,
) {
    tracing::info!(
        operation = %operation,
        image = %image,
        endpoint = endpoint,
        status = %status,
        timestamp = %Utc::now().to_rfc3339(),
        "CONTAINER_OPERATION"
    );
}
