// Test Helpers Module - Integration Testing Infrastructure
//
// Container builders, the test schema loader and environment helpers shared
// by the unit tests and the scenarios under tests/.

pub mod migrations;
pub mod test_utils;
pub mod testcontainers;

pub use migrations::{load_migration, migration_path, run_migration_file, run_migrations};
pub use test_utils::setup_test_environment;
