//! # Database Connections
//!
//! Connection management lives here, outside the data-access functions in
//! [`crate::models`], which only ever receive an executor from the caller.

pub mod connection;

pub use connection::DatabaseConnection;
