//! Infrastructure layer - SQLite persistence for device records

pub mod config;
pub mod database;
pub mod telemetry;

pub use config::StoreConfig;
pub use database::{ConnectionProvider, SqliteConnectionProvider, SqliteDeviceRecordStore};
