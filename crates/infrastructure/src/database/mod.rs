mod connection_provider;
mod device_record_store;
pub mod schema;

pub use connection_provider::{ConnectionProvider, SqliteConnectionProvider};
pub use device_record_store::SqliteDeviceRecordStore;
