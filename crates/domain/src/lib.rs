//! Domain layer - Device records and their persistence contract
//!
//! This crate contains:
//! - The `DeviceRecord` entity
//! - The `DeviceRecordStore` repository interface (trait)
//! - `StorageFault`, the single error a store raises
//!
//! Principles:
//! - No dependencies on infrastructure
//! - "Not found" is a value, not an error
//! - Testable in isolation

pub mod device;
pub mod error;

// Re-export commonly used types
pub use device::{DeviceRecord, DeviceRecordStore};
pub use error::{StorageFault, StoreOperation};
