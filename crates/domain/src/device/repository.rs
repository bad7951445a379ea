use super::DeviceRecord;
use crate::StorageFault;
use async_trait::async_trait;

/// Persistence contract for device records.
///
/// A missing row is never an error: lookups return `None`, mutations return
/// `false`. Every other failure comes back as a [`StorageFault`].
/// Implementations live in the infrastructure layer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DeviceRecordStore: Send + Sync {
    /// Fetch a device's name by id. The returned record has no id set.
    async fn fetch_one(&self, id: &str) -> Result<Option<DeviceRecord>, StorageFault>;

    /// Add a new device row. `true` if a row was written.
    async fn insert(&self, record: &DeviceRecord) -> Result<bool, StorageFault>;

    /// Rename an existing device. `false` if no row has that id.
    async fn update(&self, record: &DeviceRecord) -> Result<bool, StorageFault>;

    /// Remove a device by id. `false` if no row has that id.
    async fn delete(&self, id: &str) -> Result<bool, StorageFault>;

    /// Fetch every device with id and name populated
    async fn fetch_all(&self) -> Result<Vec<DeviceRecord>, StorageFault>;
}
