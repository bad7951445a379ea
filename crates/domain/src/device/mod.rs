mod entity;
mod repository;

pub use entity::DeviceRecord;
pub use repository::DeviceRecordStore;
