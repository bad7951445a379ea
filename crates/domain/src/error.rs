use std::fmt;
use thiserror::Error;

/// Boxed low-level cause carried by a [`StorageFault`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The store operation a fault was raised from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOperation {
    Fetch,
    FetchAll,
    Insert,
    Update,
    Delete,
}

impl StoreOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fetch => "fetch",
            Self::FetchAll => "fetch_all",
            Self::Insert => "insert",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for StoreOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure surfaced by the underlying storage engine.
///
/// Connectivity loss, constraint violations and malformed statements all end
/// up here. The original error is kept as the [`source`](std::error::Error::source)
/// so the whole cause chain stays available to the caller.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct StorageFault {
    operation: StoreOperation,
    device_id: Option<String>,
    message: String,
    #[source]
    cause: BoxError,
}

impl StorageFault {
    pub fn new(
        operation: StoreOperation,
        device_id: Option<&str>,
        cause: impl Into<BoxError>,
    ) -> Self {
        let message = describe(operation, device_id);
        Self {
            operation,
            device_id: device_id.map(str::to_string),
            message,
            cause: cause.into(),
        }
    }

    pub fn operation(&self) -> StoreOperation {
        self.operation
    }

    /// Id of the device the failed operation targeted, if it had one.
    pub fn device_id(&self) -> Option<&str> {
        self.device_id.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

fn describe(operation: StoreOperation, device_id: Option<&str>) -> String {
    let id = device_id.unwrap_or("<unset>");
    match operation {
        StoreOperation::Fetch => format!("Error occurred while fetching device '{id}'"),
        StoreOperation::FetchAll => "Error occurred while fetching all device data".to_string(),
        StoreOperation::Insert => {
            format!("Error occurred while adding the device '{id}' to the device table")
        }
        StoreOperation::Update => format!("Error occurred while modifying the device '{id}' data"),
        StoreOperation::Delete => format!("Error occurred while deleting device '{id}'"),
    }
}

pub type Result<T> = std::result::Result<T, StorageFault>;
