use crate::database::schema::{DEVICE_ID_COLUMN, DEVICE_NAME_COLUMN};
use crate::database::{ConnectionProvider, SqliteConnectionProvider};
use async_trait::async_trait;
use domain::{DeviceRecord, DeviceRecordStore, StorageFault, StoreOperation};
use sqlx::pool::PoolConnection;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, Sqlite};
use tracing::{debug, error};

const SELECT_DEVICE: &str = "SELECT DEVICE_NAME FROM DEVICE WHERE DEVICE_ID = ?";
const SELECT_ALL_DEVICES: &str = "SELECT DEVICE_ID, DEVICE_NAME FROM DEVICE";
const INSERT_DEVICE: &str = "INSERT INTO DEVICE(DEVICE_ID, DEVICE_NAME) VALUES (?, ?)";
const UPDATE_DEVICE: &str = "UPDATE DEVICE SET DEVICE_NAME = ? WHERE DEVICE_ID = ?";
const DELETE_DEVICE: &str = "DELETE FROM DEVICE WHERE DEVICE_ID = ?";

/// `DeviceRecordStore` over the `DEVICE` table.
///
/// Stateless: every call acquires its own connection, runs one statement and
/// drops the connection before returning.
pub struct SqliteDeviceRecordStore<P = SqliteConnectionProvider> {
    provider: P,
}

impl<P: ConnectionProvider> SqliteDeviceRecordStore<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    async fn acquire(
        &self,
        operation: StoreOperation,
        device_id: Option<&str>,
    ) -> Result<PoolConnection<Sqlite>, StorageFault> {
        self.provider
            .acquire()
            .await
            .map_err(|e| fault(operation, device_id, e))
    }
}

fn fault(operation: StoreOperation, device_id: Option<&str>, e: sqlx::Error) -> StorageFault {
    let cause = e.to_string();
    let fault = StorageFault::new(operation, device_id, e);
    error!(%operation, device_id, error = %cause, "{}", fault);
    fault
}

fn name_of(row: &SqliteRow) -> Result<String, sqlx::Error> {
    // DEVICE_NAME is nullable in the table definition
    let name: Option<String> = row.try_get(DEVICE_NAME_COLUMN)?;
    Ok(name.unwrap_or_default())
}

#[async_trait]
impl<P: ConnectionProvider> DeviceRecordStore for SqliteDeviceRecordStore<P> {
    async fn fetch_one(&self, id: &str) -> Result<Option<DeviceRecord>, StorageFault> {
        let op = StoreOperation::Fetch;
        let mut conn = self.acquire(op, Some(id)).await?;

        let row = sqlx::query(SELECT_DEVICE)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| fault(op, Some(id), e))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let name = name_of(&row).map_err(|e| fault(op, Some(id), e))?;
        debug!(device_id = %id, "Device data has been fetched from the device table");

        Ok(Some(DeviceRecord::unidentified(name)))
    }

    async fn insert(&self, record: &DeviceRecord) -> Result<bool, StorageFault> {
        let op = StoreOperation::Insert;
        let record = record.normalized();
        let id = record.id();
        let mut conn = self.acquire(op, id).await?;

        let result = sqlx::query(INSERT_DEVICE)
            .bind(id)
            .bind(&record.name)
            .execute(&mut *conn)
            .await
            .map_err(|e| fault(op, id, e))?;

        let inserted = result.rows_affected() > 0;
        if inserted {
            debug!(device_id = id, "Device data has been added to the device table");
        }
        Ok(inserted)
    }

    async fn update(&self, record: &DeviceRecord) -> Result<bool, StorageFault> {
        let op = StoreOperation::Update;
        let record = record.normalized();
        let id = record.id();
        let mut conn = self.acquire(op, id).await?;

        let result = sqlx::query(UPDATE_DEVICE)
            .bind(&record.name)
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|e| fault(op, id, e))?;

        let updated = result.rows_affected() > 0;
        if updated {
            debug!(device_id = id, "Device data has been modified");
        }
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> Result<bool, StorageFault> {
        let op = StoreOperation::Delete;
        let mut conn = self.acquire(op, Some(id)).await?;

        let result = sqlx::query(DELETE_DEVICE)
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|e| fault(op, Some(id), e))?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            debug!(device_id = %id, "Device data has been deleted from the device table");
        }
        Ok(deleted)
    }

    async fn fetch_all(&self) -> Result<Vec<DeviceRecord>, StorageFault> {
        let op = StoreOperation::FetchAll;
        let mut conn = self.acquire(op, None).await?;

        let rows = sqlx::query(SELECT_ALL_DEVICES)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| fault(op, None, e))?;

        let records = rows
            .iter()
            .map(|row| -> Result<DeviceRecord, sqlx::Error> {
                let id: String = row.try_get(DEVICE_ID_COLUMN)?;
                Ok(DeviceRecord::new(id, name_of(row)?))
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| fault(op, None, e))?;

        debug!(count = records.len(), "All device details have been fetched");
        Ok(records)
    }
}
