use sqlx::{Executor, Sqlite};

pub const DEVICE_TABLE: &str = "DEVICE";
pub const DEVICE_ID_COLUMN: &str = "DEVICE_ID";
pub const DEVICE_NAME_COLUMN: &str = "DEVICE_NAME";

const CREATE_DEVICE_TABLE: &str = "CREATE TABLE IF NOT EXISTS DEVICE (
    DEVICE_ID VARCHAR(45) NOT NULL,
    DEVICE_NAME VARCHAR(100) NULL DEFAULT NULL,
    PRIMARY KEY (DEVICE_ID)
)";

/// Create the DEVICE table on an empty database. An existing table is left
/// untouched.
pub async fn ensure_device_table<'e, E>(executor: E) -> Result<(), sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    executor.execute(CREATE_DEVICE_TABLE).await?;
    tracing::debug!(table = DEVICE_TABLE, "Device table is in place");
    Ok(())
}
