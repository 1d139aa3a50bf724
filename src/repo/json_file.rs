use super::CatalogSource;
use crate::{
    api::errors::LookupError,
    models::facility::{Catalog, FacilityRecord},
};
use async_trait::async_trait;
use std::{path::PathBuf, sync::Arc, time::Duration};

/// Catalog read from a JSON array of records on disk, on every call.
#[derive(Clone)]
pub struct JsonFileCatalog {
    pub path: PathBuf,
    /// Upper bound for reading the file
    pub timeout: Duration,
}

impl JsonFileCatalog {
    /// Awaits `read`, giving up once the configured timeout elapses.
    async fn read_within(
        &self,
        read: impl Future<Output = std::io::Result<Vec<u8>>>,
    ) -> Result<Vec<u8>, LookupError> {
        tokio::time::timeout(self.timeout, read)
            .await
            .map_err(|_| {
                LookupError::DataUnavailable(format!(
                    "reading {} timed out after {}ms",
                    self.path.display(),
                    self.timeout.as_millis()
                ))
            })?
            .map_err(|e| {
                LookupError::DataUnavailable(format!("cannot read {}: {e}", self.path.display()))
            })
    }
}

#[async_trait]
impl CatalogSource for JsonFileCatalog {
    async fn load(&self) -> Result<Catalog, LookupError> {
        let bytes = self.read_within(tokio::fs::read(&self.path)).await?;

        let records: Vec<FacilityRecord> = serde_json::from_slice(&bytes).map_err(|e| {
            LookupError::DataUnavailable(format!(
                "{} is not a list of parking records: {e}",
                self.path.display()
            ))
        })?;

        tracing::debug!(
            "loaded {count} parking records from {path}",
            count = records.len(),
            path = self.path.display()
        );

        Ok(Arc::new(records))
    }
}
