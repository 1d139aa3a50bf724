pub mod cached;
pub mod json_file;

use crate::{api::errors::LookupError, models::facility::Catalog};
use async_trait::async_trait;

/// Source of the parking lot dataset.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Loads the full catalog, failing with [`LookupError::DataUnavailable`]
    /// when the data cannot be read.
    async fn load(&self) -> Result<Catalog, LookupError>;
}

pub type ImplCatalogSource = Box<dyn CatalogSource>;
