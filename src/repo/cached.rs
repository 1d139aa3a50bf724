use super::CatalogSource;
use crate::{api::errors::LookupError, models::facility::Catalog};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::OnceCell;

/// Loads the wrapped source once and hands out the same snapshot afterwards.
///
/// Concurrent first callers wait on a single load; the snapshot is only
/// published once fully built. A failed load leaves the cell empty so the
/// next call retries.
#[derive(Clone)]
pub struct CachedCatalog {
    inner: Arc<dyn CatalogSource>,
    snapshot: Arc<OnceCell<Catalog>>,
}

impl CachedCatalog {
    pub fn new(inner: impl CatalogSource + 'static) -> Self {
        Self {
            inner: Arc::new(inner),
            snapshot: Arc::new(OnceCell::new()),
        }
    }
}

#[async_trait]
impl CatalogSource for CachedCatalog {
    async fn load(&self) -> Result<Catalog, LookupError> {
        self.snapshot
            .get_or_try_init(|| self.inner.load())
            .await
            .map(Arc::clone)
    }
}
