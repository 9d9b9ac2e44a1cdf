use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::repositories::view_cache::ViewCache;

/// Process-wide rendered-view cache. Entries live until a mutation
/// invalidates their path; there is no TTL.
#[derive(Debug, Default)]
pub struct InMemoryViewCache {
    store: RwLock<HashMap<String, String>>,
}

impl InMemoryViewCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ViewCache for InMemoryViewCache {
    async fn read(&self, path: &str) -> Result<Option<String>> {
        let store = self.store.read().await;
        Ok(store.get(path).cloned())
    }

    async fn write(&self, path: &str, body: String) -> Result<()> {
        let mut store = self.store.write().await;
        store.insert(path.to_string(), body);
        Ok(())
    }

    async fn invalidate(&self, path: &str) -> Result<()> {
        let mut store = self.store.write().await;
        store.remove(path);
        Ok(())
    }
}
