use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

/// Cached rendered views keyed by their request path. Mutations invalidate
/// the affected path so the next read observes fresh data.
#[async_trait]
#[automock]
pub trait ViewCache {
    async fn read(&self, path: &str) -> Result<Option<String>>;
    async fn write(&self, path: &str, body: String) -> Result<()>;
    async fn invalidate(&self, path: &str) -> Result<()>;
}
