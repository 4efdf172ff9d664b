use crate::{models::SearchResult, Result};

/// Trait for search providers - makes testing easier and keeps things flexible
///
/// The terminology backend lives behind this seam so the UI never learns
/// which service it is talking to.
#[async_trait::async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>>;
}
