// Clinical Tables provider - bridges the API client with the SearchProvider trait
use async_trait::async_trait;
use termscout_api::{ClinicalTablesClient, CodeEntry};

use crate::{models::SearchResult, search::SearchProvider, Error, Result};

/// Wrapper around ClinicalTablesClient that implements SearchProvider
pub struct ClinicalTablesProvider {
    client: ClinicalTablesClient,
}

impl ClinicalTablesProvider {
    pub fn new() -> Self {
        Self {
            client: ClinicalTablesClient::new(),
        }
    }

    /// For pointing at a different terminology table or a test server
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: ClinicalTablesClient::with_base_url(base_url),
        }
    }
}

impl Default for ClinicalTablesProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SearchProvider for ClinicalTablesProvider {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        tracing::debug!(query, "searching clinical tables");
        let entries = self
            .client
            .search(query)
            .await
            .map_err(|e| Error::ApiError(e.to_string()))?;

        Ok(entries.into_iter().map(entry_to_result).collect())
    }
}

/// Convert an API code entry to our internal SearchResult model
fn entry_to_result(entry: CodeEntry) -> SearchResult {
    SearchResult {
        code: entry.code,
        description: entry.name,
    }
}
