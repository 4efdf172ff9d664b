use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

const CLINICAL_TABLES_API_BASE: &str = "https://clinicaltables.nlm.nih.gov/api/icd10cm/v3/search";

/// Hard cap on results per lookup, matching what the UI can usefully show.
const MAX_LIST: u32 = 30;

/// The service answers fast or not at all; anything slower than this is dead.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(6);

#[derive(Error, Debug)]
pub enum ClinicalTablesError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

pub type Result<T> = std::result::Result<T, ClinicalTablesError>;

/// One code/name pair as returned by the lookup endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeEntry {
    pub code: String,
    pub name: String,
}

pub struct ClinicalTablesClient {
    client: reqwest::Client,
    base_url: String,
}

impl ClinicalTablesClient {
    pub fn new() -> Self {
        Self::with_base_url(CLINICAL_TABLES_API_BASE.to_string())
    }

    /// For pointing at a different Clinical Tables table or a test server
    pub fn with_base_url(base_url: String) -> Self {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_static("TermScout/0.1.0"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client");

        Self { client, base_url }
    }

    /// Search the terminology table for codes matching the given terms
    ///
    /// One shot, no retry: a failed lookup is reported to the caller and the
    /// next keystroke simply triggers a fresh one.
    pub async fn search(&self, terms: &str) -> Result<Vec<CodeEntry>> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("sf", "code,name"),
                ("terms", terms),
                ("maxList", &MAX_LIST.to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ClinicalTablesError::RequestFailed(format!(
                "Status {}: {}",
                status, body
            )));
        }

        let payload: Value = response.json().await?;
        let entries = parse_search_payload(&payload)?;
        debug!(terms, count = entries.len(), "terminology lookup completed");
        Ok(entries)
    }
}

impl Default for ClinicalTablesClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract the code/name pairs from a lookup payload
///
/// The endpoint returns a four-element array: total count, code list, extra
/// data, and finally the display rows. Only the display rows at index 3
/// matter here; a shorter array means no results.
fn parse_search_payload(payload: &Value) -> Result<Vec<CodeEntry>> {
    let elements = payload.as_array().ok_or_else(|| {
        ClinicalTablesError::MalformedResponse("expected a top-level JSON array".to_string())
    })?;

    let Some(rows) = elements.get(3) else {
        return Ok(Vec::new());
    };

    let rows = rows.as_array().ok_or_else(|| {
        ClinicalTablesError::MalformedResponse("display rows are not an array".to_string())
    })?;

    rows.iter().map(parse_entry).collect()
}

fn parse_entry(row: &Value) -> Result<CodeEntry> {
    let pair = row
        .as_array()
        .filter(|pair| pair.len() == 2)
        .ok_or_else(|| {
            ClinicalTablesError::MalformedResponse(format!(
                "expected a [code, name] pair, got: {}",
                row
            ))
        })?;

    match (pair[0].as_str(), pair[1].as_str()) {
        (Some(code), Some(name)) => Ok(CodeEntry {
            code: code.to_string(),
            name: name.to_string(),
        }),
        _ => Err(ClinicalTablesError::MalformedResponse(format!(
            "non-string code or name in: {}",
            row
        ))),
    }
}
