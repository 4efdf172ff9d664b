use serde::{Deserialize, Serialize};

/// One matching terminology entry - the star of the show
///
/// Produced only by the search provider; the whole list is replaced on each
/// completed search, never merged incrementally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub code: String,
    pub description: String,
}

impl SearchResult {
    /// The text a selected row contributes to the status line and clipboard
    pub fn display_text(&self) -> String {
        format!("{} - {}", self.code, self.description)
    }
}

/// Current phase of the search pipeline, as shown on the status line
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Searching,
    Found {
        count: usize,
        query: String,
    },
    NoResults,
    Error(String),
    Selected(String),
    Copied(String),
    CopyFailed(String),
    SelectFirst,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Idle => Ok(()),
            Status::Searching => write!(f, "Searching..."),
            Status::Found { count, query } => {
                write!(f, "Found {} results for '{}' (tap to select)", count, query)
            }
            Status::NoResults => write!(f, "No results found."),
            Status::Error(message) => write!(f, "Error: {}", message),
            Status::Selected(text) => write!(f, "Selected: {}", text),
            Status::Copied(text) => write!(f, "Copied: {}", text),
            Status::CopyFailed(message) => write!(f, "Copy failed: {}", message),
            Status::SelectFirst => write!(f, "Select an item first."),
        }
    }
}
