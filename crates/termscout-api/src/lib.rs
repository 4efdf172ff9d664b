// API client for the NLM Clinical Tables terminology service
pub mod clinical_tables;

// Re-export common types
pub use clinical_tables::{ClinicalTablesClient, ClinicalTablesError, CodeEntry};
