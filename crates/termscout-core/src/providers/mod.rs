// Provider implementations bridging API clients with the SearchProvider trait
pub mod clinical_tables;

pub use clinical_tables::ClinicalTablesProvider;
