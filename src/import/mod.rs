//! Spreadsheet bulk import: multipart intake, staging, workbook reading,
//! row filtering and insertion.

pub mod fields;
pub mod multipart;
pub mod pipeline;
pub mod staging;
pub mod workbook;

pub use pipeline::ImportSummary;
