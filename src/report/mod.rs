pub mod console_report;
pub mod export_error;
pub mod json_export;
pub mod table;
