// Handler modules
pub mod generate;

// Re-export all handler functions
pub use generate::{GenerateOptions, GenerateReport, handle_generate};
