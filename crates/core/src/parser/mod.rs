//! Feature file parsing into addressable test sections

pub mod feature_parser;
pub mod test_details;

// Re-export commonly used items
pub use feature_parser::{parse, section_at_line};
pub use test_details::{detail_for_line, test_execution_details};
