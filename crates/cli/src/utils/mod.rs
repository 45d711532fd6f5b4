pub mod parser;
pub mod prompt;
pub mod target;

pub use parser::parse_filepath_with_line;
pub use prompt::{LinePrompt, StdinPrompt};
pub use target::build_request;
