//! CLI command implementations

pub mod parse;
pub mod prompt;
pub mod venues;

pub use parse::ParseArgs;
pub use prompt::PromptArgs;
pub use venues::VenuesArgs;
