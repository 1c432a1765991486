//! Night out plan parsing
//!
//! This module turns the Markdown-ish text returned by the completion API
//! into titled steps, a tips block and closing remarks for display.

mod category;
mod parser;
mod teaser;

pub use category::Category;
pub use parser::{parse_plan, ParsedPlan, PlanItem, DEFAULT_TITLE, FALLBACK_TITLE};
pub use teaser::extract_teaser;

pub(crate) use parser::tips_heading_pattern;
