//! Tonight Core - Core library for St. Augustine Tonight
//!
//! Turns AI-generated night out plans into structured steps, builds the
//! prompts that ask for them, and filters the venue catalogue by vibe.

pub mod config;
pub mod display;
pub mod error;
pub mod generation;
pub mod plan;
pub mod venue;
pub mod vibe;

pub use config::Config;
pub use display::PlanDisplay;
pub use error::{Error, Result};
pub use generation::{ChatMessage, ChatRequest, PlanRequest, PlanResponse};
pub use plan::{parse_plan, Category, ParsedPlan, PlanItem};
pub use venue::{ExternalEvent, MapMarker, Venue};
pub use vibe::Vibe;
