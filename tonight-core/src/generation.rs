//! Plan generation payloads
//!
//! The app sends a [`PlanRequest`] to a serverless function, which wraps it
//! in a chat-completion request and answers with `{"plan": "..."}` or
//! `{"error": "..."}`. This module builds and reads those payloads; moving
//! them over the network is left to the caller.

use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::config::{DefaultsConfig, GenerationConfig};
use crate::{Error, Result, Vibe};

/// Layout the parser expects, appended to every user prompt
const FORMAT_INSTRUCTIONS: &str = "Format the plan in Markdown. Start with a title line such as \
\"### Your Nightly Quest: <name>\". Give each stop its own bold numbered heading on a line by \
itself, like \"**1. <stop>**\", followed by a short description. You may finish with a \
\"### Budget-Friendly Tips:\" section.";

/// What the user asked for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    /// Free-form budget ("$$", "moderate", "fancy")
    pub budget: String,
    /// Time of night ("evening", "late night")
    pub time: String,
    /// Party size; form inputs send it as a string
    #[serde(deserialize_with = "number_or_string")]
    pub num_people: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vibes: Vec<Vibe>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

fn number_or_string<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u32),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

impl PlanRequest {
    /// Create a request with no vibes or details
    pub fn new(budget: impl Into<String>, time: impl Into<String>, num_people: u32) -> Self {
        Self {
            budget: budget.into(),
            time: time.into(),
            num_people,
            vibes: Vec::new(),
            details: None,
        }
    }

    /// Create a request from configured defaults
    pub fn from_defaults(defaults: &DefaultsConfig) -> Self {
        Self::new(&defaults.budget, &defaults.time, defaults.people)
    }

    /// Set the vibes (builder pattern)
    pub fn with_vibes(mut self, vibes: Vec<Vibe>) -> Self {
        self.vibes = vibes;
        self
    }

    /// Set free-text details; blank text clears them
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        let details = details.into();
        self.details = (!details.trim().is_empty()).then_some(details);
        self
    }

    /// Check the request before building prompts from it
    pub fn validate(&self) -> Result<()> {
        if self.num_people == 0 {
            return Err(Error::InvalidInput(
                "Number of people must be at least 1".to_string(),
            ));
        }
        if self.budget.trim().is_empty() {
            return Err(Error::InvalidInput("Budget must not be empty".to_string()));
        }
        if self.time.trim().is_empty() {
            return Err(Error::InvalidInput(
                "Time of night must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Build the user prompt for a city
    pub fn user_prompt(&self, city: &str) -> String {
        let people = if self.num_people == 1 {
            "1 person".to_string()
        } else {
            format!("{} people", self.num_people)
        };

        let mut prompt = format!(
            "Generate a fun and unique night out plan in {} for {}, with a {} budget, for the {}. \
             Suggest 2-3 distinct venues or activities with brief, exciting descriptions. \
             The output should be a concise plan.",
            city,
            people,
            self.budget.trim(),
            self.time.trim()
        );

        if !self.vibes.is_empty() {
            let vibes: Vec<_> = self.vibes.iter().map(Vibe::name).collect();
            prompt.push_str(&format!(" The vibe we're after: {}.", vibes.join(", ")));
        }

        if let Some(details) = &self.details {
            prompt.push_str(&format!(" Additional details: {}", details.trim()));
        }

        prompt.push_str("\n\n");
        prompt.push_str(FORMAT_INSTRUCTIONS);
        prompt
    }
}

/// System prompt for plan generation
pub fn system_prompt(city: &str) -> String {
    format!(
        "You are a helpful assistant that generates exciting night out plans in {}. \
         Be concise and focus on actionable suggestions.",
        city
    )
}

/// Chat message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
}

/// A single chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

/// Chat-completion request body sent to the model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl ChatRequest {
    /// Build the completion request for a plan
    pub fn from_request(request: &PlanRequest, config: &GenerationConfig) -> Result<Self> {
        request.validate()?;

        let chat = Self {
            model: config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: ChatRole::System,
                    content: system_prompt(&config.city),
                },
                ChatMessage {
                    role: ChatRole::User,
                    content: request.user_prompt(&config.city),
                },
            ],
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        };

        debug!(
            model = %chat.model,
            people = request.num_people,
            vibes = request.vibes.len(),
            "Built chat request"
        );
        Ok(chat)
    }
}

/// Response envelope of the generation function
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanResponse {
    #[serde(default)]
    pub plan: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl PlanResponse {
    /// Parse a response body
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Extract the generated plan text
    ///
    /// A non-empty plan wins over an error message.
    pub fn into_plan(self) -> Result<String> {
        match (self.plan, self.error) {
            (Some(plan), _) if !plan.is_empty() => Ok(plan),
            (_, Some(error)) if !error.is_empty() => Err(Error::Generation(error)),
            _ => Err(Error::UnexpectedResponse),
        }
    }
}
