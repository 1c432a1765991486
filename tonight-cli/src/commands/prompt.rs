//! Prompt command - show what would be sent to the model

use clap::Args;
use tonight_core::generation::system_prompt;
use tonight_core::{ChatRequest, Config, PlanRequest, Vibe};

/// Build the plan generation prompts
#[derive(Args, Debug)]
pub struct PromptArgs {
    /// Budget (defaults to the configured budget)
    #[arg(short, long)]
    pub budget: Option<String>,

    /// Time of night (defaults to the configured time)
    #[arg(short, long)]
    pub time: Option<String>,

    /// Number of people (defaults to the configured party size)
    #[arg(short, long)]
    pub people: Option<u32>,

    /// Vibe to aim for (repeatable)
    #[arg(long = "vibe", value_name = "VIBE")]
    pub vibes: Vec<Vibe>,

    /// Extra wishes passed through to the model
    #[arg(short, long)]
    pub details: Option<String>,

    /// Print the chat-completion request body as JSON
    #[arg(long)]
    pub json: bool,
}

impl PromptArgs {
    /// Execute the prompt command
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let mut request = PlanRequest::from_defaults(&config.defaults).with_vibes(self.vibes.clone());
        if let Some(budget) = &self.budget {
            request.budget = budget.clone();
        }
        if let Some(time) = &self.time {
            request.time = time.clone();
        }
        if let Some(people) = self.people {
            request.num_people = people;
        }
        if let Some(details) = &self.details {
            request = request.with_details(details.as_str());
        }

        let chat = ChatRequest::from_request(&request, &config.generation)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&chat)?);
            return Ok(());
        }

        println!("Model: {}", chat.model);
        println!();
        println!("System:");
        println!("  {}", system_prompt(&config.generation.city));
        println!();
        println!("User:");
        for line in request.user_prompt(&config.generation.city).lines() {
            println!("  {}", line);
        }

        Ok(())
    }
}
