//! Parse command - turn a generated plan into structured steps

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use tonight_core::{parse_plan, PlanDisplay, PlanResponse};

/// Parse a generated plan and display it
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Markdown plan file (reads stdin when omitted or "-")
    pub file: Option<PathBuf>,

    /// Print the parsed plan as JSON
    #[arg(long)]
    pub json: bool,

    /// Input is the generation function's JSON response, not Markdown
    #[arg(short, long)]
    pub response: bool,

    /// Show each step's full text instead of its teaser
    #[arg(short, long)]
    pub full: bool,
}

impl ParseArgs {
    /// Execute the parse command
    pub fn execute(&self, verbose: bool) -> anyhow::Result<()> {
        let input = self.read_input()?;

        let markdown = if self.response {
            PlanResponse::from_json(&input)
                .context("Failed to read generation response")?
                .into_plan()?
        } else {
            input
        };

        let plan = parse_plan(&markdown);

        if verbose {
            tracing::info!(
                title = %plan.title,
                items = plan.items.len(),
                has_tips = !plan.tips_text.is_empty(),
                has_outro = !plan.outro_text.is_empty(),
                "Parsed plan"
            );
        }

        if self.json {
            println!("{}", serde_json::to_string_pretty(&plan)?);
        } else {
            print!(
                "{}",
                PlanDisplay::new(&plan, &markdown).with_full_text(self.full)
            );
        }

        Ok(())
    }

    fn read_input(&self) -> anyhow::Result<String> {
        match &self.file {
            Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display())),
            _ => {
                let mut input = String::new();
                std::io::stdin()
                    .read_to_string(&mut input)
                    .context("Failed to read stdin")?;
                Ok(input)
            }
        }
    }
}
