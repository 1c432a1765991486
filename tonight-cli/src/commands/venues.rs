//! Venues command - browse the catalogue by vibe

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use tonight_core::venue::{filter_venues, load_events, load_venues, map_markers, upcoming_events};
use tonight_core::{Config, ExternalEvent, Vibe};

/// List venues, upcoming events, or map markers
#[derive(Args, Debug)]
pub struct VenuesArgs {
    /// Only show venues with this vibe
    #[arg(short, long)]
    pub mood: Option<Vibe>,

    /// External events export (JSON array); overrides the configured file
    #[arg(short, long, value_name = "FILE")]
    pub events: Option<PathBuf>,

    /// Print map markers as JSON instead of a listing
    #[arg(long)]
    pub map: bool,
}

impl VenuesArgs {
    /// Execute the venues command
    pub fn execute(&self, verbose: bool, config: &Config) -> anyhow::Result<()> {
        let catalogue = config.venues.catalogue.as_ref().context(
            "No venue catalogue configured (use --venues, TONIGHT_VENUES_FILE, or [venues] catalogue)",
        )?;
        let venues = load_venues(catalogue)
            .with_context(|| format!("Failed to load venues from {}", catalogue.display()))?;

        let events = match self.events.as_ref().or(config.venues.events.as_ref()) {
            Some(path) => load_events(path)
                .with_context(|| format!("Failed to load events from {}", path.display()))?,
            None => Vec::new(),
        };

        let filtered = filter_venues(&venues, self.mood);
        let upcoming: Vec<ExternalEvent> = upcoming_events(&events, chrono::Utc::now())
            .into_iter()
            .cloned()
            .collect();

        if verbose {
            tracing::info!(
                venues = venues.len(),
                matched = filtered.len(),
                events = events.len(),
                upcoming = upcoming.len(),
                mood = ?self.mood,
                "Filtered catalogue"
            );
        }

        if self.map {
            let markers = map_markers(&filtered, &venues, &upcoming);
            println!("{}", serde_json::to_string_pretty(&markers)?);
            return Ok(());
        }

        match self.mood {
            Some(vibe) => println!("{} {} venues", vibe.icon(), vibe),
            None => println!("Venues"),
        }
        println!();

        if filtered.is_empty() {
            println!("  (no venues match this vibe)");
        }
        for venue in &filtered {
            println!("  {} [{}]", venue.name, venue.vibe_tags.join(", "));
            if verbose {
                if let Some(story) = &venue.story {
                    println!("    {}", story);
                }
            }
        }

        if !upcoming.is_empty() {
            println!();
            println!("Upcoming events");
            println!();
            for event in &upcoming {
                println!(
                    "  {}  {}",
                    event.start_datetime.format("%Y-%m-%d %H:%M"),
                    event.event_title
                );
                if let Some(venue) = &event.venue_name {
                    println!("    at {}", venue);
                }
            }
        }

        Ok(())
    }
}
