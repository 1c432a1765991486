//! Venue catalogue and external events
//!
//! Records mirror the hosted database's `venues` and `external_events`
//! tables as exported to JSON. Filtering happens in memory.

use std::path::Path;

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Result, Vibe};

/// Venues shown when no mood is selected
const DEFAULT_VENUE_COUNT: usize = 9;

/// Venues put on the map when the mood filter matches nothing
const MAP_FALLBACK_VENUE_COUNT: usize = 5;

/// Maximum number of upcoming events listed
const MAX_UPCOMING_EVENTS: usize = 50;

/// A nightlife venue from the catalogue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub id: String,
    pub name: String,
    /// Vibe tags as stored; unknown tags are kept but never match a mood
    #[serde(default, alias = "vibeTags")]
    pub vibe_tags: Vec<String>,
    #[serde(default)]
    pub story: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    pub lat: f64,
    pub lng: f64,
}

impl Venue {
    /// Whether this venue is tagged with the given vibe
    pub fn has_vibe(&self, vibe: Vibe) -> bool {
        self.vibe_tags.iter().any(|tag| tag == vibe.name())
    }
}

/// An event scraped from an external listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalEvent {
    pub id: String,
    pub event_title: String,
    #[serde(default)]
    pub event_description: Option<String>,
    pub event_type: String,
    pub start_datetime: DateTime<Utc>,
    #[serde(default)]
    pub end_datetime: Option<DateTime<Utc>>,
    #[serde(default)]
    pub venue_name: Option<String>,
    #[serde(default)]
    pub venue_address: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl ExternalEvent {
    /// One-line summary used as the map popup text
    pub fn summary(&self) -> String {
        let mut parts = vec![format!("Event Type: {}.", self.event_type)];
        if let Some(description) = self
            .event_description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
        {
            parts.push(format!("{}.", description.trim_end_matches('.')));
        }
        parts.push(format!(
            "Starts: {}.",
            self.start_datetime.format("%Y-%m-%d %H:%M UTC")
        ));
        if let Some(venue) = &self.venue_name {
            parts.push(format!("At: {}", venue));
        }
        parts.join(" ")
    }
}

/// What a map marker points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerKind {
    Venue,
    Event,
}

/// A point on the venue map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub story: Option<String>,
    pub kind: MarkerKind,
}

impl From<&Venue> for MapMarker {
    fn from(venue: &Venue) -> Self {
        Self {
            id: venue.id.clone(),
            name: venue.name.clone(),
            lat: venue.lat,
            lng: venue.lng,
            story: venue.story.clone(),
            kind: MarkerKind::Venue,
        }
    }
}

/// Load a venue catalogue export (a JSON array)
pub fn load_venues(path: &Path) -> Result<Vec<Venue>> {
    let contents = std::fs::read_to_string(path)?;
    let venues: Vec<Venue> = serde_json::from_str(&contents)?;
    debug!(path = %path.display(), count = venues.len(), "Loaded venues");
    Ok(venues)
}

/// Load an external events export (a JSON array)
pub fn load_events(path: &Path) -> Result<Vec<ExternalEvent>> {
    let contents = std::fs::read_to_string(path)?;
    let events: Vec<ExternalEvent> = serde_json::from_str(&contents)?;
    debug!(path = %path.display(), count = events.len(), "Loaded events");
    Ok(events)
}

/// Venues to show for a mood
///
/// Without a mood, the first few venues of the catalogue are shown.
pub fn filter_venues(venues: &[Venue], mood: Option<Vibe>) -> Vec<&Venue> {
    match mood {
        None => venues.iter().take(DEFAULT_VENUE_COUNT).collect(),
        Some(vibe) => venues.iter().filter(|v| v.has_vibe(vibe)).collect(),
    }
}

/// Events starting today (UTC) or later, soonest first
pub fn upcoming_events(events: &[ExternalEvent], now: DateTime<Utc>) -> Vec<&ExternalEvent> {
    let start_of_day = now.date_naive().and_time(NaiveTime::MIN).and_utc();

    let mut upcoming: Vec<_> = events
        .iter()
        .filter(|e| e.start_datetime >= start_of_day)
        .collect();
    upcoming.sort_by_key(|e| e.start_datetime);
    upcoming.truncate(MAX_UPCOMING_EVENTS);
    upcoming
}

/// Markers for the map: the filtered venues, then every located event
///
/// When the filter matched nothing, a handful of catalogue venues are shown
/// instead so the map is never bare.
pub fn map_markers(filtered: &[&Venue], all: &[Venue], events: &[ExternalEvent]) -> Vec<MapMarker> {
    let mut markers: Vec<MapMarker> = if filtered.is_empty() {
        all.iter()
            .take(MAP_FALLBACK_VENUE_COUNT)
            .map(MapMarker::from)
            .collect()
    } else {
        filtered.iter().map(|v| MapMarker::from(*v)).collect()
    };

    markers.extend(events.iter().filter_map(|event| match (event.lat, event.lng) {
        (Some(lat), Some(lng)) => Some(MapMarker {
            id: format!("event-{}", event.id),
            name: event.event_title.clone(),
            lat,
            lng,
            story: Some(event.summary()),
            kind: MarkerKind::Event,
        }),
        _ => None,
    }));

    markers
}
