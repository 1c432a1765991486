//! Display category for plan items
//!
//! Categories only pick an icon. Titles are matched by keyword, so two
//! wordings of the same activity may land in different categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Display category of a plan item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Restaurants, dinners, food stops
    Dining,
    /// Tours, walks, sightseeing
    Exploration,
    /// Bars, lounges, live music
    Nightlife,
    /// Shows and events
    Activity,
    /// Anything the keyword table doesn't recognize
    #[default]
    General,
}

/// Keyword table, tried in order. First category with a matching keyword wins.
const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Dining,
        &["dinner", "food", "eat", "restaurant", "cuisine"],
    ),
    (
        Category::Exploration,
        &[
            "tour",
            "visit",
            "explore",
            "ghost",
            "walk",
            "history",
            "sightseeing",
        ],
    ),
    (
        Category::Nightlife,
        &[
            "drinks",
            "bar",
            "lounge",
            "cocktails",
            "pub",
            "music",
            "live band",
        ],
    ),
    (Category::Activity, &["activity", "show", "event"]),
];

impl Category {
    /// Classify an item title by substring match against the keyword table
    pub fn classify(title: &str) -> Self {
        let lower = title.to_lowercase();
        CATEGORY_KEYWORDS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
            .map(|(category, _)| *category)
            .unwrap_or_default()
    }

    /// Get the short name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Category::Dining => "dining",
            Category::Exploration => "exploration",
            Category::Nightlife => "nightlife",
            Category::Activity => "activity",
            Category::General => "general",
        }
    }

    /// Terminal icon for this category
    pub fn icon(&self) -> &'static str {
        match self {
            Category::Dining => "🍽️",
            Category::Exploration => "📍",
            Category::Nightlife | Category::General => "⭐",
            Category::Activity => "🧭",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
