//! Vibe (mood) definitions
//!
//! Vibes tag venues in the catalogue and bias plan generation. The set is
//! closed; the hosted database stores them as text tags.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Error;

/// A mood a user can pick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vibe {
    Alive,
    Romantic,
    Peaceful,
    Energetic,
    Chill,
    Mysterious,
    Adventurous,
    Intellectual,
}

impl Vibe {
    /// Get all vibes in picker order
    pub fn all() -> &'static [Vibe] {
        &[
            Vibe::Alive,
            Vibe::Romantic,
            Vibe::Peaceful,
            Vibe::Energetic,
            Vibe::Chill,
            Vibe::Mysterious,
            Vibe::Adventurous,
            Vibe::Intellectual,
        ]
    }

    /// Get the display name for this vibe
    pub fn name(&self) -> &'static str {
        match self {
            Vibe::Alive => "Alive",
            Vibe::Romantic => "Romantic",
            Vibe::Peaceful => "Peaceful",
            Vibe::Energetic => "Energetic",
            Vibe::Chill => "Chill",
            Vibe::Mysterious => "Mysterious",
            Vibe::Adventurous => "Adventurous",
            Vibe::Intellectual => "Intellectual",
        }
    }

    /// Terminal icon for the mood picker
    pub fn icon(&self) -> &'static str {
        match self {
            Vibe::Alive => "⭐",
            Vibe::Romantic => "❤️",
            Vibe::Peaceful => "⚪",
            Vibe::Energetic => "⏫",
            Vibe::Chill => "🕒",
            Vibe::Mysterious => "🕶️",
            Vibe::Adventurous => "🧭",
            Vibe::Intellectual => "💡",
        }
    }
}

impl fmt::Display for Vibe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Vibe {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Vibe::all()
            .iter()
            .find(|v| v.name().eq_ignore_ascii_case(wanted))
            .copied()
            .ok_or_else(|| {
                let known: Vec<_> = Vibe::all().iter().map(Vibe::name).collect();
                Error::InvalidInput(format!(
                    "Unknown vibe '{}'. Valid vibes: {}",
                    s,
                    known.join(", ")
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("romantic".parse::<Vibe>().unwrap(), Vibe::Romantic);
        assert_eq!(" CHILL ".parse::<Vibe>().unwrap(), Vibe::Chill);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "sleepy".parse::<Vibe>().unwrap_err();
        assert!(err.to_string().contains("Unknown vibe 'sleepy'"));
        assert!(err.to_string().contains("Mysterious"));
    }

    #[test]
    fn test_serde_uses_display_names() {
        let json = serde_json::to_string(&Vibe::Adventurous).unwrap();
        assert_eq!(json, "\"Adventurous\"");
        let vibes: Vec<Vibe> = serde_json::from_str(r#"["Alive", "Peaceful"]"#).unwrap();
        assert_eq!(vibes, vec![Vibe::Alive, Vibe::Peaceful]);
    }
}
