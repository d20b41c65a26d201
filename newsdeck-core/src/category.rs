//! News category definitions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported news categories
///
/// The standard categories are served by every provider. The extended ones
/// (politics through weather) are only available from NewsData.io.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    General,
    Business,
    Entertainment,
    Health,
    Science,
    Sports,
    Technology,
    World,
    Politics,
    Crime,
    Environment,
    Education,
    Lifestyle,
    Opinion,
    Weather,
}

impl Category {
    /// All categories, standard first
    pub const ALL: [Category; 15] = [
        Category::General,
        Category::Business,
        Category::Entertainment,
        Category::Health,
        Category::Science,
        Category::Sports,
        Category::Technology,
        Category::World,
        Category::Politics,
        Category::Crime,
        Category::Environment,
        Category::Education,
        Category::Lifestyle,
        Category::Opinion,
        Category::Weather,
    ];

    /// The lowercase identifier providers expect in query strings
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::General => "general",
            Category::Business => "business",
            Category::Entertainment => "entertainment",
            Category::Health => "health",
            Category::Science => "science",
            Category::Sports => "sports",
            Category::Technology => "technology",
            Category::World => "world",
            Category::Politics => "politics",
            Category::Crime => "crime",
            Category::Environment => "environment",
            Category::Education => "education",
            Category::Lifestyle => "lifestyle",
            Category::Opinion => "opinion",
            Category::Weather => "weather",
        }
    }

    /// True for categories only NewsData.io serves
    pub fn is_extended(&self) -> bool {
        matches!(
            self,
            Category::Politics
                | Category::Crime
                | Category::Environment
                | Category::Education
                | Category::Lifestyle
                | Category::Opinion
                | Category::Weather
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .find(|c| c.as_str() == s.to_lowercase())
            .copied()
            .ok_or_else(|| format!("Unknown category: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn parses_standard_and_extended() {
        assert_eq!(Category::from_str("business").unwrap(), Category::Business);
        assert_eq!(Category::from_str("Weather").unwrap(), Category::Weather);
        assert!(Category::from_str("astrology").is_err());
    }

    #[test]
    fn extended_flag_matches_newsdata_set() {
        assert!(!Category::General.is_extended());
        assert!(!Category::Technology.is_extended());
        assert!(Category::Politics.is_extended());
        assert!(Category::Weather.is_extended());
        assert_eq!(Category::ALL.iter().filter(|c| c.is_extended()).count(), 7);
    }

    #[test]
    fn display_round_trips() {
        for category in Category::ALL {
            assert_eq!(Category::from_str(&category.to_string()).unwrap(), category);
        }
    }
}
