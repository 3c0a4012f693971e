//! Clothing suggestions by temperature
//!
//! A day temperature maps to a season, and each season has a fixed list of
//! clothing to suggest.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Season {
    Winter,
    Fall,
    Spring,
    Summer,
}

impl Season {
    /// Classify a day temperature in whole degrees Celsius
    #[must_use]
    pub fn from_celsius(celsius: i32) -> Self {
        match celsius {
            i32::MIN..=4 => Self::Winter,
            5..=14 => Self::Fall,
            15..=22 => Self::Spring,
            _ => Self::Summer,
        }
    }

    /// Clothing for this season, outermost layer first
    #[must_use]
    pub fn clothing(&self) -> &'static [&'static str] {
        match self {
            Self::Winter => &[
                "Insulated parka",
                "Wool sweater",
                "Thermal base layer",
                "Lined pants",
                "Winter boots",
                "Toque",
                "Gloves",
                "Scarf",
            ],
            Self::Fall => &[
                "Light jacket",
                "Hoodie",
                "Long-sleeve shirt",
                "Jeans",
                "Sneakers",
            ],
            Self::Spring => &["Windbreaker", "T-shirt", "Chinos", "Sneakers"],
            Self::Summer => &["T-shirt", "Shorts", "Sandals", "Sunglasses", "Sun hat"],
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Winter => "Winter",
            Self::Fall => "Fall",
            Self::Spring => "Spring",
            Self::Summer => "Summer",
        };
        f.write_str(name)
    }
}

/// What to wear for a given day temperature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutfitSuggestion {
    pub season: Season,
    pub celsius: i32,
    pub items: Vec<String>,
}

impl OutfitSuggestion {
    #[must_use]
    pub fn for_celsius(celsius: i32) -> Self {
        let season = Season::from_celsius(celsius);
        Self {
            season,
            celsius,
            items: season.clothing().iter().map(ToString::to_string).collect(),
        }
    }

    /// Suggestion for an unrounded temperature
    #[must_use]
    pub fn for_temperature(temperature: f64) -> Self {
        Self::for_celsius(temperature.round() as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(-30, Season::Winter)]
    #[case(4, Season::Winter)]
    #[case(5, Season::Fall)]
    #[case(14, Season::Fall)]
    #[case(15, Season::Spring)]
    #[case(22, Season::Spring)]
    #[case(23, Season::Summer)]
    #[case(40, Season::Summer)]
    fn test_season_thresholds(#[case] celsius: i32, #[case] season: Season) {
        assert_eq!(Season::from_celsius(celsius), season);
    }

    #[test]
    fn test_suggestion_rounds_temperature() {
        let suggestion = OutfitSuggestion::for_temperature(4.5);
        assert_eq!(suggestion.celsius, 5);
        assert_eq!(suggestion.season, Season::Fall);
        assert_eq!(suggestion.items[0], "Light jacket");
    }

    #[test]
    fn test_every_season_has_clothing() {
        for season in [Season::Winter, Season::Fall, Season::Spring, Season::Summer] {
            assert!(!season.clothing().is_empty(), "{season} has no clothing");
        }
    }
}
