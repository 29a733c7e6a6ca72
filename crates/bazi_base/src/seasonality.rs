//! Seasonal strength (旺相休囚死) of the five elements.
//!
//! The month branch fixes the season. Each season ranks the five elements
//! with the coefficients 1.5 / 1.3 / 1.0 / 0.7 / 0.5.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::branch::EarthlyBranch;
use crate::element::FiveElement;
use crate::scores::ElementScores;

/// Season governed by a month branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
    /// The four earth months 辰戌丑未.
    Transitional,
}

/// All 5 seasons.
pub const ALL_SEASONS: [Season; 5] = [
    Season::Spring,
    Season::Summer,
    Season::Autumn,
    Season::Winter,
    Season::Transitional,
];

impl Season {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spring => "Spring",
            Self::Summer => "Summer",
            Self::Autumn => "Autumn",
            Self::Winter => "Winter",
            Self::Transitional => "Transitional",
        }
    }

    /// The element at full strength (1.5) in this season.
    pub const fn ruling_element(self) -> FiveElement {
        match self {
            Self::Spring => FiveElement::Wood,
            Self::Summer => FiveElement::Fire,
            Self::Autumn => FiveElement::Metal,
            Self::Winter => FiveElement::Water,
            Self::Transitional => FiveElement::Earth,
        }
    }
}

impl Display for Season {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Season of a month branch.
pub const fn season_from_branch(month_branch: EarthlyBranch) -> Season {
    use EarthlyBranch::*;
    match month_branch {
        Yin | Mao => Season::Spring,
        Si | Wu => Season::Summer,
        Shen | You => Season::Autumn,
        Hai | Zi => Season::Winter,
        Chen | Xu | Chou | Wei => Season::Transitional,
    }
}

/// Seasonal multiplier for an element.
pub const fn seasonality_coefficient(element: FiveElement, season: Season) -> f64 {
    use FiveElement::*;
    match (season, element) {
        (Season::Spring, Wood) => 1.5,
        (Season::Spring, Fire) => 1.3,
        (Season::Spring, Water) => 1.0,
        (Season::Spring, Earth) => 0.7,
        (Season::Spring, Metal) => 0.5,

        (Season::Summer, Fire) => 1.5,
        (Season::Summer, Earth) => 1.3,
        (Season::Summer, Wood) => 1.0,
        (Season::Summer, Metal) => 0.7,
        (Season::Summer, Water) => 0.5,

        (Season::Autumn, Metal) => 1.5,
        (Season::Autumn, Water) => 1.3,
        (Season::Autumn, Earth) => 1.0,
        (Season::Autumn, Wood) => 0.7,
        (Season::Autumn, Fire) => 0.5,

        (Season::Winter, Water) => 1.5,
        (Season::Winter, Wood) => 1.3,
        (Season::Winter, Metal) => 1.0,
        (Season::Winter, Fire) => 0.7,
        (Season::Winter, Earth) => 0.5,

        (Season::Transitional, Earth) => 1.5,
        (Season::Transitional, Metal) => 1.3,
        (Season::Transitional, Fire) => 1.0,
        (Season::Transitional, Water) => 0.7,
        (Season::Transitional, Wood) => 0.5,
    }
}

/// Coefficient row of a season as a score vector.
pub fn season_coefficients(season: Season) -> ElementScores {
    ElementScores::from_fn(|e| seasonality_coefficient(e, season))
}

/// Multiply each score by its coefficient for the month branch's season.
///
/// Pure elementwise product; no rounding.
pub fn apply_seasonality_adjustment(
    scores: &ElementScores,
    month_branch: EarthlyBranch,
) -> ElementScores {
    let season = season_from_branch(month_branch);
    scores.map(|e, v| v * seasonality_coefficient(e, season))
}
