//! Core types shared by the luck-pillar (大運) and annual-luck (流年) calculators.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::branch::EarthlyBranch;
use crate::element::FiveElement;
use crate::stem::HeavenlyStem;

/// Years covered by one decennial cycle.
pub const YEARS_PER_CYCLE: u32 = 10;

/// Default number of decennial cycles generated.
pub const DEFAULT_CYCLE_COUNT: usize = 8;

/// Default span of the annual-luck table.
pub const DEFAULT_ANNUAL_YEARS: usize = 30;

/// Gender of the chart owner; with the year stem it fixes the direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl Display for Gender {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" | "男" => Ok(Self::Male),
            "female" | "f" | "女" => Ok(Self::Female),
            other => Err(format!("unknown gender: {other:?} (expected male/female)")),
        }
    }
}

/// Direction in which cycles step away from the month pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FortuneDirection {
    /// 順行
    Forward,
    /// 逆行
    Backward,
}

impl FortuneDirection {
    /// +1 for forward, −1 for backward.
    pub const fn step(self) -> i32 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }

    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Forward => "順行",
            Self::Backward => "逆行",
        }
    }
}

impl Display for FortuneDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Forward => f.write_str("forward"),
            Self::Backward => f.write_str("backward"),
        }
    }
}

/// Where the first cycle sits relative to the month pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CycleOrigin {
    /// Cycle `i` is the month pillar offset by `i`; the first cycle repeats
    /// the month pillar.
    #[default]
    MonthPillar,
    /// Cycle `i` is the month pillar offset by `i + 1`.
    NextPillar,
}

impl CycleOrigin {
    pub(crate) const fn first_offset(self) -> i32 {
        match self {
            Self::MonthPillar => 0,
            Self::NextPillar => 1,
        }
    }
}

impl FromStr for CycleOrigin {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "month" | "month_pillar" => Ok(Self::MonthPillar),
            "next" | "next_pillar" => Ok(Self::NextPillar),
            other => Err(format!("unknown cycle origin: {other:?} (expected month/next)")),
        }
    }
}

/// Knobs for the fortune calculators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FortuneConfig {
    /// Number of decennial cycles.
    pub cycle_count: usize,
    pub origin: CycleOrigin,
    /// Number of annual-luck rows.
    pub annual_years: usize,
}

impl Default for FortuneConfig {
    fn default() -> Self {
        Self {
            cycle_count: DEFAULT_CYCLE_COUNT,
            origin: CycleOrigin::MonthPillar,
            annual_years: DEFAULT_ANNUAL_YEARS,
        }
    }
}

/// Age and calendar year at which the first cycle begins (起運).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StartLuck {
    pub age: u32,
    pub year: i32,
}

/// One ten-year luck pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecennialCycle {
    /// 1-based position in the sequence.
    pub index: u32,
    pub stem: HeavenlyStem,
    pub branch: EarthlyBranch,
    pub stem_element: FiveElement,
    pub branch_element: FiveElement,
    pub start_age: u32,
    /// Inclusive; always `start_age + 9`.
    pub end_age: u32,
    pub start_year: i32,
    /// Inclusive; always `start_year + 9`.
    pub end_year: i32,
}

impl DecennialCycle {
    /// Whether a calendar year falls inside the cycle.
    pub const fn contains_year(&self, year: i32) -> bool {
        self.start_year <= year && year <= self.end_year
    }
}

/// One year of annual luck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnualLuck {
    pub year: i32,
    /// Nominal age (虛歲): `year − birth_year + 1`.
    pub age: i32,
    pub stem: HeavenlyStem,
    pub branch: EarthlyBranch,
    pub stem_element: FiveElement,
    pub branch_element: FiveElement,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_parse() {
        assert_eq!("Male".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("女".parse::<Gender>().unwrap(), Gender::Female);
        assert!("x".parse::<Gender>().is_err());
    }

    #[test]
    fn direction_steps() {
        assert_eq!(FortuneDirection::Forward.step(), 1);
        assert_eq!(FortuneDirection::Backward.step(), -1);
        assert_eq!(FortuneDirection::Forward.chinese(), "順行");
        assert_eq!(FortuneDirection::Backward.chinese(), "逆行");
    }

    #[test]
    fn origin_offsets() {
        assert_eq!(CycleOrigin::default(), CycleOrigin::MonthPillar);
        assert_eq!(CycleOrigin::MonthPillar.first_offset(), 0);
        assert_eq!("next".parse::<CycleOrigin>().unwrap().first_offset(), 1);
    }

    #[test]
    fn default_config() {
        let c = FortuneConfig::default();
        assert_eq!(c.cycle_count, 8);
        assert_eq!(c.annual_years, 30);
    }
}
