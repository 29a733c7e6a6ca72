//! Pillars (柱), the four-pillar chart, and the sexagenary (六十甲子) cycle.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::branch::EarthlyBranch;
use crate::error::BaziError;
use crate::stem::HeavenlyStem;

/// Length of the sexagenary cycle.
pub const SEXAGENARY_CYCLE: u8 = 60;

/// Reference epoch: CE 1984 = 甲子 (index 0).
pub const SEXAGENARY_EPOCH_YEAR: i32 = 1984;

/// A stem/branch pair.
///
/// Any combination is representable. Only the 60 parity-matched pairs occur
/// in the sexagenary cycle; see [`Pillar::sexagenary_index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pillar {
    pub stem: HeavenlyStem,
    pub branch: EarthlyBranch,
}

impl Pillar {
    pub const fn new(stem: HeavenlyStem, branch: EarthlyBranch) -> Self {
        Self { stem, branch }
    }

    /// Advance (positive) or retreat (negative) stem mod 10 and branch mod 12.
    pub const fn offset(self, n: i32) -> Self {
        Self {
            stem: self.stem.offset(n),
            branch: self.branch.offset(n),
        }
    }

    /// Position in the 60-cycle, or `None` for a parity-mismatched pair.
    ///
    /// Solves n ≡ stem (mod 10), n ≡ branch (mod 12); the solution is
    /// `(6·stem − 5·branch) mod 60` whenever stem and branch share parity.
    pub const fn sexagenary_index(self) -> Option<u8> {
        let s = self.stem.index() as i32;
        let b = self.branch.index() as i32;
        if (s - b) % 2 != 0 {
            return None;
        }
        Some((6 * s - 5 * b).rem_euclid(SEXAGENARY_CYCLE as i32) as u8)
    }

    /// Pillar at a position in the 60-cycle; `n` is taken mod 60.
    pub const fn from_sexagenary_index(n: u32) -> Self {
        let n = n % SEXAGENARY_CYCLE as u32;
        Self {
            stem: crate::stem::ALL_STEMS[(n % 10) as usize],
            branch: crate::branch::ALL_BRANCHES[(n % 12) as usize],
        }
    }
}

impl Display for Pillar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}

impl FromStr for Pillar {
    type Err = BaziError;

    /// Parses a two-character ganzhi such as "甲子".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(st), Some(br), None) => Ok(Self {
                stem: HeavenlyStem::try_from(st)?,
                branch: EarthlyBranch::try_from(br)?,
            }),
            _ => Err(BaziError::InvalidPillar(s.to_string())),
        }
    }
}

/// Year pillar for a CE year (sexagenary year, epoch 1984 = 甲子).
pub fn year_pillar(ce_year: i32) -> Pillar {
    let offset = (i64::from(ce_year) - i64::from(SEXAGENARY_EPOCH_YEAR))
        .rem_euclid(i64::from(SEXAGENARY_CYCLE)) as u32;
    Pillar::from_sexagenary_index(offset)
}

/// The four pillars of a birth chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl FourPillars {
    pub const fn new(year: Pillar, month: Pillar, day: Pillar, hour: Pillar) -> Self {
        Self {
            year,
            month,
            day,
            hour,
        }
    }

    /// Parse four ganzhi strings (year, month, day, hour).
    pub fn parse(year: &str, month: &str, day: &str, hour: &str) -> Result<Self, BaziError> {
        Ok(Self {
            year: year.parse()?,
            month: month.parse()?,
            day: day.parse()?,
            hour: hour.parse()?,
        })
    }

    /// The day stem (日主), reference point for Ten Gods.
    pub const fn day_master(&self) -> HeavenlyStem {
        self.day.stem
    }

    /// Pillars in year, month, day, hour order.
    pub const fn pillars(&self) -> [Pillar; 4] {
        [self.year, self.month, self.day, self.hour]
    }

    pub const fn stems(&self) -> [HeavenlyStem; 4] {
        [self.year.stem, self.month.stem, self.day.stem, self.hour.stem]
    }

    pub const fn branches(&self) -> [EarthlyBranch; 4] {
        [
            self.year.branch,
            self.month.branch,
            self.day.branch,
            self.hour.branch,
        ]
    }
}

impl Display for FourPillars {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} {}", self.year, self.month, self.day, self.hour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ganzhi() {
        let p: Pillar = "丙寅".parse().unwrap();
        assert_eq!(p, Pillar::new(HeavenlyStem::Bing, EarthlyBranch::Yin));
        assert_eq!(p.to_string(), "丙寅");
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!(
            "甲".parse::<Pillar>(),
            Err(BaziError::InvalidPillar("甲".into()))
        );
        assert_eq!(
            "甲子丑".parse::<Pillar>(),
            Err(BaziError::InvalidPillar("甲子丑".into()))
        );
        assert_eq!(
            "子甲".parse::<Pillar>(),
            Err(BaziError::InvalidStem("子".into()))
        );
        assert_eq!(
            "甲甲".parse::<Pillar>(),
            Err(BaziError::InvalidBranch("甲".into()))
        );
    }

    #[test]
    fn sexagenary_round_trip() {
        for n in 0..60u32 {
            let p = Pillar::from_sexagenary_index(n);
            assert_eq!(p.sexagenary_index(), Some(n as u8));
        }
    }

    #[test]
    fn sexagenary_known_positions() {
        assert_eq!("甲子".parse::<Pillar>().unwrap().sexagenary_index(), Some(0));
        assert_eq!("癸亥".parse::<Pillar>().unwrap().sexagenary_index(), Some(59));
        assert_eq!("甲戌".parse::<Pillar>().unwrap().sexagenary_index(), Some(10));
    }

    #[test]
    fn mismatched_parity_has_no_index() {
        assert_eq!("庚酉".parse::<Pillar>().unwrap().sexagenary_index(), None);
    }

    #[test]
    fn offset_moves_stem_and_branch_independently() {
        let p: Pillar = "甲子".parse().unwrap();
        assert_eq!(p.offset(1).to_string(), "乙丑");
        assert_eq!(p.offset(-1).to_string(), "癸亥");
        assert_eq!(p.offset(12).to_string(), "丙子");
    }

    #[test]
    fn year_pillar_epoch() {
        assert_eq!(year_pillar(1984).to_string(), "甲子");
        assert_eq!(year_pillar(1990).to_string(), "庚午");
        assert_eq!(year_pillar(2024).to_string(), "甲辰");
        assert_eq!(year_pillar(1983).to_string(), "癸亥");
    }

    #[test]
    fn year_pillar_at_i32_limits() {
        assert_eq!(year_pillar(i32::MAX).to_string(), "丁卯");
        assert_eq!(year_pillar(i32::MIN).to_string(), "壬子");
    }

    #[test]
    fn four_pillars_accessors() {
        let fp = FourPillars::parse("甲子", "丙寅", "戊辰", "庚酉").unwrap();
        assert_eq!(fp.day_master(), HeavenlyStem::Wu);
        assert_eq!(fp.branches()[1], EarthlyBranch::Yin);
        assert_eq!(fp.to_string(), "甲子 丙寅 戊辰 庚酉");
    }
}
