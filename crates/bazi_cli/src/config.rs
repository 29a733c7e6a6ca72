use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use bazi_base::fortune::{DEFAULT_ANNUAL_YEARS, DEFAULT_CYCLE_COUNT};
use bazi_base::{CycleOrigin, FortuneConfig, FourPillars, Gender, StartLuck, metabolic_span};
use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

/// Oldest start-luck age accepted from user input.
pub const MAX_START_AGE: u32 = 150;
/// Most decennial cycles a single request may ask for.
pub const MAX_CYCLE_COUNT: usize = 20;
/// Longest annual-luck table a single request may ask for.
pub const MAX_ANNUAL_YEARS: usize = 200;
/// Calendar years accepted from user input.
pub const YEAR_RANGE: std::ops::RangeInclusive<i32> = -9999..=9999;

/// A chart file.
///
/// ```toml
/// [chart]
/// year = "庚午"
/// month = "辛巳"
/// day = "庚辰"
/// hour = "癸未"
/// gender = "male"
/// birth = "1990-05-15"
///
/// [start]
/// age = 8
///
/// [fortune]
/// cycle_count = 8
/// origin = "month_pillar"
/// ```
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BaziConfig {
    pub chart: ChartToml,

    /// Start-luck figures; without them no decennial cycles are produced.
    #[serde(default)]
    pub start: StartToml,

    #[serde(default)]
    pub fortune: FortuneToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChartToml {
    pub year: String,
    pub month: String,
    pub day: String,
    pub hour: String,
    pub gender: Gender,
    pub birth: NaiveDate,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct StartToml {
    pub age: Option<u32>,
    /// Defaults to birth year + age.
    pub year: Option<i32>,
    /// Birth-to-solar-term distance; used when `age` is absent.
    pub jie_minutes: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FortuneToml {
    #[serde(default = "default_cycle_count")]
    pub cycle_count: usize,
    #[serde(default)]
    pub origin: CycleOrigin,
    #[serde(default = "default_annual_years")]
    pub annual_years: usize,
    /// First year of the annual table; defaults to the birth year.
    #[serde(default)]
    pub annual_start: Option<i32>,
}

impl Default for FortuneToml {
    fn default() -> Self {
        Self {
            cycle_count: default_cycle_count(),
            origin: CycleOrigin::default(),
            annual_years: default_annual_years(),
            annual_start: None,
        }
    }
}

fn default_cycle_count() -> usize {
    DEFAULT_CYCLE_COUNT
}
fn default_annual_years() -> usize {
    DEFAULT_ANNUAL_YEARS
}

impl BaziConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let cfg: Self = toml::from_str(&text)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))?;
        cfg.validate()
            .with_context(|| format!("invalid config: {}", path.display()))?;
        Ok(cfg)
    }

    /// Range checks serde cannot express.
    pub fn validate(&self) -> Result<()> {
        check_year("[chart].birth", self.chart.birth.year())?;
        if let Some(y) = self.start.year {
            check_year("[start].year", y)?;
        }
        if let Some(y) = self.fortune.annual_start {
            check_year("[fortune].annual_start", y)?;
        }
        check_fortune(&FortuneConfig::from(&self.fortune))
    }

    pub fn pillars(&self) -> Result<FourPillars> {
        let c = &self.chart;
        FourPillars::parse(&c.year, &c.month, &c.day, &c.hour)
            .context("invalid pillar in [chart]")
    }
}

impl StartToml {
    pub fn is_empty(&self) -> bool {
        self.age.is_none() && self.year.is_none() && self.jie_minutes.is_none()
    }

    /// Resolve to a [`StartLuck`], or `None` when nothing was given.
    pub fn resolve(&self, birth_year: i32) -> Result<Option<StartLuck>> {
        let start = match (self.age, self.jie_minutes, self.year) {
            (Some(_), Some(_), _) => bail!("give either a start age or jie_minutes, not both"),
            (None, Some(_), Some(_)) => bail!("start year cannot be combined with jie_minutes"),
            (None, None, Some(_)) => bail!("start year given without a start age"),
            (None, None, None) => return Ok(None),
            (Some(age), None, year) => {
                let year = match year {
                    Some(y) => y,
                    None => i32::try_from(age)
                        .ok()
                        .and_then(|a| birth_year.checked_add(a))
                        .ok_or_else(|| anyhow!("start age {age} out of range"))?,
                };
                StartLuck { age, year }
            }
            (None, Some(minutes), None) => metabolic_span(minutes)
                .start_luck(birth_year)
                .ok_or_else(|| anyhow!("jie_minutes {minutes} out of range"))?,
        };
        if start.age > MAX_START_AGE {
            bail!("start age {} exceeds {MAX_START_AGE}", start.age);
        }
        check_year("start year", start.year)?;
        Ok(Some(start))
    }
}

pub fn check_year(what: &str, year: i32) -> Result<()> {
    if !YEAR_RANGE.contains(&year) {
        bail!(
            "{what} {year} outside {}..={}",
            YEAR_RANGE.start(),
            YEAR_RANGE.end()
        );
    }
    Ok(())
}

pub fn check_fortune(f: &FortuneConfig) -> Result<()> {
    if f.cycle_count > MAX_CYCLE_COUNT {
        bail!("cycle count {} exceeds {MAX_CYCLE_COUNT}", f.cycle_count);
    }
    if f.annual_years > MAX_ANNUAL_YEARS {
        bail!("annual years {} exceeds {MAX_ANNUAL_YEARS}", f.annual_years);
    }
    Ok(())
}

impl From<&FortuneToml> for FortuneConfig {
    fn from(f: &FortuneToml) -> Self {
        FortuneConfig {
            cycle_count: f.cycle_count,
            origin: f.origin,
            annual_years: f.annual_years,
        }
    }
}
