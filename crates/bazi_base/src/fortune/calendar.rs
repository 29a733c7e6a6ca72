//! Lunar-calendar collaborator and start-luck (起運) lookup.
//!
//! Solar/lunar conversion and the astronomical start-luck computation live
//! outside this crate. Callers plug them in through [`LunarCalendarProvider`];
//! a failure there is an expected condition and surfaces as `None`.

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::pillar::Pillar;
use crate::stem::HeavenlyStem;

use super::direction::fortune_direction;
use super::types::{FortuneDirection, Gender, StartLuck};

/// Lunar-date view of a birth moment, as supplied by a calendar library.
pub trait LunarDate {
    /// Year ganzhi as text, e.g. "庚午". Only the stem is read.
    fn year_ganzhi(&self) -> &str;

    /// Start-luck age and year for the given direction, or `None` when the
    /// underlying library cannot produce a precise value.
    fn start_luck(&self, direction: FortuneDirection) -> Option<StartLuck>;
}

/// Converts Gregorian birth dates into [`LunarDate`] views.
pub trait LunarCalendarProvider {
    type Date: LunarDate;

    fn lunar_from_solar(&self, date: NaiveDate) -> Option<Self::Date>;
}

/// Start luck for a lunar date.
///
/// Picks the direction from the lunar year stem and gender, then asks the
/// calendar. Returns `None` (with a warning) if the year stem is unreadable
/// or the calendar has no answer.
pub fn start_luck<D: LunarDate + ?Sized>(lunar: &D, gender: Gender) -> Option<StartLuck> {
    let ganzhi = lunar.year_ganzhi();
    let year_stem = match ganzhi.chars().next().map(HeavenlyStem::try_from) {
        Some(Ok(stem)) => stem,
        Some(Err(e)) => {
            warn!(ganzhi, error = %e, "calendar returned an unreadable year stem");
            return None;
        }
        None => {
            warn!("calendar returned an empty year ganzhi");
            return None;
        }
    };

    let direction = fortune_direction(year_stem, gender);
    debug!(%year_stem, %gender, %direction, "start luck direction");

    let result = lunar.start_luck(direction);
    if result.is_none() {
        warn!(ganzhi, %gender, %direction, "calendar could not compute start luck");
    }
    result
}

/// A calendar that answers every date with the same fixed values.
///
/// Useful when start-luck figures come from elsewhere (user input, a stored
/// chart) and in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticLunarCalendar {
    year: Pillar,
    start: Option<StartLuck>,
}

impl StaticLunarCalendar {
    pub const fn new(year: Pillar, start: Option<StartLuck>) -> Self {
        Self { year, start }
    }
}

/// The [`LunarDate`] produced by [`StaticLunarCalendar`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticLunarDate {
    year_ganzhi: String,
    start: Option<StartLuck>,
}

impl StaticLunarDate {
    pub fn new(year_ganzhi: impl Into<String>, start: Option<StartLuck>) -> Self {
        Self {
            year_ganzhi: year_ganzhi.into(),
            start,
        }
    }
}

impl LunarDate for StaticLunarDate {
    fn year_ganzhi(&self) -> &str {
        &self.year_ganzhi
    }

    fn start_luck(&self, _direction: FortuneDirection) -> Option<StartLuck> {
        self.start
    }
}

impl LunarCalendarProvider for StaticLunarCalendar {
    type Date = StaticLunarDate;

    fn lunar_from_solar(&self, _date: NaiveDate) -> Option<StaticLunarDate> {
        Some(StaticLunarDate::new(self.year.to_string(), self.start))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct DirectionEcho;

    impl LunarDate for DirectionEcho {
        fn year_ganzhi(&self) -> &str {
            "庚午"
        }

        fn start_luck(&self, direction: FortuneDirection) -> Option<StartLuck> {
            let age = match direction {
                FortuneDirection::Forward => 3,
                FortuneDirection::Backward => 7,
            };
            Some(StartLuck { age, year: 1990 + age as i32 })
        }
    }

    #[test]
    fn direction_reaches_calendar() {
        // 庚 is Yang: male forward, female backward.
        assert_eq!(start_luck(&DirectionEcho, Gender::Male).unwrap().age, 3);
        assert_eq!(start_luck(&DirectionEcho, Gender::Female).unwrap().age, 7);
    }

    #[test]
    fn unreadable_stem_is_none() {
        let d = StaticLunarDate::new("??", Some(StartLuck { age: 1, year: 2000 }));
        assert_eq!(start_luck(&d, Gender::Male), None);
        let d = StaticLunarDate::new("", Some(StartLuck { age: 1, year: 2000 }));
        assert_eq!(start_luck(&d, Gender::Male), None);
    }

    #[test]
    fn missing_start_is_none() {
        let d = StaticLunarDate::new("甲子", None);
        assert_eq!(start_luck(&d, Gender::Female), None);
    }

    #[test]
    fn static_calendar_echoes_values() {
        let start = StartLuck { age: 5, year: 1995 };
        let cal = StaticLunarCalendar::new("庚午".parse().unwrap(), Some(start));
        let date = NaiveDate::from_ymd_opt(1990, 5, 15).unwrap();
        let lunar = cal.lunar_from_solar(date).unwrap();
        assert_eq!(lunar.year_ganzhi(), "庚午");
        assert_eq!(start_luck(&lunar, Gender::Male), Some(start));
    }
}
