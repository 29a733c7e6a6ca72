//! Start-luck span from the distance to the governing solar term.
//!
//! Every day between birth and the nearest 節 counts as 120 real days, so
//! three days make about one year (360 days, reported as 12 months).
//! Calendars that only report the raw distance can be turned into a
//! [`StartLuck`] with this.

use serde::Serialize;

use super::types::StartLuck;

pub const MINUTES_PER_DAY: f64 = 1440.0;

/// Real days represented by one day of distance.
pub const REAL_DAYS_PER_DAY: f64 = 120.0;

/// Span broken into years, 30-day months and days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetabolicSpan {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

impl MetabolicSpan {
    /// Start luck at `years` of age, in `birth_year + years`; `None` if that
    /// year does not fit in `i32`.
    pub fn start_luck(&self, birth_year: i32) -> Option<StartLuck> {
        let year = birth_year.checked_add(i32::try_from(self.years).ok()?)?;
        Some(StartLuck {
            age: self.years,
            year,
        })
    }
}

/// Convert a birth-to-solar-term distance (minutes, either sign) into a span.
///
/// Components saturate at `u32::MAX`; a NaN distance gives a zero span.
pub fn metabolic_span(diff_minutes: f64) -> MetabolicSpan {
    let real_days = diff_minutes.abs() / MINUTES_PER_DAY * REAL_DAYS_PER_DAY;
    let years = (real_days / 365.0).floor();
    let rest = real_days % 365.0;
    MetabolicSpan {
        years: years as u32,
        months: (rest / 30.0).floor() as u32,
        days: (rest % 30.0).floor() as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_days_is_twelve_months() {
        // 3 days → 360 real days
        let s = metabolic_span(3.0 * MINUTES_PER_DAY);
        assert_eq!(s, MetabolicSpan { years: 0, months: 12, days: 0 });
    }

    #[test]
    fn ten_days() {
        // 1200 real days = 3y (1095) + 105 → 3 months 15 days
        let s = metabolic_span(10.0 * MINUTES_PER_DAY);
        assert_eq!(s, MetabolicSpan { years: 3, months: 3, days: 15 });
        assert_eq!(s.start_luck(1990), Some(StartLuck { age: 3, year: 1993 }));
    }

    #[test]
    fn sign_is_ignored() {
        assert_eq!(metabolic_span(-14400.0), metabolic_span(14400.0));
    }

    #[test]
    fn start_year_overflow_is_none() {
        let s = MetabolicSpan {
            years: 10,
            months: 0,
            days: 0,
        };
        assert_eq!(s.start_luck(i32::MAX - 5), None);
        let s = MetabolicSpan {
            years: u32::MAX,
            months: 0,
            days: 0,
        };
        assert_eq!(s.start_luck(0), None);
    }

    #[test]
    fn huge_distance_saturates() {
        let s = metabolic_span(f64::MAX);
        assert_eq!(s.years, u32::MAX);
        assert_eq!(s.start_luck(1990), None);
    }

    #[test]
    fn zero_distance() {
        assert_eq!(metabolic_span(0.0), MetabolicSpan { years: 0, months: 0, days: 0 });
    }
}
