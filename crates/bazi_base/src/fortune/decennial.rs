//! Decennial luck pillars (大運).
//!
//! Cycles step from the month pillar, stem mod 10 and branch mod 12, forward
//! or backward per [`fortune_direction`]. Each covers ten years starting from
//! the start-luck age and year.

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::pillar::{FourPillars, Pillar};

use super::calendar::{LunarCalendarProvider, start_luck};
use super::direction::fortune_direction;
use super::types::{
    CycleOrigin, DecennialCycle, FortuneConfig, FortuneDirection, Gender, StartLuck,
    YEARS_PER_CYCLE,
};

/// Generate `count` cycles from a known start.
///
/// Deterministic core of [`decennial_cycles`]; no calendar involved. The
/// sequence stops early, with a warning, at the first cycle whose age or
/// year would not fit in its integer type.
pub fn cycles_from_start(
    month: Pillar,
    direction: FortuneDirection,
    start: StartLuck,
    count: usize,
    origin: CycleOrigin,
) -> Vec<DecennialCycle> {
    let first = origin.first_offset();
    let cycles: Vec<DecennialCycle> = (0..count)
        .map_while(|i| cycle_at(month, direction, start, first, i))
        .collect();
    if cycles.len() < count {
        warn!(
            requested = count,
            generated = cycles.len(),
            start_age = start.age,
            start_year = start.year,
            "decennial cycles truncated at integer overflow"
        );
    }
    cycles
}

fn cycle_at(
    month: Pillar,
    direction: FortuneDirection,
    start: StartLuck,
    first: i32,
    i: usize,
) -> Option<DecennialCycle> {
    let n = u32::try_from(i).ok()?;
    let span = n.checked_mul(YEARS_PER_CYCLE)?;
    let last = YEARS_PER_CYCLE - 1;

    let start_age = start.age.checked_add(span)?;
    let end_age = start_age.checked_add(last)?;
    let start_year = start.year.checked_add(i32::try_from(span).ok()?)?;
    let end_year = start_year.checked_add(last as i32)?;

    let steps = i32::try_from(n).ok()?.checked_add(first)?;
    let pillar = month.offset(direction.step() * steps);
    Some(DecennialCycle {
        index: n.checked_add(1)?,
        stem: pillar.stem,
        branch: pillar.branch,
        stem_element: pillar.stem.element(),
        branch_element: pillar.branch.element(),
        start_age,
        end_age,
        start_year,
        end_year,
    })
}

/// Decennial cycles for a chart, with default origin.
///
/// Returns an empty vector when the calendar cannot supply start luck.
pub fn decennial_cycles<C: LunarCalendarProvider + ?Sized>(
    pillars: &FourPillars,
    birth: NaiveDate,
    gender: Gender,
    count: usize,
    calendar: &C,
) -> Vec<DecennialCycle> {
    let config = FortuneConfig {
        cycle_count: count,
        ..FortuneConfig::default()
    };
    decennial_cycles_with(pillars, birth, gender, &config, calendar)
}

/// Decennial cycles for a chart using the count and origin from `config`.
pub fn decennial_cycles_with<C: LunarCalendarProvider + ?Sized>(
    pillars: &FourPillars,
    birth: NaiveDate,
    gender: Gender,
    config: &FortuneConfig,
    calendar: &C,
) -> Vec<DecennialCycle> {
    let Some(lunar) = calendar.lunar_from_solar(birth) else {
        warn!(%birth, "calendar has no lunar date for birth date");
        return Vec::new();
    };
    let Some(start) = start_luck(&lunar, gender) else {
        return Vec::new();
    };

    let direction = fortune_direction(pillars.year.stem, gender);
    debug!(
        month = %pillars.month,
        %direction,
        start_age = start.age,
        start_year = start.year,
        count = config.cycle_count,
        "decennial cycles"
    );
    cycles_from_start(
        pillars.month,
        direction,
        start,
        config.cycle_count,
        config.origin,
    )
}

/// The cycle containing `year`, if any.
pub fn current_cycle(cycles: &[DecennialCycle], year: i32) -> Option<&DecennialCycle> {
    cycles.iter().find(|c| c.contains_year(year))
}
