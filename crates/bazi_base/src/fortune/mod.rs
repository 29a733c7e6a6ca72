//! Luck calculations: decennial cycles (大運), annual luck (流年) and
//! start-luck (起運) helpers.
//!
//! Solar/lunar conversion is not done here. A [`LunarCalendarProvider`]
//! supplies the lunar year ganzhi and start-luck figures; everything else is
//! pure sexagenary arithmetic on the chart.

pub mod annual;
pub mod calendar;
pub mod decennial;
pub mod direction;
pub mod metabolic;
pub mod types;

pub use annual::annual_luck;
pub use calendar::{
    LunarCalendarProvider, LunarDate, StaticLunarCalendar, StaticLunarDate, start_luck,
};
pub use decennial::{current_cycle, cycles_from_start, decennial_cycles, decennial_cycles_with};
pub use direction::fortune_direction;
pub use metabolic::{MINUTES_PER_DAY, MetabolicSpan, REAL_DAYS_PER_DAY, metabolic_span};
pub use types::{
    AnnualLuck, CycleOrigin, DEFAULT_ANNUAL_YEARS, DEFAULT_CYCLE_COUNT, DecennialCycle,
    FortuneConfig, FortuneDirection, Gender, StartLuck, YEARS_PER_CYCLE,
};
