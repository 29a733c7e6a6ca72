//! Five-elements (五行) analysis for BaZi (四柱) charts.
//!
//! This crate provides:
//! - Stems, branches, pillars and the sexagenary cycle
//! - Hidden stems (藏干) with their tier weights
//! - Weighted WuXing distribution with seasonal (月令) adjustment
//! - Ten Gods (十神) relative to the day master
//! - Decennial (大運) and annual (流年) luck pillars
//!
//! Everything is a pure function of its inputs except start-luck lookup,
//! which goes through a pluggable lunar calendar.

pub mod branch;
pub mod distribution;
pub mod element;
pub mod error;
pub mod fortune;
pub mod hidden_stems;
pub mod pillar;
pub mod scores;
pub mod seasonality;
pub mod stem;
pub mod ten_gods;

pub use branch::{ALL_BRANCHES, EarthlyBranch};
pub use distribution::{
    MIDDLE_WEIGHT, PRIMARY_MULTI_WEIGHT, PRIMARY_SINGLE_WEIGHT, RESIDUAL_WEIGHT, RawScores,
    STEM_WEIGHT, WuXingDistribution, balance_score, element_counts, hidden_stem_scores,
    hidden_stem_weight, tiangan_scores, total_scores, wuxing_distribution,
};
pub use element::{ALL_ELEMENTS, FiveElement, WuXingRelation, element_distance, relation};
pub use error::BaziError;
pub use fortune::{
    AnnualLuck, CycleOrigin, DecennialCycle, FortuneConfig, FortuneDirection, Gender,
    LunarCalendarProvider, LunarDate, MetabolicSpan, StartLuck, StaticLunarCalendar,
    annual_luck, current_cycle, cycles_from_start, decennial_cycles, decennial_cycles_with,
    fortune_direction, metabolic_span, start_luck,
};
pub use hidden_stems::{
    BRANCH_DAYS, HiddenStem, HiddenStemTier, all_hidden_stems, branch_contains_stem,
    hidden_stems, is_single_stem_branch, primary_hidden_stem,
};
pub use pillar::{FourPillars, Pillar, SEXAGENARY_CYCLE, SEXAGENARY_EPOCH_YEAR, year_pillar};
pub use scores::ElementScores;
pub use seasonality::{
    ALL_SEASONS, Season, apply_seasonality_adjustment, season_coefficients, season_from_branch,
    seasonality_coefficient,
};
pub use stem::{ALL_STEMS, HeavenlyStem, Polarity};
pub use ten_gods::{
    ALL_TEN_GODS, HiddenStemTenGod, TenGod, TenGodCategory, TenGodChart, all_ten_gods,
    hidden_stem_ten_gods, main_stem_ten_gods, ten_god,
};
