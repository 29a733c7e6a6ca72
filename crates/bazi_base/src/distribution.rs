//! Weighted five-element distribution of a four-pillar chart.
//!
//! Total score per element:
//!
//! ```text
//! (stem count + weighted hidden-stem sum) × seasonal coefficient(month branch)
//! ```
//!
//! Hidden-stem weights: primary 1.0 for single-stem branches, 0.6 otherwise;
//! middle 0.3; residual 0.1.

use serde::Serialize;
use tracing::debug;

use crate::branch::EarthlyBranch;
use crate::element::FiveElement;
use crate::hidden_stems::{HiddenStemTier, hidden_stems};
use crate::pillar::FourPillars;
use crate::scores::ElementScores;
use crate::seasonality::{Season, apply_seasonality_adjustment, season_from_branch};
use crate::stem::HeavenlyStem;

/// Weight of each stem (天干).
pub const STEM_WEIGHT: f64 = 1.0;
/// Primary hidden stem of a single-stem branch (子卯酉).
pub const PRIMARY_SINGLE_WEIGHT: f64 = 1.0;
/// Primary hidden stem of a multi-stem branch.
pub const PRIMARY_MULTI_WEIGHT: f64 = 0.6;
/// Middle (中氣) hidden stem.
pub const MIDDLE_WEIGHT: f64 = 0.3;
/// Residual (餘氣) hidden stem.
pub const RESIDUAL_WEIGHT: f64 = 0.1;

/// Pre-seasonality scores, split by source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawScores {
    pub tiangan: ElementScores,
    pub hidden_stems: ElementScores,
}

impl RawScores {
    /// Stem and hidden-stem scores summed elementwise.
    pub fn combined(&self) -> ElementScores {
        self.tiangan + self.hidden_stems
    }
}

/// Result of [`wuxing_distribution`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WuXingDistribution {
    pub raw: RawScores,
    /// Season fixed by the month branch.
    pub season: Season,
    /// Combined raw scores after the seasonal multiplier.
    pub adjusted: ElementScores,
    /// Highest adjusted score; ties go to the earlier element (Wood first).
    pub dominant: FiveElement,
    /// Lowest adjusted score; same tie rule.
    pub deficient: FiveElement,
    /// `max(0, 1 − stddev/mean)` over the adjusted scores, in [0, 1].
    pub balance: f64,
}

/// +1.0 to the element of each stem.
pub fn tiangan_scores(stems: &[HeavenlyStem]) -> ElementScores {
    let mut scores = ElementScores::ZERO;
    for stem in stems {
        scores.accumulate(stem.element(), STEM_WEIGHT);
    }
    scores
}

/// Numeric weight of a hidden stem tier within a branch of `len` stems.
pub const fn hidden_stem_weight(tier: HiddenStemTier, len: usize) -> f64 {
    match tier {
        HiddenStemTier::Primary if len == 1 => PRIMARY_SINGLE_WEIGHT,
        HiddenStemTier::Primary => PRIMARY_MULTI_WEIGHT,
        HiddenStemTier::Middle => MIDDLE_WEIGHT,
        HiddenStemTier::Residual => RESIDUAL_WEIGHT,
    }
}

/// Weighted hidden-stem sum over the given branches.
pub fn hidden_stem_scores(branches: &[EarthlyBranch]) -> ElementScores {
    let mut scores = ElementScores::ZERO;
    for branch in branches {
        let entries = hidden_stems(*branch);
        for h in entries {
            scores.accumulate(h.stem.element(), hidden_stem_weight(h.tier, entries.len()));
        }
    }
    scores
}

/// Combine stem and hidden-stem scores and apply the month's seasonality.
pub fn total_scores(
    tiangan: &ElementScores,
    hidden: &ElementScores,
    month_branch: EarthlyBranch,
) -> ElementScores {
    apply_seasonality_adjustment(&(*tiangan + *hidden), month_branch)
}

/// `max(0, 1 − stddev/mean)` with population stddev; 0 when the mean is not positive.
pub fn balance_score(scores: &ElementScores) -> f64 {
    let n = 5.0;
    let mean = scores.total() / n;
    if mean <= 0.0 {
        return 0.0;
    }
    let variance = scores.iter().map(|(_, v)| (v - mean).powi(2)).sum::<f64>() / n;
    (1.0 - variance.sqrt() / mean).max(0.0)
}

/// Weighted five-element distribution of a chart.
///
/// The month branch alone selects the season for the whole chart.
pub fn wuxing_distribution(pillars: &FourPillars) -> WuXingDistribution {
    let tiangan = tiangan_scores(&pillars.stems());
    let hidden = hidden_stem_scores(&pillars.branches());
    let adjusted = total_scores(&tiangan, &hidden, pillars.month.branch);

    let dominant = adjusted.max_element();
    let deficient = adjusted.min_element();
    let balance = balance_score(&adjusted);
    let season = season_from_branch(pillars.month.branch);

    debug!(
        chart = %pillars,
        %season,
        %dominant,
        %deficient,
        balance,
        "wuxing distribution"
    );

    WuXingDistribution {
        raw: RawScores {
            tiangan,
            hidden_stems: hidden,
        },
        season,
        adjusted,
        dominant,
        deficient,
        balance,
    }
}

/// Unweighted count: each stem's and each branch's nominal element +1.
///
/// Eight characters in, total always 8.
pub fn element_counts(pillars: &FourPillars) -> ElementScores {
    let mut counts = ElementScores::ZERO;
    for p in pillars.pillars() {
        counts.accumulate(p.stem.element(), 1.0);
        counts.accumulate(p.branch.element(), 1.0);
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn chart(y: &str, m: &str, d: &str, h: &str) -> FourPillars {
        FourPillars::parse(y, m, d, h).unwrap()
    }

    #[test]
    fn stems_weigh_one_each() {
        use HeavenlyStem::*;
        let s = tiangan_scores(&[Jia, Bing, Wu, Geng]);
        assert_eq!(s.wood, 1.0);
        assert_eq!(s.fire, 1.0);
        assert_eq!(s.earth, 1.0);
        assert_eq!(s.metal, 1.0);
        assert_eq!(s.water, 0.0);

        let s = tiangan_scores(&[Jia, Yi, Bing, Ding]);
        assert_eq!(s.wood, 2.0);
        assert_eq!(s.fire, 2.0);
    }

    #[test]
    fn single_stem_branches_weigh_full() {
        use EarthlyBranch::*;
        let s = hidden_stem_scores(&[Zi, Mao, You]);
        assert_eq!(s.water, 1.0);
        assert_eq!(s.wood, 1.0);
        assert_eq!(s.metal, 1.0);
    }

    #[test]
    fn two_stem_branch_weights() {
        // 午: 丁 primary 0.6 + 己 residual 0.1
        let s = hidden_stem_scores(&[EarthlyBranch::Wu]);
        assert!((s.fire - 0.6).abs() < EPS);
        assert!((s.earth - 0.1).abs() < EPS);
        assert!((s.total() - 0.7).abs() < EPS);
    }

    #[test]
    fn tier_weights() {
        assert_eq!(hidden_stem_weight(HiddenStemTier::Primary, 1), 1.0);
        assert_eq!(hidden_stem_weight(HiddenStemTier::Primary, 3), 0.6);
        assert_eq!(hidden_stem_weight(HiddenStemTier::Middle, 3), 0.3);
        assert_eq!(hidden_stem_weight(HiddenStemTier::Residual, 2), 0.1);
    }

    #[test]
    fn balance_of_uniform_scores_is_one() {
        let s = ElementScores::from_fn(|_| 1.7);
        assert!((balance_score(&s) - 1.0).abs() < EPS);
    }

    #[test]
    fn balance_of_zero_scores_is_zero() {
        assert_eq!(balance_score(&ElementScores::ZERO), 0.0);
    }

    #[test]
    fn balance_clamps_at_zero() {
        // stddev = 2, mean = 1 → 1 − 2 < 0
        let s = ElementScores {
            wood: 5.0,
            ..ElementScores::ZERO
        };
        assert_eq!(balance_score(&s), 0.0);
    }

    #[test]
    fn month_branch_sets_season() {
        let d = wuxing_distribution(&chart("甲子", "丙午", "戊辰", "庚申"));
        assert_eq!(d.season, Season::Summer);
        let combined = d.raw.combined();
        assert!((d.adjusted.fire - combined.fire * 1.5).abs() < EPS);
        assert!((d.adjusted.water - combined.water * 0.5).abs() < EPS);
    }

    #[test]
    fn element_counts_total_eight() {
        let c = element_counts(&chart("庚午", "丙午", "壬戌", "己未"));
        assert_eq!(c.total(), 8.0);
        assert_eq!(c.wood, 0.0);
        assert_eq!(c.fire, 3.0);
        assert_eq!(c.earth, 3.0);
    }
}
