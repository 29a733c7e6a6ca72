//! Integration tests for the weighted five-element distribution.
//!
//! Pure arithmetic, no calendar needed.

use bazi_base::{
    ALL_BRANCHES, ALL_ELEMENTS, ALL_STEMS, FiveElement, FourPillars, Pillar, Season,
    apply_seasonality_adjustment, balance_score, element_counts, hidden_stem_scores,
    tiangan_scores, wuxing_distribution,
};

const EPS: f64 = 1e-9;

fn chart(y: &str, m: &str, d: &str, h: &str) -> FourPillars {
    FourPillars::parse(y, m, d, h).unwrap()
}

// ---------------------------------------------------------------------------
// Known chart: 甲子 丙寅 戊辰 庚酉
// ---------------------------------------------------------------------------

#[test]
fn known_chart_raw_scores() {
    let d = wuxing_distribution(&chart("甲子", "丙寅", "戊辰", "庚酉"));

    let t = d.raw.tiangan;
    assert_eq!((t.wood, t.fire, t.earth, t.metal, t.water), (1.0, 1.0, 1.0, 1.0, 0.0));

    // 子 癸1.0 | 寅 甲0.6 丙0.3 戊0.1 | 辰 戊0.6 乙0.3 癸0.1 | 酉 辛1.0
    let h = d.raw.hidden_stems;
    assert!((h.wood - 0.9).abs() < EPS, "wood = {}", h.wood);
    assert!((h.fire - 0.3).abs() < EPS, "fire = {}", h.fire);
    assert!((h.earth - 0.7).abs() < EPS, "earth = {}", h.earth);
    assert!((h.metal - 1.0).abs() < EPS, "metal = {}", h.metal);
    assert!((h.water - 1.1).abs() < EPS, "water = {}", h.water);
}

#[test]
fn known_chart_adjusted_in_spring() {
    let d = wuxing_distribution(&chart("甲子", "丙寅", "戊辰", "庚酉"));
    assert_eq!(d.season, Season::Spring);

    // combined 1.9 / 1.3 / 1.7 / 2.0 / 1.1 × 1.5 / 1.3 / 0.7 / 0.5 / 1.0
    let a = d.adjusted;
    assert!((a.wood - 2.85).abs() < EPS);
    assert!((a.fire - 1.69).abs() < EPS);
    assert!((a.earth - 1.19).abs() < EPS);
    assert!((a.metal - 1.0).abs() < EPS);
    assert!((a.water - 1.1).abs() < EPS);

    assert!(a.wood > d.raw.combined().wood);
    assert_eq!(d.dominant, FiveElement::Wood);
    assert_eq!(d.deficient, FiveElement::Metal);
    assert!((d.balance - 0.562_878_699).abs() < 1e-6, "balance = {}", d.balance);
}

#[test]
fn mismatched_parity_pillar_is_still_scored() {
    // 庚酉 is not a sexagenary pair but carries meaningful characters.
    let p: Pillar = "庚酉".parse().unwrap();
    assert_eq!(p.sexagenary_index(), None);
    let d = wuxing_distribution(&chart("庚酉", "庚酉", "庚酉", "庚酉"));
    assert!((d.raw.combined().metal - 8.0).abs() < EPS);
}

// ---------------------------------------------------------------------------
// Properties over many charts
// ---------------------------------------------------------------------------

fn sample_charts() -> impl Iterator<Item = FourPillars> {
    (0..60u32).flat_map(|y| {
        ALL_BRANCHES.into_iter().map(move |mb| {
            let year = Pillar::from_sexagenary_index(y);
            let month = Pillar::new(ALL_STEMS[(y as usize * 7) % 10], mb);
            let day = Pillar::from_sexagenary_index(y * 13 + 5);
            let hour = Pillar::from_sexagenary_index(y * 31 + 17);
            FourPillars::new(year, month, day, hour)
        })
    })
}

#[test]
fn stem_total_is_always_four() {
    for c in sample_charts() {
        assert!((tiangan_scores(&c.stems()).total() - 4.0).abs() < EPS, "{c}");
    }
}

#[test]
fn balance_stays_in_unit_interval() {
    for c in sample_charts() {
        let b = wuxing_distribution(&c).balance;
        assert!((0.0..=1.0).contains(&b), "{c}: balance = {b}");
    }
}

#[test]
fn adjusted_scores_are_non_negative() {
    for c in sample_charts() {
        let d = wuxing_distribution(&c);
        for (e, v) in d.adjusted.iter() {
            assert!(v >= 0.0, "{c}: {e} = {v}");
        }
    }
}

#[test]
fn dominant_and_deficient_hit_extremes() {
    for c in sample_charts() {
        let d = wuxing_distribution(&c);
        let max = d.adjusted.iter().map(|(_, v)| v).fold(f64::MIN, f64::max);
        let min = d.adjusted.iter().map(|(_, v)| v).fold(f64::MAX, f64::min);
        assert_eq!(d.adjusted.get(d.dominant), max, "{c}");
        assert_eq!(d.adjusted.get(d.deficient), min, "{c}");
    }
}

#[test]
fn distribution_is_idempotent() {
    for c in sample_charts().take(50) {
        assert_eq!(wuxing_distribution(&c), wuxing_distribution(&c));
    }
}

#[test]
fn seasonality_with_month_branch_of_chart() {
    let c = chart("甲子", "丙午", "戊辰", "庚申");
    let raw = tiangan_scores(&c.stems()) + hidden_stem_scores(&c.branches());
    let adjusted = apply_seasonality_adjustment(&raw, c.month.branch);
    assert_eq!(wuxing_distribution(&c).adjusted, adjusted);
}

// ---------------------------------------------------------------------------
// Balance and counts
// ---------------------------------------------------------------------------

#[test]
fn uniform_scores_balance_to_one() {
    let s = bazi_base::ElementScores::from_fn(|_| 2.0);
    assert!((balance_score(&s) - 1.0).abs() < EPS);
}

#[test]
fn all_zero_balance_is_zero() {
    assert_eq!(balance_score(&bazi_base::ElementScores::ZERO), 0.0);
}

#[test]
fn single_element_balance_clamps_to_zero() {
    // stddev = 2·mean here, so the raw value would be −1.
    let s = bazi_base::ElementScores::from_fn(|e| if e == FiveElement::Fire { 5.0 } else { 0.0 });
    assert_eq!(balance_score(&s), 0.0);
}

#[test]
fn element_counts_total_eight() {
    for c in sample_charts().take(100) {
        let counts = element_counts(&c);
        assert!((counts.total() - 8.0).abs() < EPS, "{c}");
        for e in ALL_ELEMENTS {
            assert!(counts.get(e) >= 0.0);
        }
    }
}
