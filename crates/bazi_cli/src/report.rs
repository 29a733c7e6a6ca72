//! Serializable reports and their text rendering.

use bazi_base::{
    AnnualLuck, DecennialCycle, EarthlyBranch, ElementScores, FortuneDirection, FourPillars,
    HeavenlyStem,
    HiddenStem, HiddenStemTenGod, StartLuck, TenGodChart, WuXingDistribution, element_counts,
    hidden_stem_ten_gods, main_stem_ten_gods, wuxing_distribution,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchTenGods {
    pub branch: EarthlyBranch,
    pub hidden: Vec<HiddenStemTenGod>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TenGodsReport {
    pub day_master: HeavenlyStem,
    pub main: TenGodChart,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hidden: Vec<BranchTenGods>,
}

impl TenGodsReport {
    pub fn new(pillars: &FourPillars, with_hidden: bool) -> Self {
        let day_master = pillars.day_master();
        let hidden = if with_hidden {
            pillars
                .branches()
                .into_iter()
                .map(|branch| BranchTenGods {
                    branch,
                    hidden: hidden_stem_ten_gods(day_master, branch),
                })
                .collect()
        } else {
            Vec::new()
        };
        Self {
            day_master,
            main: main_stem_ten_gods(pillars),
            hidden,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HiddenReport {
    pub branch: EarthlyBranch,
    pub hidden: &'static [HiddenStem],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LuckReport {
    pub direction: FortuneDirection,
    pub start: Option<StartLuck>,
    pub cycles: Vec<DecennialCycle>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartReport {
    pub pillars: FourPillars,
    pub wuxing: WuXingDistribution,
    pub element_counts: ElementScores,
    pub ten_gods: TenGodsReport,
    pub luck: LuckReport,
    pub current_cycle: Option<u32>,
    pub annual: Vec<AnnualLuck>,
}

impl ChartReport {
    pub fn new(
        pillars: FourPillars,
        luck: LuckReport,
        current_cycle: Option<u32>,
        annual: Vec<AnnualLuck>,
    ) -> Self {
        Self {
            wuxing: wuxing_distribution(&pillars),
            element_counts: element_counts(&pillars),
            ten_gods: TenGodsReport::new(&pillars, true),
            pillars,
            luck,
            current_cycle,
            annual,
        }
    }
}

pub fn print_scores(label: &str, s: &ElementScores) {
    let cells: Vec<String> = s
        .iter()
        .map(|(e, v)| format!("{}{} {v:.2}", e.chinese(), e.name()))
        .collect();
    println!("{label:<10} {}", cells.join("  "));
}

pub fn print_wuxing(d: &WuXingDistribution) {
    print_scores("stems", &d.raw.tiangan);
    print_scores("hidden", &d.raw.hidden_stems);
    print_scores("adjusted", &d.adjusted);
    println!("season     {}", d.season);
    println!(
        "dominant   {} {}   deficient {} {}",
        d.dominant.chinese(),
        d.dominant,
        d.deficient.chinese(),
        d.deficient
    );
    println!("balance    {:.4}", d.balance);
}

pub fn print_ten_gods(r: &TenGodsReport) {
    let dm = r.day_master;
    println!(
        "day master {} ({}{})",
        dm,
        dm.polarity().chinese(),
        dm.element().chinese()
    );
    for (label, god) in [
        ("year", r.main.year),
        ("month", r.main.month),
        ("day", r.main.day),
        ("hour", r.main.hour),
    ] {
        println!("  {label:<6}{} {}", god.chinese(), god.english_name());
    }
    for b in &r.hidden {
        let cells: Vec<String> = b
            .hidden
            .iter()
            .map(|h| format!("{}:{}", h.hidden.stem, h.ten_god))
            .collect();
        println!("  {} {}", b.branch, cells.join(" "));
    }
}

pub fn print_hidden(r: &HiddenReport) {
    for h in r.hidden {
        println!(
            "{} {} {:<8} {:>2} days",
            h.stem,
            h.stem.element(),
            h.tier.name(),
            h.days
        );
    }
}

pub fn print_luck(r: &LuckReport) {
    println!("direction: {} {}", r.direction.chinese(), r.direction);
    if let Some(s) = r.start {
        println!("start luck: age {} in {}", s.age, s.year);
    }
    print_cycles(&r.cycles);
}

pub fn print_cycles(cycles: &[DecennialCycle]) {
    if cycles.is_empty() {
        println!("no decennial cycles (start luck unavailable)");
        return;
    }
    for c in cycles {
        println!(
            "{:>2}. {}{} ({}/{})  age {:>3}-{:<3} {}-{}",
            c.index,
            c.stem,
            c.branch,
            c.stem_element.chinese(),
            c.branch_element.chinese(),
            c.start_age,
            c.end_age,
            c.start_year,
            c.end_year
        );
    }
}

pub fn print_annual(rows: &[AnnualLuck]) {
    for r in rows {
        println!(
            "{} {}{} ({}/{})  age {}",
            r.year,
            r.stem,
            r.branch,
            r.stem_element.chinese(),
            r.branch_element.chinese(),
            r.age
        );
    }
}

pub fn print_chart(r: &ChartReport) {
    println!("{}", r.pillars);
    println!();
    print_wuxing(&r.wuxing);
    print_scores("counts", &r.element_counts);
    println!();
    print_ten_gods(&r.ten_gods);
    println!();
    print_luck(&r.luck);
    if let Some(i) = r.current_cycle {
        println!("current cycle: {i}");
    }
    println!();
    print_annual(&r.annual);
}
