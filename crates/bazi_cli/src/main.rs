mod cli;
mod config;
mod logging;
mod report;

use std::process;

use anyhow::{Context, Result, anyhow};
use bazi_base::{
    EarthlyBranch, FiveElement, FortuneConfig, FourPillars, StaticLunarCalendar, annual_luck,
    current_cycle, decennial_cycles_with, fortune_direction, hidden_stems, metabolic_span,
    relation, wuxing_distribution,
};
use chrono::{Datelike, Local};
use clap::Parser;
use serde::Serialize;
use tracing::info;

use crate::cli::{ChartArgs, Cli, Command, LuckArgs};
use crate::config::{BaziConfig, check_fortune};
use crate::report::{ChartReport, HiddenReport, LuckReport, TenGodsReport};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command, cli.json) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command, json: bool) -> Result<()> {
    match command {
        Command::Wuxing(chart) => {
            let d = wuxing_distribution(&parse_chart(&chart)?);
            emit(json, &d, report::print_wuxing)
        }
        Command::TenGods { chart, hidden } => {
            let r = TenGodsReport::new(&parse_chart(&chart)?, hidden);
            emit(json, &r, report::print_ten_gods)
        }
        Command::Hidden { branch } => {
            let branch: EarthlyBranch = branch.parse().context("invalid branch")?;
            let r = HiddenReport {
                branch,
                hidden: hidden_stems(branch),
            };
            emit(json, &r, report::print_hidden)
        }
        Command::Relation { from, to } => {
            let from: FiveElement = from.parse().context("invalid source element")?;
            let to: FiveElement = to.parse().context("invalid target element")?;
            let r = relation(from, to);
            emit(json, &r, |r| println!("{from} → {to}: {r}"))
        }
        Command::Luck(args) => {
            let r = run_luck(args)?;
            emit(json, &r, report::print_luck)
        }
        Command::Annual {
            birth_year,
            start_year,
            years,
        } => {
            check_fortune(&FortuneConfig {
                annual_years: years,
                ..FortuneConfig::default()
            })?;
            let rows = annual_luck(birth_year, start_year, years);
            emit(json, &rows, |r| report::print_annual(r))
        }
        Command::Qiyun {
            minutes,
            birth_year,
        } => {
            let span = metabolic_span(minutes);
            match birth_year {
                Some(y) => {
                    let start = span
                        .start_luck(y)
                        .ok_or_else(|| anyhow!("start year out of range for {minutes} minutes"))?;
                    emit(json, &(span, start), |(span, start)| {
                        println!("{} years {} months {} days", span.years, span.months, span.days);
                        println!("start luck: age {} in {}", start.age, start.year);
                    })
                }
                None => emit(json, &span, |span| {
                    println!("{} years {} months {} days", span.years, span.months, span.days)
                }),
            }
        }
        Command::Chart { config } => {
            let cfg = BaziConfig::load(&config)?;
            let r = run_chart(&cfg)?;
            emit(json, &r, report::print_chart)
        }
    }
}

/// Print `value` as pretty JSON, or through `text`.
fn emit<T: Serialize>(json: bool, value: &T, text: impl FnOnce(&T)) -> Result<()> {
    if json {
        let out = serde_json::to_string_pretty(value).context("failed to serialize output")?;
        println!("{out}");
    } else {
        text(value);
    }
    Ok(())
}

fn parse_chart(chart: &ChartArgs) -> Result<FourPillars> {
    FourPillars::parse(&chart.year, &chart.month, &chart.day, &chart.hour)
        .context("invalid pillar")
}

fn run_luck(args: LuckArgs) -> Result<LuckReport> {
    let cfg = args.config.as_deref().map(BaziConfig::load).transpose()?;
    let input = args.resolve(cfg.as_ref())?;

    let calendar = StaticLunarCalendar::new(input.pillars.year, input.start);
    let cycles =
        decennial_cycles_with(&input.pillars, input.birth, input.gender, &input.fortune, &calendar);
    info!(count = cycles.len(), "decennial cycles ready");
    Ok(LuckReport {
        direction: fortune_direction(input.pillars.year.stem, input.gender),
        start: input.start,
        cycles,
    })
}

fn run_chart(cfg: &BaziConfig) -> Result<ChartReport> {
    let pillars = cfg.pillars()?;
    let birth = cfg.chart.birth;
    let start = cfg.start.resolve(birth.year())?;
    let fortune = FortuneConfig::from(&cfg.fortune);

    let calendar = StaticLunarCalendar::new(pillars.year, start);
    let cycles = decennial_cycles_with(&pillars, birth, cfg.chart.gender, &fortune, &calendar);
    let this_year = Local::now().year();
    let current = current_cycle(&cycles, this_year).map(|c| c.index);

    let annual_start = cfg.fortune.annual_start.unwrap_or(birth.year());
    let annual = annual_luck(birth.year(), annual_start, fortune.annual_years);

    info!(chart = %pillars, cycles = cycles.len(), "chart report ready");
    Ok(ChartReport::new(
        pillars,
        LuckReport {
            direction: fortune_direction(pillars.year.stem, cfg.chart.gender),
            start,
            cycles,
        },
        current,
        annual,
    ))
}
