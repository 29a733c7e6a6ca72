use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use bazi_base::{CycleOrigin, FortuneConfig, FourPillars, Gender, StartLuck};
use chrono::{Datelike, NaiveDate};
use clap::{Args, Parser, Subcommand, value_parser};

use crate::config::{
    BaziConfig, MAX_START_AGE, StartToml, YEAR_RANGE, check_fortune, check_year,
};

const YEAR_MIN: i64 = *YEAR_RANGE.start() as i64;
const YEAR_MAX: i64 = *YEAR_RANGE.end() as i64;

/// BaZi five-elements, Ten Gods and luck-pillar calculator.
#[derive(Parser)]
#[command(name = "bazi", version, about = "BaZi WuXing, Ten Gods and luck pillars")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Weighted five-element distribution of a chart
    Wuxing(ChartArgs),
    /// Ten Gods of the main stems relative to the day master
    TenGods {
        #[command(flatten)]
        chart: ChartArgs,
        /// Also list the Ten Gods of each branch's hidden stems
        #[arg(long)]
        hidden: bool,
    },
    /// Hidden stems of a branch
    Hidden {
        /// Branch character or pinyin (e.g. 寅, yin)
        branch: String,
    },
    /// Relation between two elements
    Relation {
        /// Source element (木 or Wood)
        from: String,
        /// Target element
        to: String,
    },
    /// Decennial luck pillars
    Luck(LuckArgs),
    /// Annual luck pillars
    Annual {
        /// Birth year (CE)
        #[arg(long, value_parser = value_parser!(i32).range(YEAR_MIN..=YEAR_MAX))]
        birth_year: i32,
        /// First year of the table
        #[arg(long, value_parser = value_parser!(i32).range(YEAR_MIN..=YEAR_MAX))]
        start_year: i32,
        /// Number of years
        #[arg(long, default_value_t = bazi_base::fortune::DEFAULT_ANNUAL_YEARS)]
        years: usize,
    },
    /// Start-luck age from the distance to the governing solar term
    Qiyun {
        /// Birth-to-solar-term distance in minutes (sign ignored)
        #[arg(long, allow_hyphen_values = true)]
        minutes: f64,
        /// Birth year, to also report the start year
        #[arg(long, value_parser = value_parser!(i32).range(YEAR_MIN..=YEAR_MAX))]
        birth_year: Option<i32>,
    },
    /// Full report for a chart in a TOML file
    Chart {
        /// Path to TOML chart file
        #[arg(short, long)]
        config: PathBuf,
    },
}

/// Four ganzhi strings, year to hour.
#[derive(Args)]
pub struct ChartArgs {
    /// Year pillar (e.g. 甲子)
    pub year: String,
    /// Month pillar
    pub month: String,
    /// Day pillar
    pub day: String,
    /// Hour pillar
    pub hour: String,
}

/// Arguments for `luck`. Flags override values from `--config`.
#[derive(Args)]
pub struct LuckArgs {
    /// Path to TOML chart file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Year, month, day and hour pillars (required without --config)
    #[arg(num_args = 0..=4)]
    pub pillars: Vec<String>,

    #[arg(long)]
    pub gender: Option<Gender>,

    /// Gregorian birth date (YYYY-MM-DD)
    #[arg(long)]
    pub birth: Option<NaiveDate>,

    /// Start-luck age
    #[arg(long, value_parser = value_parser!(u32).range(..=MAX_START_AGE as i64))]
    pub start_age: Option<u32>,

    /// Start-luck year (defaults to birth year + age)
    #[arg(long, value_parser = value_parser!(i32).range(YEAR_MIN..=YEAR_MAX))]
    pub start_year: Option<i32>,

    /// Derive start luck from the solar-term distance in minutes
    #[arg(long, allow_hyphen_values = true, conflicts_with = "start_age")]
    pub jie_minutes: Option<f64>,

    /// Number of cycles
    #[arg(long)]
    pub count: Option<usize>,

    /// First-cycle origin: month or next
    #[arg(long)]
    pub origin: Option<CycleOrigin>,
}

/// Everything `luck` needs once flags and the chart file are merged.
#[derive(Debug)]
pub struct LuckInput {
    pub pillars: FourPillars,
    pub gender: Gender,
    pub birth: NaiveDate,
    pub start: Option<StartLuck>,
    pub fortune: FortuneConfig,
}

impl LuckArgs {
    /// Merge flags over `cfg`; any flag given wins over the file.
    ///
    /// Start-luck flags replace the `[start]` section as a whole, so an
    /// orphan `--start-year` is rejected the same way as in the file.
    pub fn resolve(&self, cfg: Option<&BaziConfig>) -> Result<LuckInput> {
        let pillars = match (self.pillars.as_slice(), cfg) {
            ([y, m, d, h], _) => FourPillars::parse(y, m, d, h).context("invalid pillar")?,
            ([], Some(cfg)) => cfg.pillars()?,
            ([], None) => bail!("give four pillars or --config"),
            (p, _) => bail!("expected four pillars, got {}", p.len()),
        };
        let Some(gender) = self.gender.or(cfg.map(|c| c.chart.gender)) else {
            bail!("no gender: use --gender or set [chart].gender");
        };
        let Some(birth) = self.birth.or(cfg.map(|c| c.chart.birth)) else {
            bail!("no birth date: use --birth or set [chart].birth");
        };
        check_year("birth year", birth.year())?;

        let flags = StartToml {
            age: self.start_age,
            year: self.start_year,
            jie_minutes: self.jie_minutes,
        };
        let start = match cfg {
            Some(cfg) if flags.is_empty() => cfg.start.resolve(birth.year())?,
            _ => flags.resolve(birth.year())?,
        };

        let mut fortune = cfg
            .map(|c| FortuneConfig::from(&c.fortune))
            .unwrap_or_default();
        if let Some(count) = self.count {
            fortune.cycle_count = count;
        }
        if let Some(origin) = self.origin {
            fortune.origin = origin;
        }
        check_fortune(&fortune)?;

        Ok(LuckInput {
            pillars,
            gender,
            birth,
            start,
            fortune,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FILE: &str = r#"
[chart]
year = "庚午"
month = "辛巳"
day = "庚辰"
hour = "癸未"
gender = "female"
birth = "1990-05-15"

[start]
age = 8

[fortune]
cycle_count = 4
origin = "month_pillar"
"#;

    fn file() -> BaziConfig {
        toml::from_str(FILE).unwrap()
    }

    fn luck_args(argv: &[&str]) -> LuckArgs {
        let mut full = vec!["bazi", "luck"];
        full.extend_from_slice(argv);
        match Cli::try_parse_from(full).unwrap().command {
            Command::Luck(args) => args,
            _ => panic!("not a luck command"),
        }
    }

    #[test]
    fn file_values_used_without_flags() {
        let input = luck_args(&[]).resolve(Some(&file())).unwrap();
        assert_eq!(input.pillars.month.to_string(), "辛巳");
        assert_eq!(input.gender, Gender::Female);
        assert_eq!(input.start, Some(StartLuck { age: 8, year: 1998 }));
        assert_eq!(input.fortune.cycle_count, 4);
        assert_eq!(input.fortune.origin, CycleOrigin::MonthPillar);
    }

    #[test]
    fn flags_beat_file() {
        let args = luck_args(&[
            "--gender", "male", "--count", "6", "--origin", "next", "--start-age", "3",
        ]);
        let input = args.resolve(Some(&file())).unwrap();
        assert_eq!(input.gender, Gender::Male);
        assert_eq!(input.fortune.cycle_count, 6);
        assert_eq!(input.fortune.origin, CycleOrigin::NextPillar);
        assert_eq!(input.start, Some(StartLuck { age: 3, year: 1993 }));
        // untouched by flags
        assert_eq!(input.birth, NaiveDate::from_ymd_opt(1990, 5, 15).unwrap());
    }

    #[test]
    fn pillars_on_command_line_replace_file_chart() {
        let args = luck_args(&["甲子", "丙寅", "戊辰", "庚申"]);
        let input = args.resolve(Some(&file())).unwrap();
        assert_eq!(input.pillars.year.to_string(), "甲子");
        assert_eq!(input.gender, Gender::Female);
    }

    #[test]
    fn jie_minutes_flag() {
        let args = luck_args(&["--jie-minutes", "14400"]);
        let input = args.resolve(Some(&file())).unwrap();
        assert_eq!(input.start, Some(StartLuck { age: 3, year: 1993 }));
    }

    #[test]
    fn orphan_start_year_rejected() {
        let args = luck_args(&["--start-year", "2001"]);
        assert!(args.resolve(Some(&file())).is_err());

        let args = luck_args(&["--jie-minutes", "14400", "--start-year", "2001"]);
        assert!(args.resolve(Some(&file())).is_err());
    }

    #[test]
    fn without_file_everything_comes_from_flags() {
        let args = luck_args(&[
            "庚午", "辛巳", "庚辰", "癸未", "--gender", "m", "--birth", "1990-05-15",
            "--start-age", "8", "--start-year", "1999",
        ]);
        let input = args.resolve(None).unwrap();
        assert_eq!(input.start, Some(StartLuck { age: 8, year: 1999 }));
        assert_eq!(input.fortune, FortuneConfig::default());

        let args = luck_args(&["庚午", "辛巳", "庚辰", "癸未", "--birth", "1990-05-15"]);
        assert!(args.resolve(None).is_err());
        assert!(luck_args(&["庚午", "辛巳"]).resolve(None).is_err());
    }

    #[test]
    fn out_of_range_values_rejected() {
        let argv = ["bazi", "luck", "--start-age", "4294967295"];
        assert!(Cli::try_parse_from(argv).is_err());
        let argv = ["bazi", "annual", "--birth-year", "1990", "--start-year", "2147483647"];
        assert!(Cli::try_parse_from(argv).is_err());

        let args = luck_args(&["--count", "1000000"]);
        assert!(args.resolve(Some(&file())).is_err());
    }
}
