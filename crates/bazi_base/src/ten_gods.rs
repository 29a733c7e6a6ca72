//! Ten Gods (十神): relation of any stem to the day master.
//!
//! The element distance from the day master (same, produce, overcome,
//! overcomed, produced) picks one of five families; matching polarity picks
//! the first member of the pair, opposite polarity the second.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::branch::EarthlyBranch;
use crate::element::element_distance;
use crate::hidden_stems::{HiddenStem, hidden_stems};
use crate::pillar::FourPillars;
use crate::stem::{ALL_STEMS, HeavenlyStem};

/// The 10 named relations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TenGod {
    #[serde(rename = "比肩")]
    BiJian,
    #[serde(rename = "劫財")]
    JieCai,
    #[serde(rename = "食神")]
    ShiShen,
    #[serde(rename = "傷官")]
    ShangGuan,
    #[serde(rename = "偏財")]
    PianCai,
    #[serde(rename = "正財")]
    ZhengCai,
    #[serde(rename = "七殺")]
    QiSha,
    #[serde(rename = "正官")]
    ZhengGuan,
    #[serde(rename = "偏印")]
    PianYin,
    #[serde(rename = "正印")]
    ZhengYin,
}

/// All 10 Ten Gods in family order.
pub const ALL_TEN_GODS: [TenGod; 10] = [
    TenGod::BiJian,
    TenGod::JieCai,
    TenGod::ShiShen,
    TenGod::ShangGuan,
    TenGod::PianCai,
    TenGod::ZhengCai,
    TenGod::QiSha,
    TenGod::ZhengGuan,
    TenGod::PianYin,
    TenGod::ZhengYin,
];

/// Family of a Ten God pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TenGodCategory {
    /// 比劫: same element.
    Companion,
    /// 食傷: day master produces.
    Output,
    /// 財: day master overcomes.
    Wealth,
    /// 官殺: overcomes the day master.
    Authority,
    /// 印: produces the day master.
    Resource,
}

impl TenGod {
    /// Traditional Chinese name.
    pub const fn chinese(self) -> &'static str {
        match self {
            Self::BiJian => "比肩",
            Self::JieCai => "劫財",
            Self::ShiShen => "食神",
            Self::ShangGuan => "傷官",
            Self::PianCai => "偏財",
            Self::ZhengCai => "正財",
            Self::QiSha => "七殺",
            Self::ZhengGuan => "正官",
            Self::PianYin => "偏印",
            Self::ZhengYin => "正印",
        }
    }

    /// English gloss.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::BiJian => "Companion",
            Self::JieCai => "Rob Wealth",
            Self::ShiShen => "Eating God",
            Self::ShangGuan => "Hurting Officer",
            Self::PianCai => "Indirect Wealth",
            Self::ZhengCai => "Direct Wealth",
            Self::QiSha => "Seven Killings",
            Self::ZhengGuan => "Direct Officer",
            Self::PianYin => "Indirect Resource",
            Self::ZhengYin => "Direct Resource",
        }
    }

    pub const fn category(self) -> TenGodCategory {
        match self {
            Self::BiJian | Self::JieCai => TenGodCategory::Companion,
            Self::ShiShen | Self::ShangGuan => TenGodCategory::Output,
            Self::PianCai | Self::ZhengCai => TenGodCategory::Wealth,
            Self::QiSha | Self::ZhengGuan => TenGodCategory::Authority,
            Self::PianYin | Self::ZhengYin => TenGodCategory::Resource,
        }
    }

    /// Whether this is the same-polarity member of its pair.
    pub const fn is_same_polarity(self) -> bool {
        matches!(
            self,
            Self::BiJian | Self::ShiShen | Self::PianCai | Self::QiSha | Self::PianYin
        )
    }
}

impl Display for TenGod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.chinese())
    }
}

/// Ten God of `other` relative to `day_master`.
///
/// Total over all 100 stem pairs; `ten_god(x, x)` is always 比肩.
pub const fn ten_god(day_master: HeavenlyStem, other: HeavenlyStem) -> TenGod {
    let distance = element_distance(day_master.element(), other.element());
    let same = day_master.index() % 2 == other.index() % 2;
    match (distance, same) {
        (0, true) => TenGod::BiJian,
        (0, false) => TenGod::JieCai,
        (1, true) => TenGod::ShiShen,
        (1, false) => TenGod::ShangGuan,
        (2, true) => TenGod::PianCai,
        (2, false) => TenGod::ZhengCai,
        (3, true) => TenGod::QiSha,
        (3, false) => TenGod::ZhengGuan,
        (_, true) => TenGod::PianYin,
        (_, false) => TenGod::ZhengYin,
    }
}

/// Ten Gods of the four main stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TenGodChart {
    pub year: TenGod,
    pub month: TenGod,
    /// Always 比肩 (the day master against itself).
    pub day: TenGod,
    pub hour: TenGod,
}

/// Ten Gods of the year, month, day and hour stems.
pub fn main_stem_ten_gods(pillars: &FourPillars) -> TenGodChart {
    let dm = pillars.day_master();
    TenGodChart {
        year: ten_god(dm, pillars.year.stem),
        month: ten_god(dm, pillars.month.stem),
        day: ten_god(dm, pillars.day.stem),
        hour: ten_god(dm, pillars.hour.stem),
    }
}

/// The full row of Ten Gods for one day master, in stem order.
pub fn all_ten_gods(day_master: HeavenlyStem) -> [(HeavenlyStem, TenGod); 10] {
    ALL_STEMS.map(|s| (s, ten_god(day_master, s)))
}

/// One hidden stem with its Ten God.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HiddenStemTenGod {
    #[serde(flatten)]
    pub hidden: HiddenStem,
    pub ten_god: TenGod,
}

/// Ten Gods of the hidden stems of a branch (藏干十神), in table order.
pub fn hidden_stem_ten_gods(
    day_master: HeavenlyStem,
    branch: EarthlyBranch,
) -> Vec<HiddenStemTenGod> {
    hidden_stems(branch)
        .iter()
        .map(|h| HiddenStemTenGod {
            hidden: *h,
            ten_god: ten_god(day_master, h.stem),
        })
        .collect()
}
