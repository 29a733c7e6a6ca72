//! Hidden stems (地支藏干) of the 12 earthly branches.
//!
//! Static fact table following classical convention. Every branch carries
//! one to three stems; the `days` of a branch sum to 30 and exactly one entry
//! is the primary (本氣) tier. Both rules are checked at compile time.

use serde::Serialize;

use crate::branch::{ALL_BRANCHES, EarthlyBranch};
use crate::stem::HeavenlyStem;

/// Days apportioned to each branch.
pub const BRANCH_DAYS: u8 = 30;

/// Weight tier of a hidden stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HiddenStemTier {
    /// 本氣
    Primary,
    /// 中氣
    Middle,
    /// 餘氣
    Residual,
}

impl HiddenStemTier {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Middle => "middle",
            Self::Residual => "residual",
        }
    }
}

/// One hidden stem of a branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HiddenStem {
    pub stem: HeavenlyStem,
    pub tier: HiddenStemTier,
    pub days: u8,
}

const fn hs(stem: HeavenlyStem, tier: HiddenStemTier, days: u8) -> HiddenStem {
    HiddenStem { stem, tier, days }
}

use HeavenlyStem::*;
use HiddenStemTier::*;

const ZI: &[HiddenStem] = &[hs(Gui, Primary, 30)];
const CHOU: &[HiddenStem] = &[hs(Ji, Primary, 9), hs(Gui, Middle, 9), hs(Xin, Residual, 12)];
const YIN: &[HiddenStem] = &[hs(Jia, Primary, 7), hs(Bing, Middle, 7), hs(Wu, Residual, 16)];
const MAO: &[HiddenStem] = &[hs(Yi, Primary, 30)];
const CHEN: &[HiddenStem] = &[hs(Wu, Primary, 9), hs(Yi, Middle, 9), hs(Gui, Residual, 12)];
const SI: &[HiddenStem] = &[hs(Bing, Primary, 7), hs(Geng, Middle, 7), hs(Wu, Residual, 16)];
const WU: &[HiddenStem] = &[hs(Ding, Primary, 10), hs(Ji, Residual, 20)];
const WEI: &[HiddenStem] = &[hs(Ji, Primary, 9), hs(Ding, Middle, 9), hs(Yi, Residual, 12)];
const SHEN: &[HiddenStem] = &[hs(Geng, Primary, 7), hs(Ren, Middle, 7), hs(Wu, Residual, 16)];
const YOU: &[HiddenStem] = &[hs(Xin, Primary, 30)];
const XU: &[HiddenStem] = &[hs(Wu, Primary, 9), hs(Xin, Middle, 9), hs(Ding, Residual, 12)];
const HAI: &[HiddenStem] = &[hs(Ren, Primary, 7), hs(Jia, Residual, 23)];

/// Indexed by branch index (子=0 .. 亥=11).
const HIDDEN_STEMS: [&[HiddenStem]; 12] = [ZI, CHOU, YIN, MAO, CHEN, SI, WU, WEI, SHEN, YOU, XU, HAI];

const fn entry_is_valid(entries: &[HiddenStem]) -> bool {
    if entries.is_empty() {
        return false;
    }
    let mut days: u32 = 0;
    let mut primaries = 0;
    let mut i = 0;
    while i < entries.len() {
        days += entries[i].days as u32;
        if matches!(entries[i].tier, HiddenStemTier::Primary) {
            primaries += 1;
        }
        i += 1;
    }
    days == BRANCH_DAYS as u32 && primaries == 1
}

const fn table_is_valid() -> bool {
    let mut i = 0;
    while i < HIDDEN_STEMS.len() {
        if !entry_is_valid(HIDDEN_STEMS[i]) {
            return false;
        }
        i += 1;
    }
    true
}

const _: () = assert!(table_is_valid(), "hidden-stem table violates day/primary rules");

/// Hidden stems of a branch, primary first.
pub const fn hidden_stems(branch: EarthlyBranch) -> &'static [HiddenStem] {
    HIDDEN_STEMS[branch.index() as usize]
}

/// The primary (本氣) hidden stem of a branch.
pub const fn primary_hidden_stem(branch: EarthlyBranch) -> HeavenlyStem {
    // Primary entry is always first in table order.
    hidden_stems(branch)[0].stem
}

/// Whether `stem` is among the hidden stems of `branch`.
pub fn branch_contains_stem(branch: EarthlyBranch, stem: HeavenlyStem) -> bool {
    hidden_stems(branch).iter().any(|h| h.stem == stem)
}

/// True for branches holding a single hidden stem (子卯酉).
pub const fn is_single_stem_branch(branch: EarthlyBranch) -> bool {
    hidden_stems(branch).len() == 1
}

/// Branches in table order, paired with their hidden stems.
pub fn all_hidden_stems() -> impl Iterator<Item = (EarthlyBranch, &'static [HiddenStem])> {
    ALL_BRANCHES.into_iter().map(|b| (b, hidden_stems(b)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn days_sum_to_thirty() {
        for (b, entries) in all_hidden_stems() {
            let total: u32 = entries.iter().map(|h| h.days as u32).sum();
            assert_eq!(total, 30, "branch {b}");
        }
    }

    #[test]
    fn exactly_one_primary_listed_first() {
        for (b, entries) in all_hidden_stems() {
            let primaries = entries
                .iter()
                .filter(|h| h.tier == HiddenStemTier::Primary)
                .count();
            assert_eq!(primaries, 1, "branch {b}");
            assert_eq!(entries[0].tier, HiddenStemTier::Primary, "branch {b}");
        }
    }

    #[test]
    fn single_stem_branches() {
        let singles: Vec<_> = ALL_BRANCHES
            .into_iter()
            .filter(|b| is_single_stem_branch(*b))
            .collect();
        assert_eq!(
            singles,
            vec![EarthlyBranch::Zi, EarthlyBranch::Mao, EarthlyBranch::You]
        );
    }

    #[test]
    fn yin_branch_entry() {
        assert_eq!(
            hidden_stems(EarthlyBranch::Yin),
            &[
                hs(Jia, Primary, 7),
                hs(Bing, Middle, 7),
                hs(Wu, Residual, 16)
            ]
        );
    }

    #[test]
    fn two_stem_branches_have_no_middle() {
        for b in [EarthlyBranch::Wu, EarthlyBranch::Hai] {
            let entries = hidden_stems(b);
            assert_eq!(entries.len(), 2);
            assert!(entries.iter().all(|h| h.tier != HiddenStemTier::Middle));
        }
    }

    #[test]
    fn primary_stems() {
        assert_eq!(primary_hidden_stem(EarthlyBranch::Zi), Gui);
        assert_eq!(primary_hidden_stem(EarthlyBranch::Chou), Ji);
        assert_eq!(primary_hidden_stem(EarthlyBranch::Wu), Ding);
        assert_eq!(primary_hidden_stem(EarthlyBranch::Hai), Ren);
    }

    #[test]
    fn contains_stem() {
        assert!(branch_contains_stem(EarthlyBranch::Chen, Gui));
        assert!(branch_contains_stem(EarthlyBranch::Hai, Jia));
        assert!(!branch_contains_stem(EarthlyBranch::Zi, Ren));
    }
}
