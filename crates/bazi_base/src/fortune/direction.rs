//! Cycle direction (陽男陰女順行, 陰男陽女逆行).

use crate::stem::{HeavenlyStem, Polarity};

use super::types::{FortuneDirection, Gender};

/// Forward for a Yang-year male or a Yin-year female, otherwise backward.
pub const fn fortune_direction(year_stem: HeavenlyStem, gender: Gender) -> FortuneDirection {
    let yang_year = matches!(year_stem.polarity(), Polarity::Yang);
    match (gender, yang_year) {
        (Gender::Male, true) | (Gender::Female, false) => FortuneDirection::Forward,
        (Gender::Male, false) | (Gender::Female, true) => FortuneDirection::Backward,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stem::ALL_STEMS;

    #[test]
    fn direction_table() {
        use HeavenlyStem::*;
        assert_eq!(fortune_direction(Jia, Gender::Male), FortuneDirection::Forward);
        assert_eq!(fortune_direction(Yi, Gender::Male), FortuneDirection::Backward);
        assert_eq!(fortune_direction(Geng, Gender::Female), FortuneDirection::Backward);
        assert_eq!(fortune_direction(Yi, Gender::Female), FortuneDirection::Forward);
    }

    #[test]
    fn genders_always_opposite() {
        for s in ALL_STEMS {
            assert_ne!(
                fortune_direction(s, Gender::Male),
                fortune_direction(s, Gender::Female)
            );
        }
    }
}
