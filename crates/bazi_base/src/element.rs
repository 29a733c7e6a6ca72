//! Five elements (五行) and their generating / controlling cycle.
//!
//! The canonical order is Wood, Fire, Earth, Metal, Water. Each element
//! produces its successor and overcomes the element two steps ahead, so every
//! pairwise relation reduces to a distance modulo 5.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BaziError;

/// The five elements in canonical cyclic order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FiveElement {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All 5 elements in canonical order (index 0 = Wood).
pub const ALL_ELEMENTS: [FiveElement; 5] = [
    FiveElement::Wood,
    FiveElement::Fire,
    FiveElement::Earth,
    FiveElement::Metal,
    FiveElement::Water,
];

impl FiveElement {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    /// Chinese character (木火土金水).
    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// 0-based index in canonical order (Wood=0 .. Water=4).
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// Element at a canonical index.
    pub fn from_index(index: u8) -> Result<Self, BaziError> {
        ALL_ELEMENTS
            .get(index as usize)
            .copied()
            .ok_or_else(|| BaziError::index("five-element", index, 5))
    }

    /// The element this one produces (木生火).
    pub const fn produces(self) -> Self {
        ALL_ELEMENTS[((self.index() + 1) % 5) as usize]
    }

    /// The element this one overcomes (木克土).
    pub const fn overcomes(self) -> Self {
        ALL_ELEMENTS[((self.index() + 2) % 5) as usize]
    }

    /// The element that overcomes this one.
    pub const fn overcome_by(self) -> Self {
        ALL_ELEMENTS[((self.index() + 3) % 5) as usize]
    }

    /// The element that produces this one.
    pub const fn produced_by(self) -> Self {
        ALL_ELEMENTS[((self.index() + 4) % 5) as usize]
    }
}

impl Display for FiveElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FiveElement {
    type Err = BaziError;

    /// Accepts the Chinese character or the English name (any case).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        ALL_ELEMENTS
            .into_iter()
            .find(|e| e.chinese() == t || e.name().eq_ignore_ascii_case(t))
            .ok_or_else(|| BaziError::InvalidElement(s.to_string()))
    }
}

/// Relation from one element to another, seen from the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WuXingRelation {
    /// 同類
    Same,
    /// 我生
    Produce,
    /// 我克
    Overcome,
    /// 克我
    Overcomed,
    /// 生我
    Produced,
}

impl WuXingRelation {
    /// Cyclic distance 0..4 (same, produce, overcome, overcomed, produced).
    pub const fn distance(self) -> u8 {
        match self {
            Self::Same => 0,
            Self::Produce => 1,
            Self::Overcome => 2,
            Self::Overcomed => 3,
            Self::Produced => 4,
        }
    }

    /// Relation for a cyclic distance; `d` is taken mod 5.
    pub const fn from_distance(d: u8) -> Self {
        match d % 5 {
            0 => Self::Same,
            1 => Self::Produce,
            2 => Self::Overcome,
            3 => Self::Overcomed,
            _ => Self::Produced,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Same => "same",
            Self::Produce => "produce",
            Self::Overcome => "overcome",
            Self::Overcomed => "overcomed",
            Self::Produced => "produced",
        }
    }
}

impl Display for WuXingRelation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Cyclic distance from `from` to `to`: `(to - from + 5) mod 5`.
pub const fn element_distance(from: FiveElement, to: FiveElement) -> u8 {
    (to.index() + 5 - from.index()) % 5
}

/// Relation of `to` as seen from `from`.
///
/// Total over all 25 ordered pairs.
pub const fn relation(from: FiveElement, to: FiveElement) -> WuXingRelation {
    WuXingRelation::from_distance(element_distance(from, to))
}
