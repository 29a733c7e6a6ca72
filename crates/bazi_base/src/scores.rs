//! Per-element score vector.

use std::ops::Add;

use serde::Serialize;

use crate::element::{ALL_ELEMENTS, FiveElement};

/// One f64 score per element.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ElementScores {
    pub wood: f64,
    pub fire: f64,
    pub earth: f64,
    pub metal: f64,
    pub water: f64,
}

impl ElementScores {
    pub const ZERO: Self = Self {
        wood: 0.0,
        fire: 0.0,
        earth: 0.0,
        metal: 0.0,
        water: 0.0,
    };

    pub const fn get(&self, element: FiveElement) -> f64 {
        match element {
            FiveElement::Wood => self.wood,
            FiveElement::Fire => self.fire,
            FiveElement::Earth => self.earth,
            FiveElement::Metal => self.metal,
            FiveElement::Water => self.water,
        }
    }

    pub fn get_mut(&mut self, element: FiveElement) -> &mut f64 {
        match element {
            FiveElement::Wood => &mut self.wood,
            FiveElement::Fire => &mut self.fire,
            FiveElement::Earth => &mut self.earth,
            FiveElement::Metal => &mut self.metal,
            FiveElement::Water => &mut self.water,
        }
    }

    pub fn accumulate(&mut self, element: FiveElement, value: f64) {
        *self.get_mut(element) += value;
    }

    /// Build by evaluating `f` for each element.
    pub fn from_fn(mut f: impl FnMut(FiveElement) -> f64) -> Self {
        let mut out = Self::ZERO;
        for e in ALL_ELEMENTS {
            *out.get_mut(e) = f(e);
        }
        out
    }

    /// Elementwise map.
    pub fn map(&self, mut f: impl FnMut(FiveElement, f64) -> f64) -> Self {
        Self::from_fn(|e| f(e, self.get(e)))
    }

    /// (element, score) pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (FiveElement, f64)> + '_ {
        ALL_ELEMENTS.into_iter().map(|e| (e, self.get(e)))
    }

    /// Sum over all five elements, in canonical order.
    pub fn total(&self) -> f64 {
        self.iter().map(|(_, v)| v).sum()
    }

    /// First element (canonical order) reaching the maximum score.
    pub fn max_element(&self) -> FiveElement {
        let mut best = FiveElement::Wood;
        for (e, v) in self.iter().skip(1) {
            if v > self.get(best) {
                best = e;
            }
        }
        best
    }

    /// First element (canonical order) reaching the minimum score.
    pub fn min_element(&self) -> FiveElement {
        let mut best = FiveElement::Wood;
        for (e, v) in self.iter().skip(1) {
            if v < self.get(best) {
                best = e;
            }
        }
        best
    }
}

impl Add for ElementScores {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_fn(|e| self.get(e) + rhs.get(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulate_and_get() {
        let mut s = ElementScores::ZERO;
        s.accumulate(FiveElement::Fire, 1.0);
        s.accumulate(FiveElement::Fire, 0.3);
        assert!((s.get(FiveElement::Fire) - 1.3).abs() < 1e-12);
        assert_eq!(s.get(FiveElement::Wood), 0.0);
    }

    #[test]
    fn ties_resolve_to_canonical_order() {
        let s = ElementScores {
            wood: 1.0,
            fire: 2.0,
            earth: 2.0,
            metal: 0.5,
            water: 0.5,
        };
        assert_eq!(s.max_element(), FiveElement::Fire);
        assert_eq!(s.min_element(), FiveElement::Metal);
        assert_eq!(ElementScores::ZERO.max_element(), FiveElement::Wood);
        assert_eq!(ElementScores::ZERO.min_element(), FiveElement::Wood);
    }

    #[test]
    fn elementwise_sum() {
        let a = ElementScores::from_fn(|e| e.index() as f64);
        let b = ElementScores::from_fn(|_| 1.0);
        let c = a + b;
        assert_eq!(c.water, 5.0);
        assert_eq!(c.total(), 15.0);
    }

    #[test]
    fn serializes_with_element_names() {
        let json = serde_json::to_string(&ElementScores::ZERO).unwrap();
        assert!(json.contains("\"Wood\":0.0"));
        assert!(json.contains("\"Water\":0.0"));
    }
}
