//! Error types for BaZi calculations.
//!
//! Stems, branches and elements are closed enums, so these errors only
//! arise where untyped input (strings, raw indices) enters the crate.

use thiserror::Error;

/// Errors from BaZi base calculations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum BaziError {
    /// Input is not one of the 10 heavenly stems.
    #[error("invalid heavenly stem: {0:?}")]
    InvalidStem(String),
    /// Input is not one of the 12 earthly branches.
    #[error("invalid earthly branch: {0:?}")]
    InvalidBranch(String),
    /// Input is not one of the 5 elements.
    #[error("invalid five-element: {0:?}")]
    InvalidElement(String),
    /// Input is not a two-character stem/branch pair.
    #[error("invalid pillar: {0:?}")]
    InvalidPillar(String),
    /// Raw index outside a closed domain.
    #[error("index {index} out of range for {domain} (0..{len})")]
    InvalidIndex {
        domain: &'static str,
        index: u8,
        len: u8,
    },
}

impl BaziError {
    pub(crate) fn index(domain: &'static str, index: u8, len: u8) -> Self {
        Self::InvalidIndex { domain, index, len }
    }
}
