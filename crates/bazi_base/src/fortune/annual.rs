//! Annual luck (流年).

use tracing::warn;

use crate::pillar::year_pillar;

use super::types::AnnualLuck;

/// `years` consecutive annual-luck rows beginning at `start_year`.
///
/// Stops early, with a warning, where the year or nominal age would
/// overflow `i32`.
pub fn annual_luck(birth_year: i32, start_year: i32, years: usize) -> Vec<AnnualLuck> {
    let rows: Vec<AnnualLuck> = (0..years)
        .map_while(|i| annual_row(birth_year, start_year, i))
        .collect();
    if rows.len() < years {
        warn!(
            requested = years,
            generated = rows.len(),
            birth_year,
            start_year,
            "annual luck truncated at integer overflow"
        );
    }
    rows
}

fn annual_row(birth_year: i32, start_year: i32, i: usize) -> Option<AnnualLuck> {
    let year = start_year.checked_add(i32::try_from(i).ok()?)?;
    let age = year.checked_sub(birth_year)?.checked_add(1)?;
    let p = year_pillar(year);
    Some(AnnualLuck {
        year,
        age,
        stem: p.stem,
        branch: p.branch,
        stem_element: p.stem.element(),
        branch_element: p.branch.element(),
    })
}
