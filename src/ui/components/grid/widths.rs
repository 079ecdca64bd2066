//! Percentage column width arithmetic.

use crate::error::UiError;

/// Validate a first-column width percentage
pub fn first_column_percent(percent: u8) -> Result<u8, UiError> {
    if (1..=99).contains(&percent) {
        Ok(percent)
    } else {
        Err(UiError::InvalidColumnWidth(percent))
    }
}

/// Percent widths for `columns` columns when the first takes `first` percent
/// and the rest share the remainder equally. A lone column takes everything.
pub fn column_percentages(columns: usize, first: u8) -> Vec<f64> {
    match columns {
        0 => Vec::new(),
        1 => vec![100.0],
        n => {
            let first = f64::from(first.min(100));
            let other = (100.0 - first) / (n - 1) as f64;
            std::iter::once(first).chain(std::iter::repeat(other).take(n - 1)).collect()
        }
    }
}

/// Convert percentages into whole cell widths that add up to `total`.
///
/// Cells lost to rounding go to the columns with the largest fractional parts.
pub fn distribute_width(total: u16, percentages: &[f64]) -> Vec<u16> {
    let sum: f64 = percentages.iter().sum();
    if percentages.is_empty() || sum <= 0.0 {
        return vec![0; percentages.len()];
    }

    let exact: Vec<f64> = percentages
        .iter()
        .map(|p| f64::from(total) * p / sum)
        .collect();
    let mut widths: Vec<u16> = exact.iter().map(|w| w.floor() as u16).collect();

    let assigned: u32 = widths.iter().map(|&w| u32::from(w)).sum();
    let mut remaining = u32::from(total).saturating_sub(assigned);

    let mut by_fraction: Vec<usize> = (0..exact.len()).collect();
    by_fraction.sort_by(|&a, &b| {
        let fa = exact[a] - exact[a].floor();
        let fb = exact[b] - exact[b].floor();
        fb.partial_cmp(&fa).unwrap_or(std::cmp::Ordering::Equal)
    });

    for index in by_fraction {
        if remaining == 0 {
            break;
        }
        widths[index] += 1;
        remaining -= 1;
    }
    widths
}
