//! Logarithmic value series generation.
//!
//! Standard resistor series (E96, E48, E24, ...) space their values
//! logarithmically: `steps` values per decade, the k-th being
//! `10^(k/steps)` rounded to two decimal places.

use crate::library::error::{LibraryError, LibraryResult};

/// Computes the normalised mantissa values for a series density.
///
/// Returns `steps` values in ascending order, each in `[1.0, 10.0)` and
/// rounded to two decimal places. The result is deterministic for a given
/// density.
///
/// # Errors
///
/// Returns [`LibraryError::InvalidSeries`] when `steps` is zero.
pub fn mantissa_values(steps: u32) -> LibraryResult<Vec<f64>> {
    if steps == 0 {
        return Err(LibraryError::InvalidSeries { steps });
    }

    let density = f64::from(steps);
    let values = (0..steps)
        .map(|k| round_to_hundredths(10_f64.powf(f64::from(k) / density)))
        .collect();
    Ok(values)
}

/// Rounds to two decimal places, the precision of published E-series
/// tables.
fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
