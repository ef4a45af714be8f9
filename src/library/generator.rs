//! Library generation driver.
//!
//! Resolves the raw parameter set into typed values up front, so every
//! configuration and variant error surfaces before a single row is
//! produced, then drives the canonical nested iteration: package size,
//! then decade, then mantissa value. Row order is a user-visible contract
//! (library files are diffed), so the iteration order is fixed.

use crate::library::decade::Decade;
use crate::library::error::{LibraryError, LibraryResult};
use crate::library::package::PackageSize;
use crate::library::row::{LibraryIdentity, LibraryRow};
use crate::library::series;

/// Raw generation parameters, as supplied by configuration.
#[derive(Debug, Clone)]
pub struct GenerationParams {
    /// Steps per decade of the value series.
    pub series: u32,
    /// Package size codes, in output order.
    pub sizes: Vec<String>,
    /// Decade multipliers, in output order.
    pub decades: Vec<u64>,
    /// Tolerance label applied to every row.
    pub tolerance: String,
    /// Fixed identity strings for the constant columns.
    pub identity: LibraryIdentity,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            series: 96,
            sizes: vec!["0402".to_string(), "0603".to_string(), "0805".to_string()],
            decades: vec![1, 10, 100, 1_000, 10_000, 100_000, 1_000_000],
            tolerance: "100ppm".to_string(),
            identity: LibraryIdentity::default(),
        }
    }
}

/// Validated library generator.
///
/// Construction performs all validation; [`Generator::rows`] is infallible
/// afterwards.
#[derive(Debug)]
pub struct Generator {
    sizes: Vec<PackageSize>,
    decades: Vec<Decade>,
    mantissas: Vec<f64>,
    tolerance: String,
    identity: LibraryIdentity,
}

impl Generator {
    /// Resolves and validates the parameter set.
    ///
    /// # Errors
    ///
    /// Returns an error when the series density is zero, a size or decade
    /// list is empty, or any size code or decade multiplier falls outside
    /// the recognised sets.
    pub fn new(params: &GenerationParams) -> LibraryResult<Self> {
        if params.sizes.is_empty() {
            return Err(LibraryError::EmptySizes);
        }
        if params.decades.is_empty() {
            return Err(LibraryError::EmptyDecades);
        }

        let sizes = params
            .sizes
            .iter()
            .map(|code| PackageSize::parse(code))
            .collect::<LibraryResult<Vec<_>>>()?;
        let decades = params
            .decades
            .iter()
            .map(|&multiplier| Decade::from_multiplier(multiplier))
            .collect::<LibraryResult<Vec<_>>>()?;
        let mantissas = series::mantissa_values(params.series)?;

        Ok(Self {
            sizes,
            decades,
            mantissas,
            tolerance: params.tolerance.clone(),
            identity: params.identity.clone(),
        })
    }

    /// Produces all rows in canonical size/decade/mantissa order.
    ///
    /// Decades beyond the generation range contribute no rows.
    #[must_use]
    pub fn rows(&self) -> Vec<LibraryRow> {
        let mut rows =
            Vec::with_capacity(self.sizes.len() * self.decades.len() * self.mantissas.len());

        for &size in &self.sizes {
            for &decade in &self.decades {
                for &mantissa in &self.mantissas {
                    if let Some(row) =
                        LibraryRow::encode(size, decade, mantissa, &self.tolerance, &self.identity)
                    {
                        rows.push(row);
                    }
                }
            }
        }

        rows
    }
}
