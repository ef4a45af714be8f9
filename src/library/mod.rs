//! Resistor library generation.
//!
//! Everything needed to turn a parameter set into an ordered sequence of
//! component database rows:
//!
//! - [`series`] — logarithmic mantissa series (E96 and friends)
//! - [`package`] — chip package sizes and their vendor attributes
//! - [`decade`] — decade multipliers and per-decade value formatting
//! - [`row`] — the 15-column record and its encoder
//! - [`generator`] — validated parameter resolution and nested iteration
//! - [`writer`] — CSV emission to any sink
//! - [`error`] — error types for the above

pub mod decade;
pub mod error;
pub mod generator;
pub mod package;
pub mod row;
pub mod series;
pub mod writer;

pub use decade::{Decade, ValueStrings};
pub use error::{LibraryError, LibraryResult};
pub use generator::{GenerationParams, Generator};
pub use package::PackageSize;
pub use row::{LibraryIdentity, LibraryRow};
