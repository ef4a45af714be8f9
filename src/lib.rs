//! altium-resistor-gen: resistor library generator for Altium Designer
//!
//! This library enumerates standard resistor values across a logarithmic
//! decade series (E96 by default), chip package sizes and decades of
//! magnitude, and emits one CSV row per variant for use as an Altium
//! Designer component database.
//!
//! # Architecture
//!
//! Generation is a single deterministic transformation: parameter
//! enumeration, per-row naming and encoding, then sequential CSV emission.
//! Row order is part of the output contract (library files are diffed), so
//! rows are produced in a fixed nested size/decade/value order.
//!
//! # Modules
//!
//! - [`config`] — Configuration loading and validation
//! - [`error`] — Configuration error types
//! - [`library`] — Value series, row encoding and table writing

pub mod config;
pub mod error;
pub mod library;
