//! Configuration structures for deserialisation.
//!
//! These structures map directly to the JSON configuration file format.
//! Every field has a default matching the stock Atlantix resistor library,
//! so an empty file (or no file at all) produces a complete configuration.

use serde::Deserialize;

use crate::error::ConfigError;

/// Root configuration structure.
///
/// This is the top-level structure that matches the JSON config file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Optional JSON schema reference (ignored during parsing).
    #[serde(rename = "$schema", default)]
    _schema: Option<String>,

    /// Optional comment field (ignored during parsing).
    #[serde(rename = "_comment", default)]
    _comment: Option<String>,

    /// Value enumeration settings.
    #[serde(default)]
    pub generation: GenerationConfig,

    /// Library identity settings (fixed columns of the output table).
    #[serde(default)]
    pub library: LibraryConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any validation checks fail.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.generation.series == 0 {
            return Err(ConfigError::ValidationError {
                message: "series density must be a positive integer".to_string(),
            });
        }
        if self.generation.sizes.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "at least one package size must be configured".to_string(),
            });
        }
        if self.generation.decades.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "at least one decade multiplier must be configured".to_string(),
            });
        }
        Ok(())
    }
}

/// Value enumeration configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerationConfig {
    /// Steps per decade of the logarithmic value series.
    /// Default: 96 (the E96 standard series).
    #[serde(default = "default_series")]
    pub series: u32,

    /// Package size codes to enumerate, in output order.
    #[serde(default = "default_sizes")]
    pub sizes: Vec<String>,

    /// Decade multipliers to enumerate, in output order.
    #[serde(default = "default_decades")]
    pub decades: Vec<u64>,

    /// Tolerance label applied to every generated row.
    #[serde(default = "default_tolerance")]
    pub tolerance: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            series: default_series(),
            sizes: default_sizes(),
            decades: default_decades(),
            tolerance: default_tolerance(),
        }
    }
}

const fn default_series() -> u32 {
    96
}

fn default_sizes() -> Vec<String> {
    vec!["0402".to_string(), "0603".to_string(), "0805".to_string()]
}

fn default_decades() -> Vec<u64> {
    vec![1, 10, 100, 1_000, 10_000, 100_000, 1_000_000]
}

fn default_tolerance() -> String {
    "100ppm".to_string()
}

/// Library identity configuration.
///
/// These values fill the constant columns of every output row.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LibraryConfig {
    /// Schematic library filename referenced by the `Library Path` column.
    #[serde(default = "default_schematic_library")]
    pub schematic_library: String,

    /// Symbol name within the schematic library.
    #[serde(default = "default_library_ref")]
    pub library_ref: String,

    /// Footprint library filename referenced by the `Footprint Path` column.
    #[serde(default = "default_footprint_library")]
    pub footprint_library: String,

    /// Manufacturer name.
    #[serde(default = "default_manufacturer")]
    pub manufacturer: String,

    /// Supplier name.
    #[serde(default = "default_supplier")]
    pub supplier: String,

    /// Organisation name for the `Company` column.
    #[serde(default = "default_company")]
    pub company: String,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            schematic_library: default_schematic_library(),
            library_ref: default_library_ref(),
            footprint_library: default_footprint_library(),
            manufacturer: default_manufacturer(),
            supplier: default_supplier(),
            company: default_company(),
        }
    }
}

fn default_schematic_library() -> String {
    "Atlantix_R.SchLib".to_string()
}

fn default_library_ref() -> String {
    "Res1".to_string()
}

fn default_footprint_library() -> String {
    "Atlantix_R.PcbLib".to_string()
}

fn default_manufacturer() -> String {
    "Vishay-Dale".to_string()
}

fn default_supplier() -> String {
    "Digi-key".to_string()
}

fn default_company() -> String {
    "Atlantix_Engineering".to_string()
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}
