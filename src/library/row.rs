//! Row encoding for the component database table.
//!
//! One row per component variant. All fields derive deterministically from
//! the (package size, decade, mantissa) triple plus the fixed library
//! identity; nothing is retained between rows.
//!
//! # Naming templates
//!
//! - Part name: `RES_<size>_<display>`
//! - Description: `RES SMT <display> <size> <tolerance> <power>`
//! - Digi-Key ordering code: `541-<display><suffix>`
//! - Vishay part number: `CRCW<size><encoded>FKE<letter>`

use serde::Serialize;

use crate::library::decade::Decade;
use crate::library::package::PackageSize;

/// Fixed identity strings shared by every row of a library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryIdentity {
    /// Schematic library filename (`Library Path` column).
    pub schematic_library: String,
    /// Symbol name within the schematic library (`Library Ref` column).
    pub library_ref: String,
    /// Footprint library filename (`Footprint Path` column).
    pub footprint_library: String,
    /// Manufacturer name (`Manufacturer` column).
    pub manufacturer: String,
    /// Supplier name (`Supplier 1` column).
    pub supplier: String,
    /// Organisation name (`Company` column).
    pub company: String,
}

impl Default for LibraryIdentity {
    fn default() -> Self {
        Self {
            schematic_library: "Atlantix_R.SchLib".to_string(),
            library_ref: "Res1".to_string(),
            footprint_library: "Atlantix_R.PcbLib".to_string(),
            manufacturer: "Vishay-Dale".to_string(),
            supplier: "Digi-key".to_string(),
            company: "Atlantix_Engineering".to_string(),
        }
    }
}

/// One record of the component database table.
///
/// Field order and the serde renames define the 15-column CSV schema; the
/// header row is derived from them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LibraryRow {
    /// Part name, e.g. `RES_0603_4.32`.
    #[serde(rename = "Part")]
    pub part: String,

    /// Human-readable description.
    #[serde(rename = "Description")]
    pub description: String,

    /// Display value string, e.g. `4.32K`.
    #[serde(rename = "Value")]
    pub value: String,

    /// Package size code.
    #[serde(rename = "Case")]
    pub case: String,

    /// Tolerance label.
    #[serde(rename = "Tol")]
    pub tolerance: String,

    /// Rated power for the package.
    #[serde(rename = "Power")]
    pub power: String,

    /// Manufacturer name.
    #[serde(rename = "Manufacturer")]
    pub manufacturer: String,

    /// Manufacturer part number, e.g. `CRCW06034R32FKEA`.
    #[serde(rename = "Manufacturer P/N")]
    pub manufacturer_part: String,

    /// Supplier name.
    #[serde(rename = "Supplier 1")]
    pub supplier: String,

    /// Supplier ordering code, e.g. `541-4.32HHCT-ND`.
    #[serde(rename = "Supplier Part Number 1")]
    pub supplier_part: String,

    /// Schematic library filename.
    #[serde(rename = "Library Path")]
    pub library_path: String,

    /// Symbol name within the schematic library.
    #[serde(rename = "Library Ref")]
    pub library_ref: String,

    /// Footprint library filename.
    #[serde(rename = "Footprint Path")]
    pub footprint_path: String,

    /// Footprint name, `RES` plus the size code.
    #[serde(rename = "Footprint Ref")]
    pub footprint_ref: String,

    /// Organisation name.
    #[serde(rename = "Company")]
    pub company: String,
}

impl LibraryRow {
    /// Encodes one (size, decade, mantissa) triple into a table row.
    ///
    /// Returns `None` for decades beyond the generation range, which
    /// contribute no rows.
    #[must_use]
    pub fn encode(
        size: PackageSize,
        decade: Decade,
        mantissa: f64,
        tolerance: &str,
        identity: &LibraryIdentity,
    ) -> Option<Self> {
        let values = decade.value_strings(mantissa)?;
        let power = size.power();

        let part = format!("RES_{size}_{}", values.display);
        let description = format!("RES SMT {} {size} {tolerance} {power}", values.display);
        let supplier_part = format!(
            "541-{}{}",
            values.display,
            size.ordering_suffix(decade.is_ones())
        );
        let manufacturer_part = format!(
            "CRCW{size}{}FKE{}",
            values.encoded,
            size.manufacturer_letter()
        );

        Some(Self {
            part,
            description,
            value: values.display,
            case: size.code().to_string(),
            tolerance: tolerance.to_string(),
            power: power.to_string(),
            manufacturer: identity.manufacturer.clone(),
            manufacturer_part,
            supplier: identity.supplier.clone(),
            supplier_part,
            library_path: identity.schematic_library.clone(),
            library_ref: identity.library_ref.clone(),
            footprint_path: identity.footprint_library.clone(),
            footprint_ref: size.footprint_ref(),
            company: identity.company.clone(),
        })
    }
}
