//! Chip resistor package sizes.
//!
//! Each package size carries the vendor-specific attributes that vary per
//! footprint: power rating, Digi-Key ordering-code suffix and the Vishay
//! CRCW packaging letter.
//!
//! Size codes outside the recognised set are rejected at parse time, so
//! the encoding logic never sees an unknown package.

use std::fmt;

use crate::library::error::{LibraryError, LibraryResult};

/// Chip resistor package size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageSize {
    /// 0402 (1005 metric) chip.
    R0402,
    /// 0603 (1608 metric) chip.
    R0603,
    /// 0805 (2012 metric) chip.
    R0805,
}

impl PackageSize {
    /// Parses a package size from its imperial size code.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::UnsupportedSize`] for codes outside the
    /// recognised set.
    pub fn parse(code: &str) -> LibraryResult<Self> {
        match code {
            "0402" => Ok(Self::R0402),
            "0603" => Ok(Self::R0603),
            "0805" => Ok(Self::R0805),
            other => Err(LibraryError::unsupported_size(other)),
        }
    }

    /// Returns the imperial size code ("0402", "0603", "0805").
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::R0402 => "0402",
            Self::R0603 => "0603",
            Self::R0805 => "0805",
        }
    }

    /// Returns the rated power for the package.
    #[must_use]
    pub const fn power(self) -> &'static str {
        match self {
            Self::R0402 => "62mW",
            Self::R0603 => "100mW",
            Self::R0805 => "125mW",
        }
    }

    /// Returns the Digi-Key ordering-code suffix.
    ///
    /// Ones-place resistors (decade 1) use a doubled packaging letter.
    #[must_use]
    pub const fn ordering_suffix(self, ones_decade: bool) -> &'static str {
        match (self, ones_decade) {
            (Self::R0402, true) => "LLCT-ND",
            (Self::R0402, false) => "LCT-ND",
            (Self::R0603, true) => "HHCT-ND",
            (Self::R0603, false) => "HCT-ND",
            (Self::R0805, true) => "CCCT-ND",
            (Self::R0805, false) => "CCT-ND",
        }
    }

    /// Returns the packaging letter that terminates a Vishay CRCW part
    /// number for this size.
    #[must_use]
    pub const fn manufacturer_letter(self) -> char {
        match self {
            Self::R0402 => 'D',
            Self::R0603 | Self::R0805 => 'A',
        }
    }

    /// Returns the footprint reference for the `Footprint Ref` column.
    #[must_use]
    pub fn footprint_ref(self) -> String {
        format!("RES{}", self.code())
    }
}

impl fmt::Display for PackageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
