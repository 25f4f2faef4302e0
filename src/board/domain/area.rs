//! Task categories and their chart colours.

use super::BoardDomainError;
use serde::{Serialize, Serializer};
use std::fmt;

/// Colour used for areas outside the known palette.
pub const FALLBACK_COLOR: &str = "#7f7f7f";

/// Category a task belongs to.
///
/// The six known areas each map to a fixed colour. Any other non-empty label
/// is accepted as [`Area::Other`] and drawn with [`FALLBACK_COLOR`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Area {
    /// Photo resist supply.
    PhotoResist,
    /// Wet chemicals.
    Chemicals,
    /// Polishing slurry.
    Slurry,
    /// Bulk gas supply.
    BulkGas,
    /// Specialty process gas.
    ProcessGas,
    /// Wafer supply.
    Wafer,
    /// Any label outside the known set.
    Other(String),
}

impl Area {
    /// Known areas in palette order.
    pub const KNOWN: [Self; 6] = [
        Self::PhotoResist,
        Self::Chemicals,
        Self::Slurry,
        Self::BulkGas,
        Self::ProcessGas,
        Self::Wafer,
    ];

    /// Parses an area label, matching known areas case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyArea`] when the label is blank.
    pub fn parse(label: &str) -> Result<Self, BoardDomainError> {
        let trimmed = label.trim();
        if trimmed.is_empty() {
            return Err(BoardDomainError::EmptyArea);
        }

        let known = Self::KNOWN
            .into_iter()
            .find(|area| area.label().eq_ignore_ascii_case(trimmed));
        Ok(known.unwrap_or_else(|| Self::Other(trimmed.to_owned())))
    }

    /// Returns the display label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::PhotoResist => "Photo Resist",
            Self::Chemicals => "Chemicals",
            Self::Slurry => "Slurry",
            Self::BulkGas => "Bulk Gas",
            Self::ProcessGas => "Process Gas",
            Self::Wafer => "Wafer",
            Self::Other(label) => label,
        }
    }

    /// Returns the palette colour, or `None` for unknown areas.
    #[must_use]
    pub const fn known_color(&self) -> Option<&'static str> {
        match self {
            Self::PhotoResist => Some("#1f77b4"),
            Self::Chemicals => Some("#ff7f0e"),
            Self::Slurry => Some("#2ca02c"),
            Self::BulkGas => Some("#d62728"),
            Self::ProcessGas => Some("#9467bd"),
            Self::Wafer => Some("#8c564b"),
            Self::Other(_) => None,
        }
    }

    /// Returns the chart colour, falling back to [`FALLBACK_COLOR`].
    #[must_use]
    pub fn color(&self) -> &'static str {
        self.known_color().unwrap_or(FALLBACK_COLOR)
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Area {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}
