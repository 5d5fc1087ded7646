//! Errors raised while loading location files.

use std::fmt;
use std::io;

use camino::Utf8PathBuf;
use thiserror::Error;

/// Numeric fields of a location record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Horizontal coordinate.
    X,
    /// Vertical coordinate.
    Y,
    /// Zero-based day index.
    Day,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Day => "day",
        })
    }
}

/// Errors returned by [`load_locations`](crate::load_locations) and
/// [`read_locations`](crate::read_locations).
///
/// Line numbers are one-based positions in the input.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened.
    #[error("failed to open location file {path}")]
    Open {
        /// Path that failed to open.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },
    /// The input could not be read or split into records.
    #[error("failed to read location records")]
    Read {
        /// Underlying CSV error.
        #[from]
        source: csv::Error,
    },
    /// A record did not have exactly four fields.
    #[error("line {line}: expected 4 fields (name,x,y,day), found {found}")]
    FieldCount {
        /// Offending line.
        line: u64,
        /// Number of fields present.
        found: usize,
    },
    /// A numeric field did not parse or was not finite.
    #[error("line {line}: invalid {field} value {value:?}")]
    Parse {
        /// Offending line.
        line: u64,
        /// Field that failed.
        field: Field,
        /// Raw field text.
        value: String,
    },
    /// The day index was not 0, 1 or 2.
    #[error("line {line}: day {value} is out of range (expected 0-2)")]
    DayOutOfRange {
        /// Offending line.
        line: u64,
        /// Rejected day index.
        value: i64,
    },
}

impl LoadError {
    /// Line the error refers to, when it concerns a single record.
    #[must_use]
    pub const fn line(&self) -> Option<u64> {
        match self {
            Self::FieldCount { line, .. }
            | Self::Parse { line, .. }
            | Self::DayOutOfRange { line, .. } => Some(*line),
            Self::Open { .. } | Self::Read { .. } => None,
        }
    }
}
