//! Error types
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ParseError>;

/// Error returned when barcode data cannot be interpreted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The data is structurally malformed: wrong length, a non-digit where a
    /// digit is required, an unknown Application Identifier, or a separator
    /// in an illegal position.
    #[error("{0}")]
    Syntax(String),

    /// A check digit disagreed with the one computed from the payload.
    #[error("invalid check digit for {value:?}: expected {expected}, got {actual}")]
    Checksum {
        value: String,
        expected: u8,
        actual: u8,
    },
}

impl ParseError {
    /// True if this error is a check digit mismatch rather than a
    /// structural problem.
    pub fn is_checksum(&self) -> bool {
        matches!(self, ParseError::Checksum { .. })
    }
}

/// Error returned when a string does not name a known RCN region.
///
/// This is an input-domain error, not a parse failure: the barcode data may
/// be fine, but the caller asked for rules of a region we know nothing about.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RcnRegionError {
    #[error("{0:?} is not a valid RCN region")]
    UnknownRegion(String),
    #[error("expected ISO 3166-1 numeric code to be 3 digits, got {0:?}")]
    InvalidNumericCode(String),
}
