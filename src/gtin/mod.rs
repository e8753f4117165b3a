//! Global Trade Item Numbers
//!
//! GTINs come in four lengths: GTIN-8 (EAN-8), GTIN-12 (UPC-A), GTIN-13
//! (EAN-13), and GTIN-14 (packaging level plus GTIN-13). Shorter formats
//! embed into longer ones by zero padding, so the format of a value is
//! decided by its length with leading zeros stripped: a 13-digit value
//! starting with `0` is a zero-padded GTIN-12.

mod rcn;

pub use rcn::{Rcn, RcnRegion, RcnUsage};

use std::fmt;

use pad::{Alignment, PadStr};

use crate::checksum;
use crate::error::{ParseError, Result};
use crate::prefix::GS1Prefix;

/// The four GTIN lengths.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum GtinFormat {
    Gtin8,
    Gtin12,
    Gtin13,
    Gtin14,
}

impl GtinFormat {
    /// Number of digits in this format.
    pub fn length(self) -> usize {
        match self {
            GtinFormat::Gtin8 => 8,
            GtinFormat::Gtin12 => 12,
            GtinFormat::Gtin13 => 13,
            GtinFormat::Gtin14 => 14,
        }
    }

    /// The narrowest format that can hold a value of `stripped_length`
    /// significant digits.
    fn from_stripped_length(stripped_length: usize) -> Option<GtinFormat> {
        match stripped_length {
            0..=8 => Some(GtinFormat::Gtin8),
            9..=12 => Some(GtinFormat::Gtin12),
            13 => Some(GtinFormat::Gtin13),
            14 => Some(GtinFormat::Gtin14),
            _ => None,
        }
    }
}

impl fmt::Display for GtinFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GtinFormat::Gtin8 => write!(f, "GTIN-8"),
            GtinFormat::Gtin12 => write!(f, "GTIN-12"),
            GtinFormat::Gtin13 => write!(f, "GTIN-13"),
            GtinFormat::Gtin14 => write!(f, "GTIN-14"),
        }
    }
}

/// A parsed Global Trade Item Number.
#[derive(Debug, Clone, PartialEq)]
pub struct Gtin {
    /// The raw value, stripped of surrounding whitespace.
    pub value: String,
    /// The GTIN format, decided by the number of significant digits.
    pub format: GtinFormat,
    /// The GS1 prefix range the number was issued under, if known.
    pub prefix: Option<GS1Prefix>,
    /// The GS1 Company Prefix, where the prefix range has a well-known
    /// company prefix length.
    pub company_prefix: Option<String>,
    /// All digits of the value except the final check digit.
    pub payload: String,
    /// The check digit.
    pub check_digit: u8,
    /// The packaging level, for GTIN-14 values.
    pub packaging_level: Option<u8>,
    /// Restricted Circulation Number refinement, set when the leading
    /// digits mark the value as reserved for local use.
    pub rcn: Option<Rcn>,
}

impl Gtin {
    /// Parse a GTIN-8, GTIN-12, GTIN-13, or GTIN-14.
    ///
    /// If the value is a Restricted Circulation Number the result carries
    /// the [`Rcn`] refinement, with variable weight or price extracted
    /// according to `rcn_region`'s rules when one is given.
    pub fn parse(value: &str, rcn_region: Option<RcnRegion>) -> Result<Gtin> {
        let value = value.trim();

        if !matches!(value.len(), 8 | 12 | 13 | 14) {
            return Err(ParseError::Syntax(format!(
                "failed to parse {:?} as GTIN: expected 8, 12, 13, or 14 digits, got {}",
                value,
                value.len()
            )));
        }
        if !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::Syntax(format!(
                "failed to parse {:?} as GTIN: expected a numerical value",
                value
            )));
        }

        checksum::verify(value)?;

        let stripped_length = value.trim_start_matches('0').len();
        let format = GtinFormat::from_stripped_length(stripped_length).ok_or_else(|| {
            ParseError::Syntax(format!(
                "failed to parse {:?} as GTIN: too many significant digits",
                value
            ))
        })?;

        let canonical = value.pad(14, '0', Alignment::Right, false);
        let prefix = match format {
            // GTIN-8 prefixes are assigned on the 8-digit form.
            GtinFormat::Gtin8 => GS1Prefix::extract(&canonical[6..]),
            _ => GS1Prefix::extract(&canonical[1..]),
        };
        // GTIN-8s are allocated directly by Member Organisations and do not
        // embed a company prefix.
        let company_prefix = match format {
            GtinFormat::Gtin8 => None,
            _ => prefix
                .as_ref()
                .and_then(|p| p.company_prefix_length)
                .map(|len| canonical[1..1 + len as usize].to_string()),
        };

        let packaging_level = match format {
            GtinFormat::Gtin14 => canonical[..1].parse().ok(),
            _ => None,
        };

        let rcn = rcn::classify(format, &canonical)
            .map(|usage| rcn::interpret(usage, rcn_region, &canonical[1..]));

        Ok(Gtin {
            value: value.to_string(),
            format,
            prefix,
            company_prefix,
            payload: value[..value.len() - 1].to_string(),
            check_digit: canonical.as_bytes()[13] - b'0',
            packaging_level,
            rcn,
        })
    }

    /// True if this value is a Restricted Circulation Number.
    pub fn is_rcn(&self) -> bool {
        self.rcn.is_some()
    }

    fn as_format(&self, target: GtinFormat) -> Result<String> {
        if self.format.length() > target.length() {
            return Err(ParseError::Syntax(format!(
                "{} {:?} cannot be converted to {}",
                self.format, self.value, target
            )));
        }
        Ok(self.as_gtin_14()[14 - target.length()..].to_string())
    }

    /// The canonical 14-digit form.
    pub fn as_gtin_14(&self) -> String {
        self.value.pad(14, '0', Alignment::Right, false)
    }

    /// The 13-digit form. Fails for GTIN-14 values.
    pub fn as_gtin_13(&self) -> Result<String> {
        self.as_format(GtinFormat::Gtin13)
    }

    /// The 12-digit form. Fails for GTIN-13 and GTIN-14 values.
    pub fn as_gtin_12(&self) -> Result<String> {
        self.as_format(GtinFormat::Gtin12)
    }

    /// The 8-digit form. Fails for anything but GTIN-8 values.
    pub fn as_gtin_8(&self) -> Result<String> {
        self.as_format(GtinFormat::Gtin8)
    }
}

impl fmt::Display for Gtin {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_gtin_13() {
        let gtin = Gtin::parse("5901234123457", None).unwrap();
        assert_eq!(gtin.format, GtinFormat::Gtin13);
        assert_eq!(gtin.payload, "590123412345");
        assert_eq!(gtin.check_digit, 7);
        assert_eq!(gtin.prefix.as_ref().unwrap().usage, "GS1 Poland");
        assert_eq!(gtin.company_prefix.as_deref(), Some("5901234"));
        assert!(!gtin.is_rcn());
        assert_eq!(gtin.packaging_level, None);
    }

    #[test]
    fn test_parse_gtin_8() {
        let gtin = Gtin::parse("96385074", None).unwrap();
        assert_eq!(gtin.format, GtinFormat::Gtin8);
        assert_eq!(gtin.as_gtin_14(), "00000096385074");
    }

    #[test]
    fn test_parse_gtin_14() {
        let gtin = Gtin::parse("12991111111110", None).unwrap();
        assert_eq!(gtin.format, GtinFormat::Gtin14);
        assert_eq!(gtin.packaging_level, Some(1));
    }

    #[test]
    fn test_zero_padded_gtin_12_keeps_gtin_12_format() {
        let gtin = Gtin::parse("00012345678905", None).unwrap();
        assert_eq!(gtin.format, GtinFormat::Gtin12);
        assert_eq!(gtin.as_gtin_12().unwrap(), "012345678905");
        assert_eq!(gtin.as_gtin_13().unwrap(), "0012345678905");
    }

    #[test]
    fn test_narrowing_conversion_fails() {
        let gtin = Gtin::parse("5901234123457", None).unwrap();
        assert!(gtin.as_gtin_12().is_err());
        assert!(gtin.as_gtin_8().is_err());
        assert_eq!(gtin.as_gtin_13().unwrap(), "5901234123457");
    }

    #[test]
    fn test_invalid_length() {
        let error = Gtin::parse("123456789", None).unwrap_err();
        assert!(matches!(error, ParseError::Syntax(_)));
    }

    #[test]
    fn test_non_digits() {
        assert!(Gtin::parse("590123412345x", None).is_err());
    }

    #[test]
    fn test_bad_check_digit() {
        let error = Gtin::parse("5901234123450", None).unwrap_err();
        assert!(error.is_checksum());
    }

    #[test]
    fn test_whitespace_is_stripped() {
        let gtin = Gtin::parse("  5901234123457\n", None).unwrap();
        assert_eq!(gtin.value, "5901234123457");
    }
}
