//! Serial Shipping Container Codes
//!
//! The SSCC is an 18-digit identifier for a logistic unit: an extension
//! digit, the GS1 Company Prefix, a serial reference, and a check digit.

use std::fmt;

use crate::checksum;
use crate::error::{ParseError, Result};
use crate::prefix::GS1Prefix;

/// A parsed Serial Shipping Container Code.
#[derive(Debug, Clone, PartialEq)]
pub struct Sscc {
    /// The raw value, stripped of surrounding whitespace.
    pub value: String,
    /// The extension digit, chosen freely by the issuing company.
    pub extension_digit: u8,
    /// The GS1 prefix range the number was issued under, if known.
    pub prefix: Option<GS1Prefix>,
    /// All digits of the value except the final check digit.
    pub payload: String,
    /// The check digit.
    pub check_digit: u8,
}

impl Sscc {
    /// Parse an 18-digit SSCC.
    pub fn parse(value: &str) -> Result<Sscc> {
        let value = value.trim();

        if value.len() != 18 {
            return Err(ParseError::Syntax(format!(
                "failed to parse {:?} as SSCC: expected 18 digits, got {}",
                value,
                value.len()
            )));
        }
        if !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::Syntax(format!(
                "failed to parse {:?} as SSCC: expected a numerical value",
                value
            )));
        }

        checksum::verify(value)?;

        Ok(Sscc {
            value: value.to_string(),
            extension_digit: value.as_bytes()[0] - b'0',
            prefix: GS1Prefix::extract(&value[1..]),
            payload: value[..17].to_string(),
            check_digit: value.as_bytes()[17] - b'0',
        })
    }

    /// The GS1 Company Prefix, where the prefix range has a well-known
    /// company prefix length.
    pub fn company_prefix(&self) -> Option<&str> {
        let length = self.prefix.as_ref()?.company_prefix_length? as usize;
        self.value.get(1..1 + length)
    }

    /// The serial reference assigned by the issuing company, where the
    /// company prefix length is known.
    pub fn serial_reference(&self) -> Option<&str> {
        let length = self.prefix.as_ref()?.company_prefix_length? as usize;
        self.value.get(1 + length..17)
    }
}

impl fmt::Display for Sscc {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let sscc = Sscc::parse("106141412345678908").unwrap();
        assert_eq!(sscc.extension_digit, 1);
        assert_eq!(sscc.payload, "10614141234567890");
        assert_eq!(sscc.check_digit, 8);
        assert_eq!(sscc.prefix.as_ref().unwrap().usage, "GS1 US");
        assert_eq!(sscc.company_prefix(), Some("0614141"));
        assert_eq!(sscc.serial_reference(), Some("234567890"));
    }

    #[test]
    fn test_wrong_length() {
        assert!(Sscc::parse("10614141234567890").is_err());
        assert!(Sscc::parse("1061414123456789081").is_err());
    }

    #[test]
    fn test_non_digits() {
        assert!(Sscc::parse("10614141234567890x").is_err());
    }

    #[test]
    fn test_bad_check_digit() {
        assert!(Sscc::parse("106141412345678909").unwrap_err().is_checksum());
    }
}
