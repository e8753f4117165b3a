//! Universal Product Codes
//!
//! UPC-A is the 12-digit product code equivalent to a zero-padded GTIN-12.
//! UPC-E is its zero-suppressed 6-digit form, transmitted with or without
//! the number system digit and check digit. The check digit of a UPC-E is
//! always the check digit of its UPC-A expansion.

use std::fmt;

use crate::checksum;
use crate::error::{ParseError, Result};

/// The two UPC formats.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum UpcFormat {
    UpcA,
    UpcE,
}

impl fmt::Display for UpcFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            UpcFormat::UpcA => write!(f, "UPC-A"),
            UpcFormat::UpcE => write!(f, "UPC-E"),
        }
    }
}

/// A parsed Universal Product Code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upc {
    /// The raw value, stripped of surrounding whitespace.
    pub value: String,
    pub format: UpcFormat,
    /// The number system digit: the first digit of a UPC-A, or the digit a
    /// UPC-E expands under (always 0 or 1).
    pub number_system_digit: u8,
    /// For UPC-A, the 11 digits before the check digit; for UPC-E, the
    /// 6-digit zero-suppressed body.
    pub payload: String,
    /// The check digit of the UPC-A form. Computed if the transmitted
    /// UPC-E form did not include it.
    pub check_digit: u8,
}

impl Upc {
    /// Parse a UPC-A (12 digits) or UPC-E (6, 7, or 8 digits).
    ///
    /// A 7-digit UPC-E is the 6-digit body plus check digit; an 8-digit
    /// UPC-E is number system digit, body, and check digit.
    pub fn parse(value: &str) -> Result<Upc> {
        let value = value.trim();
        if !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::Syntax(format!(
                "failed to parse {:?} as UPC: expected a numerical value",
                value
            )));
        }
        match value.len() {
            12 => Self::parse_upc_a(value),
            6..=8 => Self::parse_upc_e(value),
            length => Err(ParseError::Syntax(format!(
                "failed to parse {:?} as UPC: expected 6, 7, 8, or 12 digits, got {}",
                value, length
            ))),
        }
    }

    fn parse_upc_a(value: &str) -> Result<Upc> {
        checksum::verify(value)?;
        let digits = value.as_bytes();
        Ok(Upc {
            value: value.to_string(),
            format: UpcFormat::UpcA,
            number_system_digit: digits[0] - b'0',
            payload: value[..11].to_string(),
            check_digit: digits[11] - b'0',
        })
    }

    fn parse_upc_e(value: &str) -> Result<Upc> {
        let (number_system_digit, body, transmitted_check) = match value.len() {
            6 => (0, &value[..6], None),
            7 => (0, &value[..6], Some(value.as_bytes()[6] - b'0')),
            8 => (
                value.as_bytes()[0] - b'0',
                &value[1..7],
                Some(value.as_bytes()[7] - b'0'),
            ),
            _ => unreachable!("callers only pass 6-8 digit values"),
        };
        if number_system_digit > 1 {
            return Err(ParseError::Syntax(format!(
                "failed to parse {:?} as UPC-E: number system digit must be 0 or 1, got {}",
                value, number_system_digit
            )));
        }

        let expanded = expand_upc_e_body(number_system_digit, body);
        let check_digit = checksum::compute(&expanded)?;
        if let Some(actual) = transmitted_check {
            if actual != check_digit {
                return Err(ParseError::Checksum {
                    value: value.to_string(),
                    expected: check_digit,
                    actual,
                });
            }
        }

        Ok(Upc {
            value: value.to_string(),
            format: UpcFormat::UpcE,
            number_system_digit,
            payload: body.to_string(),
            check_digit,
        })
    }

    /// The 12-digit UPC-A form.
    pub fn as_upc_a(&self) -> String {
        match self.format {
            UpcFormat::UpcA => self.value.clone(),
            UpcFormat::UpcE => format!(
                "{}{}",
                expand_upc_e_body(self.number_system_digit, &self.payload),
                self.check_digit
            ),
        }
    }

    /// The canonical 8-digit UPC-E form: number system digit, body, and
    /// check digit. Fails for UPC-A values whose body fits none of the
    /// zero suppression patterns.
    pub fn as_upc_e(&self) -> Result<String> {
        let body = match self.format {
            UpcFormat::UpcE => self.payload.clone(),
            UpcFormat::UpcA => compress_upc_a_body(&self.payload)?,
        };
        Ok(format!(
            "{}{}{}",
            self.number_system_digit, body, self.check_digit
        ))
    }
}

impl fmt::Display for Upc {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Expand a 6-digit UPC-E body into the 11-digit UPC-A payload.
///
/// The final body digit selects where the suppressed zeros are
/// reinserted.
fn expand_upc_e_body(number_system_digit: u8, body: &str) -> String {
    let d = body.as_bytes();
    let (manufacturer, product) = match d[5] {
        b'0' | b'1' | b'2' => (
            format!("{}{}{}00", d[0] as char, d[1] as char, d[5] as char),
            format!("00{}{}{}", d[2] as char, d[3] as char, d[4] as char),
        ),
        b'3' => (
            format!("{}{}{}00", d[0] as char, d[1] as char, d[2] as char),
            format!("000{}{}", d[3] as char, d[4] as char),
        ),
        b'4' => (
            format!("{}{}{}{}0", d[0] as char, d[1] as char, d[2] as char, d[3] as char),
            format!("0000{}", d[4] as char),
        ),
        _ => (body[..5].to_string(), format!("0000{}", d[5] as char)),
    };
    format!("{}{}{}", number_system_digit, manufacturer, product)
}

/// Compress an 11-digit UPC-A payload (without the number system digit
/// prefix stripped: `payload[0]` is the number system digit) into a
/// 6-digit UPC-E body, when one of the zero suppression patterns fits.
fn compress_upc_a_body(payload: &str) -> Result<String> {
    let manufacturer = &payload[1..6];
    let product = &payload[6..11];
    let m = manufacturer.as_bytes();
    let p = product.as_bytes();

    let body = if m[3] == b'0' && m[4] == b'0' && m[2] <= b'2' && product.starts_with("00") {
        format!(
            "{}{}{}{}",
            &manufacturer[..2],
            p[2] as char,
            &product[3..],
            m[2] as char
        )
    } else if m[3] == b'0' && m[4] == b'0' && product.starts_with("000") {
        format!("{}{}3", &manufacturer[..3], &product[3..])
    } else if m[4] == b'0' && product.starts_with("0000") {
        format!("{}{}4", &manufacturer[..4], p[4] as char)
    } else if product.starts_with("0000") && p[4] >= b'5' {
        format!("{}{}", manufacturer, p[4] as char)
    } else {
        return Err(ParseError::Syntax(format!(
            "UPC-A payload {:?} does not fit any UPC-E zero suppression pattern",
            payload
        )));
    };
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_upc_a() {
        let upc = Upc::parse("036000291452").unwrap();
        assert_eq!(upc.format, UpcFormat::UpcA);
        assert_eq!(upc.number_system_digit, 0);
        assert_eq!(upc.payload, "03600029145");
        assert_eq!(upc.check_digit, 2);
        assert_eq!(upc.as_upc_a(), "036000291452");
    }

    #[test]
    fn test_parse_upc_a_bad_check_digit() {
        assert!(Upc::parse("036000291453").unwrap_err().is_checksum());
    }

    #[test]
    fn test_parse_upc_e_six_digits() {
        let upc = Upc::parse("123450").unwrap();
        assert_eq!(upc.format, UpcFormat::UpcE);
        assert_eq!(upc.number_system_digit, 0);
        assert_eq!(upc.check_digit, 5);
        assert_eq!(upc.as_upc_a(), "012000003455");
        assert_eq!(upc.as_upc_e().unwrap(), "01234505");
    }

    #[test]
    fn test_parse_upc_e_seven_digits() {
        let upc = Upc::parse("1234505").unwrap();
        assert_eq!(upc.as_upc_a(), "012000003455");
        assert!(Upc::parse("1234506").unwrap_err().is_checksum());
    }

    #[test]
    fn test_parse_upc_e_eight_digits() {
        let upc = Upc::parse("01234505").unwrap();
        assert_eq!(upc.as_upc_a(), "012000003455");
        assert_eq!(upc.as_upc_e().unwrap(), "01234505");

        let upc = Upc::parse("11234502").unwrap();
        assert_eq!(upc.number_system_digit, 1);
        assert_eq!(upc.as_upc_a(), "112000003452");
    }

    #[test]
    fn test_upc_e_number_system_must_be_0_or_1() {
        assert!(Upc::parse("21234505").is_err());
    }

    #[test]
    fn test_expansion_patterns() {
        assert_eq!(expand_upc_e_body(0, "123450"), "01200000345");
        assert_eq!(expand_upc_e_body(0, "123453"), "01230000045");
        assert_eq!(expand_upc_e_body(0, "123454"), "01234000005");
        assert_eq!(expand_upc_e_body(0, "123457"), "01234500007");
    }

    #[test]
    fn test_compression_round_trips() {
        for body in ["123450", "123123", "123453", "123454", "123457"] {
            let expanded = expand_upc_e_body(0, body);
            assert_eq!(compress_upc_a_body(&expanded).unwrap(), body, "{}", body);
        }
    }

    #[test]
    fn test_incompressible_upc_a() {
        let upc = Upc::parse("036000291452").unwrap();
        assert!(upc.as_upc_e().is_err());
    }
}
