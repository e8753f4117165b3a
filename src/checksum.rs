//! GS1 mod-10 check digit arithmetic
//!
//! The same weighted sum is used for GTIN-8/12/13/14, UPC-A and SSCC:
//! digits are enumerated right to left, alternate positions are weighted
//! 3 and 1, and the check digit brings the total up to a multiple of ten.

use crate::error::{ParseError, Result};

fn int_digits(input: &str) -> Result<Vec<u16>> {
    input
        .chars()
        .map(|d| {
            d.to_digit(10)
                .map(|d| d as u16)
                .ok_or_else(|| ParseError::Syntax(format!("expected digits, got {:?}", input)))
        })
        .collect()
}

/// Compute the check digit for a numeric payload (without the check digit).
pub fn compute(payload: &str) -> Result<u8> {
    let digits = int_digits(payload)?;
    let mut even: u16 = 0;
    let mut odd: u16 = 0;

    for i in 1..digits.len() + 1 {
        let curr = digits[digits.len() - i];
        if i % 2 == 0 {
            even += curr;
        } else {
            odd += curr;
        }
    }

    let mut check = (3 * odd + even) % 10;
    if check > 0 {
        check = 10 - check;
    }

    Ok(check as u8)
}

/// Verify the final digit of `value` against the check digit computed over
/// the rest. Fails with [`ParseError::Checksum`] on mismatch.
pub fn verify(value: &str) -> Result<()> {
    if value.len() < 2 {
        return Err(ParseError::Syntax(format!(
            "expected payload and check digit, got {:?}",
            value
        )));
    }
    let (payload, check) = value.split_at(value.len() - 1);
    let expected = compute(payload)?;
    let actual = int_digits(check)?[0] as u8;
    if actual != expected {
        return Err(ParseError::Checksum {
            value: value.to_string(),
            expected,
            actual,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute() {
        assert_eq!(0, compute("0360843951968").unwrap());
        assert_eq!(8, compute("8061414112345").unwrap());
        assert_eq!(7, compute("590123412345").unwrap());
    }

    #[test]
    fn test_verify() {
        assert!(verify("5901234123457").is_ok());
        assert!(verify("106141412345678908").is_ok());
        assert_eq!(
            verify("5901234123450"),
            Err(ParseError::Checksum {
                value: "5901234123450".to_string(),
                expected: 7,
                actual: 0,
            })
        );
    }

    #[test]
    fn test_rejects_non_digits() {
        assert!(compute("12a4").is_err());
        assert!(verify("12a45").is_err());
    }
}
