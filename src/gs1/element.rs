//! GS1 Element String extraction
//!
//! An Element String is one Application Identifier and its value. Extraction
//! consumes the longest matching AI from the front of the buffer, then reads
//! the value segment by segment according to the AI's format. Values of
//! domain AIs are additionally decoded into GTIN/SSCC/date/decimal/money.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{ParseError, Result};
use crate::gs1::ai::{ApplicationIdentifier, Segment};
use crate::gtin::Gtin;
use crate::parse::ParseConfig;
use crate::sscc::Sscc;

/// An amount of money in a named currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Money {
    pub amount: Decimal,
    /// ISO 4217 alphabetic currency code, e.g. `"SEK"`.
    pub currency: &'static str,
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

/// A single decoded Element String.
#[derive(Debug, Clone, PartialEq)]
pub struct GS1ElementString {
    /// The catalog entry for the Application Identifier.
    pub ai: &'static ApplicationIdentifier,
    /// The raw value, exactly as consumed from the message.
    pub value: String,
    /// The value split into the AI format's segments.
    pub pattern_groups: Vec<String>,
    /// Embedded GTIN, for AIs 01 and 02.
    pub gtin: Option<Gtin>,
    /// Embedded SSCC, for AI 00.
    pub sscc: Option<Sscc>,
    /// Decoded date, for the YYMMDD date AIs.
    pub date: Option<NaiveDate>,
    /// Decoded variable measure or amount, for the implied-decimal AIs.
    pub decimal: Option<Decimal>,
    /// Decoded amount with currency, for the AIs carrying an ISO 4217 code.
    pub money: Option<Money>,
}

/// AIs whose value is a YYMMDD date.
const DATE_AIS: &[&str] = &["11", "12", "13", "15", "16", "17"];

/// Three-digit AI stems whose fourth digit is an implied decimal position
/// and whose value is a plain number.
const DECIMAL_STEMS: &[&str] = &[
    "310", "311", "312", "313", "314", "315", "316", "320", "330", "331", "332", "333", "334",
    "335", "336", "390", "392", "394",
];

/// Three-digit AI stems whose value is an ISO 4217 numeric currency code
/// followed by an implied-decimal amount.
const MONEY_STEMS: &[&str] = &["391", "393"];

impl GS1ElementString {
    /// Extract one Element String from the front of `buffer`.
    ///
    /// The number of characters consumed is `self.len()`; the caller
    /// advances past them (and then deals with any separator itself).
    pub(crate) fn extract(buffer: &str, config: &ParseConfig) -> Result<GS1ElementString> {
        let ai = ApplicationIdentifier::extract_prefix(buffer).ok_or_else(|| {
            ParseError::Syntax(format!(
                "no GS1 Application Identifier found at the start of {:?}",
                buffer
            ))
        })?;
        let rest = &buffer[ai.ai.len()..];
        let pattern_groups = read_segments(ai, rest, &config.separator_chars)?;
        let value: String = pattern_groups.concat();

        let mut element = GS1ElementString {
            ai,
            value,
            pattern_groups,
            gtin: None,
            sscc: None,
            date: None,
            decimal: None,
            money: None,
        };
        element.decode(config)?;
        Ok(element)
    }

    /// Number of characters of the message this Element String covers.
    pub fn len(&self) -> usize {
        self.ai.ai.len() + self.value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Render as human readable interpretation, e.g. `"(17)221231"`.
    pub fn as_hri(&self) -> String {
        format!("({}){}", self.ai.ai, self.value)
    }

    fn decode(&mut self, config: &ParseConfig) -> Result<()> {
        match self.ai.ai {
            "00" => self.sscc = Some(Sscc::parse(&self.value)?),
            "01" | "02" => self.gtin = Some(Gtin::parse(&self.value, config.rcn_region)?),
            ai if DATE_AIS.contains(&ai) => {
                let date = parse_yymmdd(&self.value, config.current_year()).ok_or_else(|| {
                    ParseError::Syntax(format!(
                        "failed to parse GS1 AI {} date {:?}",
                        self.ai.ai, self.value
                    ))
                })?;
                self.date = Some(date);
            }
            ai if ai.len() == 4 && DECIMAL_STEMS.contains(&&ai[..3]) => {
                self.decimal = parse_implied_decimal(ai, &self.value);
            }
            ai if ai.len() == 4 && MONEY_STEMS.contains(&&ai[..3]) => {
                // First group is the numeric currency code, second the amount.
                if let [currency, amount] = self.pattern_groups.as_slice() {
                    self.money = currency_from_numeric(currency).and_then(|currency| {
                        Some(Money {
                            amount: parse_implied_decimal(ai, amount)?,
                            currency,
                        })
                    });
                }
            }
            _ => {}
        }
        Ok(())
    }
}

fn read_segments(
    ai: &'static ApplicationIdentifier,
    rest: &str,
    separator_chars: &[char],
) -> Result<Vec<String>> {
    let mut groups = Vec::new();
    let mut chars = rest.chars().peekable();

    for segment in ai.value_segments() {
        let mut group = String::new();
        if segment.is_variable() {
            while group.len() < segment.max {
                match chars.peek() {
                    Some(&ch) if !separator_chars.contains(&ch) && segment.class.contains(ch) => {
                        group.push(ch);
                        chars.next();
                    }
                    _ => break,
                }
            }
            if group.len() < segment.min {
                return Err(short_value_error(ai, rest, &segment));
            }
        } else {
            for _ in 0..segment.max {
                match chars.next() {
                    Some(ch) if segment.class.contains(ch) => group.push(ch),
                    Some(ch) => {
                        return Err(ParseError::Syntax(format!(
                            "invalid character {:?} in value for GS1 AI {} in {:?}",
                            ch, ai.ai, rest
                        )))
                    }
                    None => return Err(short_value_error(ai, rest, &segment)),
                }
            }
        }
        groups.push(group);
    }
    Ok(groups)
}

fn short_value_error(ai: &ApplicationIdentifier, rest: &str, segment: &Segment) -> ParseError {
    ParseError::Syntax(format!(
        "value {:?} is too short for GS1 AI {} (format {}, expected at least {} more characters)",
        rest, ai.ai, ai.format, segment.min
    ))
}

/// Divide the digits of `value` by 10^n, where n is the final digit of the
/// four-digit AI.
fn parse_implied_decimal(ai: &str, value: &str) -> Option<Decimal> {
    let scale = ai.chars().last()?.to_digit(10)?;
    let number: i64 = value.parse().ok()?;
    Some(Decimal::new(number, scale))
}

/// Parse a GS1 YYMMDD date.
///
/// The two-digit year is resolved to the year within 49 years before and 50
/// years after `reference_year`, per the GS1 General Specifications. A day
/// of `00` means the last day of the month.
fn parse_yymmdd(value: &str, reference_year: i32) -> Option<NaiveDate> {
    if value.len() != 6 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let yy: i32 = value[0..2].parse().ok()?;
    let month: u32 = value[2..4].parse().ok()?;
    let day: u32 = value[4..6].parse().ok()?;
    let year = nearby_year(yy, reference_year);

    if day == 0 {
        last_day_of_month(year, month)
    } else {
        NaiveDate::from_ymd_opt(year, month, day)
    }
}

/// Resolve a two-digit year to the matching year in
/// `[reference_year - 49, reference_year + 50]`.
fn nearby_year(yy: i32, reference_year: i32) -> i32 {
    let mut year = reference_year - reference_year.rem_euclid(100) + yy;
    if year < reference_year - 49 {
        year += 100;
    } else if year > reference_year + 50 {
        year -= 100;
    }
    year
}

fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    next_month.pred_opt().or(Some(first))
}

/// ISO 4217 numeric to alphabetic currency codes, for the AIs that carry a
/// numeric code (391n, 393n). Covers the currencies of the GS1 Member
/// Organisations this library has regional rules for, plus the majors.
fn currency_from_numeric(code: &str) -> Option<&'static str> {
    Some(match code {
        "036" => "AUD",
        "124" => "CAD",
        "156" => "CNY",
        "203" => "CZK",
        "208" => "DKK",
        "348" => "HUF",
        "352" => "ISK",
        "356" => "INR",
        "392" => "JPY",
        "410" => "KRW",
        "554" => "NZD",
        "578" => "NOK",
        "608" => "PHP",
        "634" => "QAR",
        "643" => "RUB",
        "682" => "SAR",
        "702" => "SGD",
        "710" => "ZAR",
        "752" => "SEK",
        "756" => "CHF",
        "764" => "THB",
        "784" => "AED",
        "826" => "GBP",
        "840" => "USD",
        "901" => "TWD",
        "946" => "RON",
        "949" => "TRY",
        "978" => "EUR",
        "985" => "PLN",
        "986" => "BRL",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ParseConfig {
        ParseConfig {
            reference_year: Some(2026),
            ..ParseConfig::default()
        }
    }

    #[test]
    fn test_extract_fixed_length() {
        let element = GS1ElementString::extract("0105901234123457", &config()).unwrap();
        assert_eq!(element.ai.ai, "01");
        assert_eq!(element.value, "05901234123457");
        assert_eq!(element.len(), 16);
        let gtin = element.gtin.unwrap();
        assert_eq!(gtin.value, "05901234123457");
    }

    #[test]
    fn test_extract_variable_length_stops_at_separator() {
        let element = GS1ElementString::extract("10ABC123\u{1d}17221231", &config()).unwrap();
        assert_eq!(element.ai.ai, "10");
        assert_eq!(element.value, "ABC123");
        assert_eq!(element.len(), 8);
    }

    #[test]
    fn test_extract_variable_length_runs_to_end() {
        let element = GS1ElementString::extract("10ABC123", &config()).unwrap();
        assert_eq!(element.value, "ABC123");
    }

    #[test]
    fn test_extract_unknown_ai() {
        assert!(GS1ElementString::extract("0412345678", &config()).is_err());
    }

    #[test]
    fn test_extract_too_short_fixed_value() {
        assert!(GS1ElementString::extract("0159", &config()).is_err());
    }

    #[test]
    fn test_date_decoding() {
        let element = GS1ElementString::extract("15210526", &config()).unwrap();
        assert_eq!(element.date, Some(NaiveDate::from_ymd_opt(2021, 5, 26).unwrap()));
    }

    #[test]
    fn test_date_day_zero_is_last_day_of_month() {
        let element = GS1ElementString::extract("17240200", &config()).unwrap();
        // 2024 is a leap year.
        assert_eq!(element.date, Some(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()));
    }

    #[test]
    fn test_invalid_date_fails() {
        assert!(GS1ElementString::extract("17211345", &config()).is_err());
    }

    #[test]
    fn test_weight_decoding() {
        let element = GS1ElementString::extract("3103000195", &config()).unwrap();
        assert_eq!(element.decimal, Some(Decimal::new(195, 3)));
    }

    #[test]
    fn test_amount_with_currency() {
        let element = GS1ElementString::extract("39127520095", &config()).unwrap();
        assert_eq!(element.ai.ai, "3912");
        let money = element.money.unwrap();
        assert_eq!(money.currency, "SEK");
        assert_eq!(money.amount, Decimal::new(95, 2));
    }

    #[test]
    fn test_unknown_currency_leaves_money_unset() {
        let element = GS1ElementString::extract("39120019500", &config()).unwrap();
        assert_eq!(element.money, None);
        assert_eq!(element.pattern_groups, vec!["001".to_string(), "9500".to_string()]);
    }

    #[test]
    fn test_nearby_year_window() {
        assert_eq!(nearby_year(21, 2026), 2021);
        assert_eq!(nearby_year(75, 2026), 2075);
        assert_eq!(nearby_year(77, 2026), 1977);
        assert_eq!(nearby_year(76, 2026), 2076);
        assert_eq!(nearby_year(99, 2000), 1999);
        assert_eq!(nearby_year(50, 2000), 2050);
        assert_eq!(nearby_year(51, 2000), 1951);
    }
}
