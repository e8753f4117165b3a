//! Restricted Circulation Numbers
//!
//! RCNs look like ordinary GTINs, but their leading digits are reserved for
//! local use: either inside a company, or inside a geographic region where
//! the national GS1 Member Organisation defines what the digits mean.
//! Geographic RCNs commonly embed the weight or price of a variable measure
//! item, with an implied decimal point and sometimes an extra check digit
//! covering just the embedded value.

use std::fmt;
use std::str::FromStr;

use num_enum::TryFromPrimitive;
use rust_decimal::Decimal;

use crate::checksum;
use crate::error::RcnRegionError;
use crate::gs1::Money;
use crate::gtin::GtinFormat;

/// Who a Restricted Circulation Number has meaning for.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum RcnUsage {
    /// The number is only meaningful inside the company that issued it.
    Company,
    /// The number is interpreted according to the rules of a geographic
    /// region's GS1 Member Organisation.
    Geographical,
}

/// Regions with known rules for interpreting geographic RCNs.
///
/// The discriminants are the ISO 3166-1 numeric country codes.
#[derive(Debug, Eq, PartialEq, Copy, Clone, TryFromPrimitive)]
#[repr(u16)]
pub enum RcnRegion {
    Denmark = 208,
    Estonia = 233,
    Finland = 246,
    Germany = 276,
    Latvia = 428,
    Lithuania = 440,
    Norway = 578,
    Sweden = 752,
    GreatBritain = 826,
}

impl RcnRegion {
    /// The lowercase ISO 3166-1 alpha-2 code for the region.
    pub fn code(self) -> &'static str {
        match self {
            RcnRegion::Denmark => "dk",
            RcnRegion::Estonia => "ee",
            RcnRegion::Finland => "fi",
            RcnRegion::Germany => "de",
            RcnRegion::Latvia => "lv",
            RcnRegion::Lithuania => "lt",
            RcnRegion::Norway => "no",
            RcnRegion::Sweden => "se",
            RcnRegion::GreatBritain => "gb",
        }
    }

    /// ISO 4217 alphabetic code of the currency used for embedded prices,
    /// for the regions that embed prices.
    pub fn currency(self) -> Option<&'static str> {
        match self {
            RcnRegion::Denmark => Some("DKK"),
            RcnRegion::Germany => Some("EUR"),
            RcnRegion::GreatBritain => Some("GBP"),
            RcnRegion::Norway => Some("NOK"),
            RcnRegion::Sweden => Some("SEK"),
            RcnRegion::Estonia | RcnRegion::Finland | RcnRegion::Latvia | RcnRegion::Lithuania => {
                None
            }
        }
    }

    /// Look up a region by its zero-padded three-digit ISO 3166-1 numeric
    /// code. Returns `Ok(None)` for well-formed codes of unsupported
    /// countries.
    #[deprecated(note = "use the alpha-2 string form via `FromStr` instead")]
    pub fn from_iso_3166_1_numeric_code(
        code: &str,
    ) -> std::result::Result<Option<RcnRegion>, RcnRegionError> {
        if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_digit()) {
            return Err(RcnRegionError::InvalidNumericCode(code.to_string()));
        }
        let number: u16 = code
            .parse()
            .map_err(|_| RcnRegionError::InvalidNumericCode(code.to_string()))?;
        Ok(RcnRegion::try_from_primitive(number).ok())
    }
}

impl FromStr for RcnRegion {
    type Err = RcnRegionError;

    fn from_str(value: &str) -> std::result::Result<RcnRegion, RcnRegionError> {
        Ok(match value {
            "dk" => RcnRegion::Denmark,
            "ee" => RcnRegion::Estonia,
            "fi" => RcnRegion::Finland,
            "de" => RcnRegion::Germany,
            "lv" => RcnRegion::Latvia,
            "lt" => RcnRegion::Lithuania,
            "no" => RcnRegion::Norway,
            "se" => RcnRegion::Sweden,
            "gb" => RcnRegion::GreatBritain,
            _ => return Err(RcnRegionError::UnknownRegion(value.to_string())),
        })
    }
}

impl fmt::Display for RcnRegion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// The RCN refinement of a GTIN.
#[derive(Debug, Clone, PartialEq)]
pub struct Rcn {
    pub usage: RcnUsage,
    /// Set if and only if the usage is geographical and the caller supplied
    /// a region to interpret the number under.
    pub region: Option<RcnRegion>,
    /// Embedded weight in kilograms, when the region's rules define one.
    pub weight: Option<Decimal>,
    /// Embedded price in the major unit of the region's currency.
    pub price: Option<Decimal>,
    /// Embedded price with its currency.
    pub money: Option<Money>,
}

/// Decide whether a GTIN with the given canonical 14-digit form is an RCN,
/// and if so for whom. A GTIN-14 is never an RCN, even when its trailing
/// digits look like one.
pub(super) fn classify(format: GtinFormat, canonical: &str) -> Option<RcnUsage> {
    let digits = canonical.as_bytes();
    match format {
        GtinFormat::Gtin8 => match digits[6] {
            b'0' | b'2' => Some(RcnUsage::Company),
            _ => None,
        },
        GtinFormat::Gtin12 => match digits[2] {
            b'2' => Some(RcnUsage::Geographical),
            b'4' => Some(RcnUsage::Company),
            _ => None,
        },
        GtinFormat::Gtin13 => match digits[1] {
            b'2' => Some(RcnUsage::Geographical),
            _ => None,
        },
        GtinFormat::Gtin14 => None,
    }
}

/// Build the RCN refinement, applying the region's embedded-value rules
/// when the usage is geographical and a region was supplied.
pub(super) fn interpret(usage: RcnUsage, region: Option<RcnRegion>, value_13: &str) -> Rcn {
    let mut rcn = Rcn {
        usage,
        region: None,
        weight: None,
        price: None,
        money: None,
    };
    if usage != RcnUsage::Geographical {
        return rcn;
    }
    rcn.region = region;

    if let Some(region) = region {
        if let Some((field, value)) = extract_embedded_value(region, value_13) {
            match field {
                EmbeddedField::Weight => rcn.weight = Some(value),
                EmbeddedField::Price => {
                    rcn.price = Some(value);
                    rcn.money = region.currency().map(|currency| Money {
                        amount: value,
                        currency,
                    });
                }
            }
        }
    }
    rcn
}

#[derive(Copy, Clone)]
enum EmbeddedField {
    Weight,
    Price,
}

/// One regional interpretation rule: RCN-13 values starting with `prefix`
/// embed `field` in `digits` (byte range into the 13-digit form), divided
/// by 10^`scale`, optionally protected by a check digit at `check_digit`.
struct RegionRule {
    prefix: &'static str,
    field: EmbeddedField,
    digits: (usize, usize),
    scale: u32,
    check_digit: Option<usize>,
}

const fn rule(
    prefix: &'static str,
    field: EmbeddedField,
    digits: (usize, usize),
    scale: u32,
    check_digit: Option<usize>,
) -> RegionRule {
    RegionRule {
        prefix,
        field,
        digits,
        scale,
        check_digit,
    }
}

/// Denmark: five value digits in positions 8-12.
static DENMARK_RULES: &[RegionRule] = &[
    rule("21", EmbeddedField::Price, (7, 12), 2, None),
    rule("22", EmbeddedField::Price, (7, 12), 0, None),
    rule("23", EmbeddedField::Weight, (7, 12), 3, None),
    rule("24", EmbeddedField::Weight, (7, 12), 2, None),
    rule("25", EmbeddedField::Weight, (7, 12), 1, None),
];

/// The Baltics and Finland: weight only, five digits in positions 8-12.
static WEIGHT_ONLY_RULES: &[RegionRule] = &[
    rule("23", EmbeddedField::Weight, (7, 12), 3, None),
    rule("24", EmbeddedField::Weight, (7, 12), 2, None),
    rule("25", EmbeddedField::Weight, (7, 12), 1, None),
];

/// Germany: four value digits in positions 9-12.
static GERMANY_RULES: &[RegionRule] = &[
    rule("22", EmbeddedField::Price, (8, 12), 2, None),
    rule("23", EmbeddedField::Weight, (8, 12), 3, None),
    rule("24", EmbeddedField::Weight, (8, 12), 2, None),
    rule("25", EmbeddedField::Weight, (8, 12), 1, None),
];

/// Great Britain: six price digits in positions 7-12, with a price check
/// digit in position 6.
static GREAT_BRITAIN_RULES: &[RegionRule] =
    &[rule("20", EmbeddedField::Price, (6, 12), 2, Some(5))];

/// Norway and Sweden: prices are five digits in positions 7-11 with a check
/// digit in position 12; weights are five digits in positions 8-12.
static NORWAY_SWEDEN_RULES: &[RegionRule] = &[
    rule("20", EmbeddedField::Price, (6, 11), 2, Some(11)),
    rule("21", EmbeddedField::Price, (6, 11), 1, Some(11)),
    rule("22", EmbeddedField::Price, (6, 11), 0, Some(11)),
    rule("23", EmbeddedField::Weight, (7, 12), 3, None),
    rule("24", EmbeddedField::Weight, (7, 12), 2, None),
    rule("25", EmbeddedField::Weight, (7, 12), 1, None),
];

fn region_rules(region: RcnRegion) -> &'static [RegionRule] {
    match region {
        RcnRegion::Denmark => DENMARK_RULES,
        RcnRegion::Estonia | RcnRegion::Finland | RcnRegion::Latvia | RcnRegion::Lithuania => {
            WEIGHT_ONLY_RULES
        }
        RcnRegion::Germany => GERMANY_RULES,
        RcnRegion::GreatBritain => GREAT_BRITAIN_RULES,
        RcnRegion::Norway | RcnRegion::Sweden => NORWAY_SWEDEN_RULES,
    }
}

fn extract_embedded_value(region: RcnRegion, value_13: &str) -> Option<(EmbeddedField, Decimal)> {
    if value_13.len() != 13 {
        return None;
    }
    let rule = region_rules(region)
        .iter()
        .find(|rule| value_13.starts_with(rule.prefix))?;
    let digits = &value_13[rule.digits.0..rule.digits.1];

    if let Some(position) = rule.check_digit {
        let expected = checksum::compute(digits).ok()?;
        let actual = value_13.as_bytes()[position] - b'0';
        if expected != actual {
            // The outer check digit already verified; a bad embedded check
            // digit only means the embedded fields are not trustworthy.
            return None;
        }
    }

    let number: i64 = digits.parse().ok()?;
    Some((rule.field, Decimal::new(number, rule.scale)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_from_str() {
        assert_eq!("se".parse::<RcnRegion>(), Ok(RcnRegion::Sweden));
        assert_eq!("gb".parse::<RcnRegion>(), Ok(RcnRegion::GreatBritain));
        assert_eq!(
            "foo".parse::<RcnRegion>(),
            Err(RcnRegionError::UnknownRegion("foo".to_string()))
        );
        assert_eq!(RcnRegion::Sweden.to_string(), "se");
    }

    #[test]
    #[allow(deprecated)]
    fn test_region_from_numeric_code() {
        assert_eq!(
            RcnRegion::from_iso_3166_1_numeric_code("208"),
            Ok(Some(RcnRegion::Denmark))
        );
        assert_eq!(
            RcnRegion::from_iso_3166_1_numeric_code("752"),
            Ok(Some(RcnRegion::Sweden))
        );
        // Well-formed but unsupported codes give no region.
        assert_eq!(RcnRegion::from_iso_3166_1_numeric_code("999"), Ok(None));
        assert_eq!(RcnRegion::from_iso_3166_1_numeric_code("008"), Ok(None));
        // Malformed codes are errors.
        assert!(RcnRegion::from_iso_3166_1_numeric_code("1234").is_err());
        assert!(RcnRegion::from_iso_3166_1_numeric_code("foo").is_err());
    }

    #[test]
    fn test_classify() {
        assert_eq!(
            classify(GtinFormat::Gtin8, "00000000011112"),
            Some(RcnUsage::Company)
        );
        assert_eq!(
            classify(GtinFormat::Gtin12, "00201111111115"),
            Some(RcnUsage::Geographical)
        );
        assert_eq!(
            classify(GtinFormat::Gtin12, "00401111111119"),
            Some(RcnUsage::Company)
        );
        assert_eq!(
            classify(GtinFormat::Gtin13, "02001111111119"),
            Some(RcnUsage::Geographical)
        );
        assert_eq!(classify(GtinFormat::Gtin13, "05901234123457"), None);
        // A GTIN-14 wrapping RCN-shaped digits is not an RCN.
        assert_eq!(classify(GtinFormat::Gtin14, "12991111111110"), None);
    }

    #[test]
    fn test_swedish_weight() {
        let (field, value) =
            extract_embedded_value(RcnRegion::Sweden, "2311111112345").unwrap();
        assert!(matches!(field, EmbeddedField::Weight));
        assert_eq!(value, Decimal::new(11234, 3));
    }

    #[test]
    fn test_swedish_price_with_check_digit() {
        let (field, value) =
            extract_embedded_value(RcnRegion::Sweden, "2012341234578").unwrap();
        assert!(matches!(field, EmbeddedField::Price));
        assert_eq!(value, Decimal::new(12345, 2));
    }

    #[test]
    fn test_swedish_price_with_bad_check_digit_is_discarded() {
        assert!(extract_embedded_value(RcnRegion::Sweden, "2012341234592").is_none());
    }

    #[test]
    fn test_norwegian_weight_scales() {
        // Prefix 23 embeds grams, prefix 25 hectograms.
        let (_, grams) = extract_embedded_value(RcnRegion::Norway, "2311111112345").unwrap();
        assert_eq!(grams, Decimal::new(11234, 3));
        let (_, hectograms) =
            extract_embedded_value(RcnRegion::Norway, "2511111112343").unwrap();
        assert_eq!(hectograms, Decimal::new(11234, 1));
    }

    #[test]
    fn test_british_price() {
        // Value digits are positions 7-12, check digit position 6.
        let (field, value) =
            extract_embedded_value(RcnRegion::GreatBritain, "2012370123454").unwrap();
        assert!(matches!(field, EmbeddedField::Price));
        assert_eq!(value, Decimal::new(12345, 2));
    }

    #[test]
    fn test_unmatched_prefix_gives_nothing() {
        assert_eq!(
            extract_embedded_value(RcnRegion::Sweden, "2911111111113").map(|(_, v)| v),
            None
        );
    }
}
