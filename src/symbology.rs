//! ISO/IEC 15424 Symbology Identifiers
//!
//! Barcode scanners can be configured to prefix the transmitted data with a
//! three character Symbology Identifier: a literal `]`, a code character
//! naming the symbology, and a modifier character. The prefix lets the
//! receiver pick the right interpretation for the rest of the data.

use crate::error::{ParseError, Result};

/// Symbologies from the ISO/IEC 15424 code character table.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum Symbology {
    Code39,
    Telepen,
    Code128,
    CodeOne,
    EanUpc,
    Codabar,
    Code93,
    Code11,
    Itf,
    Code16k,
    Code49,
    Pdf417,
    Msi,
    Anker,
    Codablock,
    PlesseyCode,
    QrCode,
    Straight2Of5TwoBar,
    Straight2Of5ThreeBar,
    Code2Of5Matrix,
    MaxiCode,
    OtherBarcode,
    ChannelCode,
    DataMatrix,
    Gs1Databar,
    Ocr,
    PosiCode,
    SuperCode,
    AztecCode,
}

impl Symbology {
    /// Look up a symbology by its ISO/IEC 15424 code character.
    pub fn from_code(code: char) -> Option<Symbology> {
        Some(match code {
            'A' => Symbology::Code39,
            'B' => Symbology::Telepen,
            'C' => Symbology::Code128,
            'D' => Symbology::CodeOne,
            'E' => Symbology::EanUpc,
            'F' => Symbology::Codabar,
            'G' => Symbology::Code93,
            'H' => Symbology::Code11,
            'I' => Symbology::Itf,
            'J' => Symbology::Code16k,
            'K' => Symbology::Code49,
            'L' => Symbology::Pdf417,
            'M' => Symbology::Msi,
            'N' => Symbology::Anker,
            'O' => Symbology::Codablock,
            'P' => Symbology::PlesseyCode,
            'Q' => Symbology::QrCode,
            'R' => Symbology::Straight2Of5TwoBar,
            'S' => Symbology::Straight2Of5ThreeBar,
            'U' => Symbology::MaxiCode,
            'X' => Symbology::Code2Of5Matrix,
            'Z' => Symbology::OtherBarcode,
            'c' => Symbology::ChannelCode,
            'd' => Symbology::DataMatrix,
            'e' => Symbology::Gs1Databar,
            'o' => Symbology::Ocr,
            'p' => Symbology::PosiCode,
            's' => Symbology::SuperCode,
            'z' => Symbology::AztecCode,
            _ => return None,
        })
    }
}

/// Symbology Identifier flag/modifier pairs with GS1-defined semantics.
///
/// These tell the receiver whether the remainder of the data is a plain
/// GTIN or a GS1 message with Application Identifier Element Strings.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum GS1Symbology {
    /// EAN-13, UPC-A, or UPC-E.
    Ean13,
    /// Two-digit add-on symbol.
    EanTwoDigitAddOn,
    /// Five-digit add-on symbol.
    EanFiveDigitAddOn,
    /// EAN-13, UPC-A, or UPC-E with add-on symbol.
    Ean13WithAddOn,
    /// EAN-8.
    Ean8,
    /// GS1-128.
    Gs1_128,
    /// GS1 DataBar.
    Gs1Databar,
    /// GS1 Composite with GS1-128 linear component.
    Gs1CompositeWithGs1_128,
    /// GS1 Composite with GS1 DataBar linear component.
    Gs1CompositeWithDatabar,
    /// GS1 DataMatrix.
    Gs1DataMatrix,
    /// GS1 QR Code.
    Gs1QrCode,
    /// ITF-14.
    Itf14,
}

impl GS1Symbology {
    /// Look up by the two-character flag and modifier, e.g. `"E0"`.
    pub fn from_code(code: &str) -> Option<GS1Symbology> {
        Some(match code {
            "E0" => GS1Symbology::Ean13,
            "E1" => GS1Symbology::EanTwoDigitAddOn,
            "E2" => GS1Symbology::EanFiveDigitAddOn,
            "E3" => GS1Symbology::Ean13WithAddOn,
            "E4" => GS1Symbology::Ean8,
            "C1" => GS1Symbology::Gs1_128,
            "e0" => GS1Symbology::Gs1Databar,
            "e1" => GS1Symbology::Gs1CompositeWithGs1_128,
            "e2" => GS1Symbology::Gs1CompositeWithDatabar,
            "d2" => GS1Symbology::Gs1DataMatrix,
            "Q3" => GS1Symbology::Gs1QrCode,
            "I1" => GS1Symbology::Itf14,
            _ => return None,
        })
    }

    /// Symbologies whose data is a plain GTIN.
    pub fn with_gtin() -> &'static [GS1Symbology] {
        &[
            GS1Symbology::Ean13,
            GS1Symbology::Ean13WithAddOn,
            GS1Symbology::Ean8,
        ]
    }

    /// Symbologies whose data contains AI Element Strings.
    pub fn with_ai_element_strings() -> &'static [GS1Symbology] {
        &[
            GS1Symbology::Gs1_128,
            GS1Symbology::Gs1Databar,
            GS1Symbology::Gs1CompositeWithGs1_128,
            GS1Symbology::Gs1CompositeWithDatabar,
            GS1Symbology::Gs1DataMatrix,
            GS1Symbology::Gs1QrCode,
            GS1Symbology::Itf14,
        ]
    }
}

/// A Symbology Identifier extracted from the start of scanned data.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct SymbologyIdentifier {
    /// The raw three-character identifier, including the leading `]`.
    pub value: String,
    /// The symbology named by the code character, if it is a known one.
    pub symbology: Option<Symbology>,
    /// The modifier character.
    pub modifier: char,
    /// GS1 interpretation of the flag/modifier pair, if any.
    pub gs1_symbology: Option<GS1Symbology>,
}

impl SymbologyIdentifier {
    /// Extract a Symbology Identifier from the start of `value`.
    ///
    /// `value` must start with `]` and contain at least two more printable
    /// ASCII characters.
    pub fn extract(value: &str) -> Result<SymbologyIdentifier> {
        let mut chars = value.chars();
        if chars.next() != Some(']') {
            return Err(ParseError::Syntax(format!(
                "expected Symbology Identifier in {:?} to start with ']'",
                value
            )));
        }
        let (flag, modifier) = match (chars.next(), chars.next()) {
            (Some(flag), Some(modifier)) => (flag, modifier),
            _ => {
                return Err(ParseError::Syntax(format!(
                    "Symbology Identifier in {:?} is shorter than three characters",
                    value
                )))
            }
        };
        for ch in [flag, modifier] {
            if !ch.is_ascii_graphic() {
                return Err(ParseError::Syntax(format!(
                    "invalid character {:?} in Symbology Identifier \"]{}{}\"",
                    ch, flag, modifier
                )));
            }
        }

        Ok(SymbologyIdentifier {
            value: format!("]{}{}", flag, modifier),
            symbology: Symbology::from_code(flag),
            modifier,
            gs1_symbology: GS1Symbology::from_code(&format!("{}{}", flag, modifier)),
        })
    }

    /// Length in bytes of the identifier, for advancing past it.
    pub fn len(&self) -> usize {
        self.value.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}
