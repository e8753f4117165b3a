//! Top-level barcode dispatch
//!
//! The caller of [`parse`] usually does not know what kind of data the
//! scanner produced. The dispatcher strips any Symbology Identifier, then
//! works through a queue of candidate parsers, letting successful parses
//! enqueue follow-up work: a GTIN-12 is also offered to the UPC parser, a
//! UPC is offered back as a GTIN, and GTINs and SSCCs found inside a GS1
//! message are lifted to the top level. The first result for each slot
//! wins.

use std::collections::VecDeque;

use chrono::{Datelike, Utc};

use crate::error::{ParseError, Result};
use crate::gs1::{GS1Message, DEFAULT_SEPARATOR_CHARS};
use crate::gtin::{Gtin, GtinFormat, RcnRegion};
use crate::sscc::Sscc;
use crate::symbology::{GS1Symbology, SymbologyIdentifier};
use crate::upc::Upc;

/// Options shared by all parsers.
#[derive(Debug, Clone)]
pub struct ParseConfig {
    /// The geographic region whose rules are used to interpret Restricted
    /// Circulation Numbers, e.g. to extract variable weight or price.
    pub rcn_region: Option<RcnRegion>,
    /// Characters accepted in place of the FNC1 symbol. Defaults to ASCII
    /// Group Separator.
    pub separator_chars: Vec<char>,
    /// Reference year for resolving two-digit years in GS1 dates. `None`
    /// uses the current UTC year.
    pub reference_year: Option<i32>,
}

impl Default for ParseConfig {
    fn default() -> ParseConfig {
        ParseConfig {
            rcn_region: None,
            separator_chars: DEFAULT_SEPARATOR_CHARS.to_vec(),
            reference_year: None,
        }
    }
}

impl ParseConfig {
    pub(crate) fn current_year(&self) -> i32 {
        self.reference_year.unwrap_or_else(|| Utc::now().year())
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum ParserKind {
    Gs1Message,
    Gtin,
    Sscc,
    Upc,
}

type Queue = VecDeque<(ParserKind, String)>;

/// Results from a successful [`parse`] call.
///
/// At least one of `gtin`, `upc`, `sscc`, and `gs1_message` is set. Each
/// `*_error` field holds the failure message of the matching parser if it
/// was attempted and failed.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseResult {
    /// The raw value, stripped of surrounding whitespace.
    pub value: String,
    /// The Symbology Identifier, if the value carried one.
    pub symbology_identifier: Option<SymbologyIdentifier>,
    /// The extracted GTIN, if any. Also set if a GS1 message containing a
    /// GTIN was parsed.
    pub gtin: Option<Gtin>,
    pub gtin_error: Option<String>,
    /// The extracted UPC, if any. Also set if a GTIN-12 was parsed.
    pub upc: Option<Upc>,
    pub upc_error: Option<String>,
    /// The extracted SSCC, if any. Also set if a GS1 message containing an
    /// SSCC was parsed.
    pub sscc: Option<Sscc>,
    pub sscc_error: Option<String>,
    /// The extracted GS1 message, if any.
    pub gs1_message: Option<GS1Message>,
    pub gs1_message_error: Option<String>,
}

/// Identify the data format of a scanned value and parse it.
///
/// If the value starts with a Symbology Identifier, only the parsers that
/// identifier calls for are run; otherwise every parser is tried. Fails
/// only when all attempted parsers fail, with their messages collected.
pub fn parse(value: &str, config: &ParseConfig) -> Result<ParseResult> {
    let value = value.trim();
    let mut result = ParseResult::new(value);
    let mut rest = value;

    if rest.starts_with(']') {
        let symbology_identifier = SymbologyIdentifier::extract(rest)?;
        rest = &rest[symbology_identifier.len()..];
        result.symbology_identifier = Some(symbology_identifier);
    }

    let mut queue: Queue = VecDeque::new();
    if let Some(gs1_symbology) = result
        .symbology_identifier
        .as_ref()
        .and_then(|si| si.gs1_symbology)
    {
        if GS1Symbology::with_gtin().contains(&gs1_symbology) {
            queue.push_back((ParserKind::Gtin, rest.to_string()));
        }
        if GS1Symbology::with_ai_element_strings().contains(&gs1_symbology) {
            queue.push_back((ParserKind::Gs1Message, rest.to_string()));
        }
    }
    if queue.is_empty() {
        // Without a Symbology Identifier to narrow the candidates, run all
        // parsers on the full value.
        for kind in [
            ParserKind::Gs1Message,
            ParserKind::Gtin,
            ParserKind::Sscc,
            ParserKind::Upc,
        ] {
            queue.push_back((kind, rest.to_string()));
        }
    }

    // Any parser may add more work to the queue. Only the first result for
    // each slot is kept.
    while let Some((kind, value)) = queue.pop_front() {
        match kind {
            ParserKind::Gs1Message => result.parse_gs1_message(&value, config, &mut queue),
            ParserKind::Gtin => result.parse_gtin(&value, config, &mut queue),
            ParserKind::Sscc => result.parse_sscc(&value),
            ParserKind::Upc => result.parse_upc(&value, &mut queue),
        }
    }

    if result.has_result() {
        Ok(result)
    } else {
        Err(ParseError::Syntax(format!(
            "failed to parse {:?}:\n{}",
            value,
            result.errors_list()
        )))
    }
}

impl ParseResult {
    fn new(value: &str) -> ParseResult {
        ParseResult {
            value: value.to_string(),
            symbology_identifier: None,
            gtin: None,
            gtin_error: None,
            upc: None,
            upc_error: None,
            sscc: None,
            sscc_error: None,
            gs1_message: None,
            gs1_message_error: None,
        }
    }

    fn parse_gtin(&mut self, value: &str, config: &ParseConfig, queue: &mut Queue) {
        if self.gtin.is_some() {
            return;
        }
        match Gtin::parse(value, config.rcn_region) {
            Ok(gtin) => {
                self.gtin_error = None;
                // A GTIN-12 is also a UPC-A.
                if gtin.format == GtinFormat::Gtin12 && self.upc.is_none() {
                    if let Ok(gtin_12) = gtin.as_gtin_12() {
                        queue.push_back((ParserKind::Upc, gtin_12));
                    }
                }
                self.gtin = Some(gtin);
            }
            Err(error) => {
                self.gtin = None;
                self.gtin_error = Some(error.to_string());
            }
        }
    }

    fn parse_upc(&mut self, value: &str, queue: &mut Queue) {
        if self.upc.is_some() {
            return;
        }
        match Upc::parse(value) {
            Ok(upc) => {
                self.upc_error = None;
                // The UPC-A expansion is a GTIN-12.
                if self.gtin.is_none() {
                    queue.push_back((ParserKind::Gtin, upc.as_upc_a()));
                }
                self.upc = Some(upc);
            }
            Err(error) => {
                self.upc = None;
                self.upc_error = Some(error.to_string());
            }
        }
    }

    fn parse_sscc(&mut self, value: &str) {
        if self.sscc.is_some() {
            return;
        }
        match Sscc::parse(value) {
            Ok(sscc) => {
                self.sscc_error = None;
                self.sscc = Some(sscc);
            }
            Err(error) => {
                self.sscc = None;
                self.sscc_error = Some(error.to_string());
            }
        }
    }

    fn parse_gs1_message(&mut self, value: &str, config: &ParseConfig, queue: &mut Queue) {
        if self.gs1_message.is_some() {
            return;
        }
        match GS1Message::parse(value, config) {
            Ok(message) => {
                self.gs1_message_error = None;
                if let Some(sscc) = message.get_by_ai("00").and_then(|es| es.sscc.as_ref()) {
                    queue.push_back((ParserKind::Sscc, sscc.value.clone()));
                }
                if let Some(gtin) = message.get_by_ai("01").and_then(|es| es.gtin.as_ref()) {
                    queue.push_back((ParserKind::Gtin, gtin.value.clone()));
                }
                self.gs1_message = Some(message);
            }
            Err(error) => {
                self.gs1_message = None;
                self.gs1_message_error = Some(error.to_string());
            }
        }
    }

    fn has_result(&self) -> bool {
        self.gtin.is_some()
            || self.upc.is_some()
            || self.sscc.is_some()
            || self.gs1_message.is_some()
    }

    fn errors_list(&self) -> String {
        [
            ("GTIN", &self.gtin_error),
            ("UPC", &self.upc_error),
            ("SSCC", &self.sscc_error),
            ("GS1", &self.gs1_message_error),
        ]
        .iter()
        .filter_map(|(name, error)| {
            error.as_ref().map(|error| format!("- {}: {}", name, error))
        })
        .collect::<Vec<_>>()
        .join("\n")
    }
}
