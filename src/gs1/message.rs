//! GS1 message parsing
//!
//! A GS1 message is the full result of a single scan, containing one or
//! more Element Strings.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ParseError, Result};
use crate::gs1::ai::ApplicationIdentifier;
use crate::gs1::element::GS1ElementString;
use crate::gs1::ASCII_GROUP_SEPARATOR;
use crate::parse::ParseConfig;

static HRI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((\d+)\)(\w+)").expect("static HRI pattern is valid"));

/// A parsed GS1 message.
#[derive(Debug, Clone, PartialEq)]
pub struct GS1Message {
    /// Raw unprocessed value, stripped of surrounding whitespace.
    pub value: String,
    /// The Element Strings found in the message, in input order.
    pub element_strings: Vec<GS1ElementString>,
}

impl GS1Message {
    /// Parse a scanned GS1 message into its Element Strings.
    ///
    /// Variable-length fields that are not terminated with a separator
    /// character are consumed greedily, so an unterminated field in the
    /// middle of a message may swallow the rest of it.
    pub fn parse(value: &str, config: &ParseConfig) -> Result<GS1Message> {
        let value = value.trim();
        let mut element_strings = Vec::new();
        let mut rest = value;

        while !rest.is_empty() {
            let element = GS1ElementString::extract(rest, config)?;
            rest = &rest[element.len()..];

            if let Some(separator) = rest.chars().next() {
                if config.separator_chars.contains(&separator) {
                    if element.ai.fnc1_required {
                        rest = &rest[separator.len_utf8()..];
                    } else {
                        return Err(ParseError::Syntax(format!(
                            "Element String {:?} has fixed length and should not end with \
                             a separator character: separator {:?} found in {:?}",
                            element.as_hri(),
                            separator,
                            value
                        )));
                    }
                }
            }

            element_strings.push(element);
        }

        Ok(GS1Message {
            value: value.to_string(),
            element_strings,
        })
    }

    /// Parse a GS1 message given in human readable interpretation (HRI)
    /// format, e.g. `"(01)05901234123457(3103)000195"`.
    ///
    /// The HRI form carries no separator characters, so the message is
    /// reassembled into machine form with separators after every
    /// FNC1-requiring AI before being handed to [`GS1Message::parse`].
    pub fn parse_hri(value: &str, config: &ParseConfig) -> Result<GS1Message> {
        let value = value.trim();
        if !value.starts_with('(') {
            return Err(ParseError::Syntax(format!(
                "expected HRI string {:?} to start with a parenthesis",
                value
            )));
        }

        let captures: Vec<(&str, &str)> = HRI_RE
            .captures_iter(value)
            .filter_map(|c| match (c.get(1), c.get(2)) {
                (Some(ai), Some(data)) => Some((ai.as_str(), data.as_str())),
                _ => None,
            })
            .collect();
        if captures.is_empty() {
            return Err(ParseError::Syntax(format!(
                "could not find any GS1 Application Identifiers in {:?}, \
                 expected format: '(AI)DATA(AI)DATA'",
                value
            )));
        }

        let mut normalized = String::new();
        for (ai_number, data) in captures {
            let entry = ApplicationIdentifier::lookup(ai_number).ok_or_else(|| {
                ParseError::Syntax(format!(
                    "unknown GS1 Application Identifier {:?} in {:?}",
                    ai_number, value
                ))
            })?;
            normalized.push_str(entry.ai);
            normalized.push_str(data);
            if entry.fnc1_required {
                normalized.push(ASCII_GROUP_SEPARATOR);
            }
        }

        GS1Message::parse(&normalized, config)
    }

    /// Render as human readable interpretation, the inverse of
    /// [`GS1Message::parse_hri`].
    pub fn as_hri(&self) -> String {
        self.element_strings
            .iter()
            .map(GS1ElementString::as_hri)
            .collect()
    }

    /// All Element Strings whose AI starts with `ai`.
    ///
    /// The prefix match makes families easy to query: filtering on `"31"`
    /// finds all the metric variable measure AIs.
    pub fn filter_by_ai(&self, ai: &str) -> Vec<&GS1ElementString> {
        self.element_strings
            .iter()
            .filter(|element| element.ai.ai.starts_with(ai))
            .collect()
    }

    /// All Element Strings whose AI data title contains `data_title`.
    pub fn filter_by_data_title(&self, data_title: &str) -> Vec<&GS1ElementString> {
        self.element_strings
            .iter()
            .filter(|element| element.ai.data_title.contains(data_title))
            .collect()
    }

    /// The first Element String whose AI starts with `ai`.
    pub fn get_by_ai(&self, ai: &str) -> Option<&GS1ElementString> {
        self.filter_by_ai(ai).into_iter().next()
    }

    /// The first Element String whose AI data title contains `data_title`.
    pub fn get_by_data_title(&self, data_title: &str) -> Option<&GS1ElementString> {
        self.filter_by_data_title(data_title).into_iter().next()
    }
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
    fn test_parse_two_fixed_elements() {
        let message = GS1Message::parse("010590123412345715210526", &config()).unwrap();
        assert_eq!(message.element_strings.len(), 2);
        assert_eq!(message.element_strings[0].ai.ai, "01");
        assert_eq!(message.element_strings[1].ai.ai, "15");
        assert_eq!(message.as_hri(), "(01)05901234123457(15)210526");
    }

    #[test]
    fn test_parse_variable_element_with_separator() {
        let message = GS1Message::parse("10ABC123\u{1d}17221231", &config()).unwrap();
        assert_eq!(message.element_strings.len(), 2);
        assert_eq!(message.element_strings[0].value, "ABC123");
        assert_eq!(message.element_strings[1].value, "221231");
    }

    #[test]
    fn test_parse_unterminated_trailing_variable_element() {
        let message = GS1Message::parse("17221231", &config()).unwrap();
        assert_eq!(message.element_strings.len(), 1);
        let message = GS1Message::parse("1722123110ABC123", &config()).unwrap();
        assert_eq!(message.element_strings[1].value, "ABC123");
    }

    #[test]
    fn test_separator_after_fixed_element_fails() {
        let error = GS1Message::parse("17221231\u{1d}10ABC", &config()).unwrap_err();
        assert!(matches!(error, ParseError::Syntax(_)));
    }

    #[test]
    fn test_parse_hri_round_trip() {
        let message = GS1Message::parse_hri("(01)05901234123457(3103)000195", &config()).unwrap();
        assert_eq!(message.element_strings.len(), 2);
        assert_eq!(message.as_hri(), "(01)05901234123457(3103)000195");

        let reparsed = GS1Message::parse_hri(&message.as_hri(), &config()).unwrap();
        assert_eq!(reparsed.element_strings, message.element_strings);
    }

    #[test]
    fn test_parse_hri_requires_parenthesis() {
        assert!(GS1Message::parse_hri("17221231", &config()).is_err());
        assert!(GS1Message::parse_hri("(17", &config()).is_err());
    }

    #[test]
    fn test_parse_hri_unknown_ai() {
        assert!(GS1Message::parse_hri("(44)12345", &config()).is_err());
    }

    #[test]
    fn test_filter_by_ai_prefix() {
        let message = GS1Message::parse_hri("(01)05901234123457(3103)000195", &config()).unwrap();
        assert_eq!(message.filter_by_ai("31").len(), 1);
        assert_eq!(message.get_by_ai("3103").unwrap().value, "000195");
        assert!(message.get_by_ai("00").is_none());
    }

    #[test]
    fn test_get_by_data_title() {
        let message = GS1Message::parse_hri("(01)05901234123457(3103)000195", &config()).unwrap();
        assert!(message.get_by_data_title("WEIGHT").is_some());
        assert!(message.get_by_data_title("SSCC").is_none());
    }
}
