//! Library for interpreting the data in barcodes
//!
//! Retail, logistics, and healthcare scanners emit a single string which
//! may hold any of several standardized formats: a GTIN, a UPC, an SSCC,
//! or a GS1 message of Application Identifier Element Strings, optionally
//! prefixed with an ISO/IEC 15424 Symbology Identifier. The [`parse`]
//! entry point classifies the data, validates check digits, and extracts
//! structured fields, including variable weight and price embedded in
//! Restricted Circulation Numbers.
//!
//! ```
//! use barcode::{parse, ParseConfig};
//!
//! let result = parse("]E09781234567897", &ParseConfig::default()).unwrap();
//! let gtin = result.gtin.unwrap();
//! assert_eq!(gtin.value, "9781234567897");
//! assert_eq!(gtin.prefix.unwrap().usage, "Bookland (ISBN)");
//! ```
//!
//! The individual parsers are also available directly as
//! [`gtin::Gtin::parse`], [`upc::Upc::parse`], [`sscc::Sscc::parse`], and
//! [`gs1::GS1Message::parse`].

pub mod checksum;
pub mod error;
pub mod gs1;
pub mod gtin;
pub mod prefix;
pub mod sscc;
pub mod symbology;
pub mod upc;

mod parse;

pub use crate::error::{ParseError, RcnRegionError, Result};
pub use crate::parse::{parse, ParseConfig, ParseResult};
