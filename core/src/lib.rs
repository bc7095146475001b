//! Declarative command-line option tables with typed value binding.
//!
//! A caller describes each option once, as an [`OptionDescriptor`] holding a
//! mutable borrow of the variable that should receive its value, and hands
//! the table to a [`CommandLineParser`]. Parsing then:
//!
//! 1. validates the table ([`validate_table`]): long names and short ids
//!    must be scannable and pairwise distinct;
//! 2. derives a getopt-style format string ([`format_string`]) and scans the
//!    argument vector with a [`Scanner`], recording each option once in a
//!    [`ParseResult`];
//! 3. checks that every required option appeared
//!    ([`validate_required_coverage`]);
//! 4. converts each argument text to its descriptor's [`ValueKind`] and
//!    writes it into the destination.
//!
//! Every failure is a [`ParseError`]; the engine never prints or exits.
//! Usage and summary tables are produced by the front end from
//! [`ReportRow`]s.
//!
//! # Example
//!
//! ```
//! use optbind_core::*;
//!
//! let (mut help, mut current, mut label) = (0, f64::NAN, String::from("gg"));
//! {
//!     let mut parser = CommandLineParser::new(vec![
//!         OptionDescriptor::flag("help", 'h', &mut help)
//!             .with_description("Show usage"),
//!         OptionDescriptor::required("saturation_current", 'i', &mut current)
//!             .with_description("Ion saturation current [A]"),
//!         OptionDescriptor::optional("label", 'l', &mut label),
//!     ]);
//!     assert_eq!(parser.format_string(), "hi:l:");
//!
//!     parser.parse(["probe", "-i", "2.5e-3"]).unwrap();
//!
//!     let err = parser.parse(["probe", "-z"]).unwrap_err();
//!     assert_eq!(err, ParseError::UnrecognizedOption("z".into()));
//! }
//! assert_eq!(help, 0);
//! assert_eq!(current, 2.5e-3);
//! assert_eq!(label, "gg");
//! ```

mod bind;
mod coerce;
mod config;
mod error;
mod parse_result;
mod parser;
mod report;
mod tokenizer;
mod types;
mod validate;

pub use bind::bind_all;
pub use coerce::{FLOAT_SENTINEL, INT_SENTINEL};
pub use config::{CoercionMode, ParserSettings};
pub use error::{ParseError, Result};
pub use parse_result::ParseResult;
pub use parser::CommandLineParser;
pub use report::{ReportRow, ReportSink, ReportView, report_rows};
pub use tokenizer::{LongOption, ScanEvent, Scanner, format_string, parse_format_string, scan_into};
pub use types::*;
pub use validate::{validate_no_duplicates, validate_required_coverage, validate_table};
