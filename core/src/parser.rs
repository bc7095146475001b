//! The command-line parser façade.

use tracing::info;

use crate::bind::bind_all;
use crate::config::ParserSettings;
use crate::error::Result;
use crate::parse_result::ParseResult;
use crate::report::{ReportRow, ReportSink, ReportView, report_rows};
use crate::tokenizer::{LongOption, Scanner, format_string, scan_into};
use crate::types::OptionDescriptor;
use crate::validate::{validate_required_coverage, validate_table};

/// Parses an argument vector against a table of [`OptionDescriptor`]s.
///
/// The parser borrows the caller's destinations for `'a`; once it is dropped
/// the bound variables can be read again.
///
/// # Examples
///
/// ```
/// use optbind_core::*;
///
/// let (mut ratio, mut count, mut label) = (f64::NAN, 100, String::from("gg"));
/// {
///     let mut parser = CommandLineParser::new(vec![
///         OptionDescriptor::required("ratio", 'r', &mut ratio),
///         OptionDescriptor::optional("count", 'c', &mut count),
///         OptionDescriptor::required("label", 'l', &mut label),
///     ]);
///     parser.parse(["prog", "-r", "1.5", "--label", "hello"]).unwrap();
/// }
/// assert_eq!(ratio, 1.5);
/// assert_eq!(count, 100);
/// assert_eq!(label, "hello");
/// ```
#[derive(Debug, Default)]
pub struct CommandLineParser<'a> {
    options: Vec<OptionDescriptor<'a>>,
    settings: ParserSettings,
    matches: ParseResult,
    program_name: Option<String>,
}

impl<'a> CommandLineParser<'a> {
    pub fn new(options: Vec<OptionDescriptor<'a>>) -> Self {
        Self::with_settings(options, ParserSettings::default())
    }

    pub fn with_settings(options: Vec<OptionDescriptor<'a>>, settings: ParserSettings) -> Self {
        Self {
            options,
            settings,
            matches: ParseResult::new(),
            program_name: None,
        }
    }

    /// Appends descriptors to the table.
    pub fn add_options(&mut self, options: impl IntoIterator<Item = OptionDescriptor<'a>>) {
        self.options.extend(options);
    }

    /// Removes every descriptor, releasing their destinations' borrows for
    /// reuse by later descriptors, and forgets the last scan.
    pub fn clear_options(&mut self) {
        self.options.clear();
        self.matches.clear();
    }

    pub fn options(&self) -> &[OptionDescriptor<'a>] {
        &self.options
    }

    pub fn settings(&self) -> &ParserSettings {
        &self.settings
    }

    /// Program name from the settings, else from the last parsed vector.
    pub fn program_name(&self) -> Option<&str> {
        self.settings
            .program_name
            .as_deref()
            .or(self.program_name.as_deref())
    }

    /// Getopt-style format string derived from the current table.
    pub fn format_string(&self) -> String {
        format_string(&self.options)
    }

    /// Checks the table without scanning anything.
    pub fn validate(&self) -> Result<()> {
        validate_table(&self.options)
    }

    /// Parses `args` (program name first) and binds every matched option.
    ///
    /// Runs table validation, scanning, required-option coverage and binding
    /// in that order. The first failure aborts the parse, and nothing is
    /// written to any destination unless every step succeeds.
    pub fn parse<I, S>(&mut self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into);
        self.program_name = args.next();
        let tokens: Vec<String> = args.collect();

        self.matches.clear();
        validate_table(&self.options)?;

        let format = self.format_string();
        let scanner = Scanner::new(&format, LongOption::from_descriptors(&self.options), &tokens);
        scan_into(scanner, &mut self.matches)?;
        validate_required_coverage(&self.options, &self.matches)?;

        let bound = bind_all(&mut self.options, &self.matches, self.settings.coercion)?;
        info!(format = %format, bound, "Parsed command line");
        Ok(())
    }

    /// Short ids seen by the last scan, in command-line order.
    pub fn parsed_ids(&self) -> Vec<char> {
        self.matches.ids().collect()
    }

    /// Rows describing the table with the destinations' current values.
    pub fn rows(&self) -> Vec<ReportRow> {
        report_rows(&self.options)
    }

    /// Hands the current rows to `sink` under `view`.
    pub fn report(&self, view: ReportView, sink: &mut dyn ReportSink) {
        sink.emit(view, &self.rows());
    }
}
