//! Command-line scanning.
//!
//! The option table is first flattened into a getopt-style format string
//! (`"ha:b:c::"`), and a [`Scanner`] built from that string plus the long
//! names walks the argument vector, yielding one [`ScanEvent`] per option,
//! error signal or stray token. [`scan_into`] drives a scanner to completion
//! and records matches in a [`ParseResult`].
//!
//! Accepted forms:
//!
//! - `-a VALUE`, `-aVALUE`, clustered flags `-hv`
//! - `--name VALUE`, `--name=VALUE`, unique prefixes of `--name`
//! - `--` ends option scanning; later tokens are stray positionals
//!
//! `--flag=VALUE` on an option that takes no argument is reported as an
//! unrecognized option, as `getopt_long` does.
//!
//! An optional argument is only taken when attached (`-cVALUE`,
//! `--name=VALUE`). A required argument is missing when the vector ends or
//! the next token looks like an option; negative numbers (`-7`, `-.5`) still
//! count as values.

use std::collections::HashMap;
use std::ffi::OsString;

use tracing::debug;

use crate::error::{ParseError, Result};
use crate::parse_result::ParseResult;
use crate::types::{ArgumentPolicy, OptionDescriptor};

/// Builds the getopt-style format string for `options`.
///
/// Each short id is followed by `:` for a required argument, `::` for an
/// optional one, and nothing for a flag.
///
/// # Examples
///
/// ```
/// use optbind_core::{ArgumentPolicy, OptionDescriptor, format_string};
///
/// let (mut help, mut ratio, mut level) = (0, 0.0, 0);
/// let options = vec![
///     OptionDescriptor::flag("help", 'h', &mut help),
///     OptionDescriptor::required("ratio", 'r', &mut ratio),
///     OptionDescriptor::optional("level", 'l', &mut level)
///         .with_argument(ArgumentPolicy::OptionalArgument),
/// ];
/// assert_eq!(format_string(&options), "hr:l::");
/// ```
pub fn format_string(options: &[OptionDescriptor<'_>]) -> String {
    options
        .iter()
        .map(|opt| format!("{}{}", opt.short_id, opt.argument.format_suffix()))
        .collect()
}

/// Parses a format string back into `(short id, policy)` pairs.
///
/// `:` and `::` suffixes bind to the preceding character; a leading colon
/// is ignored.
pub fn parse_format_string(format: &str) -> Vec<(char, ArgumentPolicy)> {
    let mut specs = Vec::new();
    let mut chars = format.chars().peekable();

    while let Some(id) = chars.next() {
        if id == ':' {
            continue;
        }
        let mut policy = ArgumentPolicy::NoArgument;
        if chars.next_if_eq(&':').is_some() {
            policy = ArgumentPolicy::RequiredArgument;
            if chars.next_if_eq(&':').is_some() {
                policy = ArgumentPolicy::OptionalArgument;
            }
        }
        specs.push((id, policy));
    }

    specs
}

/// A long option name and the short id it reports as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongOption {
    pub name: String,
    pub id: char,
}

impl LongOption {
    /// Long options for every descriptor in `options`.
    pub fn from_descriptors(options: &[OptionDescriptor<'_>]) -> Vec<Self> {
        options
            .iter()
            .map(|opt| Self {
                name: opt.long_name.clone(),
                id: opt.short_id,
            })
            .collect()
    }
}

/// One outcome of scanning the argument vector.
///
/// End of input is signalled by the iterator returning `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEvent {
    /// A recognized option, with its argument text if any.
    Match { id: char, text: Option<String> },
    /// An option token that no descriptor declares, or a flag given a value.
    UnknownOption(String),
    /// A required-argument option with no argument available.
    MissingArgument(char),
    /// A token not consumed by any option.
    Positional(String),
}

/// Iterator over the [`ScanEvent`]s of an argument vector.
///
/// Token splitting (clusters, `=` values, `--`) is done by [`lexopt`]; the
/// scanner decides what each option is allowed to consume. `args` excludes
/// the program name.
pub struct Scanner {
    shorts: HashMap<char, ArgumentPolicy>,
    longs: Vec<LongOption>,
    parser: lexopt::Parser,
}

impl Scanner {
    pub fn new(format: &str, longs: Vec<LongOption>, args: &[String]) -> Self {
        Self {
            shorts: parse_format_string(format).into_iter().collect(),
            longs,
            parser: lexopt::Parser::from_args(args.iter().cloned()),
        }
    }

    fn short_option(&mut self, id: char) -> ScanEvent {
        let Some(&policy) = self.shorts.get(&id) else {
            return ScanEvent::UnknownOption(id.to_string());
        };
        self.with_policy(id, policy)
    }

    fn long_option(&mut self, name: &str) -> ScanEvent {
        let policy = self
            .resolve_long(name)
            .and_then(|id| self.shorts.get(&id).map(|&policy| (id, policy)));
        let Some((id, policy)) = policy else {
            // Drop any `=value` so the next call starts on a fresh token.
            let _ = self.parser.optional_value();
            return ScanEvent::UnknownOption(name.to_string());
        };

        if policy == ArgumentPolicy::NoArgument && self.parser.optional_value().is_some() {
            return ScanEvent::UnknownOption(name.to_string());
        }
        self.with_policy(id, policy)
    }

    /// Collects the argument text `policy` allows for the option just seen.
    fn with_policy(&mut self, id: char, policy: ArgumentPolicy) -> ScanEvent {
        match policy {
            ArgumentPolicy::NoArgument => ScanEvent::Match { id, text: None },
            ArgumentPolicy::OptionalArgument => ScanEvent::Match {
                id,
                text: self.parser.optional_value().map(lossy),
            },
            ArgumentPolicy::RequiredArgument => match self.parser.optional_value() {
                Some(value) => ScanEvent::Match {
                    id,
                    text: Some(lossy(value)),
                },
                None => self.take_argument(id),
            },
        }
    }

    /// Exact long name, else a unique prefix of one.
    fn resolve_long(&self, name: &str) -> Option<char> {
        if name.is_empty() {
            return None;
        }
        if let Some(long) = self.longs.iter().find(|long| long.name == name) {
            return Some(long.id);
        }
        let mut candidates = self.longs.iter().filter(|long| long.name.starts_with(name));
        match (candidates.next(), candidates.next()) {
            (Some(long), None) => Some(long.id),
            _ => None,
        }
    }

    /// Consumes the next token as the argument of `id`, unless it is absent
    /// or looks like an option.
    fn take_argument(&mut self, id: char) -> ScanEvent {
        let available = match self.parser.raw_args() {
            Ok(mut raw) => raw
                .peek()
                .is_some_and(|next| !looks_like_option(&next.to_string_lossy())),
            Err(_) => false,
        };
        if !available {
            return ScanEvent::MissingArgument(id);
        }
        match self.parser.value() {
            Ok(value) => ScanEvent::Match {
                id,
                text: Some(lossy(value)),
            },
            Err(_) => ScanEvent::MissingArgument(id),
        }
    }
}

impl std::fmt::Debug for Scanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scanner")
            .field("shorts", &self.shorts)
            .field("longs", &self.longs)
            .finish_non_exhaustive()
    }
}

impl Iterator for Scanner {
    type Item = ScanEvent;

    fn next(&mut self) -> Option<ScanEvent> {
        let event = match self.parser.next() {
            Ok(None) => return None,
            Ok(Some(lexopt::Arg::Short(id))) => self.short_option(id),
            Ok(Some(lexopt::Arg::Long(name))) => {
                let name = name.to_string();
                self.long_option(&name)
            }
            Ok(Some(lexopt::Arg::Value(value))) => ScanEvent::Positional(lossy(value)),
            Err(err) => {
                debug!(error = %err, "Argument vector rejected by lexer");
                ScanEvent::UnknownOption(err.to_string())
            }
        };
        Some(event)
    }
}

fn lossy(value: OsString) -> String {
    value.to_string_lossy().into_owned()
}

/// Returns `true` for tokens that cannot serve as an option argument.
fn looks_like_option(token: &str) -> bool {
    let Some(rest) = token.strip_prefix('-') else {
        return false;
    };
    if rest.is_empty() {
        return false;
    }
    let mut chars = rest.chars();
    let negative_number = match chars.next() {
        Some(c) if c.is_ascii_digit() => true,
        Some('.') => chars.next().is_some_and(|c| c.is_ascii_digit()),
        _ => false,
    };
    !negative_number
}

/// Drives `scanner` to the end of input, recording matches in `result`.
///
/// Stops at the first error signal or repeated option.
pub fn scan_into(scanner: Scanner, result: &mut ParseResult) -> Result<()> {
    for event in scanner {
        match event {
            ScanEvent::Match { id, text } => {
                debug!(option = %id, text = ?text, "Matched option");
                result.insert(id, text)?;
            }
            ScanEvent::UnknownOption(token) => return Err(ParseError::UnrecognizedOption(token)),
            ScanEvent::MissingArgument(id) => return Err(ParseError::MissingArgument(id)),
            ScanEvent::Positional(token) => {
                return Err(ParseError::UnexpectedPositionalArgument(token));
            }
        }
    }
    Ok(())
}
