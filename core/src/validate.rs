//! Option table and coverage validation.
//!
//! Table checks run before any scanning so that configuration mistakes
//! (duplicate names, unscannable ids) surface even on an empty command line.
//! Every check stops at the first problem found in table order.
//!
//! # Examples
//!
//! ```
//! use optbind_core::*;
//!
//! let (mut first, mut second) = (0.0, 0.0);
//! let options = vec![
//!     OptionDescriptor::required("longName1", 'a', &mut first),
//!     OptionDescriptor::required("longName1", 'e', &mut second),
//! ];
//! assert_eq!(
//!     validate_no_duplicates(&options),
//!     Err(ParseError::DuplicateDescriptor("longName1".to_string()))
//! );
//! ```

use std::collections::HashSet;

use crate::error::{ParseError, Result};
use crate::parse_result::ParseResult;
use crate::types::OptionDescriptor;

/// Checks that long names and short ids are pairwise distinct.
///
/// The error names the first repeated value: the long name itself, or the
/// short id with its leading dash.
pub fn validate_no_duplicates(options: &[OptionDescriptor<'_>]) -> Result<()> {
    let mut seen_long: HashSet<&str> = HashSet::new();
    let mut seen_short: HashSet<char> = HashSet::new();

    for opt in options {
        check_unique(opt, &mut seen_long, &mut seen_short)?;
    }

    Ok(())
}

/// Full pre-scan check: every descriptor must be scannable and unique.
///
/// # Examples
///
/// ```
/// use optbind_core::*;
///
/// let mut value = String::new();
/// let options = vec![OptionDescriptor::required("file name", 'f', &mut value)];
/// assert!(matches!(
///     validate_table(&options),
///     Err(ParseError::InvalidDescriptor(_))
/// ));
/// ```
pub fn validate_table(options: &[OptionDescriptor<'_>]) -> Result<()> {
    let mut seen_long: HashSet<&str> = HashSet::new();
    let mut seen_short: HashSet<char> = HashSet::new();

    for opt in options {
        check_names(opt)?;
        check_unique(opt, &mut seen_long, &mut seen_short)?;
    }

    Ok(())
}

/// Checks that every required descriptor's short id appears in `result`.
///
/// # Examples
///
/// ```
/// use optbind_core::*;
///
/// let mut path = String::new();
/// let options = vec![OptionDescriptor::required("path", 'p', &mut path)];
/// let seen = ParseResult::new();
/// assert_eq!(
///     validate_required_coverage(&options, &seen),
///     Err(ParseError::MissingRequiredOption('p'))
/// );
/// ```
pub fn validate_required_coverage(
    options: &[OptionDescriptor<'_>],
    result: &ParseResult,
) -> Result<()> {
    for opt in options {
        if opt.is_required() && !result.contains(opt.short_id) {
            return Err(ParseError::MissingRequiredOption(opt.short_id));
        }
    }
    Ok(())
}

fn check_unique<'o>(
    opt: &'o OptionDescriptor<'_>,
    seen_long: &mut HashSet<&'o str>,
    seen_short: &mut HashSet<char>,
) -> Result<()> {
    if !seen_long.insert(opt.long_name.as_str()) {
        return Err(ParseError::DuplicateDescriptor(opt.long_name.clone()));
    }
    if !seen_short.insert(opt.short_id) {
        return Err(ParseError::DuplicateDescriptor(format!("-{}", opt.short_id)));
    }
    Ok(())
}

fn check_names(opt: &OptionDescriptor<'_>) -> Result<()> {
    let long = opt.long_name.as_str();
    if long.is_empty() || long.chars().any(char::is_whitespace) || long.contains('=') {
        return Err(ParseError::InvalidDescriptor(format!("long name '{long}'")));
    }

    let id = opt.short_id;
    if !id.is_ascii_graphic() || matches!(id, '-' | ':') {
        return Err(ParseError::InvalidDescriptor(format!(
            "short id {id:?} of '{long}'"
        )));
    }

    Ok(())
}
