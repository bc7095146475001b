//! Parser settings.
//!
//! Settings are plain serde-serializable data passed to
//! [`CommandLineParser::with_settings`](crate::CommandLineParser::with_settings).

use serde::{Deserialize, Serialize};

/// How numeric argument text that fails to convert is handled.
///
/// `Lenient` is the default and keeps the parse going: unconvertible
/// double/float text becomes `NaN`, unconvertible int text becomes
/// `i32::MIN`, and trailing garbage after a numeric prefix is ignored
/// (`"3.5kg"` binds `3.5`). Whether silent sentinels are a feature or a
/// latent defect is an open question, so `Strict` is offered as well: the
/// whole text must convert, otherwise the parse fails with
/// [`ParseError::Coercion`](crate::ParseError::Coercion).
///
/// # Examples
///
/// ```
/// use optbind_core::CoercionMode;
///
/// assert_eq!(CoercionMode::default(), CoercionMode::Lenient);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoercionMode {
    #[default]
    Lenient,
    Strict,
}

/// Settings controlling a [`CommandLineParser`](crate::CommandLineParser).
///
/// # Examples
///
/// ```
/// use optbind_core::{CoercionMode, ParserSettings};
///
/// let settings = ParserSettings::default()
///     .with_coercion(CoercionMode::Strict)
///     .with_program_name("fit");
/// assert_eq!(settings.coercion, CoercionMode::Strict);
/// assert_eq!(settings.program_name.as_deref(), Some("fit"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserSettings {
    /// Numeric conversion policy.
    #[serde(default)]
    pub coercion: CoercionMode,
    /// Program name for usage banners. Defaults to the first argument.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program_name: Option<String>,
}

impl ParserSettings {
    pub fn with_coercion(mut self, coercion: CoercionMode) -> Self {
        self.coercion = coercion;
        self
    }

    pub fn with_program_name(mut self, name: &str) -> Self {
        self.program_name = Some(name.to_string());
        self
    }
}
