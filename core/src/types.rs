//! Option descriptor type definitions.
//!
//! An [`OptionDescriptor`] pairs the static definition of one command-line
//! option (names, argument policy, requirement, help text) with a
//! [`Destination`]: a mutable borrow of the caller's variable that receives
//! the converted value. The variant of the destination fixes the option's
//! [`ValueKind`], so the kind can never disagree with the storage it names.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether an option takes an argument.
///
/// Determines the suffix written into the derived format string: nothing,
/// `:` or `::` respectively.
///
/// # Examples
///
/// ```
/// use optbind_core::ArgumentPolicy;
///
/// assert_eq!(ArgumentPolicy::RequiredArgument.format_suffix(), ":");
/// assert_eq!(ArgumentPolicy::OptionalArgument.format_suffix(), "::");
/// assert_eq!(ArgumentPolicy::NoArgument.format_suffix(), "");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArgumentPolicy {
    /// A flag; never consumes argument text.
    NoArgument,
    /// Argument text must follow, attached or as the next token.
    RequiredArgument,
    /// Argument text may be attached (`-cVALUE`, `--name=VALUE`).
    OptionalArgument,
}

impl ArgumentPolicy {
    /// Format-string suffix for this policy.
    pub fn format_suffix(self) -> &'static str {
        match self {
            Self::NoArgument => "",
            Self::RequiredArgument => ":",
            Self::OptionalArgument => "::",
        }
    }

    /// Short label used in usage and summary tables.
    pub fn label(self) -> &'static str {
        match self {
            Self::NoArgument => "none",
            Self::RequiredArgument => "required",
            Self::OptionalArgument => "optional",
        }
    }
}

/// Whether an option must appear on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Requirement {
    /// The parse fails when the option is absent.
    Required,
    /// The destination keeps its default when the option is absent.
    #[default]
    Optional,
}

/// How raw argument text is converted before it is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    String,
    Double,
    Float,
    Int,
}

impl ValueKind {
    /// Human-readable label used in usage and summary tables.
    pub fn label(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Double => "double",
            Self::Float => "float",
            Self::Int => "int",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A converted value, ready to be written into a [`Destination`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Double(f64),
    Float(f32),
    Int(i32),
}

impl Value {
    /// The kind this value belongs to.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::String(_) => ValueKind::String,
            Self::Double(_) => ValueKind::Double,
            Self::Float(_) => ValueKind::Float,
            Self::Int(_) => ValueKind::Int,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Double(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
        }
    }
}

/// Caller-owned storage for one option's value.
///
/// Build one with `.into()` from a mutable reference to a `String`, `f64`,
/// `f32` or `i32`. The borrow lasts as long as the descriptor holding it.
///
/// # Examples
///
/// ```
/// use optbind_core::{Destination, Value, ValueKind};
///
/// let mut level = 100;
/// {
///     let mut dest: Destination<'_> = (&mut level).into();
///     assert_eq!(dest.kind(), ValueKind::Int);
///     dest.store(Value::Int(7));
/// }
/// assert_eq!(level, 7);
/// ```
#[derive(Debug)]
pub enum Destination<'a> {
    String(&'a mut String),
    Double(&'a mut f64),
    Float(&'a mut f32),
    Int(&'a mut i32),
}

impl Destination<'_> {
    /// The value kind this destination accepts.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::String(_) => ValueKind::String,
            Self::Double(_) => ValueKind::Double,
            Self::Float(_) => ValueKind::Float,
            Self::Int(_) => ValueKind::Int,
        }
    }

    /// Current contents of the destination.
    pub fn current(&self) -> Value {
        match self {
            Self::String(slot) => Value::String((**slot).clone()),
            Self::Double(slot) => Value::Double(**slot),
            Self::Float(slot) => Value::Float(**slot),
            Self::Int(slot) => Value::Int(**slot),
        }
    }

    /// Writes `value` into the destination.
    ///
    /// Returns `false` and leaves the destination untouched when the value's
    /// kind differs from [`kind`](Self::kind).
    pub fn store(&mut self, value: Value) -> bool {
        match (self, value) {
            (Self::String(slot), Value::String(v)) => **slot = v,
            (Self::Double(slot), Value::Double(v)) => **slot = v,
            (Self::Float(slot), Value::Float(v)) => **slot = v,
            (Self::Int(slot), Value::Int(v)) => **slot = v,
            _ => return false,
        }
        true
    }

    /// Renders the current contents, or `None` when there is nothing to show
    /// (an empty string).
    pub fn render(&self) -> Option<String> {
        match self {
            Self::String(slot) if slot.is_empty() => None,
            _ => Some(self.current().to_string()),
        }
    }
}

impl<'a> From<&'a mut String> for Destination<'a> {
    fn from(slot: &'a mut String) -> Self {
        Self::String(slot)
    }
}

impl<'a> From<&'a mut f64> for Destination<'a> {
    fn from(slot: &'a mut f64) -> Self {
        Self::Double(slot)
    }
}

impl<'a> From<&'a mut f32> for Destination<'a> {
    fn from(slot: &'a mut f32) -> Self {
        Self::Float(slot)
    }
}

impl<'a> From<&'a mut i32> for Destination<'a> {
    fn from(slot: &'a mut i32) -> Self {
        Self::Int(slot)
    }
}

/// Definition of one command-line option.
///
/// Use [`new`](OptionDescriptor::new) for full control, or the shorthands
/// [`flag`](OptionDescriptor::flag), [`required`](OptionDescriptor::required)
/// and [`optional`](OptionDescriptor::optional), then chain
/// [`with_description`](OptionDescriptor::with_description).
///
/// # Examples
///
/// ```
/// use optbind_core::{ArgumentPolicy, OptionDescriptor, Requirement, ValueKind};
///
/// let mut ratio = 3.14;
/// let opt = OptionDescriptor::required("ratio", 'r', &mut ratio)
///     .with_description("Mixing ratio []");
///
/// assert_eq!(opt.short_id, 'r');
/// assert_eq!(opt.argument, ArgumentPolicy::RequiredArgument);
/// assert_eq!(opt.requirement, Requirement::Required);
/// assert_eq!(opt.value_kind(), ValueKind::Double);
/// ```
#[derive(Debug)]
pub struct OptionDescriptor<'a> {
    /// Long name, used as `--long_name` (no spaces).
    pub long_name: String,
    /// Single-character id, used as `-c`; also the scanner's match key.
    pub short_id: char,
    /// Whether the option takes an argument.
    pub argument: ArgumentPolicy,
    /// Whether the option must appear.
    pub requirement: Requirement,
    /// Help text.
    pub description: String,
    destination: Destination<'a>,
}

impl<'a> OptionDescriptor<'a> {
    /// Creates a descriptor with every attribute spelled out.
    pub fn new(
        long_name: &str,
        short_id: char,
        argument: ArgumentPolicy,
        requirement: Requirement,
        destination: impl Into<Destination<'a>>,
    ) -> Self {
        Self {
            long_name: long_name.to_string(),
            short_id,
            argument,
            requirement,
            description: String::new(),
            destination: destination.into(),
        }
    }

    /// Creates an optional flag that takes no argument.
    ///
    /// # Examples
    ///
    /// ```
    /// use optbind_core::{ArgumentPolicy, OptionDescriptor, Requirement};
    ///
    /// let mut help = 0;
    /// let opt = OptionDescriptor::flag("help", 'h', &mut help);
    /// assert_eq!(opt.argument, ArgumentPolicy::NoArgument);
    /// assert_eq!(opt.requirement, Requirement::Optional);
    /// ```
    pub fn flag(long_name: &str, short_id: char, destination: impl Into<Destination<'a>>) -> Self {
        Self::new(
            long_name,
            short_id,
            ArgumentPolicy::NoArgument,
            Requirement::Optional,
            destination,
        )
    }

    /// Creates a required option with a required argument.
    pub fn required(
        long_name: &str,
        short_id: char,
        destination: impl Into<Destination<'a>>,
    ) -> Self {
        Self::new(
            long_name,
            short_id,
            ArgumentPolicy::RequiredArgument,
            Requirement::Required,
            destination,
        )
    }

    /// Creates an optional option that takes a required argument when used.
    pub fn optional(
        long_name: &str,
        short_id: char,
        destination: impl Into<Destination<'a>>,
    ) -> Self {
        Self::new(
            long_name,
            short_id,
            ArgumentPolicy::RequiredArgument,
            Requirement::Optional,
            destination,
        )
    }

    /// Adds a description.
    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = desc.to_string();
        self
    }

    /// Replaces the argument policy.
    pub fn with_argument(mut self, argument: ArgumentPolicy) -> Self {
        self.argument = argument;
        self
    }

    /// Replaces the requirement.
    pub fn with_requirement(mut self, requirement: Requirement) -> Self {
        self.requirement = requirement;
        self
    }

    /// The kind of value this option's destination holds.
    pub fn value_kind(&self) -> ValueKind {
        self.destination.kind()
    }

    /// Returns `true` if the option must appear on the command line.
    pub fn is_required(&self) -> bool {
        self.requirement == Requirement::Required
    }

    pub fn destination(&self) -> &Destination<'a> {
        &self.destination
    }

    pub(crate) fn destination_mut(&mut self) -> &mut Destination<'a> {
        &mut self.destination
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_kind_follows_destination() {
        let mut name = String::from("gg");
        let mut ratio = 1.5f32;
        let text = OptionDescriptor::required("name", 'n', &mut name);
        let float = OptionDescriptor::optional("ratio", 'r', &mut ratio);

        assert_eq!(text.value_kind(), ValueKind::String);
        assert_eq!(float.value_kind(), ValueKind::Float);
        assert!(text.is_required());
        assert!(!float.is_required());
    }

    #[test]
    fn test_store_rejects_mismatched_kind() {
        let mut count = 5;
        let mut dest = Destination::from(&mut count);
        assert!(!dest.store(Value::Double(2.0)));
        assert!(dest.store(Value::Int(9)));
        assert_eq!(count, 9);
    }

    #[test]
    fn test_render_empty_string_is_none() {
        let mut empty = String::new();
        let mut nan = f64::NAN;
        assert_eq!(Destination::from(&mut empty).render(), None);
        assert_eq!(Destination::from(&mut nan).render().as_deref(), Some("NaN"));
    }

    #[test]
    fn test_builder_overrides() {
        let mut level = 0;
        let opt = OptionDescriptor::flag("level", 'l', &mut level)
            .with_argument(ArgumentPolicy::OptionalArgument)
            .with_requirement(Requirement::Required)
            .with_description("Level");

        assert_eq!(opt.argument, ArgumentPolicy::OptionalArgument);
        assert!(opt.is_required());
        assert_eq!(opt.description, "Level");
    }
}
