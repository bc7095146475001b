//! Per-parse record of which options were seen and with what text.

use crate::error::{ParseError, Result};

/// Mapping from short id to the raw argument text observed for it.
///
/// Keys are unique: inserting an id twice fails with
/// [`ParseError::DuplicateOccurrence`]. Entries keep command-line order.
///
/// # Examples
///
/// ```
/// use optbind_core::{ParseError, ParseResult};
///
/// let mut seen = ParseResult::new();
/// seen.insert('a', Some("1.5".into())).unwrap();
/// assert_eq!(seen.get('a'), Some(Some("1.5")));
/// assert_eq!(
///     seen.insert('a', Some("2.5".into())),
///     Err(ParseError::DuplicateOccurrence('a'))
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseResult {
    entries: Vec<(char, Option<String>)>,
}

impl ParseResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an occurrence of `id`. The first occurrence wins; a repeat is
    /// an error and leaves the stored text unchanged.
    pub fn insert(&mut self, id: char, text: Option<String>) -> Result<()> {
        if self.contains(id) {
            return Err(ParseError::DuplicateOccurrence(id));
        }
        self.entries.push((id, text));
        Ok(())
    }

    pub fn contains(&self, id: char) -> bool {
        self.entries.iter().any(|(seen, _)| *seen == id)
    }

    /// Returns `Some(text)` if `id` was seen; `text` is `None` for options
    /// given without an argument.
    pub fn get(&self, id: char) -> Option<Option<&str>> {
        self.entries
            .iter()
            .find(|(seen, _)| *seen == id)
            .map(|(_, text)| text.as_deref())
    }

    /// Short ids in the order they appeared.
    pub fn ids(&self) -> impl Iterator<Item = char> + '_ {
        self.entries.iter().map(|(id, _)| *id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, Option<&str>)> {
        self.entries.iter().map(|(id, text)| (*id, text.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forgets every recorded occurrence.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
