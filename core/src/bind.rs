//! Binding of scanned options into caller-owned destinations.

use tracing::debug;

use crate::coerce::coerce;
use crate::config::CoercionMode;
use crate::error::{ParseError, Result};
use crate::parse_result::ParseResult;
use crate::types::{OptionDescriptor, Value};

/// Converts every entry of `result` and writes it into the matching
/// descriptor's destination. Returns the number of destinations written.
///
/// All entries are converted before any destination is touched, so a failed
/// lookup or a strict coercion error leaves every destination unchanged.
pub fn bind_all(
    options: &mut [OptionDescriptor<'_>],
    result: &ParseResult,
    mode: CoercionMode,
) -> Result<usize> {
    let mut pending: Vec<(usize, Value)> = Vec::with_capacity(result.len());

    for (id, text) in result.iter() {
        let index = options
            .iter()
            .position(|opt| opt.short_id == id)
            .ok_or(ParseError::UnboundOption(id))?;
        let value = coerce(id, options[index].value_kind(), text, mode)?;
        pending.push((index, value));
    }

    for (index, value) in pending {
        let opt = &mut options[index];
        debug!(option = %opt.short_id, long = %opt.long_name, value = %value, "Binding option");
        if !opt.destination_mut().store(value) {
            return Err(ParseError::UnboundOption(opt.short_id));
        }
    }

    Ok(result.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_writes_each_destination_once() {
        let (mut a, mut c, mut d) = (f64::NAN, 100, String::from("gg"));
        {
            let mut options = vec![
                OptionDescriptor::required("alpha", 'a', &mut a),
                OptionDescriptor::optional("count", 'c', &mut c),
                OptionDescriptor::required("name", 'd', &mut d),
            ];
            let mut seen = ParseResult::new();
            seen.insert('d', Some("hello".into())).unwrap();
            seen.insert('a', Some("1.5".into())).unwrap();

            let bound = bind_all(&mut options, &seen, CoercionMode::Lenient).unwrap();
            assert_eq!(bound, 2);
        }
        assert_eq!(a, 1.5);
        assert_eq!(c, 100);
        assert_eq!(d, "hello");
    }

    #[test]
    fn test_unbound_option_is_error() {
        let mut a = 0.0;
        let mut options = vec![OptionDescriptor::required("alpha", 'a', &mut a)];
        let mut seen = ParseResult::new();
        seen.insert('q', None).unwrap();

        assert_eq!(
            bind_all(&mut options, &seen, CoercionMode::Lenient),
            Err(ParseError::UnboundOption('q'))
        );
    }

    #[test]
    fn test_strict_failure_writes_nothing() {
        let (mut a, mut c) = (0.5, 100);
        {
            let mut options = vec![
                OptionDescriptor::required("alpha", 'a', &mut a),
                OptionDescriptor::optional("count", 'c', &mut c),
            ];
            let mut seen = ParseResult::new();
            seen.insert('a', Some("2.5".into())).unwrap();
            seen.insert('c', Some("many".into())).unwrap();

            let err = bind_all(&mut options, &seen, CoercionMode::Strict).unwrap_err();
            assert!(matches!(err, ParseError::Coercion { option: 'c', .. }));
        }
        assert_eq!(a, 0.5);
        assert_eq!(c, 100);
    }
}
