//! Row data for usage and summary displays.
//!
//! The engine does not format tables. It produces one [`ReportRow`] per
//! descriptor, in table order, and hands the rows to a [`ReportSink`] owned
//! by the front end.

use serde::Serialize;

use crate::types::{ArgumentPolicy, OptionDescriptor, ValueKind};

/// Which moment a set of rows describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportView {
    /// Before parsing; values are the caller's defaults.
    Configuration,
    /// After parsing; values are bound or untouched defaults.
    Summary,
}

/// Display data for one descriptor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub long_name: String,
    pub short_id: char,
    pub kind: ValueKind,
    pub required: bool,
    pub argument: ArgumentPolicy,
    /// Rendered destination value; `None` when there is nothing to show.
    pub value: Option<String>,
    pub description: String,
}

impl ReportRow {
    pub fn from_descriptor(opt: &OptionDescriptor<'_>) -> Self {
        Self {
            long_name: opt.long_name.clone(),
            short_id: opt.short_id,
            kind: opt.value_kind(),
            required: opt.is_required(),
            argument: opt.argument,
            value: opt.destination().render(),
            description: opt.description.clone(),
        }
    }

    /// The rendered value, or `"None"`.
    pub fn value_or_none(&self) -> &str {
        self.value.as_deref().unwrap_or("None")
    }
}

/// Builds rows for `options` in table order.
pub fn report_rows(options: &[OptionDescriptor<'_>]) -> Vec<ReportRow> {
    options.iter().map(ReportRow::from_descriptor).collect()
}

/// Receiver of report rows.
///
/// `Vec<(ReportView, Vec<ReportRow>)>` implements this trait for callers
/// that only want to collect rows.
pub trait ReportSink {
    fn emit(&mut self, view: ReportView, rows: &[ReportRow]);
}

impl ReportSink for Vec<(ReportView, Vec<ReportRow>)> {
    fn emit(&mut self, view: ReportView, rows: &[ReportRow]) {
        self.push((view, rows.to_vec()));
    }
}
