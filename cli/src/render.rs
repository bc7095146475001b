//! Rendering of report rows for the terminal.

use optbind_core::{ReportRow, ReportSink, ReportView};
use serde::Serialize;

/// Supported output formats, selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Table,
    Markdown,
    Json,
    Yaml,
}

/// Column headings and widths of the text table.
const COLUMNS: [(&str, usize); 7] = [
    ("Option Long Name", 20),
    ("Option Character", 18),
    ("Argument Type", 15),
    ("Option Required", 17),
    ("Argument Required", 19),
    ("Value", 14),
    ("Description [Physical Units]", 0),
];

#[derive(Serialize)]
struct RenderedView<'r> {
    view: ReportView,
    options: &'r [ReportRow],
}

/// A [`ReportSink`] that renders each view into a text buffer.
#[derive(Debug)]
pub struct RenderSink {
    format: OutputFormat,
    output: String,
    errors: Vec<String>,
}

impl RenderSink {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            output: String::new(),
            errors: Vec::new(),
        }
    }

    /// Returns the rendered text, or the first serialization error.
    pub fn finish(self) -> Result<String, String> {
        match self.errors.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(self.output),
        }
    }
}

impl ReportSink for RenderSink {
    fn emit(&mut self, view: ReportView, rows: &[ReportRow]) {
        match format_rows(view, rows, self.format) {
            Ok(text) => self.output.push_str(&text),
            Err(err) => self.errors.push(err),
        }
    }
}

/// Formats one view in the requested output format.
pub fn format_rows(
    view: ReportView,
    rows: &[ReportRow],
    format: OutputFormat,
) -> Result<String, String> {
    let rendered = RenderedView {
        view,
        options: rows,
    };
    match format {
        OutputFormat::Table => Ok(rows_to_table(view, rows)),
        OutputFormat::Markdown => Ok(rows_to_markdown(view, rows)),
        OutputFormat::Json => serde_json::to_string_pretty(&rendered)
            .map(|mut json| {
                json.push('\n');
                json
            })
            .map_err(|e| format!("JSON serialization failed: {e}")),
        OutputFormat::Yaml => serde_yaml::to_string(&rendered)
            .map_err(|e| format!("YAML serialization failed: {e}")),
    }
}

/// Usage banner followed by the option table.
pub fn usage(program: &str, rows: &[ReportRow]) -> String {
    let rule = "-".repeat(54);
    let mut out = String::new();
    out.push('\n');
    out.push_str(&format!("{rule}\n"));
    out.push_str(&format!(
        "General Usage: {program} -option_character <option_argument>\n"
    ));
    out.push_str(&format!("{rule}\n"));
    out.push_str(&rows_to_table(ReportView::Configuration, rows));
    out
}

fn view_title(view: ReportView) -> &'static str {
    match view {
        ReportView::Configuration => "Option & Argument Table",
        ReportView::Summary => "Input Summary",
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

fn cells(row: &ReportRow) -> [String; 7] {
    [
        row.long_name.clone(),
        row.short_id.to_string(),
        row.kind.label().to_string(),
        yes_no(row.required).to_string(),
        row.argument.label().to_string(),
        row.value_or_none().to_string(),
        row.description.clone(),
    ]
}

fn rows_to_table(view: ReportView, rows: &[ReportRow]) -> String {
    let mut out = String::new();
    let header: Vec<String> = COLUMNS.iter().map(|(name, _)| name.to_string()).collect();
    let header_line = table_line(&header);
    let rule = "-".repeat(header_line.len());

    out.push_str(&format!("{}\n", view_title(view)));
    out.push_str(&format!("{rule}\n{header_line}\n{rule}\n"));
    for row in rows {
        out.push_str(&table_line(&cells(row)));
        out.push('\n');
    }
    out.push_str(&format!("{rule}\n"));
    out
}

fn table_line(cells: &[String]) -> String {
    let mut line = String::new();
    for ((_, width), cell) in COLUMNS.iter().zip(cells) {
        line.push_str(&format!("{cell:<width$} ", width = *width));
    }
    line.trim_end().to_string()
}

fn rows_to_markdown(view: ReportView, rows: &[ReportRow]) -> String {
    let mut out = String::new();

    out.push_str(&format!("## {}\n\n", view_title(view)));
    out.push_str("| Option | Type | Required | Argument | Value | Description |\n");
    out.push_str("|--------|------|----------|----------|-------|-------------|\n");
    for row in rows {
        out.push_str(&format!(
            "| `-{}`, `--{}` | {} | {} | {} | {} | {} |\n",
            row.short_id,
            row.long_name,
            row.kind,
            yes_no(row.required),
            row.argument.label(),
            row.value_or_none(),
            row.description,
        ));
    }
    out.push('\n');

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use optbind_core::{ArgumentPolicy, ValueKind};

    fn sample_rows() -> Vec<ReportRow> {
        vec![
            ReportRow {
                long_name: "longName1".to_string(),
                short_id: 'a',
                kind: ValueKind::Double,
                required: true,
                argument: ArgumentPolicy::RequiredArgument,
                value: Some("1.5".to_string()),
                description: "Required double [physical units]".to_string(),
            },
            ReportRow {
                long_name: "longName4".to_string(),
                short_id: 'd',
                kind: ValueKind::String,
                required: false,
                argument: ArgumentPolicy::OptionalArgument,
                value: None,
                description: String::new(),
            },
        ]
    }

    #[test]
    fn test_table_contains_headings_and_values() {
        let table = format_rows(ReportView::Summary, &sample_rows(), OutputFormat::Table).unwrap();
        assert!(table.starts_with("Input Summary\n"));
        assert!(table.contains("Option Long Name"));
        assert!(table.contains("longName1"));
        assert!(table.contains("1.5"));
        assert!(table.contains("None"));
    }

    #[test]
    fn test_markdown_rows() {
        let md =
            format_rows(ReportView::Configuration, &sample_rows(), OutputFormat::Markdown).unwrap();
        assert!(md.contains("## Option & Argument Table"));
        assert!(md.contains("| `-a`, `--longName1` | double | yes | required | 1.5 |"));
        assert!(md.contains("| `-d`, `--longName4` | string | no | optional | None |"));
    }

    #[test]
    fn test_json_has_view_and_options() {
        let json = format_rows(ReportView::Summary, &sample_rows(), OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["view"], "summary");
        assert_eq!(parsed["options"][0]["short_id"], "a");
        assert!(parsed["options"][1]["value"].is_null());
    }

    #[test]
    fn test_yaml_output() {
        let yaml = format_rows(ReportView::Summary, &sample_rows(), OutputFormat::Yaml).unwrap();
        assert!(yaml.contains("view: summary"));
        assert!(yaml.contains("long_name: longName1"));
    }

    #[test]
    fn test_usage_banner() {
        let text = usage("optbind-demo", &sample_rows());
        assert!(text.contains("General Usage: optbind-demo -option_character <option_argument>"));
        assert!(text.contains("Option & Argument Table"));
    }

    #[test]
    fn test_render_sink_accumulates_views() {
        let mut sink = RenderSink::new(OutputFormat::Table);
        sink.emit(ReportView::Configuration, &sample_rows());
        sink.emit(ReportView::Summary, &sample_rows());
        let text = sink.finish().unwrap();
        assert!(text.contains("Option & Argument Table"));
        assert!(text.contains("Input Summary"));
    }
}
