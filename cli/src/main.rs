//! Demonstration front end for the option engine.
//!
//! Binds the reference option table against the process arguments, then
//! prints the configuration view (defaults) and the summary view (bound
//! values). On a parse error it prints the error and the usage table to
//! stderr and exits with status 1.

mod render;

use clap::ValueEnum;
use optbind_core::{CommandLineParser, OptionDescriptor, ReportRow, ReportSink, ReportView};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::render::{OutputFormat, RenderSink, usage};

const DEFAULT_PROGRAM: &str = "optbind-demo";

/// Destinations for the demo's options, holding their defaults.
#[derive(Debug)]
struct DemoParams {
    help: i32,
    parameter1: f64,
    parameter2: f64,
    parameter3: i32,
    parameter4: String,
    format: String,
}

impl Default for DemoParams {
    fn default() -> Self {
        Self {
            help: 0,
            parameter1: f64::NAN,
            parameter2: 3.14,
            parameter3: 100,
            parameter4: String::from("gg"),
            format: String::from("table"),
        }
    }
}

impl DemoParams {
    fn options(&mut self) -> Vec<OptionDescriptor<'_>> {
        vec![
            OptionDescriptor::flag("help", 'h', &mut self.help)
                .with_description("Print this usage table"),
            OptionDescriptor::required("longName1", 'a', &mut self.parameter1)
                .with_description("Required option with required double argument [physical units]"),
            OptionDescriptor::required("longName2", 'b', &mut self.parameter2)
                .with_description("Required option with required double argument []"),
            OptionDescriptor::optional("longName3", 'c', &mut self.parameter3)
                .with_description("Optional option with a required integer argument if used"),
            OptionDescriptor::required("longName4", 'd', &mut self.parameter4)
                .with_description("Required option with required string argument"),
            OptionDescriptor::optional("format", 'f', &mut self.format)
                .with_description("Output format: table, markdown, json or yaml"),
        ]
    }
}

fn main() {
    init_tracing();

    if let Err(err) = run(std::env::args().collect()) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Vec<String>) -> Result<(), String> {
    let mut params = DemoParams::default();
    let mut collected: Vec<(ReportView, Vec<ReportRow>)> = Vec::new();
    let program;

    {
        let mut parser = CommandLineParser::new(params.options());
        parser.report(ReportView::Configuration, &mut collected);

        let parsed = parser.parse(args);
        program = parser.program_name().unwrap_or(DEFAULT_PROGRAM).to_string();
        if let Err(err) = parsed {
            warn!(program = %program, error = %err, "Command line rejected");
            if err.is_user_error() {
                eprint!("{}", usage(&program, &collected[0].1));
            }
            return Err(err.to_string());
        }

        info!(program = %program, options = ?parser.parsed_ids(), "Command line accepted");
        parser.report(ReportView::Summary, &mut collected);
    }

    if params.help != 0 {
        print!("{}", usage(&program, &collected[0].1));
        return Ok(());
    }

    let format = OutputFormat::from_str(&params.format, true)
        .map_err(|_| format!("unknown output format '{}'", params.format))?;

    let mut sink = RenderSink::new(format);
    for (view, rows) in &collected {
        sink.emit(*view, rows);
    }
    print!("{}", sink.finish()?);

    Ok(())
}
