//! `firehose report`: replays a recorded event log into a report.
//!
//! 1. Load config via `firehose_config`
//! 2. Parse the event log
//! 3. Run every event through a `Reporter`, streaming to `-o` if given
//! 4. Print the final report tree

use std::fs::File;
use std::io::{self, BufWriter, Write};

use firehose_config::ReportConfig;
use firehose_diagnostics::{Event, ReportError, ReportSettings, Reporter};
use firehose_model::{Analysis, Generator, Metadata, ToMarkup};
use log::info;

use crate::event_log::parse_log;
use crate::{config, GlobalArgs, ReportArgs, ReportFormat};

/// Counts from one replay.
#[derive(Debug, PartialEq, Eq)]
struct Summary {
    events: usize,
    findings: usize,
    suppressed: usize,
}

/// Runs the `firehose report` command.
pub fn run(args: &ReportArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let config = config::load(global)?;
    let stdout = io::stdout();
    let summary = generate(args, &config, &mut stdout.lock())?;

    if !global.quiet {
        eprintln!(
            "   Reported {} finding(s) from {} event(s), {} repeat(s) suppressed",
            summary.findings, summary.events, summary.suppressed
        );
    }
    Ok(0)
}

/// Replays the log named in `args` and prints the report tree to `out`.
///
/// Command-line flags take precedence over the configuration file. When the
/// document is streamed to a file as markup, nothing is printed.
fn generate(
    args: &ReportArgs,
    config: &ReportConfig,
    out: &mut impl Write,
) -> Result<Summary, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(&args.event_log)?;
    let events = parse_log(&content, &args.event_log);

    let metadata = Metadata::new(Generator::new(
        config.generator.name.as_str(),
        config.generator.version.as_str(),
    ));
    let settings = ReportSettings {
        aggregate_events: args.aggregate || config.report.aggregate_events,
    };
    let format = args
        .format
        .unwrap_or_else(|| ReportFormat::from(config.report.format));
    let output = args.output.as_ref().or(config.report.output.as_ref());

    info!(
        log = args.event_log.as_str(),
        events = events.len(),
        aggregate = settings.aggregate_events;
        "Replaying event log"
    );

    let (analysis, summary) = match output {
        Some(path) => {
            let file = BufWriter::new(File::create(path)?);
            let replayed = replay(Reporter::with_stream(metadata, settings, file), &events)?;
            info!(path = path.as_str(); "Wrote report document");
            replayed
        }
        None => replay(Reporter::new(metadata, settings), &events)?,
    };

    if output.is_none() || format == ReportFormat::Json {
        write_analysis(&analysis, format, out)?;
    }
    Ok(summary)
}

fn replay<W: Write>(
    mut reporter: Reporter<W>,
    events: &[Event],
) -> Result<(Analysis, Summary), ReportError> {
    let mut findings = 0;
    for event in events {
        if reporter.record(event)?.is_some() {
            findings += 1;
        }
    }
    let suppressed = reporter.suppressed();
    let analysis = reporter.close()?;
    let summary = Summary {
        events: events.len(),
        findings,
        suppressed,
    };
    Ok((analysis, summary))
}

fn write_analysis(
    analysis: &Analysis,
    format: ReportFormat,
    out: &mut impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        ReportFormat::Xml => writeln!(out, "{}", analysis.to_markup())?,
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, analysis)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    const LOG: &str = "\
KLEE: output directory is \"klee-out-0\"
KLEE: WARNING: undefined reference to function: _ZN4QUrlD1Ev
KLEE: WARNING ONCE: calling external: ev_default_loop(0)
KLEE: WARNING ONCE: calling external: ev_run(1)
KLEE: WARNING ONCE: calling external: ev_default_loop(0)
KLEE: ERROR: failed external call: ajStrNew
";

    fn args(log: &Path) -> ReportArgs {
        ReportArgs {
            event_log: log.display().to_string(),
            output: None,
            format: None,
            aggregate: false,
        }
    }

    fn write_log(dir: &Path) -> std::path::PathBuf {
        let path = dir.join("messages.txt");
        std::fs::write(&path, LOG).unwrap();
        path
    }

    #[test]
    fn prints_markup_tree() {
        let dir = tempfile::tempdir().unwrap();
        let log = write_log(dir.path());
        let mut args = args(&log);
        args.aggregate = true;

        let mut out = Vec::new();
        let summary = generate(&args, &ReportConfig::default(), &mut out).unwrap();
        assert_eq!(
            summary,
            Summary {
                events: 6,
                findings: 3,
                suppressed: 2,
            }
        );

        let xml = String::from_utf8(out).unwrap();
        assert!(xml.starts_with("<analysis>\n<metadata>\n<generator name=\"firehose\""));
        assert!(xml.contains("<info info-id=\"undefined-function-reference\">"));
        assert!(xml.contains("<failure failure-id=\"external-call\">"));
        assert_eq!(xml.matches("info-id=\"calling-external\"").count(), 1);
        assert!(xml.ends_with("</results>\n</analysis>\n"));
    }

    #[test]
    fn without_aggregation_tree_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let log = write_log(dir.path());
        let mut out = Vec::new();
        generate(&args(&log), &ReportConfig::default(), &mut out).unwrap();
        let xml = String::from_utf8(out).unwrap();
        assert!(xml.contains("<results>\n</results>"));
    }

    #[test]
    fn streams_document_to_output() {
        let dir = tempfile::tempdir().unwrap();
        let log = write_log(dir.path());
        let doc_path = dir.path().join("firehose.xml");
        let mut args = args(&log);
        args.output = Some(doc_path.display().to_string());

        let mut out = Vec::new();
        generate(&args, &ReportConfig::default(), &mut out).unwrap();
        assert!(out.is_empty());

        let doc = std::fs::read_to_string(&doc_path).unwrap();
        assert!(doc.starts_with("<analysis>\n"));
        assert!(doc.ends_with("</results>\n</analysis>\n"));
        assert_eq!(doc.matches("<info ").count(), 2);
        assert_eq!(doc.matches("<failure ").count(), 1);
    }

    #[test]
    fn json_uses_configured_generator() {
        let dir = tempfile::tempdir().unwrap();
        let log = write_log(dir.path());
        let config = ReportConfig {
            generator: firehose_config::GeneratorConfig {
                name: "klee".to_string(),
                version: "3.1".to_string(),
            },
            report: firehose_config::ReportSection {
                aggregate_events: true,
                output: None,
                format: firehose_config::OutputFormat::Json,
            },
        };

        let mut out = Vec::new();
        generate(&args(&log), &config, &mut out).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["metadata"]["generator"]["name"], "klee");
        assert_eq!(json["metadata"]["generator"]["version"], "3.1");
        assert_eq!(json["results"].as_array().map(Vec::len), Some(3));
        assert_eq!(json["results"][2]["type"], "failure");
    }

    #[test]
    fn missing_log_errors() {
        let dir = tempfile::tempdir().unwrap();
        let mut out = Vec::new();
        let result = generate(
            &args(&dir.path().join("missing.txt")),
            &ReportConfig::default(),
            &mut out,
        );
        assert!(result.is_err());
    }
}
