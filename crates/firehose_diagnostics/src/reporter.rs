//! The long-lived report context that every diagnostic passes through.

use std::io::{self, Write};

use firehose_model::{
    Analysis, Failure, Info, Issue, Metadata, ResultType, Results, ToMarkup,
};
use log::{debug, trace};

use crate::classify::classify;
use crate::error::ReportError;
use crate::event::Event;
use crate::once::OnceFilter;
use crate::origin::Origin;
use crate::writer::ReportWriter;

/// Options controlling what ends up in the in-memory report tree.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ReportSettings {
    /// Also append failures and infos to the aggregated results.
    ///
    /// Off by default: failures and infos are only streamed, and the
    /// aggregate holds issues.
    pub aggregate_events: bool,
}

/// Classifies events, suppresses repeats, and builds the report.
///
/// A reporter is opened once per run, receives every event, and is closed at
/// the end, which finalizes any attached document stream. It is not shared
/// implicitly; hosts that record from several threads wrap it in a lock.
pub struct Reporter<W: Write> {
    settings: ReportSettings,
    once: OnceFilter,
    analysis: Analysis,
    stream: Option<ReportWriter<W>>,
    suppressed: usize,
}

impl Reporter<io::Sink> {
    /// Opens a reporter that only builds the in-memory report.
    pub fn new(metadata: Metadata, settings: ReportSettings) -> Self {
        Self::build(metadata, settings, None)
    }
}

impl<W: Write> Reporter<W> {
    /// Opens a reporter that also streams every finding to `writer` as a
    /// report document.
    pub fn with_stream(metadata: Metadata, settings: ReportSettings, writer: W) -> Self {
        let stream = ReportWriter::new(writer, metadata.clone());
        Self::build(metadata, settings, Some(stream))
    }

    fn build(
        metadata: Metadata,
        settings: ReportSettings,
        stream: Option<ReportWriter<W>>,
    ) -> Self {
        Self {
            settings,
            once: OnceFilter::new(),
            analysis: Analysis::new(metadata, Results::new()),
            stream,
            suppressed: 0,
        }
    }

    /// Records one event.
    ///
    /// Returns the finding the event produced, or `None` if the event is a
    /// plain message or a repeat of a "warn once" event already reported.
    ///
    /// A "warn once" event is marked as reported only after its finding has
    /// been aggregated or streamed. When the stream fails and aggregation is
    /// off, the next occurrence is reported instead of suppressed.
    pub fn record(&mut self, event: &Event) -> Result<Option<ResultType>, ReportError> {
        if !event.severity.is_reported() {
            trace!(event = event.to_string(); "Skipping plain message");
            return Ok(None);
        }

        let id = classify(&event.text);

        if let Some(origin) = &event.origin {
            if self.once.has_seen(origin, &event.text) {
                self.suppressed += 1;
                trace!(
                    origin = origin.to_string(),
                    event = event.to_string(),
                    taxonomy = id.as_str();
                    "Suppressed repeated warning"
                );
                return Ok(None);
            }
        }

        let finding: ResultType = match id.failure_kind() {
            Some(kind) => Failure::new(kind, event.text.as_str()).into(),
            None => Info::new(id, event.text.as_str()).into(),
        };
        debug!(
            severity = event.severity.to_string(),
            taxonomy = id.as_str(),
            class = id.class().to_string();
            "Classified event"
        );

        let aggregate = self.settings.aggregate_events;
        let emitted = self.emit(&finding, aggregate);
        if let Some(origin) = &event.origin {
            if emitted.is_ok() || aggregate {
                self.once.should_emit(origin, &event.text);
            }
        }
        emitted?;
        Ok(Some(finding))
    }

    /// Records a note.
    pub fn note(&mut self, text: impl Into<String>) -> Result<Option<ResultType>, ReportError> {
        self.record(&Event::note(text))
    }

    /// Records a warning.
    pub fn warning(&mut self, text: impl Into<String>) -> Result<Option<ResultType>, ReportError> {
        self.record(&Event::warning(text))
    }

    /// Records a warning reported only once for the calling code location.
    #[track_caller]
    pub fn warning_once(
        &mut self,
        text: impl Into<String>,
    ) -> Result<Option<ResultType>, ReportError> {
        let origin = Origin::caller();
        self.record(&Event::warning_once(origin, text))
    }

    /// Records an error.
    pub fn error(&mut self, text: impl Into<String>) -> Result<Option<ResultType>, ReportError> {
        self.record(&Event::error(text))
    }

    /// Records a located defect. Issues always land in the results, even
    /// when streaming them fails.
    pub fn record_issue(&mut self, issue: Issue) -> Result<(), ReportError> {
        self.emit(&ResultType::Issue(issue), true)
    }

    fn emit(&mut self, finding: &ResultType, aggregate: bool) -> Result<(), ReportError> {
        if aggregate {
            self.analysis.push(finding.clone());
        }
        if let Some(stream) = self.stream.as_mut() {
            stream.write_element(finding)?;
        }
        Ok(())
    }

    /// Returns the report built so far.
    pub fn analysis(&self) -> &Analysis {
        &self.analysis
    }

    /// Renders the report built so far.
    pub fn to_markup(&self) -> String {
        self.analysis.to_markup()
    }

    /// Removes and returns the aggregated results, leaving them empty.
    pub fn take_results(&mut self) -> Results {
        std::mem::take(&mut self.analysis.results)
    }

    /// Returns the number of repeated warnings suppressed so far.
    pub fn suppressed(&self) -> usize {
        self.suppressed
    }

    /// Returns the filter deciding which "warn once" events are new.
    pub fn once_filter(&self) -> &OnceFilter {
        &self.once
    }

    /// Finalizes any attached stream and returns the report.
    pub fn close(mut self) -> Result<Analysis, ReportError> {
        if let Some(mut stream) = self.stream.take() {
            stream.close()?;
        }
        debug!(
            results = self.analysis.results.len(),
            suppressed = self.suppressed,
            once_keys = self.once.len();
            "Closed reporter"
        );
        Ok(self.analysis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use firehose_model::{
        FailureKind, File, Function, Generator, Location, Point, Taxonomy,
    };

    fn metadata() -> Metadata {
        Metadata::new(Generator::new("klee", "1.2.0"))
    }

    fn aggregating() -> ReportSettings {
        ReportSettings {
            aggregate_events: true,
        }
    }

    #[test]
    fn plain_messages_are_not_reported() {
        let mut reporter = Reporter::new(metadata(), aggregating());
        let result = reporter.record(&Event::message("KLEE: done")).unwrap();
        assert!(result.is_none());
        assert!(reporter.analysis().results.is_empty());
    }

    #[test]
    fn failure_kind_selects_failure() {
        let mut reporter = Reporter::new(metadata(), ReportSettings::default());
        let finding = reporter
            .error("unable to load symbol(_ZN4dcpp4Text13systemCharsetE) while initializing globals.")
            .unwrap();
        match finding {
            Some(ResultType::Failure(failure)) => {
                assert_eq!(failure.kind(), FailureKind::SymbolLoading);
                assert!(failure.location.is_none());
            }
            other => panic!("expected a failure, got {other:?}"),
        }
    }

    #[test]
    fn info_class_selects_info() {
        let mut reporter = Reporter::new(metadata(), ReportSettings::default());
        let finding = reporter.warning("calling external: ev_default_loop(0)").unwrap();
        assert_eq!(
            finding,
            Some(ResultType::Info(Info::new(
                Taxonomy::CallingExternal,
                "calling external: ev_default_loop(0)"
            )))
        );
    }

    #[test]
    fn unclassified_error_is_info_other() {
        let mut reporter = Reporter::new(metadata(), ReportSettings::default());
        let finding = reporter.error("this matches nothing").unwrap();
        match finding {
            Some(ResultType::Info(info)) => assert_eq!(info.id(), Taxonomy::Other),
            other => panic!("expected an info, got {other:?}"),
        }
    }

    #[test]
    fn events_not_aggregated_by_default() {
        let mut reporter = Reporter::new(metadata(), ReportSettings::default());
        reporter.warning("Large alloc: 13113808 bytes.").unwrap();
        reporter.note("execve: ignoring (EACCES)").unwrap();
        assert!(reporter.analysis().results.is_empty());
    }

    #[test]
    fn events_aggregated_when_enabled() {
        let mut reporter = Reporter::new(metadata(), aggregating());
        reporter.warning("Large alloc: 13113808 bytes.").unwrap();
        reporter.error("failed external call: ajStrNew").unwrap();
        let entries = reporter.analysis().results.entries();
        assert_eq!(entries.len(), 2);
        assert!(matches!(entries[0], ResultType::Info(_)));
        assert!(matches!(entries[1], ResultType::Failure(_)));
    }

    #[test]
    fn issues_always_aggregated() {
        let mut reporter = Reporter::new(metadata(), ReportSettings::default());
        let loc = Location::with_point(File::new("t.c"), Function::new("main"), Point::new(4, 2));
        reporter.record_issue(Issue::new("Invalid pointer", loc)).unwrap();
        assert_eq!(reporter.analysis().results.issues().count(), 1);
        assert!(reporter.to_markup().contains("<message>Invalid pointer</message>"));
    }

    #[test]
    fn warning_once_per_call_site() {
        let mut reporter = Reporter::new(metadata(), aggregating());
        let mut reported = 0;
        for i in 0..5 {
            if reporter
                .warning_once(format!("calling external: f({i})"))
                .unwrap()
                .is_some()
            {
                reported += 1;
            }
        }
        assert_eq!(reported, 1);
        assert_eq!(reporter.suppressed(), 4);
        assert_eq!(reporter.once_filter().len(), 1);
    }

    #[test]
    fn warning_once_distinct_sites() {
        let mut reporter = Reporter::new(metadata(), aggregating());
        assert!(reporter.warning_once("f has inline asm").unwrap().is_some());
        assert!(reporter.warning_once("f has inline asm").unwrap().is_some());
        assert_eq!(reporter.analysis().results.len(), 2);
    }

    #[test]
    fn take_results_resets_aggregate() {
        let mut reporter = Reporter::new(metadata(), aggregating());
        reporter.warning("execve: x").unwrap();
        let taken = reporter.take_results();
        assert_eq!(taken.len(), 1);
        assert!(reporter.analysis().results.is_empty());
    }

    #[test]
    fn stream_receives_findings() {
        let mut out = Vec::new();
        {
            let mut reporter =
                Reporter::with_stream(metadata(), ReportSettings::default(), &mut out);
            reporter.warning("calling external: f(1)").unwrap();
            reporter.error("unable to load symbol(y)").unwrap();
            let analysis = reporter.close().unwrap();
            assert!(analysis.results.is_empty());
        }
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("<analysis>\n<metadata>\n"));
        assert!(out.contains("<info info-id=\"calling-external\">"));
        assert!(out.contains("<failure failure-id=\"symbol-loading\">"));
        assert!(out.ends_with("</results>\n</analysis>\n"));
    }

    /// Fails the first `failures` writes, then accepts everything.
    struct Flaky {
        failures: usize,
        out: Vec<u8>,
    }

    impl Flaky {
        fn new(failures: usize) -> Self {
            Self {
                failures,
                out: Vec::new(),
            }
        }
    }

    impl Write for Flaky {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.failures > 0 {
                self.failures -= 1;
                return Err(io::Error::other("disk full"));
            }
            self.out.extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn failed_stream_keeps_aggregated_once_warning() {
        let mut reporter = Reporter::with_stream(metadata(), aggregating(), Flaky::new(usize::MAX));
        let event = Event::warning_once(Origin::named("O"), "calling external: f(1)");
        assert!(matches!(reporter.record(&event), Err(ReportError::Io(_))));
        assert_eq!(reporter.analysis().results.len(), 1);

        assert_eq!(reporter.record(&event).unwrap(), None);
        assert_eq!(reporter.suppressed(), 1);
        assert_eq!(reporter.analysis().results.len(), 1);
    }

    #[test]
    fn failed_stream_retries_unaggregated_once_warning() {
        let mut reporter =
            Reporter::with_stream(metadata(), ReportSettings::default(), Flaky::new(1));
        let event = Event::warning_once(Origin::named("O"), "calling external: f(1)");
        assert!(reporter.record(&event).is_err());
        assert!(reporter.once_filter().is_empty());

        let finding = reporter.record(&event).unwrap();
        assert!(matches!(finding, Some(ResultType::Info(_))));
        assert_eq!(reporter.suppressed(), 0);
        assert!(reporter.record(&event).unwrap().is_none());
    }

    #[test]
    fn failed_stream_still_aggregates_issue() {
        let mut reporter =
            Reporter::with_stream(metadata(), ReportSettings::default(), Flaky::new(usize::MAX));
        let loc = Location::with_point(File::new("t.c"), Function::new("main"), Point::new(4, 2));
        assert!(reporter.record_issue(Issue::new("Invalid pointer", loc)).is_err());
        assert_eq!(reporter.analysis().results.issues().count(), 1);
    }

    #[test]
    fn close_without_events_writes_nothing() {
        let mut out = Vec::new();
        let reporter = Reporter::with_stream(metadata(), ReportSettings::default(), &mut out);
        reporter.close().unwrap();
        assert!(out.is_empty());
    }
}
