//! Mock report sink for integration testing.
//!
//! Records every report written to it, in-memory, and can be switched
//! into a failing mode to stand in for a denied clipboard write.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use roundrobin::engine::{evaluate, RoundRobin};
use roundrobin::export::{self, copy_report, ExportFormat, ReportSink};
use roundrobin::types::{RoundRobinError, TeamEntry, TeamId, TeamStatus};

/// A mock sink whose state is fully controllable from test code.
pub struct MockSink {
    writes: Arc<Mutex<Vec<String>>>,
    /// If set, all writes will return this error.
    force_error: Arc<Mutex<Option<String>>>,
}

impl MockSink {
    pub fn new() -> Self {
        Self {
            writes: Arc::new(Mutex::new(Vec::new())),
            force_error: Arc::new(Mutex::new(None)),
        }
    }

    /// Force all subsequent writes to fail.
    pub fn set_error(&self, msg: &str) {
        *self.force_error.lock().unwrap() = Some(msg.to_string());
    }

    /// Clear any forced error.
    pub fn clear_error(&self) {
        *self.force_error.lock().unwrap() = None;
    }

    /// Everything written so far.
    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReportSink for MockSink {
    async fn write_text(&self, text: &str) -> Result<(), RoundRobinError> {
        if let Some(msg) = self.force_error.lock().unwrap().clone() {
            return Err(RoundRobinError::Sink(msg));
        }
        self.writes.lock().unwrap().push(text.to_string());
        Ok(())
    }

    fn name(&self) -> &str {
        "mock"
    }
}

fn slate() -> RoundRobin {
    let teams = vec![
        TeamEntry::new(TeamId(1), "Lakers", "1.90", TeamStatus::Win),
        TeamEntry::new(TeamId(2), "Celtics", "2.10", TeamStatus::Lose),
        TeamEntry::new(TeamId(3), "Bulls", "2.50", TeamStatus::Win),
        TeamEntry::new(TeamId(4), "Knicks", "1.75", TeamStatus::Unset),
    ];
    evaluate(&teams, 2, "60")
}

#[tokio::test]
async fn test_report_reaches_sink() {
    let sink = MockSink::new();
    let rr = slate();
    let report = export::render(&rr, ExportFormat::Text, "$").unwrap();

    assert!(copy_report(&sink, &report).await);

    let writes = sink.writes();
    assert_eq!(writes.len(), 1);
    assert!(writes[0].starts_with("Combination 1, made up of picks: Lakers, Celtics,"));
    assert_eq!(writes[0].matches("Combination ").count(), 6);
}

#[tokio::test]
async fn test_sink_failure_leaves_results_untouched() {
    let sink = MockSink::new();
    sink.set_error("clipboard permission denied");

    let rr = slate();
    let before = rr.clone();
    let report = export::render(&rr, ExportFormat::Text, "$").unwrap();

    assert!(!copy_report(&sink, &report).await);
    assert!(sink.writes().is_empty());
    assert_eq!(rr, before);

    sink.clear_error();
    assert!(copy_report(&sink, &report).await);
    assert_eq!(sink.writes().len(), 1);
}
