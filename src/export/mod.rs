//! Report export.
//!
//! Renders a `RoundRobin` as text or JSON and hands it to a `ReportSink`
//! (the clipboard in a browser, stdout for the binary). Sink failures are
//! logged and never feed back into the computed results.

pub mod text;

use anyhow::Result as AnyResult;
use async_trait::async_trait;
use serde::Deserialize;
use tokio::io::AsyncWriteExt;
use tracing::{debug, error};

use crate::engine::RoundRobin;
use crate::types::RoundRobinError;

/// Output format for the exported report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Text,
    Json,
}

/// Destination for an exported report.
#[async_trait]
pub trait ReportSink: Send + Sync {
    /// Write the full report text.
    async fn write_text(&self, text: &str) -> Result<(), RoundRobinError>;

    /// Sink name for logging.
    fn name(&self) -> &str;
}

/// Writes reports to standard output.
pub struct StdoutSink;

#[async_trait]
impl ReportSink for StdoutSink {
    async fn write_text(&self, text: &str) -> Result<(), RoundRobinError> {
        let mut stdout = tokio::io::stdout();
        stdout
            .write_all(text.as_bytes())
            .await
            .map_err(|e| RoundRobinError::Sink(e.to_string()))?;
        stdout
            .write_all(b"\n")
            .await
            .map_err(|e| RoundRobinError::Sink(e.to_string()))?;
        stdout
            .flush()
            .await
            .map_err(|e| RoundRobinError::Sink(e.to_string()))
    }

    fn name(&self) -> &str {
        "stdout"
    }
}

/// Pretty JSON of the combinations and summary.
pub fn to_json(round_robin: &RoundRobin) -> Result<String, RoundRobinError> {
    serde_json::to_string_pretty(round_robin).map_err(|e| RoundRobinError::Export(e.to_string()))
}

/// Render a report in the requested format.
pub fn render(round_robin: &RoundRobin, format: ExportFormat, currency: &str) -> AnyResult<String> {
    match format {
        ExportFormat::Text => Ok(text::render(round_robin, currency)),
        ExportFormat::Json => Ok(to_json(round_robin)?),
    }
}

/// Hand a report to a sink. Failures are logged, not returned; the
/// return value only says whether the write went through.
pub async fn copy_report(sink: &dyn ReportSink, text: &str) -> bool {
    match sink.write_text(text).await {
        Ok(()) => {
            debug!(sink = sink.name(), bytes = text.len(), "Report exported");
            true
        }
        Err(e) => {
            error!(sink = sink.name(), error = %e, "Failed to export report");
            false
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
