//! Ordered collection of report rows.

use noisebench_core::RawResult;
use noisebench_engine::ScenarioOutcome;

use crate::derived::DerivedResult;
use crate::render::{Summary, Table};

/// One scenario's line in the report.
#[derive(Clone, Debug, PartialEq)]
pub enum ReportRow {
    /// The scenario was measured.
    Measured(DerivedResult),
    /// The scenario failed and has no numbers.
    Failed {
        /// Scenario label.
        label: String,
        /// Human-readable failure reason.
        reason: String,
    },
}

impl ReportRow {
    /// Scenario label.
    pub fn label(&self) -> &str {
        match self {
            Self::Measured(d) => &d.label,
            Self::Failed { label, .. } => label,
        }
    }
}

/// Report rows in declaration order, plus the batch size they share.
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    batch_size: u64,
    rows: Vec<ReportRow>,
}

impl Report {
    /// Empty report for workloads making `batch_size` primitive calls each.
    pub fn new(batch_size: u64) -> Self {
        Self {
            batch_size,
            rows: Vec::new(),
        }
    }

    /// Build a report from harness outcomes, keeping their order.
    pub fn from_outcomes<'a>(
        batch_size: u64,
        outcomes: impl IntoIterator<Item = &'a ScenarioOutcome>,
    ) -> Self {
        let mut report = Self::new(batch_size);
        for outcome in outcomes {
            match outcome {
                ScenarioOutcome::Measured(m) => report.push_measured(&m.raw),
                ScenarioOutcome::Failed { label, error } => {
                    report.push_failed(label.clone(), error.to_string())
                }
            }
        }
        tracing::debug!(rows = report.rows.len(), batch_size, "report assembled");
        report
    }

    /// Append the projection of `raw`.
    pub fn push_measured(&mut self, raw: &RawResult) {
        self.rows
            .push(ReportRow::Measured(DerivedResult::project(raw, self.batch_size)));
    }

    /// Append a failed scenario.
    pub fn push_failed(&mut self, label: impl Into<String>, reason: impl Into<String>) {
        self.rows.push(ReportRow::Failed {
            label: label.into(),
            reason: reason.into(),
        });
    }

    /// Primitive calls per workload invocation.
    pub fn batch_size(&self) -> u64 {
        self.batch_size
    }

    /// Rows in declaration order.
    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    /// `true` if any scenario failed.
    pub fn has_failures(&self) -> bool {
        self.rows
            .iter()
            .any(|r| matches!(r, ReportRow::Failed { .. }))
    }

    /// Per-scenario paragraphs under a `Results:` heading.
    pub fn summary(&self) -> Summary<'_> {
        Summary::new(self)
    }

    /// Pipe-delimited table, one row per scenario.
    pub fn table(&self) -> Table<'_> {
        Table::new(self)
    }

    /// [`summary`](Self::summary) as a `String`.
    pub fn render_summary(&self) -> String {
        self.summary().to_string()
    }

    /// [`table`](Self::table) as a `String`.
    pub fn render_table(&self) -> String {
        self.table().to_string()
    }
}
