//! Text rendering of a [`Report`].
//!
//! Both forms implement [`fmt::Display`], so callers can stream them to
//! stdout or collect them with `to_string()`.

use std::fmt;
use std::time::Duration;

use crate::format::{fixed2, group_thousands, NOT_AVAILABLE};
use crate::report::{Report, ReportRow};

const RULE_WIDTH: usize = 70;

const TABLE_HEADER: &str = "| Scenario | iterations/s | noise calls/s | avg per batch |";
const TABLE_SEPARATOR: &str = "|----------|-------------|---------------|---------------|";

/// Run header printed before any scenario is measured.
///
/// ```text
/// noisebench: simplex noise (512 calls per iteration)
///
/// Duration: 10s per scenario
/// Warmup:   1000 iterations
/// ```
pub fn render_preamble(batch_size: u64, duration: Duration, warmup_iterations: u64) -> String {
    format!(
        "noisebench: simplex noise ({batch_size} calls per iteration)\n\n\
         Duration: {}s per scenario\n\
         Warmup:   {warmup_iterations} iterations\n",
        duration.as_secs_f64()
    )
}

/// Human-readable per-scenario paragraphs.
#[derive(Clone, Copy, Debug)]
pub struct Summary<'a> {
    report: &'a Report,
}

impl<'a> Summary<'a> {
    pub(crate) fn new(report: &'a Report) -> Self {
        Self { report }
    }
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Results:")?;
        writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;
        let batch = self.report.batch_size();
        for row in self.report.rows() {
            match row {
                ReportRow::Measured(d) => {
                    writeln!(f, "{}", d.label)?;
                    writeln!(
                        f,
                        "  {} iterations/s ({} noise calls/s)",
                        group_thousands(d.iterations_per_sec),
                        group_thousands(d.primitive_calls_per_sec)
                    )?;
                    writeln!(
                        f,
                        "  avg {} μs per {batch}-call batch",
                        fixed2(d.avg_micros_per_iteration)
                    )?;
                }
                ReportRow::Failed { label, reason } => {
                    writeln!(f, "{label}")?;
                    writeln!(f, "  {NOT_AVAILABLE} ({reason})")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Pipe-delimited table suitable for pasting into Markdown.
#[derive(Clone, Copy, Debug)]
pub struct Table<'a> {
    report: &'a Report,
}

impl<'a> Table<'a> {
    pub(crate) fn new(report: &'a Report) -> Self {
        Self { report }
    }
}

impl fmt::Display for Table<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{TABLE_HEADER}")?;
        writeln!(f, "{TABLE_SEPARATOR}")?;
        for row in self.report.rows() {
            match row {
                ReportRow::Measured(d) => writeln!(
                    f,
                    "| {} | {} | {} | {} μs |",
                    d.label,
                    group_thousands(d.iterations_per_sec),
                    group_thousands(d.primitive_calls_per_sec),
                    fixed2(d.avg_micros_per_iteration)
                )?,
                ReportRow::Failed { label, .. } => writeln!(
                    f,
                    "| {label} | {NOT_AVAILABLE} | {NOT_AVAILABLE} | {NOT_AVAILABLE} |"
                )?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noisebench_core::RawResult;

    fn sample() -> Report {
        let mut r = Report::new(512);
        r.push_measured(&RawResult::new("noise2D (512 calls)", 1000, 500.0).unwrap());
        r.push_failed("noise3D (512 calls)", "workload failed: boom");
        r.push_measured(&RawResult::new("noise4D (512 calls)", 3, 1.5).unwrap());
        r
    }

    #[test]
    fn summary_layout() {
        let text = sample().render_summary();
        let expected = format!(
            "Results:\n{}\n\
             noise2D (512 calls)\n\
             \x20 2,000 iterations/s (1,024,000 noise calls/s)\n\
             \x20 avg 500.00 μs per 512-call batch\n\
             \n\
             noise3D (512 calls)\n\
             \x20 N/A (workload failed: boom)\n\
             \n\
             noise4D (512 calls)\n\
             \x20 2,000 iterations/s (1,024,000 noise calls/s)\n\
             \x20 avg 500.00 μs per 512-call batch\n\
             \n",
            "-".repeat(70)
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn table_layout() {
        let text = sample().render_table();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            [
                TABLE_HEADER,
                TABLE_SEPARATOR,
                "| noise2D (512 calls) | 2,000 | 1,024,000 | 500.00 μs |",
                "| noise3D (512 calls) | N/A | N/A | N/A |",
                "| noise4D (512 calls) | 2,000 | 1,024,000 | 500.00 μs |",
            ]
        );
    }

    #[test]
    fn empty_report_renders_headers_only() {
        let r = Report::new(512);
        assert_eq!(r.render_table().lines().count(), 2);
        assert_eq!(r.render_summary().lines().count(), 2);
    }

    #[test]
    fn preamble_reports_configuration() {
        let text = render_preamble(512, Duration::from_secs(10), 1000);
        assert_eq!(
            text,
            "noisebench: simplex noise (512 calls per iteration)\n\n\
             Duration: 10s per scenario\n\
             Warmup:   1000 iterations\n"
        );
        let short = render_preamble(27, Duration::from_millis(250), 0);
        assert!(short.contains("Duration: 0.25s per scenario"));
        assert!(short.contains("(27 calls per iteration)"));
    }
}
