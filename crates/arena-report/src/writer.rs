//! The `ReportWriter` trait implemented by all backend writers.

use crate::{ReportResult, RobotSnapshotRow, RoundSummaryRow};

/// Trait implemented by report backends (CSV today; the observer is agnostic
/// to the format).
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with
/// [`MatchReportObserver::take_error`][crate::MatchReportObserver::take_error].
pub trait ReportWriter {
    /// Write a batch of robot snapshots.
    fn write_snapshots(&mut self, rows: &[RobotSnapshotRow]) -> ReportResult<()>;

    /// Write one round summary row.
    fn write_round_summary(&mut self, row: &RoundSummaryRow) -> ReportResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> ReportResult<()>;
}
