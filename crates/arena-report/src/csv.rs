//! CSV report backend.
//!
//! Creates two files in the configured output directory:
//! - `robot_snapshots.csv`
//! - `round_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::ReportWriter;
use crate::{ReportResult, RobotSnapshotRow, RoundSummaryRow};

/// Writes match reports to two CSV files.
pub struct CsvReporter {
    snapshots: Writer<File>,
    summaries: Writer<File>,
    finished: bool,
}

impl CsvReporter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> ReportResult<Self> {
        let mut snapshots = Writer::from_path(dir.join("robot_snapshots.csv"))?;
        snapshots.write_record(["robot_id", "round", "owner", "x", "y", "energy"])?;

        let mut summaries = Writer::from_path(dir.join("round_summaries.csv"))?;
        summaries.write_record([
            "round", "spawns", "harvests", "moves", "attacks", "idles", "ignored",
        ])?;

        Ok(Self {
            snapshots,
            summaries,
            finished: false,
        })
    }
}

impl ReportWriter for CsvReporter {
    fn write_snapshots(&mut self, rows: &[RobotSnapshotRow]) -> ReportResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.robot_id.to_string(),
                row.round.to_string(),
                row.owner.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.energy.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_round_summary(&mut self, row: &RoundSummaryRow) -> ReportResult<()> {
        self.summaries.write_record(&[
            row.round.to_string(),
            row.spawns.to_string(),
            row.harvests.to_string(),
            row.moves.to_string(),
            row.attacks.to_string(),
            row.idles.to_string(),
            row.ignored.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> ReportResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
