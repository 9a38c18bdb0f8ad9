//! `MatchReportObserver<W>` — bridges `MatchObserver` to a `ReportWriter`.

use arena_core::Round;
use arena_match::{MatchObserver, RoundStats};
use arena_world::Roster;

use crate::row::{RobotSnapshotRow, RoundSummaryRow};
use crate::writer::ReportWriter;
use crate::ReportError;

/// A [`MatchObserver`] that writes robot snapshots and round summaries to
/// any [`ReportWriter`] backend.
///
/// Errors from the writer are stored internally because `MatchObserver`
/// methods have no return value.  After `runner.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct MatchReportObserver<W: ReportWriter> {
    writer: W,
    last_error: Option<ReportError>,
}

impl<W: ReportWriter> MatchReportObserver<W> {
    /// Create an observer backed by `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `runner.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<ReportError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the match).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::ReportResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: ReportWriter> MatchObserver for MatchReportObserver<W> {
    fn on_round_end(&mut self, round: Round, stats: &RoundStats) {
        let row = RoundSummaryRow {
            round: round.0,
            spawns: stats.spawns,
            harvests: stats.harvests,
            moves: stats.moves,
            attacks: stats.attacks,
            idles: stats.idles,
            ignored: stats.ignored,
        };
        let result = self.writer.write_round_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, round: Round, roster: &Roster) {
        let rows: Vec<RobotSnapshotRow> = roster
            .robot_ids()
            .map(|robot| {
                let position = roster.position(robot);
                RobotSnapshotRow {
                    robot_id: robot.0,
                    round: round.0,
                    owner: roster.owner(robot).0,
                    x: position.x,
                    y: position.y,
                    energy: roster.energy(robot),
                }
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_match_end(&mut self, _final_round: Round) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
