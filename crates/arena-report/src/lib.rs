//! `arena-report` — match output writers for the rust_arena framework.
//!
//! The CSV backend creates two files in the configured output directory:
//!
//! | File                  | One row per                                |
//! |-----------------------|--------------------------------------------|
//! | `round_summaries.csv` | round — action tallies                     |
//! | `robot_snapshots.csv` | robot × snapshot round — position + energy |
//!
//! Writers implement [`ReportWriter`] and are driven by
//! [`MatchReportObserver`], which implements `arena_match::MatchObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use arena_report::{CsvReporter, MatchReportObserver};
//!
//! let writer = CsvReporter::new(Path::new("./output"))?;
//! let mut obs = MatchReportObserver::new(writer);
//! runner.run(&mut obs);
//! obs.take_error().map(|e| eprintln!("report error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvReporter;
pub use error::{ReportError, ReportResult};
pub use observer::MatchReportObserver;
pub use row::{RobotSnapshotRow, RoundSummaryRow};
pub use writer::ReportWriter;
