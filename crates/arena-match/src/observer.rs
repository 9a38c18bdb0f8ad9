//! Match observer trait for progress reporting and data collection.

use arena_core::Round;
use arena_world::Roster;

use crate::runner::RoundStats;

/// Callbacks invoked by [`MatchRunner::run`][crate::MatchRunner::run] at key
/// points in the round loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl MatchObserver for ProgressPrinter {
///     fn on_round_end(&mut self, round: Round, stats: &RoundStats) {
///         println!("{round}: {} actions", stats.decided());
///     }
/// }
/// ```
pub trait MatchObserver {
    /// Called at the very start of each round, before any decision.
    fn on_round_start(&mut self, _round: Round) {}

    /// Called at the end of each round with that round's action tallies.
    fn on_round_end(&mut self, _round: Round, _stats: &RoundStats) {}

    /// Called at snapshot intervals (every `config.report_interval_rounds`
    /// rounds).  Provides read-only access to the full roster so writers can
    /// record state without the runner knowing about any output format.
    fn on_snapshot(&mut self, _round: Round, _roster: &Roster) {}

    /// Called once after the final round completes.
    fn on_match_end(&mut self, _final_round: Round) {}
}

/// A [`MatchObserver`] that does nothing.  Use when you need to call `run`
/// but don't want progress callbacks.
pub struct NoopObserver;

impl MatchObserver for NoopObserver {}
