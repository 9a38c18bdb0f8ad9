//! Fluent builder for constructing a [`MatchRunner`].

use arena_core::{MatchConfig, OwnerId, Position, Round};
use arena_strategy::Strategy;
use arena_world::{GameMap, Roster};

use crate::{MatchError, MatchResult, MatchRunner};

/// Fluent builder for [`MatchRunner`].
///
/// # Required inputs
///
/// - [`MatchConfig`] — rounds, seed, energy rules
/// - [`GameMap`] — the arena (typically from `GameMap::generate`)
/// - one [`Strategy`] per competitor, via [`strategy`][Self::strategy]
/// - at least the starting robots, via [`robot`][Self::robot]
///
/// # Example
///
/// ```rust,ignore
/// let mut runner = MatchBuilder::new(config, map)
///     .strategy(red, HarvesterStrategy::new())
///     .strategy(blue, HarvesterStrategy::new())
///     .robot(red, Position::new(1, 1), 300)
///     .robot(blue, Position::new(38, 38), 300)
///     .build()?;
/// ```
pub struct MatchBuilder {
    config: MatchConfig,
    map: GameMap,
    roster: Roster,
    strategies: Vec<(OwnerId, Box<dyn Strategy>)>,
}

impl MatchBuilder {
    /// Create a builder for a match on `map` governed by `config`.
    pub fn new(config: MatchConfig, map: GameMap) -> Self {
        Self {
            config,
            map,
            roster: Roster::new(),
            strategies: Vec::new(),
        }
    }

    /// Register `owner`'s decision engine.  Each competitor gets exactly one.
    pub fn strategy(mut self, owner: OwnerId, strategy: impl Strategy + 'static) -> Self {
        self.strategies.push((owner, Box::new(strategy)));
        self
    }

    /// Add a starting robot for `owner`.
    pub fn robot(mut self, owner: OwnerId, position: Position, energy: u32) -> Self {
        self.roster.spawn(owner, position, energy);
        self
    }

    /// Validate inputs and return a ready-to-run [`MatchRunner`].
    pub fn build(self) -> MatchResult<MatchRunner> {
        if self.config.attack_levy_divisor == 0 {
            return Err(MatchError::Config(
                "attack_levy_divisor must be non-zero".into(),
            ));
        }

        // ── One strategy per owner, no repeats ────────────────────────────
        for (i, (owner, _)) in self.strategies.iter().enumerate() {
            if self.strategies[..i].iter().any(|(o, _)| o == owner) {
                return Err(MatchError::DuplicateStrategy(*owner));
            }
        }

        // ── Every robot is in bounds and has a brain ──────────────────────
        for robot in self.roster.robot_ids() {
            let position = self.roster.position(robot);
            if !self.map.contains(position) {
                return Err(MatchError::RobotOutOfBounds { robot, position });
            }
            let owner = self.roster.owner(robot);
            if !self.strategies.iter().any(|(o, _)| *o == owner) {
                return Err(MatchError::MissingStrategy(owner));
            }
        }

        Ok(MatchRunner {
            config: self.config,
            map: self.map,
            roster: self.roster,
            strategies: self.strategies,
            round: Round::ZERO,
        })
    }
}
