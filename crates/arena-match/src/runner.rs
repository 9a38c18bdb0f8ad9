//! The `MatchRunner` struct and its round loop.

use arena_core::{MatchConfig, OwnerId, Position, RobotId, Round};
use arena_strategy::{Action, Strategy, TurnContext};
use arena_world::{GameMap, Roster};

use crate::MatchObserver;

// ── RoundStats ────────────────────────────────────────────────────────────────

/// Tallies of what one round's decisions resolved to.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RoundStats {
    pub spawns: u32,
    pub harvests: u32,
    pub moves: u32,
    /// Moves that landed on a rival robot and were resolved as combat.
    pub attacks: u32,
    pub idles: u32,
    /// Actions the host refused: unaffordable moves or spawns, harvests off
    /// a station, destinations outside the arena.
    pub ignored: u32,
}

impl RoundStats {
    /// Total decisions taken this round.
    #[inline]
    pub fn decided(&self) -> u32 {
        self.spawns + self.harvests + self.moves + self.attacks + self.idles + self.ignored
    }
}

// ── OwnerStanding ─────────────────────────────────────────────────────────────

/// One competitor's aggregate position in the match.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OwnerStanding {
    pub owner: OwnerId,
    pub robots: usize,
    pub energy: u32,
}

// ── MatchRunner ───────────────────────────────────────────────────────────────

/// The match host: owns the map, the roster, one strategy per competitor,
/// and the authoritative round counter.
///
/// Per round it signals every strategy's `on_round_start` exactly once, then
/// walks the roster in ascending `RobotId` order, asking each robot's owner's
/// strategy for one action and applying it immediately.  Robots spawned
/// mid-round join the roster at once but take their first turn next round.
///
/// Create via [`MatchBuilder`][crate::MatchBuilder].
pub struct MatchRunner {
    /// Global configuration (rounds, seed, energy rules).
    pub config: MatchConfig,

    /// The arena.  Immutable for the life of the match.
    pub map: GameMap,

    /// All robots across all competitors.  Mutated only by action
    /// application, between decisions.
    pub roster: Roster,

    pub(crate) strategies: Vec<(OwnerId, Box<dyn Strategy>)>,
    pub(crate) round: Round,
}

impl std::fmt::Debug for MatchRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchRunner")
            .field("config", &self.config)
            .field("map", &self.map)
            .field("roster", &self.roster)
            .field("strategies", &self.strategies.len())
            .field("round", &self.round)
            .finish()
    }
}

impl MatchRunner {
    // ── Public API ────────────────────────────────────────────────────────

    /// The last completed round (`Round::ZERO` before the first).
    #[inline]
    pub fn round(&self) -> Round {
        self.round
    }

    /// Play from the current round to `config.rounds_total`, invoking
    /// observer hooks at every round boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: MatchObserver>(&mut self, observer: &mut O) {
        while self.round < self.config.end_round() {
            self.step(observer);
        }
        observer.on_match_end(self.round);
    }

    /// Play exactly `n` rounds from the current position (ignores
    /// `rounds_total`).  Useful for tests and incremental stepping.
    pub fn run_rounds<O: MatchObserver>(&mut self, n: u32, observer: &mut O) {
        for _ in 0..n {
            self.step(observer);
        }
    }

    /// Aggregate robots and energy per competitor, best energy first.
    pub fn standings(&self) -> Vec<OwnerStanding> {
        let mut standings: Vec<OwnerStanding> = Vec::new();
        for robot in self.roster.robot_ids() {
            let owner = self.roster.owner(robot);
            match standings.iter_mut().find(|s| s.owner == owner) {
                Some(entry) => {
                    entry.robots += 1;
                    entry.energy += self.roster.energy(robot);
                }
                None => standings.push(OwnerStanding {
                    owner,
                    robots: 1,
                    energy: self.roster.energy(robot),
                }),
            }
        }
        standings.sort_by(|a, b| b.energy.cmp(&a.energy));
        standings
    }

    // ── Core round processing ─────────────────────────────────────────────

    fn step<O: MatchObserver>(&mut self, observer: &mut O) {
        let round = self.round.next();
        observer.on_round_start(round);
        let stats = self.process_round();
        observer.on_round_end(round, &stats);
        if self.config.report_interval_rounds > 0
            && round.0.is_multiple_of(self.config.report_interval_rounds)
        {
            observer.on_snapshot(round, &self.roster);
        }
        self.round = round;
    }

    fn process_round(&mut self) -> RoundStats {
        // ── Phase 1: round-start signal, once per strategy ────────────────
        for (_, strategy) in &mut self.strategies {
            strategy.on_round_start();
        }

        // ── Phase 2: decide + apply, ascending RobotId ────────────────────
        //
        // The roster length is snapshotted first: robots spawned during the
        // round are not decided until the next one.
        let mut stats = RoundStats::default();
        let live = self.roster.len() as u32;
        for i in 0..live {
            let robot = RobotId(i);
            let owner = self.roster.owner(robot);

            // Explicit field borrows so the strategy's &mut doesn't conflict
            // with the read-only context.
            let map = &self.map;
            let roster = &self.roster;
            let action = match self.strategies.iter_mut().find(|(o, _)| *o == owner) {
                Some((_, strategy)) => {
                    let ctx = TurnContext::new(map, roster);
                    strategy.decide(robot, &ctx)
                }
                // Unreachable after builder validation; an ownerless robot
                // simply sits out.
                None => Action::Idle,
            };

            self.apply(robot, action, &mut stats);
        }
        stats
    }

    // ── Action application ────────────────────────────────────────────────

    fn apply(&mut self, robot: RobotId, action: Action, stats: &mut RoundStats) {
        match action {
            Action::Idle => stats.idles += 1,

            Action::Harvest => {
                if self.map.has_station_at(self.roster.position(robot)) {
                    self.roster.credit(robot, self.config.harvest_yield);
                    stats.harvests += 1;
                } else {
                    stats.ignored += 1;
                }
            }

            Action::Move { to } => self.apply_move(robot, to, stats),

            Action::Spawn => self.apply_spawn(robot, stats),
        }
    }

    /// Pay the distance, relocate, and resolve combat when the destination
    /// holds a rival.
    fn apply_move(&mut self, robot: RobotId, to: Position, stats: &mut RoundStats) {
        let origin = self.roster.position(robot);
        let cost = origin.distance(to);
        if !self.map.contains(to) || self.roster.energy(robot) < cost {
            stats.ignored += 1;
            return;
        }

        // Look the defender up before relocating so the mover never counts
        // as its own victim.
        let defender = self
            .roster
            .robot_at(to)
            .filter(|&d| d != robot && self.roster.owner(d) != self.roster.owner(robot));

        self.roster.debit(robot, cost);
        self.roster.set_position(robot, to);

        match defender {
            Some(victim) => {
                self.roster.debit(robot, self.config.attack_overhead);
                let levy = self.roster.energy(victim) / self.config.attack_levy_divisor;
                self.roster.debit(victim, levy);
                self.roster.credit(robot, levy);

                // The loser is pushed one cell further along the attack
                // direction, clamped to the arena.
                let pushed = Position::new(
                    to.x + (to.x - origin.x).signum(),
                    to.y + (to.y - origin.y).signum(),
                );
                self.roster.set_position(victim, self.map.clamp(pushed));
                stats.attacks += 1;
            }
            None => stats.moves += 1,
        }
    }

    /// Pay the clone cost and place the child on the first free neighboring
    /// cell (parent's own cell as a last resort).
    fn apply_spawn(&mut self, robot: RobotId, stats: &mut RoundStats) {
        if self.roster.energy(robot) < self.config.spawn_cost {
            stats.ignored += 1;
            return;
        }
        self.roster.debit(robot, self.config.spawn_cost);

        let parent_at = self.roster.position(robot);
        let owner = self.roster.owner(robot);
        let spot = self.free_neighbor(parent_at).unwrap_or(parent_at);
        self.roster.spawn(owner, spot, self.config.spawn_energy);
        stats.spawns += 1;
    }

    /// First unoccupied in-bounds cell of the 8-neighborhood, scanned in
    /// fixed row-major order for determinism.
    fn free_neighbor(&self, around: Position) -> Option<Position> {
        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let candidate = Position::new(around.x + dx, around.y + dy);
                if self.map.contains(candidate) && self.roster.robot_at(candidate).is_none() {
                    return Some(candidate);
                }
            }
        }
        None
    }
}
