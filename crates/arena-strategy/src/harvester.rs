//! The harvester decision engine — clone early, harvest greedily, raid when
//! profitable.

use arena_core::{Round, RobotId};

use crate::target::{Occupancy, first_fallback, nearest_unclaimed, occupancy_at};
use crate::{Action, ReservationSet, Strategy, TurnContext};

/// Cloning is allowed only while the round counter is below this.
const CLONE_ROUND_CUTOFF: u32 = 37;

/// A robot must hold strictly more than this to clone.
const CLONE_ENERGY_FLOOR: u32 = 340;

/// Hard cap on one fleet's size.
const FLEET_CAP: usize = 60;

/// A clone is only worthwhile if some non-friendly station lies within this
/// radius of the parent.
const CLONE_SEARCH_RADIUS: u32 = 180;

/// Flat energy surcharge an attack costs on top of the move.
const ATTACK_OVERHEAD: u32 = 50;

/// An attack must net strictly more than this to be worth committing to.
const ATTACK_GAIN_FLOOR: u32 = 50;

/// Levy divisor: an attack takes `victim_energy / 20` (5 %, floored).
const ENEMY_LEVY_DIVISOR: u32 = 20;

/// The standard fleet brain: a fixed-priority decision tree over cloning,
/// harvesting, raiding, and routing, with per-round station reservations to
/// keep the fleet spread across resources.
///
/// One instance per competitor.  Holds exactly two pieces of cross-call
/// state: the round counter (incremented on every round-start signal, never
/// reset) and the [`ReservationSet`] (bulk-cleared on every round-start
/// signal).
#[derive(Debug, Default)]
pub struct HarvesterStrategy {
    round: Round,
    reservations: ReservationSet,
}

impl HarvesterStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current round as this engine has counted it.
    #[inline]
    pub fn round(&self) -> Round {
        self.round
    }

    /// This round's station claims (read-only; for inspection and tests).
    #[inline]
    pub fn reservations(&self) -> &ReservationSet {
        &self.reservations
    }

    /// The cloning gate: early game, a fat energy reserve, headroom under
    /// both the fleet cap and the station count, and at least one
    /// non-friendly station in reach.
    fn should_clone(&self, robot: RobotId, ctx: &TurnContext<'_>) -> bool {
        if self.round.0 >= CLONE_ROUND_CUTOFF {
            return false;
        }
        if ctx.roster.energy(robot) <= CLONE_ENERGY_FLOOR {
            return false;
        }
        let fleet = ctx.roster.owned_count(ctx.roster.owner(robot));
        if fleet >= FLEET_CAP || fleet >= ctx.map.station_count() {
            return false;
        }
        self.reachable_station_exists(robot, ctx)
    }

    /// `true` if some station within [`CLONE_SEARCH_RADIUS`] is not already
    /// held by a teammate — i.e. a clone would have somewhere to go.
    fn reachable_station_exists(&self, robot: RobotId, ctx: &TurnContext<'_>) -> bool {
        let origin = ctx.roster.position(robot);
        let owner = ctx.roster.owner(robot);
        ctx.map.stations().iter().any(|station| {
            origin.distance(station.position) <= CLONE_SEARCH_RADIUS
                && occupancy_at(station.position, owner, ctx.roster) != Occupancy::FriendlyHeld
        })
    }
}

impl Strategy for HarvesterStrategy {
    fn on_round_start(&mut self) {
        self.round = self.round.next();
        self.reservations.clear();
    }

    fn decide(&mut self, robot: RobotId, ctx: &TurnContext<'_>) -> Action {
        let position = ctx.roster.position(robot);
        let energy = ctx.roster.energy(robot);

        if self.should_clone(robot, ctx) {
            return Action::Spawn;
        }

        if ctx.map.has_station_at(position) {
            return Action::Harvest;
        }

        let Some(target) = nearest_unclaimed(robot, ctx, &self.reservations) else {
            return Action::Idle;
        };

        match target.occupancy {
            // Raid if the numbers work; otherwise close the distance one
            // step per round until they do.
            Occupancy::EnemyHeld(enemy) => {
                let attack_cost = target.distance + ATTACK_OVERHEAD;
                let attack_gain = ctx.roster.energy(enemy) / ENEMY_LEVY_DIVISOR;
                if energy >= attack_cost && attack_gain > ATTACK_GAIN_FLOOR {
                    self.reservations.claim(target.position);
                    Action::Move { to: target.position }
                } else {
                    Action::Move { to: position.step_toward(target.position) }
                }
            }

            // A teammate already sits there: redirect to the first station
            // nobody on this fleet holds or has claimed.
            Occupancy::FriendlyHeld => match first_fallback(ctx.roster.owner(robot), ctx, &self.reservations) {
                Some(fallback) => {
                    self.reservations.claim(fallback);
                    Action::Move { to: fallback }
                }
                None => Action::Idle,
            },

            Occupancy::Free => {
                if energy >= target.distance {
                    self.reservations.claim(target.position);
                    Action::Move { to: target.position }
                } else {
                    Action::Move { to: position.step_toward(target.position) }
                }
            }
        }
    }
}
