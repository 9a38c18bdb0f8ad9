//! Station selection scans: nearest unclaimed target and fallback search.

use arena_core::{OwnerId, Position, RobotId};
use arena_world::Roster;

use crate::{ReservationSet, TurnContext};

/// Who is standing on a station cell.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Occupancy {
    /// No robot on the cell.
    Free,
    /// A robot of the same fleet as the mover.
    FriendlyHeld,
    /// A rival robot — carries a handle for combat cost/benefit analysis.
    EnemyHeld(RobotId),
}

/// The outcome of a target scan: the chosen station, the move cost to it,
/// and who (if anyone) holds it.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Target {
    pub position: Position,
    pub distance: u32,
    pub occupancy: Occupancy,
}

/// Classify who holds `position` from `owner`'s point of view.
///
/// The occupant is the first robot in roster order at the cell; any later
/// co-located robots are invisible to classification.
pub fn occupancy_at(position: Position, owner: OwnerId, roster: &Roster) -> Occupancy {
    match roster.robot_at(position) {
        None => Occupancy::Free,
        Some(occupant) if roster.owner(occupant) == owner => Occupancy::FriendlyHeld,
        Some(occupant) => Occupancy::EnemyHeld(occupant),
    }
}

/// Scan the station registry for the nearest station not yet claimed this
/// round.
///
/// The scan keeps exactly one running best and replaces it only on a
/// *strictly* smaller distance — at equal distances the earlier station in
/// registry order wins, regardless of what occupies either candidate.  The
/// occupancy attached to the final incumbent is authoritative; there is no
/// "prefer free over enemy" priority beyond the distance comparison.
///
/// Returns `None` when every station is claimed (or the map has none).
pub fn nearest_unclaimed(
    robot: RobotId,
    ctx: &TurnContext<'_>,
    reservations: &ReservationSet,
) -> Option<Target> {
    let origin = ctx.roster.position(robot);
    let owner = ctx.roster.owner(robot);

    let mut best: Option<Target> = None;
    for station in ctx.map.stations() {
        if reservations.is_claimed(station.position) {
            continue;
        }
        let distance = origin.distance(station.position);
        if best.is_none_or(|b| distance < b.distance) {
            best = Some(Target {
                position: station.position,
                distance,
                occupancy: occupancy_at(station.position, owner, ctx.roster),
            });
        }
    }
    best
}

/// Find a fallback station when the nearest pick is held by a teammate: the
/// first station in registry order that is neither claimed this round nor
/// friendly-held.
///
/// Registry order, not distance, decides here — a rival-held station is an
/// acceptable fallback, a teammate's is not.
pub fn first_fallback(
    owner: OwnerId,
    ctx: &TurnContext<'_>,
    reservations: &ReservationSet,
) -> Option<Position> {
    ctx.map
        .stations()
        .iter()
        .map(|station| station.position)
        .find(|&position| {
            !reservations.is_claimed(position)
                && occupancy_at(position, owner, ctx.roster) != Occupancy::FriendlyHeld
        })
}
