//! Unit tests for arena-strategy.

use arena_core::{OwnerId, Position, RobotId};
use arena_world::{GameMap, Roster};

use crate::{
    Action, HarvesterStrategy, IdleStrategy, Occupancy, ReservationSet, Strategy, TurnContext,
    nearest_unclaimed, occupancy_at,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

const US: OwnerId = OwnerId(0);
const THEM: OwnerId = OwnerId(1);

fn pos(x: i32, y: i32) -> Position {
    Position::new(x, y)
}

fn make_map(stations: &[(i32, i32)]) -> GameMap {
    let positions = stations.iter().map(|&(x, y)| pos(x, y)).collect();
    GameMap::new(300, 300, positions).expect("valid test map")
}

/// Deliver `n` round-start signals, as the host would before round `n`'s
/// decisions.
fn advance(strategy: &mut HarvesterStrategy, n: u32) {
    for _ in 0..n {
        strategy.on_round_start();
    }
}

// ── Action ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod action_tests {
    use super::*;

    #[test]
    fn destination_of_move() {
        assert_eq!(Action::Move { to: pos(3, 4) }.destination(), Some(pos(3, 4)));
        assert_eq!(Action::Harvest.destination(), None);
        assert_eq!(Action::Spawn.destination(), None);
        assert_eq!(Action::Idle.destination(), None);
    }
}

// ── TurnContext ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod context_tests {
    use super::*;

    #[test]
    fn fields_accessible() {
        let map = make_map(&[(1, 1)]);
        let mut roster = Roster::new();
        roster.spawn(US, pos(0, 0), 10);
        let ctx = TurnContext::new(&map, &roster);
        assert_eq!(ctx.map.station_count(), 1);
        assert_eq!(ctx.roster.len(), 1);
    }
}

// ── IdleStrategy ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod idle_tests {
    use super::*;

    #[test]
    fn never_acts() {
        let map = make_map(&[(1, 1)]);
        let mut roster = Roster::new();
        let r = roster.spawn(US, pos(1, 1), 1_000);
        let ctx = TurnContext::new(&map, &roster);
        assert_eq!(IdleStrategy.decide(r, &ctx), Action::Idle);
    }
}

// ── ReservationSet ────────────────────────────────────────────────────────────

#[cfg(test)]
mod reservation_tests {
    use super::*;

    #[test]
    fn claim_and_lookup() {
        let mut set = ReservationSet::new();
        assert!(!set.is_claimed(pos(1, 1)));
        set.claim(pos(1, 1));
        assert!(set.is_claimed(pos(1, 1)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn claim_is_idempotent() {
        let mut set = ReservationSet::new();
        set.claim(pos(2, 2));
        set.claim(pos(2, 2));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn clear_empties_regardless_of_contents() {
        let mut set = ReservationSet::new();
        for i in 0..5 {
            set.claim(pos(i, 0));
        }
        set.clear();
        assert!(set.is_empty());
        // Clearing an already-empty set stays empty.
        set.clear();
        assert!(set.is_empty());
    }
}

// ── Target selection ──────────────────────────────────────────────────────────

#[cfg(test)]
mod selector_tests {
    use super::*;

    #[test]
    fn classifies_occupancy() {
        let mut roster = Roster::new();
        roster.spawn(US, pos(10, 10), 100);
        roster.spawn(US, pos(2, 0), 100);
        let enemy = roster.spawn(THEM, pos(3, 0), 100);

        assert_eq!(occupancy_at(pos(1, 0), US, &roster), Occupancy::Free);
        assert_eq!(occupancy_at(pos(2, 0), US, &roster), Occupancy::FriendlyHeld);
        assert_eq!(occupancy_at(pos(3, 0), US, &roster), Occupancy::EnemyHeld(enemy));
    }

    #[test]
    fn picks_nearest_station() {
        let map = make_map(&[(20, 0), (5, 0), (9, 0)]);
        let mut roster = Roster::new();
        let r = roster.spawn(US, pos(0, 0), 100);
        let ctx = TurnContext::new(&map, &roster);

        let target = nearest_unclaimed(r, &ctx, &ReservationSet::new()).unwrap();
        assert_eq!(target.position, pos(5, 0));
        assert_eq!(target.distance, 5);
        assert_eq!(target.occupancy, Occupancy::Free);
    }

    #[test]
    fn skips_reserved_stations() {
        // Scenario E: the nearest station is already claimed this round.
        let map = make_map(&[(5, 0), (9, 0)]);
        let mut roster = Roster::new();
        let r = roster.spawn(US, pos(0, 0), 100);
        let ctx = TurnContext::new(&map, &roster);

        let mut reservations = ReservationSet::new();
        reservations.claim(pos(5, 0));
        let target = nearest_unclaimed(r, &ctx, &reservations).unwrap();
        assert_eq!(target.position, pos(9, 0));
    }

    #[test]
    fn none_when_everything_is_reserved() {
        let map = make_map(&[(5, 0)]);
        let mut roster = Roster::new();
        let r = roster.spawn(US, pos(0, 0), 100);
        let ctx = TurnContext::new(&map, &roster);

        let mut reservations = ReservationSet::new();
        reservations.claim(pos(5, 0));
        assert!(nearest_unclaimed(r, &ctx, &reservations).is_none());
    }

    #[test]
    fn equal_distance_keeps_first_in_registry_order() {
        // Registry order, not occupancy, breaks distance ties: the earlier
        // enemy-held station beats the later free one at the same distance.
        let map = make_map(&[(4, 0), (0, 4)]);
        let mut roster = Roster::new();
        let r = roster.spawn(US, pos(0, 0), 100);
        let enemy = roster.spawn(THEM, pos(4, 0), 100);
        let ctx = TurnContext::new(&map, &roster);

        let target = nearest_unclaimed(r, &ctx, &ReservationSet::new()).unwrap();
        assert_eq!(target.position, pos(4, 0));
        assert_eq!(target.occupancy, Occupancy::EnemyHeld(enemy));
    }

    #[test]
    fn friendly_station_can_win_the_scan() {
        // Strict-improvement scanning has no occupancy filter: a nearer
        // teammate-held station beats a farther free one.
        let map = make_map(&[(50, 50), (1, 0)]);
        let mut roster = Roster::new();
        let r = roster.spawn(US, pos(0, 0), 100);
        roster.spawn(US, pos(1, 0), 100);
        let ctx = TurnContext::new(&map, &roster);

        let target = nearest_unclaimed(r, &ctx, &ReservationSet::new()).unwrap();
        assert_eq!(target.position, pos(1, 0));
        assert_eq!(target.occupancy, Occupancy::FriendlyHeld);
    }
}

// ── HarvesterStrategy ─────────────────────────────────────────────────────────

#[cfg(test)]
mod harvester_tests {
    use super::*;

    #[test]
    fn round_counter_tracks_signals() {
        let mut s = HarvesterStrategy::new();
        assert_eq!(s.round().0, 0);
        advance(&mut s, 3);
        assert_eq!(s.round().0, 3);
    }

    #[test]
    fn round_start_clears_reservations_every_time() {
        let map = make_map(&[(5, 0), (9, 0)]);
        let mut roster = Roster::new();
        let r = roster.spawn(US, pos(0, 0), 100);
        let ctx = TurnContext::new(&map, &roster);

        let mut s = HarvesterStrategy::new();
        for _ in 0..4 {
            s.on_round_start();
            assert!(s.reservations().is_empty());
            let action = s.decide(r, &ctx);
            assert_eq!(action, Action::Move { to: pos(5, 0) });
            assert!(s.reservations().is_claimed(pos(5, 0)));
        }
    }

    #[test]
    fn scenario_a_spawns_in_the_early_game() {
        // Energy 400, round 10, fleet of 1, 10 stations, nearest within 180.
        let stations: Vec<(i32, i32)> = (0..10).map(|i| (5 + i * 7, 0)).collect();
        let map = make_map(&stations);
        let mut roster = Roster::new();
        let r = roster.spawn(US, pos(0, 0), 400);
        let ctx = TurnContext::new(&map, &roster);

        let mut s = HarvesterStrategy::new();
        advance(&mut s, 10);
        assert_eq!(s.decide(r, &ctx), Action::Spawn);
    }

    #[test]
    fn scenario_b_harvests_on_station_regardless_of_state() {
        let map = make_map(&[(5, 5)]);
        let mut roster = Roster::new();
        let r = roster.spawn(US, pos(5, 5), 0);
        let ctx = TurnContext::new(&map, &roster);

        let mut s = HarvesterStrategy::new();
        advance(&mut s, 50);
        assert_eq!(s.decide(r, &ctx), Action::Harvest);
    }

    #[test]
    fn scenario_c_attacks_when_profitable() {
        // d=10, enemy energy 2000: cost 60 ≤ 100, gain 100 > 50 → raid.
        let map = make_map(&[(10, 0)]);
        let mut roster = Roster::new();
        let r = roster.spawn(US, pos(0, 0), 100);
        roster.spawn(THEM, pos(10, 0), 2_000);
        let ctx = TurnContext::new(&map, &roster);

        let mut s = HarvesterStrategy::new();
        advance(&mut s, 1);
        assert_eq!(s.decide(r, &ctx), Action::Move { to: pos(10, 0) });
        assert!(s.reservations().is_claimed(pos(10, 0)));
    }

    #[test]
    fn scenario_d_steps_toward_unprofitable_enemy() {
        // d=10, enemy energy 500: gain 25 ≤ 50 → approach one cell instead.
        let map = make_map(&[(10, 0)]);
        let mut roster = Roster::new();
        let r = roster.spawn(US, pos(0, 0), 100);
        roster.spawn(THEM, pos(10, 0), 500);
        let ctx = TurnContext::new(&map, &roster);

        let mut s = HarvesterStrategy::new();
        advance(&mut s, 1);
        assert_eq!(s.decide(r, &ctx), Action::Move { to: pos(1, 0) });
        // The approach branch must not commit the station.
        assert!(s.reservations().is_empty());
    }

    #[test]
    fn attack_gain_threshold_is_strict() {
        // Gain must strictly exceed 50: 1000/20 = 50 → no raid; 1020/20 = 51 → raid.
        let map = make_map(&[(10, 0)]);
        let mut roster = Roster::new();
        let r = roster.spawn(US, pos(0, 0), 100);
        let enemy = roster.spawn(THEM, pos(10, 0), 1_000);

        let mut s = HarvesterStrategy::new();
        advance(&mut s, 1);
        {
            let ctx = TurnContext::new(&map, &roster);
            assert_eq!(s.decide(r, &ctx), Action::Move { to: pos(1, 0) });
        }

        roster.energies[enemy.index()] = 1_020;
        let ctx = TurnContext::new(&map, &roster);
        assert_eq!(s.decide(r, &ctx), Action::Move { to: pos(10, 0) });
    }

    #[test]
    fn attack_requires_covering_the_full_cost() {
        // cost = 10 + 50 = 60; energy 59 falls back to the approach branch.
        let map = make_map(&[(10, 0)]);
        let mut roster = Roster::new();
        let r = roster.spawn(US, pos(0, 0), 59);
        roster.spawn(THEM, pos(10, 0), 2_000);
        let ctx = TurnContext::new(&map, &roster);

        let mut s = HarvesterStrategy::new();
        advance(&mut s, 1);
        assert_eq!(s.decide(r, &ctx), Action::Move { to: pos(1, 0) });
    }

    #[test]
    fn redirects_from_friendly_station_to_first_fallback() {
        // Nearest is teammate-held; fallback is the first non-friendly
        // station in registry order — here the farther free one.
        let map = make_map(&[(50, 50), (1, 0)]);
        let mut roster = Roster::new();
        let r = roster.spawn(US, pos(0, 0), 100);
        roster.spawn(US, pos(1, 0), 100);
        let ctx = TurnContext::new(&map, &roster);

        let mut s = HarvesterStrategy::new();
        advance(&mut s, 1);
        assert_eq!(s.decide(r, &ctx), Action::Move { to: pos(50, 50) });
        assert!(s.reservations().is_claimed(pos(50, 50)));
    }

    #[test]
    fn idles_when_friendly_target_has_no_fallback() {
        let map = make_map(&[(1, 0)]);
        let mut roster = Roster::new();
        let r = roster.spawn(US, pos(0, 0), 100);
        roster.spawn(US, pos(1, 0), 100);
        let ctx = TurnContext::new(&map, &roster);

        let mut s = HarvesterStrategy::new();
        advance(&mut s, 1);
        assert_eq!(s.decide(r, &ctx), Action::Idle);
    }

    #[test]
    fn idles_when_no_station_survives_the_filter() {
        let map = make_map(&[]);
        let mut roster = Roster::new();
        let r = roster.spawn(US, pos(0, 0), 100);
        let ctx = TurnContext::new(&map, &roster);

        let mut s = HarvesterStrategy::new();
        advance(&mut s, 1);
        assert_eq!(s.decide(r, &ctx), Action::Idle);
    }

    #[test]
    fn moves_directly_when_affordable_and_steps_when_not() {
        let map = make_map(&[(5, 0)]);
        let mut roster = Roster::new();
        let rich = roster.spawn(US, pos(0, 0), 5);
        let poor = roster.spawn(US, pos(0, 10), 4);
        let ctx = TurnContext::new(&map, &roster);

        let mut s = HarvesterStrategy::new();
        advance(&mut s, 1);
        assert_eq!(s.decide(rich, &ctx), Action::Move { to: pos(5, 0) });

        let mut s = HarvesterStrategy::new();
        advance(&mut s, 1);
        assert_eq!(s.decide(poor, &ctx), Action::Move { to: pos(1, 9) });
        assert!(s.reservations().is_empty());
    }

    #[test]
    fn reservations_spread_one_fleet_across_stations() {
        // Two robots, two stations, one round: the second decision must not
        // re-target the station the first committed to.
        let map = make_map(&[(2, 0), (5, 5)]);
        let mut roster = Roster::new();
        let first = roster.spawn(US, pos(0, 0), 300);
        let second = roster.spawn(US, pos(0, 1), 300);
        let ctx = TurnContext::new(&map, &roster);

        let mut s = HarvesterStrategy::new();
        advance(&mut s, 1);
        let a = s.decide(first, &ctx);
        let b = s.decide(second, &ctx);
        assert_eq!(a, Action::Move { to: pos(2, 0) });
        assert_eq!(b, Action::Move { to: pos(5, 5) });
    }

    // ── Clone gating ──────────────────────────────────────────────────────

    fn clone_ready_fixture() -> (GameMap, Roster, RobotId) {
        let stations: Vec<(i32, i32)> = (0..10).map(|i| (5 + i * 7, 0)).collect();
        let map = make_map(&stations);
        let mut roster = Roster::new();
        let r = roster.spawn(US, pos(0, 0), 400);
        (map, roster, r)
    }

    #[test]
    fn clone_blocked_from_round_37() {
        let (map, roster, r) = clone_ready_fixture();
        let ctx = TurnContext::new(&map, &roster);

        let mut s = HarvesterStrategy::new();
        advance(&mut s, 36);
        assert_eq!(s.decide(r, &ctx), Action::Spawn);

        s.on_round_start(); // round 37
        assert_ne!(s.decide(r, &ctx), Action::Spawn);
    }

    #[test]
    fn clone_requires_energy_above_floor() {
        let (map, mut roster, r) = clone_ready_fixture();
        roster.energies[r.index()] = 340; // floor is strict
        let ctx = TurnContext::new(&map, &roster);

        let mut s = HarvesterStrategy::new();
        advance(&mut s, 1);
        assert_ne!(s.decide(r, &ctx), Action::Spawn);
    }

    #[test]
    fn clone_blocked_without_station_in_radius() {
        // Both stations sit beyond Chebyshev distance 180.
        let map = make_map(&[(200, 0), (250, 250)]);
        let mut roster = Roster::new();
        let r = roster.spawn(US, pos(0, 0), 400);
        let ctx = TurnContext::new(&map, &roster);

        let mut s = HarvesterStrategy::new();
        advance(&mut s, 1);
        // Falls through to routing: the station is free and affordable.
        assert_eq!(s.decide(r, &ctx), Action::Move { to: pos(200, 0) });
    }

    #[test]
    fn clone_blocked_when_fleet_matches_station_count() {
        let map = make_map(&[(5, 0), (9, 0)]);
        let mut roster = Roster::new();
        let r = roster.spawn(US, pos(0, 0), 400);
        roster.spawn(US, pos(0, 1), 400);
        let ctx = TurnContext::new(&map, &roster);

        let mut s = HarvesterStrategy::new();
        advance(&mut s, 1);
        assert_ne!(s.decide(r, &ctx), Action::Spawn);
    }

    #[test]
    fn clone_blocked_at_fleet_cap() {
        // 61 stations but the fleet already has 60 robots.
        let stations: Vec<(i32, i32)> = (0..61).map(|i| (i % 10, i / 10)).collect();
        let map = make_map(&stations);
        let mut roster = Roster::new();
        let r = roster.spawn(US, pos(0, 100), 400);
        for i in 1..60 {
            roster.spawn(US, pos(i, 100), 400);
        }
        assert_eq!(roster.owned_count(US), 60);
        let ctx = TurnContext::new(&map, &roster);

        let mut s = HarvesterStrategy::new();
        advance(&mut s, 1);
        assert_ne!(s.decide(r, &ctx), Action::Spawn);
    }

    #[test]
    fn clone_needs_a_non_friendly_station_in_radius() {
        // The only in-radius station is held by a teammate; the others are
        // too far away to justify a clone.
        let map = make_map(&[(5, 0), (250, 250), (0, 250)]);
        let mut roster = Roster::new();
        let r = roster.spawn(US, pos(0, 0), 400);
        roster.spawn(US, pos(5, 0), 100);
        let ctx = TurnContext::new(&map, &roster);

        let mut s = HarvesterStrategy::new();
        advance(&mut s, 1);
        assert_ne!(s.decide(r, &ctx), Action::Spawn);
    }
}
