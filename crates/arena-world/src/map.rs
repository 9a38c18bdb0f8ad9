//! The arena map: bounds plus the immutable energy-station registry.
//!
//! Station enumeration order is part of the map's observable contract —
//! decision engines scan [`GameMap::stations`] front to back and break
//! distance ties by that order, so the registry never reorders after
//! construction.

use std::collections::HashSet;

use arena_core::{MatchRng, Position, StationId};

use crate::{WorldError, WorldResult};

/// A fixed map location yielding energy when a robot occupies it and harvests.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Station {
    pub id: StationId,
    pub position: Position,
}

/// Rectangular arena with an immutable station registry.
///
/// Cells span `0..width` × `0..height`.  Stations are validated in-bounds and
/// position-unique at construction; after that the map never changes.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameMap {
    width: i32,
    height: i32,
    stations: Vec<Station>,
}

impl GameMap {
    /// Build a map from explicit station positions.
    ///
    /// Positions are registered in the given order (which becomes the
    /// authoritative enumeration order).  Fails on out-of-bounds or duplicate
    /// positions.
    pub fn new(width: i32, height: i32, positions: Vec<Position>) -> WorldResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(WorldError::EmptyMap { width, height });
        }

        let mut seen = HashSet::with_capacity(positions.len());
        let mut stations = Vec::with_capacity(positions.len());
        for (i, position) in positions.into_iter().enumerate() {
            if position.x < 0 || position.x >= width || position.y < 0 || position.y >= height {
                return Err(WorldError::StationOutOfBounds { position, width, height });
            }
            if !seen.insert(position) {
                return Err(WorldError::DuplicateStation(position));
            }
            let id = StationId::try_from(i).map_err(|_| WorldError::TooManyStations {
                requested: seen.len(),
                capacity: StationId::INVALID.index(),
            })?;
            stations.push(Station { id, position });
        }

        Ok(Self { width, height, stations })
    }

    /// Generate a map with `count` stations at distinct random cells.
    ///
    /// Deterministic for a given RNG state; the registry order is the order
    /// in which positions were drawn.
    pub fn generate(width: i32, height: i32, count: usize, rng: &mut MatchRng) -> WorldResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(WorldError::EmptyMap { width, height });
        }
        let capacity = (width as usize) * (height as usize);
        if count > capacity {
            return Err(WorldError::TooManyStations { requested: count, capacity });
        }

        let mut seen = HashSet::with_capacity(count);
        let mut positions = Vec::with_capacity(count);
        while positions.len() < count {
            let candidate = Position::new(rng.gen_range(0..width), rng.gen_range(0..height));
            if seen.insert(candidate) {
                positions.push(candidate);
            }
        }

        Self::new(width, height, positions)
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// All stations in registry (enumeration) order.
    #[inline]
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    #[inline]
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// The station at exactly `position`, if any.  Linear scan — station
    /// counts are small and the registry order must stay authoritative.
    pub fn station_at(&self, position: Position) -> Option<&Station> {
        self.stations.iter().find(|s| s.position == position)
    }

    #[inline]
    pub fn has_station_at(&self, position: Position) -> bool {
        self.station_at(position).is_some()
    }

    /// `true` if `position` lies inside the arena bounds.
    #[inline]
    pub fn contains(&self, position: Position) -> bool {
        (0..self.width).contains(&position.x) && (0..self.height).contains(&position.y)
    }

    /// Clamp `position` onto the nearest in-bounds cell.
    #[inline]
    pub fn clamp(&self, position: Position) -> Position {
        Position::new(
            position.x.clamp(0, self.width - 1),
            position.y.clamp(0, self.height - 1),
        )
    }
}
