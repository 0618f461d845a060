use std::fmt;

use itertools::Itertools;
use serde::Serialize;
use specs::prelude::*;
use specs_derive::*;

pub use tiletype::TileType;

pub mod fixture;
pub mod layout;
pub mod tiletype;

#[derive(Serialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct Floor {
    pub height: i32,
    pub grid: Vec<Vec<i32>>,
}

impl Floor {
    pub fn new(height: i32, grid: Vec<Vec<i32>>) -> Self {
        Self { height, grid }
    }

    pub fn width(&self) -> usize {
        self.grid.first().map_or(0, Vec::len)
    }

    pub fn depth(&self) -> usize {
        self.grid.len()
    }

    pub fn is_rectangular(&self) -> bool {
        self.grid.iter().map(Vec::len).all_equal()
    }

    pub fn tile(&self, x: usize, z: usize) -> Option<TileType> {
        let code = *self.grid.get(z)?.get(x)?;
        TileType::from_code(code)
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self
            .grid
            .iter()
            .map(|row| format!("[{}]", row.iter().map(|c| format!("{c:>2}")).join(",")))
            .join("\n");
        write!(f, "{rows}")
    }
}

// Floors are ordered ground floor first.
#[derive(Component, Serialize, Debug, Default, Clone, PartialEq)]
pub struct Map {
    pub floors: Vec<Floor>,
    pub position: [f32; 3],
}

impl Map {
    pub fn new(floors: Vec<Floor>, position: [f32; 3]) -> Self {
        Self { floors, position }
    }

    pub fn width(&self) -> Option<usize> {
        self.floors.first().map(Floor::width)
    }

    pub fn depth(&self) -> Option<usize> {
        self.floors.first().map(Floor::depth)
    }

    pub fn is_loaded(&self) -> bool {
        !self.floors.is_empty()
    }

    pub fn push(&mut self, floor: &Floor) {
        self.floors.push(floor.clone());
    }

    pub fn into_floors(self) -> Vec<Floor> {
        self.floors
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

pub fn floors_to_json(floors: &[Floor]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(floors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_floor() -> Floor {
        Floor::new(0, vec![vec![0, 1], vec![-1, 0], vec![0, 0]])
    }

    #[test]
    fn empty_map_is_not_loaded() {
        let map = Map::default();
        assert!(!map.is_loaded());
        assert_eq!(map.width(), None);
        assert_eq!(map.depth(), None);
        assert_eq!(map.position, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn push_copies_floor_and_sets_dimensions() {
        let floor = sample_floor();
        let mut map = Map::default();
        map.push(&floor);

        assert!(map.is_loaded());
        assert_eq!(map.width(), Some(2));
        assert_eq!(map.depth(), Some(3));
        assert_eq!(map.floors[0], floor);
    }

    #[test]
    fn tile_reads_column_then_row() {
        let floor = sample_floor();
        assert_eq!(floor.tile(1, 0), Some(TileType::Marker(1)));
        assert_eq!(floor.tile(0, 1), Some(TileType::Blocked));
        assert_eq!(floor.tile(2, 0), None);
        assert_eq!(floor.tile(0, 3), None);
    }

    #[test]
    fn ragged_grid_is_not_rectangular() {
        let floor = Floor::new(0, vec![vec![0, 0], vec![0]]);
        assert!(!floor.is_rectangular());
        assert!(sample_floor().is_rectangular());
    }

    #[test]
    fn display_aligns_codes() {
        assert_eq!(sample_floor().to_string(), "[ 0, 1]\n[-1, 0]\n[ 0, 0]");
    }

    #[test]
    fn into_floors_drops_position() {
        let map = Map::new(vec![sample_floor()], [1.0, 2.0, 3.0]);
        assert_eq!(map.into_floors(), vec![sample_floor()]);
    }
}
