use itertools::Itertools;

use crate::map::Map;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TilePlacement {
    pub floor: usize,
    pub code: i32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

// Mirrored about the first floor's extent; a tile's code raises it above its floor.
pub fn tile_layout(map: &Map) -> Vec<TilePlacement> {
    let (Some(width), Some(depth)) = (map.width(), map.depth()) else {
        return Vec::new();
    };
    let [px, py, pz] = map.position;

    let mut placements = Vec::new();
    for (floor_idx, floor) in map.floors.iter().enumerate() {
        for (i, j) in (0..width).cartesian_product(0..depth) {
            let Some(&code) = floor.grid.get(j).and_then(|row| row.get(i)) else {
                continue;
            };
            // -1 means no tile.
            if code == -1 {
                continue;
            }
            placements.push(TilePlacement {
                floor: floor_idx,
                code,
                x: (width - 1 - i) as f32 + px,
                y: code as f32 + floor.height as f32 + py,
                z: (depth - 1 - j) as f32 + pz,
            });
        }
    }

    placements
}
