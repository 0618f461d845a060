pub mod level;
pub mod map;
pub mod render;

pub use level::Level;
pub use map::fixture::{get_test_floors, get_test_map};
pub use map::layout::{tile_layout, TilePlacement};
pub use map::{floors_to_json, Floor, Map, TileType};
