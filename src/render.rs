use clap::ValueEnum;
use itertools::Itertools;

use crate::map::layout::tile_layout;
use crate::map::{floors_to_json, Map};

#[derive(ValueEnum, PartialEq, Eq, Debug, Clone, Copy)]
pub enum Format {
    /// Floors and starting position as JSON.
    Json,
    /// Floors only, as a JSON array.
    Bare,
    /// Each floor's height followed by its grid.
    Grid,
    /// One line per placed tile.
    Layout,
}

pub fn render(map: &Map, format: Format) -> serde_json::Result<String> {
    let text = match format {
        Format::Json => map.to_json()?,
        Format::Bare => floors_to_json(&map.floors)?,
        Format::Grid => map
            .floors
            .iter()
            .enumerate()
            .map(|(idx, floor)| format!("floor {} (height {})\n{floor}", idx + 1, floor.height))
            .join("\n"),
        Format::Layout => tile_layout(map)
            .iter()
            .map(|tile| {
                format!(
                    "floor {} code {:>2} at ({}, {}, {})",
                    tile.floor + 1,
                    tile.code,
                    tile.x,
                    tile.y,
                    tile.z
                )
            })
            .join("\n"),
    };
    Ok(text)
}
