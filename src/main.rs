use clap::Parser;
use color_eyre::eyre::eyre;
use log::info;
use specs::{World, WorldExt};

use tile_map_fixture::level::{self, Level};
use tile_map_fixture::render::{render, Format};
use tile_map_fixture::Map;

#[derive(Parser, Debug)]
#[command(name = "map-fixture", about = "Print the built-in test map")]
struct Cli {
    /// Level to load.
    #[arg(long, default_value = "test_map")]
    level: Level,
    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let cli = Cli::parse();
    let map = load_level(cli.level)?;

    println!("{}", render(&map, cli.format)?);

    Ok(())
}

fn load_level(which: Level) -> color_eyre::Result<Map> {
    let mut ecs = World::new();
    level::register_components(&mut ecs);

    let entity = level::spawn_level(&mut ecs, which);
    level::request_load(&mut ecs, entity);
    level::run_systems(&mut ecs);

    let map = ecs
        .read_storage::<Map>()
        .get(entity)
        .cloned()
        .ok_or_else(|| eyre!("level [{which}] has no map"))?;
    info!(
        "level [{which}] is {}x{} with {} floors",
        map.width().unwrap_or(0),
        map.depth().unwrap_or(0),
        map.floors.len()
    );
    Ok(map)
}
