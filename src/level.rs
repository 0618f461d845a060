use std::fmt;
use std::str::FromStr;

use log::{debug, info};
use specs::prelude::*;
use specs_derive::*;

use crate::map::fixture::get_test_map;
use crate::map::Map;

#[derive(Component, PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum Level {
    TestMap,
}

impl Level {
    pub fn name(&self) -> &'static str {
        match self {
            Level::TestMap => "test_map",
        }
    }

    pub fn fixture(&self) -> Map {
        match self {
            Level::TestMap => get_test_map(),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLevel(pub String);

impl fmt::Display for UnknownLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown level [{}]", self.0)
    }
}

impl std::error::Error for UnknownLevel {}

impl FromStr for Level {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "test_map" => Ok(Level::TestMap),
            _ => Err(UnknownLevel(s.to_string())),
        }
    }
}

#[derive(Component, Debug, Clone)]
pub struct WantsToLoadMap {}

#[derive(Component, Debug, Clone)]
pub struct WantsToUnloadMap {}

pub struct MapLoadSystem {}

impl<'a> System<'a> for MapLoadSystem {
    type SystemData = (
        ReadStorage<'a, Level>,
        WriteStorage<'a, Map>,
        WriteStorage<'a, WantsToLoadMap>,
    );

    fn run(&mut self, data: Self::SystemData) {
        let (levels, mut maps, mut wants_load) = data;

        for (level, map, _load) in (&levels, &mut maps, &wants_load).join() {
            if map.is_loaded() {
                debug!("level [{level}] already loaded");
                continue;
            }
            *map = level.fixture();
            info!("loaded level [{level}] with {} floors", map.floors.len());
        }

        wants_load.clear();
    }
}

pub struct MapUnloadSystem {}

impl<'a> System<'a> for MapUnloadSystem {
    type SystemData = (
        ReadStorage<'a, Level>,
        WriteStorage<'a, Map>,
        WriteStorage<'a, WantsToUnloadMap>,
    );

    fn run(&mut self, data: Self::SystemData) {
        let (levels, mut maps, mut wants_unload) = data;

        for (level, map, _unload) in (&levels, &mut maps, &wants_unload).join() {
            *map = Map::default();
            info!("unloaded level [{level}]");
        }

        wants_unload.clear();
    }
}

pub fn register_components(ecs: &mut World) {
    ecs.register::<Level>();
    ecs.register::<Map>();
    ecs.register::<WantsToLoadMap>();
    ecs.register::<WantsToUnloadMap>();
}

pub fn spawn_level(ecs: &mut World, level: Level) -> Entity {
    ecs.create_entity()
        .with(level)
        .with(Map::default())
        .build()
}

pub fn request_load(ecs: &mut World, entity: Entity) {
    ecs.write_storage::<WantsToLoadMap>()
        .insert(entity, WantsToLoadMap {})
        .expect("Unable to insert load request");
}

pub fn request_unload(ecs: &mut World, entity: Entity) {
    ecs.write_storage::<WantsToUnloadMap>()
        .insert(entity, WantsToUnloadMap {})
        .expect("Unable to insert unload request");
}

// Unloads run first, so a tick with both requests reloads a fresh copy.
pub fn run_systems(ecs: &mut World) {
    let mut unload = MapUnloadSystem {};
    unload.run_now(ecs);

    let mut load = MapLoadSystem {};
    load.run_now(ecs);

    ecs.maintain();
}
