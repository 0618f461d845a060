use lazy_static::lazy_static;

use crate::map::{Floor, Map};

lazy_static! {
    static ref TEST_MAP: Map = Map::new(
        vec![
            Floor::new(
                0,
                vec![
                    vec![0, 1, 2, 3],
                    vec![0, -1, -1, 0],
                    vec![0, 0, 0, 0],
                ],
            ),
            Floor::new(
                3,
                vec![
                    vec![-1, -1, -1, -1],
                    vec![-1, -1, -1, 0],
                    vec![-1, -1, -1, 0],
                ],
            ),
        ],
        [0.0, 0.0, 0.0],
    );
}

pub fn get_test_map() -> Map {
    TEST_MAP.clone()
}

pub fn get_test_floors() -> Vec<Floor> {
    get_test_map().into_floors()
}
