use rand::Rng;
use rand::thread_rng;

use crate::WELL_W;

/// The single falling piece. Signed coordinates so candidate positions can
/// be tested before bounds checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cube {
    pub x: i32,
    pub y: i32,
}

impl Cube {
    pub fn at(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn shifted(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

pub fn spawn_column() -> i32 {
    thread_rng().gen_range(0..WELL_W as i32)
}
