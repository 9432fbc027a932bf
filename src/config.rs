// Shared well/render constants.
pub const WELL_W: usize = 9;
pub const WELL_H: usize = 16;
pub const CELL_W: usize = 2; // render each cube two characters wide (face + shaded edge)
pub const PLAY_W: usize = WELL_W * CELL_W + 2; // inner width plus side walls
pub const PLAY_H: usize = WELL_H + 2; // inner height plus ceiling/floor
// Minimal pane width to fit the well plus the cabinet border.
pub const MIN_PANE_WIDTH: u16 = (PLAY_W as u16) + 2;
pub const DROP_MS: u64 = 450;
pub const INPUT_POLL_MS: u64 = 50;
