use anyhow::Result;

mod app;
mod config;
mod game;
mod ui;
pub use config::{
    CELL_W, DROP_MS, INPUT_POLL_MS, MIN_PANE_WIDTH, PLAY_H, PLAY_W, WELL_H, WELL_W,
};
pub use game::{Board, Cell, Cube, Game};

fn main() -> Result<()> {
    app::run()
}
