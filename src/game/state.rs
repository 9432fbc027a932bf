use crate::game::{spawn_column, Board, Cell, Cube};
use crate::{WELL_H, WELL_W};

pub struct Game {
    pub board: Board,
    pub current: Cube,
    pub active_cube: bool,
    pub game_over: bool,
    pub lock_flash_cell: Option<(usize, usize)>,
    pub lock_flash_frames: u8,
}

impl Game {
    pub fn new() -> Self {
        let mut game = Self {
            board: Board::new(WELL_W, WELL_H),
            current: Cube::at(0, 0),
            active_cube: false,
            game_over: false,
            lock_flash_cell: None,
            lock_flash_frames: 0,
        };
        game.spawn_next();
        game
    }

    pub fn can_place(&self, cube: &Cube) -> bool {
        if cube.x < 0 || cube.y < 0 {
            return false;
        }
        let (xu, yu) = (cube.x as usize, cube.y as usize);
        if xu >= self.board.width || yu >= self.board.height {
            return false;
        }
        self.board.is_empty(xu, yu)
    }

    pub fn move_current(&mut self, dx: i32, dy: i32) -> bool {
        if self.game_over || !self.active_cube {
            return false;
        }
        let next = self.current.shifted(dx, dy);
        if self.can_place(&next) {
            self.current = next;
            true
        } else {
            false
        }
    }

    pub fn tick_gravity(&mut self) {
        if self.game_over || !self.active_cube {
            return;
        }
        if !self.move_current(0, 1) {
            self.lock_cube();
            self.spawn_next();
        }
    }

    pub fn hard_drop(&mut self) {
        if self.game_over || !self.active_cube {
            return;
        }
        while self.move_current(0, 1) {}
        self.lock_cube();
        self.spawn_next();
    }

    pub fn lock_cube(&mut self) {
        if self.current.x >= 0 && self.current.y >= 0 {
            let (xu, yu) = (self.current.x as usize, self.current.y as usize);
            if xu < self.board.width && yu < self.board.height {
                self.board.set(xu, yu, Cell::Cube);
                self.lock_flash_cell = Some((xu, yu));
                self.lock_flash_frames = 1;
            }
        }
        self.active_cube = false;
    }

    pub fn spawn_next(&mut self) {
        let spawn = Cube::at(spawn_column(), 0);
        if self.can_place(&spawn) {
            self.current = spawn;
            self.active_cube = true;
        } else {
            // Stack reached the ceiling.
            self.game_over = true;
            self.active_cube = false;
        }
    }

    /// Where the current cube would land, for the renderer's landing marker.
    pub fn ghost_cube(&self) -> Cube {
        let mut ghost = self.current;
        while self.can_place(&ghost.shifted(0, 1)) {
            ghost.y += 1;
        }
        ghost
    }

    pub fn process_effects(&mut self) {
        if self.lock_flash_frames > 0 {
            self.lock_flash_frames -= 1;
            if self.lock_flash_frames == 0 {
                self.lock_flash_cell = None;
            }
        }
    }

    pub fn restart(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game_with_cube_at(x: i32, y: i32) -> Game {
        let mut game = Game::new();
        game.current = Cube::at(x, y);
        game
    }

    #[test]
    fn new_game_spawns_active_cube_at_top() {
        let game = Game::new();
        assert!(game.active_cube);
        assert!(!game.game_over);
        assert_eq!(game.current.y, 0);
        assert!(game.current.x >= 0 && game.current.x < WELL_W as i32);
    }

    #[test]
    fn shift_rejected_at_walls() {
        let mut game = game_with_cube_at(0, 0);
        assert!(!game.move_current(-1, 0));
        assert_eq!(game.current, Cube::at(0, 0));

        game.current = Cube::at(WELL_W as i32 - 1, 0);
        assert!(!game.move_current(1, 0));
        assert_eq!(game.current.x, WELL_W as i32 - 1);
    }

    #[test]
    fn shift_rejected_into_locked_neighbor() {
        let mut game = game_with_cube_at(3, 5);
        game.board.set(4, 5, Cell::Cube);
        assert!(!game.move_current(1, 0));
        assert!(game.move_current(-1, 0));
        assert_eq!(game.current, Cube::at(2, 5));
    }

    #[test]
    fn gravity_moves_cube_one_row() {
        let mut game = game_with_cube_at(3, 0);
        game.tick_gravity();
        assert_eq!(game.current, Cube::at(3, 1));
    }

    #[test]
    fn cube_locks_on_floor_and_next_spawns() {
        let mut game = game_with_cube_at(3, WELL_H as i32 - 1);
        game.tick_gravity();
        assert_eq!(game.board.get(3, WELL_H - 1), Cell::Cube);
        assert_eq!(game.lock_flash_cell, Some((3, WELL_H - 1)));
        assert!(game.active_cube);
        assert_eq!(game.current.y, 0);
    }

    #[test]
    fn cube_locks_on_top_of_stack() {
        let mut game = game_with_cube_at(3, WELL_H as i32 - 2);
        game.board.set(3, WELL_H - 1, Cell::Cube);
        game.tick_gravity();
        assert_eq!(game.board.get(3, WELL_H - 2), Cell::Cube);
        assert_eq!(game.board.stack_height(), 2);
    }

    #[test]
    fn soft_drop_cannot_pass_floor() {
        let mut game = game_with_cube_at(3, WELL_H as i32 - 1);
        assert!(!game.move_current(0, 1));
        assert_eq!(game.current.y, WELL_H as i32 - 1);
        assert!(game.board.is_empty(3, WELL_H - 1));
    }

    #[test]
    fn hard_drop_lands_on_stack() {
        let mut game = game_with_cube_at(5, 0);
        game.board.set(5, WELL_H - 1, Cell::Cube);
        game.hard_drop();
        assert_eq!(game.board.get(5, WELL_H - 2), Cell::Cube);
        assert!(game.active_cube);
    }

    #[test]
    fn ghost_matches_landing_row() {
        let mut game = game_with_cube_at(2, 0);
        game.board.set(2, 10, Cell::Cube);
        assert_eq!(game.ghost_cube(), Cube::at(2, 9));
    }

    #[test]
    fn blocked_spawn_ends_game() {
        let mut game = Game::new();
        for x in 0..WELL_W {
            game.board.set(x, 0, Cell::Cube);
        }
        game.spawn_next();
        assert!(game.game_over);
        assert!(!game.active_cube);
    }

    #[test]
    fn no_movement_after_game_over() {
        let mut game = game_with_cube_at(3, 5);
        game.game_over = true;
        assert!(!game.move_current(1, 0));
        game.tick_gravity();
        assert_eq!(game.current, Cube::at(3, 5));
        assert!(game.board.is_empty(3, 5));
    }

    #[test]
    fn lock_flash_decays_after_one_frame() {
        let mut game = game_with_cube_at(0, WELL_H as i32 - 1);
        game.hard_drop();
        assert_eq!(game.lock_flash_frames, 1);
        game.process_effects();
        assert_eq!(game.lock_flash_frames, 0);
        assert_eq!(game.lock_flash_cell, None);
    }

    #[test]
    fn restart_clears_board_and_respawns() {
        let mut game = Game::new();
        for x in 0..WELL_W {
            game.board.set(x, 0, Cell::Cube);
        }
        game.spawn_next();
        assert!(game.game_over);
        game.restart();
        assert!(!game.game_over);
        assert!(game.active_cube);
        assert_eq!(game.board.stack_height(), 0);
    }
}
