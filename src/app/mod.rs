use std::io::{stdout, Stdout};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::ui::draw_game;
use crate::{Game, DROP_MS, INPUT_POLL_MS};

type Term = Terminal<CrosstermBackend<Stdout>>;

pub fn run() -> Result<()> {
    let mut tui = TuiGuard::new()?;
    run_loop(tui.terminal_mut())
}

fn run_loop(terminal: &mut Term) -> Result<()> {
    let mut game = Game::new();
    let mut paused = false;
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| draw_game(frame, &game, paused))?;

        game.process_effects();

        if event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Char('p') => paused = !paused,
                    KeyCode::Char('r') => {
                        game.restart();
                        paused = false;
                        last_tick = Instant::now();
                    }
                    code if !paused => handle_input(code, &mut game),
                    _ => {}
                }
            }
        }

        if !paused && last_tick.elapsed() >= Duration::from_millis(DROP_MS) {
            game.tick_gravity();
            last_tick = Instant::now();
        }
    }
    Ok(())
}

struct TuiGuard {
    terminal: Term,
}

impl TuiGuard {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;
        Ok(Self { terminal })
    }

    fn terminal_mut(&mut self) -> &mut Term {
        &mut self.terminal
    }
}

impl Drop for TuiGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

fn handle_input(code: KeyCode, game: &mut Game) {
    match code {
        KeyCode::Left => {
            let _ = game.move_current(-1, 0);
        }
        KeyCode::Right => {
            let _ = game.move_current(1, 0);
        }
        KeyCode::Down => {
            let _ = game.move_current(0, 1);
        }
        KeyCode::Char(' ') => {
            game.hard_drop();
        }
        _ => {}
    }
}
