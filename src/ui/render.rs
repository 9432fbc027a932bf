use std::time::{SystemTime, UNIX_EPOCH};

use ratatui::prelude::*;
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::game::Cell;
use crate::{Game, CELL_W, MIN_PANE_WIDTH, PLAY_H, PLAY_W};

pub fn draw_game(frame: &mut Frame, game: &Game, paused: bool) {
    let area = frame.size();

    if area.width < MIN_PANE_WIDTH {
        let msg = Paragraph::new(format!("RESIZE PANE (min width: {})", MIN_PANE_WIDTH))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("CUBEFALL"));
        frame.render_widget(msg, area);
        return;
    }

    // Outer "cabinet" frame.
    let cabinet = Block::default()
        .title("CUBEFALL")
        .border_type(BorderType::Thick)
        .borders(Borders::ALL)
        .title_alignment(Alignment::Left);
    let cabinet_inner = cabinet.inner(area);
    frame.render_widget(cabinet, area);

    let well_w = PLAY_W as u16;
    let well_h = PLAY_H as u16;

    let col_rect = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(well_w),
            Constraint::Min(0),
        ])
        .split(cabinet_inner)[1];

    let info_h = 4u16;
    let controls_h = 5u16;
    let stack = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(info_h),
            Constraint::Length(well_h),
            Constraint::Length(controls_h),
            Constraint::Min(0),
        ])
        .split(col_rect);

    let mut info_rect = stack[1];
    let well_rect = stack[2];
    let mut controls_rect = stack[3];
    // Widen info/controls boxes slightly while keeping them centered in the cabinet.
    let expand = 4u16;
    let max_right = cabinet_inner.x + cabinet_inner.width;
    let new_x = info_rect.x.saturating_sub(expand);
    let mut new_w = info_rect.width.saturating_add(expand * 2);
    if new_x + new_w > max_right {
        new_w = max_right.saturating_sub(new_x);
    }
    info_rect.x = new_x;
    info_rect.width = new_w;
    controls_rect.x = new_x;
    controls_rect.width = new_w;

    draw_info(frame, game, paused, info_rect);
    draw_well(frame, game, well_rect);
    draw_controls(frame, controls_rect);
}

fn draw_well(frame: &mut Frame, game: &Game, play_rect: Rect) {
    let mut grid = vec![vec![' '; PLAY_W]; PLAY_H];

    // Border: top/ceiling, sides, heavy floor.
    grid[0][0] = '┌';
    grid[0][PLAY_W - 1] = '┐';
    for x in 1..PLAY_W - 1 {
        grid[0][x] = '─';
    }
    for y in 1..PLAY_H - 1 {
        grid[y][0] = '│';
        grid[y][PLAY_W - 1] = '│';
    }
    grid[PLAY_H - 1][0] = '└';
    grid[PLAY_H - 1][PLAY_W - 1] = '┘';
    for x in 1..PLAY_W - 1 {
        grid[PLAY_H - 1][x] = '═';
    }

    // Plot one cube in the inner area: solid face plus shaded right edge.
    let plot_cube = |grid: &mut [Vec<char>], bx: usize, by: usize, face: char, edge: char| {
        let gx = 1 + bx * CELL_W;
        let gy = 1 + by;
        if gy < PLAY_H && gx + 1 < PLAY_W {
            grid[gy][gx] = face;
            grid[gy][gx + 1] = edge;
        }
    };

    // Locked cubes (with optional lock flash override).
    for y in 0..game.board.height {
        for x in 0..game.board.width {
            if let Cell::Cube = game.board.get(x, y) {
                let flashing =
                    game.lock_flash_frames > 0 && game.lock_flash_cell == Some((x, y));
                if flashing {
                    plot_cube(&mut grid, x, y, '▓', '▓');
                } else {
                    plot_cube(&mut grid, x, y, '█', '▒');
                }
            }
        }
    }

    if game.active_cube {
        // Landing marker: faint glyphs at the ghost position.
        let ghost = game.ghost_cube();
        if ghost != game.current && ghost.x >= 0 && ghost.y >= 0 {
            let (xu, yu) = (ghost.x as usize, ghost.y as usize);
            if xu < game.board.width && yu < game.board.height {
                let gx = 1 + xu * CELL_W;
                let gy = 1 + yu;
                if gy < PLAY_H && gx + 1 < PLAY_W {
                    grid[gy][gx] = '·';
                    grid[gy][gx + 1] = '·';
                }
            }
        }

        // Active cube.
        if game.current.x >= 0 && game.current.y >= 0 {
            let (xu, yu) = (game.current.x as usize, game.current.y as usize);
            if xu < game.board.width && yu < game.board.height {
                plot_cube(&mut grid, xu, yu, '█', '▒');
            }
        }
    }

    let lines: Vec<Line> = grid
        .iter()
        .map(|row| Line::raw(row.iter().collect::<String>()))
        .collect();

    let paragraph = Paragraph::new(lines).alignment(Alignment::Left);
    frame.render_widget(paragraph, play_rect);

    if game.game_over {
        let overlay_w = (PLAY_W as u16).saturating_sub(4).max(8);
        let overlay_h = 5u16;
        let popup = Rect {
            x: play_rect.x + (play_rect.width.saturating_sub(overlay_w)) / 2,
            y: play_rect.y + (play_rect.height.saturating_sub(overlay_h)) / 2,
            width: overlay_w,
            height: overlay_h,
        };
        let overlay = Paragraph::new("WELL FULL\nr restart / q quit")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(overlay, popup);
    }
}

fn draw_info(frame: &mut Frame, game: &Game, paused: bool, area: Rect) {
    let status = if game.game_over {
        "OVER"
    } else if paused {
        "PAUSED"
    } else {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        if (millis / 300) % 2 == 0 {
            "ACTIVE"
        } else {
            "      "
        }
    };

    let block = Block::default().title("INFO").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text = Paragraph::new(vec![
        Line::raw(format!("{:<8} {}", "HEIGHT:", game.board.stack_height())),
        Line::raw(format!("{:<8} {}", "STATUS:", status)),
    ])
    .alignment(Alignment::Left);
    frame.render_widget(text, inner);
}

fn draw_controls(frame: &mut Frame, area: Rect) {
    let block = Block::default().title("CONTROLS").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(inner);

    let left = Paragraph::new(vec![
        Line::raw("←/→ move"),
        Line::raw("↓ soft"),
        Line::raw("q/esc quit"),
    ])
    .alignment(Alignment::Left);
    frame.render_widget(left, cols[0]);

    let right = Paragraph::new(vec![
        Line::raw("space slam"),
        Line::raw("p pause"),
        Line::raw("r restart"),
    ])
    .alignment(Alignment::Left);
    frame.render_widget(right, cols[1]);
}
