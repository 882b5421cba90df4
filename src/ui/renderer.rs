use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::constants::{COLS, ROWS};
use crate::game::{Game, GameState};
use crate::ui::surface::CellGrid;

pub fn ui(f: &mut Frame, game: &Game) {
    let size = f.size();

    let board_height = ROWS as u16 + 2; // rows + borders
    let board_width = COLS as u16 * 2 + 2; // 2 chars per block + borders

    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(board_height),
            Constraint::Min(1),
        ])
        .split(size);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(board_width),
            Constraint::Length(20), // Side panel
            Constraint::Min(1),
        ])
        .split(vertical_chunks[1]);

    let board_area = horizontal_chunks[1];
    let info_area = horizontal_chunks[2];

    render_board(f, game, board_area);
    render_info(f, game, info_area);

    match game.game_state {
        GameState::Paused => render_paused_overlay(f, board_area),
        GameState::GameOver(final_score) => {
            render_game_over_overlay(f, final_score, game.score.best(), board_area)
        }
        GameState::Running => {}
    }
}

fn render_board(f: &mut Frame, game: &Game, area: Rect) {
    let mut grid = CellGrid::new();
    game.draw(&mut grid);

    let board_lines: Vec<Line> = grid
        .rows()
        .enumerate()
        .map(|(y, row)| {
            let spans: Vec<Span> = row
                .iter()
                .enumerate()
                .map(|(x, cell)| match cell {
                    Some(color) => Span::styled("██", Style::default().fg(*color)),
                    None if (x + y) % 2 == 0 => {
                        Span::styled("░░", Style::default().fg(Color::DarkGray))
                    }
                    None => Span::raw("  "),
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let board_widget = Paragraph::new(board_lines)
        .block(Block::default()
               .borders(Borders::ALL)
               .title("blockfall"));

    f.render_widget(board_widget, area);
}

fn render_info(f: &mut Frame, game: &Game, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),  // Score
            Constraint::Length(9),  // Controls
            Constraint::Min(1),
        ])
        .split(area);

    render_score(f, game, chunks[0]);
    render_controls(f, game, chunks[1]);
}

fn render_score(f: &mut Frame, game: &Game, area: Rect) {
    let score_text = vec![
        Line::from(vec![Span::styled("Score", Style::default().fg(Color::Cyan))]),
        Line::from(vec![Span::raw(game.score.current().to_string())]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::styled("Best", Style::default().fg(Color::Yellow))]),
        Line::from(vec![Span::raw(game.score.best().to_string())]),
    ];

    let score_widget = Paragraph::new(score_text)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);

    f.render_widget(score_widget, area);
}

fn render_controls(f: &mut Frame, game: &Game, area: Rect) {
    let controls_text = vec![
        Line::from(vec![Span::raw("←/→  move")]),
        Line::from(vec![Span::raw("↓    drop")]),
        Line::from(vec![Span::raw("↑    rotate")]),
        Line::from(vec![
            Span::raw("p    "),
            Span::styled(game.pause_label(), Style::default().fg(Color::Green)),
        ]),
        Line::from(vec![Span::raw("q    quit")]),
    ];

    let controls_widget = Paragraph::new(controls_text)
        .block(Block::default().borders(Borders::ALL).title("Keys"));

    f.render_widget(controls_widget, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

fn render_paused_overlay(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(100, 30, area);
    f.render_widget(Clear, popup_area);

    let paused_text = vec![
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::styled("PAUSED", Style::default().fg(Color::Yellow))]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw("Press P to resume")]),
    ];

    let paused_widget = Paragraph::new(paused_text)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);

    f.render_widget(paused_widget, popup_area);
}

fn render_game_over_overlay(f: &mut Frame, final_score: u32, best: u32, area: Rect) {
    let popup_area = centered_rect(100, 45, area);
    f.render_widget(Clear, popup_area);

    let game_over_text = vec![
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::styled("GAME OVER", Style::default().fg(Color::Red))]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw(format!("Score: {}", final_score))]),
        Line::from(vec![Span::raw(format!("Best: {}", best))]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw("Enter to restart")]),
    ];

    let game_over_widget = Paragraph::new(game_over_text)
        .block(Block::default().borders(Borders::ALL).title("Game Over"))
        .alignment(Alignment::Center);

    f.render_widget(game_over_widget, popup_area);
}
