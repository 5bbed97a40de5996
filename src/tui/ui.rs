//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use tictactoe_engine::{Player, Position, Square};

use super::app::App;

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3;

/// Screen regions, top to bottom.
struct Regions {
    title: Rect,
    score: Rect,
    turn: Rect,
    board: Rect,
    status: Rect,
    help: Rect,
}

fn regions(area: Rect) -> Regions {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),         // Title
            Constraint::Length(3),         // Score
            Constraint::Length(1),         // Turn
            Constraint::Min(BOARD_HEIGHT), // Board
            Constraint::Length(1),         // Status
            Constraint::Length(1),         // Help
        ])
        .split(area);

    Regions {
        title: chunks[0],
        score: chunks[1],
        turn: chunks[2],
        board: center_rect(chunks[3], BOARD_WIDTH, BOARD_HEIGHT),
        status: chunks[4],
        help: chunks[5],
    }
}

/// Screen rectangles of the nine cells, in index order, for a frame of
/// size `area`.
pub fn cell_rects(area: Rect) -> [Rect; 9] {
    let board = regions(area).board;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(CELL_HEIGHT); 3])
        .split(board);

    let mut cells = [Rect::default(); 9];
    for (r, row) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(CELL_WIDTH); 3])
            .split(*row);
        for (c, col) in cols.iter().enumerate() {
            cells[r * 3 + c] = *col;
        }
    }
    cells
}

/// The cell under a terminal coordinate, if any.
pub fn cell_at(area: Rect, column: u16, row: u16) -> Option<Position> {
    cell_rects(area)
        .iter()
        .position(|rect| {
            column >= rect.x
                && column < rect.x + rect.width
                && row >= rect.y
                && row < rect.y + rect.height
        })
        .and_then(Position::from_index)
}

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let regions = regions(area);

    let title = Paragraph::new("Tic-tac-toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, regions.title);

    draw_score(frame, regions.score, app);
    draw_turn(frame, regions.turn, app);

    for (pos, rect) in Position::ALL.iter().zip(cell_rects(area)) {
        draw_cell(frame, rect, app, *pos);
    }

    let status = Paragraph::new(status_text(app))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center);
    frame.render_widget(status, regions.status);

    let help = Paragraph::new("arrows/hjkl move · enter/1-9/click play · r restart · q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, regions.help);
}

fn draw_score(frame: &mut Frame, area: Rect, app: &App) {
    let score = app.engine().score();
    let x_style = mark_style(app, Player::X);
    let o_style = mark_style(app, Player::O);

    let line = Line::from(vec![
        Span::styled("X", x_style),
        Span::raw(format!(": {}    ", score.get(Player::X))),
        Span::styled("O", o_style),
        Span::raw(format!(": {}", score.get(Player::O))),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title("Score");
    let paragraph = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(block);

    frame.render_widget(paragraph, center_rect(area, BOARD_WIDTH.max(24), 3));
}

fn draw_turn(frame: &mut Frame, area: Rect, app: &App) {
    let engine = app.engine();
    let player = engine.current_display_player();

    let mut spans = Vec::new();
    if engine.winner().is_some() {
        spans.push(Span::styled(
            " Winner ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::raw("Player "));
    spans.push(Span::styled(player.to_string(), mark_style(app, player)));

    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let engine = app.engine();
    let index = pos.to_index();
    let on_winning_line = engine
        .winner()
        .and_then(|w| w.line())
        .is_some_and(|line| line.contains(pos));

    let (text, text_style) = match engine.board().get(pos) {
        Square::Occupied(player) => (player.to_string(), mark_style(app, player)),
        Square::Empty => ((index + 1).to_string(), Style::default().fg(Color::DarkGray)),
    };

    let border_style = if pos == *app.cursor() {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else if engine.is_cell_clickable(index) {
        Style::default().fg(Color::Gray)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    if pos == *app.cursor() {
        block = block.border_type(BorderType::Thick);
    }

    let mut paragraph = Paragraph::new(Line::from(Span::styled(text, text_style)))
        .alignment(Alignment::Center)
        .block(block);
    if on_winning_line {
        paragraph = paragraph.style(Style::default().bg(Color::Green));
    }

    frame.render_widget(paragraph, area);
}

fn status_text(app: &App) -> String {
    if let Some(notice) = app.notice() {
        return notice.clone();
    }
    match app.engine().winner() {
        Some(winner) => match winner.line() {
            Some(line) => format!("{} takes {} - press r for the next round", winner.player, line),
            None => format!("{} wins - press r for the next round", winner.player),
        },
        None => String::new(),
    }
}

fn mark_style(app: &App, player: Player) -> Style {
    Style::default()
        .fg(app.config().player_color(player))
        .add_modifier(Modifier::BOLD)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height.min(area.height)),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width.min(area.width)),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
