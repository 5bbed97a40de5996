//! Application state and event dispatch.

use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use derive_getters::Getters;
use ratatui::layout::Rect;
use tictactoe_engine::{GameEngine, Position};
use tracing::{debug, info, instrument};

use super::input::{self, Action};
use super::ui;
use crate::config::AppConfig;

/// Main application state.
///
/// The engine is the single source of truth for the game; the app adds
/// only what the terminal needs on top of it.
#[derive(Debug, Getters)]
pub struct App {
    engine: GameEngine,
    config: AppConfig,
    cursor: Position,
    /// Short message explaining the last refused selection.
    notice: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates an app with a fresh session.
    #[instrument(skip(config))]
    pub fn new(config: AppConfig) -> Self {
        let engine = GameEngine::with_policy(*config.scoring());
        Self {
            engine,
            config,
            cursor: Position::Center,
            notice: None,
            should_quit: false,
        }
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let action = input::action_for_key(key);
        debug!(?key, ?action, "Key pressed");
        self.dispatch(action);
    }

    /// Handles a mouse event. `area` is the full terminal area the last
    /// frame was drawn into.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        if let Some(pos) = ui::cell_at(area, mouse.column, mouse.row) {
            debug!(position = %pos, "Cell clicked");
            self.cursor = pos;
            self.select(pos);
        }
    }

    /// Applies an action.
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Cursor(direction) => {
                self.cursor = input::move_cursor(self.cursor, direction);
            }
            Action::SelectCursor => self.select(self.cursor),
            Action::Select(pos) => {
                self.cursor = pos;
                self.select(pos);
            }
            Action::Restart => self.restart(),
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
            Action::Ignore => {}
        }
    }

    /// Forwards a cell selection to the engine.
    #[instrument(skip(self), fields(position = %pos))]
    fn select(&mut self, pos: Position) {
        let index = pos.to_index();
        self.notice = self.engine.check_move(index).err().map(|e| e.to_string());
        self.engine.apply_move(index);
    }

    fn restart(&mut self) {
        self.engine.restart();
        self.notice = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use tictactoe_engine::{Player, Square};

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_cursor_select_plays_current_player() {
        let mut app = App::new(AppConfig::default());
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.engine().cell(1), Some(Square::Occupied(Player::X)));
        assert_eq!(*app.cursor(), Position::TopCenter);
    }

    #[test]
    fn test_refused_selection_sets_notice() {
        let mut app = App::new(AppConfig::default());
        press(&mut app, KeyCode::Char('5'));
        assert!(app.notice().is_none());
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.notice().as_deref(), Some("Center is already taken"));
        assert_eq!(app.engine().current_player(), Player::O);
    }

    #[test]
    fn test_restart_clears_notice_and_alternates() {
        let mut app = App::new(AppConfig::default());
        for c in ['1', '4', '2', '5', '3'] {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.engine().score().x, 1);
        press(&mut app, KeyCode::Char('9'));
        assert!(app.notice().is_some());

        press(&mut app, KeyCode::Char('r'));
        assert!(app.notice().is_none());
        assert_eq!(app.engine().winner(), None);
        assert_eq!(app.engine().current_player(), Player::O);
        assert_eq!(app.engine().score().x, 1);
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(AppConfig::default());
        press(&mut app, KeyCode::Char('q'));
        assert!(*app.should_quit());
    }

    #[test]
    fn test_left_click_selects_cell() {
        let mut app = App::new(AppConfig::default());
        let area = Rect::new(0, 0, 60, 24);
        let target = ui::cell_rects(area)[Position::BottomLeft.to_index()];

        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: target.x + target.width / 2,
            row: target.y + target.height / 2,
            modifiers: KeyModifiers::NONE,
        };
        app.handle_mouse(click, area);

        assert_eq!(app.engine().cell(6), Some(Square::Occupied(Player::X)));
        assert_eq!(*app.cursor(), Position::BottomLeft);
    }

    #[test]
    fn test_click_outside_board_does_nothing() {
        let mut app = App::new(AppConfig::default());
        let area = Rect::new(0, 0, 60, 24);
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        app.handle_mouse(click, area);
        assert!((0..9).all(|i| app.engine().cell(i) == Some(Square::Empty)));
    }
}
