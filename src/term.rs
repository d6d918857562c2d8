use crate::config::{GameConfig, BACKGROUND_COLOR};
use crate::error::GameError;
use crate::services::{self, Display, Font, Input, InputEvent, Key};
use crate::{Coord, Position};
use std::{io::{Stdout, Write, stdout}, time::Duration};

use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, read, poll};
use log::{trace, warn};

// A grid cell is two characters wide so it comes out roughly square
const COLUMNS_PER_CELL: Coord = 2;

const DISC: &str = "██";
const DOT: &str = "()";

/// Draws the play area on the terminal, one grid cell per two columns.
pub struct TermManager {
    width: u16,
    height: u16,
    cell_size: Coord,
    needed: (u16, u16),
    stdout: Stdout,
}

impl TermManager {
    pub fn new(config: &GameConfig) -> Result<Self, GameError> {
        let (width, height) = terminal::size()?;
        let needed = (
            (config.columns() * COLUMNS_PER_CELL) as u16,
            config.rows() as u16,
        );
        Ok(TermManager { width, height, cell_size: config.cell_size(), needed, stdout: stdout() })
    }

    pub fn setup(&mut self) -> Result<(), GameError> {
        execute!(self.stdout, EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking)?;

        if self.width < self.needed.0 || self.height < self.needed.1 {
            warn!(
                "Terminal is {}x{} but the play area needs {}x{}, parts of it will be cut off",
                self.width, self.height, self.needed.0, self.needed.1
            );
        }

        Ok(())
    }

    pub fn restore(&mut self) -> Result<(), GameError> {
        terminal::disable_raw_mode()?;
        execute!(
            self.stdout,
            style::ResetColor,
            cursor::Show,
            cursor::EnableBlinking,
            LeaveAlternateScreen
        )?;
        Ok(())
    }

    ///////////////////////////////////////////////////////////////////////////

    /// Terminal cell holding the given pixel, if it is on screen.
    fn locate(&self, (x, y): Position) -> Option<(u16, u16)> {
        if x < 0 || y < 0 {
            return None;
        }

        let col = x * COLUMNS_PER_CELL / self.cell_size;
        let row = y / self.cell_size;
        if col >= self.width as Coord || row >= self.height as Coord {
            return None;
        }

        Some((col as u16, row as u16))
    }

    fn print_at(&mut self, pos: Position, text: &str, color: services::Color) {
        let (col, row) = match self.locate(pos) {
            Some(cell) => cell,
            None => {
                trace!("Skipping off-screen draw at {:?}", pos);
                return;
            }
        };

        let visible = self.visible_part(col, text);
        let res = queue!(
            self.stdout,
            cursor::MoveTo(col, row),
            style::SetForegroundColor(to_term_color(color)),
            style::Print(visible)
        );
        log_failure(res, "draw");
    }

    /// The part of `text` that fits between `col` and the right edge.
    fn visible_part<'a>(&self, col: u16, text: &'a str) -> &'a str {
        let room = self.width.saturating_sub(col) as usize;
        match text.char_indices().nth(room) {
            Some((end, _)) => &text[..end],
            None => text,
        }
    }
}

impl Display for TermManager {
    fn set_title(&mut self, title: &str) {
        log_failure(execute!(self.stdout, terminal::SetTitle(title)), "set title");
    }

    fn clear_background(&mut self) {
        let res = queue!(
            self.stdout,
            style::SetBackgroundColor(to_term_color(BACKGROUND_COLOR)),
            terminal::Clear(ClearType::All)
        );
        log_failure(res, "clear");
    }

    fn draw_circle(&mut self, center: Position, radius: Coord, color: services::Color) {
        let glyph = if radius >= self.cell_size / 2 { DISC } else { DOT };
        self.print_at(center, glyph, color);
    }

    fn draw_text(&mut self, text: &str, position: Position, color: services::Color, font: &Font) {
        // Terminals have a single font
        trace!("Drawing {:?} ({} {}pt) at {:?}", text, font.family, font.size, position);
        self.print_at(position, text, color);
    }

    fn present(&mut self) {
        if let Err(e) = self.stdout.flush() {
            warn!("Error flushing: {}", e);
        }
    }
}

/// Reads whatever keys are waiting on the terminal.
pub struct TermInput;

impl Input for TermInput {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        let mut events = vec![];

        loop {
            match poll(Duration::from_millis(1)) {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => {
                    warn!("Error polling input: {}", e);
                    break;
                }
            }

            match read() {
                Ok(Event::Key(ev)) => events.extend(key_event_to_input(&ev)),
                Ok(_) => {}
                Err(e) => {
                    warn!("Error reading input: {}", e);
                    break;
                }
            }
        }

        events
    }
}

fn key_event_to_input(ev: &KeyEvent) -> Option<InputEvent> {
    if is_ctrl_c(ev) {
        return Some(InputEvent::WindowClose);
    }

    let key = match ev.code {
        KeyCode::Char('w') | KeyCode::Up => Key::Up,
        KeyCode::Char('a') | KeyCode::Left => Key::Left,
        KeyCode::Char('s') | KeyCode::Down => Key::Down,
        KeyCode::Char('d') | KeyCode::Right => Key::Right,
        KeyCode::Char(' ') => Key::Pause,
        KeyCode::Esc => Key::Quit,
        _ => return None,
    };
    Some(InputEvent::KeyDown(key))
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}

fn to_term_color(services::Color(r, g, b): services::Color) -> style::Color {
    style::Color::Rgb { r, g, b }
}

fn log_failure(res: crossterm::Result<()>, what: &str) {
    if let Err(e) = res {
        warn!("Terminal {} failed: {}", what, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager(width: u16, height: u16) -> TermManager {
        let config = GameConfig::default();
        TermManager { width, height, cell_size: config.cell_size(), needed: (80, 24), stdout: stdout() }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent { code, modifiers: KeyModifiers::NONE }
    }

    #[test]
    fn pixels_map_to_double_width_cells() {
        let term = manager(80, 24);
        assert_eq!(term.locate((25, 25)), Some((2, 1)));
        assert_eq!(term.locate((975, 575)), Some((78, 23)));
        assert_eq!(term.locate((850, 10)), Some((68, 0)));
    }

    #[test]
    fn off_screen_pixels_are_dropped() {
        let term = manager(80, 24);
        assert_eq!(term.locate((-1, -1)), None);
        assert_eq!(term.locate((1000, 300)), None);
        assert_eq!(term.locate((500, 600)), None);
        assert_eq!(manager(40, 24).locate((500, 300)), None);
    }

    #[test]
    fn text_is_cut_at_the_right_edge() {
        let term = manager(40, 24);
        let line = "Press Space to play again. Press Escape to Exit!";
        let (col, _) = term.locate((200, 300)).unwrap();
        assert_eq!(col, 16);
        assert_eq!(term.visible_part(col, line), "Press Space to play agai");
        assert_eq!(term.visible_part(col, "Score: 3"), "Score: 3");
        assert_eq!(term.visible_part(39, "██"), "█");
        assert_eq!(term.visible_part(40, "██"), "");
    }

    #[test]
    fn keys_map_to_game_input() {
        assert_eq!(key_event_to_input(&key(KeyCode::Up)), Some(InputEvent::KeyDown(Key::Up)));
        assert_eq!(key_event_to_input(&key(KeyCode::Char('a'))), Some(InputEvent::KeyDown(Key::Left)));
        assert_eq!(key_event_to_input(&key(KeyCode::Char(' '))), Some(InputEvent::KeyDown(Key::Pause)));
        assert_eq!(key_event_to_input(&key(KeyCode::Esc)), Some(InputEvent::KeyDown(Key::Quit)));
        assert_eq!(key_event_to_input(&key(KeyCode::Enter)), None);

        let ctrl_c = KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL };
        assert_eq!(key_event_to_input(&ctrl_c), Some(InputEvent::WindowClose));
    }
}
