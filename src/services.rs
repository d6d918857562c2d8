//! Capabilities the game drives but does not own: a screen to draw on,
//! speakers to play through, and a source of key presses.
//!
//! None of these calls report failure back to the game. Implementations
//! log what went wrong and carry on.

use crate::{Coord, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Font {
    pub family: &'static str,
    pub size: u16,
}

pub const DEFAULT_FONT: Font = Font { family: "arial", size: 30 };

pub trait Display {
    fn set_title(&mut self, title: &str);
    fn clear_background(&mut self);
    fn draw_circle(&mut self, center: Position, radius: Coord, color: Color);
    fn draw_text(&mut self, text: &str, position: Position, color: Color, font: &Font);
    /// Push everything drawn since the last call to the screen.
    fn present(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Track {
    Background,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sound {
    Ding,
    Collision,
}

impl Track {
    pub fn resource(&self) -> &'static str {
        match self {
            Track::Background => "resources/backgroundMusic.mp3",
        }
    }
}

impl Sound {
    pub fn resource(&self) -> &'static str {
        match self {
            Sound::Ding => "resources/ding.mp3",
            Sound::Collision => "resources/collision.wav",
        }
    }
}

pub trait Audio {
    fn play_music_loop(&mut self, track: Track);
    fn pause_music(&mut self);
    fn resume_music(&mut self);
    fn play_one_shot(&mut self, sound: Sound);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Pause,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(Key),
    WindowClose,
}

pub trait Input {
    /// Everything that arrived since the last poll. Never blocks.
    fn poll_events(&mut self) -> Vec<InputEvent>;
}
