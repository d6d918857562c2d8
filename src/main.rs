mod audio;
mod config;
mod error;
mod food;
mod game;
mod services;
mod snake;
mod term;

use std::{env, fs::File, str::FromStr};

use log::{info, LevelFilter};
use simplelog::{Config, WriteLogger};

use crate::audio::TermAudio;
use crate::config::{GameConfig, CELL_SIZE, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::error::GameError;
use crate::game::Game;
use crate::term::{TermInput, TermManager};

/// Pixel coordinate on the play area.
pub type Coord = i32;
pub type Position = (Coord, Coord);

const LOG_LEVEL_VAR: &str = "SNAKE_LOG";
const LOG_FILE_VAR: &str = "SNAKE_LOG_FILE";
const DEFAULT_LOG_FILE: &str = "snake.log";

fn main() -> Result<(), GameError> {
    // The terminal is the game screen, so logs go to a file
    let level = env::var(LOG_LEVEL_VAR)
        .ok()
        .and_then(|s| LevelFilter::from_str(&s).ok())
        .unwrap_or(LevelFilter::Info);
    let path = env::var(LOG_FILE_VAR).unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
    WriteLogger::init(level, Config::default(), File::create(&path)?)?;

    let config = GameConfig::new(CELL_SIZE, WINDOW_WIDTH, WINDOW_HEIGHT)?;
    info!("Starting snake on a {}x{} grid", config.columns(), config.rows());

    let mut term = TermManager::new(&config)?;
    term.setup()?;

    let mut game = Game::new(config, term, TermAudio::new(), rand::thread_rng());
    game.run(&mut TermInput);

    info!("Quit with score {} while {:?}", game.score(), game.state());
    game.display_mut().restore()
}
