use std::thread::sleep;

use log::{debug, info};
use rand::Rng;

use crate::config::{GameConfig, OVERLAY_COLOR, SCORE_COLOR, SCORE_POSITION};
use crate::food::Food;
use crate::services::{Audio, Display, Input, InputEvent, Key, Sound, Track, DEFAULT_FONT};
use crate::snake::{Direction, Snake};
use crate::Coord;

const TITLE: &str = "Snake Game";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    Running,
    Paused,
    /// Frozen on the game-over screen; a fresh round is already set up.
    GameOver,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Collision {
    Boundary,
    SelfBite,
}

/// Outcome of a single simulation step
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickResult {
    Continue,
    Collided(Collision),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

pub struct Game<D, A, R> {
    config: GameConfig,
    snake: Snake,
    food: Food,
    state: GameState,
    display: D,
    audio: A,
    rng: R,
}

impl<D: Display, A: Audio, R: Rng> Game<D, A, R> {
    pub fn new(config: GameConfig, mut display: D, mut audio: A, mut rng: R) -> Self {
        display.set_title(TITLE);
        audio.play_music_loop(Track::Background);

        let snake = Snake::new(config.spawn());
        let food = Food::new(&mut rng, &config);

        let mut game = Game { config, snake, food, state: GameState::Running, display, audio, rng };
        game.snake.draw(&mut game.display, config.cell_size());
        game.food.draw(&mut game.display, &config);
        game.display.present();
        game
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn score(&self) -> usize {
        self.snake.len()
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// Polls input, steps the simulation and sleeps, until asked to quit.
    pub fn run<I: Input>(&mut self, input: &mut I) {
        loop {
            for event in input.poll_events() {
                if self.handle_event(event) == Control::Quit {
                    info!("Leaving the game loop");
                    return;
                }
            }

            self.tick();
            sleep(self.config.tick_interval());
        }
    }

    pub fn handle_event(&mut self, event: InputEvent) -> Control {
        match event {
            InputEvent::WindowClose | InputEvent::KeyDown(Key::Quit) => Control::Quit,
            InputEvent::KeyDown(Key::Pause) => {
                self.toggle_pause();
                Control::Continue
            }
            InputEvent::KeyDown(key) => {
                if self.state == GameState::Running {
                    if let Some(dir) = key_direction(key) {
                        self.snake.set_direction(dir);
                    }
                }
                Control::Continue
            }
        }
    }

    /// Runs one step if the game is live, ending the round on a collision.
    pub fn tick(&mut self) {
        if self.state != GameState::Running {
            return;
        }

        if let TickResult::Collided(collision) = self.play() {
            self.game_over(collision);
        }
    }

    pub fn play(&mut self) -> TickResult {
        let cell_size = self.config.cell_size();

        self.display.clear_background();
        self.snake.move_step(cell_size);
        self.snake.draw(&mut self.display, cell_size);
        self.food.draw(&mut self.display, &self.config);
        self.draw_score();
        self.display.present();

        // Eating is checked after the move, before the collision checks
        self.eat_food();

        match self.collision() {
            Some(collision) => {
                self.audio.play_one_shot(Sound::Collision);
                TickResult::Collided(collision)
            }
            None => TickResult::Continue,
        }
    }

    pub fn toggle_pause(&mut self) {
        match self.state {
            GameState::Running => {
                debug!("Paused at score {}", self.score());
                self.state = GameState::Paused;
                self.audio.pause_music();
                self.show_message(&["   Game Paused !", "Press Space to Continue "], self.config.width() / 2);
            }
            GameState::Paused | GameState::GameOver => {
                debug!("Resumed");
                self.state = GameState::Running;
                self.audio.resume_music();
            }
        }
    }

    ///////////////////////////////////////////////////////////////////////////

    fn eat_food(&mut self) -> bool {
        if self.snake.head() != self.food.position() {
            return false;
        }

        self.audio.play_one_shot(Sound::Ding);
        self.snake.grow();
        self.food.relocate(&mut self.rng, &self.config);
        debug!(
            "Ate food heading {:?}, length {}, food now at {:?}",
            self.snake.get_direction(),
            self.snake.len(),
            self.food.position()
        );
        true
    }

    fn collision(&self) -> Option<Collision> {
        if self.config.is_out_of_bounds(self.snake.head()) {
            Some(Collision::Boundary)
        } else if self.snake.bites_itself() {
            Some(Collision::SelfBite)
        } else {
            None
        }
    }

    fn game_over(&mut self, collision: Collision) {
        let score = self.score();
        info!("Game over ({:?}) with score {}", collision, score);

        self.display.clear_background();
        self.show_message(
            &[
                &*format!("Game Over!  Your score is {}", score),
                "Press Space to play again. Press Escape to Exit!",
            ],
            200,
        );
        self.audio.pause_music();

        self.state = GameState::GameOver;
        self.restart();
    }

    fn restart(&mut self) {
        self.snake = Snake::new(self.config.spawn());
        self.food = Food::new(&mut self.rng, &self.config);
    }

    fn draw_score(&mut self) {
        let text = format!("Score: {}", self.score());
        self.display.draw_text(&text, SCORE_POSITION, SCORE_COLOR, &DEFAULT_FONT);
    }

    // Two lines, the first 50px above the middle of the screen
    fn show_message(&mut self, lines: &[&str; 2], x: Coord) {
        let middle = self.config.height() / 2;
        self.display.draw_text(lines[0], (x, middle - 50), OVERLAY_COLOR, &DEFAULT_FONT);
        self.display.draw_text(lines[1], (x, middle), OVERLAY_COLOR, &DEFAULT_FONT);
        self.display.present();
    }
}

fn key_direction(key: Key) -> Option<Direction> {
    match key {
        Key::Up => Some(Direction::Up),
        Key::Down => Some(Direction::Down),
        Key::Left => Some(Direction::Left),
        Key::Right => Some(Direction::Right),
        Key::Pause | Key::Quit => None,
    }
}
