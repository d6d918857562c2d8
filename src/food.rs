use rand::Rng;

use crate::config::{GameConfig, FOOD_COLOR};
use crate::services::Display;
use crate::Position;

#[derive(Clone, Debug, PartialEq)]
pub struct Food {
    position: Position,
}

impl Food {
    pub fn new<R: Rng>(rng: &mut R, config: &GameConfig) -> Self {
        Food { position: random_cell(rng, config) }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    #[cfg(test)]
    pub fn place_at(&mut self, position: Position) {
        self.position = position;
    }

    /// Jumps to a new random cell. The snake's body is not avoided.
    pub fn relocate<R: Rng>(&mut self, rng: &mut R, config: &GameConfig) {
        self.position = random_cell(rng, config);
    }

    pub fn draw<D: Display>(&self, display: &mut D, config: &GameConfig) {
        display.draw_circle(self.position, config.cell_size() / 2 - 2, FOOD_COLOR);
    }
}

// Any cell off the outer ring
fn random_cell<R: Rng>(rng: &mut R, config: &GameConfig) -> Position {
    let size = config.cell_size();
    (
        rng.gen_range(1..config.columns()) * size,
        rng.gen_range(1..config.rows()) * size,
    )
}
