use std::time::Duration;

use crate::error::ConfigError;
use crate::services::Color;
use crate::{Coord, Position};

pub const CELL_SIZE: Coord = 25;
pub const WINDOW_WIDTH: Coord = 1000;
pub const WINDOW_HEIGHT: Coord = 600;
pub const TICK_INTERVAL_MS: u64 = 220;

// Smallest grid with room to turn away from the edge
const MIN_CELLS: Coord = 3;

pub const BACKGROUND_COLOR: Color = Color(41, 52, 94);
pub const FOOD_COLOR: Color = Color(255, 0, 255);
pub const HEAD_COLOR: Color = Color(255, 0, 0);
pub const BODY_COLOR: Color = Color(255, 255, 0);
pub const SCORE_COLOR: Color = Color(200, 200, 200);
pub const OVERLAY_COLOR: Color = Color(255, 255, 255);

pub const SCORE_POSITION: Position = (850, 10);

/// Play-area geometry and pacing, fixed for the lifetime of a game.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    cell_size: Coord,
    width: Coord,
    height: Coord,
    tick_interval: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            cell_size: CELL_SIZE,
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            tick_interval: Duration::from_millis(TICK_INTERVAL_MS),
        }
    }
}

impl GameConfig {
    pub fn new(cell_size: Coord, width: Coord, height: Coord) -> Result<Self, ConfigError> {
        if cell_size <= 0 {
            return Err(ConfigError::InvalidCellSize(cell_size));
        }

        for (axis, length) in [("width", width), ("height", height)].iter().copied() {
            if length % cell_size != 0 {
                return Err(ConfigError::Misaligned { axis, length, cell_size });
            }
            let cells = length / cell_size;
            if cells < MIN_CELLS {
                return Err(ConfigError::TooSmall { axis, cells, min: MIN_CELLS });
            }
        }

        Ok(GameConfig { cell_size, width, height, ..GameConfig::default() })
    }

    pub fn cell_size(&self) -> Coord {
        self.cell_size
    }

    pub fn width(&self) -> Coord {
        self.width
    }

    pub fn height(&self) -> Coord {
        self.height
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub fn columns(&self) -> Coord {
        self.width / self.cell_size
    }

    pub fn rows(&self) -> Coord {
        self.height / self.cell_size
    }

    /// Where a fresh snake's head starts.
    pub fn spawn(&self) -> Position {
        (self.cell_size, self.cell_size)
    }

    pub fn is_out_of_bounds(&self, (x, y): Position) -> bool {
        x <= 0 || x >= self.width || y <= 0 || y >= self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_the_classic_window() {
        let config = GameConfig::default();
        assert_eq!(config.columns(), 40);
        assert_eq!(config.rows(), 24);
        assert_eq!(config.spawn(), (25, 25));
        assert_eq!(config.tick_interval(), Duration::from_millis(220));
    }

    #[test]
    fn rejects_bad_geometry() {
        assert_eq!(GameConfig::new(0, 100, 100), Err(ConfigError::InvalidCellSize(0)));
        assert!(matches!(
            GameConfig::new(10, 105, 100),
            Err(ConfigError::Misaligned { axis: "width", .. })
        ));
        assert!(matches!(
            GameConfig::new(10, 100, 20),
            Err(ConfigError::TooSmall { axis: "height", cells: 2, .. })
        ));
        assert!(GameConfig::new(10, 30, 30).is_ok());
    }

    #[test]
    fn bounds_are_exclusive_on_both_edges() {
        let config = GameConfig::default();
        assert!(config.is_out_of_bounds((0, 300)));
        assert!(config.is_out_of_bounds((1000, 300)));
        assert!(config.is_out_of_bounds((500, 0)));
        assert!(config.is_out_of_bounds((500, 600)));
        assert!(!config.is_out_of_bounds((25, 300)));
        assert!(!config.is_out_of_bounds((975, 300)));
        assert!(!config.is_out_of_bounds((500, 25)));
        assert!(!config.is_out_of_bounds((500, 575)));
    }
}
