use crate::config::{BODY_COLOR, HEAD_COLOR};
use crate::services::Display;
use crate::{Coord, Position};
use Direction::*;

/// Placeholder for a freshly grown tail until the next step fills it in.
pub const UNSET: Position = (-1, -1);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub fn opposite(&self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Snake {
    // body[0] is the head
    body: Vec<Position>,
    direction: Direction,
}

impl Snake {
    pub fn new(spawn: Position) -> Self {
        Snake { body: vec![spawn], direction: Down }
    }

    #[cfg(test)]
    pub fn from_body(body: Vec<Position>, direction: Direction) -> Self {
        assert!(!body.is_empty());
        Snake { body, direction }
    }

    pub fn body(&self) -> &[Position] {
        &self.body
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn get_direction(&self) -> Direction {
        self.direction
    }

    /// Turns the head, unless that would fold it straight back onto the neck.
    pub fn set_direction(&mut self, new_direction: Direction) {
        if new_direction != self.direction.opposite() {
            self.direction = new_direction;
        }
    }

    /// Moves one cell: each segment takes its predecessor's old place, then
    /// the head steps along the current direction.
    pub fn move_step(&mut self, cell_size: Coord) {
        for i in (1..self.body.len()).rev() {
            self.body[i] = self.body[i - 1];
        }

        let head = &mut self.body[0];
        match self.direction {
            Up => head.1 -= cell_size,
            Down => head.1 += cell_size,
            Left => head.0 -= cell_size,
            Right => head.0 += cell_size,
        }
    }

    /// Adds a tail segment. It sits at `UNSET` until the next `move_step`.
    pub fn grow(&mut self) {
        self.body.push(UNSET);
    }

    /// Whether the head overlaps the body. The three segments nearest the
    /// head can never be reached by it, so they are skipped.
    pub fn bites_itself(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(3).any(|&segment| segment == head)
    }

    pub fn draw<D: Display>(&self, display: &mut D, cell_size: Coord) {
        let radius = cell_size / 2;
        display.draw_circle(self.head(), radius, HEAD_COLOR);
        for &segment in self.body().iter().skip(1) {
            display.draw_circle(segment, radius, BODY_COLOR);
        }
    }
}
