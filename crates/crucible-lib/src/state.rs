//! Search vertices: a grid position augmented with movement history.

use std::fmt;

use serde::Serialize;

use crate::grid::Cell;

/// Cardinal movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit `(row, col)` offset of one step in this direction.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    fn bit(self) -> u8 {
        match self {
            Direction::Up => 0b0001,
            Direction::Down => 0b0010,
            Direction::Left => 0b0100,
            Direction::Right => 0b1000,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(value)
    }
}

/// Set of directions, iterated in [`Direction::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DirectionSet(u8);

impl DirectionSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn all() -> Self {
        Self(0b1111)
    }

    pub fn only(direction: Direction) -> Self {
        Self(direction.bit())
    }

    #[must_use]
    pub fn with(self, direction: Direction) -> Self {
        Self(self.0 | direction.bit())
    }

    #[must_use]
    pub fn without(self, direction: Direction) -> Self {
        Self(self.0 & !direction.bit())
    }

    pub fn contains(self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL
            .into_iter()
            .filter(move |direction| self.contains(*direction))
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        iter.into_iter()
            .fold(DirectionSet::empty(), DirectionSet::with)
    }
}

/// Augmented search vertex.
///
/// The same cell reached with a different heading or run length is a
/// distinct state because its legal continuations differ. The derived
/// ordering (row, col, heading, run) is the frontier tiebreak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct State {
    pub cell: Cell,
    /// `None` only for the synthetic start state.
    pub heading: Option<Direction>,
    /// Consecutive steps already taken along `heading`.
    pub run: u32,
}

impl State {
    /// Synthetic start state: no heading, no run.
    pub fn start(cell: Cell) -> Self {
        Self {
            cell,
            heading: None,
            run: 0,
        }
    }

    /// State reached by stepping in `direction` onto `cell`.
    ///
    /// The run restarts at 1 on a turn and grows by one when the heading is kept.
    pub fn advance(&self, direction: Direction, cell: Cell) -> Self {
        let run = if self.heading == Some(direction) {
            self.run + 1
        } else {
            1
        };
        Self {
            cell,
            heading: Some(direction),
            run,
        }
    }
}
