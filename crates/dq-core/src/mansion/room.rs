//! Room nodes and navigation directions

use std::fmt;

use strum::{Display, EnumIter};

use crate::consts::{LEFT_MARKER, RIGHT_MARKER};

/// Index of a room inside its [`Mansion`](super::Mansion)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(pub usize);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which child to walk into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Direction {
    #[strum(to_string = "esquerda")]
    Left,
    #[strum(to_string = "direita")]
    Right,
}

impl Direction {
    /// Parse a navigation marker; anything unrecognised means "leave"
    pub const fn from_marker(marker: char) -> Option<Direction> {
        match marker {
            LEFT_MARKER => Some(Direction::Left),
            RIGHT_MARKER => Some(Direction::Right),
            _ => None,
        }
    }

    pub const fn marker(&self) -> char {
        match self {
            Direction::Left => LEFT_MARKER,
            Direction::Right => RIGHT_MARKER,
        }
    }
}

/// A room of the mansion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    /// Unique room name
    pub name: String,
    pub left: Option<RoomId>,
    pub right: Option<RoomId>,
}

impl Room {
    pub(crate) fn new(name: String) -> Self {
        Self {
            name,
            left: None,
            right: None,
        }
    }

    pub fn child(&self, direction: Direction) -> Option<RoomId> {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}
