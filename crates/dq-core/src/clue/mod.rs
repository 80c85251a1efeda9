//! Clues: where they are found and how the collected ones are kept

pub mod catalog;
mod index;

pub use catalog::{CATALOG, clue_for_room};
pub use index::{ClueIndex, InOrder};
