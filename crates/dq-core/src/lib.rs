//! dq-core: Core game logic for Detective Quest
//!
//! This crate contains all game logic with no terminal dependencies.
//! Input arrives through the [`InputSource`] trait so sessions can be
//! driven by stdin, a script file, or a test fixture.
//!
//! The pieces, leaf first:
//! - [`mansion`]: the fixed binary tree of rooms
//! - [`clue`]: the room-to-clue catalog and the sorted clue index (BST)
//! - [`suspect`]: the clue-to-suspect hash table with chained buckets
//! - [`exploration`]: the player-driven walk over the mansion
//! - [`accusation`]: evidence counting and the final verdict

pub mod accusation;
pub mod clue;
pub mod exploration;
pub mod input;
pub mod mansion;
pub mod report;
pub mod suspect;

mod consts;
mod error;

pub use accusation::{Accusation, Verdict, evaluate, most_likely_suspect, tally};
pub use clue::{ClueIndex, clue_for_room};
pub use consts::*;
pub use error::{ConstructionStep, DqError, Result};
pub use exploration::{ExploreState, Explorer, RoomVisit};
pub use input::{InputSource, ReaderInput, ScriptedInput};
pub use mansion::{Direction, Mansion, Room, RoomId};
pub use report::SessionReport;
pub use suspect::{SuspectName, SuspectTable};
