//! Error types for game construction and input

use strum::Display;
use thiserror::Error;

use crate::mansion::RoomId;

/// Which construction step ran out of memory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ConstructionStep {
    #[strum(to_string = "room")]
    Room,
    #[strum(to_string = "clue node")]
    ClueNode,
    #[strum(to_string = "suspect link")]
    SuspectLink,
}

/// Game errors
#[derive(Debug, Error)]
pub enum DqError {
    #[error("Allocation failed while creating {step}")]
    Allocation { step: ConstructionStep },

    #[error("Input error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown room: {0}")]
    UnknownRoom(RoomId),
}

pub type Result<T> = core::result::Result<T, DqError>;

/// Copy `text` into a freshly reserved string.
///
/// The reservation is fallible so an exhausted heap surfaces as
/// [`DqError::Allocation`] for the given step.
pub(crate) fn alloc_text(text: &str, step: ConstructionStep) -> Result<String> {
    let mut owned = String::new();
    owned
        .try_reserve_exact(text.len())
        .map_err(|_| DqError::Allocation { step })?;
    owned.push_str(text);
    Ok(owned)
}

/// Reserve room for one more element in an arena
pub(crate) fn reserve_slot<T>(arena: &mut Vec<T>, step: ConstructionStep) -> Result<()> {
    arena
        .try_reserve(1)
        .map_err(|_| DqError::Allocation { step })
}

/// Longest prefix of `text` holding at most `max_chars` characters
pub(crate) fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
