//! Summary of a finished session

use serde::Serialize;

use crate::accusation::{Accusation, most_likely_suspect};
use crate::clue::ClueIndex;
use crate::suspect::SuspectTable;

/// Most likely suspect with their evidence count
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lead {
    pub suspect: String,
    pub evidence_count: usize,
}

/// Everything a front end needs to render the end of a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionReport {
    /// Rooms entered, in order
    pub visited: Vec<String>,
    /// Collected clues, alphabetically
    pub clues: Vec<String>,
    pub accusation: Option<Accusation>,
    pub most_likely: Option<Lead>,
}

impl SessionReport {
    pub fn new(
        visited: &[&str],
        clues: &ClueIndex,
        table: &SuspectTable,
        accusation: Option<Accusation>,
    ) -> Self {
        Self {
            visited: visited.iter().map(|name| name.to_string()).collect(),
            clues: clues.iter().map(str::to_string).collect(),
            accusation,
            most_likely: most_likely_suspect(clues, table).map(|(suspect, evidence_count)| Lead {
                suspect: suspect.to_string(),
                evidence_count,
            }),
        }
    }
}
