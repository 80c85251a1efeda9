//! Player-driven walk through the mansion
//!
//! The engine is a two-state machine: either standing in a room or done.
//! Entering a room looks its clue up in the catalog and records it in the
//! session's [`ClueIndex`]; a direction choice then moves to a child room.
//! Anything other than a direction with a room behind it ends the walk.

use tracing::{debug, info};

use crate::clue::{ClueIndex, clue_for_room};
use crate::error::{DqError, Result};
use crate::input::InputSource;
use crate::mansion::{Direction, Mansion, RoomId};

/// Where the explorer stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExploreState {
    AtRoom(RoomId),
    Exited,
}

/// What happened on entering a room
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomVisit<'m> {
    pub room: &'m str,
    /// Clue hidden in the room, if any
    pub clue: Option<&'static str>,
    /// `false` when the clue was already in the index
    pub newly_recorded: bool,
}

/// An exploration session over a borrowed mansion
#[derive(Debug)]
pub struct Explorer<'m> {
    mansion: &'m Mansion,
    state: ExploreState,
    clues: ClueIndex,
    visited: Vec<RoomId>,
}

impl<'m> Explorer<'m> {
    /// Start at the mansion's entrance with an empty clue index
    pub fn new(mansion: &'m Mansion) -> Self {
        Self {
            mansion,
            state: ExploreState::AtRoom(mansion.root()),
            clues: ClueIndex::new(),
            visited: Vec::new(),
        }
    }

    pub fn state(&self) -> ExploreState {
        self.state
    }

    /// Search the current room for its clue.
    ///
    /// Returns `None` once the walk is over.
    pub fn enter(&mut self) -> Result<Option<RoomVisit<'m>>> {
        let ExploreState::AtRoom(id) = self.state else {
            return Ok(None);
        };
        let mansion = self.mansion;
        let room = mansion.room(id).ok_or(DqError::UnknownRoom(id))?;
        self.visited.push(id);

        let clue = clue_for_room(&room.name);
        let newly_recorded = match clue {
            Some(text) => self.clues.insert(text)?,
            None => false,
        };
        debug!(room = %room.name, clue, newly_recorded, "room entered");

        Ok(Some(RoomVisit {
            room: &room.name,
            clue,
            newly_recorded,
        }))
    }

    /// Apply the player's navigation answer.
    ///
    /// `None` (end of input), an unknown marker, or a direction without a
    /// room behind it all end the walk.
    pub fn choose(&mut self, choice: Option<char>) -> ExploreState {
        let ExploreState::AtRoom(id) = self.state else {
            return self.state;
        };
        let next = choice
            .and_then(Direction::from_marker)
            .and_then(|direction| self.mansion.child(id, direction));

        self.state = match next {
            Some(child) => ExploreState::AtRoom(child),
            None => {
                info!(?choice, "exploration finished");
                ExploreState::Exited
            }
        };
        self.state
    }

    /// Run the whole walk, reading a direction after every room and
    /// handing each visit to `on_visit` before the prompt.
    pub fn run<I, F>(&mut self, input: &mut I, mut on_visit: F) -> Result<()>
    where
        I: InputSource + ?Sized,
        F: FnMut(&RoomVisit<'m>),
    {
        while let Some(visit) = self.enter()? {
            on_visit(&visit);
            let choice = input.read_direction()?;
            self.choose(choice);
        }
        Ok(())
    }

    /// Clues collected so far
    pub fn clues(&self) -> &ClueIndex {
        &self.clues
    }

    /// Rooms entered, in order
    pub fn visited(&self) -> &[RoomId] {
        &self.visited
    }

    /// Names of the rooms entered, in order
    pub fn visited_names(&self) -> Vec<&'m str> {
        self.visited
            .iter()
            .filter_map(|id| self.mansion.room(*id))
            .map(|room| room.name.as_str())
            .collect()
    }

    /// End the session, keeping the collected clues
    pub fn into_clues(self) -> ClueIndex {
        self.clues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ScriptedInput;
    use crate::mansion::{BEDROOM, LIBRARY, LIVING_ROOM};

    #[test]
    fn test_starts_at_root() {
        let mansion = Mansion::standard().unwrap();
        let explorer = Explorer::new(&mansion);
        assert_eq!(explorer.state(), ExploreState::AtRoom(mansion.root()));
        assert!(explorer.clues().is_empty());
    }

    #[test]
    fn test_enter_records_clue() {
        let mansion = Mansion::standard().unwrap();
        let mut explorer = Explorer::new(&mansion);
        let visit = explorer.enter().unwrap().unwrap();
        assert_eq!(visit.room, LIVING_ROOM);
        assert_eq!(visit.clue, Some("Pegadas sujas"));
        assert!(visit.newly_recorded);
        assert!(explorer.clues().contains("Pegadas sujas"));
    }

    #[test]
    fn test_left_left_reaches_bedroom() {
        let mansion = Mansion::standard().unwrap();
        let mut explorer = Explorer::new(&mansion);

        explorer.enter().unwrap();
        explorer.choose(Some('e'));
        let visit = explorer.enter().unwrap().unwrap();
        assert_eq!(visit.room, LIBRARY);
        assert_eq!(visit.clue, Some("Luvas ensanguentadas"));

        explorer.choose(Some('e'));
        let visit = explorer.enter().unwrap().unwrap();
        assert_eq!(visit.room, BEDROOM);
        assert_eq!(visit.clue, Some("Perfume suspeito"));
    }

    #[test]
    fn test_leaf_exits_on_any_direction() {
        let mansion = Mansion::standard().unwrap();
        for choice in ['e', 'd', 's', 'x'] {
            let mut explorer = Explorer::new(&mansion);
            explorer.choose(Some('e'));
            explorer.choose(Some('e'));
            assert!(matches!(explorer.state(), ExploreState::AtRoom(_)));
            assert_eq!(explorer.choose(Some(choice)), ExploreState::Exited);
        }
    }

    #[test]
    fn test_missing_child_exits() {
        let mansion = Mansion::standard().unwrap();
        let mut explorer = Explorer::new(&mansion);
        explorer.choose(Some('e'));
        // The library has no right-hand room
        assert_eq!(explorer.choose(Some('d')), ExploreState::Exited);
    }

    #[test]
    fn test_end_of_input_exits() {
        let mansion = Mansion::standard().unwrap();
        let mut explorer = Explorer::new(&mansion);
        assert_eq!(explorer.choose(None), ExploreState::Exited);
    }

    #[test]
    fn test_no_discovery_after_exit() {
        let mansion = Mansion::standard().unwrap();
        let mut explorer = Explorer::new(&mansion);
        explorer.choose(Some('s'));
        assert_eq!(explorer.enter().unwrap(), None);
        assert_eq!(explorer.choose(Some('e')), ExploreState::Exited);
        assert!(explorer.clues().is_empty());
        assert!(explorer.visited().is_empty());
    }

    #[test]
    fn test_room_without_clue() {
        let mut mansion = Mansion::with_root("Hall").unwrap();
        let attic = mansion.create_room("Sótão").unwrap();
        mansion.room_mut(mansion.root()).unwrap().right = Some(attic);

        let mut explorer = Explorer::new(&mansion);
        let mut visits = Vec::new();
        let mut input = ScriptedInput::new(["d", "d"]);
        explorer
            .run(&mut input, |visit| visits.push(visit.clone()))
            .unwrap();

        assert_eq!(visits.len(), 2);
        assert!(visits.iter().all(|visit| visit.clue.is_none()));
        assert!(explorer.clues().is_empty());
        assert_eq!(explorer.visited_names(), vec!["Hall", "Sótão"]);
    }

    #[test]
    fn test_run_reports_each_room() {
        let mansion = Mansion::standard().unwrap();
        let mut explorer = Explorer::new(&mansion);
        let mut input = ScriptedInput::new(["d", "d", "d"]);
        let mut rooms = Vec::new();
        explorer
            .run(&mut input, |visit| rooms.push(visit.room))
            .unwrap();

        assert_eq!(rooms, vec!["Sala de Estar", "Cozinha", "Porão"]);
        assert_eq!(explorer.state(), ExploreState::Exited);
        let clues: Vec<_> = explorer.clues().iter().collect();
        assert_eq!(
            clues,
            vec!["Documento rasgado", "Faca desaparecida", "Pegadas sujas"]
        );
    }
}
