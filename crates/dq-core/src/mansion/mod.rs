//! The mansion map: a fixed binary tree of rooms
//!
//! Rooms live in an arena owned by [`Mansion`] and refer to their children
//! by [`RoomId`]. The tree is wired once at startup and never changes.

mod room;

pub use room::{Direction, Room, RoomId};

use tracing::debug;

use crate::error::{ConstructionStep, DqError, Result, alloc_text, reserve_slot};

/// Room names of the standard layout
pub const LIVING_ROOM: &str = "Sala de Estar";
pub const LIBRARY: &str = "Biblioteca";
pub const KITCHEN: &str = "Cozinha";
pub const BEDROOM: &str = "Quarto";
pub const BASEMENT: &str = "Porão";

/// The whole mansion
#[derive(Debug, Clone)]
pub struct Mansion {
    rooms: Vec<Room>,
    root: RoomId,
}

impl Mansion {
    /// Create a mansion holding only its entrance room
    pub fn with_root(name: &str) -> Result<Self> {
        let mut mansion = Self {
            rooms: Vec::new(),
            root: RoomId(0),
        };
        mansion.root = mansion.create_room(name)?;
        Ok(mansion)
    }

    /// The fixed layout of the game:
    ///
    /// ```text
    ///              Sala de Estar
    ///             /             \
    ///       Biblioteca        Cozinha
    ///        /                      \
    ///    Quarto                    Porão
    /// ```
    pub fn standard() -> Result<Self> {
        let mut mansion = Self::with_root(LIVING_ROOM)?;
        let root = mansion.root();

        let library = mansion.create_room(LIBRARY)?;
        let kitchen = mansion.create_room(KITCHEN)?;
        let bedroom = mansion.create_room(BEDROOM)?;
        let basement = mansion.create_room(BASEMENT)?;

        mansion.room_mut(root)?.left = Some(library);
        mansion.room_mut(root)?.right = Some(kitchen);
        mansion.room_mut(library)?.left = Some(bedroom);
        mansion.room_mut(kitchen)?.right = Some(basement);

        debug!(rooms = mansion.len(), "standard mansion built");
        Ok(mansion)
    }

    /// Allocate a new room with no children.
    ///
    /// The room is unreachable until the caller wires it below an existing
    /// room through [`Mansion::room_mut`].
    pub fn create_room(&mut self, name: &str) -> Result<RoomId> {
        let name = alloc_text(name, ConstructionStep::Room)?;
        reserve_slot(&mut self.rooms, ConstructionStep::Room)?;
        let id = RoomId(self.rooms.len());
        self.rooms.push(Room::new(name));
        Ok(id)
    }

    /// The entrance room
    pub fn root(&self) -> RoomId {
        self.root
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.0)
    }

    pub fn room_mut(&mut self, id: RoomId) -> Result<&mut Room> {
        self.rooms.get_mut(id.0).ok_or(DqError::UnknownRoom(id))
    }

    /// Find a room by exact name
    pub fn find(&self, name: &str) -> Option<RoomId> {
        self.rooms
            .iter()
            .position(|room| room.name == name)
            .map(RoomId)
    }

    /// The child of `id` in the given direction, if both exist
    pub fn child(&self, id: RoomId, direction: Direction) -> Option<RoomId> {
        self.room(id).and_then(|room| room.child(direction))
    }

    /// Number of rooms created, wired or not
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}
