//! Fixed room-to-clue catalog

use crate::mansion::{BASEMENT, BEDROOM, KITCHEN, LIBRARY, LIVING_ROOM};

/// Clue texts of the standard game
pub const BLOODY_GLOVES: &str = "Luvas ensanguentadas";
pub const MISSING_KNIFE: &str = "Faca desaparecida";
pub const SUSPICIOUS_PERFUME: &str = "Perfume suspeito";
pub const DIRTY_FOOTPRINTS: &str = "Pegadas sujas";
pub const TORN_DOCUMENT: &str = "Documento rasgado";

/// Every (room, clue) pair of the catalog
pub const CATALOG: [(&str, &str); 5] = [
    (LIBRARY, BLOODY_GLOVES),
    (KITCHEN, MISSING_KNIFE),
    (BEDROOM, SUSPICIOUS_PERFUME),
    (LIVING_ROOM, DIRTY_FOOTPRINTS),
    (BASEMENT, TORN_DOCUMENT),
];

/// The clue hidden in a room, if any
pub fn clue_for_room(room_name: &str) -> Option<&'static str> {
    CATALOG
        .iter()
        .find(|(room, _)| *room == room_name)
        .map(|(_, clue)| *clue)
}
