//! Game constants

/// Number of buckets in the suspect hash table
pub const HASH_SIZE: usize = 101;

/// Capacity of the accused-name buffer; at most 49 characters are kept
pub const MAX_SUSPECT_NAME: usize = 50;

/// Minimum evidence count for an accusation to hold
pub const EVIDENCE_THRESHOLD: usize = 2;

/// Navigation markers
pub const LEFT_MARKER: char = 'e';
pub const RIGHT_MARKER: char = 'd';
pub const EXIT_MARKER: char = 's';
