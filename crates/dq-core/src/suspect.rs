//! Clue-to-suspect hash table
//!
//! A fixed array of [`HASH_SIZE`] buckets, each the head of a singly linked
//! chain of links. Links are kept in an arena and chained by index. New links
//! are prepended, so when a clue is inserted twice the most recent suspect
//! wins on lookup.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::clue::catalog::{
    BLOODY_GLOVES, DIRTY_FOOTPRINTS, MISSING_KNIFE, SUSPICIOUS_PERFUME, TORN_DOCUMENT,
};
use crate::consts::{HASH_SIZE, MAX_SUSPECT_NAME};
use crate::error::{ConstructionStep, Result, alloc_text, reserve_slot, truncate_chars};

/// Suspects of the standard game
pub const MR_BLACK: &str = "Sr. Black";
pub const MRS_WHITE: &str = "Sra. White";
pub const MR_GREEN: &str = "Sr. Green";

/// Clue/suspect pairs loaded at startup, in insertion order
pub const STANDARD_LINKS: [(&str, &str); 5] = [
    (BLOODY_GLOVES, MR_BLACK),
    (MISSING_KNIFE, MRS_WHITE),
    (SUSPICIOUS_PERFUME, MRS_WHITE),
    (DIRTY_FOOTPRINTS, MR_GREEN),
    (TORN_DOCUMENT, MR_BLACK),
];

/// Bucket of `text`: sum of its bytes modulo [`HASH_SIZE`]
pub fn hash(text: &str) -> usize {
    text.bytes()
        .fold(0usize, |total, byte| total.wrapping_add(usize::from(byte)))
        % HASH_SIZE
}

#[derive(Debug, Clone)]
struct SuspectLink {
    clue: String,
    suspect: String,
    next: Option<usize>,
}

/// Hash table from clue text to suspect name
#[derive(Debug, Clone)]
pub struct SuspectTable {
    buckets: Vec<Option<usize>>,
    links: Vec<SuspectLink>,
}

impl SuspectTable {
    /// An empty table with every bucket vacant
    pub fn new() -> Self {
        Self {
            buckets: vec![None; HASH_SIZE],
            links: Vec::new(),
        }
    }

    /// Table loaded with [`STANDARD_LINKS`]
    pub fn standard() -> Result<Self> {
        let mut table = Self::new();
        for (clue, suspect) in STANDARD_LINKS {
            table.insert(clue, suspect)?;
        }
        Ok(table)
    }

    /// Prepend a link for `clue` to its bucket chain
    pub fn insert(&mut self, clue: &str, suspect: &str) -> Result<()> {
        let clue = alloc_text(clue, ConstructionStep::SuspectLink)?;
        let suspect = alloc_text(suspect, ConstructionStep::SuspectLink)?;
        reserve_slot(&mut self.links, ConstructionStep::SuspectLink)?;

        let bucket = hash(&clue);
        debug!(clue = %clue, suspect = %suspect, bucket, "suspect link added");
        self.links.push(SuspectLink {
            clue,
            suspect,
            next: self.buckets[bucket],
        });
        self.buckets[bucket] = Some(self.links.len() - 1);
        Ok(())
    }

    /// Suspect linked to exactly `clue`, if any
    pub fn find(&self, clue: &str) -> Option<&str> {
        let bucket = hash(clue);
        let mut cursor = self.buckets[bucket];
        while let Some(idx) = cursor {
            let link = &self.links[idx];
            trace!(bucket, probe = %link.clue, "scanning chain");
            if link.clue == clue {
                return Some(link.suspect.as_str());
            }
            cursor = link.next;
        }
        None
    }

    /// Every (clue, suspect) link, bucket by bucket, newest first in a chain
    pub fn associations(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.buckets
            .iter()
            .flat_map(move |head| self.chain(*head))
            .map(|link| (link.clue.as_str(), link.suspect.as_str()))
    }

    fn chain(&self, head: Option<usize>) -> impl Iterator<Item = &SuspectLink> + '_ {
        std::iter::successors(head, move |idx| self.links[*idx].next).map(move |idx| &self.links[idx])
    }

    /// Distinct suspect names, sorted
    pub fn suspects(&self) -> Vec<&str> {
        self.links
            .iter()
            .map(|link| link.suspect.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Number of links chained in `bucket`
    pub fn chain_len(&self, bucket: usize) -> usize {
        self.buckets
            .get(bucket)
            .map_or(0, |head| self.chain(*head).count())
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

impl Default for SuspectTable {
    fn default() -> Self {
        Self::new()
    }
}

/// An accused suspect's name as typed by the player, bounded to the
/// suspect name capacity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuspectName(String);

impl SuspectName {
    /// Longest name kept, in characters
    pub const MAX_CHARS: usize = MAX_SUSPECT_NAME - 1;

    /// Strip the line ending and cut anything past [`Self::MAX_CHARS`]
    pub fn bounded(text: &str) -> Self {
        let text = text.trim_end();
        let kept = truncate_chars(text, Self::MAX_CHARS);
        if kept.len() < text.len() {
            warn!(
                kept,
                dropped = text.chars().count() - Self::MAX_CHARS,
                "suspect name truncated"
            );
        }
        Self(kept.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SuspectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SuspectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_sums_bytes() {
        assert_eq!(hash(""), 0);
        assert_eq!(hash("A"), 65);
        // 'e' (101) wraps to bucket 0
        assert_eq!(hash("e"), 0);
        assert_eq!(hash("ab"), (97 + 98) % HASH_SIZE);
    }

    #[test]
    fn test_hash_is_order_insensitive() {
        assert_eq!(hash("abc"), hash("cba"));
    }

    #[test]
    fn test_standard_lookups() {
        let table = SuspectTable::standard().unwrap();
        assert_eq!(table.len(), 5);
        assert_eq!(table.find("Luvas ensanguentadas"), Some("Sr. Black"));
        assert_eq!(table.find("Faca desaparecida"), Some("Sra. White"));
        assert_eq!(table.find("Perfume suspeito"), Some("Sra. White"));
        assert_eq!(table.find("Pegadas sujas"), Some("Sr. Green"));
        assert_eq!(table.find("Documento rasgado"), Some("Sr. Black"));
        assert_eq!(table.find("Chave perdida"), None);
    }

    #[test]
    fn test_collisions_share_a_chain() {
        let mut table = SuspectTable::new();
        table.insert("abc", "Um").unwrap();
        table.insert("cba", "Dois").unwrap();
        table.insert("bca", "Tres").unwrap();

        assert_eq!(table.chain_len(hash("abc")), 3);
        assert_eq!(table.find("abc"), Some("Um"));
        assert_eq!(table.find("cba"), Some("Dois"));
        assert_eq!(table.find("bca"), Some("Tres"));
        assert_eq!(table.find("acb"), None);
    }

    #[test]
    fn test_long_texts_are_kept_whole() {
        let first = format!("{}A", "x".repeat(99));
        let second = format!("{}B", "x".repeat(99));
        let suspect = "S".repeat(60);

        let mut table = SuspectTable::new();
        table.insert(&first, "Sr. Black").unwrap();
        table.insert(&second, &suspect).unwrap();

        assert_eq!(table.find(&first), Some("Sr. Black"));
        assert_eq!(table.find(&second), Some(suspect.as_str()));
        assert_eq!(table.find(&"x".repeat(99)), None);
    }

    #[test]
    fn test_last_insert_wins() {
        let mut table = SuspectTable::new();
        table.insert("Faca desaparecida", "Sra. White").unwrap();
        table.insert("Faca desaparecida", "Sr. Green").unwrap();
        assert_eq!(table.find("Faca desaparecida"), Some("Sr. Green"));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_associations_list_every_link() {
        let table = SuspectTable::standard().unwrap();
        let mut pairs: Vec<_> = table.associations().collect();
        pairs.sort();
        let mut expected = STANDARD_LINKS.to_vec();
        expected.sort();
        assert_eq!(pairs, expected);
    }

    #[test]
    fn test_associations_newest_first_within_chain() {
        let mut table = SuspectTable::new();
        table.insert("abc", "Um").unwrap();
        table.insert("cba", "Dois").unwrap();
        let pairs: Vec<_> = table.associations().collect();
        assert_eq!(pairs, vec![("cba", "Dois"), ("abc", "Um")]);
    }

    #[test]
    fn test_suspects_are_distinct_and_sorted() {
        let table = SuspectTable::standard().unwrap();
        assert_eq!(table.suspects(), vec!["Sr. Black", "Sr. Green", "Sra. White"]);
        assert!(SuspectTable::new().suspects().is_empty());
    }

    #[test]
    fn test_chain_len_out_of_range() {
        let table = SuspectTable::standard().unwrap();
        assert_eq!(table.chain_len(HASH_SIZE + 3), 0);
    }

    #[test]
    fn test_suspect_name_bounded() {
        assert_eq!(SuspectName::bounded("Sr. Black\r\n").as_str(), "Sr. Black");

        let long = "W".repeat(200);
        let name = SuspectName::bounded(&long);
        assert_eq!(name.as_str().chars().count(), SuspectName::MAX_CHARS);

        let accented = "ã".repeat(60);
        let name = SuspectName::bounded(&accented);
        assert_eq!(name.as_str().chars().count(), 49);
    }
}
