//! Judging an accusation against the collected evidence

use serde::Serialize;
use strum::Display;
use tracing::debug;

use crate::clue::ClueIndex;
use crate::consts::EVIDENCE_THRESHOLD;
use crate::suspect::{SuspectName, SuspectTable};

/// Outcome of an accusation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    #[strum(to_string = "válida")]
    Valid,
    #[strum(to_string = "inválida")]
    Invalid,
}

impl Verdict {
    /// Valid from [`EVIDENCE_THRESHOLD`] pieces of evidence upward
    pub const fn from_evidence(count: usize) -> Self {
        if count >= EVIDENCE_THRESHOLD {
            Verdict::Valid
        } else {
            Verdict::Invalid
        }
    }

    pub const fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }
}

/// A judged accusation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Accusation {
    pub accused: SuspectName,
    pub evidence_count: usize,
    pub verdict: Verdict,
}

/// Count the indexed clues pointing at `accused` and judge the accusation
pub fn evaluate(index: &ClueIndex, table: &SuspectTable, accused: &str) -> Accusation {
    let accused = SuspectName::bounded(accused);
    let evidence_count = index.count_matching_suspect(table, accused.as_str());
    let verdict = Verdict::from_evidence(evidence_count);
    debug!(accused = %accused, evidence_count, %verdict, "accusation judged");
    Accusation {
        accused,
        evidence_count,
        verdict,
    }
}

/// Evidence count of every suspect in the table, alphabetically
pub fn tally<'t>(index: &ClueIndex, table: &'t SuspectTable) -> Vec<(&'t str, usize)> {
    table
        .suspects()
        .into_iter()
        .map(|suspect| (suspect, index.count_matching_suspect(table, suspect)))
        .collect()
}

/// Suspect with the most evidence; ties go to the alphabetically first name.
///
/// `None` when no collected clue points at anyone.
pub fn most_likely_suspect<'t>(
    index: &ClueIndex,
    table: &'t SuspectTable,
) -> Option<(&'t str, usize)> {
    tally(index, table)
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .fold(None, |best, candidate| match best {
            Some((_, best_count)) if best_count >= candidate.1 => best,
            _ => Some(candidate),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suspect::STANDARD_LINKS;

    fn full_index() -> ClueIndex {
        let mut index = ClueIndex::new();
        for (clue, _) in STANDARD_LINKS {
            index.insert(clue).unwrap();
        }
        index
    }

    #[test]
    fn test_verdict_threshold() {
        assert_eq!(Verdict::from_evidence(0), Verdict::Invalid);
        assert_eq!(Verdict::from_evidence(1), Verdict::Invalid);
        assert_eq!(Verdict::from_evidence(2), Verdict::Valid);
        assert_eq!(Verdict::from_evidence(5), Verdict::Valid);
        assert!(Verdict::Valid.is_valid());
        assert!(!Verdict::Invalid.is_valid());
    }

    #[test]
    fn test_evaluate_full_index() {
        let table = SuspectTable::standard().unwrap();
        let index = full_index();

        let white = evaluate(&index, &table, "Sra. White");
        assert_eq!(white.evidence_count, 2);
        assert_eq!(white.verdict, Verdict::Valid);

        let green = evaluate(&index, &table, "Sr. Green");
        assert_eq!(green.evidence_count, 1);
        assert_eq!(green.verdict, Verdict::Invalid);
    }

    #[test]
    fn test_evaluate_unknown_suspect() {
        let table = SuspectTable::standard().unwrap();
        let accusation = evaluate(&full_index(), &table, "Coronel Mostarda");
        assert_eq!(accusation.evidence_count, 0);
        assert_eq!(accusation.verdict, Verdict::Invalid);
        assert_eq!(accusation.accused.as_str(), "Coronel Mostarda");
    }

    #[test]
    fn test_evaluate_is_exact_match() {
        let table = SuspectTable::standard().unwrap();
        let accusation = evaluate(&full_index(), &table, "sr. black");
        assert_eq!(accusation.evidence_count, 0);
    }

    #[test]
    fn test_tally() {
        let table = SuspectTable::standard().unwrap();
        assert_eq!(
            tally(&full_index(), &table),
            vec![("Sr. Black", 2), ("Sr. Green", 1), ("Sra. White", 2)]
        );
    }

    #[test]
    fn test_most_likely_suspect_breaks_ties_alphabetically() {
        let table = SuspectTable::standard().unwrap();
        assert_eq!(most_likely_suspect(&full_index(), &table), Some(("Sr. Black", 2)));
    }

    #[test]
    fn test_most_likely_suspect_clear_winner() {
        let table = SuspectTable::standard().unwrap();
        let mut index = ClueIndex::new();
        index.insert("Faca desaparecida").unwrap();
        index.insert("Perfume suspeito").unwrap();
        index.insert("Pegadas sujas").unwrap();
        assert_eq!(most_likely_suspect(&index, &table), Some(("Sra. White", 2)));
    }

    #[test]
    fn test_most_likely_suspect_without_evidence() {
        let table = SuspectTable::standard().unwrap();
        assert_eq!(most_likely_suspect(&ClueIndex::new(), &table), None);
    }

    #[test]
    fn test_verdict_display() {
        assert_eq!(Verdict::Valid.to_string(), "válida");
        assert_eq!(Verdict::Invalid.to_string(), "inválida");
    }
}
