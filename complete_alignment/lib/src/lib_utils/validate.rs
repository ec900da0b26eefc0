/*
    Check a completed alignment
        as many distinct species as expected, paralogs count once
        every expected species present
        every record body of the same length
        every header naming a species
*/

use std::fmt;
use super::alignment::Alignment;
use super::species::ExpectedSpecies;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    SpeciesCount { found: usize, expected: usize },
    MissingSpecies(Vec<String>),
    InconsistentLengths(Vec<usize>),
    MalformedHeaders(usize),
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::SpeciesCount { found, expected } => {
                write!(f, "has {found} species, expected {expected}")
            }
            ValidationIssue::MissingSpecies(species) => {
                write!(f, "missing species {}", species.join(","))
            }
            ValidationIssue::InconsistentLengths(lengths) => {
                let lengths: Vec<String> = lengths.iter().map(usize::to_string).collect();
                write!(f, "inconsistent sequence lengths [{}]", lengths.join(", "))
            }
            ValidationIssue::MalformedHeaders(count) => {
                write!(f, "{count} headers do not name a species")
            }
        }
    }
}

/// Sorted distinct body lengths over every record.
pub fn body_lengths(alignment: &Alignment) -> Vec<usize> {
    let mut lengths: Vec<usize> = alignment.records.iter().map(|record| record.body_len).collect();
    lengths.sort_unstable();
    lengths.dedup();
    lengths
}

pub fn validate(alignment: &Alignment, expected: &ExpectedSpecies) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let present = alignment.present_species();
    if present.len() != expected.len() {
        issues.push(ValidationIssue::SpeciesCount {
            found: present.len(),
            expected: expected.len(),
        });
    }
    let missing: Vec<String> = expected
        .iter()
        .filter(|species| !present.contains(species))
        .map(str::to_string)
        .collect();
    if !missing.is_empty() {
        issues.push(ValidationIssue::MissingSpecies(missing));
    }
    let lengths = body_lengths(alignment);
    if lengths.len() > 1 {
        issues.push(ValidationIssue::InconsistentLengths(lengths));
    }
    let malformed = alignment.malformed_headers();
    if malformed > 0 {
        issues.push(ValidationIssue::MalformedHeaders(malformed));
    }
    issues
}
