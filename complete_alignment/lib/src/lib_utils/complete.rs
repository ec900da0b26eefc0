/*
    Complete one orthogroup alignment
        missing species = expected species not named by any record, in expected order
        width = longest record body
        output = original bytes, untouched
            + ">{species}_00|" and a gap-only body of that width for every missing species
    Nothing here touches the filesystem, each call stands on its own
*/

use log::{debug, warn};
use super::alignment::Alignment;
use super::header::placeholder_header;
use super::species::ExpectedSpecies;

pub const GAP_CHARACTER: char = '-';
pub const PLACEHOLDER_COPY_INDEX: &str = "00";
pub const DEFAULT_LINE_LENGTH: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionConfig {
    /// Characters per body line, 0 keeps each body on one line.
    pub line_length: usize,
    pub gap_character: char,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            line_length: DEFAULT_LINE_LENGTH,
            gap_character: GAP_CHARACTER,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub text: Vec<u8>,
    pub missing: Vec<String>,
    pub target_width: usize,
    pub degenerate: bool,
}

impl Completion {
    pub fn is_unchanged(&self) -> bool {
        self.missing.is_empty()
    }
}

pub fn missing_species(alignment: &Alignment, expected: &ExpectedSpecies) -> Vec<String> {
    let present = alignment.present_species();
    expected
        .iter()
        .filter(|species| !present.contains(species))
        .map(str::to_string)
        .collect()
}

/// Header plus `width` gap characters, wrapped and newline terminated.
pub fn placeholder_record(species: &str, width: usize, config: &CompletionConfig) -> String {
    let mut record = placeholder_header(species, PLACEHOLDER_COPY_INDEX);
    record.push('\n');
    let line_length = if config.line_length == 0 { width } else { config.line_length };
    let mut remaining = width;
    while remaining > 0 {
        let chunk = remaining.min(line_length);
        record.extend(std::iter::repeat(config.gap_character).take(chunk));
        record.push('\n');
        remaining -= chunk;
    }
    record
}

pub fn complete(alignment: &Alignment, expected: &ExpectedSpecies, config: &CompletionConfig) -> Completion {
    let missing = missing_species(alignment, expected);
    let target_width = alignment.width();
    let degenerate = alignment.is_degenerate();
    if degenerate {
        warn!("No record names a species, padding {} species to an empty body", missing.len());
    }
    for species in alignment.present_species() {
        if !expected.contains(species) {
            debug!("Species {} is not in the expected list, kept as is", species);
        }
    }

    let mut text = alignment.text.clone();
    if !missing.is_empty() {
        if text.last().map_or(false, |byte| *byte != b'\n') {
            text.push(b'\n');
        }
        for species in &missing {
            text.extend_from_slice(placeholder_record(species, target_width, config).as_bytes());
        }
    }
    Completion { text, missing, target_width, degenerate }
}
