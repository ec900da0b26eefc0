// expected species list, one identifier per line with an optional leading ">"

use std::collections::HashSet;
use std::io;
use std::path::Path;
use log::{debug, info, warn};
use super::error::FastaError;
use super::header::RECORD_MARKER;
use super::struct_helper::FileBufferHelper;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpectedSpecies {
    order: Vec<String>,
}

impl ExpectedSpecies {
    /// Build the list from raw lines. Blank lines are dropped and a repeated
    /// identifier keeps the position of its first occurrence.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut order = Vec::new();
        for line in lines {
            let Some(species) = clean_species_line(line.as_ref()) else {
                continue;
            };
            if seen.insert(species.to_string()) {
                order.push(species.to_string());
            } else {
                warn!("Species {} listed more than once, keeping the first entry", species);
            }
        }
        Self { order }
    }

    pub fn read(path: &Path) -> Result<Self, FastaError> {
        let species_error = |source: io::Error| FastaError::SpeciesList {
            path: path.to_path_buf(),
            source,
        };
        let mut species_file = FileBufferHelper::open(path).map_err(species_error)?;
        let mut lines = Vec::new();
        while species_file.next_line().map_err(species_error)? {
            lines.push(String::from_utf8_lossy(&species_file.line).into_owned());
        }
        let expected = Self::from_lines(lines);
        if expected.is_empty() {
            return Err(FastaError::EmptySpeciesList(path.to_path_buf()));
        }
        info!("{} expected species read from {:?}", expected.len(), path);
        debug!("Expected species: {}", expected.order.join(","));
        Ok(expected)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, species: &str) -> bool {
        self.order.iter().any(|s| s == species)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }
}

fn clean_species_line(line: &str) -> Option<&str> {
    let line = line.trim();
    let line = line.strip_prefix(RECORD_MARKER).unwrap_or(line).trim();
    (!line.is_empty()).then_some(line)
}
