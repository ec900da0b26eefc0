/*
    Read one orthogroup alignment
        keep the bytes exactly as read, they are copied to the output untouched
        split it into records at every ">"
        measure each record body as the sum of its trimmed lines
    Headers that name no species are kept in the text but carry no species
*/

use std::io;
use std::path::Path;
use log::{trace, warn};
use super::error::FastaError;
use super::header::{parse_header, HeaderToken, RECORD_MARKER};
use super::struct_helper::FileBufferHelper;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub header: String,
    pub token: Option<HeaderToken>,
    pub body_len: usize,
}

impl Record {
    pub fn species(&self) -> Option<&str> {
        self.token.as_ref().map(|token| token.species.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alignment {
    pub text: Vec<u8>,
    pub records: Vec<Record>,
    /// Sequence lines found before the first header.
    pub orphan_lines: usize,
}

impl Alignment {
    pub fn parse(text: impl Into<Vec<u8>>) -> Alignment {
        let text = text.into();
        let mut records: Vec<Record> = Vec::new();
        let mut orphan_lines = 0usize;
        for line in text.split_inclusive(|byte| *byte == b'\n') {
            if line.first() == Some(&(RECORD_MARKER as u8)) {
                let header = String::from_utf8_lossy(line).trim_end().to_string();
                let token = parse_header(&header);
                match &token {
                    Some(token) => trace!("Processing {} as species {}", header, token.species),
                    None => warn!("Header {:?} does not name a species", header),
                }
                records.push(Record { header, token, body_len: 0 });
                continue;
            }
            let sequence = trim_line(line);
            if sequence.is_empty() {
                continue;
            }
            match records.last_mut() {
                Some(record) => record.body_len += sequence.len(),
                None => orphan_lines += 1,
            }
        }
        if orphan_lines > 0 {
            warn!("Encountered {} sequence lines before the first header", orphan_lines);
        }
        Alignment { text, records, orphan_lines }
    }

    pub fn read(path: &Path) -> Result<Alignment, FastaError> {
        let read_error = |source: io::Error| FastaError::ReadAlignment {
            path: path.to_path_buf(),
            source,
        };
        let alignment_file = FileBufferHelper::open(path).map_err(read_error)?;
        let text = alignment_file.read_to_bytes().map_err(read_error)?;
        Ok(Alignment::parse(text))
    }

    /// Records whose header names a species.
    pub fn well_formed(&self) -> impl Iterator<Item = &Record> {
        self.records.iter().filter(|record| record.token.is_some())
    }

    /// Distinct species in order of first appearance.
    pub fn present_species(&self) -> Vec<&str> {
        let mut present: Vec<&str> = Vec::new();
        for species in self.well_formed().filter_map(Record::species) {
            if !present.contains(&species) {
                present.push(species);
            }
        }
        present
    }

    /// Longest well-formed record body, 0 when there is none.
    pub fn width(&self) -> usize {
        self.well_formed().map(|record| record.body_len).max().unwrap_or(0)
    }

    pub fn malformed_headers(&self) -> usize {
        self.records.len() - self.well_formed().count()
    }

    /// No record names a species, so there is nothing to take the width from.
    pub fn is_degenerate(&self) -> bool {
        self.well_formed().next().is_none()
    }
}

// body bytes without the surrounding whitespace and line ending
fn trim_line(line: &[u8]) -> &[u8] {
    let start = line.iter().position(|byte| !byte.is_ascii_whitespace()).unwrap_or(line.len());
    let end = line.iter().rposition(|byte| !byte.is_ascii_whitespace()).map_or(start, |idx| idx + 1);
    &line[start..end]
}
