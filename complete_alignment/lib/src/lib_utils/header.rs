/*
    Tokenise an orthogroup record header
        >{species}_{copy index}|
    The species runs from the marker to the first "_".
    The copy index is the run of digits after the "_", if any.
    The header is terminated when a "|" follows.
    Without a "_", the species runs to the "|" or to the end of the line.
*/

pub const RECORD_MARKER: char = '>';
pub const COPY_DELIMITER: char = '_';
pub const HEADER_TERMINATOR: char = '|';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderToken {
    pub species: String,
    pub copy_index: Option<String>,
    pub terminated: bool,
}

/// Split a header line into its species and copy index.
///
/// Returns `None` when the line is not a header or names no species.
pub fn parse_header(line: &str) -> Option<HeaderToken> {
    let header = line.trim_end().strip_prefix(RECORD_MARKER)?.trim_start();
    let (species, copy_index, terminated) = match header.split_once(COPY_DELIMITER) {
        Some((species, suffix)) => {
            let digits_end = suffix
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(suffix.len());
            let copy_index = match &suffix[..digits_end] {
                "" => None,
                digits => Some(digits.to_string()),
            };
            (species, copy_index, suffix[digits_end..].starts_with(HEADER_TERMINATOR))
        }
        None => match header.split_once(HEADER_TERMINATOR) {
            Some((species, _)) => (species, None, true),
            None => (header, None, false),
        },
    };
    if species.trim().is_empty() {
        return None;
    }
    Some(HeaderToken {
        species: species.trim().to_string(),
        copy_index,
        terminated,
    })
}

/// Header written for a species absent from an orthogroup.
pub fn placeholder_header(species: &str, copy_index: &str) -> String {
    format!("{RECORD_MARKER}{species}{COPY_DELIMITER}{copy_index}{HEADER_TERMINATOR}")
}
