/*
    Fill the gaps of orthogroup alignments
        read the list of species every orthogroup should contain
        for each orthogroup alignment
            find the expected species without a record
            take the alignment width from the longest record
            copy the alignment as is
            append a gap-only record of that width for every missing species
        validate the completed alignment
            one record per species
            equal lengths
*/


use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use log::{debug, info, warn};
pub mod lib_utils;
pub use lib_utils::alignment::{Alignment, Record};
pub use lib_utils::complete::{complete, Completion, CompletionConfig};
pub use lib_utils::error::FastaError;
pub use lib_utils::header::{parse_header, HeaderToken};
pub use lib_utils::layout::{discover_inputs, plan_jobs, FileJob};
pub use lib_utils::report::{MissingReport, ReportStatus};
pub use lib_utils::species::ExpectedSpecies;
pub use lib_utils::validate::{validate, ValidationIssue};

/// Complete one orthogroup file and write the result to `job.output`.
///
/// A read failure comes back as [`FastaError::ReadAlignment`] and nothing is
/// written, any other error means the output could not be written.
pub fn complete_file(job: &FileJob, expected: &ExpectedSpecies, config: &CompletionConfig) -> Result<Completion, FastaError> {
    let alignment = Alignment::read(&job.input)?;
    let completion = complete(&alignment, expected, config);
    if completion.is_unchanged() {
        debug!("{:?} already holds every expected species", job.input);
    } else {
        for species in &completion.missing {
            warn!("Missing species in {}: {}", job.orthogroup(), species);
        }
    }
    write_output(&job.output, &completion.text)?;
    info!("Wrote {:?} ({} records appended, width {})", job.output, completion.missing.len(), completion.target_width);
    Ok(completion)
}

pub fn write_output(path: &Path, text: &[u8]) -> Result<(), FastaError> {
    let write_error = |source: std::io::Error| FastaError::WriteOutput {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = BufWriter::new(File::create(path).map_err(write_error)?);
    writer.write_all(text).map_err(write_error)?;
    writer.flush().map_err(write_error)
}
