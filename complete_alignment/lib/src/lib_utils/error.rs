// errors surfaced by the orthogroup readers and writers

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum FastaError {
    #[error("Species list {path:?} could not be read - {source}")]
    SpeciesList {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Species list {0:?} contains no species")]
    EmptySpeciesList(PathBuf),

    #[error("Alignment {path:?} could not be read - {source}")]
    ReadAlignment {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Output {path:?} could not be written - {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Output directory {path:?} is not usable - {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Inputs {first:?} and {second:?} both map to output {output:?}")]
    OutputCollision {
        first: PathBuf,
        second: PathBuf,
        output: PathBuf,
    },

    #[error("Output {0:?} would overwrite its own input")]
    OverwritesInput(PathBuf),

    #[error("Input directory {path:?} could not be listed - {source}")]
    InputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Missing species report error: {0}")]
    Report(#[from] csv::Error),
}
