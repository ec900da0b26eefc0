// where the orthogroup files come from and where their completed copies go

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use log::{debug, info};
use super::error::FastaError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileJob {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl FileJob {
    /// File stem used to name the orthogroup in logs and reports.
    pub fn orthogroup(&self) -> String {
        self.input
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.input.display().to_string())
    }
}

/// Files directly inside `dir` whose name ends with `extension`, sorted by name.
pub fn discover_inputs(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, FastaError> {
    let dir_error = |source: io::Error| FastaError::InputDir {
        path: dir.to_path_buf(),
        source,
    };
    let mut inputs = Vec::new();
    for entry in fs::read_dir(dir).map_err(dir_error)? {
        let path = entry.map_err(dir_error)?.path();
        let matches = path
            .file_name()
            .map(|name| name.to_string_lossy().ends_with(extension))
            .unwrap_or(false);
        if matches && path.is_file() {
            inputs.push(path);
        }
    }
    inputs.sort();
    info!("Found {} files ending in {:?} in {:?}", inputs.len(), extension, dir);
    Ok(inputs)
}

/// Swap the trailing `input_ext` of a file name for `output_ext`.
/// Names without that extension lose their last extension instead.
pub fn output_name(input: &Path, input_ext: &str, output_ext: &str) -> String {
    let name = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = match name.strip_suffix(input_ext) {
        Some(stem) if !input_ext.is_empty() && !stem.is_empty() => stem.to_string(),
        _ => input
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| name.clone()),
    };
    format!("{stem}{output_ext}")
}

/// Create the output directory and pair every input with its output path.
///
/// Fails before anything is written when the directory cannot be created,
/// when two inputs would share an output, or when an output is its own input.
pub fn plan_jobs(
    inputs: &[PathBuf],
    output_dir: &Path,
    input_ext: &str,
    output_ext: &str,
) -> Result<Vec<FileJob>, FastaError> {
    let dir_error = |source: io::Error| FastaError::OutputDir {
        path: output_dir.to_path_buf(),
        source,
    };
    fs::create_dir_all(output_dir).map_err(dir_error)?;
    let resolved_dir = output_dir.canonicalize().map_err(dir_error)?;

    let mut claimed: HashMap<PathBuf, PathBuf> = HashMap::new();
    let mut jobs = Vec::with_capacity(inputs.len());
    for input in inputs {
        let name = output_name(input, input_ext, output_ext);
        let resolved_output = resolved_dir.join(&name);
        if input.canonicalize().ok().as_deref() == Some(resolved_output.as_path()) {
            return Err(FastaError::OverwritesInput(input.clone()));
        }
        if let Some(first) = claimed.insert(resolved_output.clone(), input.clone()) {
            return Err(FastaError::OutputCollision {
                first,
                second: input.clone(),
                output: resolved_output,
            });
        }
        let output = output_dir.join(name);
        debug!("{:?} -> {:?}", input, output);
        jobs.push(FileJob { input: input.clone(), output });
    }
    Ok(jobs)
}
