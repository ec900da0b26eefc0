use clap::Parser;
use std::ops::RangeInclusive;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(author, version, about = "Fill missing species in orthogroup FASTA files with gap-only sequences", long_about = None)]
pub struct Cli {
    /// File with the expected species, one per line (lines like >species)
    #[arg(short='s', long="species-file", required = true)]
    pub species_file: PathBuf,
    /// Directory with the cleaned orthogroup files
    #[arg(short='i', long="input-dir", conflicts_with = "input_alignment", required_unless_present = "input_alignment")]
    pub input_dir: Option<PathBuf>,
    /// Orthogroup alignment file in fasta format, repeat for several files
    #[arg(short='f', long="infile", action=clap::ArgAction::Append)]
    pub input_alignment: Vec<PathBuf>,
    /// Extension of the files picked from the input directory. Default: ".fa"
    #[arg(long="input-ext", default_value_t=String::from(".fa"))]
    pub input_ext: String,
    /// Directory to write the completed orthogroup files to
    #[arg(short='o', long="output-dir", required = true)]
    pub output_dir: PathBuf,
    /// Extension replacing the input extension on output files. Default: ".fasta"
    #[arg(long="output-ext", default_value_t=String::from(".fasta"))]
    pub output_ext: String,
    /// Maximum characters per line of an added sequence, 0 to keep it on one line. Default: 60
    #[arg(short='l', long="line-length", default_value_t=60)]
    pub line_length: usize,
    /// Write a tab separated table of the missing species per orthogroup
    #[arg(short='r', long="missing-report")]
    pub missing_report: Option<PathBuf>,
    /// Number of orthogroups processed at once. Default: 1
    #[arg(short='n', long="threads", value_parser=validate_threads, default_value_t=1)]
    pub nproc: usize,
    /// Exit with an error when a file was skipped or failed validation
    #[arg(long="strict")]
    pub strict: bool,
}

const THREADS: RangeInclusive<usize> = 1..=256;

fn validate_threads(input_str: &str) -> Result<usize, String> {
    let threads: usize = input_str
        .parse()
        .map_err(|_| format!("{} is not a number of threads", input_str))?;
    if THREADS.contains(&threads) {
        Ok(threads)
    } else {
        Err(
            format!("Threads not in the range {} - {}", THREADS.start(), THREADS.end())
        )
    }
}
