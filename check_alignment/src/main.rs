/*
    Check a directory of completed orthogroup alignments
        every file should hold one record per expected species
        every record should be of the same length
    Exit with an error if any file fails
*/

use clap::Parser;
use env_logger::Env;
use log::{debug, error, info, warn};
use orthogroup_fasta::{discover_inputs, validate, Alignment, ExpectedSpecies, FastaError};
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(author, version, about = "Check species count and sequence lengths of completed orthogroups", long_about = None)]
struct Cli {
    /// File with the expected species, one per line (lines like >species)
    #[arg(short='s', long="species-file", required = true)]
    species_file: PathBuf,
    /// Directory with the completed orthogroup files
    #[arg(short='d', long="dir", required = true)]
    dir: PathBuf,
    /// Extension of the files to check. Default: ".fasta"
    #[arg(long="ext", default_value_t=String::from(".fasta"))]
    ext: String,
}

fn check_dir(species_file: &Path, dir: &Path, ext: &str) -> Result<usize, FastaError> {
    let expected = ExpectedSpecies::read(species_file)?;
    let mut failed = 0usize;
    for file in discover_inputs(dir, ext)? {
        debug!("Checking {:?}", file);
        let alignment = match Alignment::read(&file) {
            Ok(alignment) => alignment,
            Err(err) => {
                warn!("{}", err);
                failed += 1;
                continue;
            }
        };
        let issues = validate(&alignment, &expected);
        for issue in &issues {
            warn!("{:?}: {}", file, issue);
        }
        if !issues.is_empty() {
            failed += 1;
        }
    }
    Ok(failed)
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    match check_dir(&cli.species_file, &cli.dir, &cli.ext) {
        Ok(0) => info!("All output files passed validation: correct species count and equal lengths"),
        Ok(failed) => {
            error!("{} files failed validation", failed);
            process::exit(1);
        }
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_counts_failed_files() {
        let dir = tempdir().unwrap();
        let species = dir.path().join("species.txt");
        fs::write(&species, ">A\n>B\n").unwrap();
        fs::write(dir.path().join("OG1.fasta"), ">A_01|\nACGT\n>B_00|\n----\n").unwrap();
        fs::write(dir.path().join("OG2.fasta"), ">A_01|\nACGT\n>B_00|\n---\n").unwrap();
        fs::write(dir.path().join("OG3.fasta"), ">A_01|\nACGT\n").unwrap();
        fs::write(dir.path().join("OG4.fa"), ">A_01|\nACGT\n").unwrap();
        // a paralog does not make the orthogroup fail
        fs::write(dir.path().join("OG5.fasta"), ">A_01|\nACGT\n>A_02|\nACGT\n>B_00|\n----\n").unwrap();
        assert_eq!(check_dir(&species, dir.path(), ".fasta").unwrap(), 2);
        assert_eq!(check_dir(&species, dir.path(), ".fa").unwrap(), 1);
    }

    #[test]
    fn test_missing_species_list() {
        let dir = tempdir().unwrap();
        assert!(check_dir(&dir.path().join("absent.txt"), dir.path(), ".fasta").is_err());
    }
}
