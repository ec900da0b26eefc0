// tab separated report of the species each orthogroup was missing

use std::fs::File;
use std::path::{Path, PathBuf};
use log::info;
use super::error::FastaError;

const REPORT_HEADER: [&str; 3] = ["orthogroup", "species", "status"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportStatus {
    /// Padded, the file had records to take the width from.
    Missing,
    /// Padded to an empty body, no record named a species.
    Degenerate,
    /// The file could not be read and was skipped.
    Unreadable,
}

impl ReportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Missing => "missing",
            ReportStatus::Degenerate => "degenerate",
            ReportStatus::Unreadable => "unreadable",
        }
    }
}

pub struct MissingReport {
    path: PathBuf,
    writer: csv::Writer<File>,
    rows: usize,
}

impl MissingReport {
    pub fn create(path: &Path) -> Result<MissingReport, FastaError> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .from_path(path)?;
        writer.write_record(REPORT_HEADER)?;
        Ok(MissingReport {
            path: path.to_path_buf(),
            writer,
            rows: 0,
        })
    }

    pub fn write_missing(&mut self, orthogroup: &str, missing: &[String], status: ReportStatus) -> Result<(), FastaError> {
        for species in missing {
            self.writer.write_record([orthogroup, species.as_str(), status.as_str()])?;
            self.rows += 1;
        }
        Ok(())
    }

    pub fn write_unreadable(&mut self, orthogroup: &str) -> Result<(), FastaError> {
        self.writer.write_record([orthogroup, "", ReportStatus::Unreadable.as_str()])?;
        self.rows += 1;
        Ok(())
    }

    pub fn finish(mut self) -> Result<PathBuf, FastaError> {
        self.writer.flush().map_err(|source| FastaError::WriteOutput {
            path: self.path.clone(),
            source,
        })?;
        info!("Missing species report saved to {:?} ({} rows)", self.path, self.rows);
        Ok(self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_one_row_per_missing_species() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.tsv");
        let mut report = MissingReport::create(&path).unwrap();
        report
            .write_missing("OG0001", &["B".to_string(), "D".to_string()], ReportStatus::Missing)
            .unwrap();
        report.write_missing("OG0002", &[], ReportStatus::Missing).unwrap();
        report
            .write_missing("OG0003", &["A".to_string()], ReportStatus::Degenerate)
            .unwrap();
        report.write_unreadable("OG0004").unwrap();
        report.finish().unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "orthogroup\tspecies\tstatus\n\
             OG0001\tB\tmissing\n\
             OG0001\tD\tmissing\n\
             OG0003\tA\tdegenerate\n\
             OG0004\t\tunreadable\n"
        );
    }

    #[test]
    fn test_unwritable_report() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent").join("missing.tsv");
        assert!(matches!(MissingReport::create(&path), Err(FastaError::Report(_))));
    }
}
