/*
    Complete every orthogroup of a run
        read the expected species, fail before touching any file if unusable
        pair each input with its output, fail if the output directory is unusable
        complete each file on its own, one at a time or on a thread pool
            unreadable files are skipped and reported
            a failed write stops the run
        in input order
            report missing species
            validate the completed alignment
        summarise
*/

use std::sync::{Arc, Mutex};
use log::{debug, error, info, warn};
use threadpool::ThreadPool;
use orthogroup_fasta::{
    complete_file, discover_inputs, plan_jobs, validate, Alignment, Completion, CompletionConfig,
    ExpectedSpecies, FastaError, FileJob, MissingReport, ReportStatus,
};
use crate::bin_utils::get_args::Cli;

#[derive(Debug)]
pub enum FileOutcome {
    Completed(Completion),
    Skipped(String),
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub processed: usize,
    pub completed: usize,
    pub degenerate: usize,
    pub skipped: usize,
    pub validation_issues: usize,
}

impl BatchSummary {
    pub fn is_clean(&self) -> bool {
        self.skipped == 0 && self.validation_issues == 0
    }
}

pub fn run(cli: &Cli) -> Result<BatchSummary, FastaError> {
    let expected = Arc::new(ExpectedSpecies::read(&cli.species_file)?);
    let inputs = match &cli.input_dir {
        Some(dir) => discover_inputs(dir, &cli.input_ext)?,
        None => cli.input_alignment.clone(),
    };
    if inputs.is_empty() {
        warn!("No orthogroup files to process");
    }
    let jobs = plan_jobs(&inputs, &cli.output_dir, &cli.input_ext, &cli.output_ext)?;
    let mut report = match &cli.missing_report {
        Some(path) => Some(MissingReport::create(path)?),
        None => None,
    };
    let config = CompletionConfig {
        line_length: cli.line_length,
        ..Default::default()
    };

    let outcomes = process_jobs(&jobs, &expected, config, cli.nproc)?;
    let mut summary = BatchSummary::default();
    for (job, outcome) in jobs.iter().zip(outcomes) {
        let orthogroup = job.orthogroup();
        summary.processed += 1;
        match outcome {
            FileOutcome::Skipped(reason) => {
                warn!("Skipped {}: {}", orthogroup, reason);
                summary.skipped += 1;
                if let Some(report) = report.as_mut() {
                    report.write_unreadable(&orthogroup)?;
                }
            }
            FileOutcome::Completed(completion) => {
                let status = if completion.degenerate {
                    warn!("{} has no record naming a species, added records are empty", orthogroup);
                    summary.degenerate += 1;
                    ReportStatus::Degenerate
                } else {
                    ReportStatus::Missing
                };
                if !completion.is_unchanged() {
                    summary.completed += 1;
                    if let Some(report) = report.as_mut() {
                        report.write_missing(&orthogroup, &completion.missing, status)?;
                    }
                }
                let issues = validate(&Alignment::parse(completion.text), &expected);
                for issue in &issues {
                    warn!("Validation of {:?}: {}", job.output, issue);
                }
                summary.validation_issues += issues.len();
            }
        }
    }
    if let Some(report) = report {
        report.finish()?;
    }

    info!(
        "Processed {} orthogroups: {} completed, {} degenerate, {} skipped, {} validation issues",
        summary.processed, summary.completed, summary.degenerate, summary.skipped, summary.validation_issues
    );
    if summary.validation_issues == 0 {
        info!("All output files passed validation: correct species count and equal lengths");
    }
    Ok(summary)
}

// Outcomes come back in the order of `jobs` whatever the number of threads
fn process_jobs(jobs: &[FileJob], expected: &Arc<ExpectedSpecies>, config: CompletionConfig, nproc: usize) -> Result<Vec<FileOutcome>, FastaError> {
    if nproc <= 1 {
        return jobs
            .iter()
            .map(|job| {
                info!("Processing {:?}", job.input);
                into_outcome(complete_file(job, expected, &config))
            })
            .collect();
    }

    let slots: Arc<Mutex<Vec<Option<Result<Completion, FastaError>>>>> =
        Arc::new(Mutex::new((0..jobs.len()).map(|_| None).collect()));
    let pool = ThreadPool::new(nproc);
    for (idx, job) in jobs.iter().enumerate() {
        let job = job.clone();
        let expected = Arc::clone(expected);
        let slots_clone = Arc::clone(&slots);
        pool.execute(move || {
            info!("Processing {:?}", job.input);
            let result = complete_file(&job, &expected, &config);
            if let Ok(mut slots) = slots_clone.lock() {
                slots[idx] = Some(result);
            }
        });
    }
    pool.join();
    debug!("Threadpool jobs complete, {} panicked", pool.panic_count());

    let mut slots = match slots.lock() {
        Ok(slots) => slots,
        Err(poisoned) => poisoned.into_inner(),
    };
    let outcomes = slots
        .drain(..)
        .map(|slot| match slot {
            Some(result) => into_outcome(result),
            None => {
                error!("A worker stopped before finishing its orthogroup");
                Ok(FileOutcome::Skipped("worker stopped before finishing".to_string()))
            }
        })
        .collect();
    outcomes
}

fn into_outcome(result: Result<Completion, FastaError>) -> Result<FileOutcome, FastaError> {
    match result {
        Ok(completion) => Ok(FileOutcome::Completed(completion)),
        Err(err @ FastaError::ReadAlignment { .. }) => Ok(FileOutcome::Skipped(err.to_string())),
        Err(err) => Err(err),
    }
}
