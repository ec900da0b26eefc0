/*
Complete the orthogroup alignments of a BUSCO / ProteinOrtho run before tree building
    + every orthogroup should hold one sequence per expected species
    + species without a sequence get a gap-only one
        + as long as the longest sequence of the orthogroup
        + wrapped at the requested line length
    + existing sequences are copied untouched

Implement clap to parse cli

Libs
    species: read the expected species list
    alignment: read an orthogroup alignment and measure its records
    complete: append the missing species
    validate: check species count and lengths of a completed alignment
    report: table of missing species per orthogroup

Arguments
    species list
    input directory or input files
    output directory
    line length, report, threads
*/

mod bin_utils;
use clap::Parser;
use bin_utils::get_args::Cli;
use bin_utils::complete_orthogroups::run;
use log::{debug, error};
use env_logger::Env;
use std::process;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    debug!("Parsing commandline arguments");
    match run(&cli) {
        Ok(summary) if cli.strict && !summary.is_clean() => {
            error!("{} files skipped and {} validation issues found", summary.skipped, summary.validation_issues);
            process::exit(1);
        }
        Ok(_) => {}
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    }
}
