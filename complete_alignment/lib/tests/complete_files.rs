use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use orthogroup_fasta::{
    complete_file, plan_jobs, Alignment, CompletionConfig, ExpectedSpecies, FastaError,
};
use tempfile::{tempdir, TempDir};

fn setup(species: &str, files: &[(&str, &str)]) -> (TempDir, ExpectedSpecies, Vec<PathBuf>) {
    let dir = tempdir().unwrap();
    let species_file = dir.path().join("species.txt");
    fs::write(&species_file, species).unwrap();
    let expected = ExpectedSpecies::read(&species_file).unwrap();
    let inputs = files
        .iter()
        .map(|(name, text)| {
            let path = dir.path().join(name);
            fs::write(&path, text).unwrap();
            path
        })
        .collect();
    (dir, expected, inputs)
}

fn complete_all(dir: &Path, inputs: &[PathBuf], expected: &ExpectedSpecies, config: &CompletionConfig) -> Vec<String> {
    let jobs = plan_jobs(inputs, &dir.join("out"), ".fa", ".fasta").unwrap();
    jobs.iter()
        .map(|job| {
            complete_file(job, expected, config).unwrap();
            fs::read_to_string(&job.output).unwrap()
        })
        .collect()
}

#[test]
fn scenario_pad_single_missing_species() {
    let input = ">A_01|\nACGTACGT\n>C_01|\nACGT----\n";
    let (dir, expected, inputs) = setup(">A\n>B\n>C\n", &[("OG1.fa", input)]);
    let outputs = complete_all(dir.path(), &inputs, &expected, &CompletionConfig::default());
    assert_eq!(outputs[0], format!("{input}>B_00|\n--------\n"));
}

#[test]
fn scenario_wrap_short_last_line() {
    let (dir, expected, inputs) = setup("W\nX\n", &[("OG1.fa", ">W_01|\nACGTA\nCGTAC\n")]);
    let config = CompletionConfig { line_length: 4, ..Default::default() };
    let outputs = complete_all(dir.path(), &inputs, &expected, &config);
    assert!(outputs[0].ends_with(">X_00|\n----\n----\n--\n"));
}

#[test]
fn scenario_no_parseable_records() {
    let (dir, expected, inputs) = setup(">A\n>B\n", &[("OG1.fa", "")]);
    let outputs = complete_all(dir.path(), &inputs, &expected, &CompletionConfig::default());
    assert_eq!(outputs[0], ">A_00|\n>B_00|\n");
}

#[test]
fn scenario_duplicate_expected_species() {
    let (dir, expected, inputs) = setup(">A\n>B\n>B\n>A\n", &[("OG1.fa", ">A_01|\nAC\n")]);
    assert_eq!(expected.len(), 2);
    let outputs = complete_all(dir.path(), &inputs, &expected, &CompletionConfig::default());
    assert_eq!(outputs[0], ">A_01|\nAC\n>B_00|\n--\n");
}

#[test]
fn output_covers_expected_and_present_species() {
    let files = [
        ("OG1.fa", ">A_01|\nAC-T\n>Z_01|\nACGT\n"),
        ("OG2.fa", ">B_01|\nAC\nGT\n>B_02|\nACG-\n"),
        ("OG3.fa", ">C_01|\nAC\n"),
    ];
    let (dir, expected, inputs) = setup(">A\n>B\n>C\n", &files);
    let outputs = complete_all(dir.path(), &inputs, &expected, &CompletionConfig::default());
    for ((_, input), output) in files.iter().zip(&outputs) {
        let before = Alignment::parse(input.to_string());
        let after = Alignment::parse(output.clone());
        let mut wanted: BTreeSet<&str> = expected.iter().collect();
        wanted.extend(before.present_species());
        let got: BTreeSet<&str> = after.present_species().into_iter().collect();
        assert_eq!(got, wanted);
        // appended records all carry the original width
        for record in &after.records[before.records.len()..] {
            assert_eq!(record.body_len, before.width());
        }
        // the original text comes first, untouched
        assert!(output.starts_with(input));
    }
}

#[test]
fn complete_file_is_copied_byte_for_byte() {
    let input = ">A_07|\r\nAC\r\nGT\r\n\r\n>B_01| extra words\nACGT";
    let (dir, expected, inputs) = setup("A\nB\n", &[("OG1.fa", input)]);
    let outputs = complete_all(dir.path(), &inputs, &expected, &CompletionConfig::default());
    assert_eq!(outputs[0], input);
}

#[test]
fn reruns_are_identical_and_inputs_untouched() {
    let input = ">B_01|\nACGTACGTAC\n";
    let (dir, expected, inputs) = setup(">C\n>A\n>B\n", &[("OG1.fa", input)]);
    let config = CompletionConfig { line_length: 3, ..Default::default() };
    let first = complete_all(dir.path(), &inputs, &expected, &config);
    let second = complete_all(dir.path(), &inputs, &expected, &config);
    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(&inputs[0]).unwrap(), input);
    assert_eq!(
        first[0],
        ">B_01|\nACGTACGTAC\n>C_00|\n---\n---\n---\n-\n>A_00|\n---\n---\n---\n-\n"
    );
}

#[test]
fn unreadable_input_reports_read_error() {
    let (dir, expected, _) = setup(">A\n", &[]);
    let missing = dir.path().join("OG9.fa");
    let jobs = plan_jobs(&[missing], &dir.path().join("out"), ".fa", ".fasta").unwrap();
    let result = complete_file(&jobs[0], &expected, &CompletionConfig::default());
    assert!(matches!(result, Err(FastaError::ReadAlignment { .. })));
    assert!(!jobs[0].output.exists());
}
