use indoc::indoc;
use pt2gff::{run, Config};
use std::path::Path;

fn config(input_dir: &Path, output_dir: &Path) -> Config {
    Config {
        input_dir: input_dir.to_path_buf(),
        output_dir: output_dir.to_path_buf(),
    }
}

/// A failing file is skipped; the rest of the batch still converts.
#[test]
fn bad_file_does_not_abort_batch() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("bad.pt"), ">geneA\n#1,1\n").unwrap();
    std::fs::write(dir.path().join("good.pt"), ">geneB\n$AC\n#1,1\n").unwrap();
    let output_dir = dir.path().join("out");

    let stats = run(&config(dir.path(), &output_dir)).unwrap();
    assert_eq!(stats.files_converted, 1);
    assert_eq!(stats.files_failed, 1);
    assert!(output_dir.join("good.gff").is_file());
    assert!(!output_dir.join("bad.gff").exists());
}

/// A non-numeric value fails its file.
#[test]
fn non_numeric_value_fails_file() {
    let dir = tempfile::tempdir().unwrap();
    let pt = indoc! {"
        >geneA
        $ACGT
        #0,1,oops,0
    "};
    std::fs::write(dir.path().join("sample.pt"), pt).unwrap();
    let output_dir = dir.path().join("out");

    let stats = run(&config(dir.path(), &output_dir)).unwrap();
    assert_eq!(stats.files_converted, 0);
    assert_eq!(stats.files_failed, 1);
}

/// A value list shorter than the sequence fails its file.
#[test]
fn length_mismatch_fails_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("sample.pt"), ">geneA\n$ACGT\n#1,1\n").unwrap();
    let output_dir = dir.path().join("out");

    let stats = run(&config(dir.path(), &output_dir)).unwrap();
    assert_eq!(stats.files_failed, 1);
}

/// Leftover lines after the last complete triple are dropped silently.
#[test]
fn trailing_group_is_dropped() {
    let dir = tempfile::tempdir().unwrap();
    let pt = indoc! {"
        >geneA
        $AC
        #1,1
        >geneB
        $GT
    "};
    std::fs::write(dir.path().join("sample.pt"), pt).unwrap();
    let output_dir = dir.path().join("out");

    let stats = run(&config(dir.path(), &output_dir)).unwrap();
    assert_eq!(stats.files_converted, 1);
    assert_eq!(stats.records, 1);

    let output = std::fs::read_to_string(output_dir.join("sample.gff")).unwrap();
    assert!(output.contains("geneA"));
    assert!(!output.contains("geneB"));
}

/// A missing input directory fails the whole run.
#[test]
fn missing_input_directory_errors() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope");
    let output_dir = dir.path().join("out");

    assert!(run(&config(&missing, &output_dir)).is_err());
}
