use psimon::core::parser::read_record;
use psimon::core::pressure::PressureSample;
use psimon::error::PsimonError;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_source(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_two_line_record_with_full_requested() {
    let dir = TempDir::new().unwrap();
    let path = write_source(
        &dir,
        "memory.pressure",
        "some avg10=5.00 avg60=3.00 avg300=1.00 total=9999\n\
         full avg10=2.00 avg60=1.00 avg300=0.50 total=9999\n",
    );

    let record = read_record(&path, true).unwrap();
    assert_eq!(record.some, PressureSample::new(5.0, 3.0, 1.0));
    assert_eq!(record.full, Some(PressureSample::new(2.0, 1.0, 0.5)));
}

#[test]
fn test_one_line_source_without_full() {
    let dir = TempDir::new().unwrap();
    let path = write_source(
        &dir,
        "cpu.pressure",
        "some avg10=0.12 avg60=0.34 avg300=0.56 total=123456\n",
    );

    let record = read_record(&path, false).unwrap();
    assert_eq!(record.some, PressureSample::new(0.12, 0.34, 0.56));
    assert_eq!(record.full, None);
}

#[test]
fn test_one_line_source_with_full_requested_is_premature_eof() {
    let dir = TempDir::new().unwrap();
    let path = write_source(
        &dir,
        "io.pressure",
        "some avg10=0.00 avg60=0.00 avg300=0.00 total=0\n",
    );

    let err = read_record(&path, true).unwrap_err();
    assert!(matches!(err, PsimonError::PrematureEof(_)));
}

#[test]
fn test_empty_source_is_premature_eof() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, "memory.pressure", "");

    let err = read_record(&path, false).unwrap_err();
    assert!(matches!(err, PsimonError::PrematureEof(_)));
}

#[test]
fn test_missing_field_is_unparseable_with_no_partial_sample() {
    let dir = TempDir::new().unwrap();
    let path = write_source(
        &dir,
        "memory.pressure",
        "some avg10=5.00 avg300=1.00 total=9999\n",
    );

    let err = read_record(&path, false).unwrap_err();
    assert!(matches!(err, PsimonError::UnparseableLine { .. }));
}

#[test]
fn test_malformed_full_line_is_an_error_when_requested() {
    let dir = TempDir::new().unwrap();
    let path = write_source(
        &dir,
        "memory.pressure",
        "some avg10=0.00 avg60=0.00 avg300=0.00 total=0\n\
         full not a pressure line\n",
    );

    let err = read_record(&path, true).unwrap_err();
    assert!(matches!(err, PsimonError::UnparseableLine { .. }));
}

#[test]
fn test_malformed_second_line_is_ignored_when_not_requested() {
    let dir = TempDir::new().unwrap();
    let path = write_source(
        &dir,
        "cpu.pressure",
        "some avg10=0.00 avg60=0.00 avg300=0.00 total=0\n\
         full not a pressure line\n",
    );

    // Only the first line is read when full is not requested.
    assert!(read_record(&path, false).is_ok());
}

#[test]
fn test_overlong_multibyte_line_is_contained_as_unparseable() {
    let dir = TempDir::new().unwrap();
    // 255 ASCII bytes then a two-byte character straddling the line bound,
    // followed by otherwise valid fields.
    let mut line = "t".repeat(255);
    line.push('é');
    line.push_str(" avg10=1.00 avg60=1.00 avg300=1.00 total=0\n");
    let path = write_source(&dir, "memory.pressure", &line);

    let err = read_record(&path, false).unwrap_err();
    assert!(matches!(err, PsimonError::UnparseableLine { .. }));
}

#[test]
fn test_open_failure_is_not_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("never-created");

    let err = read_record(&path, false).unwrap_err();
    assert!(matches!(err, PsimonError::OpenSource { .. }));
}
