// tests/integration_tests/input_test.rs
use super::common::{create_test_file, setup_test_directory};
use anyhow::Result;
use gc_content::{Args, GcError, InputSource, run_with_output};
use std::fs;

#[test]
fn test_missing_file_fails_without_output() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let args = Args {
        file: InputSource::File(temp_dir.path().join("missing.txt")),
        verbose: 0,
    };
    let mut out = Vec::new();

    let err = run_with_output(&args, &mut out).expect_err("Missing file should fail");

    assert!(out.is_empty(), "No rows should be written");
    assert!(
        matches!(err.downcast_ref::<GcError>(), Some(GcError::Open { .. })),
        "Should report an open failure, got: {err:#}"
    );
    assert!(format!("{err:#}").contains("missing.txt"));
    Ok(())
}

#[test]
fn test_invalid_utf8_keeps_earlier_rows() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let path = temp_dir.path().join("binary.txt");
    fs::write(&path, b"GGCC\nAT\xffAT\nATAT\n")?;
    let args = Args {
        file: InputSource::File(path),
        verbose: 0,
    };
    let mut out = Vec::new();

    let err = run_with_output(&args, &mut out).expect_err("Invalid UTF-8 should fail");

    assert_eq!(String::from_utf8(out)?, "100%: GGCC\n");
    assert!(matches!(
        err.downcast_ref::<GcError>(),
        Some(GcError::Read { line: 2, .. })
    ));
    Ok(())
}

#[test]
fn test_stats_are_returned() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let path = create_test_file(temp_dir.path(), "stats.txt", "ACGT\n\n \nGGGG")?;
    let args = Args {
        file: InputSource::File(path),
        verbose: 0,
    };

    let stats = run_with_output(&args, Vec::new())?;

    assert_eq!(stats.lines_read, 4);
    assert_eq!(stats.sequences, 2);
    assert_eq!(stats.skipped_blank, 2);
    Ok(())
}
