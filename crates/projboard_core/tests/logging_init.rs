use projboard_core::{init_logging, logging_status, LoggingError};

#[test]
fn init_logging_is_idempotent_and_rejects_conflicts() {
    let first_dir = tempfile::tempdir().expect("create temp dir");
    let second_dir = tempfile::tempdir().expect("create temp dir");
    let first = first_dir.path().to_str().expect("utf-8 temp dir");
    let second = second_dir.path().to_str().expect("utf-8 temp dir");

    init_logging("info", first).expect("first init should succeed");
    init_logging(" INFO ", first).expect("same config should be idempotent");

    assert!(matches!(
        init_logging("debug", first),
        Err(LoggingError::LevelConflict { .. })
    ));
    let dir_error = init_logging("info", second).expect_err("directory conflict should fail");
    assert!(dir_error.to_string().contains("refusing to switch"));

    let (level, dir) = logging_status().expect("logging should be active");
    assert_eq!(level, "info");
    assert_eq!(dir, first_dir.path());
}
