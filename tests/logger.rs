//! Integration tests for logger behavior.

use addi_mermaid::logger::{
    disable_debug, enable_debug, set_level, set_level_from_str, Level,
};
use addi_mermaid::{debug, error, info, verbose, warn};

#[test]
fn level_parse_accepts_valid() {
    assert!(set_level_from_str("error"));
    assert!(set_level_from_str("warn"));
    assert!(set_level_from_str("info"));
    assert!(set_level_from_str("debug"));
}

#[test]
fn level_parse_rejects_invalid() {
    assert!(!set_level_from_str("invalid"));
    assert!(!set_level_from_str(""));
}

#[test]
fn logs_do_not_panic() {
    set_level(Level::Debug);
    info!("info integration");
    warn!("warn integration");
    error!("error integration");
    debug!("debug integration");
    verbose!("verbose integration {}", 1);
}

#[test]
fn debug_respects_runtime_flag() {
    set_level(Level::Debug);
    disable_debug();
    debug!("should be silent");
    enable_debug();
    debug!("should emit");
}


#[cfg(feature = "file-logging")]
#[test]
fn file_logging_captures_tagged_lines() {
    use addi_mermaid::logger::init_file_logging;
    use std::fs;

    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let log_path = temp_dir.path().join("addi.log");

    assert!(init_file_logging(&log_path));
    error!("Test error message");

    // Error lines pass every level filter, so this holds regardless of
    // what level other tests set meanwhile
    let contents = fs::read_to_string(&log_path).expect("Failed to read log file");
    assert!(contents.contains("[ERROR] Test error message"));
}
