use super::*;

// ============================================================================
// LogSeverity ordering
// ============================================================================

#[test]
fn test_severity_ordering() {
    assert!(LogSeverity::Trace < LogSeverity::Debug);
    assert!(LogSeverity::Debug < LogSeverity::Info);
    assert!(LogSeverity::Info < LogSeverity::Warn);
    assert!(LogSeverity::Warn < LogSeverity::Error);
}

#[test]
fn test_severity_equality() {
    assert_eq!(LogSeverity::Info, LogSeverity::Info);
    assert_ne!(LogSeverity::Info, LogSeverity::Warn);
}

// ============================================================================
// LogEntry
// ============================================================================

#[test]
fn test_log_entry_clone_preserves_fields() {
    let entry = LogEntry {
        severity: LogSeverity::Error,
        timestamp: std::time::SystemTime::now(),
        source: "projlab::test".to_string(),
        message: "boom".to_string(),
        file: Some("somewhere.rs"),
        line: Some(17),
    };

    let cloned = entry.clone();
    assert_eq!(cloned.severity, LogSeverity::Error);
    assert_eq!(cloned.source, "projlab::test");
    assert_eq!(cloned.message, "boom");
    assert_eq!(cloned.file, Some("somewhere.rs"));
    assert_eq!(cloned.line, Some(17));
}

// Logger-slot behavior (set/reset/capture) is covered by the
// logging integration tests, which serialize access to the global slot.
