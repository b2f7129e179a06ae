use std::path::Path;

use crate::toolchain::{ToolError, classify_failure};

#[test]
fn stripped_binaries_get_the_symbol_table_absent_error() {
    let err = classify_failure(
        "go tool nm -size ./app".to_string(),
        "go: no symbols".to_string(),
        Path::new("./app"),
    );
    assert!(matches!(err, ToolError::SymbolTableAbsent { .. }));
    let message = err.to_string();
    assert!(message.contains("./app"));
    assert!(message.contains("-ldflags"));
}

#[test]
fn other_failures_keep_the_command_and_stderr() {
    let err = classify_failure(
        "go version -m ./app".to_string(),
        "go: cannot read file".to_string(),
        Path::new("./app"),
    );
    assert!(matches!(err, ToolError::CommandFailed { .. }));
    let message = err.to_string();
    assert!(message.contains("go version -m ./app"));
    assert!(message.contains("cannot read file"));
}
