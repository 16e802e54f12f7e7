//! Exit behavior of the `search-store` binary that needs no cluster.

use std::process::Command;

fn search_store() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_search-store"));
    command
        .env_remove("OPENSEARCH_URL")
        .env_remove("LOG_FORMAT")
        .env_remove("RUST_LOG");
    command
}

#[test]
fn test_invalid_page_size_exits_with_failure() {
    let output = search_store()
        .env("SEARCH_STORE_PAGE_SIZE", "0")
        .args(["list", "books"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("SEARCH_STORE_PAGE_SIZE must be a positive integer"));
}

#[test]
fn test_invalid_log_format_flag_exits_with_failure() {
    let output = search_store()
        .env_remove("SEARCH_STORE_PAGE_SIZE")
        .args(["--log-format", "xml", "list", "books"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Unknown log format: xml"));
}
