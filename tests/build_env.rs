//! `.env` resolution used by build.rs

#![cfg(not(target_arch = "wasm32"))]

#[path = "../build_support/env.rs"]
mod env_file;

use std::io::Write;

use env_file::{lookup, read_env_file};

fn env_file_with(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes()).expect("Failed to write temp file");
    file
}

fn no_env(_: &str) -> Option<String> {
    None
}

#[test]
fn test_export_prefix_and_quoted_comment() {
    let file = env_file_with(
        "# backend\nexport BACKEND_URL=\"http://a\" # prod\nOTHER='x'\n",
    );
    let entries = read_env_file(file.path());

    assert_eq!(
        lookup("BACKEND_URL", &no_env, &entries).as_deref(),
        Some("http://a")
    );
}

#[test]
fn test_vite_alias() {
    let file = env_file_with("VITE_BACKEND_URL=https://api.example.com\n");
    let entries = read_env_file(file.path());

    assert_eq!(
        lookup("BACKEND_URL", &no_env, &entries).as_deref(),
        Some("https://api.example.com")
    );
}

#[test]
fn test_direct_key_beats_alias_and_env_beats_file() {
    let file = env_file_with("VITE_BACKEND_URL=http://alias\nBACKEND_URL=http://direct\n");
    let entries = read_env_file(file.path());

    assert_eq!(
        lookup("BACKEND_URL", &no_env, &entries).as_deref(),
        Some("http://direct")
    );

    let env = |key: &str| (key == "BACKEND_URL").then(|| "http://from-env".to_string());
    assert_eq!(
        lookup("BACKEND_URL", &env, &entries).as_deref(),
        Some("http://from-env")
    );
}

#[test]
fn test_missing_file() {
    let entries = read_env_file(std::path::Path::new("does/not/exist/.env"));
    assert!(entries.is_empty());
    assert_eq!(lookup("BACKEND_URL", &no_env, &entries), None);
}
