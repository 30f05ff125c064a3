//! Test data factories
//!
//! These are test utilities - not all may be used in every test file but are
//! available for future test development.

#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;
use zipmr::config::RunConfig;

/// Write a zip archive at `path`
///
/// Entries with `Some(content)` become files, `None` becomes a directory.
pub fn write_zip(path: &Path, entries: &[(&str, Option<&str>)]) {
    let file = File::create(path).unwrap();
    let mut zip = ZipWriter::new(file);
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    for (name, content) in entries {
        match content {
            Some(bytes) => {
                zip.start_file(*name, options).unwrap();
                zip.write_all(bytes.as_bytes()).unwrap();
            }
            None => {
                zip.add_directory(*name, options).unwrap();
            }
        }
    }
    zip.finish().unwrap();
}

/// Run configuration with test defaults and the given allow-list
pub fn make_config(known: &[&str]) -> RunConfig {
    RunConfig {
        repository_url: "https://gitlab.example.com/acme/widgets.git".to_string(),
        base_branch: "main".to_string(),
        token: "glpat-test".to_string(),
        project_id: "42".to_string(),
        gitlab_url: "https://gitlab.example.com".to_string(),
        branch_prefix: "script-branch".to_string(),
        known_directories: known.iter().map(ToString::to_string).collect(),
    }
}
