use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use cinesearch::client::{MovieSummary, SearchResult};

#[allow(dead_code)]
pub fn temp_config_file(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("failed to create tempdir");
    let config_path = temp_dir.path().join("config.yaml");
    fs::write(&config_path, contents).expect("failed to write config file");
    (temp_dir, config_path)
}

/// Build a page of `count` movies whose ids start with `prefix`
#[allow(dead_code)]
pub fn movie_page(prefix: &str, count: usize, total: u64) -> SearchResult {
    let movies = (0..count)
        .map(|i| {
            MovieSummary::new(
                format!("{}-{}", prefix, i),
                format!("{} #{}", prefix, i),
                "2000",
                "",
            )
        })
        .collect();
    SearchResult::new(movies, total)
}
