//! Path list input: file, stdin, or the built-in demo list.

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Built-in sample path list, handy for trying the viewer without a file.
pub const DEMO_PATHS: &[&str] = &[
    "marvel/black_widow/bw.png",
    "marvel/drdoom/the-doctor.png",
    "fact_marvel_beats_dc.txt",
    "dc/aquaman/mmmmmomoa.png",
    "marvel/black_widow/why-the-widow-is-awesome.txt",
    "dc/aquaman/movie-review-collection.txt",
    "marvel/marvel_logo.png",
    "dc/character_list.txt",
];

/// The demo list as owned strings.
pub fn demo_paths() -> Vec<String> {
    DEMO_PATHS.iter().map(|s| s.to_string()).collect()
}

/// Read a path list from a file, one path per line.
///
/// Trailing whitespace is trimmed; blank lines and lines starting with `#`
/// are skipped.
pub fn read_paths_file(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("{}: failed to read path list", path.display()))?;
    Ok(parse_lines(&content))
}

/// Read a path list from stdin until EOF.
pub fn read_paths_stdin() -> Result<Vec<String>> {
    let mut content = String::new();
    std::io::stdin()
        .read_to_string(&mut content)
        .context("failed to read path list from stdin")?;
    Ok(parse_lines(&content))
}

fn parse_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| line.trim_end())
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}
