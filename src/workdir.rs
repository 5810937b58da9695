//! Working-directory listing and numbered selection.

use std::fs;
use std::io;
use std::path::Path;

/// Lists the immediate entries of `dir`, sorted by name.
///
/// The `.git` directory is never offered for staging.
pub fn list_entries(dir: &Path) -> io::Result<Vec<String>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let name = entry?.file_name().to_string_lossy().into_owned();
        if name != ".git" {
            entries.push(name);
        }
    }
    entries.sort();
    Ok(entries)
}

/// Resolves a comma-separated list of 1-based indices against `entries`.
///
/// Entries come back in the order the indices were given. A non-numeric
/// token or an index outside `1..=entries.len()` invalidates the whole
/// selection and yields an empty list.
pub fn select_entries(input: &str, entries: &[String]) -> Vec<String> {
    let input = input.trim();
    if input.is_empty() {
        return Vec::new();
    }

    let mut selected = Vec::new();
    for token in input.split(',') {
        let index = match token.trim().parse::<usize>() {
            Ok(index) if (1..=entries.len()).contains(&index) => index,
            _ => return Vec::new(),
        };
        selected.push(entries[index - 1].clone());
    }
    selected
}
