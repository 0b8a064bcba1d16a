use std::collections::BTreeSet;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read domain list {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Canonical form of an input domain: trimmed, lowercased, one leading
/// `http://` or `https://` literal stripped, trailing slashes removed.
/// Idempotent.
pub fn normalize_domain(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    let stripped = lowered
        .strip_prefix("https://")
        .or_else(|| lowered.strip_prefix("http://"))
        .unwrap_or(&lowered);
    stripped.trim_end_matches('/').to_string()
}

/// Reads a newline-delimited domain list, skipping blank lines, and returns
/// the normalized domains deduplicated and sorted ascending.
pub fn load_domains(path: &Path) -> Result<Vec<String>, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.display().to_string(),
        source,
    })?;

    let unique: BTreeSet<String> = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(normalize_domain)
        .collect();

    Ok(unique.into_iter().collect())
}
