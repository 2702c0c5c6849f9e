use anyhow::Context;
use shared::types::Result;
use std::path::Path;

/// Reads the knowledge corpus into memory. UTF-8 only; a missing or
/// unreadable file aborts the run.
pub fn load_corpus(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read knowledge corpus at {}", path.display()))
}
