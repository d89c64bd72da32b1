use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::path::Path;

/// Resolve the report input from CLI flags. Inline JSON wins over a file
/// path when both are supplied; neither is an argument error.
pub fn resolve(json: Option<&str>, file: Option<&Path>) -> Result<Value> {
    if let Some(text) = json {
        return serde_json::from_str(text).with_context(|| "parsing inline JSON (--json)");
    }

    if let Some(path) = file {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading report file: {}", path.display()))?;
        return serde_json::from_str(&raw)
            .with_context(|| format!("parsing report JSON: {}", path.display()));
    }

    bail!("expected --json <text> or --file <path>")
}
