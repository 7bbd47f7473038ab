//! Snapshot loading: fetch from a source, then parse

use std::time::Instant;

use crate::core::Snapshot;
use crate::error::LoadError;
use crate::source::Source;

/// Parse a raw session document.
///
/// The document must be a JSON object with a `drivers` array; anything else
/// is rejected as a whole rather than partially rendered.
pub(crate) fn parse_snapshot(content: &str, source_name: &str) -> Result<Snapshot, LoadError> {
    serde_json::from_str(content).map_err(|e| LoadError::MalformedSnapshot {
        source_name: source_name.to_string(),
        reason: e.to_string(),
    })
}

/// Fetch and parse one snapshot from a source
pub(crate) fn load_snapshot(source: &dyn Source) -> Result<Snapshot, LoadError> {
    let start = Instant::now();
    let content = source.fetch()?;
    let snapshot = parse_snapshot(&content, &source.display_name())?;
    log::debug!(
        "Loaded {} drivers from {} ({:.2}ms)",
        snapshot.drivers.len(),
        source.display_name(),
        start.elapsed().as_secs_f64() * 1000.0
    );
    Ok(snapshot)
}
