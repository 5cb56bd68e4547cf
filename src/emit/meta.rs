use std::path::{Path, PathBuf};

use crate::error::RouteResult;
use crate::types::RouteMetadata;

/// Metadata lives next to the drawable artifact, same stem, `.json`.
pub fn metadata_path(svg_path: &Path) -> PathBuf {
    svg_path.with_extension("json")
}

pub fn to_json(metadata: &RouteMetadata) -> RouteResult<String> {
    Ok(serde_json::to_string_pretty(metadata)?)
}

pub fn from_json(json: &str) -> RouteResult<RouteMetadata> {
    Ok(serde_json::from_str(json)?)
}
