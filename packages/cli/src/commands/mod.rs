pub mod inspect;
pub mod merge;
pub mod resolve;

pub use inspect::{inspect, InspectArgs};
pub use merge::{merge, MergeArgs};
pub use resolve::{resolve, ResolveArgs};

use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;
use variantkit::StyleRegistry;

/// Read a components file: a JSON object of component name -> style config.
pub(crate) fn load_registry(cwd: &Path, file: &Path) -> Result<StyleRegistry> {
    let path = cwd.join(file);
    let source = std::fs::read_to_string(&path)
        .with_context(|| format!("Cannot read {}", path.display()))?;
    let registry = StyleRegistry::from_json(&source)
        .with_context(|| format!("Cannot load {}", path.display()))?;
    debug!(path = %path.display(), components = registry.len(), "Loaded components");
    Ok(registry)
}
