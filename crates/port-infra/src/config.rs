//! TOML-backed loader for [`PortConfig`].

use std::path::Path;

use anyhow::{Context, Result};

use port_core::PortConfig;

/// Load port configuration from a TOML file.
///
/// A missing file yields the defaults; a malformed file is an error.
pub fn load_port_config(path: &Path) -> Result<PortConfig> {
    if !path.exists() {
        return Ok(PortConfig::default());
    }
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read port config at {}", path.display()))?;
    let config = toml::from_str(&raw)
        .with_context(|| format!("failed to parse port config at {}", path.display()))?;
    Ok(config)
}
