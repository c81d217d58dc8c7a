use anyhow::{Context, Result};
use hexcell_feature::HoneycombParams;
use std::path::Path;

/// Reads parameters from a JSON file. Fields the file omits keep their
/// defaults; the result is validated.
pub fn load_params(path: impl AsRef<Path>) -> Result<HoneycombParams> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read parameter file {}", path.display()))?;
    let params: HoneycombParams = serde_json::from_str(&text)
        .with_context(|| format!("parse parameter file {}", path.display()))?;
    params
        .validate()
        .with_context(|| format!("invalid parameters in {}", path.display()))?;
    Ok(params)
}

pub fn save_params(params: &HoneycombParams, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output directory {}", parent.display()))?;
    }
    let text = serde_json::to_string_pretty(params).context("serialize parameters")?;
    std::fs::write(path, text)
        .with_context(|| format!("write parameter file {}", path.display()))?;
    Ok(())
}
