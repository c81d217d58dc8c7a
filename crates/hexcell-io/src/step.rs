use anyhow::{Context, Result};
use hexcell_feature::HoneycombShape;
use std::path::Path;
use truck_stepio::out;

/// Writes the honeycomb as one STEP solid. An unfused compound keeps one
/// closed shell per ring prism.
pub fn export_step(shape: &HoneycombShape, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let solid = shape
        .to_solid()
        .context("pack honeycomb into one solid")?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output directory {}", parent.display()))?;
    }

    let file_name = match path.file_name().and_then(|name| name.to_str()) {
        Some(name) => name.to_string(),
        None => "honeycomb.step".to_string(),
    };
    let header = out::StepHeaderDescriptor {
        file_name,
        organization_system: "hexcell".to_string(),
        ..Default::default()
    };

    let compressed = solid.compress();
    let text = out::CompleteStepDisplay::new(out::StepModel::from(&compressed), header).to_string();
    std::fs::write(path, text).with_context(|| format!("write STEP file {}", path.display()))?;
    Ok(())
}
