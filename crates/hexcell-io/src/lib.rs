use anyhow::{Context, Result, bail};
use hexcell_feature::HoneycombShape;
use std::path::Path;

pub mod mesh;
pub mod params;
pub mod step;

pub use mesh::{DEFAULT_TESSELLATION_TOLERANCE, export_obj, triangulate_shape, triangulate_solid};
pub use params::{load_params, save_params};
pub use step::export_step;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExportFormat {
    Step,
    Obj,
}

impl ExportFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("step") | Some("stp") => Ok(ExportFormat::Step),
            Some("obj") => Ok(ExportFormat::Obj),
            Some(other) => bail!("unsupported export format: .{other}"),
            None => bail!("output path {} has no extension", path.display()),
        }
    }
}

/// Writes a honeycomb shape, choosing STEP or OBJ from the file extension.
pub fn export_shape(shape: &HoneycombShape, path: impl AsRef<Path>, tol: f64) -> Result<ExportFormat> {
    let path = path.as_ref();
    let format = ExportFormat::from_path(path)?;
    match format {
        ExportFormat::Step => export_step(shape, path)?,
        ExportFormat::Obj => {
            let solid = shape.to_solid().context("pack honeycomb into one solid")?;
            export_obj(&solid, path, tol)?;
        }
    }
    Ok(format)
}
