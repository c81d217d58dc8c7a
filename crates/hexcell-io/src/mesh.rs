use anyhow::{Context, Result, bail};
use hexcell_feature::HoneycombShape;
use hexcell_topology::Solid;
use std::fs::File;
use std::path::Path;
use truck_meshalgo::prelude::*;
use truck_polymesh::{PolygonMesh, obj};

pub const DEFAULT_TESSELLATION_TOLERANCE: f64 = 0.5;

pub fn triangulate_solid(solid: &Solid, tol: f64) -> PolygonMesh {
    let mut mesh = solid.triangulation(tol).to_polygon();
    mesh.add_naive_normals(true);
    mesh.put_together_same_attrs(truck_base::tolerance::TOLERANCE);
    mesh.remove_unused_attrs();
    mesh
}

/// One mesh covering every solid of the shape.
pub fn triangulate_shape(shape: &HoneycombShape, tol: f64) -> Result<PolygonMesh> {
    let solid = shape.to_solid().context("pack honeycomb into one solid")?;
    Ok(triangulate_solid(&solid, tol))
}

/// Triangulates a solid and writes it as a Wavefront OBJ file.
pub fn export_obj(solid: &Solid, path: impl AsRef<Path>, tol: f64) -> Result<()> {
    if !tol.is_finite() || tol <= 0.0 {
        bail!("tessellation tolerance must be positive, got {tol}");
    }
    write_obj(&triangulate_solid(solid, tol), path)
}

fn write_obj(mesh: &PolygonMesh, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output directory {}", parent.display()))?;
    }

    if mesh.positions().is_empty() {
        bail!("triangulation produced empty mesh");
    }

    let file = File::create(path).with_context(|| format!("create OBJ file {}", path.display()))?;
    obj::write(mesh, file).with_context(|| format!("write OBJ file {}", path.display()))?;
    Ok(())
}
