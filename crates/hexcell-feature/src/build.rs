use crate::params::HoneycombParams;
use crate::shape::HoneycombShape;
use crate::{Error, Result};
use hexcell_base::Tolerance;
use hexcell_geometry::HexRingProfile;
use hexcell_shapeops::{DEFAULT_SHAPEOPS_TOLERANCE, fuse_ring_faces};
use hexcell_topology::{Compound, Face, Solid, SolidBuilder, Vector3, merge_solids};
use tracing::{debug, error, warn};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BuildOptions {
    pub tolerance: Tolerance,
    pub boolean_tolerance: f64,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            tolerance: Tolerance::default(),
            boolean_tolerance: DEFAULT_SHAPEOPS_TOLERANCE,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BuildReport {
    pub inner_cells: usize,
    pub border_rings: usize,
    pub fused: bool,
    pub fusion_error: Option<String>,
}

impl BuildReport {
    pub fn ring_count(&self) -> usize {
        self.inner_cells + self.border_rings
    }
}

#[derive(Clone, Debug)]
pub struct HoneycombBuild {
    pub shape: HoneycombShape,
    pub report: BuildReport,
}

/// Ring outlines in build order: one ring per cell, then the outer wall
/// rings around the border cells.
pub fn ring_profiles(params: &HoneycombParams) -> Vec<HexRingProfile> {
    let grid = params.grid();
    let half_wall = params.half_wall();

    let mut rings: Vec<HexRingProfile> = grid
        .cells()
        .map(|cell| HexRingProfile::new(cell.center, params.side, half_wall))
        .collect();

    if params.outer_wall {
        rings.extend(
            grid.border_cells()
                .map(|cell| HexRingProfile::new(cell.center, params.side + half_wall, half_wall)),
        );
    }
    rings
}

pub fn build_honeycomb(params: &HoneycombParams, options: &BuildOptions) -> Result<HoneycombBuild> {
    params.validate()?;
    hexcell_base::ensure_positive("boolean tolerance", options.boolean_tolerance)?;
    assemble(params, options, |rings| {
        fuse_ring_faces(rings, options.boolean_tolerance)
    })
}

/// Lays out the rings and extrudes them. With `fuse_result` the rings are
/// merged in the plane by `fuse` and swept once; if that fails the unfused
/// prisms are returned instead.
pub(crate) fn assemble<F>(
    params: &HoneycombParams,
    options: &BuildOptions,
    fuse: F,
) -> Result<HoneycombBuild>
where
    F: FnOnce(&[HexRingProfile]) -> hexcell_shapeops::Result<Vec<Face>>,
{
    let grid = params.grid();
    let rings = ring_profiles(params);
    if rings.is_empty() {
        return Err(Error::InvalidParameter("honeycomb has no cells".to_string()));
    }
    let mut report = BuildReport {
        inner_cells: grid.len(),
        border_rings: rings.len() - grid.len(),
        ..BuildReport::default()
    };
    debug!(
        inner = report.inner_cells,
        border = report.border_rings,
        "honeycomb rings laid out"
    );

    let direction = params.extrusion();
    let fused = if params.fuse_result {
        match fuse(&rings)
            .map_err(Error::from)
            .and_then(|faces| sweep_regions(&faces, direction))
        {
            Ok(solid) => Some(solid),
            Err(err) => {
                error!(error = %err, "honeycomb fusion failed");
                warn!(rings = rings.len(), "falling back to unfused compound");
                report.fusion_error = Some(err.to_string());
                None
            }
        }
    } else {
        None
    };

    let shape = match fused {
        Some(solid) => {
            report.fused = true;
            HoneycombShape::Fused(solid)
        }
        None => {
            let solids = rings
                .iter()
                .map(|ring| SolidBuilder::hex_ring_prism(ring, direction, &options.tolerance))
                .collect::<std::result::Result<Vec<Solid>, _>>()?;
            HoneycombShape::Compound(Compound::from(solids))
        }
    };

    debug!(
        solids = shape.solid_count(),
        fused = report.fused,
        "honeycomb built"
    );
    Ok(HoneycombBuild { shape, report })
}

/// One solid for all fused regions; separate regions become separate shells.
fn sweep_regions(faces: &[Face], direction: Vector3) -> Result<Solid> {
    let mut solids = faces
        .iter()
        .map(|face| SolidBuilder::extrude(face, direction))
        .collect::<std::result::Result<Vec<Solid>, _>>()?;
    match solids.len() {
        0 => Err(Error::InvalidParameter("fusion produced no regions".to_string())),
        1 => Ok(solids.remove(0)),
        _ => Ok(merge_solids(&solids)?),
    }
}
