use hexcell_base::Tolerance;
use hexcell_geometry::{HexRingProfile, HexagonProfile};
use thiserror::Error;
use truck_modeling::builder;

pub use truck_modeling::{Curve, Edge, Face, Point3, Shell, Solid, Surface, Vector3, Vertex, Wire};

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error(transparent)]
    Base(#[from] hexcell_base::Error),
    #[error(transparent)]
    Modeling(#[from] truck_modeling::errors::Error),
    #[error(transparent)]
    Topology(#[from] truck_topology::errors::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

pub struct SolidBuilder;

impl SolidBuilder {
    /// Sweeps a planar face along `direction`. The direction must leave the
    /// z = 0 plane upwards.
    pub fn extrude(face: &Face, direction: Vector3) -> Result<Solid> {
        if !direction.z.is_finite() || direction.z <= 0.0 {
            return Err(Error::InvalidParameter(
                "extrusion direction must have a positive z component".to_string(),
            ));
        }
        Ok(builder::tsweep(face, direction))
    }

    pub fn hexagon_prism(profile: &HexagonProfile, direction: Vector3) -> Result<Solid> {
        let face = hexagon_face(profile)?;
        Self::extrude(&face, direction)
    }

    pub fn hex_ring_prism(
        ring: &HexRingProfile,
        direction: Vector3,
        tol: &Tolerance,
    ) -> Result<Solid> {
        let face = hex_ring_face(ring, tol)?;
        Self::extrude(&face, direction)
    }
}

pub fn polygon_wire(points: &[Point3]) -> Result<Wire> {
    if points.len() < 3 {
        return Err(Error::InvalidParameter(
            "polygon needs at least 3 points".to_string(),
        ));
    }
    let vertices: Vec<Vertex> = points.iter().map(|point| builder::vertex(*point)).collect();
    let edges: Vec<Edge> = (0..vertices.len())
        .map(|idx| builder::line(&vertices[idx], &vertices[(idx + 1) % vertices.len()]))
        .collect();
    Ok(edges.into())
}

pub fn hexagon_face(profile: &HexagonProfile) -> Result<Face> {
    hexcell_base::ensure_positive("hexagon radius", profile.radius)?;
    let outer = polygon_wire(&profile.corners())?;
    Ok(builder::try_attach_plane(&[outer])?)
}

/// Planar face of a hex ring. When the hole shrinks below the linear
/// tolerance the ring degenerates to a full hexagon.
pub fn hex_ring_face(ring: &HexRingProfile, tol: &Tolerance) -> Result<Face> {
    hexcell_base::ensure_positive("ring radius", ring.outer_radius)?;
    hexcell_base::ensure_positive("ring wall", ring.wall)?;
    if tol.is_zero_length(ring.inner_radius()) {
        return hexagon_face(&ring.outer());
    }

    let mut hole = ring.inner().corners();
    hole.reverse();
    planar_face(&ring.outer().corners(), &[hole.to_vec()])
}

/// Planar face bounded by a counter-clockwise outline with clockwise holes.
pub fn planar_face(boundary: &[Point3], holes: &[Vec<Point3>]) -> Result<Face> {
    let mut wires = Vec::with_capacity(1 + holes.len());
    wires.push(polygon_wire(boundary)?);
    for hole in holes {
        wires.push(polygon_wire(hole)?);
    }
    Ok(builder::try_attach_plane(&wires[..])?)
}

/// Unfused collection of solids.
#[derive(Clone, Debug, Default)]
pub struct Compound {
    solids: Vec<Solid>,
}

impl Compound {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, solid: Solid) {
        self.solids.push(solid);
    }

    pub fn len(&self) -> usize {
        self.solids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solids.is_empty()
    }

    pub fn solids(&self) -> &[Solid] {
        &self.solids
    }

    pub fn into_solids(self) -> Vec<Solid> {
        self.solids
    }

    /// Packs every boundary shell of every member into a single solid so the
    /// compound can go through single-solid exporters.
    pub fn to_solid(&self) -> Result<Solid> {
        merge_solids(&self.solids)
    }
}

impl From<Vec<Solid>> for Compound {
    fn from(solids: Vec<Solid>) -> Self {
        Self { solids }
    }
}

impl FromIterator<Solid> for Compound {
    fn from_iter<I: IntoIterator<Item = Solid>>(iter: I) -> Self {
        Self {
            solids: iter.into_iter().collect(),
        }
    }
}

pub fn merge_solids(solids: &[Solid]) -> Result<Solid> {
    if solids.is_empty() {
        return Err(Error::InvalidParameter(
            "cannot merge an empty set of solids".to_string(),
        ));
    }
    let shells: Vec<Shell> = solids
        .iter()
        .flat_map(|solid| solid.boundaries().iter().cloned())
        .collect();
    Ok(Solid::try_new(shells)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexcell_geometry::Point2;

    fn up(height: f64) -> Vector3 {
        Vector3::new(0.0, 0.0, height)
    }

    #[test]
    fn hexagon_prism_has_eight_faces() -> Result<()> {
        let profile = HexagonProfile::new(Point2::new(0.0, 0.0), 10.0);
        let solid = SolidBuilder::hexagon_prism(&profile, up(5.0))?;
        assert_eq!(solid.face_iter().count(), 8);
        Ok(())
    }

    #[test]
    fn ring_prism_has_fourteen_faces() -> Result<()> {
        let ring = HexRingProfile::new(Point2::new(0.0, 0.0), 10.0, 1.0);
        let solid = SolidBuilder::hex_ring_prism(&ring, up(5.0), &Tolerance::default())?;
        assert_eq!(solid.boundaries().len(), 1);
        assert_eq!(solid.face_iter().count(), 14);
        Ok(())
    }

    #[test]
    fn collapsed_ring_becomes_full_hexagon() -> Result<()> {
        let ring = HexRingProfile::new(Point2::new(0.0, 0.0), 1.0, 2.0);
        let face = hex_ring_face(&ring, &Tolerance::default())?;
        assert_eq!(face.boundaries().len(), 1);
        Ok(())
    }

    #[test]
    fn ring_face_has_hole() -> Result<()> {
        let ring = HexRingProfile::new(Point2::new(0.0, 0.0), 1.0, 0.1);
        let face = hex_ring_face(&ring, &Tolerance::default())?;
        assert_eq!(face.boundaries().len(), 2);
        Ok(())
    }

    #[test]
    fn planar_face_takes_several_holes() -> Result<()> {
        let square = |x0: f64, y0: f64, size: f64| {
            vec![
                Point3::new(x0, y0, 0.0),
                Point3::new(x0 + size, y0, 0.0),
                Point3::new(x0 + size, y0 + size, 0.0),
                Point3::new(x0, y0 + size, 0.0),
            ]
        };
        let mut left = square(1.0, 1.0, 2.0);
        left.reverse();
        let mut right = square(5.0, 1.0, 2.0);
        right.reverse();

        let face = planar_face(&square(0.0, 0.0, 8.0), &[left, right])?;
        assert_eq!(face.boundaries().len(), 3);
        let solid = SolidBuilder::extrude(&face, up(1.0))?;
        assert_eq!(solid.face_iter().count(), 2 + 4 * 3);
        Ok(())
    }

    #[test]
    fn tilted_extrusion_is_accepted() -> Result<()> {
        let profile = HexagonProfile::new(Point2::new(0.0, 0.0), 2.0);
        let solid = SolidBuilder::hexagon_prism(&profile, Vector3::new(3.0, 0.0, 4.0))?;
        assert_eq!(solid.face_iter().count(), 8);
        Ok(())
    }

    #[test]
    fn flat_extrusion_is_rejected() {
        let profile = HexagonProfile::new(Point2::new(0.0, 0.0), 2.0);
        assert!(SolidBuilder::hexagon_prism(&profile, Vector3::new(1.0, 0.0, 0.0)).is_err());
    }

    #[test]
    fn polygon_wire_needs_three_points() {
        let points = [Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)];
        assert!(polygon_wire(&points).is_err());
    }

    #[test]
    fn compound_merges_into_multi_shell_solid() -> Result<()> {
        let tol = Tolerance::default();
        let compound: Compound = [0.0, 30.0]
            .into_iter()
            .map(|x| {
                let ring = HexRingProfile::new(Point2::new(x, 0.0), 10.0, 1.0);
                SolidBuilder::hex_ring_prism(&ring, up(5.0), &tol)
            })
            .collect::<Result<Vec<_>>>()?
            .into();
        assert_eq!(compound.len(), 2);
        let merged = compound.to_solid()?;
        assert_eq!(merged.boundaries().len(), 2);
        assert_eq!(merged.face_iter().count(), 28);
        Ok(())
    }

    #[test]
    fn empty_compound_cannot_merge() {
        assert!(Compound::new().to_solid().is_err());
    }
}
