use geo::orient::Direction;
use geo::{Area, BooleanOps, Coord, LineString, MultiPolygon, Orient, Polygon};
use hexcell_geometry::{HexRingProfile, HexagonProfile};
use hexcell_topology::{Face, Point3, planar_face};
use thiserror::Error;

/// Outline clean-up distance for fused regions: vertices closer than this to
/// their predecessor, or to the line through their neighbours, are dropped.
pub const DEFAULT_SHAPEOPS_TOLERANCE: f64 = 1.0e-4;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("union of {0} profiles is empty")]
    EmptyUnion(usize),
    #[error("fused region {index} has a degenerate outline")]
    DegenerateRegion { index: usize },
    #[error(transparent)]
    Topology(#[from] hexcell_topology::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Planar union of hex rings, oriented with counter-clockwise exteriors and
/// clockwise holes.
pub fn union_rings(rings: &[HexRingProfile]) -> MultiPolygon<f64> {
    let mut fused = MultiPolygon::new(Vec::new());
    for ring in rings {
        fused = fused.union(&MultiPolygon::new(vec![ring_polygon(ring)]));
    }
    fused.orient(Direction::Default)
}

/// Fuses hex rings in the plane and returns one face per connected region.
pub fn fuse_ring_faces(rings: &[HexRingProfile], tol: f64) -> Result<Vec<Face>> {
    ensure_tolerance(tol)?;
    if rings.is_empty() {
        return Err(Error::InvalidParameter(
            "fusion needs at least one profile".to_string(),
        ));
    }

    let fused = union_rings(rings);
    let mut faces = Vec::with_capacity(fused.0.len());
    for (index, region) in fused.0.iter().enumerate() {
        if region.unsigned_area() <= tol * tol {
            continue;
        }
        let boundary = simplified_loop(region.exterior(), tol);
        if boundary.len() < 3 {
            return Err(Error::DegenerateRegion { index });
        }
        let holes: Vec<Vec<Point3>> = region
            .interiors()
            .iter()
            .map(|hole| simplified_loop(hole, tol))
            .filter(|hole| hole.len() >= 3)
            .collect();
        faces.push(planar_face(&boundary, &holes)?);
    }

    if faces.is_empty() {
        return Err(Error::EmptyUnion(rings.len()));
    }
    Ok(faces)
}

fn ring_polygon(ring: &HexRingProfile) -> Polygon<f64> {
    let exterior = hexagon_line(&ring.outer());
    let interiors = if ring.inner_radius() > 0.0 {
        vec![hexagon_line(&ring.inner())]
    } else {
        Vec::new()
    };
    Polygon::new(exterior, interiors)
}

fn hexagon_line(hexagon: &HexagonProfile) -> LineString<f64> {
    hexagon
        .corners()
        .iter()
        .map(|corner| Coord {
            x: corner.x,
            y: corner.y,
        })
        .collect::<Vec<_>>()
        .into()
}

/// Open point loop from a closed line string, without duplicate or
/// collinear vertices.
fn simplified_loop(line: &LineString<f64>, tol: f64) -> Vec<Point3> {
    let mut points: Vec<Coord<f64>> = Vec::with_capacity(line.0.len());
    for coord in &line.0 {
        match points.last() {
            Some(last) if distance(*last, *coord) <= tol => {}
            _ => points.push(*coord),
        }
    }
    while points.len() > 1 && distance(points[0], points[points.len() - 1]) <= tol {
        points.pop();
    }

    let mut changed = true;
    while changed && points.len() >= 3 {
        changed = false;
        let count = points.len();
        for idx in 0..count {
            let prev = points[(idx + count - 1) % count];
            let next = points[(idx + 1) % count];
            if distance_to_line(points[idx], prev, next) <= tol {
                points.remove(idx);
                changed = true;
                break;
            }
        }
    }

    points
        .into_iter()
        .map(|coord| Point3::new(coord.x, coord.y, 0.0))
        .collect()
}

fn distance(a: Coord<f64>, b: Coord<f64>) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

fn distance_to_line(point: Coord<f64>, start: Coord<f64>, end: Coord<f64>) -> f64 {
    let length = distance(start, end);
    if length <= f64::EPSILON {
        return distance(point, start);
    }
    let cross = (end.x - start.x) * (point.y - start.y) - (end.y - start.y) * (point.x - start.x);
    cross.abs() / length
}

fn ensure_tolerance(tol: f64) -> Result<()> {
    hexcell_base::ensure_positive("tolerance", tol)
        .map_err(|_| Error::InvalidParameter("tolerance must be > 0".to_string()))
}
