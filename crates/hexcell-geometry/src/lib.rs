pub use truck_geometry::base::{Point2, Point3, Vector2, Vector3};

pub mod extrusion;
pub mod grid;
pub mod profiles;

pub use extrusion::{TiltAxis, extrusion_vector};
pub use grid::{HexCell, HexGrid};
pub use profiles::{HexRingProfile, HexagonProfile};
