use crate::{Point2, Point3};

/// Regular pointy-top hexagon. `radius` is the circumradius, which equals
/// the side length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HexagonProfile {
    pub center: Point2,
    pub radius: f64,
}

impl HexagonProfile {
    pub fn new(center: Point2, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Corners at 30°, 90°, ... 330°, counter-clockwise, on the z = 0 plane.
    pub fn corners(&self) -> [Point3; 6] {
        hex_points(self.center.x, self.center.y, self.radius)
    }

    /// Flat-to-flat width.
    pub fn width(&self) -> f64 {
        3.0_f64.sqrt() * self.radius
    }

    pub fn height(&self) -> f64 {
        2.0 * self.radius
    }

    pub fn area(&self) -> f64 {
        1.5 * 3.0_f64.sqrt() * self.radius * self.radius
    }
}

/// Hexagonal ring: a hexagon with a concentric hexagonal hole whose
/// circumradius is `wall` smaller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HexRingProfile {
    pub center: Point2,
    pub outer_radius: f64,
    pub wall: f64,
}

impl HexRingProfile {
    pub fn new(center: Point2, outer_radius: f64, wall: f64) -> Self {
        Self {
            center,
            outer_radius,
            wall,
        }
    }

    pub fn inner_radius(&self) -> f64 {
        (self.outer_radius - self.wall).max(0.0)
    }

    pub fn outer(&self) -> HexagonProfile {
        HexagonProfile::new(self.center, self.outer_radius)
    }

    pub fn inner(&self) -> HexagonProfile {
        HexagonProfile::new(self.center, self.inner_radius())
    }

    pub fn area(&self) -> f64 {
        self.outer().area() - self.inner().area()
    }
}

pub fn hex_points(cx: f64, cy: f64, radius: f64) -> [Point3; 6] {
    std::array::from_fn(|i| {
        let angle = (60.0 * i as f64 + 30.0).to_radians();
        Point3::new(cx + radius * angle.cos(), cy + radius * angle.sin(), 0.0)
    })
}
