use crate::{Error, Result};
use hexcell_geometry::{HexGrid, TiltAxis, Vector3, extrusion_vector};
use serde::{Deserialize, Serialize};

/// Largest number of grid cells a panel may have.
pub const MAX_CELLS: i64 = 100_000;

/// Editable parameters of a honeycomb panel. Missing fields in serialized
/// input fall back to the defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoneycombParams {
    pub hex_x: i64,
    pub hex_y: i64,
    pub side: f64,
    pub wall: f64,
    pub thickness: f64,
    pub angle_deg: f64,
    pub angle_axis: TiltAxis,
    pub outer_wall: bool,
    pub fuse_result: bool,
}

impl Default for HoneycombParams {
    fn default() -> Self {
        Self {
            hex_x: 5,
            hex_y: 7,
            side: 15.6,
            wall: 0.9,
            thickness: 60.0,
            angle_deg: 10.0,
            angle_axis: TiltAxis::X,
            outer_wall: true,
            fuse_result: false,
        }
    }
}

impl HoneycombParams {
    pub fn validate(&self) -> Result<()> {
        if self.hex_x < 1 {
            return Err(Error::InvalidParameter("hex_x must be >= 1".to_string()));
        }
        if self.hex_y < 1 {
            return Err(Error::InvalidParameter("hex_y must be >= 1".to_string()));
        }
        let cells = self.hex_x.saturating_mul(self.hex_y);
        if cells > MAX_CELLS {
            return Err(Error::InvalidParameter(format!(
                "hex_x * hex_y must be at most {MAX_CELLS}, got {cells}"
            )));
        }
        hexcell_base::ensure_positive("side", self.side)?;
        hexcell_base::ensure_positive("wall", self.wall)?;
        hexcell_base::ensure_positive("thickness", self.thickness)?;
        if !self.angle_deg.is_finite() || self.angle_deg.abs() >= 90.0 {
            return Err(Error::InvalidParameter(
                "angle_deg must be strictly between -90 and 90".to_string(),
            ));
        }
        Ok(())
    }

    pub fn grid(&self) -> HexGrid {
        HexGrid::new(
            usize::try_from(self.hex_x).unwrap_or(0),
            usize::try_from(self.hex_y).unwrap_or(0),
            self.side,
        )
    }

    /// Wall share carried by each ring; two neighbouring rings add up to `wall`.
    pub fn half_wall(&self) -> f64 {
        self.wall * 0.5
    }

    pub fn extrusion(&self) -> Vector3 {
        extrusion_vector(self.thickness, self.angle_deg, self.angle_axis)
    }
}
