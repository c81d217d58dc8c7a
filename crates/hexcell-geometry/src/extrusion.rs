use crate::Vector3;
use hexcell_base::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Axis about which the extrusion direction leans away from +Z.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TiltAxis {
    #[default]
    X,
    Y,
}

impl TiltAxis {
    pub const NAMES: &'static [&'static str] = &["x", "y"];

    pub fn as_str(&self) -> &'static str {
        match self {
            TiltAxis::X => "x",
            TiltAxis::Y => "y",
        }
    }
}

impl std::fmt::Display for TiltAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TiltAxis {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        match text.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(TiltAxis::X),
            "y" => Ok(TiltAxis::Y),
            other => Err(Error::InvalidParameter(format!(
                "angle_axis must be one of x, y (got {other:?})"
            ))),
        }
    }
}

/// Extrusion vector of length `thickness`, tilted by `angle_deg` from +Z.
/// Tilting about `X` leans the vector into +X, tilting about `Y` into +Y.
pub fn extrusion_vector(thickness: f64, angle_deg: f64, axis: TiltAxis) -> Vector3 {
    let angle = angle_deg.to_radians();
    let lean = thickness * angle.sin();
    let rise = thickness * angle.cos();
    match axis {
        TiltAxis::X => Vector3::new(lean, 0.0, rise),
        TiltAxis::Y => Vector3::new(0.0, lean, rise),
    }
}
