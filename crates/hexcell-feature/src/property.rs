use crate::params::HoneycombParams;
use crate::{Error, ParameterSet, ParameterValue, Result};
use hexcell_geometry::TiltAxis;

pub const PROPERTY_GROUP: &str = "Honeycomb";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropertyKind {
    Integer,
    Float,
    Bool,
    Enumeration(&'static [&'static str]),
}

impl std::fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropertyKind::Integer => f.write_str("integer"),
            PropertyKind::Float => f.write_str("float"),
            PropertyKind::Bool => f.write_str("bool"),
            PropertyKind::Enumeration(choices) => write!(f, "enum({})", choices.join("|")),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PropertySpec {
    pub name: &'static str,
    pub kind: PropertyKind,
    pub group: &'static str,
    pub description: &'static str,
}

const fn spec(name: &'static str, kind: PropertyKind, description: &'static str) -> PropertySpec {
    PropertySpec {
        name,
        kind,
        group: PROPERTY_GROUP,
        description,
    }
}

const PROPERTIES: [PropertySpec; 9] = [
    spec("hex_x", PropertyKind::Integer, "Number of hexes in x-direction"),
    spec("hex_y", PropertyKind::Integer, "Number of hexes in y-direction"),
    spec("side", PropertyKind::Float, "Hexagon side length"),
    spec("wall", PropertyKind::Float, "Wall thickness of hex walls"),
    spec("thickness", PropertyKind::Float, "Extrusion thickness"),
    spec("angle_deg", PropertyKind::Float, "Extrusion angle in degrees"),
    spec(
        "angle_axis",
        PropertyKind::Enumeration(TiltAxis::NAMES),
        "Axis of extrusion tilt",
    ),
    spec("outer_wall", PropertyKind::Bool, "Add reinforced outer wall"),
    spec(
        "fuse_result",
        PropertyKind::Bool,
        "Fuse all hexes and outer wall into one solid",
    ),
];

/// Every honeycomb property in declaration order.
pub fn properties() -> &'static [PropertySpec] {
    &PROPERTIES
}

pub fn property(name: &str) -> Option<&'static PropertySpec> {
    PROPERTIES.iter().find(|spec| spec.name == name)
}

impl HoneycombParams {
    pub fn get(&self, name: &str) -> Result<ParameterValue> {
        let value = match name {
            "hex_x" => ParameterValue::Integer(self.hex_x),
            "hex_y" => ParameterValue::Integer(self.hex_y),
            "side" => ParameterValue::Number(self.side),
            "wall" => ParameterValue::Number(self.wall),
            "thickness" => ParameterValue::Number(self.thickness),
            "angle_deg" => ParameterValue::Number(self.angle_deg),
            "angle_axis" => ParameterValue::Text(self.angle_axis.to_string()),
            "outer_wall" => ParameterValue::Bool(self.outer_wall),
            "fuse_result" => ParameterValue::Bool(self.fuse_result),
            _ => return Err(Error::UnknownProperty(name.to_string())),
        };
        Ok(value)
    }

    /// Sets one property, converting integers to floats where the property
    /// is a float. Values are not range-checked here; `validate` does that.
    pub fn set(&mut self, name: &str, value: ParameterValue) -> Result<()> {
        let spec = property(name).ok_or_else(|| Error::UnknownProperty(name.to_string()))?;
        match spec.kind {
            PropertyKind::Integer => {
                let ParameterValue::Integer(number) = value else {
                    return Err(type_error(spec, &value));
                };
                match name {
                    "hex_x" => self.hex_x = number,
                    _ => self.hex_y = number,
                }
            }
            PropertyKind::Float => {
                let number = match value {
                    ParameterValue::Number(number) => number,
                    ParameterValue::Integer(number) => number as f64,
                    other => return Err(type_error(spec, &other)),
                };
                match name {
                    "side" => self.side = number,
                    "wall" => self.wall = number,
                    "thickness" => self.thickness = number,
                    _ => self.angle_deg = number,
                }
            }
            PropertyKind::Bool => {
                let ParameterValue::Bool(flag) = value else {
                    return Err(type_error(spec, &value));
                };
                match name {
                    "outer_wall" => self.outer_wall = flag,
                    _ => self.fuse_result = flag,
                }
            }
            PropertyKind::Enumeration(_) => {
                let ParameterValue::Text(text) = &value else {
                    return Err(type_error(spec, &value));
                };
                self.angle_axis = text.parse()?;
            }
        }
        Ok(())
    }

    pub fn to_parameter_set(&self) -> ParameterSet {
        PROPERTIES
            .iter()
            .filter_map(|spec| {
                self.get(spec.name)
                    .ok()
                    .map(|value| (spec.name.to_string(), value))
            })
            .collect()
    }

    /// Builds parameters from a set, starting from the defaults for any
    /// property the set does not mention.
    pub fn from_parameter_set(parameters: &ParameterSet) -> Result<Self> {
        let mut params = HoneycombParams::default();
        for (name, value) in parameters {
            params.set(name, value.clone())?;
        }
        Ok(params)
    }
}

fn type_error(spec: &PropertySpec, value: &ParameterValue) -> Error {
    let expected = match spec.kind {
        PropertyKind::Integer => "integer",
        PropertyKind::Float => "number",
        PropertyKind::Bool => "bool",
        PropertyKind::Enumeration(_) => "text",
    };
    Error::PropertyType {
        name: spec.name.to_string(),
        expected,
        actual: value.type_name(),
    }
}
