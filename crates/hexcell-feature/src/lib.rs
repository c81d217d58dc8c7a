use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

pub mod build;
pub mod feature;
pub mod params;
pub mod property;
pub mod shape;

pub use build::{BuildOptions, BuildReport, HoneycombBuild, build_honeycomb, ring_profiles};
pub use feature::{FEATURE_TYPE, HoneycombFeature, make_honeycomb};
pub use hexcell_geometry::TiltAxis;
pub use params::{HoneycombParams, MAX_CELLS};
pub use property::{PROPERTY_GROUP, PropertyKind, PropertySpec, properties, property};
pub use shape::HoneycombShape;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ParameterValue {
    Integer(i64),
    Number(f64),
    Bool(bool),
    Text(String),
}

impl ParameterValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            ParameterValue::Integer(_) => "integer",
            ParameterValue::Number(_) => "number",
            ParameterValue::Bool(_) => "bool",
            ParameterValue::Text(_) => "text",
        }
    }
}

impl std::fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParameterValue::Integer(value) => write!(f, "{value}"),
            ParameterValue::Number(value) => write!(f, "{value}"),
            ParameterValue::Bool(value) => write!(f, "{value}"),
            ParameterValue::Text(value) => f.write_str(value),
        }
    }
}

pub type ParameterSet = BTreeMap<String, ParameterValue>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("unknown property: {0}")]
    UnknownProperty(String),
    #[error("property {name} expects {expected}, got {actual}")]
    PropertyType {
        name: String,
        expected: &'static str,
        actual: &'static str,
    },
    #[error(transparent)]
    Base(#[from] hexcell_base::Error),
    #[error(transparent)]
    Topology(#[from] hexcell_topology::Error),
    #[error(transparent)]
    ShapeOps(#[from] hexcell_shapeops::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
