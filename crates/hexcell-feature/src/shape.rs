use crate::Result;
use hexcell_topology::{Compound, Solid};

/// Result of one recompute: either a single fused solid or the unfused
/// compound of every ring prism.
#[derive(Clone, Debug)]
pub enum HoneycombShape {
    Fused(Solid),
    Compound(Compound),
}

impl HoneycombShape {
    pub fn is_fused(&self) -> bool {
        matches!(self, HoneycombShape::Fused(_))
    }

    pub fn solids(&self) -> &[Solid] {
        match self {
            HoneycombShape::Fused(solid) => std::slice::from_ref(solid),
            HoneycombShape::Compound(compound) => compound.solids(),
        }
    }

    pub fn solid_count(&self) -> usize {
        self.solids().len()
    }

    pub fn face_count(&self) -> usize {
        self.solids()
            .iter()
            .map(|solid| solid.face_iter().count())
            .sum()
    }

    pub fn to_solid(&self) -> Result<Solid> {
        match self {
            HoneycombShape::Fused(solid) => Ok(solid.clone()),
            HoneycombShape::Compound(compound) => Ok(compound.to_solid()?),
        }
    }
}
