use crate::build::{BuildOptions, BuildReport, build_honeycomb};
use crate::params::HoneycombParams;
use crate::shape::HoneycombShape;
use crate::{ParameterSet, ParameterValue, Result};
use hexcell_base::Guid;
use tracing::info;

pub const FEATURE_TYPE: &str = "Honeycomb";

/// Document object for one honeycomb panel. Parameter edits mark the
/// feature touched; `recompute` rebuilds the shape from the parameters.
#[derive(Clone, Debug)]
pub struct HoneycombFeature {
    pub guid: Guid,
    pub name: String,
    params: HoneycombParams,
    options: BuildOptions,
    shape: Option<HoneycombShape>,
    report: Option<BuildReport>,
    touched: bool,
}

impl HoneycombFeature {
    pub fn new(name: impl Into<String>, params: HoneycombParams) -> Self {
        Self {
            guid: Guid::new(),
            name: name.into(),
            params,
            options: BuildOptions::default(),
            shape: None,
            report: None,
            touched: true,
        }
    }

    pub fn with_options(mut self, options: BuildOptions) -> Self {
        self.options = options;
        self.touched = true;
        self
    }

    pub fn type_name(&self) -> &'static str {
        FEATURE_TYPE
    }

    pub fn params(&self) -> &HoneycombParams {
        &self.params
    }

    pub fn parameters(&self) -> ParameterSet {
        self.params.to_parameter_set()
    }

    pub fn set_params(&mut self, params: HoneycombParams) {
        if self.params != params {
            self.params = params;
            self.touched = true;
        }
    }

    /// Sets one property by name. The feature is only marked touched when
    /// the stored value actually changes.
    pub fn set_property(&mut self, name: &str, value: ParameterValue) -> Result<()> {
        let mut params = self.params.clone();
        params.set(name, value)?;
        self.set_params(params);
        Ok(())
    }

    pub fn property(&self, name: &str) -> Result<ParameterValue> {
        self.params.get(name)
    }

    pub fn is_touched(&self) -> bool {
        self.touched
    }

    pub fn touch(&mut self) {
        self.touched = true;
    }

    pub fn shape(&self) -> Option<&HoneycombShape> {
        self.shape.as_ref()
    }

    pub fn report(&self) -> Option<&BuildReport> {
        self.report.as_ref()
    }

    /// Rebuilds the shape. On failure the previous shape stays in place and
    /// the feature remains touched.
    pub fn recompute(&mut self) -> Result<&HoneycombShape> {
        let built = build_honeycomb(&self.params, &self.options)?;
        info!(
            name = %self.name,
            solids = built.shape.solid_count(),
            fused = built.report.fused,
            "honeycomb recomputed"
        );
        self.report = Some(built.report);
        self.touched = false;
        Ok(&*self.shape.insert(built.shape))
    }
}

/// Creates a honeycomb with default parameters and computes its shape.
pub fn make_honeycomb() -> Result<HoneycombFeature> {
    let mut feature = HoneycombFeature::new(FEATURE_TYPE, HoneycombParams::default());
    feature.recompute()?;
    Ok(feature)
}
