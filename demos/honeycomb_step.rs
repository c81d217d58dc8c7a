use anyhow::Result;
use hexcell_feature::make_honeycomb;
use hexcell_io::{DEFAULT_TESSELLATION_TOLERANCE, export_shape};

fn main() -> Result<()> {
    let feature = make_honeycomb()?;
    if let Some(shape) = feature.shape() {
        export_shape(shape, "out/honeycomb.step", DEFAULT_TESSELLATION_TOLERANCE)?;
    }
    Ok(())
}
