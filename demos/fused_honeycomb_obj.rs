use anyhow::Result;
use hexcell_feature::{BuildOptions, HoneycombParams, TiltAxis, build_honeycomb};
use hexcell_io::{DEFAULT_TESSELLATION_TOLERANCE, export_shape};

fn main() -> Result<()> {
    let params = HoneycombParams {
        hex_x: 3,
        hex_y: 3,
        angle_axis: TiltAxis::Y,
        fuse_result: true,
        ..HoneycombParams::default()
    };
    let built = build_honeycomb(&params, &BuildOptions::default())?;
    if let Some(reason) = &built.report.fusion_error {
        eprintln!("fusion fell back to a compound: {reason}");
    }
    export_shape(&built.shape, "out/honeycomb.obj", DEFAULT_TESSELLATION_TOLERANCE)?;
    Ok(())
}
