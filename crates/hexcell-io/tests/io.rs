use anyhow::Result;
use hexcell_feature::{BuildOptions, HoneycombParams, TiltAxis, build_honeycomb};
use hexcell_io::{
    DEFAULT_TESSELLATION_TOLERANCE, ExportFormat, export_obj, export_shape, export_step,
    load_params, save_params, triangulate_shape,
};
use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_path(file_name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let stamp = match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(duration) => duration.as_nanos(),
        Err(_) => 0,
    };
    path.push(format!("hexcell_{stamp}_{file_name}"));
    path
}

fn small_params() -> HoneycombParams {
    HoneycombParams {
        hex_x: 2,
        hex_y: 2,
        side: 6.0,
        wall: 0.8,
        thickness: 10.0,
        ..HoneycombParams::default()
    }
}

#[test]
fn export_step_creates_file() -> Result<()> {
    let built = build_honeycomb(&small_params(), &BuildOptions::default())?;
    let path = temp_path("panel.step");

    let format = export_shape(&built.shape, &path, DEFAULT_TESSELLATION_TOLERANCE)?;
    assert_eq!(format, ExportFormat::Step);

    let text = fs::read_to_string(&path)?;
    assert!(text.contains("ISO-10303-21"));

    let _ = fs::remove_file(&path);
    Ok(())
}

#[test]
fn export_obj_creates_file() -> Result<()> {
    let built = build_honeycomb(&small_params(), &BuildOptions::default())?;
    let path = temp_path("panel.obj");

    export_shape(&built.shape, &path, DEFAULT_TESSELLATION_TOLERANCE)?;

    let text = fs::read_to_string(&path)?;
    assert!(text.lines().any(|line| line.starts_with("v ")));
    assert!(text.lines().any(|line| line.starts_with("f ")));

    let _ = fs::remove_file(&path);
    Ok(())
}

#[test]
fn export_obj_writes_a_single_solid() -> Result<()> {
    let params = HoneycombParams {
        hex_x: 1,
        hex_y: 1,
        outer_wall: false,
        ..small_params()
    };
    let built = build_honeycomb(&params, &BuildOptions::default())?;
    let solid = built.shape.to_solid()?;
    let path = temp_path("cell.obj");

    export_obj(&solid, &path, DEFAULT_TESSELLATION_TOLERANCE)?;
    let text = fs::read_to_string(&path)?;
    let vertices = text.lines().filter(|line| line.starts_with("v ")).count();
    assert!(vertices >= 12);
    assert!(text.lines().any(|line| line.starts_with("f ")));

    assert!(export_obj(&solid, &path, 0.0).is_err());
    let _ = fs::remove_file(&path);
    Ok(())
}

#[test]
fn export_step_writes_fused_and_compound_shapes() -> Result<()> {
    for fuse_result in [false, true] {
        let params = HoneycombParams {
            fuse_result,
            ..small_params()
        };
        let built = build_honeycomb(&params, &BuildOptions::default())?;
        assert_eq!(built.shape.is_fused(), fuse_result);

        let path = temp_path(&format!("panel_{fuse_result}.stp"));
        export_step(&built.shape, &path)?;
        let text = fs::read_to_string(&path)?;
        assert!(text.contains("ISO-10303-21"));
        assert!(text.contains("CLOSED_SHELL"));
        let _ = fs::remove_file(&path);
    }
    Ok(())
}

#[test]
fn unknown_extension_is_rejected() -> Result<()> {
    let built = build_honeycomb(&small_params(), &BuildOptions::default())?;
    let path = temp_path("panel.iges");
    assert!(export_shape(&built.shape, &path, DEFAULT_TESSELLATION_TOLERANCE).is_err());
    assert!(!path.exists());
    Ok(())
}

#[test]
fn triangulation_covers_every_prism() -> Result<()> {
    let single = HoneycombParams {
        hex_x: 1,
        hex_y: 1,
        outer_wall: false,
        ..small_params()
    };
    let one = build_honeycomb(&single, &BuildOptions::default())?;
    let four = build_honeycomb(
        &HoneycombParams {
            outer_wall: false,
            ..small_params()
        },
        &BuildOptions::default(),
    )?;

    let one_mesh = triangulate_shape(&one.shape, DEFAULT_TESSELLATION_TOLERANCE)?;
    let four_mesh = triangulate_shape(&four.shape, DEFAULT_TESSELLATION_TOLERANCE)?;
    assert!(!one_mesh.positions().is_empty());
    assert!(four_mesh.faces().len() > one_mesh.faces().len());
    Ok(())
}

#[test]
fn params_file_round_trips_and_validates() -> Result<()> {
    let params = HoneycombParams {
        angle_axis: TiltAxis::Y,
        fuse_result: true,
        ..small_params()
    };
    let path = temp_path("params.json");
    save_params(&params, &path)?;
    assert_eq!(load_params(&path)?, params);

    fs::write(&path, r#"{ "hex_x": 0 }"#)?;
    assert!(load_params(&path).is_err());

    fs::write(&path, r#"{ "side": 12.5 }"#)?;
    let partial = load_params(&path)?;
    assert_eq!(partial.side, 12.5);
    assert_eq!(partial.hex_x, HoneycombParams::default().hex_x);

    let _ = fs::remove_file(&path);
    Ok(())
}
