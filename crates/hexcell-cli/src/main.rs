use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use hexcell_base::Tolerance;
use hexcell_feature::{BuildOptions, HoneycombFeature, HoneycombParams, TiltAxis, properties};
use hexcell_io::{DEFAULT_TESSELLATION_TOLERANCE, export_shape, load_params, save_params};
use hexcell_shapeops::DEFAULT_SHAPEOPS_TOLERANCE;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "hexcell")]
#[command(about = "Parametric honeycomb panel generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build a honeycomb panel and export it as STEP or OBJ.
    Generate(GenerateArgs),
    /// Print or save the default parameters as JSON.
    Params(ParamsArgs),
    /// List the editable properties.
    Properties,
}

#[derive(Clone, Copy, ValueEnum)]
enum AxisArg {
    X,
    Y,
}

impl From<AxisArg> for TiltAxis {
    fn from(axis: AxisArg) -> Self {
        match axis {
            AxisArg::X => TiltAxis::X,
            AxisArg::Y => TiltAxis::Y,
        }
    }
}

#[derive(Args)]
struct GenerateArgs {
    /// JSON parameter file; flags below override its values.
    #[arg(long)]
    params: Option<PathBuf>,
    #[arg(long)]
    hex_x: Option<i64>,
    #[arg(long)]
    hex_y: Option<i64>,
    #[arg(long)]
    side: Option<f64>,
    #[arg(long)]
    wall: Option<f64>,
    #[arg(long)]
    thickness: Option<f64>,
    #[arg(long = "angle", allow_hyphen_values = true)]
    angle_deg: Option<f64>,
    #[arg(long = "axis", value_enum)]
    angle_axis: Option<AxisArg>,
    #[arg(long)]
    outer_wall: Option<bool>,
    #[arg(long)]
    fuse_result: Option<bool>,
    /// Distance under which fused outline points are merged.
    #[arg(long, default_value_t = DEFAULT_SHAPEOPS_TOLERANCE)]
    boolean_tol: f64,
    #[arg(long, default_value_t = DEFAULT_TESSELLATION_TOLERANCE)]
    mesh_tol: f64,
    #[arg(long)]
    out: PathBuf,
    #[arg(long)]
    name: Option<String>,
}

#[derive(Args)]
struct ParamsArgs {
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Generate(args) => generate(args),
        Command::Params(args) => write_default_params(args),
        Command::Properties => {
            list_properties();
            Ok(())
        }
    }
}

fn generate(args: GenerateArgs) -> Result<()> {
    let params = resolve_params(&args)?;
    let options = BuildOptions {
        tolerance: Tolerance::default(),
        boolean_tolerance: args.boolean_tol,
    };

    let name = match args.name.as_deref() {
        Some(value) if !value.trim().is_empty() => value.trim().to_string(),
        _ => "Honeycomb".to_string(),
    };
    let mut feature = HoneycombFeature::new(name, params).with_options(options);
    feature.recompute().context("failed to build honeycomb")?;

    if let Some(report) = feature.report() {
        if let Some(reason) = &report.fusion_error {
            warn!(%reason, "exported unfused compound");
        }
    }

    let shape = feature
        .shape()
        .context("honeycomb has no shape after recompute")?;
    let format = export_shape(shape, &args.out, args.mesh_tol).context("export failed")?;
    info!(
        path = %args.out.display(),
        format = ?format,
        solids = shape.solid_count(),
        "export complete"
    );
    Ok(())
}

fn resolve_params(args: &GenerateArgs) -> Result<HoneycombParams> {
    let mut params = match &args.params {
        Some(path) => load_params(path)?,
        None => HoneycombParams::default(),
    };

    if let Some(value) = args.hex_x {
        params.hex_x = value;
    }
    if let Some(value) = args.hex_y {
        params.hex_y = value;
    }
    if let Some(value) = args.side {
        params.side = value;
    }
    if let Some(value) = args.wall {
        params.wall = value;
    }
    if let Some(value) = args.thickness {
        params.thickness = value;
    }
    if let Some(value) = args.angle_deg {
        params.angle_deg = value;
    }
    if let Some(value) = args.angle_axis {
        params.angle_axis = value.into();
    }
    if let Some(value) = args.outer_wall {
        params.outer_wall = value;
    }
    if let Some(value) = args.fuse_result {
        params.fuse_result = value;
    }

    params.validate().context("invalid honeycomb parameters")?;
    Ok(params)
}

fn write_default_params(args: ParamsArgs) -> Result<()> {
    let params = HoneycombParams::default();
    match args.out {
        Some(path) => {
            save_params(&params, &path)?;
            info!(path = %path.display(), "default parameters written");
        }
        None => {
            let text = serde_json::to_string_pretty(&params).context("serialize parameters")?;
            println!("{text}");
        }
    }
    Ok(())
}

fn list_properties() {
    for spec in properties() {
        println!(
            "{:<12} {:<10} {:<10} {}",
            spec.name,
            spec.kind.to_string(),
            spec.group,
            spec.description
        );
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<GenerateArgs> {
        let cli = Cli::try_parse_from(args)?;
        match cli.command {
            Command::Generate(args) => Ok(args),
            _ => anyhow::bail!("expected generate command"),
        }
    }

    #[test]
    fn flags_override_defaults() -> Result<()> {
        let args = parse(&[
            "hexcell", "generate", "--hex-x", "3", "--angle", "-15", "--axis", "y",
            "--outer-wall", "false", "--out", "panel.step",
        ])?;
        let params = resolve_params(&args)?;
        assert_eq!(params.hex_x, 3);
        assert_eq!(params.hex_y, 7);
        assert_eq!(params.angle_deg, -15.0);
        assert_eq!(params.angle_axis, TiltAxis::Y);
        assert!(!params.outer_wall);
        assert!(!params.fuse_result);
        Ok(())
    }

    #[test]
    fn invalid_flags_are_rejected() -> Result<()> {
        let args = parse(&["hexcell", "generate", "--side", "0", "--out", "panel.obj"])?;
        assert!(resolve_params(&args).is_err());
        Ok(())
    }

    #[test]
    fn unknown_axis_fails_to_parse() {
        assert!(parse(&["hexcell", "generate", "--axis", "z", "--out", "panel.obj"]).is_err());
    }
}
