mod logger;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use gcs_render::{RenderOptions, Variant};
use gcs_scales::{Axis, ScaleModel, ScaleResult};
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "gcswheel",
    about = "Gear, speed and cadence slide-rule wheel generator",
    version
)]
struct Cli {
    /// Show debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the wheel layouts as PDF files
    Render {
        /// Directory for the output files
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,

        /// File name prefix
        #[arg(long, default_value = "gcswheel")]
        prefix: String,

        /// Render options JSON file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Only write these variants (default: all)
        #[arg(long, value_enum, num_args = 1..)]
        variant: Vec<VariantArg>,
    },

    /// Print the computed scale positions
    Table {
        /// Only print this scale
        #[arg(long, value_enum)]
        axis: Option<AxisArg>,

        /// Print angles in degrees instead of radians
        #[arg(long)]
        degrees: bool,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write the default render options to a JSON file
    Config {
        /// Output JSON file
        #[arg(short, long)]
        output: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum VariantArg {
    Combined,
    Base,
    Middle,
    Top,
}

#[derive(Clone, Copy, ValueEnum)]
enum AxisArg {
    Gear,
    Chainring,
    Cog,
    Speed,
    Cadence,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Combined => Self::Combined,
            VariantArg::Base => Self::Base,
            VariantArg::Middle => Self::Middle,
            VariantArg::Top => Self::Top,
        }
    }
}

impl From<AxisArg> for Axis {
    fn from(arg: AxisArg) -> Self {
        match arg {
            AxisArg::Gear => Self::GearInches,
            AxisArg::Chainring => Self::ChainringTeeth,
            AxisArg::Cog => Self::CogTeeth,
            AxisArg::Speed => Self::Speed,
            AxisArg::Cadence => Self::Cadence,
        }
    }
}

fn print_table(result: &ScaleResult, axes: &[Axis], degrees: bool) {
    let convert = |rad: f64| if degrees { rad.to_degrees() } else { rad };
    let unit = if degrees { "deg" } else { "rad" };

    for &axis in axes {
        println!("{}:", axis.name());
        for point in result.series(axis) {
            let angle = if degrees {
                point.final_angle_degrees()
            } else {
                point.final_angle
            };
            println!("  {:>4}  {:>12.6} {}", point.raw, angle, unit);
        }
    }

    println!("Reference marks:");
    println!("  CR  {:>12.6} {}", convert(result.cr_reference_angle), unit);
    println!("  GR  {:>12.6} {}", convert(result.sp_reference_angle), unit);
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    logger::StderrLogger::new(level).init()?;

    match cli.command {
        Commands::Render {
            output_dir,
            prefix,
            config,
            variant,
        } => {
            let options = match config {
                Some(path) => RenderOptions::load(&path).await?,
                None => RenderOptions::default(),
            };
            let variants: Vec<Variant> = if variant.is_empty() {
                Variant::ALL.to_vec()
            } else {
                variant.into_iter().map(Variant::from).collect()
            };

            let result = ScaleModel::new().compute()?;
            let written =
                gcs_render::render_selected(&result, &options, &variants, &output_dir, &prefix)
                    .await?;
            log::info!(
                "Generated {} layouts → {}",
                written.len(),
                output_dir.display()
            );
        }

        Commands::Table {
            axis,
            degrees,
            json,
        } => {
            let result = ScaleModel::new().compute()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                let axes: Vec<Axis> = match axis {
                    Some(axis) => vec![axis.into()],
                    None => Axis::ALL.to_vec(),
                };
                print_table(&result, &axes, degrees);
            }
        }

        Commands::Config { output } => {
            RenderOptions::default().save(&output).await?;
            log::info!("Wrote default options → {}", output.display());
        }
    }

    Ok(())
}
