//! geocap CLI
//!
//! Reads a CSV of points (`lat,lng[,name]`) and prints its convex hull or
//! its minimum enclosing circle.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use geocap::io::{read_points_file, PointRecord};
use geocap::{Result, Solver, SolverConfig, TangentBase};

#[derive(Parser)]
#[command(name = "geocap")]
#[command(version)]
#[command(about = "Convex hulls and minimum enclosing circles of geographic points")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Tangent-plane base used for the hull
    #[arg(long, value_enum, default_value_t = Base::Centroid, global = true)]
    base: Base,

    /// Largest hull the circle search accepts (0 = unbounded)
    #[arg(long, default_value_t = 128, global = true)]
    max_hull_size: usize,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the convex hull vertices in order
    Hull {
        /// CSV file with lat,lng[,name] columns
        file: PathBuf,
    },
    /// Print the minimum enclosing circle
    Circle {
        /// CSV file with lat,lng[,name] columns
        file: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Base {
    Pole,
    Centroid,
}

impl From<Base> for TangentBase {
    fn from(base: Base) -> Self {
        match base {
            Base::Pole => TangentBase::Pole,
            Base::Centroid => TangentBase::Centroid,
        }
    }
}

fn main() -> ExitCode {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "warn");
    }
    env_logger::try_init().ok();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let max_hull_size = if cli.max_hull_size == 0 { None } else { Some(cli.max_hull_size) };
    let solver = Solver::new(
        SolverConfig::default()
            .with_base(cli.base.into())
            .with_max_hull_size(max_hull_size),
    );

    match &cli.command {
        Commands::Hull { file } => {
            let records = read_points_file(file)?;
            let points: Vec<_> = records.iter().map(PointRecord::point).collect();
            let hull: Vec<&PointRecord> = solver
                .hull_indices(&points)?
                .into_iter()
                .map(|index| &records[index])
                .collect();

            if cli.json {
                println!("{}", to_json(&hull));
            } else {
                println!("{} points, {} hull vertices", records.len(), hull.len());
                for record in hull {
                    match &record.name {
                        Some(name) => println!("  {:>11.6} {:>11.6}  {}", record.lat, record.lng, name),
                        None => println!("  {:>11.6} {:>11.6}", record.lat, record.lng),
                    }
                }
            }
        }
        Commands::Circle { file } => {
            let records = read_points_file(file)?;
            let points: Vec<_> = records.iter().map(PointRecord::point).collect();
            let circle = solver.solve(&points)?;

            if cli.json {
                println!("{}", to_json(&circle));
            } else {
                match circle {
                    Some(circle) => {
                        println!("Center: {:.6}, {:.6}", circle.center.lat, circle.center.lng);
                        println!("Radius: {:.1} m ({:.6} rad)", circle.radius_meters, circle.angular_radius);
                        println!("Boundary point: {:.6}, {:.6}", circle.reference.lat, circle.reference.lng);
                    }
                    None => println!("No points, no circle"),
                }
            }
        }
    }

    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
}
