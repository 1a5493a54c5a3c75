use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use courier_optimizer::{
    json::types::{JsonDeliveryProblem, JsonPoint},
    problem::point::Priority,
};
use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::info;

use crate::parsers;

#[derive(Subcommand)]
pub enum GenerateSubcommands {
    /// Random delivery scenario around a center
    Scenario {
        #[command(flatten)]
        args: ScenarioArgs,
    },
    JsonSchema {
        /// Output file of the problem schema
        #[arg(long, short = 'o')]
        out: PathBuf,

        /// Generate the solution schema instead
        #[arg(long)]
        solution: bool,
    },
}

#[derive(Args, Clone)]
pub struct ScenarioArgs {
    #[arg(long, short = 'n')]
    deliveries: usize,

    #[arg(long, short = 'c')]
    capacity: f64,

    /// Depot position as `LAT,LON`
    #[arg(long, value_parser = parsers::parse_center, default_value = "-23.5573,-46.6699")]
    center: (f64, f64),

    /// Maximum offset of a delivery from the center, in degrees
    #[arg(long, default_value_t = 0.08)]
    spread: f64,

    #[arg(long, value_parser = parsers::parse_ratio, default_value = "0.2")]
    critical_ratio: f64,

    #[arg(long, short = 's')]
    seed: Option<u64>,

    #[arg(long, short = 'o')]
    out: PathBuf,
}

pub fn run(subcommand: GenerateSubcommands) -> Result<(), anyhow::Error> {
    match subcommand {
        GenerateSubcommands::Scenario { args } => {
            let mut rng = match args.seed {
                Some(seed) => SmallRng::seed_from_u64(seed),
                None => SmallRng::from_os_rng(),
            };

            let scenario = generate_scenario(&args, &mut rng);
            write_file(&args.out, &serde_json::to_string_pretty(&scenario)?)?;

            info!(
                deliveries = args.deliveries,
                "Scenario written to {}",
                args.out.display()
            );
        }
        GenerateSubcommands::JsonSchema { out, solution } => {
            let schema = if solution {
                courier_optimizer::json::schema::generate_solution_json_schema()?
            } else {
                courier_optimizer::json::schema::generate_json_schema()?
            };

            write_file(&out, &schema)?;
        }
    }

    Ok(())
}

fn write_file(out: &Path, content: &str) -> Result<(), std::io::Error> {
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(out, content)
}

/// Depot at the center, deliveries spread uniformly within `spread` degrees with a load
/// between 5 and 25.
fn generate_scenario<R: Rng>(args: &ScenarioArgs, rng: &mut R) -> JsonDeliveryProblem {
    let (lat, lon) = args.center;
    let spread = if args.spread.is_finite() {
        args.spread.abs()
    } else {
        0.0
    };

    let mut points = Vec::with_capacity(args.deliveries + 1);
    points.push(JsonPoint {
        id: 0,
        name: Some(String::from("Depot")),
        coordinates: [lat, lon],
        load: 0.0,
        priority: Priority::Regular,
    });

    for id in 1..=args.deliveries {
        let coordinates = [
            lat + rng.random_range(-spread..=spread),
            lon + rng.random_range(-spread..=spread),
        ];
        let priority = if rng.random_bool(args.critical_ratio) {
            Priority::Critical
        } else {
            Priority::Regular
        };

        points.push(JsonPoint {
            id,
            name: Some(format!("Delivery {id}")),
            coordinates,
            load: rng.random_range(5..=25) as f64,
            priority,
        });
    }

    JsonDeliveryProblem {
        id: None,
        capacity: args.capacity,
        points,
        params: None,
    }
}
