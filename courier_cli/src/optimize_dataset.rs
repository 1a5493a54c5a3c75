use std::path::{Path, PathBuf};

use clap::Args;
use courier_optimizer::{
    parsers::{
        cvrplib::{CVRPLibParser, parse_solution_file},
        parser::DatasetParser,
    },
    solver::{solver::Solver, solver_params::SolverParams},
};
use indicatif::{ProgressBar, ProgressStyle};
use jiff::Timestamp;
use rayon::prelude::*;
use tracing::{error, info};

use crate::{
    file_utils::dataset_files,
    report::{self, DatasetRow},
};

#[derive(Args)]
pub struct OptimizeDatasetArgs {
    /// A CVRPLIB `.vrp` file or a folder containing them
    #[arg(short, long)]
    dataset: PathBuf,

    #[arg(short, long)]
    generations: Option<usize>,

    #[arg(short, long)]
    population_size: Option<usize>,

    /// Seed shared by every run, each instance still owns its generator
    #[arg(short, long)]
    seed: Option<u64>,
}

pub fn run(args: OptimizeDatasetArgs) -> Result<(), anyhow::Error> {
    info!("Optimizing dataset {}", args.dataset.display());
    let paths = dataset_files(&args.dataset, "vrp")?;

    let mut params = SolverParams {
        seed: args.seed,
        ..SolverParams::default()
    };

    if let Some(generations) = args.generations {
        params.generations = generations;
    }

    if let Some(population_size) = args.population_size {
        params.population_size = population_size;
    }

    params.validate()?;

    let bar = ProgressBar::new(paths.len() as u64);
    bar.set_style(ProgressStyle::default_bar().template("[{bar:40}] {pos}/{len} instances")?);

    let mut rows = paths
        .par_iter()
        .filter_map(|path| {
            let row = solve_instance(path, &params);
            bar.inc(1);

            match row {
                Ok(row) => Some(row),
                Err(err) => {
                    error!("Failed to solve {}: {err:#}", path.display());
                    None
                }
            }
        })
        .collect::<Vec<_>>();

    bar.finish_and_clear();
    rows.sort_by(|a, b| a.instance.cmp(&b.instance));

    println!("{}", report::dataset_table(&rows));

    Ok(())
}

fn solve_instance(path: &Path, params: &SolverParams) -> Result<DatasetRow, anyhow::Error> {
    let start = Timestamp::now();

    let problem = CVRPLibParser.parse(path)?;
    let deliveries = problem.number_of_deliveries();

    let mut solver = Solver::new(problem, params.clone())?;
    let solution = solver.solve()?;

    let seconds = Timestamp::now().duration_since(start).as_secs_f64();

    Ok(DatasetRow {
        instance: path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string()),
        deliveries,
        vehicles: solution.vehicle_count(),
        distance: solution.distance(),
        best_known: parse_solution_file(path.with_extension("sol")),
        seconds,
    })
}
