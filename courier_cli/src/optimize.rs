use std::{fs::File, io::BufReader, path::PathBuf};

use anyhow::Context;
use clap::Args;
use courier_optimizer::{
    json::types::{JsonDeliveryProblem, JsonSolution},
    solver::{solver::Solver, solver_params::SolverParams},
};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::report;

#[derive(Args)]
pub struct OptimizeArgs {
    /// The JSON problem to optimize
    #[arg(short = 'i', long)]
    input: PathBuf,

    #[arg(long, short = 'g')]
    generations: Option<usize>,

    #[arg(long, short = 'p')]
    population_size: Option<usize>,

    #[arg(long)]
    mutation_rate: Option<f64>,

    #[arg(long)]
    tournament_size: Option<usize>,

    #[arg(long)]
    critical_discount: Option<f64>,

    #[arg(long, short = 's')]
    seed: Option<u64>,

    /// Where to write the JSON solution
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,
}

impl OptimizeArgs {
    fn apply(&self, params: &mut SolverParams) {
        if let Some(generations) = self.generations {
            params.generations = generations;
        }

        if let Some(population_size) = self.population_size {
            params.population_size = population_size;
        }

        if let Some(mutation_rate) = self.mutation_rate {
            params.mutation_rate = mutation_rate;
        }

        if let Some(tournament_size) = self.tournament_size {
            params.tournament_size = tournament_size;
        }

        if let Some(critical_discount) = self.critical_discount {
            params.critical_discount = critical_discount;
        }

        if self.seed.is_some() {
            params.seed = self.seed;
        }
    }
}

pub fn run(args: OptimizeArgs) -> anyhow::Result<()> {
    let file = File::open(&args.input)
        .with_context(|| format!("Cannot open {}", args.input.display()))?;
    let content: JsonDeliveryProblem = serde_json::from_reader(BufReader::new(file))?;

    let problem = content.build_problem()?;
    let mut params = content.solver_params();
    args.apply(&mut params);

    info!(
        deliveries = problem.number_of_deliveries(),
        capacity = problem.capacity(),
        "Loaded {}",
        args.input.display()
    );

    let bar = ProgressBar::new(params.generations as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("[{bar:40}] {pos}/{len} generations {msg}")?,
    );

    let mut solver = Solver::new(problem, params)?;

    let generation_bar = bar.clone();
    solver.on_generation(move |statistics| {
        generation_bar.set_position(statistics.generation as u64 + 1);
        if statistics.improved {
            generation_bar.set_message(format!("best = {:.6}", statistics.best_fitness));
        }
    });

    let solution = solver.solve()?;
    bar.finish_and_clear();

    println!("{}", report::routes_table(&solution, solver.problem()));
    println!("{}", report::totals_table(&solution));

    if let Some(output) = args.output {
        if let Some(parent) = output.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&JsonSolution::from(&solution))?;
        std::fs::write(&output, json)?;
        info!("Solution written to {}", output.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROBLEM: &str = r#"{
        "capacity": 30,
        "points": [
            { "id": 0, "name": "Hub", "coordinates": [0, 0] },
            { "id": 1, "coordinates": [0.01, 0.02], "load": 12 },
            { "id": 2, "coordinates": [0.03, 0.01], "load": 20, "priority": "critical" },
            { "id": 3, "coordinates": [-0.02, 0.01], "load": 9 }
        ],
        "params": { "generations": 500, "population_size": 6 }
    }"#;

    #[test]
    fn test_flags_override_file_params() {
        let content: JsonDeliveryProblem = serde_json::from_str(PROBLEM).unwrap();
        let mut params = content.solver_params();

        let args = OptimizeArgs {
            input: PathBuf::new(),
            generations: Some(5),
            population_size: None,
            mutation_rate: Some(0.5),
            tournament_size: None,
            critical_discount: None,
            seed: Some(8),
            output: None,
        };
        args.apply(&mut params);

        assert_eq!(params.generations, 5);
        assert_eq!(params.population_size, 6);
        assert_eq!(params.mutation_rate, 0.5);
        assert_eq!(params.seed, Some(8));
    }

    #[test]
    fn test_run_writes_solution() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("problem.json");
        let output = dir.path().join("out/solution.json");
        std::fs::write(&input, PROBLEM).unwrap();

        run(OptimizeArgs {
            input,
            generations: Some(10),
            population_size: None,
            mutation_rate: None,
            tournament_size: None,
            critical_discount: None,
            seed: Some(2),
            output: Some(output.clone()),
        })
        .unwrap();

        let solution: JsonSolution =
            serde_json::from_str(&std::fs::read_to_string(output).unwrap()).unwrap();

        assert_eq!(solution.history.len(), 10);
        assert_eq!(solution.vehicles, 2);
        assert!(solution.routes.iter().all(|route| route.load <= 30.0));
    }

    #[test]
    fn test_run_rejects_invalid_problem() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("problem.json");
        std::fs::write(&input, r#"{ "capacity": 0, "points": [] }"#).unwrap();

        let result = run(OptimizeArgs {
            input,
            generations: None,
            population_size: None,
            mutation_rate: None,
            tournament_size: None,
            critical_discount: None,
            seed: None,
            output: None,
        });

        assert!(result.is_err());
    }
}
