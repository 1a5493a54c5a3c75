use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::{info, instrument};

use crate::{
    error::{ConfigurationError, OptimizerError},
    problem::{
        delivery_problem::{DeliveryProblem, DeliveryProblemBuilder},
        point::Point,
    },
};

use super::{
    genetic_search::GeneticSearch, route_splitter::split_routes, solution::Solution,
    solver_params::SolverParams, statistics::GenerationStatistics, two_opt::refine_routes,
};

type GenerationHandler = Box<dyn FnMut(&GenerationStatistics) + Send>;

pub struct Solver {
    problem: DeliveryProblem,
    params: SolverParams,
    on_generation_handler: Option<GenerationHandler>,
}

impl Solver {
    pub fn new(problem: DeliveryProblem, params: SolverParams) -> Result<Self, ConfigurationError> {
        params.validate()?;

        Ok(Solver {
            problem,
            params,
            on_generation_handler: None,
        })
    }

    pub fn problem(&self) -> &DeliveryProblem {
        &self.problem
    }

    pub fn params(&self) -> &SolverParams {
        &self.params
    }

    pub fn on_generation<F>(&mut self, callback: F)
    where
        F: FnMut(&GenerationStatistics) + Send + 'static,
    {
        self.on_generation_handler = Some(Box::new(callback));
    }

    /// Runs with a generator seeded from `params.seed`, or from the OS when there is none.
    pub fn solve(&mut self) -> Result<Solution, OptimizerError> {
        let mut rng = match self.params.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };

        self.solve_with_rng(&mut rng)
    }

    #[instrument(skip_all)]
    pub fn solve_with_rng<R>(&mut self, rng: &mut R) -> Result<Solution, OptimizerError>
    where
        R: Rng,
    {
        let search = GeneticSearch::new(&self.problem, &self.params);
        let handler = &mut self.on_generation_handler;

        let outcome = search.run(rng, |statistics| {
            if let Some(callback) = handler.as_mut() {
                callback(statistics);
            }
        })?;

        let mut routes = split_routes(outcome.best.genes(), &self.problem)?;
        let improvements = refine_routes(&mut routes, &self.problem)?;

        let solution = Solution::new(
            routes,
            outcome.history,
            outcome.best_fitness,
            search.evaluator(),
        )?;

        info!(
            vehicles = solution.vehicle_count(),
            fitness = solution.fitness(),
            cost = solution.cost(),
            distance = solution.distance(),
            improvements,
            "Solved"
        );

        Ok(solution)
    }
}

/// Builds the problem from `points` and runs a single optimization.
pub fn optimize(
    points: Vec<Point>,
    capacity: f64,
    params: SolverParams,
) -> Result<Solution, OptimizerError> {
    let mut builder = DeliveryProblemBuilder::default();
    builder.set_points(points).set_capacity(capacity);

    let mut solver = Solver::new(builder.build()?, params)?;
    solver.solve()
}
