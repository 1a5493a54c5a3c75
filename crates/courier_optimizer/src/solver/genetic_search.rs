use rand::Rng;
use tracing::{debug, info};

use crate::{
    error::{OperationalError, OptimizerError},
    problem::delivery_problem::DeliveryProblem,
    selector::select_tournament::TournamentSelector,
};

use super::{
    chromosome::Chromosome,
    crossover::order_crossover,
    fitness::FitnessEvaluator,
    mutation::swap_mutation,
    population::Population,
    solver_params::SolverParams,
    statistics::{ConvergenceHistory, GenerationStatistics},
};

/// Best chromosome found by a run and the best-known fitness after every generation.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub best: Chromosome,
    pub best_fitness: f64,
    pub history: ConvergenceHistory,
}

/// Generational GA over delivery orders with single-elite carry-over.
///
/// Runs exactly `generations` generations, there is no early stop.
pub struct GeneticSearch<'a> {
    problem: &'a DeliveryProblem,
    params: &'a SolverParams,
    evaluator: FitnessEvaluator<'a>,
    selector: TournamentSelector,
}

impl<'a> GeneticSearch<'a> {
    pub fn new(problem: &'a DeliveryProblem, params: &'a SolverParams) -> Self {
        GeneticSearch {
            problem,
            params,
            evaluator: FitnessEvaluator::new(problem, params.fitness_params()),
            selector: TournamentSelector::new(params.tournament_size),
        }
    }

    pub fn evaluator(&self) -> &FitnessEvaluator<'a> {
        &self.evaluator
    }

    pub fn run<R, F>(&self, rng: &mut R, mut on_generation: F) -> Result<SearchOutcome, OptimizerError>
    where
        R: Rng,
        F: FnMut(&GenerationStatistics),
    {
        self.params.validate()?;

        let delivery_ids = self.problem.delivery_ids();
        let mut population = Population::random(&delivery_ids, self.params.population_size, rng);

        let mut best: Option<(Chromosome, f64)> = None;
        let mut history = ConvergenceHistory::with_capacity(self.params.generations);

        info!(
            deliveries = delivery_ids.len(),
            population_size = self.params.population_size,
            generations = self.params.generations,
            "Starting genetic search"
        );

        for generation in 0..self.params.generations {
            let scores = population.evaluate(&self.evaluator)?;
            let &(best_index, population_best) =
                scores.first().ok_or(OperationalError::EmptyPopulation)?;

            let improved = best
                .as_ref()
                .is_none_or(|(_, best_fitness)| population_best < *best_fitness);

            if improved {
                best = Some((population.individual(best_index).clone(), population_best));
                info!(generation, fitness = population_best, "New best");
            }

            let (elite, best_fitness) = match &best {
                Some((chromosome, fitness)) => (chromosome, *fitness),
                None => return Err(OperationalError::EmptyPopulation.into()),
            };

            history.push(best_fitness);

            let statistics = GenerationStatistics {
                generation,
                best_fitness,
                population_best,
                population_mean: scores.iter().map(|(_, fitness)| fitness).sum::<f64>()
                    / scores.len() as f64,
                population_worst: scores.last().map_or(population_best, |&(_, f)| f),
                improved,
            };

            debug!(
                generation,
                best_fitness,
                population_best,
                population_mean = statistics.population_mean,
                "Generation done"
            );

            on_generation(&statistics);

            population = self.reproduce(&population, elite, rng)?;
        }

        let (best, best_fitness) = best.ok_or(OperationalError::EmptyPopulation)?;

        info!(best_fitness, "Genetic search finished");

        Ok(SearchOutcome {
            best,
            best_fitness,
            history,
        })
    }

    /// Next population: the elite first, then offspring bred from the current population.
    fn reproduce<R>(
        &self,
        population: &Population,
        elite: &Chromosome,
        rng: &mut R,
    ) -> Result<Population, OperationalError>
    where
        R: Rng,
    {
        let size = self.params.population_size;
        let mut individuals = Vec::with_capacity(size);
        individuals.push(elite.clone());

        while individuals.len() < size {
            let parent1 = self
                .selector
                .select(population.individuals(), &self.evaluator, rng)?;
            let parent2 = self
                .selector
                .select(population.individuals(), &self.evaluator, rng)?;

            let mut offspring = order_crossover(parent1, parent2, rng);
            swap_mutation(&mut offspring, self.params.mutation_rate, rng);

            individuals.push(offspring);
        }

        Ok(Population::from_individuals(individuals))
    }
}
