use rand::{Rng, seq::IndexedRandom};

use crate::{
    error::OperationalError,
    solver::{chromosome::Chromosome, fitness::FitnessEvaluator},
};

/// Samples `tournament_size` distinct individuals and keeps the fittest.
///
/// Fitness is not cached, every call evaluates its competitors again.
#[derive(Debug, Clone, Copy)]
pub struct TournamentSelector {
    tournament_size: usize,
}

impl TournamentSelector {
    pub fn new(tournament_size: usize) -> Self {
        TournamentSelector { tournament_size }
    }

    pub fn tournament_size(&self) -> usize {
        self.tournament_size
    }

    pub fn select<'a, R>(
        &self,
        population: &'a [Chromosome],
        evaluator: &FitnessEvaluator,
        rng: &mut R,
    ) -> Result<&'a Chromosome, OperationalError>
    where
        R: Rng,
    {
        if population.is_empty() {
            return Err(OperationalError::EmptyPopulation);
        }

        if self.tournament_size > population.len() {
            return Err(OperationalError::TournamentTooLarge {
                tournament_size: self.tournament_size,
                population_size: population.len(),
            });
        }

        let mut winner: Option<(&Chromosome, f64)> = None;
        for competitor in population.choose_multiple(rng, self.tournament_size) {
            let fitness = evaluator.evaluate(competitor)?;

            // Ties keep the competitor drawn first
            if winner.is_none_or(|(_, best)| fitness < best) {
                winner = Some((competitor, fitness));
            }
        }

        winner
            .map(|(chromosome, _)| chromosome)
            .ok_or(OperationalError::EmptyPopulation)
    }
}
