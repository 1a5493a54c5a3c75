use rand::Rng;

use crate::{error::OperationalError, problem::point::PointId};

use super::{chromosome::Chromosome, fitness::FitnessEvaluator};

/// Fixed-size set of candidate delivery orders. Order carries no meaning.
#[derive(Debug, Clone)]
pub struct Population {
    individuals: Vec<Chromosome>,
}

impl Population {
    pub fn random<R>(delivery_ids: &[PointId], size: usize, rng: &mut R) -> Self
    where
        R: Rng,
    {
        Population {
            individuals: (0..size)
                .map(|_| Chromosome::random(delivery_ids, rng))
                .collect(),
        }
    }

    pub fn from_individuals(individuals: Vec<Chromosome>) -> Self {
        Population { individuals }
    }

    pub fn individuals(&self) -> &[Chromosome] {
        &self.individuals
    }

    pub fn individual(&self, index: usize) -> &Chromosome {
        &self.individuals[index]
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// `(index, fitness)` of every individual, best first. Ties keep population order.
    pub fn evaluate(
        &self,
        evaluator: &FitnessEvaluator,
    ) -> Result<Vec<(usize, f64)>, OperationalError> {
        let mut scores = self
            .individuals
            .iter()
            .enumerate()
            .map(|(index, individual)| {
                evaluator
                    .evaluate(individual)
                    .map(|fitness| (index, fitness))
            })
            .collect::<Result<Vec<_>, _>>()?;

        scores.sort_by(|(_, a), (_, b)| a.total_cmp(b));

        Ok(scores)
    }
}
