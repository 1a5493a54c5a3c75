use crate::error::ConfigurationError;

use super::fitness::FitnessParams;

#[derive(Clone, Debug, PartialEq)]
pub struct SolverParams {
    pub population_size: usize,
    pub generations: usize,

    pub mutation_rate: f64,
    pub tournament_size: usize,

    pub cost_per_unit: f64,
    pub critical_discount: f64,

    /// Seeds the run's random generator. `None` draws a seed from the OS.
    pub seed: Option<u64>,
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            population_size: 50,
            generations: 200,
            mutation_rate: 0.2,
            tournament_size: 3,
            cost_per_unit: 1.0,
            critical_discount: 0.5,
            seed: None,
        }
    }
}

impl SolverParams {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.population_size < 2 {
            return Err(ConfigurationError::PopulationTooSmall(self.population_size));
        }

        if self.generations == 0 {
            return Err(ConfigurationError::NoGenerations);
        }

        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigurationError::InvalidMutationRate(self.mutation_rate));
        }

        if self.tournament_size < 1 {
            return Err(ConfigurationError::InvalidTournamentSize);
        }

        if !self.cost_per_unit.is_finite() || self.cost_per_unit <= 0.0 {
            return Err(ConfigurationError::NonPositiveCostPerUnit(
                self.cost_per_unit,
            ));
        }

        if !self.critical_discount.is_finite() || self.critical_discount < 0.0 {
            return Err(ConfigurationError::InvalidCriticalDiscount(
                self.critical_discount,
            ));
        }

        Ok(())
    }

    pub fn fitness_params(&self) -> FitnessParams {
        FitnessParams {
            cost_per_unit: self.cost_per_unit,
            critical_discount: self.critical_discount,
        }
    }
}
