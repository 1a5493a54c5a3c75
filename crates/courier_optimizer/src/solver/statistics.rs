use serde::Serialize;

/// Best-known fitness after each generation.
///
/// Never increases, a generation that regresses repeats the previous best.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ConvergenceHistory(Vec<f64>);

impl ConvergenceHistory {
    pub fn with_capacity(generations: usize) -> Self {
        ConvergenceHistory(Vec::with_capacity(generations))
    }

    pub fn push(&mut self, best_fitness: f64) {
        self.0.push(best_fitness);
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<f64> {
        self.0.first().copied()
    }

    pub fn last(&self) -> Option<f64> {
        self.0.last().copied()
    }

    pub fn is_non_increasing(&self) -> bool {
        self.0.windows(2).all(|pair| pair[1] <= pair[0])
    }

    /// Generation at which the final best fitness was first reached.
    pub fn converged_at(&self) -> Option<usize> {
        let last = self.last()?;
        self.0.iter().position(|&fitness| fitness == last)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerationStatistics {
    pub generation: usize,
    pub best_fitness: f64,
    pub population_best: f64,
    pub population_mean: f64,
    pub population_worst: f64,
    pub improved: bool,
}
