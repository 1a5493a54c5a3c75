use thiserror::Error;

use crate::problem::point::PointId;

/// Rejected input, detected before the search starts.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("Vehicle capacity must be positive, got {0}")]
    NonPositiveCapacity(f64),
    #[error("Population size must be at least 2, got {0}")]
    PopulationTooSmall(usize),
    #[error("Number of generations must be positive")]
    NoGenerations,
    #[error("Mutation rate must be within [0, 1], got {0}")]
    InvalidMutationRate(f64),
    #[error("Tournament size must be at least 1")]
    InvalidTournamentSize,
    #[error("Cost per unit must be positive, got {0}")]
    NonPositiveCostPerUnit(f64),
    #[error("Critical discount must be a non-negative finite number, got {0}")]
    InvalidCriticalDiscount(f64),
    #[error("No depot found, a point with id 0 is required")]
    MissingDepot,
    #[error("Point {0} is defined more than once")]
    DuplicatePoint(PointId),
    #[error("Point {id} has an invalid load {load}")]
    InvalidLoad { id: PointId, load: f64 },
    #[error("The depot cannot carry a load, got {0}")]
    DepotWithLoad(f64),
    #[error("Point {0} has a non-finite coordinate")]
    InvalidCoordinate(PointId),
}

/// Violation surfaced while the search is running.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum OperationalError {
    #[error("Tournament size {tournament_size} exceeds population size {population_size}")]
    TournamentTooLarge {
        tournament_size: usize,
        population_size: usize,
    },
    #[error("Point {0} is not part of the problem")]
    UnknownPoint(PointId),
    #[error("Population is empty")]
    EmptyPopulation,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum OptimizerError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    Operational(#[from] OperationalError),
}
