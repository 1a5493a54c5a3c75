use serde::Serialize;

use crate::{error::OperationalError, problem::delivery_problem::DeliveryProblem};

use super::{fitness::FitnessEvaluator, route::Route, statistics::ConvergenceHistory};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSummary {
    pub deliveries: usize,
    pub load: f64,
    pub distance: f64,
    pub critical_deliveries: usize,
}

impl RouteSummary {
    pub fn from_route(route: &Route, problem: &DeliveryProblem) -> Result<Self, OperationalError> {
        let mut critical_deliveries = 0;
        for &id in route.deliveries() {
            if problem.point(id)?.is_critical() {
                critical_deliveries += 1;
            }
        }

        Ok(RouteSummary {
            deliveries: route.deliveries().len(),
            load: route.load(problem)?,
            distance: route.distance(problem)?,
            critical_deliveries,
        })
    }
}

/// Final routes of a run, after 2-opt refinement.
#[derive(Debug, Clone, Serialize)]
pub struct Solution {
    routes: Vec<Route>,
    summaries: Vec<RouteSummary>,
    history: ConvergenceHistory,
    /// Best fitness reached by the genetic search, before refinement.
    fitness: f64,
    /// Weighted cost of the refined routes, comparable to `fitness`.
    cost: f64,
    distance: f64,
}

impl Solution {
    pub(crate) fn new(
        routes: Vec<Route>,
        history: ConvergenceHistory,
        fitness: f64,
        evaluator: &FitnessEvaluator,
    ) -> Result<Self, OperationalError> {
        let summaries = routes
            .iter()
            .map(|route| RouteSummary::from_route(route, evaluator.problem()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Solution {
            cost: evaluator.routes_cost(&routes)?,
            distance: summaries.iter().map(|summary| summary.distance).sum(),
            routes,
            summaries,
            history,
            fitness,
        })
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn summaries(&self) -> &[RouteSummary] {
        &self.summaries
    }

    pub fn history(&self) -> &ConvergenceHistory {
        &self.history
    }

    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Routes actually serving at least one delivery.
    pub fn vehicle_count(&self) -> usize {
        self.routes.iter().filter(|route| !route.is_empty()).count()
    }
}
