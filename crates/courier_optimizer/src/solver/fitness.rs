use crate::{error::OperationalError, problem::delivery_problem::DeliveryProblem};

use super::{chromosome::Chromosome, route::Route, route_splitter::split_routes};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitnessParams {
    pub cost_per_unit: f64,
    /// Multiplier applied to a leg ending at a critical delivery.
    ///
    /// Only shapes the search toward serving critical deliveries, the vehicle still drives
    /// the full distance. `1.0` disables the incentive.
    pub critical_discount: f64,
}

impl Default for FitnessParams {
    fn default() -> Self {
        Self {
            cost_per_unit: 1.0,
            critical_discount: 0.5,
        }
    }
}

/// Weighted travel cost of a delivery order; lower is better.
///
/// Capacity is never penalized here, the route splitter makes every order feasible.
pub struct FitnessEvaluator<'a> {
    problem: &'a DeliveryProblem,
    params: FitnessParams,
}

impl<'a> FitnessEvaluator<'a> {
    pub fn new(problem: &'a DeliveryProblem, params: FitnessParams) -> Self {
        FitnessEvaluator { problem, params }
    }

    pub fn problem(&self) -> &DeliveryProblem {
        self.problem
    }

    pub fn params(&self) -> FitnessParams {
        self.params
    }

    pub fn evaluate(&self, chromosome: &Chromosome) -> Result<f64, OperationalError> {
        let routes = split_routes(chromosome.genes(), self.problem)?;
        self.routes_cost(&routes)
    }

    pub fn routes_cost(&self, routes: &[Route]) -> Result<f64, OperationalError> {
        let mut cost = 0.0;
        for route in routes {
            cost += self.route_cost(route)?;
        }

        Ok(cost * self.params.cost_per_unit)
    }

    /// Weighted distance of one route, walked from the depot, before `cost_per_unit`.
    pub fn route_cost(&self, route: &Route) -> Result<f64, OperationalError> {
        let mut previous = self.problem.depot();
        let mut cost = 0.0;

        for &id in route.ids() {
            let current = self.problem.point(id)?;
            let mut leg = previous
                .location()
                .euclidean_distance(current.location());

            if current.is_critical() {
                leg *= self.params.critical_discount;
            }

            cost += leg;
            previous = current;
        }

        Ok(cost)
    }
}
