use tracing::debug;

use crate::{
    error::OperationalError,
    problem::{delivery_problem::DeliveryProblem, location::Location},
};

use super::route::Route;

/// Below this, a reversal is not considered an improvement. Keeps collinear stops from
/// flip-flopping on rounding noise.
const IMPROVEMENT_EPSILON: f64 = 1e-9;

/// **Intra-Route 2-Opt**
///
/// Reverses the sequence of stops between `from` and `to` (inclusive).
/// This eliminates crossing edges within a single route.
///
/// ```text
/// BEFORE:
///    ... (prev) --x--> [from] -> ... -> [to] --x--> (next) ...
///          ^             ^               ^            ^
///          A             B               C            D
///
/// AFTER (Sequence Reversed):
///    ... (prev) -----> [to] -> ... -> [from] -----> (next) ...
///          ^             ^               ^            ^
///          A             C               B            D
///
/// Edges Removed: (prev->from), (to->next)
/// Edges Added:   (prev->to),   (from->next)
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TwoOptMove {
    from: usize,
    to: usize,
}

impl TwoOptMove {
    pub fn new(from: usize, to: usize) -> Self {
        if from >= to {
            panic!("TwoOpt: cannot have from >= to")
        }

        if from == 0 {
            panic!("TwoOpt: the starting depot cannot move")
        }

        TwoOptMove { from, to }
    }

    /// Change in travelled distance if the move is applied, negative when it shortens the route.
    pub fn delta(&self, locations: &[Location]) -> f64 {
        let prev = &locations[self.from - 1];
        let from = &locations[self.from];
        let to = &locations[self.to];
        let next = &locations[self.to + 1];

        let current_cost = prev.euclidean_distance(from) + to.euclidean_distance(next);
        let new_cost = prev.euclidean_distance(to) + from.euclidean_distance(next);

        new_cost - current_cost
    }

    pub fn apply(&self, route: &mut Route, locations: &mut [Location]) {
        route.reverse(self.from, self.to);
        locations[self.from..=self.to].reverse();
    }
}

/// Applies first-improvement 2-opt to one route until no reversal shortens it.
///
/// The depot anchors at both ends never move and stops never leave the route.
/// Returns the number of reversals applied.
pub fn refine_route(
    route: &mut Route,
    problem: &DeliveryProblem,
) -> Result<usize, OperationalError> {
    let mut locations = route
        .ids()
        .iter()
        .map(|&id| problem.point(id).map(|point| *point.location()))
        .collect::<Result<Vec<_>, _>>()?;

    let len = locations.len();
    if len < 4 {
        return Ok(0);
    }

    let mut improvements = 0;

    'search: loop {
        for from in 1..len - 2 {
            for to in (from + 1)..len - 1 {
                let op = TwoOptMove::new(from, to);

                if op.delta(&locations) < -IMPROVEMENT_EPSILON {
                    op.apply(route, &mut locations);
                    improvements += 1;
                    continue 'search;
                }
            }
        }

        break;
    }

    if improvements > 0 {
        debug!(improvements, stops = len - 2, "2-opt refined route");
    }

    Ok(improvements)
}

/// Refines every route independently; routes are never merged or split.
pub fn refine_routes(
    routes: &mut [Route],
    problem: &DeliveryProblem,
) -> Result<usize, OperationalError> {
    let mut improvements = 0;
    for route in routes.iter_mut() {
        improvements += refine_route(route, problem)?;
    }

    Ok(improvements)
}
