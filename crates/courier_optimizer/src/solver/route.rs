use serde::Serialize;

use crate::{
    error::OperationalError,
    problem::{delivery_problem::DeliveryProblem, point::PointId},
};

/// Stops of a single vehicle, starting and ending at the depot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Route(Vec<PointId>);

impl Route {
    pub fn new(ids: Vec<PointId>) -> Self {
        Route(ids)
    }

    pub fn ids(&self) -> &[PointId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deliveries().is_empty()
    }

    /// Stops between the two depot anchors.
    pub fn deliveries(&self) -> &[PointId] {
        if self.0.len() < 2 {
            return &[];
        }

        &self.0[1..self.0.len() - 1]
    }

    pub fn is_depot_anchored(&self) -> bool {
        self.0.len() >= 2
            && self.0.first() == Some(&PointId::DEPOT)
            && self.0.last() == Some(&PointId::DEPOT)
    }

    pub fn load(&self, problem: &DeliveryProblem) -> Result<f64, OperationalError> {
        self.deliveries()
            .iter()
            .map(|&id| problem.point(id).map(|point| point.load()))
            .sum()
    }

    /// Plain travelled distance, without any priority weighting.
    pub fn distance(&self, problem: &DeliveryProblem) -> Result<f64, OperationalError> {
        self.0
            .windows(2)
            .map(|leg| problem.distance(leg[0], leg[1]))
            .sum()
    }

    /// Reverses the stops between `from` and `to`, both included.
    pub(crate) fn reverse(&mut self, from: usize, to: usize) {
        self.0[from..=to].reverse();
    }
}

#[cfg(test)]
mod tests {
    use crate::{problem::point::Priority, test_utils};

    use super::*;

    #[test]
    fn test_route_accessors() {
        let problem = test_utils::create_test_problem(
            vec![
                (0.0, 0.0, 0.0, Priority::Regular),
                (3.0, 0.0, 2.0, Priority::Regular),
                (3.0, 4.0, 5.0, Priority::Critical),
            ],
            10.0,
        );
        let route = test_utils::route(&[0, 1, 2, 0]);

        assert!(route.is_depot_anchored());
        assert!(!route.is_empty());
        assert_eq!(test_utils::ids(route.deliveries()), vec![1, 2]);
        assert_eq!(route.load(&problem), Ok(7.0));
        assert_eq!(route.distance(&problem), Ok(12.0));
    }

    #[test]
    fn test_empty_route() {
        let problem = test_utils::create_grid_problem(2, 2, 10.0);
        let route = test_utils::route(&[0, 0]);

        assert!(route.is_depot_anchored());
        assert!(route.is_empty());
        assert_eq!(route.load(&problem), Ok(0.0));
        assert_eq!(route.distance(&problem), Ok(0.0));
    }

    #[test]
    fn test_reverse() {
        let mut route = test_utils::route(&[0, 1, 2, 3, 4, 0]);
        route.reverse(1, 3);

        assert_eq!(test_utils::ids(route.ids()), vec![0, 3, 2, 1, 4, 0]);
    }

    #[test]
    fn test_unknown_point_in_route() {
        let problem = test_utils::create_grid_problem(2, 2, 10.0);
        let route = test_utils::route(&[0, 9, 0]);

        assert_eq!(
            route.distance(&problem),
            Err(OperationalError::UnknownPoint(PointId::new(9)))
        );
    }
}
