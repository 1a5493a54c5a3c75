use rand::RngCore;

use crate::{
    problem::{
        delivery_problem::{DeliveryProblem, DeliveryProblemBuilder},
        point::{Point, PointBuilder, PointId, Priority},
    },
    solver::{chromosome::Chromosome, route::Route},
};

pub type TestPoint = (f64, f64, f64, Priority);

/// Points numbered by their position, the first one being the depot.
pub fn create_points(points: Vec<TestPoint>) -> Vec<Point> {
    points
        .into_iter()
        .enumerate()
        .map(|(id, (x, y, load, priority))| {
            let mut builder = PointBuilder::default();
            builder
                .set_id(id)
                .set_location((x, y))
                .set_load(load)
                .set_priority(priority);
            builder.build()
        })
        .collect()
}

pub fn with_id(point: Point, id: usize) -> Point {
    let mut builder = PointBuilder::default();
    builder
        .set_id(id)
        .set_location(*point.location())
        .set_load(point.load())
        .set_priority(point.priority());
    builder.build()
}

pub fn create_test_problem(points: Vec<TestPoint>, capacity: f64) -> DeliveryProblem {
    let mut builder = DeliveryProblemBuilder::default();
    builder
        .set_points(create_points(points))
        .set_capacity(capacity);

    builder.build().unwrap()
}

/// Depot at the origin and `rows * cols - 1` regular deliveries of load 1 on a unit grid.
pub fn create_grid_problem(rows: usize, cols: usize, capacity: f64) -> DeliveryProblem {
    let mut points = Vec::with_capacity(rows * cols);

    for y in 0..rows {
        for x in 0..cols {
            let load = if points.is_empty() { 0.0 } else { 1.0 };
            points.push((x as f64, y as f64, load, Priority::Regular));
        }
    }

    create_test_problem(points, capacity)
}

pub fn chromosome(ids: &[usize]) -> Chromosome {
    Chromosome::new(ids.iter().copied().map(PointId::new).collect())
}

pub fn route(ids: &[usize]) -> Route {
    Route::new(ids.iter().copied().map(PointId::new).collect())
}

pub fn ids(ids: &[PointId]) -> Vec<usize> {
    ids.iter().map(|id| id.get()).collect()
}

pub struct MockRng {
    data: Vec<u64>,
    index: usize,
}

impl MockRng {
    pub fn new(data: Vec<u64>) -> Self {
        MockRng { data, index: 0 }
    }
}

impl RngCore for MockRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let value = self.data[self.index % self.data.len()];
        self.index = (self.index + 1) % self.data.len();
        value
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for byte in dst.iter_mut() {
            *byte = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;

    #[test]
    fn test_mock_rng() {
        let data = vec![1, 2, 3, 4];
        let mut rng = MockRng::new(data.clone());

        for &expected in data.iter().cycle().take(8) {
            let value = rng.next_u64();
            assert_eq!(value, expected);
        }
    }

    #[test]
    fn test_random_bool() {
        let mut rng = MockRng::new(vec![u64::MAX / 4]);

        assert!(!rng.random_bool(0.20));
        assert!(rng.random_bool(0.26));
        assert!(rng.random_bool(0.6));
    }

    #[test]
    fn test_grid_problem() {
        let problem = create_grid_problem(3, 4, 5.0);

        assert_eq!(problem.number_of_deliveries(), 11);
        assert_eq!(problem.depot().load(), 0.0);
        assert_eq!(problem.total_load(), 11.0);
    }
}
