#![allow(dead_code)]

use courier_optimizer::{
    problem::{
        delivery_problem::{DeliveryProblem, DeliveryProblemBuilder},
        point::{Point, PointBuilder, PointId, Priority},
    },
    solver::{chromosome::Chromosome, route::Route},
};
use rand::{Rng, rngs::SmallRng};

pub fn points(points: &[(f64, f64, f64, Priority)]) -> Vec<Point> {
    points
        .iter()
        .enumerate()
        .map(|(id, &(x, y, load, priority))| {
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

pub fn problem(points: Vec<Point>, capacity: f64) -> DeliveryProblem {
    let mut builder = DeliveryProblemBuilder::default();
    builder.set_points(points).set_capacity(capacity);
    builder.build().unwrap()
}

/// Depot at the center of a 100x100 square, loads in `5..25`, 20% critical.
pub fn random_problem(deliveries: usize, capacity: f64, rng: &mut SmallRng) -> DeliveryProblem {
    let mut list = vec![(50.0, 50.0, 0.0, Priority::Regular)];
    for _ in 0..deliveries {
        list.push((
            rng.random_range(0.0..100.0),
            rng.random_range(0.0..100.0),
            rng.random_range(5..=25) as f64,
            if rng.random_bool(0.2) {
                Priority::Critical
            } else {
                Priority::Regular
            },
        ));
    }

    problem(points(&list), capacity)
}

pub fn chromosome(ids: &[usize]) -> Chromosome {
    Chromosome::new(ids.iter().copied().map(PointId::new).collect())
}

pub fn route(ids: &[usize]) -> Route {
    Route::new(ids.iter().copied().map(PointId::new).collect())
}

pub fn ids(route: &Route) -> Vec<usize> {
    route.ids().iter().map(|id| id.get()).collect()
}
