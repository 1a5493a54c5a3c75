mod common;

use courier_optimizer::{
    problem::point::Priority,
    solver::{
        crossover::order_crossover_with_cuts,
        fitness::{FitnessEvaluator, FitnessParams},
        route_splitter::split_routes,
        two_opt::refine_route,
    },
};

#[test]
fn scenario_a_overflowing_load_starts_a_new_route() {
    let problem = common::problem(
        common::points(&[
            (0.0, 0.0, 0.0, Priority::Regular),
            (1.0, 1.0, 150.0, Priority::Regular),
            (2.0, 2.0, 60.0, Priority::Regular),
        ]),
        200.0,
    );

    let routes = split_routes(common::chromosome(&[1, 2]).genes(), &problem).unwrap();

    assert_eq!(routes.len(), 2);
    assert_eq!(common::ids(&routes[0]), vec![0, 1, 0]);
    assert_eq!(common::ids(&routes[1]), vec![0, 2, 0]);
}

#[test]
fn scenario_b_single_delivery() {
    let problem = common::problem(
        common::points(&[
            (0.0, 0.0, 0.0, Priority::Regular),
            (4.0, 3.0, 12.0, Priority::Critical),
        ]),
        12.0,
    );

    let routes = split_routes(common::chromosome(&[1]).genes(), &problem).unwrap();

    assert_eq!(routes.len(), 1);
    assert_eq!(common::ids(&routes[0]), vec![0, 1, 0]);

    // Only the leg into the critical delivery is discounted
    let evaluator = FitnessEvaluator::new(&problem, FitnessParams::default());
    assert_eq!(evaluator.evaluate(&common::chromosome(&[1])), Ok(7.5));
}

#[test]
fn scenario_c_order_crossover() {
    let parent1 = common::chromosome(&[1, 2, 3, 4]);
    let parent2 = common::chromosome(&[3, 1, 4, 2]);

    let offspring = order_crossover_with_cuts(&parent1, &parent2, 1, 3);

    assert_eq!(offspring, common::chromosome(&[4, 2, 3, 1]));
}

#[test]
fn scenario_d_crossed_route_is_uncrossed() {
    // Depot, far corner, near corner, far corner: the legs form an X
    let problem = common::problem(
        common::points(&[
            (0.0, 0.0, 0.0, Priority::Regular),
            (10.0, 10.0, 1.0, Priority::Regular),
            (0.0, 10.0, 1.0, Priority::Regular),
            (10.0, 0.0, 1.0, Priority::Regular),
        ]),
        10.0,
    );

    let mut route = common::route(&[0, 2, 3, 1, 0]);
    let before = route.distance(&problem).unwrap();

    refine_route(&mut route, &problem).unwrap();

    let after = route.distance(&problem).unwrap();
    assert!(after < before);
    assert_eq!(after, 40.0);
    assert!(route.is_depot_anchored());
}
