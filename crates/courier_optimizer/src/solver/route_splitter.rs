use crate::{
    error::OperationalError,
    problem::{delivery_problem::DeliveryProblem, point::PointId},
};

use super::route::Route;

/// Greedily cuts a delivery order into depot-anchored routes.
///
/// Deliveries are appended to the current route until the next one would exceed the vehicle
/// capacity, at which point the route is closed and a new one starts with that delivery.
/// A delivery heavier than the capacity still gets a route of its own. When it comes first,
/// the depot-only route `[0, 0]` is closed ahead of it. An empty order yields `[0, 0]`.
pub fn split_routes(
    genes: &[PointId],
    problem: &DeliveryProblem,
) -> Result<Vec<Route>, OperationalError> {
    let capacity = problem.capacity();

    let mut routes = Vec::new();
    let mut current = vec![PointId::DEPOT];
    let mut current_load = 0.0;

    for &id in genes {
        let load = problem.point(id)?.load();

        if current_load + load > capacity {
            current.push(PointId::DEPOT);
            routes.push(Route::new(std::mem::replace(
                &mut current,
                vec![PointId::DEPOT],
            )));
            current_load = 0.0;
        }

        current.push(id);
        current_load += load;
    }

    current.push(PointId::DEPOT);
    routes.push(Route::new(current));

    Ok(routes)
}
