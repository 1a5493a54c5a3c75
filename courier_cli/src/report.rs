use comfy_table::{Table, presets::UTF8_FULL};
use courier_optimizer::{
    problem::delivery_problem::DeliveryProblem, solver::solution::Solution,
};

/// Length of one degree of latitude, scenarios are expressed in degrees.
pub const KM_PER_DEGREE: f64 = 111.139;

pub fn routes_table(solution: &Solution, problem: &DeliveryProblem) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "Vehicle",
        "Stops",
        "Deliveries",
        "Critical",
        "Load",
        "Distance",
        "≈ km",
    ]);

    let vehicles = solution
        .routes()
        .iter()
        .zip(solution.summaries())
        .filter(|(route, _)| !route.is_empty());

    for (vehicle, (route, summary)) in vehicles.enumerate() {
        let stops = route
            .ids()
            .iter()
            .map(|&id| match problem.point(id).ok().and_then(|point| point.name()) {
                Some(name) => name.to_owned(),
                None => id.to_string(),
            })
            .collect::<Vec<_>>()
            .join(" → ");

        table.add_row(vec![
            format!("{}", vehicle + 1),
            stops,
            format!("{}", summary.deliveries),
            format!("{}", summary.critical_deliveries),
            format!("{:.1}/{}", summary.load, problem.capacity()),
            format!("{:.6}", summary.distance),
            format!("{:.2}", summary.distance * KM_PER_DEGREE),
        ]);
    }

    table
}

pub fn totals_table(solution: &Solution) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Vehicles", "Fitness", "Cost", "Distance", "≈ km"])
        .add_row(vec![
            format!("{}", solution.vehicle_count()),
            format!("{:.6}", solution.fitness()),
            format!("{:.6}", solution.cost()),
            format!("{:.6}", solution.distance()),
            format!("{:.2}", solution.distance() * KM_PER_DEGREE),
        ]);

    table
}

pub struct DatasetRow {
    pub instance: String,
    pub deliveries: usize,
    pub vehicles: usize,
    pub distance: f64,
    pub best_known: Option<f64>,
    pub seconds: f64,
}

impl DatasetRow {
    /// Relative gap to the best known cost, in percent.
    pub fn gap(&self) -> Option<f64> {
        self.best_known
            .filter(|&best| best > 0.0)
            .map(|best| (self.distance - best) / best * 100.0)
    }
}

pub fn dataset_table(rows: &[DatasetRow]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "Instance",
        "Deliveries",
        "Vehicles",
        "Distance",
        "Best known",
        "Gap %",
        "Time (s)",
    ]);

    for row in rows {
        table.add_row(vec![
            row.instance.clone(),
            format!("{}", row.deliveries),
            format!("{}", row.vehicles),
            format!("{:.2}", row.distance),
            row.best_known
                .map_or_else(|| String::from("-"), |best| format!("{best:.2}")),
            row.gap()
                .map_or_else(|| String::from("-"), |gap| format!("{gap:.2}")),
            format!("{:.2}", row.seconds),
        ]);
    }

    table
}
