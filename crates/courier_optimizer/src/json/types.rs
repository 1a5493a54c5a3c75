use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::ConfigurationError,
    problem::{
        delivery_problem::{DeliveryProblem, DeliveryProblemBuilder},
        location::Location,
        point::{Point, PointBuilder, Priority},
    },
    solver::{solution::Solution, solver_params::SolverParams},
};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "DeliveryProblem")]
pub struct JsonDeliveryProblem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Maximum load carried by a single vehicle.
    pub capacity: f64,
    /// The depot (id 0) and every delivery.
    pub points: Vec<JsonPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<JsonSolverParams>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "Point")]
pub struct JsonPoint {
    pub id: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub coordinates: [f64; 2],
    #[serde(default)]
    pub load: f64,
    #[serde(default)]
    pub priority: Priority,
}

impl From<&Point> for JsonPoint {
    fn from(value: &Point) -> Self {
        JsonPoint {
            id: value.id().get(),
            name: value.name().map(str::to_owned),
            coordinates: value.location().into(),
            load: value.load(),
            priority: value.priority(),
        }
    }
}

impl From<&JsonPoint> for Point {
    fn from(value: &JsonPoint) -> Self {
        let mut builder = PointBuilder::default();
        builder
            .set_id(value.id)
            .set_location(Location::from_cartesian(
                value.coordinates[0],
                value.coordinates[1],
            ))
            .set_load(value.load)
            .set_priority(value.priority);

        if let Some(name) = &value.name {
            builder.set_name(name.clone());
        }

        builder.build()
    }
}

/// Overrides of the default solver parameters, every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "SolverParams")]
pub struct JsonSolverParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub population_size: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generations: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mutation_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tournament_size: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_per_unit: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critical_discount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl JsonSolverParams {
    pub fn apply(&self, params: &mut SolverParams) {
        if let Some(population_size) = self.population_size {
            params.population_size = population_size;
        }

        if let Some(generations) = self.generations {
            params.generations = generations;
        }

        if let Some(mutation_rate) = self.mutation_rate {
            params.mutation_rate = mutation_rate;
        }

        if let Some(tournament_size) = self.tournament_size {
            params.tournament_size = tournament_size;
        }

        if let Some(cost_per_unit) = self.cost_per_unit {
            params.cost_per_unit = cost_per_unit;
        }

        if let Some(critical_discount) = self.critical_discount {
            params.critical_discount = critical_discount;
        }

        if self.seed.is_some() {
            params.seed = self.seed;
        }
    }
}

impl JsonDeliveryProblem {
    pub fn build_problem(&self) -> Result<DeliveryProblem, ConfigurationError> {
        let mut builder = DeliveryProblemBuilder::default();
        builder
            .set_points(self.points.iter().map(Point::from).collect())
            .set_capacity(self.capacity);

        builder.build()
    }

    /// Defaults overridden by the file's `params` block, if any.
    pub fn solver_params(&self) -> SolverParams {
        let mut params = SolverParams::default();
        if let Some(overrides) = &self.params {
            overrides.apply(&mut params);
        }

        params
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename = "RouteSummary")]
pub struct JsonRouteSummary {
    pub stops: Vec<usize>,
    pub load: f64,
    pub distance: f64,
    pub critical_deliveries: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename = "Solution")]
pub struct JsonSolution {
    pub routes: Vec<JsonRouteSummary>,
    pub vehicles: usize,
    pub fitness: f64,
    pub cost: f64,
    pub distance: f64,
    pub history: Vec<f64>,
}

impl From<&Solution> for JsonSolution {
    fn from(value: &Solution) -> Self {
        JsonSolution {
            routes: value
                .routes()
                .iter()
                .zip(value.summaries())
                .map(|(route, summary)| JsonRouteSummary {
                    stops: route.ids().iter().map(|id| id.get()).collect(),
                    load: summary.load,
                    distance: summary.distance,
                    critical_deliveries: summary.critical_deliveries,
                })
                .collect(),
            vehicles: value.vehicle_count(),
            fitness: value.fitness(),
            cost: value.cost(),
            distance: value.distance(),
            history: value.history().values().to_vec(),
        }
    }
}
