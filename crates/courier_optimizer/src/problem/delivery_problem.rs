use fxhash::FxHashMap;

use crate::error::{ConfigurationError, OperationalError};

use super::point::{Point, PointId, PointIdx};

/// A depot, the deliveries to serve from it and the capacity shared by every vehicle.
///
/// The id-to-point lookup is built once here so the search never scans the point list.
#[derive(Debug, Clone)]
pub struct DeliveryProblem {
    points: Vec<Point>,
    point_index: FxHashMap<PointId, PointIdx>,
    depot: PointIdx,
    capacity: f64,
}

impl DeliveryProblem {
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    pub fn depot(&self) -> &Point {
        &self.points[self.depot]
    }

    pub fn deliveries(&self) -> impl Iterator<Item = &Point> {
        self.points.iter().filter(|point| !point.is_depot())
    }

    /// Ids of every delivery in input order, the depot excluded.
    pub fn delivery_ids(&self) -> Vec<PointId> {
        self.deliveries().map(|point| point.id()).collect()
    }

    pub fn number_of_deliveries(&self) -> usize {
        self.points.len() - 1
    }

    pub fn total_load(&self) -> f64 {
        self.deliveries().map(|point| point.load()).sum()
    }

    pub fn contains(&self, id: PointId) -> bool {
        self.point_index.contains_key(&id)
    }

    pub fn point(&self, id: PointId) -> Result<&Point, OperationalError> {
        self.point_index
            .get(&id)
            .map(|&index| &self.points[index])
            .ok_or(OperationalError::UnknownPoint(id))
    }

    pub fn distance(&self, from: PointId, to: PointId) -> Result<f64, OperationalError> {
        let from = self.point(from)?;
        let to = self.point(to)?;

        Ok(from.location().euclidean_distance(to.location()))
    }
}

#[derive(Default)]
pub struct DeliveryProblemBuilder {
    points: Option<Vec<Point>>,
    capacity: Option<f64>,
}

impl DeliveryProblemBuilder {
    pub fn set_points(&mut self, points: Vec<Point>) -> &mut DeliveryProblemBuilder {
        self.points = Some(points);
        self
    }

    pub fn set_capacity(&mut self, capacity: f64) -> &mut DeliveryProblemBuilder {
        self.capacity = Some(capacity);
        self
    }

    pub fn build(self) -> Result<DeliveryProblem, ConfigurationError> {
        let points = self.points.unwrap_or_default();
        let capacity = self.capacity.unwrap_or(0.0);

        if !capacity.is_finite() || capacity <= 0.0 {
            return Err(ConfigurationError::NonPositiveCapacity(capacity));
        }

        let mut point_index =
            FxHashMap::with_capacity_and_hasher(points.len(), Default::default());

        for (index, point) in points.iter().enumerate() {
            if !point.location().is_finite() {
                return Err(ConfigurationError::InvalidCoordinate(point.id()));
            }

            if !point.load().is_finite() || point.load() < 0.0 {
                return Err(ConfigurationError::InvalidLoad {
                    id: point.id(),
                    load: point.load(),
                });
            }

            if point.is_depot() && point.load() != 0.0 {
                return Err(ConfigurationError::DepotWithLoad(point.load()));
            }

            if point_index
                .insert(point.id(), PointIdx::new(index))
                .is_some()
            {
                return Err(ConfigurationError::DuplicatePoint(point.id()));
            }
        }

        let depot = *point_index
            .get(&PointId::DEPOT)
            .ok_or(ConfigurationError::MissingDepot)?;

        Ok(DeliveryProblem {
            points,
            point_index,
            depot,
            capacity,
        })
    }
}
