use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::define_index_newtype;

use super::location::Location;

define_index_newtype!(PointId);
define_index_newtype!(PointIdx, Point);

impl PointId {
    pub const DEPOT: PointId = PointId::new(0);

    pub fn is_depot(&self) -> bool {
        *self == Self::DEPOT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    #[default]
    Regular,
    Critical,
}

/// The depot (id 0) or a delivery site.
#[derive(Debug, Clone)]
pub struct Point {
    id: PointId,
    name: Option<String>,
    location: Location,
    load: f64,
    priority: Priority,
}

impl Point {
    pub fn id(&self) -> PointId {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn load(&self) -> f64 {
        self.load
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn is_critical(&self) -> bool {
        self.priority == Priority::Critical
    }

    pub fn is_depot(&self) -> bool {
        self.id.is_depot()
    }
}

#[derive(Default)]
pub struct PointBuilder {
    id: Option<PointId>,
    name: Option<String>,
    location: Option<Location>,
    load: Option<f64>,
    priority: Option<Priority>,
}

impl PointBuilder {
    pub fn set_id(&mut self, id: impl Into<PointId>) -> &mut PointBuilder {
        self.id = Some(id.into());
        self
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut PointBuilder {
        self.name = Some(name.into());
        self
    }

    pub fn set_location(&mut self, location: impl Into<Location>) -> &mut PointBuilder {
        self.location = Some(location.into());
        self
    }

    pub fn set_load(&mut self, load: f64) -> &mut PointBuilder {
        self.load = Some(load);
        self
    }

    pub fn set_priority(&mut self, priority: Priority) -> &mut PointBuilder {
        self.priority = Some(priority);
        self
    }

    pub fn build(self) -> Point {
        Point {
            id: self.id.unwrap_or(PointId::DEPOT),
            name: self.name,
            location: self
                .location
                .unwrap_or_else(|| Location::from_cartesian(0.0, 0.0)),
            load: self.load.unwrap_or(0.0),
            priority: self.priority.unwrap_or_default(),
        }
    }
}
