use std::path::Path;

use crate::problem::delivery_problem::DeliveryProblem;

pub trait DatasetParser {
    fn parse<P: AsRef<Path>>(&self, file: P) -> Result<DeliveryProblem, anyhow::Error>;
}
