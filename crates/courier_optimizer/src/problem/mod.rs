pub mod delivery_problem;
pub mod location;
pub mod point;
