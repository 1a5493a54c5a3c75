pub mod cvrplib;
pub mod parser;
