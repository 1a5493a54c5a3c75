pub mod chromosome;
pub mod crossover;
pub mod fitness;
pub mod genetic_search;
pub mod mutation;
pub mod population;
pub mod route;
pub mod route_splitter;
pub mod solution;
pub mod solver;
pub mod solver_params;
pub mod statistics;
pub mod two_opt;
