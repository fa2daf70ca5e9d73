pub mod error;
pub mod validation;
pub mod model;
pub mod graph;
pub mod ops;
pub mod queries;
pub mod cli;
