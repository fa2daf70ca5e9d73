pub mod contact_graph;

pub use contact_graph::ContactGraph;
