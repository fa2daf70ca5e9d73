pub mod friend_queries;
pub mod connection_queries;
pub mod stats_queries;
