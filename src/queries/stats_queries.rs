use crate::graph::ContactGraph;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkStats {
    pub people: usize,
    pub friendships: usize,
}

pub fn stats(graph: &ContactGraph) -> NetworkStats {
    NetworkStats {
        people: graph.person_count(),
        friendships: graph.friendship_count(),
    }
}
