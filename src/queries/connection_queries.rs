use std::collections::{HashSet, VecDeque};

use crate::graph::ContactGraph;
use crate::model::Person;

/// Shortest connection distance between two people, counted in friendship
/// hops. Breadth-first, so the first time `end` is dequeued its depth is
/// the answer. `start == end` is 0.
///
/// Returns -1 both when either endpoint is unknown and when no path
/// exists; callers get a single "no answer" sentinel, not two cases.
pub fn nth_connection(graph: &ContactGraph, start: &Person, end: &Person) -> i32 {
    if !graph.contains(start) || !graph.contains(end) {
        return -1;
    }

    let mut queue: VecDeque<(&Person, i32)> = VecDeque::new();
    let mut visited: HashSet<&Person> = HashSet::new();
    queue.push_back((start, 0));
    visited.insert(start);

    while let Some((current, depth)) = queue.pop_front() {
        if current == end {
            return depth;
        }

        for friend in graph.neighbors(current) {
            // Mark at enqueue time so a person reachable along two paths
            // is queued once.
            if visited.insert(friend) {
                queue.push_back((friend, depth + 1));
            }
        }
    }

    -1
}
