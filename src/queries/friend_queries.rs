use std::collections::HashSet;

use crate::graph::ContactGraph;
use crate::model::Person;

pub fn all_friends(graph: &ContactGraph, person: &Person) -> HashSet<Person> {
    graph.friends_of(person)
}

/// Friends the two people share. Unknown people contribute an empty set,
/// so the result is empty rather than an error.
pub fn common_friends(graph: &ContactGraph, p1: &Person, p2: &Person) -> HashSet<Person> {
    let friends1 = graph.friends_of(p1);
    let friends2 = graph.friends_of(p2);
    friends1.intersection(&friends2).cloned().collect()
}
