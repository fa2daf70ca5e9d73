use crate::error::SocNetResult;
use crate::graph::ContactGraph;
use crate::model::Person;
use crate::validation;

/// Validate both names and record the friendship. Returns the canonical
/// (trimmed) pair that was stored.
pub fn befriend(graph: &mut ContactGraph, a: &str, b: &str) -> SocNetResult<(Person, Person)> {
    let a = Person::new(validation::non_blank(a, "first person")?);
    let b = Person::new(validation::non_blank(b, "second person")?);

    graph.add_friendship(a.clone(), b.clone());

    Ok((a, b))
}
