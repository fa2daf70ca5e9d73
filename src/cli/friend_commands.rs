use crate::graph::ContactGraph;
use crate::model::Person;
use crate::ops::friend_ops;

pub fn befriend(graph: &mut ContactGraph, args: &str) {
    let mut names = args.split_whitespace();
    let (a, b) = match (names.next(), names.next(), names.next()) {
        (Some(a), Some(b), None) => (a, b),
        _ => {
            println!("Usage: befriend <person> <person>");
            return;
        }
    };

    match friend_ops::befriend(graph, a, b) {
        Ok((a, b)) => println!("{} and {} are now friends.", a, b),
        Err(e) => println!("Error: {}", e),
    }
}

pub fn list_people(graph: &ContactGraph) {
    if graph.is_empty() {
        println!("No people in the network yet. Use 'befriend' to add a friendship.");
        return;
    }

    let mut people: Vec<&Person> = graph.people().collect();
    people.sort();

    println!("People in the network ({}):", people.len());
    for person in people {
        println!("  {} ({} friends)", person, graph.friends_of(person).len());
    }
}
