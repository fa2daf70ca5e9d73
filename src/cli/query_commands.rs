use std::collections::HashSet;

use crate::error::SocNetResult;
use crate::graph::ContactGraph;
use crate::model::Person;
use crate::queries::{connection_queries, friend_queries, stats_queries};

pub fn friends(graph: &ContactGraph, args: &str) {
    let name = args.trim();
    if name.is_empty() {
        println!("Usage: friends <person>");
        return;
    }

    let person = Person::from(name);
    let friends = friend_queries::all_friends(graph, &person);
    if friends.is_empty() {
        println!("{} has no friends on record.", person);
        return;
    }

    print_people(&format!("Friends of {}", person), &friends);
}

pub fn common(graph: &ContactGraph, args: &str) {
    let (p1, p2) = match two_names(args, "Usage: common <person> <person>") {
        Some(pair) => pair,
        None => return,
    };

    let shared = friend_queries::common_friends(graph, &p1, &p2);
    if shared.is_empty() {
        println!("{} and {} have no friends in common.", p1, p2);
        return;
    }

    print_people(&format!("Common friends of {} and {}", p1, p2), &shared);
}

pub fn connection(graph: &ContactGraph, args: &str) {
    let (start, end) = match two_names(args, "Usage: connection <person> <person>") {
        Some(pair) => pair,
        None => return,
    };

    match connection_queries::nth_connection(graph, &start, &end) {
        -1 => println!("No connection between {} and {}.", start, end),
        0 => println!("{} and {} are the same person.", start, end),
        n => println!("{} and {} are {} connection(s) apart.", start, end, n),
    }
}

pub fn stats(graph: &ContactGraph) {
    let stats = stats_queries::stats(graph);
    println!("Network summary:");
    println!("  People:      {}", stats.people);
    println!("  Friendships: {}", stats.friendships);
}

pub fn export(graph: &ContactGraph) {
    match graph_json(graph) {
        Ok(json) => println!("{}", json),
        Err(e) => println!("Error: {}", e),
    }
}

fn graph_json(graph: &ContactGraph) -> SocNetResult<String> {
    Ok(serde_json::to_string_pretty(graph)?)
}

fn two_names(args: &str, usage: &str) -> Option<(Person, Person)> {
    let mut names = args.split_whitespace();
    match (names.next(), names.next(), names.next()) {
        (Some(a), Some(b), None) => Some((Person::from(a), Person::from(b))),
        _ => {
            println!("{}", usage);
            None
        }
    }
}

fn print_people(header: &str, people: &HashSet<Person>) {
    let mut sorted: Vec<&Person> = people.iter().collect();
    sorted.sort();

    println!("{}:", header);
    for person in sorted {
        println!("  {}", person);
    }
}
