use std::collections::HashSet;

use socnet::graph::ContactGraph;
use socnet::model::Person;
use socnet::queries::{connection_queries, friend_queries};

fn main() {
    let mut args = std::env::args().skip(1);
    let mut demo = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--demo" | "-d" => demo = true,
            "--help" | "-h" => {
                println!("socnet - Social Network");
                println!();
                println!("Usage: socnet [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --demo    Run the scripted demo instead of the REPL");
                println!("  -h, --help    Show this help");
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Use --help for usage information.");
                std::process::exit(1);
            }
        }
    }

    if demo {
        run_demo();
        return;
    }

    socnet::cli::run();
}

/// Scripted walkthrough over a four-person network.
fn run_demo() {
    let mut graph = ContactGraph::new();

    let alice = Person::from("Alice");
    let bob = Person::from("Bob");
    let janice = Person::from("Janice");
    let dave = Person::from("Dave");

    graph.add_friendship(alice.clone(), bob.clone());
    graph.add_friendship(bob.clone(), janice.clone());
    graph.add_friendship(janice.clone(), dave.clone());

    println!(
        "Alice's friends: {:?}",
        sorted_names(&friend_queries::all_friends(&graph, &alice))
    );
    println!(
        "Bob's friends: {:?}",
        sorted_names(&friend_queries::all_friends(&graph, &bob))
    );
    println!(
        "Common friends of Alice and Bob: {:?}",
        sorted_names(&friend_queries::common_friends(&graph, &alice, &bob))
    );
    println!(
        "Connection between Alice and Janice: {}",
        connection_queries::nth_connection(&graph, &alice, &janice)
    );
    println!(
        "Connection between Alice and Bob: {}",
        connection_queries::nth_connection(&graph, &alice, &bob)
    );
    println!(
        "Connection between Alice and Dave: {}",
        connection_queries::nth_connection(&graph, &alice, &dave)
    );
}

fn sorted_names(people: &HashSet<Person>) -> Vec<String> {
    let mut names: Vec<String> = people.iter().map(|p| p.to_string()).collect();
    names.sort();
    names
}
