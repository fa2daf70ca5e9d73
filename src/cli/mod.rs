pub mod friend_commands;
pub mod query_commands;

use std::io::{self, Write};

use crate::graph::ContactGraph;

/// Run the interactive REPL over a fresh in-memory network.
pub fn run() {
    println!("Social Network");
    println!("Type 'help' for commands, 'exit' to quit.");
    println!();

    let mut graph = ContactGraph::new();
    repl_loop(&mut graph);
}

fn repl_loop(graph: &mut ContactGraph) {
    loop {
        let input = match read_line("> ") {
            Some(s) => s,
            None => break,
        };

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let (command, args) = parse_command(input);

        match command {
            "help" | "?" => print_help(),
            "quit" | "exit" | "q" => break,

            "befriend" | "add" => friend_commands::befriend(graph, args),
            "people" | "list" | "ls" => friend_commands::list_people(graph),

            "friends" => query_commands::friends(graph, args),
            "common" => query_commands::common(graph, args),
            "connection" | "distance" => query_commands::connection(graph, args),
            "stats" => query_commands::stats(graph),
            "export" => query_commands::export(graph),

            other => {
                println!("Unknown command: '{}'. Type 'help' for commands.", other);
            }
        }
    }
}

/// Prompt and read a line from stdin. Returns None on EOF.
fn read_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok();
    let mut buf = String::new();
    match io::stdin().read_line(&mut buf) {
        Ok(0) => None,
        Ok(_) => Some(buf.trim_end_matches('\n').trim_end_matches('\r').to_string()),
        Err(_) => None,
    }
}

fn parse_command(input: &str) -> (&str, &str) {
    match input.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (input, ""),
    }
}

fn print_help() {
    println!("Commands:");
    println!("  befriend <a> <b>    Record a friendship between two people");
    println!("  friends <person>    List someone's direct friends");
    println!("  common <a> <b>      List friends two people share");
    println!("  connection <a> <b>  Shortest connection distance between two people");
    println!("  people              List everyone in the network");
    println!("  stats               Network summary");
    println!("  export              Print the network as JSON");
    println!("  help                Show this help");
    println!("  quit                Exit");
}
