use socnet::error::SocNetError;
use socnet::graph::ContactGraph;
use socnet::model::Person;
use socnet::ops::friend_ops;

// ==========================================================================
// BEFRIEND
// ==========================================================================

#[test]
fn befriend_records_both_directions() {
    let mut graph = ContactGraph::new();
    let (alice, bob) = friend_ops::befriend(&mut graph, "Alice", "Bob").unwrap();

    assert_eq!(alice, Person::from("Alice"));
    assert_eq!(bob, Person::from("Bob"));
    assert!(graph.friends_of(&alice).contains(&bob));
    assert!(graph.friends_of(&bob).contains(&alice));
}

#[test]
fn befriend_trims_names() {
    let mut graph = ContactGraph::new();
    let (alice, bob) = friend_ops::befriend(&mut graph, "  Alice ", " Bob  ").unwrap();

    assert_eq!(alice, Person::from("Alice"));
    assert_eq!(bob, Person::from("Bob"));
    assert_eq!(graph.person_count(), 2);
}

#[test]
fn befriend_rejects_blank_first_name() {
    let mut graph = ContactGraph::new();
    let err = friend_ops::befriend(&mut graph, "   ", "Bob").unwrap_err();

    assert!(matches!(err, SocNetError::BlankField { .. }));
    assert!(graph.is_empty());
}

#[test]
fn befriend_rejects_blank_second_name() {
    let mut graph = ContactGraph::new();
    let err = friend_ops::befriend(&mut graph, "Alice", "").unwrap_err();

    assert!(matches!(err, SocNetError::BlankField { .. }));
    assert!(graph.is_empty());
}

#[test]
fn blank_field_error_names_the_field() {
    let mut graph = ContactGraph::new();
    let err = friend_ops::befriend(&mut graph, "", "Bob").unwrap_err();
    assert_eq!(err.to_string(), "first person cannot be blank");
}

#[test]
fn befriend_self_is_permitted() {
    let mut graph = ContactGraph::new();
    let (a, b) = friend_ops::befriend(&mut graph, "Alice", "Alice").unwrap();

    assert_eq!(a, b);
    assert!(graph.friends_of(&a).contains(&a));
}

#[test]
fn befriend_is_idempotent() {
    let mut graph = ContactGraph::new();
    friend_ops::befriend(&mut graph, "Alice", "Bob").unwrap();
    friend_ops::befriend(&mut graph, "Alice", "Bob").unwrap();
    friend_ops::befriend(&mut graph, "Bob", "Alice").unwrap();

    assert_eq!(graph.friendship_count(), 1);
    assert_eq!(graph.friends_of(&Person::from("Alice")).len(), 1);
}
