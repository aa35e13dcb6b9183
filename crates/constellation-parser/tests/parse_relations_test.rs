use constellation_parser::parse_relations;

fn pair(a: &str, b: &str) -> (String, String) {
    (a.to_string(), b.to_string())
}

#[test]
fn test_round_trip_with_garbage_line() {
    let graph = parse_relations("Alice -> Bob\nBob --> Cindy\ngarbage");

    let nodes: Vec<&str> = graph.nodes().iter().map(String::as_str).collect();
    assert_eq!(nodes, ["Alice", "Bob", "Cindy"]);
    assert_eq!(graph.links(), [pair("Alice", "Bob"), pair("Bob", "Cindy")]);
    assert_eq!(graph.skipped_lines(), [3]);
}

#[test]
fn test_unicode_arrow_matches_ascii_arrow() {
    let unicode = parse_relations("Alice → Bob");
    let ascii = parse_relations("Alice -> Bob");
    assert_eq!(unicode, ascii);
}

#[test]
fn test_mermaid_style_document() {
    let source = "\
graph LR
    %% people
    Alice --> Bob
    Bob —> Cindy
    Cindy <-- Dave
    Dave <— Alice
";
    let graph = parse_relations(source);

    assert_eq!(graph.nodes().len(), 4);
    assert_eq!(
        graph.links(),
        [
            pair("Alice", "Bob"),
            pair("Bob", "Cindy"),
            pair("Cindy", "Dave"),
            pair("Dave", "Alice"),
        ]
    );
    assert_eq!(graph.skipped_lines(), [1, 2]);
}

#[test]
fn test_duplicate_and_self_links() {
    let graph = parse_relations("a -> a\na -> b\na -> b");

    assert_eq!(graph.nodes().len(), 2);
    assert_eq!(graph.links().len(), 3);
    assert_eq!(graph.links()[0], pair("a", "a"));
}

#[test]
fn test_windows_line_endings() {
    let graph = parse_relations("a -> b\r\nb -> c\r\n");
    assert_eq!(graph.links(), [pair("a", "b"), pair("b", "c")]);
}
