use dotviz_core::{Edge, Graph, GraphAware, GraphKind, Node, NodeRef};
use pretty_assertions::assert_eq;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}

fn edge_between(from: &str, to: &str) -> (NodeRef, NodeRef, Edge) {
    let from = NodeRef::from(Node::new(from));
    let to = NodeRef::from(Node::new(to));
    let mut edge = Edge::new(&from, &to);
    edge.set_label("MyLabel").set_weight(45.0);
    (from, to, edge)
}

#[test]
fn test_edge_on_directed_graph() {
    let (_, _, edge) = edge_between("from", "to");
    let mut graph = Graph::create("G", true);
    graph.link(edge);

    assert_eq!(
        graph.edges()[0].to_string(),
        "\"from\" -> \"to\" [\nlabel=\"MyLabel\"\nweight=\"45\"\n]"
    );
}

#[test]
fn test_edge_on_undirected_graph() {
    let (_, _, edge) = edge_between("from", "to");
    let mut graph = Graph::create("G", false);
    graph.link(edge);

    assert_eq!(
        graph.edges()[0].to_string(),
        "\"from\" -- \"to\" [\nlabel=\"MyLabel\"\nweight=\"45\"\n]"
    );
}

#[test]
fn test_edge_glyph_follows_type_at_render_time() {
    let (_, _, edge) = edge_between("a", "b");
    let mut graph = Graph::create("G", true);
    graph.link(edge);
    assert_eq!(graph.edges()[0].glyph(), "->");

    graph.set_type("graph").unwrap();
    assert_eq!(graph.edges()[0].glyph(), "--");
    assert_eq!(
        graph.edges()[0].graph_root().kind(),
        Some(GraphKind::Graph)
    );
}

#[test]
fn test_edge_inside_subgraph_of_digraph() {
    let (_, _, edge) = edge_between("a", "b");
    let mut sub = Graph::create("cluster_inner", true);
    sub.link(edge);

    let mut root = Graph::create("G", true);
    root.add_graph(sub);
    let rendered = root.to_string();
    assert!(rendered.contains("\"a\" -> \"b\""), "{rendered}");

    root.set_kind(GraphKind::Graph);
    assert!(root.to_string().contains("\"a\" -- \"b\""));
}

#[test]
fn test_full_graph() {
    init_tracing();
    let mut root = Graph::create("G", true);
    root.set_rankdir("LR");

    let x = NodeRef::from(Node::with_label("x", "X"));
    let y = NodeRef::from(Node::new("y"));

    let mut cluster = Graph::create("cluster_a", true);
    cluster.set_node(x.clone());
    root.add_graph(cluster);
    root.set_node(y.clone());
    root.link(Edge::new(&x, &y));

    let expected = "\
digraph \"G\" {
subgraph \"cluster_a\" {
\"x\" [
label=\"X\"
]
}
rankdir=\"LR\"
\"x\" -> \"y\" [

]
\"y\" [

]
}";
    assert_eq!(root.to_string(), expected);
}

#[test]
fn test_node_attributes_updated_after_registration() {
    init_tracing();
    let mut graph = Graph::create("G", false);
    graph.set_node(Node::new("a"));

    graph
        .find_node("a")
        .unwrap()
        .borrow_mut()
        .set_shape("box");

    assert_eq!(
        graph.to_string(),
        "graph \"G\" {\n\"a\" [\nshape=\"box\"\n]\n}"
    );
}

#[test]
fn test_html_and_escaped_labels() {
    let mut graph = Graph::create("G", true);
    graph.set_node(Node::with_label("html", "<<b>Bold</b>>"));
    graph.set_node(Node::with_label(
        "uml",
        "+ name : string\\l+ home_country : string\\l",
    ));
    graph.set_node(Node::with_label("quoted", "say \"hi\""));

    let expected = "\
digraph \"G\" {
\"html\" [
label=<<b>Bold</b>>
]
\"uml\" [
label=\"+ name : string\\l+ home_country : string\\l\"
]
\"quoted\" [
label=\"say \\\"hi\\\"\"
]
}";
    assert_eq!(graph.to_string(), expected);
}

#[test]
fn test_find_node_prefers_own_index_then_subgraph_order() {
    let mut root = Graph::new();
    let mut first = Graph::create("first", true);
    let mut second = Graph::create("second", true);

    let in_first = NodeRef::from(Node::new("shared"));
    let in_second = NodeRef::from(Node::new("shared"));
    first.set_node(in_first.clone());
    second.set_node(in_second.clone());
    root.add_graph(first).add_graph(second);

    assert!(root.find_node("shared").unwrap().ptr_eq(&in_first));

    let own = NodeRef::from(Node::new("shared"));
    root.set_node(own.clone());
    assert!(root.find_node("shared").unwrap().ptr_eq(&own));
}

#[test]
fn test_deeply_nested_find_node() {
    let deep = NodeRef::from(Node::new("deep"));
    let mut level2 = Graph::create("level2", true);
    level2.set_node(deep.clone());
    let mut level1 = Graph::create("level1", true);
    level1.add_graph(level2);
    let mut root = Graph::new();
    root.add_graph(level1);

    assert!(root.find_node("deep").unwrap().ptr_eq(&deep));
    assert!(
        root.get_graph("level1")
            .unwrap()
            .get_graph("level2")
            .unwrap()
            .node("deep")
            .is_some()
    );
}
