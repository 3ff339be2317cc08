use graphkit::algo::{self, AlgoError};
use graphkit::format::{parse_graph, parse_weighted_graph};
use graphkit::graph::{Graph, WeightedGraph};
use std::collections::HashSet;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn graph_with(directed: bool, labels: &[&str], edges: &[(&str, &str)]) -> anyhow::Result<Graph> {
    let mut graph: Graph = if directed { Graph::directed() } else { Graph::undirected() };
    for label in labels {
        graph.add_vertex(*label)?;
    }
    for (from, to) in edges {
        graph.add_edge(from, to)?;
    }
    Ok(graph)
}

fn weighted_with(
    directed: bool,
    labels: &[&str],
    edges: &[(&str, &str, f64)],
) -> anyhow::Result<WeightedGraph> {
    let mut graph = if directed {
        WeightedGraph::directed()
    } else {
        WeightedGraph::undirected()
    };
    for label in labels {
        graph.add_vertex(*label)?;
    }
    for (from, to, weight) in edges {
        graph.add_edge(from, to, *weight)?;
    }
    Ok(graph)
}

#[test]
fn test_directed_chain_scenario() -> anyhow::Result<()> {
    init_tracing();
    let graph = graph_with(
        true,
        &["1", "2", "3", "4"],
        &[("1", "2"), ("2", "3"), ("3", "4")],
    )?;

    assert_eq!(
        algo::shortest_path(&graph, "1", "4")?,
        Some(vec!["1", "2", "3", "4"])
    );
    assert_eq!(algo::vertices_n_away(&graph, "1", 2)?, vec!["3"]);
    assert_eq!(algo::vertices_n_away(&graph, "1", 0)?, vec!["1"]);
    assert_eq!(algo::shortest_path(&graph, "4", "1")?, None);
    Ok(())
}

#[test]
fn test_weighted_triangle_mst_scenario() -> anyhow::Result<()> {
    init_tracing();
    let graph = weighted_with(
        false,
        &["A", "B", "C"],
        &[("A", "B", 1.0), ("B", "C", 2.0), ("A", "C", 5.0)],
    )?;

    let kruskal = algo::kruskal_mst(&graph);
    assert_eq!(kruskal.edges, vec![("A", "B", 1.0), ("B", "C", 2.0)]);
    assert_eq!(kruskal.total_weight, 3.0);

    for start in ["A", "B", "C"] {
        assert_eq!(algo::prim_mst_from(&graph, start)?.total_weight, 3.0);
    }
    assert_eq!(algo::prim_mst(&graph)?.total_weight, 3.0);
    Ok(())
}

#[test]
fn test_directed_cycle_scenario() -> anyhow::Result<()> {
    let graph = graph_with(true, &["1", "2", "3"], &[("1", "2"), ("2", "3"), ("3", "1")])?;

    assert!(algo::contains_cycle(&graph));
    assert_eq!(algo::topological_sort(&graph), Err(AlgoError::CycleDetected));
    Ok(())
}

#[test]
fn test_dijkstra_negative_weight_scenario() -> anyhow::Result<()> {
    let graph = weighted_with(
        true,
        &["A", "B", "C", "D"],
        &[("A", "B", 2.0), ("B", "C", 3.0), ("A", "C", 10.0), ("C", "D", -4.0)],
    )?;

    let err = algo::dijkstra(&graph, "A", "D").unwrap_err();
    assert!(matches!(err, AlgoError::NegativeWeight { .. }));
    Ok(())
}

#[test]
fn test_dijkstra_distances() -> anyhow::Result<()> {
    let graph = weighted_with(
        true,
        &["A", "B", "C", "D", "E"],
        &[("A", "B", 2.0), ("B", "C", 3.0), ("A", "C", 10.0), ("C", "D", 0.5)],
    )?;

    let result = algo::dijkstra(&graph, "A", "D")?.expect("D is reachable");
    assert_eq!(result.cost, 5.5);
    assert_eq!(result.path, vec!["A", "B", "C", "D"]);
    assert_eq!(algo::dijkstra(&graph, "A", "E")?, None);
    assert!(matches!(
        algo::dijkstra(&graph, "A", "Z"),
        Err(AlgoError::VertexNotFound(_))
    ));
    Ok(())
}

#[test]
fn test_bipartite_disconnected_odd_cycle() -> anyhow::Result<()> {
    // Isolated edge first so a single traversal from the first vertex would miss the triangle
    let graph = graph_with(
        false,
        &["X", "Y", "A", "B", "C"],
        &[("X", "Y"), ("A", "B"), ("B", "C"), ("C", "A")],
    )?;
    assert!(!algo::is_bipartite(&graph));

    let square = graph_with(
        false,
        &["A", "B", "C", "D", "E", "F"],
        &[("A", "B"), ("B", "C"), ("C", "D"), ("D", "A"), ("E", "F")],
    )?;
    assert!(algo::is_bipartite(&square));
    Ok(())
}

#[test]
fn test_connected_components_partition() -> anyhow::Result<()> {
    let graph = graph_with(
        false,
        &["A", "B", "C", "D", "E", "F", "G"],
        &[("A", "B"), ("B", "C"), ("D", "E"), ("F", "F")],
    )?;

    let components = algo::connected_components(&graph);
    assert_eq!(components.len(), 4);

    let mut seen = HashSet::new();
    for component in &components {
        for label in component {
            assert!(seen.insert(*label), "{label} claimed twice");
        }
    }
    assert_eq!(seen.len(), graph.vertex_count());
    assert_eq!(components[0], vec!["A", "B", "C"]);
    Ok(())
}

#[test]
fn test_bfs_visits_each_reachable_vertex_once() -> anyhow::Result<()> {
    let graph = parse_graph(
        "G\nA,B,C,D,E,F,G\n(A,B)\n(A,C)\n(B,D)\n(C,D)\n(D,E)\n(E,F)\n(F,A)\n",
    )?;

    let order: Vec<&str> = algo::bfs(&graph, "A")?.collect();
    assert_eq!(order.len(), 6);
    assert_eq!(order.iter().collect::<HashSet<_>>().len(), 6);
    assert!(!order.contains(&"G"));
    assert_eq!(order[0], "A");

    // Non-decreasing distance from the start
    let mut last = 0;
    for label in &order {
        let distance = algo::shortest_path(&graph, "A", label)?.map(|p| p.len() - 1);
        let distance = distance.expect("reachable");
        assert!(distance >= last);
        last = distance;
    }
    Ok(())
}

#[test]
fn test_medium_undirected_queries() -> anyhow::Result<()> {
    let graph = parse_graph(
        "G\nA,B,C,D,E,F\n(A,B)\n(A,C)\n(B,D)\n(C,E)\n(D,F)\n(E,F)\n",
    )?;

    assert_eq!(algo::shortest_path(&graph, "A", "F")?.map(|p| p.len()), Some(4));

    let mut one_away = algo::vertices_n_away(&graph, "A", 1)?;
    one_away.sort();
    assert_eq!(one_away, vec!["B", "C"]);

    let mut two_away = algo::vertices_n_away(&graph, "A", 2)?;
    two_away.sort();
    assert_eq!(two_away, vec!["D", "E"]);

    assert_eq!(algo::vertices_n_away(&graph, "A", 3)?, vec!["F"]);
    Ok(())
}

#[test]
fn test_dfs_traversal_and_path() -> anyhow::Result<()> {
    let graph = graph_with(
        true,
        &["A", "B", "C", "D", "E"],
        &[("A", "B"), ("B", "C"), ("A", "D"), ("D", "C")],
    )?;

    let order: Vec<&str> = algo::dfs(&graph, "A")?.collect();
    assert_eq!(order, vec!["A", "B", "C", "D"]);

    let path = algo::dfs_path(&graph, "A", "C")?.expect("C is reachable");
    assert_eq!(path.first(), Some(&"A"));
    assert_eq!(path.last(), Some(&"C"));
    assert_eq!(algo::dfs_path(&graph, "C", "A")?, None);
    assert!(algo::dfs_path(&graph, "A", "Q").is_err());
    Ok(())
}

#[test]
fn test_missing_vertex_is_an_error() -> anyhow::Result<()> {
    let graph = graph_with(true, &["A"], &[])?;
    let missing = AlgoError::VertexNotFound("B".to_string());

    assert_eq!(algo::shortest_path(&graph, "A", "B").unwrap_err(), missing);
    assert_eq!(algo::vertices_n_away(&graph, "B", 1).unwrap_err(), missing);
    assert!(algo::bfs(&graph, "B").is_err());
    assert!(algo::dfs(&graph, "B").is_err());
    Ok(())
}

#[test]
fn test_topological_sort_respects_edges() -> anyhow::Result<()> {
    let edges = [
        ("fetch", "build"),
        ("configure", "build"),
        ("build", "test"),
        ("build", "package"),
        ("test", "release"),
        ("package", "release"),
    ];
    let graph = graph_with(
        true,
        &["release", "test", "package", "build", "configure", "fetch"],
        &edges,
    )?;

    assert!(!algo::contains_cycle(&graph));
    let order = algo::topological_sort(&graph)?;
    assert_eq!(order.len(), 6);
    let index = |label: &str| order.iter().position(|&l| l == label).unwrap();
    for (u, v) in edges {
        assert!(index(u) < index(v), "{u} must precede {v}");
    }
    Ok(())
}

#[test]
fn test_floyd_warshall_matches_dijkstra() -> anyhow::Result<()> {
    let graph = parse_weighted_graph(
        "D\nA,B,C,D,E\n(A,B,4)\n(A,C,1)\n(C,B,2)\n(B,D,1)\n(C,D,5)\n(D,E,3)\n",
    )?;

    let matrix = algo::floyd_warshall(&graph)?;
    for from in &matrix.labels {
        for to in &matrix.labels {
            let expected = algo::dijkstra(&graph, from, to)?.map(|r| r.cost);
            let actual = matrix.distance(from, to).expect("known labels");
            match expected {
                Some(cost) => assert_eq!(actual, cost, "{from} -> {to}"),
                None => assert_eq!(actual, f64::INFINITY, "{from} -> {to}"),
            }
        }
    }
    assert_eq!(matrix.distance("A", "E"), Some(7.0));
    Ok(())
}

#[test]
fn test_unweighted_graph_in_weighted_algorithms() -> anyhow::Result<()> {
    let graph = graph_with(false, &["A", "B", "C", "D"], &[("A", "B"), ("B", "C"), ("C", "D"), ("D", "A")])?;

    assert_eq!(algo::kruskal_mst(&graph).total_weight, 3.0);
    assert_eq!(algo::dijkstra(&graph, "A", "C")?.map(|r| r.cost), Some(2.0));
    Ok(())
}

#[test]
fn test_kruskal_forest_on_disconnected_graph() -> anyhow::Result<()> {
    let graph = weighted_with(
        false,
        &["A", "B", "C", "D"],
        &[("A", "B", 3.0), ("C", "D", 1.0)],
    )?;

    let forest = algo::kruskal_mst(&graph);
    assert_eq!(forest.edges.len(), 2);
    assert_eq!(forest.total_weight, 4.0);
    assert!(matches!(
        algo::prim_mst(&graph),
        Err(AlgoError::Disconnected { reached: 2, total: 4 })
    ));
    Ok(())
}

#[test]
fn test_deep_graph_traversals() -> anyhow::Result<()> {
    let mut graph: Graph = Graph::directed();
    let n = 5_000;
    for i in 0..n {
        graph.add_vertex(format!("v{i}"))?;
    }
    for i in 1..n {
        graph.add_edge(&format!("v{}", i - 1), &format!("v{i}"))?;
    }

    assert_eq!(algo::dfs(&graph, "v0")?.count(), n);
    assert!(!algo::contains_cycle(&graph));
    assert_eq!(algo::topological_sort(&graph)?.len(), n);

    graph.add_edge(&format!("v{}", n - 1), "v0")?;
    assert!(algo::contains_cycle(&graph));
    Ok(())
}
