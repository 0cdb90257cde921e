use castnet::{
    bacon_number, bacon_number_filtered, build_network, ActorRecord, BaconResult, CastGraph,
    FilterSpec, GraphNode, MovieRecord,
};

fn fixture() -> CastGraph {
    let actors = ["A", "B", "C", "D"]
        .map(|id| ActorRecord {
            id: id.into(),
            name: id.into(),
        })
        .to_vec();
    let movies = vec![
        MovieRecord {
            id: "M1".into(),
            title: "M1".into(),
            release_year: 1990,
            rating: Some(8.1),
            cast: vec!["A".into(), "B".into()],
        },
        MovieRecord {
            id: "M2".into(),
            title: "M2".into(),
            release_year: 1995,
            rating: Some(6.0),
            cast: vec!["B".into(), "C".into()],
        },
    ];
    build_network(actors, movies).unwrap()
}

fn path_keys(graph: &CastGraph, result: &BaconResult) -> Vec<String> {
    let BaconResult::Path(p) = result else {
        panic!("expected a path, got {:?}", result);
    };
    p.nodes()
        .iter()
        .map(|n| match n {
            GraphNode::Actor(a) => graph.store().actor(*a).unwrap().key.to_string(),
            GraphNode::Movie(m) => graph.store().movie(*m).unwrap().key.to_string(),
        })
        .collect()
}

#[test]
fn worked_example_a_to_c_via_both_movies() {
    let graph = fixture();
    let result = bacon_number(&graph, "A", "C").unwrap();
    assert_eq!(result.distance(), Some(2));
    assert_eq!(path_keys(&graph, &result), vec!["A", "M1", "B", "M2", "C"]);
}

#[test]
fn worked_example_actor_with_no_movies_is_unreachable() {
    let graph = fixture();
    assert_eq!(
        bacon_number(&graph, "A", "D").unwrap(),
        BaconResult::Unreachable
    );
}

#[test]
fn self_query_returns_zero_length_path() {
    let graph = fixture();
    let result = bacon_number(&graph, "B", "B").unwrap();
    assert_eq!(result.distance(), Some(0));
    assert_eq!(path_keys(&graph, &result), vec!["B"]);
}

#[test]
fn distance_is_symmetric_across_the_fixture() {
    let graph = fixture();
    for (x, y) in [("A", "B"), ("A", "C"), ("B", "C"), ("A", "D")] {
        assert_eq!(
            bacon_number(&graph, x, y).unwrap().distance(),
            bacon_number(&graph, y, x).unwrap().distance(),
        );
    }
}

#[test]
fn repeated_queries_are_idempotent() {
    let graph = fixture();
    let first = bacon_number(&graph, "A", "C").unwrap();
    for _ in 0..5 {
        assert_eq!(bacon_number(&graph, "A", "C").unwrap(), first);
    }
}

#[test]
fn rating_filter_can_sever_the_only_route() {
    let graph = fixture();
    // The A->C route needs M2 (rating 6.0); requiring 7.0 severs it.
    let filters = FilterSpec {
        min_rating: Some(7.0),
        ..FilterSpec::default()
    };
    assert_eq!(
        bacon_number_filtered(&graph, "A", "C", &filters).unwrap(),
        BaconResult::Unreachable
    );
    // A->B survives through M1 (rating 8.1).
    assert_eq!(
        bacon_number_filtered(&graph, "A", "B", &filters)
            .unwrap()
            .distance(),
        Some(1)
    );
}

#[test]
fn paths_never_repeat_an_actor() {
    let graph = fixture();
    let result = bacon_number(&graph, "A", "C").unwrap();
    let BaconResult::Path(p) = result else {
        panic!("reachable");
    };
    let actors: Vec<_> = p
        .nodes()
        .iter()
        .filter_map(|n| match n {
            GraphNode::Actor(a) => Some(*a),
            GraphNode::Movie(_) => None,
        })
        .collect();
    let mut deduped = actors.clone();
    deduped.dedup();
    assert_eq!(actors, deduped);
    assert_eq!(actors.len(), p.distance() + 1);
}
