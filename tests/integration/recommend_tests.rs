use castnet::{
    build_network, recommend, top_recommendations, ActorRecord, CastGraph, FilterSpec,
    MovieRecord, Recommendation, Reference,
};

fn network(movies: &[(&str, i32, Option<f64>, &[&str])]) -> CastGraph {
    let mut ids: Vec<&str> = Vec::new();
    for (_, _, _, cast) in movies {
        for &a in *cast {
            if !ids.contains(&a) {
                ids.push(a);
            }
        }
    }
    let actors = ids
        .iter()
        .map(|a| ActorRecord {
            id: (*a).into(),
            name: (*a).into(),
        })
        .collect();
    let movies = movies
        .iter()
        .map(|(id, year, rating, cast)| MovieRecord {
            id: (*id).into(),
            title: (*id).into(),
            release_year: *year,
            rating: *rating,
            cast: cast.iter().map(|c| (*c).into()).collect(),
        })
        .collect();
    build_network(actors, movies).unwrap()
}

fn keys(graph: &CastGraph, entries: &[Recommendation]) -> Vec<String> {
    entries
        .iter()
        .map(|e| graph.store().movie(e.movie).unwrap().key.to_string())
        .collect()
}

#[test]
fn worked_example_two_shared_cast_members() {
    // M1 {A, B}, M2 {A, B, C}: recommend(M1) = [M2] with score 2.
    let graph = network(&[
        ("M1", 1990, None, &["A", "B"]),
        ("M2", 1992, None, &["A", "B", "C"]),
    ]);
    let recs = recommend(&graph, Reference::Movie("M1"), &FilterSpec::default()).unwrap();
    assert_eq!(keys(&graph, &recs), vec!["M2"]);
    assert_eq!(recs[0].score, 2);
}

#[test]
fn worked_example_min_rating_excludes_best_scoring_candidate() {
    let graph = network(&[
        ("ref", 2000, Some(8.0), &["A", "B", "C"]),
        ("strong", 2001, Some(6.9), &["A", "B", "C"]),
        ("unrated", 2002, None, &["A", "B"]),
        ("weak", 2003, Some(7.4), &["A"]),
    ]);
    let filters = FilterSpec {
        min_rating: Some(7.0),
        ..FilterSpec::default()
    };
    let recs = recommend(&graph, Reference::Movie("ref"), &filters).unwrap();
    assert_eq!(keys(&graph, &recs), vec!["weak"]);
}

#[test]
fn reference_and_zero_score_movies_never_appear() {
    let graph = network(&[
        ("ref", 2000, None, &["A"]),
        ("related", 2001, None, &["A", "B"]),
        ("unrelated", 2002, None, &["X"]),
    ]);
    let recs = recommend(&graph, Reference::Movie("ref"), &FilterSpec::default()).unwrap();
    assert_eq!(keys(&graph, &recs), vec!["related"]);
    assert!(recs.iter().all(|r| r.score > 0));
}

#[test]
fn actor_reference_recommends_only_unseen_movies() {
    let graph = network(&[
        ("seen", 2000, None, &["star", "co1", "co2"]),
        ("cand", 2001, None, &["co1", "co2", "other"]),
        ("also_seen", 2002, None, &["star", "other"]),
    ]);
    let recs = recommend(&graph, Reference::Actor("star"), &FilterSpec::default()).unwrap();
    // Both of star's own movies are excluded; cand scores max(2, 1) = 2.
    assert_eq!(keys(&graph, &recs), vec!["cand"]);
    assert_eq!(recs[0].score, 2);
}

#[test]
fn filters_compose_conjunctively() {
    let graph = network(&[
        ("ref", 2000, None, &["A"]),
        ("in_window_low_rating", 1996, Some(5.0), &["A"]),
        ("good_rating_out_of_window", 2010, Some(9.0), &["A"]),
        ("both", 1997, Some(8.5), &["A"]),
    ]);
    let filters = FilterSpec {
        min_date: Some(1995),
        max_date: Some(1999),
        min_rating: Some(7.0),
    };
    let recs = recommend(&graph, Reference::Movie("ref"), &filters).unwrap();
    assert_eq!(keys(&graph, &recs), vec!["both"]);
}

#[test]
fn recommendations_are_idempotent() {
    let graph = network(&[
        ("ref", 2000, Some(7.0), &["A", "B"]),
        ("m1", 2001, Some(8.0), &["A", "B"]),
        ("m2", 2002, Some(8.0), &["A", "B"]),
        ("m3", 2003, None, &["B"]),
    ]);
    let first = recommend(&graph, Reference::Movie("ref"), &FilterSpec::default()).unwrap();
    for _ in 0..3 {
        assert_eq!(
            recommend(&graph, Reference::Movie("ref"), &FilterSpec::default()).unwrap(),
            first
        );
    }
}

#[test]
fn top_recommendations_honors_the_limit() {
    let graph = network(&[
        ("ref", 2000, None, &["A", "B", "C"]),
        ("m1", 2001, None, &["A"]),
        ("m2", 2002, None, &["A", "B"]),
        ("m3", 2003, None, &["A", "B", "C"]),
    ]);
    let recs = top_recommendations(
        &graph,
        Reference::Movie("ref"),
        &FilterSpec::default(),
        1,
    )
    .unwrap();
    assert_eq!(keys(&graph, &recs), vec!["m3"]);
}
