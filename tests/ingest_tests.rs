//! Ingestion Tests
//!
//! End-to-end loads from on-disk review exports and lexicon files into a
//! query-ready graph, including the failure surfaces an embedding
//! application has to handle.

use std::fs;
use std::path::PathBuf;

use reel::{
    load_review_graph, recommend_movies, EntityKind, ReelError, SimilarityMetric,
};
use tempfile::TempDir;

const LEXICON: &str = "\
# positive<TAB>negative<TAB>word
0.625\t0.0\tgood\n0.875\t0.0\tmasterful\n0.0\t0.75\tterrible\n0.0\t0.5\tdull\n";

const REVIEWS: &str = "\
index,title,reviewer,publisher,review,date,score
0, Heat, alice, Daily Reel, A good and masterful heist picture, 2024-01-02, 9
1, Heat, bob, The Gazette, Terrible pacing and a dull finale, 2024-01-05, 4
2, Ronin, alice, Daily Reel, Good chases, 2024-02-01, 8
3, Ronin, bob, The Gazette, Dull beyond words, 2024-02-03, 4
4, Krull, carol, Fantasy Weekly, No overlap with anyone, 2024-03-01, 7
";

fn write_fixture(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn load_builds_expected_graph() {
    let dir = TempDir::new().unwrap();
    let reviews = write_fixture(&dir, "reviews.csv", REVIEWS);
    let lexicon = write_fixture(&dir, "lexicon.txt", LEXICON);

    let graph = load_review_graph(&reviews, &lexicon).unwrap();

    // 3 movies + 3 users, one edge per row.
    assert_eq!(graph.vertex_count(), 6);
    assert_eq!(graph.edge_count(), 5);
    assert_eq!(graph.all_vertices(Some(EntityKind::Movie)).len(), 3);
    assert_eq!(graph.all_vertices(Some(EntityKind::User)).len(), 3);

    // Fields are whitespace-trimmed.
    let heat = "Heat".to_string();
    let alice = "alice".to_string();
    assert!(graph.adjacent(&heat, &alice));
    assert_eq!(graph.weight_of(&heat, &alice), 9.0);
}

#[test]
fn load_derives_sentiment_from_reviews() {
    let dir = TempDir::new().unwrap();
    let reviews = write_fixture(&dir, "reviews.csv", REVIEWS);
    let lexicon = write_fixture(&dir, "lexicon.txt", LEXICON);

    let graph = load_review_graph(&reviews, &lexicon).unwrap();

    // good (0.625) + masterful (0.875) over 2 matches: sentiment 0.75;
    // advanced = 9 + 9 * 0.75 = 15.8 after rounding.
    let advanced = graph.advanced_weight_of(&"Heat".to_string(), &"alice".to_string());
    assert_eq!(advanced, 15.8);

    // terrible + dull: sentiment -0.625; advanced = 4 - 2.5 = 1.5.
    let advanced = graph.advanced_weight_of(&"Heat".to_string(), &"bob".to_string());
    assert_eq!(advanced, 1.5);

    // Unmatched review text stays neutral.
    let advanced = graph.advanced_weight_of(&"Krull".to_string(), &"carol".to_string());
    assert_eq!(advanced, 7.0);
}

#[test]
fn loaded_graph_answers_recommendations() {
    let dir = TempDir::new().unwrap();
    let reviews = write_fixture(&dir, "reviews.csv", REVIEWS);
    let lexicon = write_fixture(&dir, "lexicon.txt", LEXICON);

    let graph = load_review_graph(&reviews, &lexicon).unwrap();

    let picks = recommend_movies(&graph, "Heat", 10, SimilarityMetric::Unweighted, 0.0).unwrap();
    assert_eq!(picks.len(), 1);
    assert_eq!(picks[0].id, "Ronin");
    assert_eq!(picks[0].score, 1000.0);
    assert_eq!(picks[0].seed, "Heat");

    // Ratings agree within 1 point for both shared reviewers.
    let picks = recommend_movies(&graph, "Heat", 10, SimilarityMetric::Weighted, 1.0).unwrap();
    assert_eq!(picks[0].score, 1000.0);

    // Under exact agreement only bob's 4/4 pair matches.
    let picks = recommend_movies(&graph, "Heat", 10, SimilarityMetric::Weighted, 0.0).unwrap();
    assert_eq!(picks[0].score, 500.0);
}

#[test]
fn wrong_kind_seed_is_rejected() {
    let dir = TempDir::new().unwrap();
    let reviews = write_fixture(&dir, "reviews.csv", REVIEWS);
    let lexicon = write_fixture(&dir, "lexicon.txt", LEXICON);

    let graph = load_review_graph(&reviews, &lexicon).unwrap();
    let err = recommend_movies(&graph, "alice", 5, SimilarityMetric::Unweighted, 0.0).unwrap_err();
    assert!(matches!(err, ReelError::WrongKind(_)));
}

#[test]
fn missing_review_file_surfaces_io_error() {
    let dir = TempDir::new().unwrap();
    let lexicon = write_fixture(&dir, "lexicon.txt", LEXICON);
    let err = load_review_graph(dir.path().join("absent.csv"), &lexicon).unwrap_err();
    assert!(matches!(err, ReelError::Io(_) | ReelError::Csv(_)));
}

#[test]
fn malformed_lexicon_names_the_line() {
    let dir = TempDir::new().unwrap();
    let reviews = write_fixture(&dir, "reviews.csv", REVIEWS);
    let lexicon = write_fixture(&dir, "lexicon.txt", "# header\n0.5\tgood\n");

    let err = load_review_graph(&reviews, &lexicon).unwrap_err();
    match err {
        ReelError::LexiconParse { line, .. } => assert_eq!(line, 2),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn non_numeric_rating_names_the_record() {
    let dir = TempDir::new().unwrap();
    let bad = "index,title,reviewer,publisher,review,date,score\n\
               0, Heat, alice, p, fine, d, 9\n\
               1, Heat, bob, p, fine, d, four\n";
    let reviews = write_fixture(&dir, "reviews.csv", bad);
    let lexicon = write_fixture(&dir, "lexicon.txt", LEXICON);

    let err = load_review_graph(&reviews, &lexicon).unwrap_err();
    match err {
        ReelError::InvalidScore { record, value } => {
            assert_eq!(record, 2);
            assert_eq!(value, "four");
        }
        other => panic!("unexpected error: {other}"),
    }
}
