//! Property tests over the graph, the random walk, and the idf codec

use proptest::prelude::*;
use rapid_lexrank::graph::markov::transition_matrix;
use rapid_lexrank::io::idf_file::{parse_idf, write_idf};
use rapid_lexrank::{
    Corpus, GraphBuilder, IdfTable, LexRank, NormalizedDocument, PowerIteration, TermCounts,
    TfIdfVector,
};

const VOCAB: &[&str] = &[
    "rate", "bank", "loan", "mortgag", "price", "hous", "market", "stock", "bond", "yield",
];

/// Sentences drawn from a small vocabulary so that overlaps are common
fn sentences() -> impl Strategy<Value = Vec<TermCounts>> {
    let sentence = prop::collection::vec((0..VOCAB.len(), 1usize..4), 1..5).prop_map(|terms| {
        let mut counts = TermCounts::default();
        for (t, c) in terms {
            *counts.entry(VOCAB[t].to_string()).or_insert(0) += c;
        }
        counts
    });
    prop::collection::vec(sentence, 1..12)
}

fn idf_for_vocab() -> impl Strategy<Value = IdfTable> {
    prop::collection::vec(0.0f64..3.0, VOCAB.len())
        .prop_map(|scores| VOCAB.iter().copied().zip(scores).collect())
}

fn vectors(doc: &NormalizedDocument, idf: &IdfTable) -> Vec<TfIdfVector> {
    rapid_lexrank::vsm::tfidf::tf_idf_maps(doc, idf, Default::default()).unwrap()
}

proptest! {
    #[test]
    fn prop_adjacency_symmetric_with_self_loops(
        counts in sentences(),
        idf in idf_for_vocab(),
        threshold in 0.0f64..1.0,
    ) {
        let doc = NormalizedDocument::from_term_counts(counts);
        let adj = GraphBuilder::new().with_threshold(threshold).build(&vectors(&doc, &idf));

        prop_assert!(adj.is_symmetric());
        for i in 0..adj.num_nodes() {
            prop_assert!(adj.is_adjacent(i, i));
        }
    }

    #[test]
    fn prop_transition_columns_stochastic(
        counts in sentences(),
        idf in idf_for_vocab(),
        damping in 0.01f64..0.99,
    ) {
        let doc = NormalizedDocument::from_term_counts(counts);
        let adj = GraphBuilder::new().build(&vectors(&doc, &idf));
        let t = transition_matrix(&adj, damping);
        let n = t.rows();
        let floor = damping / n as f64;

        for j in 0..n {
            prop_assert!((t.column_sum(j) - 1.0).abs() < 1e-9);
        }
        prop_assert!(t.min_entry().unwrap_or(floor) >= floor - 1e-15);
    }

    #[test]
    fn prop_scores_form_distribution(counts in sentences(), idf in idf_for_vocab()) {
        let doc = NormalizedDocument::from_term_counts(counts);
        let n = doc.len();
        let result = LexRank::default().score(&doc, &idf).unwrap();

        prop_assert_eq!(result.scores.len(), n);
        prop_assert!((result.total() - 1.0).abs() < 1e-6);
        prop_assert!(result.scores.iter().all(|&s| s > 0.0));
    }

    #[test]
    fn prop_scores_independent_of_start(counts in sentences(), idf in idf_for_vocab()) {
        let doc = NormalizedDocument::from_term_counts(counts);
        let adj = GraphBuilder::new().build(&vectors(&doc, &idf));
        let t = transition_matrix(&adj, 0.15);
        let n = t.rows();

        let solver = PowerIteration::new().with_threshold(1e-12);
        let uniform = solver.run(&t).unwrap();
        let mut skewed = vec![0.0; n];
        skewed[0] = 1.0;
        let from_corner = solver.run_from(&t, &skewed).unwrap();

        for (a, b) in uniform.scores.iter().zip(&from_corner.scores) {
            prop_assert!((a - b).abs() < 1e-8);
        }
    }

    #[test]
    fn prop_self_similarity_is_one(counts in sentences(), idf in idf_for_vocab()) {
        let doc = NormalizedDocument::from_term_counts(counts);
        for v in vectors(&doc, &idf) {
            if v.euclidean_length() > 0.0 {
                prop_assert!((v.cosine_similarity(&v) - 1.0).abs() < 1e-9);
            } else {
                prop_assert_eq!(v.cosine_similarity(&v), 0.0);
            }
        }
    }

    #[test]
    fn prop_idf_file_round_trip(
        entries in prop::collection::btree_map("[a-z]{1,12}", 0.0f64..10.0, 0..40),
    ) {
        let table: IdfTable = entries.into_iter().collect();

        let mut buf = Vec::new();
        write_idf(&mut buf, &table).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let parsed = parse_idf(&text).unwrap();
        prop_assert_eq!(&parsed, &table);

        // Writing the parsed table again reproduces the file byte for byte
        let mut again = Vec::new();
        write_idf(&mut again, &parsed).unwrap();
        prop_assert_eq!(String::from_utf8(again).unwrap(), text);
    }

    #[test]
    fn prop_idf_recomputation_is_identical(docs in prop::collection::vec(sentences(), 1..6)) {
        let corpus: Corpus = docs
            .into_iter()
            .enumerate()
            .map(|(id, counts)| (id as u64, NormalizedDocument::from_term_counts(counts)))
            .collect();

        let first = IdfTable::from_corpus(&corpus).unwrap();
        let second = IdfTable::from_corpus(&corpus).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert!(first.iter().all(|(_, score)| score >= 0.0));
    }

    #[test]
    fn prop_ranking_is_total(scores in prop::collection::vec(0.0f64..1.0, 0..30)) {
        let order = rapid_lexrank::pagerank::rank_by_score(&scores);
        prop_assert_eq!(order.len(), scores.len());
        for w in order.windows(2) {
            let (a, b) = (w[0], w[1]);
            prop_assert!(scores[a] > scores[b] || (scores[a] == scores[b] && a < b));
        }
    }
}
