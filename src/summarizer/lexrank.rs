//! LexRank scoring
//!
//! tf-idf vectors -> similarity graph -> damped transition matrix ->
//! stationary distribution. Scores come back in normalized-sentence order;
//! use [`Summary`] to map them onto the raw document.

use super::selector::Summary;
use crate::errors::Result;
use crate::graph::builder::GraphBuilder;
use crate::graph::markov::transition_matrix;
use crate::pagerank::power::PowerIteration;
use crate::pagerank::PowerIterationResult;
use crate::types::{LexRankConfig, NormalizedDocument, RawDocument};
use crate::vsm::idf::IdfTable;
use crate::vsm::tfidf::tf_idf_maps;

/// LexRank scorer for single documents
#[derive(Debug, Clone, Default)]
pub struct LexRank {
    config: LexRankConfig,
}

impl LexRank {
    /// Create a scorer, validating `config`
    pub fn new(config: LexRankConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &LexRankConfig {
        &self.config
    }

    /// Score every sentence of `doc` against a previously computed idf table
    pub fn score(&self, doc: &NormalizedDocument, idf: &IdfTable) -> Result<PowerIterationResult> {
        let vectors = tf_idf_maps(doc, idf, self.config.unknown_terms)?;

        let adjacency = GraphBuilder::new()
            .with_threshold(self.config.edge_threshold)
            .build(&vectors);

        let transition = transition_matrix(&adjacency, self.config.damping);

        PowerIteration::new()
            .with_max_iterations(self.config.max_iterations)
            .with_threshold(self.config.convergence_threshold)
            .run(&transition)
    }

    /// Score `doc` and pair the scores with the sentences of `raw` it was
    /// normalized from
    pub fn summarize(
        &self,
        raw: &RawDocument,
        doc: &NormalizedDocument,
        idf: &IdfTable,
    ) -> Result<Summary> {
        let result = self.score(doc, idf)?;
        Summary::from_scores(raw, doc, &result.scores)
    }
}

/// LexRank scores of `doc` with the default configuration
pub fn lexrank(doc: &NormalizedDocument, idf: &IdfTable) -> Result<Vec<f64>> {
    Ok(LexRank::default().score(doc, idf)?.scores)
}
