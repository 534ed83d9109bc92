//! Command line interface
//!
//! `lexrank idf` builds the idf table for a dataset; `lexrank summarize`
//! reads it back and ranks the sentences of one document. The two runs
//! share nothing but the idf file.

pub mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use commands::{Commands, IdfArgs, SummarizeArgs};
use rapid_lexrank::io::dataset::{doc_id_from_path, list_documents, read_corpus, read_document};
use rapid_lexrank::io::idf_file::{load_idf, save_idf};
use rapid_lexrank::{IdfTable, LexRank, LexRankConfig, Normalizer, Summary};
use std::io::{self, Write};
use std::path::Path;

#[derive(Parser, Debug)]
#[command(
    name = "lexrank",
    version,
    about = "Extractive summaries ranked by LexRank."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Idf(args) => run_idf(args),
            Commands::Summarize(args) => run_summarize(args),
        }
    }
}

fn load_config(path: Option<&Path>, stopwords: Option<&Path>) -> Result<LexRankConfig> {
    let mut config = match path {
        Some(path) => LexRankConfig::from_json_file(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => LexRankConfig::default(),
    };
    if let Some(stopwords) = stopwords {
        config.stopwords_file = Some(stopwords.to_path_buf());
    }
    Ok(config)
}

fn build_normalizer(config: &LexRankConfig) -> Result<Normalizer> {
    Normalizer::from_config(config).context("loading stopwords")
}

fn run_idf(args: IdfArgs) -> Result<()> {
    let config = load_config(args.config.as_deref(), args.stopwords.as_deref())?;
    let normalizer = build_normalizer(&config)?;

    let files = list_documents(&args.dataset_dir)
        .with_context(|| format!("listing dataset {}", args.dataset_dir.display()))?;
    tracing::info!(files = files.len(), dir = %args.dataset_dir.display(), "found documents");

    let raw = read_corpus(&files).context("reading dataset documents")?;
    let corpus = normalizer.normalize_corpus(&raw);
    let idf = IdfTable::from_corpus(&corpus).context("computing idf scores")?;

    save_idf(&args.output, &idf)
        .with_context(|| format!("writing idf table to {}", args.output.display()))?;
    Ok(())
}

fn run_summarize(args: SummarizeArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref(), args.stopwords.as_deref())?;
    if let Some(top) = args.top {
        config.summary_length = top;
    }

    let path = args.dataset_dir.join(&args.filename);
    let id = doc_id_from_path(&path)?;
    let raw = read_document(&path).with_context(|| format!("reading {}", path.display()))?;
    tracing::info!(id, sentences = raw.len(), "summarizing document");

    let idf = load_idf(&args.idf)
        .with_context(|| format!("loading idf table from {}", args.idf.display()))?;

    let normalizer = build_normalizer(&config)?;
    let doc = normalizer.normalize_document(&raw);

    let summary_length = config.summary_length;
    let summary = LexRank::new(config)?
        .summarize(&raw, &doc, &idf)
        .with_context(|| format!("ranking sentences of document {id}"))?;

    let stdout = io::stdout();
    print_summary(&mut stdout.lock(), &summary, summary_length)?;
    Ok(())
}

/// Scores in document order, a blank line, then the best `k` sentences
fn print_summary<W: Write>(out: &mut W, summary: &Summary, k: usize) -> io::Result<()> {
    for sentence in &summary.sentences {
        writeln!(out, "{:.6}", sentence.score)?;
    }
    writeln!(out)?;

    for sentence in summary.top(k) {
        writeln!(out, "{}", sentence.text)?;
    }
    out.flush()
}
