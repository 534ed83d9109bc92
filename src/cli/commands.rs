//! Subcommands and their arguments

use clap::{Args, Subcommand};
use rapid_lexrank::io::idf_file::IDF_FILENAME;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the idf table of every document in a dataset directory
    Idf(IdfArgs),

    /// Print LexRank scores and a summary of one document
    Summarize(SummarizeArgs),
}

#[derive(Args, Debug)]
pub struct IdfArgs {
    /// Directory of `<id>.txt` documents
    pub dataset_dir: PathBuf,

    /// Where to write the idf table
    #[arg(long, default_value = IDF_FILENAME)]
    pub output: PathBuf,

    /// JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Stopword list file (overrides the configuration)
    #[arg(long)]
    pub stopwords: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct SummarizeArgs {
    /// Directory of `<id>.txt` documents
    pub dataset_dir: PathBuf,

    /// File name of the document to summarize, relative to the dataset directory
    pub filename: PathBuf,

    /// idf table written by the `idf` command
    #[arg(long, default_value = IDF_FILENAME)]
    pub idf: PathBuf,

    /// JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Stopword list file (overrides the configuration)
    #[arg(long)]
    pub stopwords: Option<PathBuf>,

    /// Number of summary sentences (overrides the configuration)
    #[arg(long)]
    pub top: Option<usize>,
}
