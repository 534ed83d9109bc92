//! File-system adapters
//!
//! Dataset directories in, idf tables in and out.

pub mod dataset;
pub mod idf_file;
