//! Command-line arguments for the stock watch demo.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::Parser;
use std::path::PathBuf;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Names of the investors to attach to the stock, in attachment order.
    #[clap(long, num_args = 1.., default_values_t = vec!["Alice".to_string(), "Bob".to_string()])]
    pub investors: Vec<String>,

    /// Price changes to replay, in order.
    #[clap(long, num_args = 1.., default_values_t = vec![150.5, 155.0])]
    pub prices: Vec<f64>,

    /// Path to a text file with one price per line.
    /// When given, the file replaces the --prices list.
    #[clap(long)]
    pub path: Option<PathBuf>,
}
