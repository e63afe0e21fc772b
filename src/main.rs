//! Spellsolver - CLI
//!
//! Generates the wordlist and inspects the word index from the command line.

use anyhow::Result;
use clap::{Parser, Subcommand};
use spellsolver::{
    commands::{build_index, check::load_dictionary, check_words, lookup_prefix, run_generate},
    config::{DEFAULT_SOURCES, DEFAULT_SWAPS, DEFAULT_WORDLIST, IndexConfig},
    output::{print_check_result, print_generate_result, print_lookup_result},
    trie::TrieKind,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "spellsolver",
    about = "Word index for letter-tile boards with tile swaps",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory of raw source word files
    #[arg(long, global = true, default_value = DEFAULT_SOURCES)]
    sources: PathBuf,

    /// Generated wordlist file (created from sources when missing)
    #[arg(short = 'w', long, global = true, default_value = DEFAULT_WORDLIST)]
    wordlist: PathBuf,

    /// Trie encoding
    #[arg(short, long, global = true, value_enum, default_value_t = TrieKind::Flat)]
    trie: TrieKind,

    /// Swap budgets to index, comma separated (compressed tries index 0 only)
    #[arg(short, long, global = true, value_delimiter = ',', default_values_t = DEFAULT_SWAPS)]
    swaps: Vec<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Regenerate the wordlist from the source directory
    Generate,

    /// Show the words reachable from each prefix, per swap budget
    Lookup {
        /// Prefixes to look up (use 0 for a swapped tile)
        #[arg(required = true)]
        prefixes: Vec<String>,

        /// Maximum words shown per swap budget
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Check whether words are in the dictionary
    Check {
        /// Words to check
        #[arg(required = true)]
        words: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = IndexConfig {
        sources: cli.sources,
        wordlist: cli.wordlist,
        kind: cli.trie,
        swaps: cli.swaps,
    };

    match cli.command {
        Commands::Generate => run_generate_command(&config),
        Commands::Lookup { prefixes, limit } => run_lookup_command(&config, &prefixes, limit),
        Commands::Check { words } => run_check_command(&config, &words),
    }
}

fn run_generate_command(config: &IndexConfig) -> Result<()> {
    let result = run_generate(&config.word_list())?;
    print_generate_result(&result);
    Ok(())
}

fn run_lookup_command(config: &IndexConfig, prefixes: &[String], limit: usize) -> Result<()> {
    let index = build_index(config)?;
    for prefix in prefixes {
        let result = lookup_prefix(&index, prefix);
        print_lookup_result(&result, limit);
    }
    Ok(())
}

fn run_check_command(config: &IndexConfig, words: &[String]) -> Result<()> {
    let dictionary = load_dictionary(&config.word_list())?;
    let result = check_words(&dictionary, words);
    print_check_result(&result);
    Ok(())
}
