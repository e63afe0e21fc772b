//! Display functions for command results

use super::formatters::{swaps_label, word_preview};
use crate::commands::{CheckResult, GenerateResult, LookupResult};
use colored::Colorize;

/// Print the result of regenerating the wordlist
pub fn print_generate_result(result: &GenerateResult) {
    println!(
        "{} {} words written to {}",
        "✅".green(),
        result.count.to_string().bright_yellow().bold(),
        result.destination.display()
    );
}

/// Print the words reachable from a prefix, per swap budget
pub fn print_lookup_result(result: &LookupResult, limit: usize) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Prefix: {}",
        result.prefix.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (swaps, words) in &result.matches {
        let label = format!("{:>9}", swaps_label(*swaps));
        if words.is_empty() {
            println!("{}  {}", label.bright_cyan(), "no words".bright_black());
        } else {
            println!(
                "{}  {} {}",
                label.bright_cyan(),
                format!("[{}]", words.len()).green(),
                word_preview(&words.iter().map(String::as_str).collect::<Vec<_>>(), limit)
            );
        }
    }
}

/// Print dictionary membership for each checked word
pub fn print_check_result(result: &CheckResult) {
    for (word, found) in &result.words {
        if *found {
            println!("{} {}", "✅".green(), word.bright_yellow());
        } else {
            println!("{} {}", "❌".red(), word.bright_black());
        }
    }
}
