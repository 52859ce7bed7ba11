//! Display functions for command results

use super::formatters::{columns, letter_list, row_pattern};
use crate::form::FormState;
use crate::query::{FilterRequest, ResultsView};
use anyhow::Result;
use colored::Colorize;

const WORDS_PER_LINE: usize = 6;

/// Print the constraints a query is about to send
pub fn print_query_summary(state: &FormState, server: &str) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Filtering {}-letter words on {}",
        state.length_input().bright_yellow().bold(),
        server.bright_black()
    );
    println!("{}", "─".repeat(60).cyan());

    println!("   Positioned:  {}", row_pattern(state.positioned()).green());
    println!("   Misplaced:   {}", row_pattern(state.misplaced()).yellow());
    println!("   Required:    {}", letter_list(state.required()));
    println!("   Excluded:    {}", letter_list(state.excluded()).red());
    for (i, row) in state.found_rows().iter().enumerate() {
        println!("   Found #{}:    {}", i + 1, row_pattern(row.cells()));
    }
}

/// Print a results view the way the results panel shows it
pub fn print_results(view: &ResultsView) {
    println!();
    let total = view.total_line();
    if !total.is_empty() {
        println!("{}", total.bright_cyan().bold());
    }

    if view.is_error() {
        for item in view.items() {
            println!("{}", item.red().bold());
        }
        return;
    }

    match view {
        ResultsView::Candidates { words, .. } if !words.is_empty() => {
            for line in columns(words, WORDS_PER_LINE) {
                println!("   {line}");
            }
        }
        _ => {
            for item in view.items() {
                println!("   {}", item.bright_black());
            }
        }
    }
}

/// Print the JSON body that would be sent
///
/// # Errors
/// Returns an error if the request cannot be serialized.
pub fn print_request(request: &FilterRequest) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(request)?);
    Ok(())
}
