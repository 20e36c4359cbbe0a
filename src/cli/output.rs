//! Output formatting for CLI

use crate::search::{Candidate, Selection};

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Format a number with thousands separators
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// One table row per root move, best moves marked with `*`
pub fn candidate_rows(selection: &Selection) -> Vec<String> {
    selection
        .candidates
        .iter()
        .map(|&Candidate { mv, value }| {
            let marker = if mv == selection.chosen {
                "<-"
            } else if value == selection.best_value {
                "*"
            } else {
                ""
            };
            format!("  cell {}  {:>10}  {marker}", mv.cell + 1, value)
        })
        .collect()
}
