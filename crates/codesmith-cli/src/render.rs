//! Terminal rendering of a validated crew result.
//!
//! Three panels mirror the request lifecycle: the assignment, the generated
//! code, and the program output, followed by saved-artifact confirmations.

use crate::persist::Artifacts;
use codesmith_core::schema::CodeResult;
use codesmith_crew::TestReport;
use colored::Colorize;

const RULE_WIDTH: usize = 72;

/// Capitalizes the language name for display only; the stored record keeps
/// the language exactly as the requester supplied it.
pub fn display_language(language: &str) -> String {
    let mut chars = language.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

fn rule(title: &str) {
    let bar = "─".repeat(RULE_WIDTH.saturating_sub(title.len() + 6) / 2);
    println!("{}", format!("{bar}  {title}  {bar}").cyan().bold());
}

fn panel(title: &str, body: &str, color: &str) {
    println!();
    println!("{}", format!("── {title} ──").color(color).bold());
    for line in body.lines() {
        println!("  {line}");
    }
    if body.is_empty() {
        println!("  (empty)");
    }
}

/// Prints the full result: assignment, code, and execution output.
pub fn print_result(result: &CodeResult) {
    rule("Code Generation Result");

    let assignment = format!(
        "Question: {}\nLanguage: {}",
        result.question,
        display_language(&result.programming_language)
    );
    panel("Assignment", &assignment, "yellow");
    panel("Generated Code", &result.code, "green");
    panel("Program Output", &result.final_result, "blue");
    println!();
}

/// Prints where the two artifacts were written.
pub fn print_saved(artifacts: &Artifacts) {
    println!(
        "{} {}",
        "Generated code saved to:".green().bold(),
        artifacts.code_path.display()
    );
    println!(
        "{} {}",
        "Execution output saved to:".green().bold(),
        artifacts.result_path.display()
    );
}

/// Prints the pass/fail summary of a test session.
pub fn print_test_report(report: &TestReport) {
    rule("Test Report");
    println!(
        "  iterations: {}  passed: {}  failed: {}",
        report.iterations,
        report.passed.to_string().green(),
        report.failed.to_string().red()
    );
    if let Some(last_error) = &report.last_error {
        println!("  last error: {last_error}");
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_language_capitalizes_first_letter_only() {
        assert_eq!(display_language("python"), "Python");
        assert_eq!(display_language("pYTHON"), "Python");
        assert_eq!(display_language("c++"), "C++");
        assert_eq!(display_language(""), "");
    }
}
