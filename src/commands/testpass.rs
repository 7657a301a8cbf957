use std::io::{self, Write};

use anyhow::Result;
use rpassword::read_password;

use crate::passcheck::{self, StrengthResult};

pub fn test_password(password: Option<String>, json: bool) -> Result<()> {
    let password = match password {
        Some(p) => p,
        None => {
            // Prompt instead of taking the password from the command line,
            // keeps it out of shell history.
            print!("Enter password to test: ");
            io::stdout().flush()?;
            read_password()?
        }
    };

    let report = passcheck::check_password_strength(&password);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_report(&report);
    Ok(())
}

fn print_report(report: &StrengthResult) {
    println!(
        "Password strength: {} (score: {}/4, {}%)",
        report.label, report.score, report.percentage
    );
    println!("Estimated crack time: {}", report.crack_time);

    if !report.factors.is_empty() {
        println!("\nChecks:");
        for factor in &report.factors {
            println!("  [{}] {}: {}", factor.status, factor.name, factor.description);
        }
    }

    if !report.suggestions.is_empty() {
        println!("\nSuggestions:");
        for suggestion in &report.suggestions {
            println!("  - {}", suggestion);
        }
    }
}
