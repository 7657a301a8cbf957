use anyhow::Result;

use crate::passcheck;
use crate::passgen::{self, PasswordOptions};
use crate::setclip;

pub fn generate_random(options: &PasswordOptions, copy: bool, clear_after: u64) -> Result<()> {
    let password = passgen::generate_password(options)?;
    println!("Generated password: {}", password);

    let report = passcheck::check_password_strength(&password);
    println!(
        "Strength: {} (score: {}/4), estimated crack time: {}",
        report.label, report.score, report.crack_time
    );

    if copy {
        setclip::copy_to_clipboard(&password, clear_after)?;
        println!(
            "Password copied to clipboard, clearing in {} seconds",
            clear_after
        );
    }

    Ok(())
}
