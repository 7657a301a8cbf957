//  ____  ____     __        __    _____           _
// |  _ \|  _ \ __ \ \      / /__ |_   _|__   ___ | |
// | |_) | |_) / _` \ \ /\ / / _ \  | |/ _ \ / _ \| |
// |  _ <|  __/ (_| |\ V  V / (_) | | | (_) | (_) | |
// |_| \_\_|   \__,_| \_/\_/ \___/  |_|\___/ \___/|_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-12
// Version : 0.1.0
// License : Mulan PSL v2
//
// Password generator

use std::collections::HashSet;
use std::fmt;

use rand::Rng;
use rand::rngs::OsRng;

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const NUMBERS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

// Characters that are easy to misread for one another.
const AMBIGUOUS: [char; 7] = ['i', 'l', '1', 'L', 'o', '0', 'O'];

// Redraw ceiling per output position when duplicates are excluded.
const MAX_DRAW_ATTEMPTS: usize = 100;

#[derive(Debug, Clone)]
pub struct PasswordOptions {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
    pub exclude_ambiguous: bool,
    pub exclude_duplicates: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: 16,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
            exclude_ambiguous: false,
            exclude_duplicates: false,
        }
    }
}

#[derive(Debug)]
pub enum PassGenError {
    /// The selected options leave nothing to draw from.
    Config(String),
    /// Duplicate-free generation cannot be satisfied.
    Exhausted(String),
}

impl fmt::Display for PassGenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PassGenError::Config(msg) => write!(f, "Configuration error: {}", msg),
            PassGenError::Exhausted(msg) => write!(f, "Generation exhausted: {}", msg),
        }
    }
}

impl std::error::Error for PassGenError {}

/// Build the character pool for the selected categories, in fixed order:
/// uppercase, lowercase, numbers, symbols.
pub fn build_char_pool(options: &PasswordOptions) -> Result<Vec<char>, PassGenError> {
    if !options.include_uppercase
        && !options.include_lowercase
        && !options.include_numbers
        && !options.include_symbols
    {
        return Err(PassGenError::Config(
            "At least one character set must be included".to_string(),
        ));
    }

    let mut pool = String::new();
    if options.include_uppercase {
        pool.push_str(UPPERCASE);
    }
    if options.include_lowercase {
        pool.push_str(LOWERCASE);
    }
    if options.include_numbers {
        pool.push_str(NUMBERS);
    }
    if options.include_symbols {
        pool.push_str(SYMBOLS);
    }

    if options.exclude_ambiguous {
        pool.retain(|c| !AMBIGUOUS.contains(&c));
    }

    if pool.is_empty() {
        return Err(PassGenError::Config(
            "Character pool is empty after removing ambiguous characters".to_string(),
        ));
    }

    Ok(pool.chars().collect())
}

pub fn generate_password(options: &PasswordOptions) -> Result<String, PassGenError> {
    let pool = build_char_pool(options)?;

    if options.exclude_duplicates {
        let distinct = pool.iter().collect::<HashSet<_>>().len();
        if distinct < options.length {
            return Err(PassGenError::Exhausted(format!(
                "Pool has only {} distinct characters, cannot build a duplicate-free password of length {}",
                distinct, options.length
            )));
        }
    }

    // OsRng draws from the operating system CSPRNG. gen_range samples
    // through rand's uniform distribution, which rejects values that would
    // skew the result, so there is no modulo bias over the pool size.
    let mut rng = OsRng::default();
    let mut used: HashSet<char> = HashSet::new();
    let mut password = String::with_capacity(options.length);

    for _ in 0..options.length {
        let mut drawn = None;
        for _ in 0..MAX_DRAW_ATTEMPTS {
            let candidate = pool[rng.gen_range(0..pool.len())];
            if options.exclude_duplicates && used.contains(&candidate) {
                continue;
            }
            drawn = Some(candidate);
            break;
        }

        let c = drawn.ok_or_else(|| {
            PassGenError::Exhausted(format!(
                "Gave up after {} draws without finding an unused character",
                MAX_DRAW_ATTEMPTS
            ))
        })?;

        if options.exclude_duplicates {
            used.insert(c);
        }
        password.push(c);
    }

    Ok(password)
}
