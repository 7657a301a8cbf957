//  ____  ____     __        __    _____           _
// |  _ \|  _ \ __ \ \      / /__ |_   _|__   ___ | |
// | |_) | |_) / _` \ \ /\ / / _ \  | |/ _ \ / _ \| |
// |  _ <|  __/ (_| |\ V  V / (_) | | | (_) | (_) | |
// |_| \_\_|   \__,_| \_/\_/ \___/  |_|\___/ \___/|_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-14
// Version : 0.1.0
// License : Mulan PSL v2
//
// Password strength checker

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

// Small fixed lists for quick heuristic feedback. Not a substitute for a
// real dictionary or breach corpus.
const COMMON_WORDS: [&str; 14] = [
    "password", "admin", "user", "login", "welcome", "hello", "world",
    "test", "guest", "root", "administrator", "pass", "secret", "default",
];

const DIGIT_RUNS: [&str; 8] = ["123", "234", "345", "456", "567", "678", "789", "890"];

const KEYBOARD_RUNS: [&str; 3] = ["qwerty", "asdf", "zxcv"];

const LABELS: [&str; 5] = ["Very Weak", "Weak", "Fair", "Strong", "Very Strong"];
const PERCENTAGES: [u8; 5] = [0, 25, 50, 75, 100];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FactorStatus {
    Good,
    Warning,
    Bad,
}

impl fmt::Display for FactorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FactorStatus::Good => write!(f, "good"),
            FactorStatus::Warning => write!(f, "warning"),
            FactorStatus::Bad => write!(f, "bad"),
        }
    }
}

/// Outcome of one analysis dimension.
#[derive(Debug, Clone, Serialize)]
pub struct StrengthFactor {
    pub name: String,
    pub status: FactorStatus,
    pub description: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrengthResult {
    pub score: u8,
    pub label: &'static str,
    pub percentage: u8,
    pub crack_time: String,
    pub factors: Vec<StrengthFactor>,
    pub suggestions: Vec<String>,
}

/// Run the full check pipeline over a password. Never fails; the empty
/// string is handled as its own case.
pub fn check_password_strength(password: &str) -> StrengthResult {
    if password.is_empty() {
        return StrengthResult {
            score: 0,
            label: "No password",
            percentage: 0,
            crack_time: "instantly".to_string(),
            factors: Vec::new(),
            suggestions: vec!["Enter a password to check its strength".to_string()],
        };
    }

    let chars: Vec<char> = password.chars().collect();
    let length = chars.len();
    let lowered = password.to_lowercase();

    let mut factors = Vec::new();
    let mut suggestions: Vec<String> = Vec::new();
    // Checks contribute in halves; rounded once at the end.
    let mut score = 0.0_f64;

    // 1. Length
    if length >= 12 {
        factors.push(StrengthFactor {
            name: format!("Length ({} characters)", length),
            status: FactorStatus::Good,
            description: "Good length".to_string(),
        });
        score += 1.0;
    } else if length >= 8 {
        factors.push(StrengthFactor {
            name: format!("Length ({} characters)", length),
            status: FactorStatus::Warning,
            description: "Acceptable length".to_string(),
        });
        suggestions.push("Consider using at least 12 characters for better security".to_string());
    } else {
        factors.push(StrengthFactor {
            name: format!("Length ({} characters)", length),
            status: FactorStatus::Bad,
            description: "Too short".to_string(),
        });
        suggestions.push("Use at least 8 characters, preferably 12 or more".to_string());
    }

    // 2. Character variety
    let has_upper = chars.iter().any(|c| c.is_ascii_uppercase());
    let has_lower = chars.iter().any(|c| c.is_ascii_lowercase());
    let has_digit = chars.iter().any(|c| c.is_ascii_digit());
    let has_symbol = chars.iter().any(|c| !c.is_ascii_alphanumeric());
    let variety_count = [has_upper, has_lower, has_digit, has_symbol]
        .iter()
        .filter(|&&present| present)
        .count();

    if variety_count >= 3 {
        let all_four = variety_count == 4;
        factors.push(StrengthFactor {
            name: "Character variety".to_string(),
            status: if all_four {
                FactorStatus::Good
            } else {
                FactorStatus::Warning
            },
            description: if all_four {
                "Excellent variety".to_string()
            } else {
                "Good variety".to_string()
            },
        });
        score += if all_four { 1.0 } else { 0.5 };
    } else {
        factors.push(StrengthFactor {
            name: "Character variety".to_string(),
            status: FactorStatus::Bad,
            description: "Limited variety".to_string(),
        });
        if !has_upper {
            suggestions.push("Add uppercase letters".to_string());
        }
        if !has_lower {
            suggestions.push("Add lowercase letters".to_string());
        }
        if !has_digit {
            suggestions.push("Add numbers".to_string());
        }
        if !has_symbol {
            suggestions.push("Add symbols".to_string());
        }
    }

    // 3. Common patterns
    if !has_common_patterns(&chars, &lowered) {
        factors.push(StrengthFactor {
            name: "Common patterns".to_string(),
            status: FactorStatus::Good,
            description: "None detected".to_string(),
        });
        score += 0.5;
    } else {
        factors.push(StrengthFactor {
            name: "Common patterns".to_string(),
            status: FactorStatus::Bad,
            description: "Detected".to_string(),
        });
        suggestions.push("Avoid common patterns like \"123\", \"abc\", or \"qwerty\"".to_string());
    }

    // 4. Dictionary words
    if !COMMON_WORDS.iter().any(|word| lowered.contains(word)) {
        factors.push(StrengthFactor {
            name: "Dictionary words".to_string(),
            status: FactorStatus::Good,
            description: "None found".to_string(),
        });
        score += 0.5;
    } else {
        factors.push(StrengthFactor {
            name: "Dictionary words".to_string(),
            status: FactorStatus::Bad,
            description: "Found common words".to_string(),
        });
        suggestions.push("Avoid using common dictionary words".to_string());
    }

    // 5. Personal information. Unlike the other checks this one only adds a
    // factor when something is found, and it is the only negative weight.
    if has_year(&chars) || has_date_token(&chars) {
        factors.push(StrengthFactor {
            name: "Personal information".to_string(),
            status: FactorStatus::Bad,
            description: "Possible dates detected".to_string(),
        });
        suggestions.push("Avoid using dates or personal information".to_string());
        score -= 0.5;
    }

    let final_score = score.round().clamp(0.0, 4.0) as u8;
    let label = LABELS[final_score as usize];
    let percentage = PERCENTAGES[final_score as usize];
    let crack_time = estimate_crack_time(password, variety_count);

    if final_score < 3 {
        if length < 16 {
            suggestions.push("Consider using a longer password (16+ characters)".to_string());
        }
        if !suggestions.iter().any(|s| s.contains("variety")) {
            suggestions.push("Mix different types of characters".to_string());
        }
    }

    // Deduplicate, keeping first occurrence order.
    let mut seen = HashSet::new();
    suggestions.retain(|s| seen.insert(s.clone()));

    StrengthResult {
        score: final_score,
        label,
        percentage,
        crack_time,
        factors,
        suggestions,
    }
}

fn has_common_patterns(chars: &[char], lowered: &str) -> bool {
    has_repeated_run(chars)
        || DIGIT_RUNS.iter().any(|run| lowered.contains(run))
        || has_sequential_letters(lowered)
        || KEYBOARD_RUNS.iter().any(|run| lowered.contains(run))
}

// Same character three or more times in a row.
fn has_repeated_run(chars: &[char]) -> bool {
    chars.windows(3).any(|w| w[0] == w[1] && w[1] == w[2])
}

// Three consecutive ascending letters, case-insensitive ("abc" .. "xyz").
fn has_sequential_letters(lowered: &str) -> bool {
    let chars: Vec<char> = lowered.chars().collect();
    chars.windows(3).any(|w| {
        w.iter().all(|c| c.is_ascii_lowercase())
            && w[1] as u32 == w[0] as u32 + 1
            && w[2] as u32 == w[1] as u32 + 1
    })
}

// Word characters in the boundary sense: letters, digits, underscore.
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

// A four-digit year 1900-2099 standing on its own (not glued to other word
// characters).
fn has_year(chars: &[char]) -> bool {
    let n = chars.len();
    for i in 0..n.saturating_sub(3) {
        let w = &chars[i..i + 4];
        if !w.iter().all(|c| c.is_ascii_digit()) {
            continue;
        }
        if !((w[0] == '1' && w[1] == '9') || (w[0] == '2' && w[1] == '0')) {
            continue;
        }
        let left_ok = i == 0 || !is_word_char(chars[i - 1]);
        let right_ok = i + 4 == n || !is_word_char(chars[i + 4]);
        if left_ok && right_ok {
            return true;
        }
    }
    false
}

// Date-like token: 1-2 digits, / or -, 1-2 digits, / or -, 2-4 digits,
// delimited by word boundaries on both sides.
fn has_date_token(chars: &[char]) -> bool {
    let n = chars.len();
    for start in 0..n {
        if start > 0 && is_word_char(chars[start - 1]) {
            continue;
        }

        let mut i = start;
        let d1 = digit_run(chars, i, 2);
        if d1 == 0 {
            continue;
        }
        i += d1;
        if i >= n || !matches!(chars[i], '/' | '-') {
            continue;
        }
        i += 1;

        let d2 = digit_run(chars, i, 2);
        if d2 == 0 {
            continue;
        }
        i += d2;
        if i >= n || !matches!(chars[i], '/' | '-') {
            continue;
        }
        i += 1;

        let d3 = digit_run(chars, i, 4);
        if d3 < 2 {
            continue;
        }
        i += d3;
        if i == n || !is_word_char(chars[i]) {
            return true;
        }
    }
    false
}

fn digit_run(chars: &[char], from: usize, max: usize) -> usize {
    chars[from..]
        .iter()
        .take(max)
        .take_while(|c| c.is_ascii_digit())
        .count()
}

// Seconds per year, and the bucket boundaries derived from it.
const SECONDS_PER_YEAR: f64 = 31_536_000.0;
const GUESSES_PER_SECOND: f64 = 1e9;

const CHARSET_SIZES: [f64; 4] = [26.0, 36.0, 62.0, 94.0];

/// Human-readable brute-force estimate for a password, given how many of
/// the four character classes it uses. Average case: half the keyspace at
/// one billion guesses per second. A simplified proxy, not a breach-aware
/// estimator.
pub fn estimate_crack_time(password: &str, variety_count: usize) -> String {
    let length = password.chars().count() as f64;
    let charset_size = if variety_count == 0 || variety_count > 4 {
        26.0
    } else {
        CHARSET_SIZES[variety_count - 1]
    };

    let entropy = length * charset_size.log2();
    let mut seconds = 2f64.powf(entropy - 1.0) / GUESSES_PER_SECOND;
    if !seconds.is_finite() {
        // Keeps absurd lengths printable instead of surfacing inf.
        seconds = f64::MAX;
    }

    if seconds < 1.0 {
        return "instantly".to_string();
    }
    if seconds < 60.0 {
        return format!("{} seconds", seconds.round() as u64);
    }
    if seconds < 3600.0 {
        return format!("{} minutes", (seconds / 60.0).round() as u64);
    }
    if seconds < 86400.0 {
        return format!("{} hours", (seconds / 3600.0).round() as u64);
    }
    if seconds < SECONDS_PER_YEAR {
        return format!("{} days", (seconds / 86400.0).round() as u64);
    }
    if seconds < SECONDS_PER_YEAR * 1000.0 {
        return format!("{} years", (seconds / SECONDS_PER_YEAR).round() as u64);
    }

    let years = seconds / SECONDS_PER_YEAR;
    if years < 1e6 {
        format!("{} years", years.round() as u64)
    } else if years < 1e9 {
        format!("{} million years", (years / 1e6).round() as u64)
    } else if years < 1e12 {
        format!("{} billion years", (years / 1e9).round() as u64)
    } else {
        format!("{} trillion years", (years / 1e12).round() as u64)
    }
}
