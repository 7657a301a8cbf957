use rpawotool::passcheck::*;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_empty_password() {
        let report = check_password_strength("");
        assert_eq!(report.score, 0);
        assert_eq!(report.label, "No password");
        assert_eq!(report.percentage, 0);
        assert_eq!(report.crack_time, "instantly");
        assert!(report.factors.is_empty());
        assert_eq!(report.suggestions.len(), 1);
    }

    #[test]
    fn test_dictionary_word_scores_low() {
        let report = check_password_strength("password");
        assert!(report.score <= 1);

        let dict = report
            .factors
            .iter()
            .find(|f| f.name == "Dictionary words")
            .unwrap();
        assert_eq!(dict.status, FactorStatus::Bad);
        assert!(
            report
                .suggestions
                .iter()
                .any(|s| s == "Avoid using common dictionary words")
        );
    }

    #[test]
    fn test_strong_password() {
        // 15 characters, all four classes, no patterns, dictionary words or
        // dates. 1 + 1 + 0.5 + 0.5 is the pipeline's ceiling, so this is as
        // strong as a password can measure.
        let report = check_password_strength("Tr0ub4dor&3vb!m");
        assert_eq!(report.score, 3);
        assert_eq!(report.label, "Strong");
        assert_eq!(report.percentage, 75);
        assert_eq!(report.factors.len(), 4);
        assert!(
            report
                .factors
                .iter()
                .all(|f| f.status == FactorStatus::Good)
        );
    }

    #[test]
    fn test_factor_order_with_personal_info() {
        let report = check_password_strength("Summer-1990");
        let names: Vec<&str> = report.factors.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "Length (11 characters)",
                "Character variety",
                "Common patterns",
                "Dictionary words",
                "Personal information",
            ]
        );
        // 0 + 1 + 0.5 + 0.5 - 0.5 rounds to 2.
        assert_eq!(report.score, 2);
        assert_eq!(report.label, "Fair");
        assert_eq!(report.percentage, 50);
    }

    #[test]
    fn test_date_token_detected() {
        let report = check_password_strength("x!12/31/99");
        assert!(
            report
                .factors
                .iter()
                .any(|f| f.name == "Personal information")
        );
    }

    #[test]
    fn test_year_glued_to_letters_is_not_flagged() {
        let report = check_password_strength("xG7!word1990");
        assert!(
            !report
                .factors
                .iter()
                .any(|f| f.name == "Personal information")
        );
    }

    #[test]
    fn test_pattern_detection() {
        // Repeated run, keyboard run, ascending letters.
        for pwd in ["aaa111x", "qwertyX9", "xAbc9!t"] {
            let report = check_password_strength(pwd);
            let patterns = report
                .factors
                .iter()
                .find(|f| f.name == "Common patterns")
                .unwrap();
            assert_eq!(patterns.status, FactorStatus::Bad, "password: {}", pwd);
        }

        let clean = check_password_strength("Tr0ub4dor&");
        let patterns = clean
            .factors
            .iter()
            .find(|f| f.name == "Common patterns")
            .unwrap();
        assert_eq!(patterns.status, FactorStatus::Good);
    }

    #[test]
    fn test_weak_password_gets_general_suggestions() {
        let report = check_password_strength("abcdefg");
        assert!(
            report
                .suggestions
                .iter()
                .any(|s| s == "Consider using a longer password (16+ characters)")
        );
        assert!(
            report
                .suggestions
                .iter()
                .any(|s| s == "Mix different types of characters")
        );
    }

    #[test]
    fn test_suggestions_are_deduplicated() {
        for pwd in ["abc", "password123", "Summer-1990"] {
            let report = check_password_strength(pwd);
            let mut seen = HashSet::new();
            assert!(report.suggestions.iter().all(|s| seen.insert(s.clone())));
        }
    }

    #[test]
    fn test_crack_time_buckets() {
        assert_eq!(estimate_crack_time("abc", 1), "instantly");
        assert_eq!(estimate_crack_time("abcdefgh", 1), "2 minutes");
        assert!(estimate_crack_time("abcdefghij", 3).ends_with("years"));
    }

    // Splits a crack-time string into (bucket, value) so estimates can be
    // compared. Buckets are ordered from instantly up to trillions of years.
    fn bucket_rank(estimate: &str) -> (usize, u64) {
        if estimate == "instantly" {
            return (0, 0);
        }
        let (value, unit) = estimate.split_once(' ').unwrap();
        let value: u64 = value.parse().unwrap();
        let order = match unit {
            "seconds" => 1,
            "minutes" => 2,
            "hours" => 3,
            "days" => 4,
            "years" => 5,
            "million years" => 6,
            "billion years" => 7,
            "trillion years" => 8,
            other => panic!("unknown unit: {}", other),
        };
        (order, value)
    }

    #[test]
    fn test_crack_time_monotonic_in_length() {
        let mut prev = (0, 0);
        let mut pwd = String::new();
        for _ in 0..40 {
            pwd.push('a');
            let rank = bucket_rank(&estimate_crack_time(&pwd, 1));
            assert!(rank >= prev, "length {}", pwd.chars().count());
            prev = rank;
        }
    }

    #[test]
    fn test_crack_time_monotonic_in_variety() {
        let fixed = "abcdefghijkl";
        let mut prev = (0, 0);
        for variety in 1..=4 {
            let rank = bucket_rank(&estimate_crack_time(fixed, variety));
            assert!(rank >= prev, "variety {}", variety);
            prev = rank;
        }
    }

    #[test]
    fn test_crack_time_out_of_range_variety_falls_back() {
        assert_eq!(
            estimate_crack_time("abcdefgh", 0),
            estimate_crack_time("abcdefgh", 1)
        );
    }

    #[test]
    fn test_json_report_shape() {
        let report = check_password_strength("Summer-1990");
        let json = serde_json::to_string(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert!(value.get("crackTime").is_some());
        assert_eq!(value["percentage"], 50);
        assert_eq!(value["factors"][4]["status"], "bad");
    }
}
