pub mod table;

/// Two-decimal rendering used for every GPA and credit-point figure.
#[must_use]
pub fn two_dp(value: f64) -> String {
    format!("{value:.2}")
}

#[cfg(test)]
mod tests {
    use super::table::{TableOptions, render_entity_table};
    use super::two_dp;

    #[test]
    fn two_dp_rounds_half_up_for_typical_gpas() {
        assert_eq!(two_dp(55.0 / 7.0), "7.86");
        assert_eq!(two_dp(0.0), "0.00");
        assert_eq!(two_dp(10.0), "10.00");
    }

    #[test]
    fn table_alignment_handles_mixed_widths() {
        let headers = ["SUBJECT", "CR", "NOTES"];
        let rows = vec![
            vec!["Mechanics".to_string(), "4".to_string(), String::new()],
            vec![
                "Engineering Graphics".to_string(),
                "12".to_string(),
                "FAIL (needs reappear)".to_string(),
            ],
        ];

        let table = render_entity_table(
            &headers,
            &rows,
            TableOptions { color: false },
        );
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("SUBJECT"));
        assert!(lines[1].chars().all(|c| c == '-'));
        // numeric cells are right-aligned within their column
        assert!(lines[2].ends_with("     4"));
        assert!(lines[3].contains("    12  FAIL"));
    }
}
