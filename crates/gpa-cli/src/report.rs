//! Plain-text rendering of semester reports and branch totals.

use std::fmt::Write as _;

use gpa_core::reports::{BranchSummary, SemesterReport, SubjectLine};

use crate::output::table::{TableOptions, render_entity_table, truncate_text};
use crate::output::two_dp;
use crate::ui::UiPrefs;

const RULE_WIDTH: usize = 60;
const HEADERS: [&str; 5] = ["SUBJECT", "CR", "MARKS", "GP", "NOTES"];

/// Render the report printed after a semester has been graded.
#[must_use]
pub fn render_semester_report(report: &SemesterReport, prefs: &UiPrefs) -> String {
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);

    let rows = report
        .lines
        .iter()
        .map(|line| subject_row(line, prefs.name_width))
        .collect::<Vec<_>>();
    let table = render_entity_table(
        &HEADERS,
        &rows,
        TableOptions {
            color: prefs.table_color,
        },
    );

    let mut out = String::new();
    let _ = writeln!(out, "{heavy}");
    let _ = writeln!(
        out,
        "   ACADEMIC REPORT: {} ({}) - SEMESTER {}",
        report.branch_name, report.branch_code, report.semester
    );
    let _ = writeln!(out, "{heavy}");
    let _ = writeln!(out, "{table}");
    let _ = writeln!(out, "{light}");
    let _ = writeln!(
        out,
        "SEMESTER CREDITS (counted for GPA): {}",
        report.gpa_credits
    );
    let _ = writeln!(
        out,
        "SEMESTER CREDIT-POINTS (sum): {}",
        two_dp(f64::from(report.credit_points))
    );
    let _ = writeln!(out, ">> SGPA: {}", two_dp(report.sgpa));
    let _ = writeln!(out, ">> CGPA: {}", two_dp(report.cgpa));
    let _ = writeln!(
        out,
        ">> Activity Points (this sem): {}",
        report.activity_points
    );
    let _ = writeln!(
        out,
        ">> Total Activity Points (so far): {} / {} required",
        report.total_activity_points, report.activity_required
    );
    if report.pass_fail_failed {
        let _ = writeln!(
            out,
            ">> WARNING: This semester has FAILED P/F subject(s). Clear them to be eligible for degree."
        );
    } else {
        let _ = writeln!(
            out,
            ">> P/F Subjects: All passed (or none present) in this semester."
        );
    }
    out.push_str(&heavy);
    out
}

fn subject_row(line: &SubjectLine, name_width: usize) -> Vec<String> {
    vec![
        truncate_text(&line.name, name_width),
        line.credits.to_string(),
        line.marks.map_or(0, u32::from).to_string(),
        line.grade
            .points()
            .map_or_else(|| "-".to_string(), |points| points.to_string()),
        line.note.as_str().to_string(),
    ]
}

/// Render the activity-point total and the pass/fail tally of a branch.
#[must_use]
pub fn render_branch_summary(summary: &BranchSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Total Activity Points for {}: {} / {}",
        summary.branch_code, summary.total_activity_points, summary.activity_required
    );
    if summary.activity_requirement_met() {
        let _ = writeln!(out, ">> Activity requirement satisfied.");
    } else {
        let _ = writeln!(
            out,
            ">> Not satisfied. Need {} more.",
            summary.activity_shortfall
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "--- P/F SUMMARY for {} ({}) ---",
        summary.branch_name, summary.branch_code
    );
    match summary.pass_fail_failures {
        0 => out.push_str("All pass/fail subjects passed so far."),
        failures => {
            let _ = write!(
                out,
                "There are {failures} failed pass/fail subject(s). You must clear them to be eligible for the degree."
            );
        }
    }
    out
}
