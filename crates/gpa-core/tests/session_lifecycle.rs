//! Session state transitions: grading, re-grading, CGPA and branch totals.

use gpa_core::curriculum::{Branch, Curriculum, Semester, Subject};
use gpa_core::enums::{BranchCode, GradePoint};
use gpa_core::errors::CoreError;
use gpa_core::session::Session;
use gpa_core::values::{ActivityPoints, Marks};
use gpa_core::SEMESTER_COUNT;
use pretty_assertions::assert_eq;

/// Semester 1: one 20-credit subject. Semester 2: one 22-credit subject plus a
/// pass/fail subject. Semester 3: pass/fail only. Semester 4: no subjects.
fn curriculum() -> Curriculum {
    let semesters = (1..=SEMESTER_COUNT)
        .map(|number| Semester {
            number,
            subjects: match number {
                1 => vec![Subject::graded("Structures", 20)],
                2 => vec![
                    Subject::graded("Hydraulics", 22),
                    Subject::pass_fail("Professional Communication (P/F)"),
                ],
                3 => vec![Subject::pass_fail("Environmental Science (P/F)")],
                4 => Vec::new(),
                _ => vec![
                    Subject::graded("Elective", 3),
                    Subject::graded("Lab", 1),
                ],
            },
        })
        .collect();

    Curriculum {
        branches: vec![Branch {
            code: BranchCode::Ce,
            name: "Civil Engineering".to_string(),
            semesters,
        }],
    }
}

fn marks(values: &[u32]) -> Vec<Marks> {
    values
        .iter()
        .map(|value| Marks::new(*value).expect("test marks are in range"))
        .collect()
}

fn activity(value: u32) -> ActivityPoints {
    ActivityPoints::new(value).expect("test activity points are in range")
}

fn approx_eq(left: f64, right: f64) -> bool {
    (left - right).abs() < 1e-9
}

#[test]
fn fresh_session_is_empty() {
    let curriculum = curriculum();
    let session = Session::new(&curriculum);

    let semester = session.semester(BranchCode::Ce, 2).expect("semester exists");
    assert!(!semester.completed);
    assert_eq!(semester.subjects[0].marks, None);
    assert_eq!(semester.subjects[0].grade, GradePoint::Ungraded);
    assert_eq!(semester.subjects[1].grade, GradePoint::PassFailPending);
    assert_eq!(session.total_activity_points(BranchCode::Ce), Ok(0));
    assert_eq!(session.pass_fail_failures(BranchCode::Ce), Ok(0));
}

#[test]
fn grading_first_semester_sets_sgpa_and_cgpa() {
    let curriculum = curriculum();
    let mut session = Session::new(&curriculum);

    let semester = session
        .record_semester(BranchCode::Ce, 1, &marks(&[75]), activity(40))
        .expect("semester records");
    assert!(semester.completed);
    assert!(approx_eq(semester.sgpa, 8.0));

    let branch = session.branch(BranchCode::Ce).expect("branch exists");
    assert!(approx_eq(branch.cgpa, 8.0));
}

#[test]
fn cgpa_is_credit_weighted_across_completed_semesters() {
    let curriculum = curriculum();
    let mut session = Session::new(&curriculum);

    session
        .record_semester(BranchCode::Ce, 1, &marks(&[75]), activity(0))
        .expect("semester 1 records");
    session
        .record_semester(BranchCode::Ce, 2, &marks(&[65, 80]), activity(0))
        .expect("semester 2 records");

    let branch = session.branch(BranchCode::Ce).expect("branch exists");
    assert!(approx_eq(branch.cgpa, (8.0 * 20.0 + 7.0 * 22.0) / 42.0));
}

#[test]
fn regrading_uses_only_latest_values() {
    let curriculum = curriculum();
    let mut session = Session::new(&curriculum);

    session
        .record_semester(BranchCode::Ce, 1, &marks(&[75]), activity(60))
        .expect("first attempt records");
    session
        .record_semester(BranchCode::Ce, 2, &marks(&[65, 80]), activity(30))
        .expect("semester 2 records");
    session
        .record_semester(BranchCode::Ce, 1, &marks(&[95]), activity(10))
        .expect("second attempt records");

    let semester = session.semester(BranchCode::Ce, 1).expect("semester exists");
    assert!(semester.completed);
    assert!(approx_eq(semester.sgpa, 10.0));

    let branch = session.branch(BranchCode::Ce).expect("branch exists");
    assert!(approx_eq(branch.cgpa, (10.0 * 20.0 + 7.0 * 22.0) / 42.0));
    assert_eq!(branch.total_activity_points(), 40);
}

#[test]
fn activity_total_sums_all_semesters() {
    let curriculum = curriculum();
    let mut session = Session::new(&curriculum);

    session
        .record_semester(BranchCode::Ce, 1, &marks(&[75]), activity(40))
        .expect("semester 1 records");
    session
        .record_semester(BranchCode::Ce, 5, &marks(&[70, 70]), activity(150))
        .expect("semester 5 records");

    assert_eq!(session.total_activity_points(BranchCode::Ce), Ok(190));

    let summary = session.branch_summary(BranchCode::Ce).expect("summary builds");
    assert_eq!(summary.completed_semesters, vec![1, 5]);
    assert_eq!(summary.activity_shortfall, 0);
    assert!(summary.activity_requirement_met());
}

#[test]
fn pass_fail_failure_sets_and_clears_flag() {
    let curriculum = curriculum();
    let mut session = Session::new(&curriculum);

    let semester = session
        .record_semester(BranchCode::Ce, 2, &marks(&[65, 49]), activity(0))
        .expect("failing attempt records");
    assert!(semester.pass_fail_failed);
    assert_eq!(semester.subjects[1].grade, GradePoint::PassFailFail);
    assert_eq!(session.pass_fail_failures(BranchCode::Ce), Ok(1));

    session
        .record_semester(BranchCode::Ce, 3, &marks(&[10]), activity(0))
        .expect("second failure records");
    assert_eq!(session.pass_fail_failures(BranchCode::Ce), Ok(2));

    let semester = session
        .record_semester(BranchCode::Ce, 2, &marks(&[65, 60]), activity(0))
        .expect("passing attempt records");
    assert!(!semester.pass_fail_failed);
    assert_eq!(semester.subjects[1].grade, GradePoint::PassFailPass);
    assert_eq!(session.pass_fail_failures(BranchCode::Ce), Ok(1));
}

#[test]
fn pass_fail_only_semester_has_zero_sgpa_and_keeps_cgpa() {
    let curriculum = curriculum();
    let mut session = Session::new(&curriculum);

    session
        .record_semester(BranchCode::Ce, 1, &marks(&[75]), activity(0))
        .expect("semester 1 records");
    let semester = session
        .record_semester(BranchCode::Ce, 3, &marks(&[90]), activity(0))
        .expect("semester 3 records");
    assert!(approx_eq(semester.sgpa, 0.0));

    let branch = session.branch(BranchCode::Ce).expect("branch exists");
    assert!(approx_eq(branch.cgpa, 8.0));
}

#[test]
fn pass_fail_only_first_semester_falls_back_to_its_sgpa() {
    let curriculum = curriculum();
    let mut session = Session::new(&curriculum);

    session
        .record_semester(BranchCode::Ce, 3, &marks(&[90]), activity(0))
        .expect("semester 3 records");

    let branch = session.branch(BranchCode::Ce).expect("branch exists");
    assert!(approx_eq(branch.cgpa, 0.0));
}

#[test]
fn empty_semester_is_refused() {
    let curriculum = curriculum();
    let mut session = Session::new(&curriculum);

    let err = session
        .record_semester(BranchCode::Ce, 4, &[], activity(10))
        .expect_err("semester 4 has no subjects");
    assert_eq!(
        err,
        CoreError::EmptySemester {
            branch: BranchCode::Ce,
            semester: 4,
        }
    );
    assert_eq!(session.total_activity_points(BranchCode::Ce), Ok(0));
}

#[test]
fn mismatched_mark_count_leaves_state_untouched() {
    let curriculum = curriculum();
    let mut session = Session::new(&curriculum);

    let err = session
        .record_semester(BranchCode::Ce, 2, &marks(&[65]), activity(10))
        .expect_err("semester 2 has two subjects");
    assert_eq!(
        err,
        CoreError::SubjectCountMismatch {
            branch: BranchCode::Ce,
            semester: 2,
            expected: 2,
            actual: 1,
        }
    );

    let semester = session.semester(BranchCode::Ce, 2).expect("semester exists");
    assert!(!semester.completed);
    assert_eq!(semester.activity_points.value(), 0);
}

#[test]
fn unknown_branch_and_semester_are_errors() {
    let curriculum = curriculum();
    let mut session = Session::new(&curriculum);

    assert_eq!(
        session.branch(BranchCode::Cs).err(),
        Some(CoreError::UnknownBranch("CS".to_string()))
    );
    assert_eq!(
        session
            .record_semester(BranchCode::Ce, 9, &[], activity(0))
            .err(),
        Some(CoreError::SemesterOutOfRange { number: 9, max: 8 })
    );
}

#[test]
fn semester_report_carries_computed_figures() {
    let curriculum = curriculum();
    let mut session = Session::new(&curriculum);

    session
        .record_semester(BranchCode::Ce, 2, &marks(&[40, 30]), activity(25))
        .expect("semester 2 records");

    let report = session
        .semester_report(BranchCode::Ce, 2)
        .expect("report builds");
    assert_eq!(report.branch_name, "Civil Engineering");
    assert_eq!(report.semester, 2);
    assert_eq!(report.gpa_credits, 22);
    assert_eq!(report.credit_points, 0);
    assert_eq!(report.lines.len(), 2);
    assert_eq!(report.lines[0].note.as_str(), "FAIL (needs reappear)");
    assert_eq!(report.lines[1].note.as_str(), "PASS/FAIL: fail (reappear)");
    assert_eq!(report.total_activity_points, 25);
    assert_eq!(report.activity_required, 150);
    assert!(report.pass_fail_failed);
}
