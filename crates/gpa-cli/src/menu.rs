//! Interactive branch and semester menus.

use std::io::{BufRead, Write};

use anyhow::Context;
use gpa_core::SEMESTER_COUNT;
use gpa_core::curriculum::Subject;
use gpa_core::enums::BranchCode;
use gpa_core::session::Session;
use gpa_core::values::{ActivityPoints, Marks};

use crate::prompt::Prompter;
use crate::report::{render_branch_summary, render_semester_report};
use crate::ui::UiPrefs;

const SUMMARY_CHOICE: u32 = SEMESTER_COUNT as u32 + 1;
const BACK_CHOICE: u32 = SEMESTER_COUNT as u32 + 2;

/// Whether the user is still in the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Drives one interactive session over arbitrary input and output streams.
pub struct Driver<'c, R, W> {
    session: Session<'c>,
    prompter: Prompter<R, W>,
    prefs: UiPrefs,
}

impl<'c, R: BufRead, W: Write> Driver<'c, R, W> {
    pub const fn new(session: Session<'c>, prompter: Prompter<R, W>, prefs: UiPrefs) -> Self {
        Self {
            session,
            prompter,
            prefs,
        }
    }

    /// Run the main menu until the user exits or input ends.
    ///
    /// # Errors
    ///
    /// Fails only on terminal I/O errors or an inconsistent curriculum.
    pub fn run(&mut self) -> anyhow::Result<()> {
        if self.prefs.banner {
            self.print_banner()?;
        }

        while self.main_menu()? == Flow::Continue {}

        writeln!(self.prompter.output(), "Exiting. Goodbye!")?;
        self.prompter.output().flush()?;
        Ok(())
    }

    #[cfg(test)]
    pub const fn session(&self) -> &Session<'c> {
        &self.session
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.prompter.into_inner().1
    }

    fn print_banner(&mut self) -> anyhow::Result<()> {
        let codes = self
            .session
            .curriculum()
            .branches()
            .iter()
            .map(|branch| branch.code.as_str())
            .collect::<Vec<_>>();
        let loaded = match codes.split_last() {
            Some((last, rest)) if !rest.is_empty() => format!("{} & {last}", rest.join(", ")),
            Some((last, _)) => (*last).to_string(),
            None => String::from("no"),
        };

        let out = self.prompter.output();
        writeln!(
            out,
            "SGPA / CGPA Calculator initialized. {loaded} syllabi loaded."
        )?;
        writeln!(
            out,
            "Note: P/F subjects are asked by marks and do not affect SGPA/CGPA. Pass threshold for P/F = 50."
        )?;
        Ok(())
    }

    fn main_menu(&mut self) -> anyhow::Result<Flow> {
        let branches = self.session.curriculum().branches();
        let exit_choice = u32::try_from(branches.len() + 1)?;

        let out = self.prompter.output();
        writeln!(out)?;
        writeln!(out, "===== SGPA / CGPA Calculator =====")?;
        for (number, branch) in (1..).zip(branches) {
            writeln!(out, "  {number}. {} ({})", branch.name, branch.code)?;
        }
        writeln!(out, "  {exit_choice}. Exit")?;

        let Some(choice) = self
            .prompter
            .request_in_range("Enter choice: ", 1..=exit_choice)?
        else {
            return Ok(Flow::Exit);
        };
        if choice == exit_choice {
            return Ok(Flow::Exit);
        }

        let code = branches
            .get(usize::try_from(choice - 1)?)
            .map(|branch| branch.code)
            .context("menu choice does not name a branch")?;
        self.branch_menu(code)
    }

    fn branch_menu(&mut self, code: BranchCode) -> anyhow::Result<Flow> {
        loop {
            let branch = self.session.curriculum().branch(code)?;
            let state = self.session.branch(code)?;

            let out = self.prompter.output();
            writeln!(out)?;
            writeln!(out, "--- Branch: {} ({}) ---", branch.name, branch.code)?;
            for (spec, semester) in branch.semesters.iter().zip(&state.semesters) {
                let marker = if semester.completed { " (Completed)" } else { "" };
                writeln!(out, "  {0}. Semester {0}{marker}", spec.number)?;
            }
            writeln!(
                out,
                "  {SUMMARY_CHOICE}. Show total activity points & P/F summary"
            )?;
            writeln!(out, "  {BACK_CHOICE}. Back to Main Menu")?;

            let Some(choice) = self
                .prompter
                .request_in_range("Choice: ", 1..=BACK_CHOICE)?
            else {
                return Ok(Flow::Exit);
            };

            match choice {
                SUMMARY_CHOICE => self.print_summary(code)?,
                BACK_CHOICE => return Ok(Flow::Continue),
                semester => {
                    if self.grade_semester(code, usize::try_from(semester)?)? == Flow::Exit {
                        return Ok(Flow::Exit);
                    }
                }
            }
        }
    }

    fn grade_semester(&mut self, code: BranchCode, number: usize) -> anyhow::Result<Flow> {
        let branch = self.session.curriculum().branch(code)?;
        let semester = branch.semester(number)?;

        if semester.is_empty() {
            let out = self.prompter.output();
            writeln!(out)?;
            writeln!(out, "No subject data for semester {number} in branch {code}.")?;
            return Ok(Flow::Continue);
        }

        let out = self.prompter.output();
        writeln!(out)?;
        writeln!(
            out,
            "Entering marks for {} ({}) - Semester {number}",
            branch.name, branch.code
        )?;
        writeln!(out, "{}", "-".repeat(63))?;

        let mut marks = Vec::with_capacity(semester.subjects.len());
        for subject in &semester.subjects {
            let Some(value) = self
                .prompter
                .request_in_range(&marks_prompt(subject), Marks::MIN..=Marks::MAX)?
            else {
                return Ok(Flow::Exit);
            };
            marks.push(Marks::new(value)?);
        }

        writeln!(self.prompter.output())?;
        let Some(points) = self.prompter.request_in_range(
            "Enter activity points earned this semester (0-150): ",
            ActivityPoints::MIN..=ActivityPoints::MAX,
        )?
        else {
            return Ok(Flow::Exit);
        };
        let activity = ActivityPoints::new(points)?;

        self.session
            .record_semester(code, number, &marks, activity)
            .with_context(|| format!("failed to record {code} semester {number}"))?;
        let report = self.session.semester_report(code, number)?;

        let out = self.prompter.output();
        writeln!(out)?;
        writeln!(out)?;
        writeln!(out, "{}", render_semester_report(&report, &self.prefs))?;
        Ok(Flow::Continue)
    }

    fn print_summary(&mut self, code: BranchCode) -> anyhow::Result<()> {
        let summary = self.session.branch_summary(code)?;
        let out = self.prompter.output();
        writeln!(out)?;
        writeln!(out, "{}", render_branch_summary(&summary))?;
        Ok(())
    }
}

fn marks_prompt(subject: &Subject) -> String {
    let pass_fail = if subject.pass_fail {
        " | P/F (not in GPA)"
    } else {
        ""
    };
    format!(
        "Enter marks (0-100) for [{}] (Credits: {}{pass_fail}): ",
        subject.name, subject.credits
    )
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use gpa_core::curriculum::{Branch, Curriculum, Semester};
    use pretty_assertions::assert_eq;

    use super::*;

    fn drive<'c>(
        curriculum: &'c Curriculum,
        input: &str,
        prefs: UiPrefs,
    ) -> (Session<'c>, String) {
        let prompter = Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let mut driver = Driver::new(Session::new(curriculum), prompter, prefs);
        driver.run().expect("driver runs");

        let session = driver.session().clone();
        let output = String::from_utf8(driver.into_output()).expect("utf8 output");
        (session, output)
    }

    fn published() -> &'static Curriculum {
        gpa_curriculum::published().expect("embedded curriculum is valid")
    }

    #[test]
    fn grades_civil_first_semester_end_to_end() {
        let input = "1\n1\n\
                     abc\n90\n101\n85\n75\n65\n55\n50\n40\n49\n100\n\
                     200\n40\n\
                     9\n10\n6\n";
        let (session, output) = drive(published(), input, UiPrefs::default());

        assert!(output.starts_with("SGPA / CGPA Calculator initialized. CE, ME, EEE, ECE & CS syllabi loaded.\n"));
        assert!(output.contains("Enter marks (0-100) for [Linear Algebra and Calculus] (Credits: 4): "));
        assert!(output.contains(
            "Enter marks (0-100) for [Environmental Science (P/F)] (Credits: 0 | P/F (not in GPA)): "
        ));
        assert!(output.contains("Invalid input: 'abc' is not a whole number\n"));
        assert!(output.contains("Invalid input: 101 is outside 0-100\n"));
        assert!(output.contains("Invalid input: 200 is outside 0-150\n"));

        assert!(output.contains("ACADEMIC REPORT: Civil Engineering (CE) - SEMESTER 1"));
        assert!(output.contains("SEMESTER CREDITS (counted for GPA): 19\n"));
        assert!(output.contains("SEMESTER CREDIT-POINTS (sum): 146.00\n"));
        assert!(output.contains(">> SGPA: 7.68\n"));
        assert!(output.contains(">> CGPA: 7.68\n"));
        assert!(output.contains(">> WARNING: This semester has FAILED P/F subject(s)."));
        assert!(output.contains("FAIL (needs reappear)"));

        assert!(output.contains("  1. Semester 1 (Completed)\n"));
        assert!(output.contains("  2. Semester 2\n"));
        assert!(output.contains(">> Not satisfied. Need 110 more.\n"));
        assert!(output.contains("There are 1 failed pass/fail subject(s)."));
        assert!(output.ends_with("Exiting. Goodbye!\n"));

        let semester = session.semester(BranchCode::Ce, 1).expect("CE S1");
        assert!(semester.completed);
        assert!(semester.pass_fail_failed);
        assert_eq!(semester.activity_points.value(), 40);
        assert_eq!(session.total_activity_points(BranchCode::Ce), Ok(40));
    }

    #[test]
    fn end_of_input_mid_semester_leaves_state_untouched() {
        let (session, output) = drive(published(), "2\n3\n90\n80\n", UiPrefs::default());

        assert!(output.ends_with("Exiting. Goodbye!\n"));
        let semester = session.semester(BranchCode::Me, 3).expect("ME S3");
        assert!(!semester.completed);
        assert!(semester.subjects.iter().all(|subject| subject.marks.is_none()));
    }

    #[test]
    fn invalid_main_menu_choice_reprompts() {
        let (_, output) = drive(published(), "7\nx\n6\n", UiPrefs::default());
        assert!(output.contains("Invalid input: 7 is outside 1-6\n"));
        assert!(output.contains("Invalid input: 'x' is not a whole number\n"));
        assert_eq!(output.matches("Enter choice: ").count(), 3);
    }

    #[test]
    fn banner_can_be_suppressed() {
        let prefs = UiPrefs {
            banner: false,
            ..UiPrefs::default()
        };
        let (_, output) = drive(published(), "6\n", prefs);
        assert!(!output.contains("initialized"));
        assert!(output.starts_with("\n===== SGPA / CGPA Calculator =====\n"));
        assert!(output.contains("  5. Computer Science & Engineering (CS)\n"));
    }

    #[test]
    fn empty_semester_is_reported_and_skipped() {
        let curriculum = Curriculum {
            branches: vec![Branch {
                code: BranchCode::Ce,
                name: "Civil Engineering".to_string(),
                semesters: (1..=SEMESTER_COUNT)
                    .map(|number| Semester {
                        number,
                        subjects: if number == 2 {
                            vec![]
                        } else {
                            vec![Subject::graded("Surveying", 3)]
                        },
                    })
                    .collect(),
            }],
        };

        let (session, output) = drive(&curriculum, "1\n2\n10\n2\n", UiPrefs::default());
        assert!(output.contains("No subject data for semester 2 in branch CE.\n"));
        assert!(output.contains("  2. Exit\n"));
        assert!(!session.semester(BranchCode::Ce, 2).expect("CE S2").completed);
    }

    #[test]
    fn summary_before_any_grading() {
        let (_, output) = drive(published(), "4\n9\n10\n6\n", UiPrefs::default());
        assert!(output.contains("Total Activity Points for ECE: 0 / 150\n"));
        assert!(output.contains(">> Not satisfied. Need 150 more.\n"));
        assert!(output.contains("All pass/fail subjects passed so far.\n"));
    }
}
