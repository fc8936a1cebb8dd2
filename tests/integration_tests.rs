use gpa_calculator::calculator::utility::round_to;
use gpa_calculator::calculator::{CourseEntry, Grade, PriorRecord, calculate};
use gpa_calculator::config::UnknownGradePolicy;
use gpa_calculator::error::GpaError;
use gpa_calculator::locale::Locale;
use gpa_calculator::output::{GpaRecord, render_result};
use gpa_calculator::parser::{load_courses, parse_course_arg};
use gpa_calculator::session::CourseList;

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

#[test]
fn test_full_pipeline() {
    let rows = load_courses(&fixture("courses.csv")).expect("Failed to load courses");
    assert_eq!(rows.len(), 3);

    let mut list = CourseList::from_rows(rows);
    list.set_prior("3.0", "30");

    let result = list.calculate(UnknownGradePolicy::Reject).unwrap();
    assert_eq!(result.semester_hours, 5.0);
    assert_eq!(result.cumulative_hours, 35.0);

    let record = GpaRecord::from_result(&result, 2);
    assert_eq!(record.semester_gpa, 3.2);
    assert_eq!(record.cumulative_gpa, 3.03);

    let text = render_result(&result, Locale::En, 2);
    assert!(text.contains("Semester GPA: 3.20"));
    assert!(text.contains("Cumulative GPA: 3.03"));
}

#[test]
fn test_unknown_grade_from_file() {
    let rows = load_courses(&fixture("courses_unknown_grade.csv")).unwrap();
    let list = CourseList::from_rows(rows);

    assert_eq!(list.invalid_rows(), vec![1]);
    assert_eq!(
        list.calculate(UnknownGradePolicy::Reject),
        Err(GpaError::InvalidGrade("E".to_string()))
    );
    assert_eq!(
        list.calculate(UnknownGradePolicy::Skip).unwrap().semester_gpa,
        4.0
    );
    assert_eq!(
        list.calculate(UnknownGradePolicy::Zero).unwrap().semester_gpa,
        2.0
    );
}

#[test]
fn test_command_line_courses_match_library_call() {
    let mut list = CourseList::new();
    for arg in ["A:3", "c:2"] {
        list.add(parse_course_arg(arg).unwrap());
    }
    let from_rows = list.calculate(UnknownGradePolicy::Reject).unwrap();

    let direct = calculate(
        &[CourseEntry::new(Grade::A, 3.0), CourseEntry::new(Grade::C, 2.0)],
        None,
    )
    .unwrap();

    assert_eq!(from_rows, direct);
    assert_eq!(round_to(direct.semester_gpa, 2), 3.2);
}

#[test]
fn test_out_of_range_prior_regardless_of_entries() {
    let prior = Some(PriorRecord::new(4.5, 30.0));
    assert_eq!(calculate(&[], prior), Err(GpaError::OutOfRangeGpa(4.5)));

    let mut list = CourseList::new();
    list.add(parse_course_arg("A:3").unwrap());
    list.set_prior("4.5", "30");
    assert_eq!(
        list.calculate(UnknownGradePolicy::Reject),
        Err(GpaError::OutOfRangeGpa(4.5))
    );
}

#[test]
fn test_cleared_list_is_no_data() {
    let mut list = CourseList::new();
    list.add(parse_course_arg("B+:3").unwrap());
    list.set_prior("3.0", "30");
    list.clear();
    assert_eq!(
        list.calculate(UnknownGradePolicy::Reject),
        Err(GpaError::NoData)
    );
}

#[test]
fn test_unknown_grade_with_empty_hours_blocks_calculation() {
    let rows = vec![
        parse_course_arg("A:3").unwrap(),
        parse_course_arg("E:").unwrap(),
    ];
    let list = CourseList::from_rows(rows);

    assert_eq!(
        list.calculate(UnknownGradePolicy::Reject),
        Err(GpaError::InvalidGrade("E".to_string()))
    );
    assert_eq!(
        list.blocking_problems(UnknownGradePolicy::Reject),
        vec![(1, GpaError::InvalidGrade("E".to_string()))]
    );
}

#[test]
fn test_refusal_under_skip_reports_bad_hours() {
    let list = CourseList::from_rows(vec![parse_course_arg("E:abc").unwrap()]);

    let err = list.calculate(UnknownGradePolicy::Skip).unwrap_err();
    assert_eq!(err, GpaError::InvalidHours("abc".to_string()));

    let problems = list.blocking_problems(UnknownGradePolicy::Skip);
    assert_eq!(problems, vec![(0, err)]);
    assert_eq!(
        Locale::En.error_message(&problems[0].1),
        "'abc' is not a valid number of hours"
    );
}
