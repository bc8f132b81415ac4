use progression_core::{CreditTuple, Outcome, OutcomeRecord};
use services::CalculationError;

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_replies};

fn tuple(pass: u16, defer: u16, fail: u16) -> CreditTuple {
    CreditTuple::from_values(pass, defer, fail).unwrap()
}

fn record(pass: u16, defer: u16, fail: u16, outcome: &str) -> OutcomeRecord {
    OutcomeRecord::new(tuple(pass, defer, fail), Outcome::new(outcome))
}

fn render(view: ViewKind) -> String {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut harness = setup_view_harness(view, dir.path());
    harness.rebuild();
    harness.render()
}

#[tokio::test(flavor = "current_thread")]
async fn landing_view_smoke_offers_both_roles() {
    let html = render(ViewKind::Landing);
    assert!(html.contains("University Progression Calculator"), "missing title in {html}");
    assert!(html.contains("Student"), "missing student card in {html}");
    assert!(html.contains("Staff"), "missing staff card in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn student_view_smoke_renders_idle_form() {
    let html = render(ViewKind::Student);
    assert!(html.contains("Student Portal"), "missing title in {html}");
    assert!(html.contains("Calculate Progression"), "missing submit in {html}");
    assert!(!html.contains("Outcome:"), "unexpected outcome in {html}");
    assert!(!html.contains("Error:"), "unexpected error in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn staff_view_smoke_starts_empty() {
    let html = render(ViewKind::Staff);
    assert!(html.contains("Staff Portal"), "missing title in {html}");
    assert!(html.contains("Progression Records (0)"), "missing count in {html}");
    assert!(html.contains("No records added yet."), "missing empty state in {html}");
    assert!(!html.contains("Generate Report"), "report offered too early in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn credit_form_smoke_lists_allowed_values() {
    let html = render(ViewKind::CreditForm { is_submitting: false });
    for label in ["Pass Credits", "Defer Credits", "Fail Credits"] {
        assert!(html.contains(label), "missing {label} in {html}");
    }
    for value in ["0", "20", "40", "60", "80", "100", "120"] {
        let option = format!("value=\"{value}\"");
        assert!(html.contains(&option), "missing option {value} in {html}");
    }
    assert_eq!(html.matches("<option").count(), 21, "unexpected options in {html}");
    assert!(html.contains("Calculate Progression"), "missing submit in {html}");
    assert!(!html.contains("disabled"), "submit disabled while idle in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn credit_form_smoke_disables_submit_while_pending() {
    let html = render(ViewKind::CreditForm { is_submitting: true });
    assert!(html.contains("Calculating..."), "missing pending label in {html}");
    assert!(!html.contains("Calculate Progression"), "stale label in {html}");
    assert!(html.contains("disabled"), "submit still enabled in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn student_view_smoke_replaces_outcome_with_later_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut harness = setup_view_harness_with_replies(
        ViewKind::Student,
        dir.path(),
        vec![
            Ok(Outcome::new("Progress")),
            Err(CalculationError::rejected("Total incorrect")),
        ],
    );
    harness.rebuild();

    harness.submit(tuple(120, 0, 0)).await;
    let html = harness.render();
    assert!(html.contains("Outcome: Progress"), "missing outcome in {html}");
    assert!(html.contains("result__dismiss"), "missing dismiss in {html}");
    assert!(!html.contains("Error:"), "unexpected error in {html}");

    harness.submit(tuple(100, 0, 0)).await;
    let html = harness.render();
    assert!(html.contains("Error: Total incorrect"), "missing error in {html}");
    assert!(html.contains("result__dismiss"), "missing dismiss on error in {html}");
    assert!(!html.contains("Outcome:"), "stale outcome in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn student_view_smoke_clears_error_after_success() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut harness = setup_view_harness_with_replies(
        ViewKind::Student,
        dir.path(),
        vec![
            Err(CalculationError::Unreachable),
            Ok(Outcome::new("Module retriever")),
        ],
    );
    harness.rebuild();

    harness.submit(tuple(40, 40, 40)).await;
    let html = harness.render();
    assert!(html.contains("Is the backend server running?"), "missing error in {html}");
    assert!(html.contains("Calculate Progression"), "form stuck pending in {html}");

    harness.submit(tuple(40, 40, 40)).await;
    let html = harness.render();
    assert!(html.contains("Outcome: Module retriever"), "missing outcome in {html}");
    assert!(!html.contains("Error:"), "stale error in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn staff_view_smoke_lists_records_and_offers_report() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut harness = setup_view_harness_with_replies(
        ViewKind::Staff,
        dir.path(),
        vec![
            Ok(Outcome::new("Progress")),
            Ok(Outcome::new("Exclude")),
            Err(CalculationError::rejected("Total incorrect")),
        ],
    );
    harness.rebuild();

    harness.submit(tuple(120, 0, 0)).await;
    harness.submit(tuple(0, 0, 120)).await;
    let html = harness.render();
    assert!(html.contains("Successfully added outcome"), "missing confirmation in {html}");
    assert!(html.contains("Progression Records (2)"), "missing count in {html}");
    assert!(html.contains("120, 0, 0"), "missing first row in {html}");
    assert!(html.contains("0, 0, 120"), "missing second row in {html}");
    assert!(html.contains("Generate Report"), "missing report button in {html}");
    assert!(!html.contains("No records added yet."), "stale empty state in {html}");

    harness.submit(tuple(100, 0, 0)).await;
    let html = harness.render();
    assert!(html.contains("Error: Total incorrect"), "missing error in {html}");
    assert!(!html.contains("Successfully added outcome"), "stale confirmation in {html}");
    assert!(html.contains("Progression Records (2)"), "failure was recorded in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn report_panel_smoke_renders_histograms() {
    let html = render(ViewKind::Report(vec![
        record(120, 0, 0, "Progress"),
        record(20, 40, 60, "Exclude"),
        record(100, 20, 0, "Progress"),
        record(0, 0, 120, "Exclude"),
    ]));
    assert!(html.contains("Progression Report"), "missing title in {html}");
    assert!(html.contains("Download Report"), "missing download in {html}");
    assert!(html.contains("Horizontal Histogram"), "missing horizontal in {html}");
    assert!(html.contains("Vertical Histogram"), "missing vertical in {html}");
    assert!(html.contains("width: 50.0%"), "missing share of total in {html}");
    assert!(html.contains("height: 100.0%"), "missing share of max in {html}");
    assert!(html.contains("Excluded"), "missing short label in {html}");
    assert!(html.contains("4 outcomes in total."), "missing total in {html}");
}
