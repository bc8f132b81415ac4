use dioxus::prelude::*;
use progression_core::CreditTuple;
use services::{BatchSession, SubmissionPhase};

use crate::components::{CreditForm, ReportPanel};
use crate::context::AppContext;
use crate::vm::{RecordRowVm, map_record_rows};

#[component]
pub fn StaffView() -> Element {
    let ctx = use_context::<AppContext>();
    let progression = ctx.progression();
    let batch = use_signal(BatchSession::new);
    let mut show_report = use_signal(|| false);

    let submit = use_callback(move |credits: CreditTuple| {
        let mut batch = batch;
        let Ok(pending) = batch.write().begin(credits) else {
            return;
        };
        let progression = progression.clone();
        spawn(async move {
            let result = progression.calculate(pending.credits()).await;
            batch.write().complete(pending, result);
        });
    });

    #[cfg(test)]
    super::submit_handles::use_submit_test_handles(submit);

    let (phase, records) = {
        let batch = batch.read();
        (batch.phase().clone(), batch.records().to_vec())
    };
    let is_submitting = phase.is_submitting();
    let rows = map_record_rows(&records);
    let record_count = rows.len();

    rsx! {
        div { class: "page staff-page",
            header { class: "view-header",
                h1 { class: "view-title", "Staff Portal" }
                p { class: "view-subtitle", "Enter student credits to build a progression report." }
            }
            div { class: "staff-grid",
                div { class: "staff-entry",
                    CreditForm {
                        is_submitting,
                        on_submit: submit,
                    }
                    div { class: "result-slot",
                        match phase {
                            SubmissionPhase::Succeeded(outcome) => rsx! {
                                p { class: "result result--success",
                                    "✓ Successfully added outcome: "
                                    strong { "{outcome}" }
                                }
                            },
                            SubmissionPhase::Failed(message) => rsx! {
                                p { class: "result result--error", "Error: {message}" }
                            },
                            SubmissionPhase::Idle | SubmissionPhase::Submitting => rsx! {},
                        }
                    }
                }
                RecordList { rows }
            }
            if record_count > 0 {
                div { class: "report-slot",
                    if show_report() {
                        ReportPanel { records }
                    } else {
                        button {
                            class: "button button-primary",
                            r#type: "button",
                            onclick: move |_| show_report.set(true),
                            "Generate Report"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn RecordList(rows: Vec<RecordRowVm>) -> Element {
    rsx! {
        section { class: "record-list",
            h2 { "Progression Records ({rows.len()})" }
            if rows.is_empty() {
                p { class: "record-list__empty", "No records added yet." }
            } else {
                ul {
                    for (idx, row) in rows.iter().enumerate() {
                        li { key: "{idx}", class: "record-list__item",
                            span { class: "record-list__credits", "{row.credits_label}" }
                            span { class: "record-list__outcome", "{row.outcome}" }
                        }
                    }
                }
            }
        }
    }
}
