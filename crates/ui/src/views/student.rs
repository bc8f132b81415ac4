use dioxus::prelude::*;
use progression_core::CreditTuple;
use services::{SingleSubmission, SubmissionPhase};

use crate::components::CreditForm;
use crate::context::AppContext;

#[component]
pub fn StudentView() -> Element {
    let ctx = use_context::<AppContext>();
    let progression = ctx.progression();
    let submission = use_signal(SingleSubmission::new);

    let submit = use_callback(move |credits: CreditTuple| {
        let mut submission = submission;
        // Rejected while a request is outstanding.
        let Ok(pending) = submission.write().begin(credits) else {
            return;
        };
        let progression = progression.clone();
        spawn(async move {
            let result = progression.calculate(pending.credits()).await;
            submission.write().complete(pending, result);
        });
    });

    #[cfg(test)]
    super::submit_handles::use_submit_test_handles(submit);

    let dismiss = use_callback(move |()| {
        let mut submission = submission;
        submission.write().dismiss();
    });

    let phase = submission.read().phase().clone();
    let is_submitting = phase.is_submitting();

    rsx! {
        div { class: "page student-page",
            header { class: "view-header",
                h1 { class: "view-title", "Student Portal" }
                p { class: "view-subtitle", "Enter your credits to see your progression outcome." }
            }
            CreditForm {
                is_submitting,
                on_submit: submit,
            }
            div { class: "result-slot",
                match phase {
                    SubmissionPhase::Succeeded(outcome) => rsx! {
                        div { class: "result result--success",
                            h2 { "Outcome: {outcome}" }
                            DismissButton { on_dismiss: dismiss }
                        }
                    },
                    SubmissionPhase::Failed(message) => rsx! {
                        div { class: "result result--error",
                            h2 { "Error: {message}" }
                            DismissButton { on_dismiss: dismiss }
                        }
                    },
                    SubmissionPhase::Idle | SubmissionPhase::Submitting => rsx! {},
                }
            }
        }
    }
}

#[component]
fn DismissButton(on_dismiss: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "result__dismiss",
            r#type: "button",
            title: "Dismiss",
            onclick: move |_| on_dismiss.call(()),
            "×"
        }
    }
}
