use dioxus::prelude::*;
use progression_core::{Credit, CreditField, CreditTuple};

/// Three credit selectors plus the submit button.
///
/// Only values from `Credit::ALL` can be selected, so the emitted tuple is always valid.
#[component]
pub fn CreditForm(is_submitting: bool, on_submit: EventHandler<CreditTuple>) -> Element {
    let credits = use_signal(CreditTuple::default);
    let current = credits();

    rsx! {
        div { class: "credit-form",
            div { class: "credit-form__fields",
                for field in CreditField::ALL {
                    CreditSelect {
                        key: "{field.key()}",
                        field,
                        value: current.get(field),
                        on_change: move |credit: Credit| {
                            let mut credits = credits;
                            let next = credits().with(field, credit);
                            credits.set(next);
                        },
                    }
                }
            }
            div { class: "credit-form__actions",
                button {
                    class: "button button-primary",
                    r#type: "button",
                    disabled: is_submitting,
                    onclick: move |_| on_submit.call(credits()),
                    if is_submitting {
                        "Calculating..."
                    } else {
                        "Calculate Progression"
                    }
                }
            }
        }
    }
}

#[component]
fn CreditSelect(field: CreditField, value: Credit, on_change: EventHandler<Credit>) -> Element {
    rsx! {
        label { class: "credit-form__field",
            span { class: "credit-form__label", "{field.label()}" }
            select {
                class: "credit-form__select",
                id: "{field.key()}",
                name: "{field.key()}",
                value: "{value}",
                onchange: move |evt| {
                    if let Ok(credit) = evt.value().parse::<Credit>() {
                        on_change.call(credit);
                    }
                },
                for choice in Credit::ALL {
                    option {
                        key: "{choice}",
                        value: "{choice}",
                        selected: choice == value,
                        "{choice}"
                    }
                }
            }
        }
    }
}
