use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;

#[component]
pub fn LandingView() -> Element {
    rsx! {
        div { class: "page landing-page",
            header { class: "view-header",
                h1 { class: "view-title", "University Progression Calculator" }
                p { class: "view-subtitle", "Please select your role to continue" }
            }
            div { class: "role-cards",
                Link { class: "role-card role-card--student", to: Route::Student {},
                    h2 { "Student" }
                    p { "Check your own progression outcome by entering your credits." }
                    span { class: "role-card__cta", "Get Started →" }
                }
                Link { class: "role-card role-card--staff", to: Route::Staff {},
                    h2 { "Staff" }
                    p { "Process multiple student outcomes and view summary histograms." }
                    span { class: "role-card__cta", "Enter Data →" }
                }
            }
        }
    }
}
