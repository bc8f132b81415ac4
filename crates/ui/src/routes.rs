use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable, use_route};

use crate::views::{LandingView, StaffView, StudentView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", LandingView)] Landing {},
        #[route("/student", StudentView)] Student {},
        #[route("/staff", StaffView)] Staff {},
}

#[component]
fn Layout() -> Element {
    let route = use_route::<Route>();
    let on_landing = matches!(route, Route::Landing {});

    rsx! {
        main { class: "app",
            Outlet::<Route> {}
            if !on_landing {
                Link { class: "back-link", to: Route::Landing {}, "← Back to Home" }
            }
        }
    }
}
