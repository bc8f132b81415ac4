use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use progression_core::{CreditTuple, Outcome, OutcomeRecord};
use services::{CalculationError, ProgressionApi, ReportExporter};

use crate::components::{CreditForm, ReportPanel};
use crate::context::{UiApp, build_app_context};
use crate::views::submit_handles::SubmitTestHandles;
use crate::views::{LandingView, StaffView, StudentView};

/// Calculator double that plays back queued replies, then answers "Progress".
pub struct ScriptedApi {
    replies: Mutex<VecDeque<Result<Outcome, CalculationError>>>,
}

impl ScriptedApi {
    pub fn new(replies: Vec<Result<Outcome, CalculationError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
        }
    }
}

#[async_trait]
impl ProgressionApi for ScriptedApi {
    async fn calculate(&self, _credits: CreditTuple) -> Result<Outcome, CalculationError> {
        self.replies
            .lock()
            .expect("replies lock")
            .pop_front()
            .unwrap_or_else(|| Ok(Outcome::new("Progress")))
    }
}

struct TestApp {
    progression: Arc<dyn ProgressionApi>,
    report_exporter: Arc<ReportExporter>,
}

impl UiApp for TestApp {
    fn progression(&self) -> Arc<dyn ProgressionApi> {
        Arc::clone(&self.progression)
    }

    fn report_exporter(&self) -> Arc<ReportExporter> {
        Arc::clone(&self.report_exporter)
    }
}

#[derive(Clone, PartialEq)]
pub enum ViewKind {
    Landing,
    Student,
    Staff,
    CreditForm { is_submitting: bool },
    Report(Vec<OutcomeRecord>),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    handles: SubmitTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view.clone());
    use_context_provider(|| props.handles.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Landing => rsx! { LandingView {} },
        ViewKind::Student => rsx! { StudentView {} },
        ViewKind::Staff => rsx! { StaffView {} },
        ViewKind::CreditForm { is_submitting } => rsx! {
            CreditForm { is_submitting, on_submit: move |_: CreditTuple| {} }
        },
        ViewKind::Report(records) => rsx! { ReportPanel { records } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    handles: SubmitTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    /// Submit through the mounted view's own callback, then let the request settle.
    pub async fn submit(&mut self, credits: CreditTuple) {
        self.handles.submit().call(credits);
        drive_dom(&mut self.dom);
        self.drive_async().await;
        self.drive_async().await;
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, report_dir: &std::path::Path) -> ViewHarness {
    setup_view_harness_with_replies(view, report_dir, Vec::new())
}

pub fn setup_view_harness_with_replies(
    view: ViewKind,
    report_dir: &std::path::Path,
    replies: Vec<Result<Outcome, CalculationError>>,
) -> ViewHarness {
    let app = Arc::new(TestApp {
        progression: Arc::new(ScriptedApi::new(replies)),
        report_exporter: Arc::new(ReportExporter::new(report_dir)),
    });
    let handles = SubmitTestHandles::default();
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            handles: handles.clone(),
        },
    );
    ViewHarness { dom, handles }
}
