use std::sync::Arc;

use services::{ProgressionApi, ReportExporter};

pub trait UiApp: Send + Sync {
    fn progression(&self) -> Arc<dyn ProgressionApi>;
    fn report_exporter(&self) -> Arc<ReportExporter>;
}

/// Services shared by every screen. Per-screen state lives in the screens themselves.
#[derive(Clone)]
pub struct AppContext {
    progression: Arc<dyn ProgressionApi>,
    report_exporter: Arc<ReportExporter>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            progression: app.progression(),
            report_exporter: app.report_exporter(),
        }
    }

    #[must_use]
    pub fn progression(&self) -> Arc<dyn ProgressionApi> {
        Arc::clone(&self.progression)
    }

    #[must_use]
    pub fn report_exporter(&self) -> Arc<ReportExporter> {
        Arc::clone(&self.report_exporter)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
