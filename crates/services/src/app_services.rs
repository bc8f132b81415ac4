use std::sync::Arc;

use tracing::info;

use crate::config::ProgressionConfig;
use crate::error::ConfigError;
use crate::progression_client::{HttpProgressionClient, ProgressionApi};
use crate::report_export::ReportExporter;

/// Assembles the app-facing services from configuration.
#[derive(Clone)]
pub struct AppServices {
    config: ProgressionConfig,
    progression: Arc<dyn ProgressionApi>,
    report_exporter: Arc<ReportExporter>,
}

impl AppServices {
    /// Build services talking to the calculator over HTTP.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the HTTP client cannot be built.
    pub fn new_http(
        config: ProgressionConfig,
        report_exporter: ReportExporter,
    ) -> Result<Self, ConfigError> {
        let client = HttpProgressionClient::new(&config)?;
        info!(
            endpoint = client.endpoint(),
            report_dir = %report_exporter.dir().display(),
            "progression services ready"
        );
        Ok(Self::with_api(config, Arc::new(client), report_exporter))
    }

    /// Build services around an existing calculator, e.g. a test double.
    #[must_use]
    pub fn with_api(
        config: ProgressionConfig,
        progression: Arc<dyn ProgressionApi>,
        report_exporter: ReportExporter,
    ) -> Self {
        Self {
            config,
            progression,
            report_exporter: Arc::new(report_exporter),
        }
    }

    #[must_use]
    pub fn config(&self) -> &ProgressionConfig {
        &self.config
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
