#![forbid(unsafe_code)]

pub mod app_services;
pub mod config;
pub mod error;
pub mod progression_client;
pub mod report_export;
pub mod workflows;

pub use app_services::AppServices;
pub use config::ProgressionConfig;
pub use error::{CalculationError, ConfigError, ExportError, WorkflowError};
pub use progression_client::{HttpProgressionClient, ProgressionApi};
pub use report_export::ReportExporter;
pub use workflows::{BatchSession, PendingSubmission, SingleSubmission, SubmissionPhase};
