use dioxus::prelude::*;
use progression_core::{Histogram, OutcomeRecord};
use tracing::warn;

use crate::context::AppContext;
use crate::vm::map_histogram;

#[derive(Clone, Debug, PartialEq, Eq)]
enum ExportState {
    Idle,
    Saved { path: String, record_count: usize },
    Failed,
}

impl ExportState {
    /// A saved report only describes the batch as it was when it was written.
    fn for_record_count(self, record_count: usize) -> Self {
        match self {
            ExportState::Saved {
                record_count: saved, ..
            } if saved != record_count => ExportState::Idle,
            other => other,
        }
    }
}

/// Histograms over the batch plus the report download.
#[component]
pub fn ReportPanel(records: Vec<OutcomeRecord>) -> Element {
    let ctx = use_context::<AppContext>();
    let exporter = ctx.report_exporter();
    let mut export_state = use_signal(|| ExportState::Idle);

    let histogram = map_histogram(&Histogram::from_records(&records));
    let status = export_state().for_record_count(records.len());

    rsx! {
        section { class: "report",
            header { class: "report__header",
                h2 { "Progression Report" }
                button {
                    class: "button button-success",
                    r#type: "button",
                    onclick: move |_| {
                        match exporter.export(&records) {
                            Ok(path) => export_state.set(ExportState::Saved {
                                path: path.display().to_string(),
                                record_count: records.len(),
                            }),
                            Err(err) => {
                                warn!(error = %err, "report download failed");
                                export_state.set(ExportState::Failed);
                            }
                        }
                    },
                    "Download Report"
                }
            }
            match status {
                ExportState::Idle => rsx! {},
                ExportState::Saved { path, record_count } => rsx! {
                    p { class: "report__status", "Saved {record_count} records to {path}" }
                },
                ExportState::Failed => rsx! {
                    p { class: "report__status report__status--error",
                        "Could not save the report."
                    }
                },
            }

            h3 { "Horizontal Histogram" }
            div { class: "histogram histogram--horizontal",
                for bar in histogram.bars.iter().cloned() {
                    div { key: "h-{bar.label}", class: "histogram__row",
                        span { class: "histogram__label", "{bar.label}" }
                        div { class: "histogram__track",
                            div {
                                class: "histogram__bar {bar.color_class}",
                                style: "width: {bar.width_pct}",
                            }
                        }
                        span { class: "histogram__count", "{bar.count}" }
                    }
                }
            }

            h3 { "Vertical Histogram" }
            div { class: "histogram histogram--vertical",
                for bar in histogram.bars.iter().cloned() {
                    div { key: "v-{bar.label}", class: "histogram__column",
                        div { class: "histogram__well",
                            div {
                                class: "histogram__bar {bar.color_class}",
                                style: "height: {bar.height_pct}",
                            }
                        }
                        span { class: "histogram__label", "{bar.label}" }
                        span { class: "histogram__count", "{bar.count}" }
                    }
                }
            }

            p { class: "report__total", "{histogram.total_label}" }
        }
    }
}
