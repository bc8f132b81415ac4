use progression_core::{Histogram, OutcomeCategory};

/// One bar, with its lengths already expressed as CSS percentages.
#[derive(Clone, Debug, PartialEq)]
pub struct HistogramBarVm {
    pub label: &'static str,
    pub count: u32,
    /// Horizontal bar length, relative to all records.
    pub width_pct: String,
    /// Vertical bar height, relative to the largest category.
    pub height_pct: String,
    pub color_class: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HistogramVm {
    pub bars: Vec<HistogramBarVm>,
    pub total_label: String,
}

#[must_use]
pub fn map_histogram(histogram: &Histogram) -> HistogramVm {
    let bars = histogram
        .bars()
        .iter()
        .map(|bar| HistogramBarVm {
            label: bar.category.short_label(),
            count: bar.count,
            width_pct: percent(bar.share_of_total),
            height_pct: percent(bar.share_of_max),
            color_class: color_class(bar.category),
        })
        .collect();

    HistogramVm {
        bars,
        total_label: format!("{} outcomes in total.", histogram.total_records()),
    }
}

fn percent(share: f64) -> String {
    format!("{:.1}%", share * 100.0)
}

fn color_class(category: OutcomeCategory) -> &'static str {
    match category {
        OutcomeCategory::Progress => "bar--progress",
        OutcomeCategory::Trailer => "bar--trailer",
        OutcomeCategory::Retriever => "bar--retriever",
        OutcomeCategory::Exclude => "bar--exclude",
    }
}
