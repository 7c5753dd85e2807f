use maud::{html, Markup};

use crate::api::models::{ActivityPeak, MotifSentiment};
use crate::domain::{ActivityKind, FilterState};
use crate::resource::Loadable;
use crate::templates::components::links::{bar_style, format_number, href};
use crate::templates::components::placeholder::{indicator, view_body};

pub fn motif_sentiment_view(state: &Loadable<Vec<MotifSentiment>>) -> Markup {
    view_body(state, |rows| {
        html! {
            table class="data-table heatmap" {
                thead {
                    tr {
                        th { "Motif" }
                        th { "Positif (%)" }
                        th { "Neutre (%)" }
                        th { "Négatif (%)" }
                    }
                }
                tbody {
                    @for row in rows {
                        tr {
                            td { (row.motif) }
                            (heat_cell(row.positif, "positive"))
                            (heat_cell(row.neutre, "neutral"))
                            (heat_cell(row.negatif, "negative"))
                        }
                    }
                }
            }
        }
    })
}

fn heat_cell(pct: f64, tone: &str) -> Markup {
    let alpha = (pct / 100.0).clamp(0.0, 1.0);

    html! {
        td class={ "num heat-" (tone) } style=(format!("--heat: {alpha:.2}")) {
            (format_number(pct))
        }
    }
}

/// Activity peaks for every bucket size, one tab each. Tabs reload only
/// their own panel.
pub fn activity_peaks_tabs(
    peaks: &[(ActivityKind, Loadable<Vec<ActivityPeak>>)],
    filters: &FilterState,
) -> Markup {
    html! {
        div class="tabs" {
            nav class="tab-list" {
                @for (kind, _) in peaks {
                    a
                        href=(format!("#peaks-{}", kind.as_str()))
                        hx-get=(peaks_href(*kind, filters))
                        hx-target=(format!("#peaks-{}", kind.as_str()))
                        hx-sync="this:replace"
                        hx-indicator=(format!("#peaks-{}-loading", kind.as_str()))
                    {
                        (kind.label())
                    }
                }
            }
            @for (kind, state) in peaks {
                (indicator(&format!("peaks-{}-loading", kind.as_str())))
                div id=(format!("peaks-{}", kind.as_str())) class="tab-panel" {
                    (activity_peaks_view(state))
                }
            }
        }
    }
}

fn peaks_href(kind: ActivityKind, filters: &FilterState) -> String {
    let mut params = vec![("type", kind.as_str().to_string())];
    params.extend(filters.query_params());
    href("/views/activity-peaks", &params)
}

pub fn activity_peaks_view(state: &Loadable<Vec<ActivityPeak>>) -> Markup {
    view_body(state, |peaks| {
        let max = peaks.iter().map(|p| p.volume).max().unwrap_or(0) as f64;

        html! {
            table class="data-table bar-table" {
                thead {
                    tr {
                        th { "Période" }
                        th {}
                        th class="num" { "Volume Total" }
                        th class="num" { "Sentiment Négatif" }
                    }
                }
                tbody {
                    @for peak in peaks {
                        tr {
                            td { (peak.bucket) }
                            td class="bar-cell" {
                                span class="bar" style=(bar_style(peak.volume as f64, max)) {}
                                span class="bar bar-negative" style=(bar_style(peak.negative as f64, max)) {}
                            }
                            td class="num" { (peak.volume) }
                            td class="num" { (peak.negative) }
                        }
                    }
                }
            }
        }
    })
}
