use maud::{html, Markup};

use crate::api::models::{
    ChurnMotifMonth, ChurnTrendPoint, Kpis, Slice, VolumeBucket, WordCloudTerm,
};
use crate::domain::{FilterState, Period};
use crate::resource::Loadable;
use crate::templates::components::links::{bar_style, format_number, hidden_fields, href};
use crate::templates::components::placeholder::{indicator, no_data, view_body};

pub fn kpi_grid(state: &Loadable<Kpis>) -> Markup {
    view_body(state, |k| {
        html! {
            div class="kpi-grid" {
                (kpi_card("Total Tweets", k.total_tweets.to_string(), None, "kpi-total"))
                (kpi_card("Tweets Négatifs", k.negatifs.to_string(), Some(share(k.negatifs_pct)), "kpi-negative"))
                (kpi_card("Tweets Positifs", k.positifs.to_string(), Some(share(k.positifs_pct)), "kpi-positive"))
                (kpi_card("Tweets Neutres", k.neutres.to_string(), Some(share(k.neutres_pct)), "kpi-neutral"))
                (kpi_card("Tweets Urgents", k.urgents.to_string(), Some(share(k.urgents_pct)), "kpi-urgent"))
                (kpi_card("Risque Churn", k.churn.to_string(), Some(share(k.churn_pct)), "kpi-churn"))
                (kpi_card(
                    "Jour le plus négatif",
                    k.worst_day.clone(),
                    Some(format!("{} tweets négatifs ce jour-là", k.worst_day_count)),
                    "kpi-worst-day"
                ))
            }
        }
    })
}

fn kpi_card(title: &str, value: String, sub: Option<String>, class: &str) -> Markup {
    html! {
        div class={ "kpi-card " (class) } {
            div class="kpi-title" { (title) }
            div class="kpi-value" { (value) }
            @if let Some(sub) = sub {
                div class="kpi-sub" { (sub) }
            }
        }
    }
}

fn share(pct: f64) -> String {
    format!("{}% du total", format_number(pct))
}

pub fn word_cloud_view(state: &Loadable<Vec<WordCloudTerm>>) -> Markup {
    view_body(state, |terms| {
        html! {
            p class="word-cloud" {
                @for term in terms {
                    span style=(format!("font-size: {}px; color: {}", term.size, term.color)) {
                        (term.text)
                    }
                    " "
                }
            }
        }
    })
}

pub fn churn_trend_view(state: &Loadable<Vec<ChurnTrendPoint>>) -> Markup {
    view_body(state, |points| {
        html! {
            table class="data-table" {
                thead {
                    tr { th { "Mois" } th { "Taux réel (%)" } th { "Projection (%)" } }
                }
                tbody {
                    @for point in points {
                        tr {
                            td { (point.month) }
                            td { (optional(point.actual)) }
                            td { (optional(point.predicted)) }
                        }
                    }
                }
            }
        }
    })
}

fn optional(value: Option<f64>) -> String {
    value.map(format_number).unwrap_or_else(|| "-".to_string())
}

/// Volume card with its own period selector. Changing the period only
/// reloads the `#volume-view` fragment. The select belongs to the page's
/// filter form, so applying filters keeps the period the user picked.
pub fn volume_card(
    state: &Loadable<Vec<VolumeBucket>>,
    period: Period,
    filters: &FilterState,
) -> Markup {
    html! {
        form
            class="view-controls"
            hx-get="/views/volume"
            hx-include="#period"
            hx-target="#volume-view"
            hx-swap="innerHTML"
            hx-trigger="change"
            hx-sync="this:replace"
            hx-indicator="#volume-loading"
        {
            (hidden_fields(&filters.query_params()))
            label class="sr-only" for="period" { "Période" }
            select id="period" name="period" form="filter-form" {
                @for p in Period::ALL {
                    option value=(p.as_str()) selected[p == period] { (p.label()) }
                }
            }
            noscript { button type="submit" form="filter-form" { "Afficher" } }
        }
        (indicator("volume-loading"))
        div id="volume-view" {
            (volume_view(state))
        }
    }
}

/// KPI grid with a refresh control that reloads `#kpis-view` alone.
pub fn kpi_panel(state: &Loadable<Kpis>, filters: &FilterState) -> Markup {
    html! {
        div class="view-controls" {
            button
                type="button"
                hx-get=(href("/views/kpis", &filters.query_params()))
                hx-target="#kpis-view"
                hx-swap="innerHTML"
                hx-sync="this:replace"
                hx-indicator="#kpis-loading"
            {
                "Rafraîchir"
            }
        }
        (indicator("kpis-loading"))
        div id="kpis-view" { (kpi_grid(state)) }
    }
}

pub fn volume_view(state: &Loadable<Vec<VolumeBucket>>) -> Markup {
    view_body(state, |buckets| {
        let max = buckets.iter().map(|b| b.volume).max().unwrap_or(0) as f64;

        html! {
            table class="data-table bar-table" {
                tbody {
                    @for bucket in buckets {
                        tr {
                            td { (bucket.label) }
                            td class="bar-cell" {
                                span class="bar" style=(bar_style(bucket.volume as f64, max)) {}
                            }
                            td class="num" { (bucket.volume) }
                        }
                    }
                }
            }
        }
    })
}

pub fn churn_motifs_view(
    stacked: &Loadable<Vec<ChurnMotifMonth>>,
    distribution: &Loadable<Vec<Slice>>,
) -> Markup {
    let evolution = view_body(stacked, |months| {
        let labels = ChurnMotifMonth::motif_labels(months);

        html! {
            table class="data-table" {
                thead {
                    tr {
                        th { "Mois" }
                        @for label in &labels {
                            th { (label) }
                        }
                    }
                }
                tbody {
                    @for month in months {
                        tr {
                            td { (month.month) }
                            @for label in &labels {
                                td class="num" { (format_number(month.count(label))) }
                            }
                        }
                    }
                }
            }
        }
    });

    html! {
        div class="view-split" {
            div {
                h3 { "Évolution Temporelle" }
                (evolution)
            }
            div {
                h3 { "Distribution Globale" }
                (slices_view(distribution))
            }
        }
    }
}

/// Legend-style list of shares. A distribution made only of zeros counts
/// as empty.
pub fn slices_view(state: &Loadable<Vec<Slice>>) -> Markup {
    if let Some(slices) = state.ready() {
        if slices.iter().all(|s| s.value == 0.0) {
            return no_data();
        }
    }

    view_body(state, |slices| {
        html! {
            ul class="slice-list" {
                @for slice in slices {
                    li {
                        span class="swatch" style=(format!("background-color: {}", slice.color)) {}
                        span class="slice-name" { (slice.name) }
                        span class="slice-value" { (format_number(slice.value)) }
                    }
                }
            }
        }
    })
}
