use maud::{html, Markup};

use crate::domain::{FilterOptions, FilterState, Sentiment, ALL};
use crate::resource::Loadable;

/// Filter form of a page, `#filter-form`. View controls that must survive a
/// filter change (volume period, page size) join it through their `form`
/// attribute. It never carries a page number, so the explorer always comes
/// back on its first page.
pub fn filter_bar(action: &str, filters: &FilterState, options: &Loadable<FilterOptions>) -> Markup {
    let fallback = FilterOptions::default();
    let options = options.ready().unwrap_or(&fallback);

    let min_date = options.min_date.map(|d| d.to_string());
    let max_date = options.max_date.map(|d| d.to_string());

    let motif = selected(&filters.motif);
    let sentiment = selected(&filters.sentiment);
    let churn = selected(&filters.churn);

    html! {
        form id="filter-form" class="filter-bar" method="get" action=(action) {
            div class="filter-field" {
                span class="filter-label" { "Période" }
                div class="filter-dates" {
                    input
                        type="date"
                        name="startDate"
                        aria-label="Date de début"
                        value=[filters.start_date.as_deref()]
                        min=[min_date.as_deref()]
                        max=[max_date.as_deref()];
                    span { "-" }
                    input
                        type="date"
                        name="endDate"
                        aria-label="Date de fin"
                        value=[filters.end_date.as_deref()]
                        min=[min_date.as_deref()]
                        max=[max_date.as_deref()];
                }
            }

            div class="filter-field" {
                label class="filter-label" for="motif" { "Motif" }
                select id="motif" name="motif" {
                    (choices(&options.motifs, motif))
                }
            }

            div class="filter-field" {
                label class="filter-label" for="sentiment" { "Sentiment" }
                select id="sentiment" name="sentiment" {
                    (choice(ALL, sentiment))
                    @for s in Sentiment::ALL {
                        (choice(s.label(), sentiment))
                    }
                }
            }

            div class="filter-field" {
                label class="filter-label" for="churn" { "Risque Churn" }
                select id="churn" name="churn" {
                    (choices(&options.churn_risks, churn))
                }
            }

            label class="filter-check" {
                input type="checkbox" name="urgent" value="true" checked[filters.urgent];
                " Tweets urgents uniquement"
            }

            button type="submit" class="primary" { "Appliquer" }
            @if !filters.is_unconstrained() {
                a class="filter-reset" href=(action) { "Réinitialiser" }
            }
        }
    }
}

fn selected(value: &Option<String>) -> &str {
    value.as_deref().filter(|v| !v.is_empty()).unwrap_or(ALL)
}

// The current value stays selectable even when the advertised list is
// unavailable or no longer contains it.
fn choices(values: &[String], current: &str) -> Markup {
    let missing = current != ALL && !values.iter().any(|v| v == current);

    html! {
        (choice(ALL, current))
        @if missing {
            (choice(current, current))
        }
        @for value in values {
            (choice(value, current))
        }
    }
}

fn choice(value: &str, current: &str) -> Markup {
    html! {
        option value=(value) selected[value == current] { (value) }
    }
}
