use maud::{html, Markup};

use crate::api::models::{Tweet, TweetPage};
use crate::domain::{
    ExportColumn, ExportSelection, FilterState, PageSize, Pager, Sentiment, TableState,
};
use crate::resource::Loadable;
use crate::templates::components::links::{hidden_fields, href};
use crate::templates::components::placeholder::{indicator, loading};

pub const NO_TWEETS_TEXT: &str = "Aucun tweet trouvé pour ces filtres.";

/// Tweets table with its count line and pager. This is also the body of
/// the `/views/tweets` fragment, so everything it links to targets
/// `#tweets-view`. The `#tweets-loading` indicator lives outside it, in
/// [`tweets_panel`].
pub fn tweets_view(state: &Loadable<TweetPage>, table: &TableState) -> Markup {
    let body = match state {
        Loadable::Loading => loading(),
        Loadable::Ready(page) if !page.data.is_empty() => html! {
            p class="table-count" {
                "Affichage de " (page.data.len()) " sur " (table.pager().total()) " tweets"
            }
            (tweets_table(&page.data))
            (pager_nav(table))
        },
        Loadable::Ready(_) | Loadable::Failed => html! {
            div class="view-placeholder view-empty" { (NO_TWEETS_TEXT) }
        },
    };

    html! {
        div id="tweets-view" { (body) }
    }
}

/// Page-size selector, loading indicator and table of the data page.
pub fn tweets_panel(state: &Loadable<TweetPage>, table: &TableState) -> Markup {
    html! {
        (page_size_form(table))
        (indicator("tweets-loading"))
        (tweets_view(state, table))
    }
}

fn tweets_table(tweets: &[Tweet]) -> Markup {
    html! {
        table class="data-table tweets-table" {
            thead {
                tr {
                    th { "Date" }
                    th { "Message" }
                    th { "Motif" }
                    th { "Sentiment" }
                    th { "Urgent" }
                    th { "Risque Churn" }
                }
            }
            tbody {
                @for tweet in tweets {
                    tr {
                        td class="nowrap" { (tweet.date) }
                        td class="message" { (tweet.full_text) }
                        td { (tweet.motif) }
                        td { (sentiment_badge(&tweet.sentiment_norm)) }
                        td {
                            @if tweet.is_urgent {
                                span class="badge badge-urgent" { "Urgent" }
                            } @else {
                                "-"
                            }
                        }
                        td { (churn_badge(&tweet.churn_risk)) }
                    }
                }
            }
        }
    }
}

fn sentiment_badge(label: &str) -> Markup {
    let tone = match Sentiment::from_label(label) {
        Some(Sentiment::Positive) => "badge-positive",
        Some(Sentiment::Negative) => "badge-negative",
        Some(Sentiment::Neutral) | None => "badge-neutral",
    };

    html! {
        span class={ "badge " (tone) } { (label) }
    }
}

fn churn_badge(risk: &str) -> Markup {
    match risk.to_lowercase().as_str() {
        "élevé" => html! { span class="badge badge-churn-high" { (risk) } },
        "modéré" => html! { span class="badge badge-churn-medium" { (risk) } },
        _ => html! { "-" },
    }
}

fn pager_nav(table: &TableState) -> Markup {
    let pager = table.pager();

    let mut prev = pager.clone();
    prev.prev();
    let mut next = pager.clone();
    next.next();

    html! {
        nav class="pager" {
            @if pager.has_prev() {
                (page_link(table.filters(), &prev, "Précédent"))
            } @else {
                span class="pager-link disabled" { "Précédent" }
            }
            span class="pager-status" {
                "Page " (pager.page()) " sur " (pager.display_pages())
            }
            @if pager.has_next() {
                (page_link(table.filters(), &next, "Suivant"))
            } @else {
                span class="pager-link disabled" { "Suivant" }
            }
        }
    }
}

fn page_link(filters: &FilterState, target: &Pager, label: &str) -> Markup {
    let mut params = target.query().query_params();
    params.extend(filters.query_params());

    html! {
        a
            class="pager-link"
            href=(href("/data", &params))
            hx-get=(href("/views/tweets", &params))
            hx-target="#tweets-view"
            hx-swap="outerHTML"
            hx-sync="#tweets-view:replace"
            hx-indicator="#tweets-loading"
        {
            (label)
        }
    }
}

/// Rows-per-page selector. The select belongs to the filter form, so the
/// size survives a filter change; neither form carries the page, so both
/// start again from page 1.
fn page_size_form(table: &TableState) -> Markup {
    let current = table.pager().limit();

    html! {
        form
            class="view-controls"
            hx-get="/views/tweets"
            hx-include="#limit"
            hx-target="#tweets-view"
            hx-swap="outerHTML"
            hx-trigger="change"
            hx-sync="#tweets-view:replace"
            hx-indicator="#tweets-loading"
        {
            (hidden_fields(&table.filters().query_params()))
            label for="limit" { "Lignes par page" }
            select id="limit" name="limit" form="filter-form" {
                @for size in PageSize::ALL {
                    option value=(size.get()) selected[size == current] { (size.get()) }
                }
            }
            noscript { button type="submit" form="filter-form" { "Afficher" } }
        }
    }
}

/// Column picker of the CSV export. The form goes through `/export`, which
/// redirects the new tab to the backend download.
pub fn export_form(selection: &ExportSelection, filters: &FilterState) -> Markup {
    html! {
        form class="export-form" method="get" action="/export" target="_blank" {
            (hidden_fields(&filters.query_params()))
            fieldset {
                legend { "Colonnes à exporter" }
                @for column in ExportColumn::ALL {
                    label class="export-column" {
                        input
                            type="checkbox"
                            name="columns"
                            value=(column.id())
                            checked[selection.contains(column)];
                        " " (column.label())
                    }
                }
            }
            button type="submit" class="primary" { "Télécharger CSV" }
        }
    }
}
