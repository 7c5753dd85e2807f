use maud::{html, Markup};

use crate::templates::components::analytics_views::slices_view;
use crate::templates::components::sentiment_views::{activity_peaks_tabs, motif_sentiment_view};
use crate::templates::components::{card, filter_bar};
use crate::templates::{desktop_layout, Section};
use crate::views::SentimentVm;

pub fn sentiment_page(vm: &SentimentVm) -> Markup {
    desktop_layout(
        Section::Sentiment,
        html! {
            (filter_bar("/sentiment", &vm.filters, &vm.options))

            div class="grid" {
                (card(
                    "Sentiment par motif",
                    Some("Répartition en pourcentage"),
                    motif_sentiment_view(&vm.motif_sentiment)
                ))
                (card("Distribution des sentiments", None, slices_view(&vm.distribution)))
                (card(
                    "Pics d'activité",
                    Some("Volume total et volume négatif"),
                    activity_peaks_tabs(&vm.peaks, &vm.filters)
                ))
            }
        },
    )
}
