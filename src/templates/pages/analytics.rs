use maud::{html, Markup};

use crate::templates::components::analytics_views::{
    churn_motifs_view, churn_trend_view, kpi_panel, slices_view, volume_card, word_cloud_view,
};
use crate::templates::components::{card, filter_bar};
use crate::templates::{desktop_layout, Section};
use crate::views::AnalyticsVm;

pub fn analytics_page(vm: &AnalyticsVm) -> Markup {
    desktop_layout(
        Section::Analytics,
        html! {
            (filter_bar("/", &vm.filters, &vm.options))

            (kpi_panel(&vm.kpis, &vm.filters))

            div class="grid" {
                (card("Nuage de mots", Some("Termes les plus fréquents"), word_cloud_view(&vm.word_cloud)))
                (card("Tendance Churn", Some("Taux réel et projection"), churn_trend_view(&vm.churn_trend)))
                (card("Volume de tweets", None, volume_card(&vm.volume, vm.period, &vm.filters)))
                (card(
                    "Motifs de Churn",
                    Some("Raisons de départ des clients"),
                    churn_motifs_view(&vm.churn_motifs, &vm.churn_distribution)
                ))
                (card("Automatisation", Some("Réponses automatiques vs humaines"), slices_view(&vm.automation)))
            }
        },
    )
}
