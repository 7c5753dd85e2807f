use maud::{html, Markup};

use crate::templates::components::explorer::{export_form, tweets_panel};
use crate::templates::components::{card, filter_bar};
use crate::templates::{desktop_layout, Section};
use crate::views::ExplorerVm;

pub fn data_page(vm: &ExplorerVm) -> Markup {
    let table = &vm.table;

    desktop_layout(
        Section::Data,
        html! {
            (filter_bar("/data", table.filters(), &vm.options))

            (card("Tweets", None, tweets_panel(&vm.tweets, table)))

            (card(
                "Export CSV",
                Some("Les filtres actifs s'appliquent à l'export"),
                export_form(&vm.export, table.filters())
            ))
        },
    )
}
