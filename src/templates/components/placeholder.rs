use maud::{html, Markup};

use crate::resource::{EmptyResult, Loadable};

pub const LOADING_TEXT: &str = "Chargement...";
pub const NO_DATA_TEXT: &str = "Aucune donnée disponible";

pub fn loading() -> Markup {
    html! {
        div class="view-placeholder" aria-busy="true" { (LOADING_TEXT) }
    }
}

/// Loading placeholder shown by htmx while a fragment request is in flight.
/// It must sit outside the swapped element, and the triggering control
/// points at it with `hx-indicator="#<id>"`.
pub fn indicator(id: &str) -> Markup {
    html! {
        div id=(id) class="view-placeholder htmx-indicator" aria-busy="true" { (LOADING_TEXT) }
    }
}

pub fn no_data() -> Markup {
    html! {
        div class="view-placeholder view-empty" { (NO_DATA_TEXT) }
    }
}

/// Renders a view's state: loading, "no data" for failed or empty results,
/// otherwise `render` on the value.
pub fn view_body<T, F>(state: &Loadable<T>, render: F) -> Markup
where
    T: EmptyResult,
    F: FnOnce(&T) -> Markup,
{
    match state {
        Loadable::Loading => loading(),
        Loadable::Ready(value) if !value.is_empty_result() => render(value),
        Loadable::Ready(_) | Loadable::Failed => no_data(),
    }
}
