use maud::{html, Markup};

pub fn card(title: &str, subtitle: Option<&str>, body: Markup) -> Markup {
    html! {
        section class="card" {
            div class="card-header" {
                h2 { (title) }
                @if let Some(subtitle) = subtitle {
                    p class="card-subtitle" { (subtitle) }
                }
            }
            div class="card-body" {
                (body)
            }
        }
    }
}
