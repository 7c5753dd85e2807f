use maud::{html, Markup, DOCTYPE};

/// Standalone error page; it does not depend on the backend being reachable.
pub fn error_page(status: u16, message: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="fr" {
            head {
                meta charset="utf-8";
                title { "Erreur " (status) }
                style {
                    "body { font-family: system-ui, sans-serif; max-width: 720px; margin: 4rem auto; padding: 1rem; }"
                    "h1 { font-size: 2rem; margin-bottom: 1rem; }"
                    "p { font-size: 1.1rem; color: #444; }"
                }
            }
            body {
                h1 { "Erreur " (status) }
                p { (message) }
                p { a href="/" { "← Retour au tableau de bord" } }
            }
        }
    }
}
