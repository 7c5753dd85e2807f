use maud::{html, Markup, PreEscaped, DOCTYPE};

const HTMX_SRC: &str = "https://unpkg.com/htmx.org@1.9.12";

/// Top-level pages of the dashboard, in sidebar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Analytics,
    Sentiment,
    Data,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Analytics, Section::Sentiment, Section::Data];

    pub fn path(self) -> &'static str {
        match self {
            Section::Analytics => "/",
            Section::Sentiment => "/sentiment",
            Section::Data => "/data",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Analytics => "Analytics SAV",
            Section::Sentiment => "Analyse Sentiment",
            Section::Data => "Vue Données",
        }
    }
}

pub fn desktop_layout(section: Section, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="fr" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (section.title()) " | Atlas SAV" }
                style { (PreEscaped(STYLE)) }
                script src=(HTMX_SRC) defer {}
            }
            body {
                aside class="sidebar" {
                    div class="brand" { "Atlas SAV" }
                    nav {
                        ul {
                            @for s in Section::ALL {
                                li {
                                    a href=(s.path()) class=[(s == section).then_some("active")] {
                                        (s.title())
                                    }
                                }
                            }
                        }
                    }
                }
                main class="content" {
                    h1 { (section.title()) }
                    (content)
                }
            }
        }
    }
}

const STYLE: &str = r#"
body { display: flex; margin: 0; font-family: system-ui, sans-serif; background: #f5f6fa; color: #1f2937; }
.sidebar { width: 220px; min-height: 100vh; background: #1e293b; color: #fff; padding: 1.5rem 1rem; }
.sidebar ul { list-style: none; padding: 0; }
.sidebar a { display: block; color: #cbd5e1; padding: .5rem .75rem; border-radius: 6px; text-decoration: none; }
.sidebar a.active { background: #334155; color: #fff; }
.brand { font-weight: 700; font-size: 1.2rem; margin-bottom: 1.5rem; }
.content { flex: 1; padding: 1.5rem 2rem; }
.filter-bar { display: flex; flex-wrap: wrap; gap: 1rem; align-items: end; margin-bottom: 1.5rem; }
.grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(420px, 1fr)); gap: 1.5rem; }
.card { background: #fff; border-radius: 10px; padding: 1rem 1.25rem; box-shadow: 0 1px 3px rgba(0,0,0,.08); }
.card-subtitle { color: #6b7280; margin-top: 0; }
.kpi-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(160px, 1fr)); gap: 1rem; }
.kpi-value { font-size: 1.6rem; font-weight: 700; }
.data-table { width: 100%; border-collapse: collapse; }
.data-table th, .data-table td { padding: .4rem .5rem; border-bottom: 1px solid #e5e7eb; text-align: left; }
.num { text-align: right; }
.bar { display: block; height: .6rem; background: #3b82f6; border-radius: 3px; }
.bar-negative { background: #ef4444; margin-top: 2px; }
.heatmap td.heat-positive { background: rgba(16,185,129,var(--heat)); }
.heatmap td.heat-neutral { background: rgba(156,163,175,var(--heat)); }
.heatmap td.heat-negative { background: rgba(239,68,68,var(--heat)); }
.swatch { display: inline-block; width: .8rem; height: .8rem; border-radius: 2px; margin-right: .5rem; }
.view-placeholder { color: #6b7280; padding: 2rem; text-align: center; }
.badge { padding: .1rem .5rem; border-radius: 999px; font-size: .8rem; }
.badge-positive { background: #d1fae5; } .badge-negative { background: #fee2e2; } .badge-neutral { background: #e5e7eb; }
.badge-urgent, .badge-churn-high { background: #fecaca; } .badge-churn-medium { background: #fef3c7; }
.pager { display: flex; gap: 1rem; align-items: center; margin-top: 1rem; }
.pager-link.disabled { color: #9ca3af; }
.sr-only { position: absolute; width: 1px; height: 1px; overflow: hidden; clip: rect(0 0 0 0); }
"#;
