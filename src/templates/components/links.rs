use maud::{html, Markup};
use url::form_urlencoded;

/// Dashboard-relative link carrying `params` as its query string.
pub fn href(path: &str, params: &[(&'static str, String)]) -> String {
    if params.is_empty() {
        return path.to_string();
    }

    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params)
        .finish();

    format!("{path}?{query}")
}

pub fn hidden_fields(params: &[(&'static str, String)]) -> Markup {
    html! {
        @for (name, value) in params {
            input type="hidden" name=(name) value=(value);
        }
    }
}

/// Whole numbers without decimals, everything else to one decimal.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

/// Width of a bar relative to the largest value of its series.
pub fn bar_style(value: f64, max: f64) -> String {
    let pct = if max > 0.0 { value / max * 100.0 } else { 0.0 };
    format!("width: {pct:.1}%")
}
