use astra::Request;
use url::form_urlencoded;

use crate::api::{ApiClient, Backend};
use crate::domain::{ActivityKind, ExportSelection, FilterState, Period, TableState};
use crate::errors::{ResultResp, ServerError};
use crate::responses::{html_response, redirect_response};
use crate::templates::components::analytics_views::{kpi_grid, volume_view};
use crate::templates::components::explorer::tweets_view;
use crate::templates::components::sentiment_views::activity_peaks_view;
use crate::templates::pages;
use crate::views::{self, load_one};

pub fn handle<B: Backend>(req: Request, client: &ApiClient<B>) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    let query = req.uri().query().unwrap_or("");

    log::debug!("{method} {path}");

    match (method, path) {
        // Pages
        ("GET", "/") => {
            // A bad period on a full page falls back to the default view.
            let period = query_value(query, "period")
                .and_then(|p| Period::parse(&p))
                .unwrap_or_default();
            let vm = views::load_analytics(client, FilterState::from_query(query), period);
            html_response(pages::analytics_page(&vm))
        }
        ("GET", "/sentiment") => {
            let vm = views::load_sentiment(client, FilterState::from_query(query));
            html_response(pages::sentiment_page(&vm))
        }
        ("GET", "/data") => {
            let vm = views::load_explorer(client, TableState::from_query(query));
            html_response(pages::data_page(&vm))
        }
        ("GET", "/export") => {
            let url = client.export_url(
                &ExportSelection::from_query(query),
                &FilterState::from_query(query),
            );
            log::info!("Export redirected to {url}");
            redirect_response(&url)
        }

        // Fragments
        ("GET", "/views/kpis") => {
            let filters = FilterState::from_query(query);
            let kpis = load_one("kpis", || client.kpis(&filters));
            html_response(kpi_grid(&kpis))
        }
        ("GET", "/views/volume") => {
            let period = parse_param(query, "period", Period::parse)?;
            let filters = FilterState::from_query(query);
            let volume = load_one("volume", || client.volume(period, &filters));
            html_response(volume_view(&volume))
        }
        ("GET", "/views/activity-peaks") => {
            let kind = parse_param(query, "type", ActivityKind::parse)?;
            let filters = FilterState::from_query(query);
            let peaks = load_one("activity peaks", || client.activity_peaks(kind, &filters));
            html_response(activity_peaks_view(&peaks))
        }
        ("GET", "/views/tweets") => {
            let mut table = TableState::from_query(query);
            let tweets = views::load_tweets(client, &mut table);
            html_response(tweets_view(&tweets, &table))
        }

        _ => Err(ServerError::NotFound),
    }
}

fn query_value(query: &str, key: &str) -> Option<String> {
    form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

/// A missing parameter takes its default; an unknown value is rejected.
fn parse_param<T: Default>(
    query: &str,
    key: &str,
    parse: fn(&str) -> Option<T>,
) -> Result<T, ServerError> {
    match query_value(query, key) {
        None => Ok(T::default()),
        Some(value) => {
            parse(&value).ok_or_else(|| ServerError::BadRequest(format!("{key}={value}")))
        }
    }
}
