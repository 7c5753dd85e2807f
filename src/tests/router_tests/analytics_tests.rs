use crate::router::handle;
use crate::tests::utils::{
    body_string, empty_backend, expect_error, get, owned, pairs, stub_client, StubBackend,
};

#[test]
fn empty_results_render_no_data_placeholders() {
    let client = stub_client(empty_backend());

    let resp = handle(get("/"), &client).expect("Failed to handle request");

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains("Aucune donnée disponible"));
    assert!(!body.contains("Chargement..."));
}

#[test]
fn backend_outage_still_renders_page() {
    let client = stub_client(StubBackend::new());

    let resp = handle(get("/"), &client).expect("Failed to handle request");

    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Aucune donnée disponible"));
}

#[test]
fn every_view_fetches_with_current_filters() {
    let client = stub_client(empty_backend());

    handle(get("/?motif=Prix&sentiment=%28Tous%29&urgent=true&period=month"), &client).unwrap();

    let backend = client.backend();
    for endpoint in ["kpis", "wordcloud", "churn-trend", "churn-motifs-stacked", "churn-distribution"] {
        let sent = backend.requests_to(endpoint);
        assert_eq!(sent.len(), 1, "{endpoint} fetched once");
        assert_eq!(pairs(&sent[0]), owned(&[("motif", "Prix"), ("urgent", "true")]));
    }
    assert_eq!(
        pairs(&backend.requests_to("volume")[0]),
        owned(&[("period", "month"), ("motif", "Prix"), ("urgent", "true")])
    );
    assert_eq!(backend.requests_to("auto-vs-human")[0].query(), None);
}

#[test]
fn volume_period_defaults_to_week() {
    let client = stub_client(empty_backend());

    handle(get("/?period=fortnight"), &client).unwrap();

    assert_eq!(
        pairs(&client.backend().requests_to("volume")[0]),
        owned(&[("period", "week")])
    );
}

#[test]
fn renders_kpis_and_dynamic_churn_motifs() {
    let client = stub_client(
        empty_backend()
            .with(
                "kpis",
                r#"{"total_tweets":120,"negatifs":30,"negatifs_pct":25.0,"worst_day":"2024-02-14","worst_day_count":9}"#,
            )
            .with(
                "churn-motifs-stacked",
                r#"[{"month":"2024-01","Prix":4},{"month":"2024-02","Concurrence":2}]"#,
            ),
    );

    let body = body_string(handle(get("/"), &client).unwrap());

    assert!(body.contains("Tweets Négatifs"));
    assert!(body.contains("25% du total"));
    assert!(body.contains("2024-02-14"));
    assert!(body.contains("<th>Prix</th>"));
    assert!(body.contains("<th>Concurrence</th>"));
}

#[test]
fn volume_fragment_renders_alone() {
    let client = stub_client(StubBackend::new().with("volume", r#"[{"label":"2024-W05","volume":42}]"#));

    let resp = handle(get("/views/volume?period=day&churn=%C3%A9lev%C3%A9"), &client).unwrap();

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("2024-W05"));
    assert!(!body.contains("<html"));
    assert_eq!(
        pairs(&client.backend().requests_to("volume")[0]),
        owned(&[("period", "day"), ("churn", "élevé")])
    );
}

#[test]
fn empty_volume_fragment_shows_placeholder() {
    let client = stub_client(StubBackend::new().with("volume", "[]"));

    let body = body_string(handle(get("/views/volume"), &client).unwrap());

    assert!(body.contains("Aucune donnée disponible"));
}

#[test]
fn unknown_period_is_bad_request() {
    let client = stub_client(empty_backend());

    let err = expect_error(handle(get("/views/volume?period=decade"), &client));

    assert_eq!(err.status(), 400);
    assert!(client.backend().requests().is_empty());
}

#[test]
fn kpi_fragment_with_zero_total_is_empty() {
    let client = stub_client(empty_backend());

    let body = body_string(handle(get("/views/kpis"), &client).unwrap());

    assert!(body.contains("Aucune donnée disponible"));
}

#[test]
fn unknown_path_is_not_found() {
    let client = stub_client(empty_backend());

    let err = expect_error(handle(get("/admin"), &client));

    assert_eq!(err.status(), 404);
}

#[test]
fn period_select_submits_with_filter_form() {
    let client = stub_client(empty_backend());

    let body = body_string(handle(get("/?period=month&motif=Prix"), &client).unwrap());

    let form_start = body.find(r#"<form id="filter-form""#).unwrap();
    let form_end = form_start + body[form_start..].find("</form>").unwrap();
    let filter_form = &body[form_start..form_end];

    // The live selection goes with the filters, not a copy frozen at render time.
    assert!(!filter_form.contains(r#"name="period""#));
    assert!(body.contains(r#"<select id="period" name="period" form="filter-form">"#));
    assert!(body.contains(r#"<option value="month" selected>Par mois</option>"#));
    assert!(body.contains(r##"hx-include="#period""##));
}

#[test]
fn kpi_grid_refreshes_through_fragment() {
    let client = stub_client(empty_backend());

    let body = body_string(handle(get("/?motif=Prix&urgent=on"), &client).unwrap());

    assert!(body.contains(r#"hx-get="/views/kpis?motif=Prix&amp;urgent=true""#));
    assert!(body.contains(r##"hx-target="#kpis-view""##));
    assert!(body.contains(r#"<div id="kpis-view">"#));
}

#[test]
fn fragment_controls_show_loading_and_replace_in_flight() {
    let client = stub_client(empty_backend());

    let body = body_string(handle(get("/"), &client).unwrap());

    for id in ["volume-loading", "kpis-loading"] {
        assert!(body.contains(&format!(r##"hx-indicator="#{id}""##)), "{id} referenced");
        assert!(body.contains(&format!(r#"<div id="{id}" class="view-placeholder htmx-indicator""#)));
    }
    assert_eq!(body.matches(r#"hx-sync="this:replace""#).count(), 2);
}
