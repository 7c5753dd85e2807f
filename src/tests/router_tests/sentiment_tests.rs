use crate::router::handle;
use crate::tests::utils::{body_string, empty_backend, expect_error, get, owned, pairs, stub_client};

#[test]
fn fetches_all_three_peak_buckets() {
    let client = stub_client(empty_backend());

    let resp = handle(get("/sentiment?sentiment=Positif"), &client).unwrap();
    assert_eq!(resp.status(), 200);

    let mut kinds: Vec<String> = client
        .backend()
        .requests_to("activity-peaks")
        .iter()
        .map(|url| pairs(url)[0].1.clone())
        .collect();
    kinds.sort();

    assert_eq!(kinds, vec!["daily", "hourly", "weekly"]);
    assert_eq!(
        pairs(&client.backend().requests_to("motif-sentiment")[0]),
        owned(&[("sentiment", "Positif")])
    );
}

#[test]
fn renders_motif_sentiment_rows() {
    let client = stub_client(empty_backend().with(
        "motif-sentiment",
        r#"[{"motif":"Facturation","positif":10.0,"neutre":30.0,"negatif":60.0}]"#,
    ));

    let body = body_string(handle(get("/sentiment"), &client).unwrap());

    assert!(body.contains("Facturation"));
    assert!(body.contains("60"));
}

#[test]
fn all_zero_distribution_counts_as_empty() {
    let client = stub_client(empty_backend().with(
        "sentiment-distribution",
        r#"[{"name":"Positif","value":0},{"name":"Négatif","value":0}]"#,
    ));

    let body = body_string(handle(get("/sentiment"), &client).unwrap());

    assert!(!body.contains("slice-list"));
}

#[test]
fn peaks_fragment_uses_requested_bucket() {
    let client = stub_client(empty_backend().with(
        "activity-peaks",
        r#"[{"week":"S12","volume":80,"negative":20}]"#,
    ));

    let body = body_string(handle(get("/views/activity-peaks?type=weekly&urgent=on"), &client).unwrap());

    assert!(body.contains("S12"));
    assert_eq!(
        pairs(&client.backend().requests_to("activity-peaks")[0]),
        owned(&[("type", "weekly"), ("urgent", "true")])
    );
}

#[test]
fn unknown_peak_bucket_is_bad_request() {
    let client = stub_client(empty_backend());

    let err = expect_error(handle(get("/views/activity-peaks?type=monthly"), &client));

    assert_eq!(err.status(), 400);
}

#[test]
fn peak_tabs_show_their_own_loading_indicator() {
    let client = stub_client(empty_backend());

    let body = body_string(handle(get("/sentiment"), &client).unwrap());

    for kind in ["hourly", "daily", "weekly"] {
        assert!(body.contains(&format!(r##"hx-indicator="#peaks-{kind}-loading""##)));
        assert!(body.contains(&format!(r#"<div id="peaks-{kind}-loading" class="view-placeholder htmx-indicator""#)));
    }
}
