use crate::router::handle;
use crate::tests::utils::{body_string, empty_backend, get, owned, pairs, stub_client};

const PAGE_ONE: &str = r#"{"total":47,"page":1,"limit":15,"data":[
    {"date":"2024-03-01","full_text":"Plus de réseau depuis hier","motif":"Réseau",
     "sentiment_norm":"Négatif","is_urgent":true,"churn_risk":"élevé"}
]}"#;

#[test]
fn tweets_request_carries_page_and_filters_only() {
    let client = stub_client(empty_backend().with("tweets", PAGE_ONE));

    handle(get("/data?sentiment=N%C3%A9gatif&urgent=true&motif=%28Tous%29"), &client).unwrap();

    assert_eq!(
        pairs(&client.backend().requests_to("tweets")[0]),
        owned(&[
            ("page", "1"),
            ("limit", "15"),
            ("sentiment", "Négatif"),
            ("urgent", "true"),
        ])
    );
}

#[test]
fn renders_rows_and_pager() {
    let client = stub_client(empty_backend().with("tweets", PAGE_ONE));

    let body = body_string(handle(get("/data"), &client).unwrap());

    assert!(body.contains("Plus de réseau depuis hier"));
    assert!(body.contains("Affichage de 1 sur 47 tweets"));
    assert!(body.contains("Page 1 sur 4"));
    assert!(body.contains("/views/tweets?page=2&amp;limit=15"));
    assert!(body.contains("Télécharger CSV"));
}

#[test]
fn last_page_has_no_next_link() {
    let client = stub_client(empty_backend().with("tweets", PAGE_ONE));

    let body = body_string(handle(get("/views/tweets?page=4&limit=15"), &client).unwrap());

    assert!(body.contains("Page 4 sur 4"));
    assert!(body.contains("/views/tweets?page=3&amp;limit=15"));
    assert!(!body.contains("page=5"));
}

#[test]
fn empty_table_shows_explorer_message() {
    let client = stub_client(empty_backend());

    let body = body_string(handle(get("/data"), &client).unwrap());

    assert!(body.contains("Aucun tweet trouvé pour ces filtres."));
    assert!(!body.contains("Suivant"));
}

#[test]
fn page_size_select_joins_filter_form() {
    let client = stub_client(empty_backend().with("tweets", PAGE_ONE));

    let body = body_string(handle(get("/data?page=3&limit=50"), &client).unwrap());

    assert!(body.contains(r#"<select id="limit" name="limit" form="filter-form">"#));
    assert!(body.contains(r#"<option value="50" selected>50</option>"#));
    assert!(body.contains(r##"hx-include="#limit""##));
    assert!(!body.contains(r#"name="page""#));
}

#[test]
fn table_swaps_show_loading_indicator() {
    let client = stub_client(empty_backend().with("tweets", PAGE_ONE));

    let body = body_string(handle(get("/data"), &client).unwrap());

    assert!(body.contains(r##"id="tweets-loading" class="view-placeholder htmx-indicator""##));
    assert!(body.contains("Chargement..."));
    assert_eq!(body.matches(r##"hx-indicator="#tweets-loading""##).count(), 2);
    assert!(body.contains(r##"hx-sync="#tweets-view:replace""##));
}

#[test]
fn reset_link_only_when_filtered() {
    let client = stub_client(empty_backend());

    let filtered = body_string(handle(get("/data?motif=Prix"), &client).unwrap());
    let unfiltered = body_string(handle(get("/data?motif=%28Tous%29"), &client).unwrap());

    assert!(filtered.contains(r#"<a class="filter-reset" href="/data">Réinitialiser</a>"#));
    assert!(!unfiltered.contains("Réinitialiser"));
}

#[test]
fn unknown_limit_falls_back_to_fifteen() {
    let client = stub_client(empty_backend());

    handle(get("/views/tweets?limit=7"), &client).unwrap();

    assert_eq!(
        pairs(&client.backend().requests_to("tweets")[0]),
        owned(&[("page", "1"), ("limit", "15")])
    );
}
