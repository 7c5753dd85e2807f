use crate::router::handle;
use crate::tests::utils::{empty_backend, get, owned, pairs, stub_client};
use url::Url;

#[test]
fn redirects_to_backend_export() {
    let client = stub_client(empty_backend());

    let resp = handle(
        get("/export?startDate=2024-01-01&columns=date&columns=motif&sentiment=%28Tous%29"),
        &client,
    )
    .unwrap();

    assert_eq!(resp.status(), 302);
    let location = Url::parse(resp.headers()["Location"].to_str().unwrap()).unwrap();
    assert_eq!(location.path(), "/api/export");
    assert_eq!(
        pairs(&location),
        owned(&[("columns", "date,motif"), ("startDate", "2024-01-01")])
    );
    assert!(client.backend().requests().is_empty());
}

#[test]
fn no_columns_means_no_columns_param() {
    let client = stub_client(empty_backend());

    let resp = handle(get("/export?urgent=on"), &client).unwrap();

    let location = resp.headers()["Location"].to_str().unwrap().to_string();
    assert_eq!(location, "http://backend.test/api/export?urgent=true");
}
