use crate::api::ApiError;
use crate::resource::{Loadable, Resource};

#[test]
fn starts_loading() {
    let resource: Resource<Vec<u32>> = Resource::new("test");

    assert!(resource.state().is_loading());
}

#[test]
fn settles_latest_ticket() {
    let resource = Resource::new("test");
    let ticket = resource.begin();

    assert!(resource.settle(ticket, Ok(vec![1, 2])));
    assert_eq!(resource.state(), Loadable::Ready(vec![1, 2]));
}

#[test]
fn stale_response_is_discarded() {
    let resource = Resource::new("test");
    let first = resource.begin();
    let second = resource.begin();

    assert!(second.seq() > first.seq());

    // The newer request answers first, then the older one arrives late.
    assert!(resource.settle(second, Ok(vec!["new"])));
    assert!(!resource.settle(first, Ok(vec!["old"])));

    assert_eq!(resource.state(), Loadable::Ready(vec!["new"]));
}

#[test]
fn stale_failure_does_not_clobber_data() {
    let resource = Resource::new("test");
    let first = resource.begin();
    let second = resource.begin();

    resource.settle(second, Ok(7));
    resource.settle(first, Err(ApiError::Network("reset".into())));

    assert_eq!(resource.into_state(), Loadable::Ready(7));
}

#[test]
fn failed_fetch_settles_failed() {
    let resource: Resource<Vec<u8>> = Resource::new("test");

    assert!(resource.refresh(|| Err(ApiError::Status {
        status: 503,
        body: String::new(),
    })));
    assert_eq!(resource.state(), Loadable::Failed);
}

#[test]
fn new_request_goes_back_to_loading() {
    let resource = Resource::new("test");
    resource.refresh(|| Ok(1));

    resource.begin();

    assert!(resource.state().is_loading());
}
