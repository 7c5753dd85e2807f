use astra::{Body, Response, ResponseBuilder};

use crate::errors::ServerError;
use crate::templates::components::error_page;

/// Turns a route error into its HTML error page.
pub fn error_to_response(err: ServerError) -> Response {
    let status = err.status();

    if status >= 500 {
        log::error!("{err}");
    } else {
        log::warn!("{err}");
    }

    let page = error_page(status, &err.to_string()).into_string();

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(page))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
