use astra::{Body, ResponseBuilder};
use url::Url;

use crate::errors::{ResultResp, ServerError};

/// `302 Found` to an absolute URL, used to hand downloads to the backend.
pub fn redirect_response(location: &Url) -> ResultResp {
    ResponseBuilder::new()
        .status(302)
        .header("Location", location.as_str())
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)
}
