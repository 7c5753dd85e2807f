pub mod errors;
pub mod html;
pub mod redirect;

pub use errors::error_to_response;
pub use html::html_response;
pub use redirect::redirect_response;
