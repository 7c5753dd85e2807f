use astra::Response;
use thiserror::Error;

/// Errors a route can end with. Backend failures never show up here: they
/// stop at the view that requested the data.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Page introuvable")]
    NotFound,
    #[error("Requête invalide : {0}")]
    BadRequest(String),
    #[error("Erreur interne du serveur")]
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::InternalError => 500,
        }
    }
}

pub type ResultResp = Result<Response, ServerError>;
