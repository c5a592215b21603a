use thiserror::Error;

/// Failure of a call to the backend tender API.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("сервер недоступен: {0}")]
    Network(String),

    #[error("сервер ответил {status}: {body}")]
    Status { status: u16, body: String },

    #[error("некорректный ответ сервера: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
