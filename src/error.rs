use crate::{dto::output, repository, service::mail_service::MailError};
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("validation error: {0}")]
    Validation(&'static str),

    #[error("invalid body: {0}")]
    Body(#[from] JsonRejection),

    #[error("ticket not exist")]
    TicketNotExist,

    #[error("ticket already complete")]
    TicketAlreadyComplete,

    #[error("mail error: {0}")]
    Mail(#[from] MailError),

    #[error("storage error: {0}")]
    Storage(#[from] repository::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::warn!(err = %self);

        let (status, error) = match &self {
            Error::Validation(message) => (StatusCode::BAD_REQUEST, *message),
            Error::Body(_) => (StatusCode::BAD_REQUEST, "invalid request body"),
            Error::TicketNotExist => (StatusCode::NOT_FOUND, "ticket not found"),
            Error::TicketAlreadyComplete => (StatusCode::BAD_REQUEST, "ticket is already complete"),
            Error::Mail(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "failed to send notification",
            ),
            Error::Storage(_) => (StatusCode::INTERNAL_SERVER_ERROR, "failed to store ticket"),
        };

        let body = output::Error {
            error,
            details: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn validation_bad_request() {
        let response = Error::Validation("missing required fields").into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn ticket_not_exist_not_found() {
        let response = Error::TicketNotExist.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn ticket_already_complete_bad_request() {
        let response = Error::TicketAlreadyComplete.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn storage_internal_server_error() {
        let response = Error::Storage(repository::Error::InsertUniqueViolation).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
