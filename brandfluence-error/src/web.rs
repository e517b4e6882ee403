use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use crate::{domain::DomainError, storage::StorageError, BFError};

#[derive(Error, Debug)]
pub enum WebError {
    #[error("Unauthorized")]
    Unauthorized,
    #[error("BadRequest: `{0}`")]
    BadRequest(String),
    #[error("`{0}` not found")]
    NotFound(String),
    #[error("Forbidden: `{0}`")]
    Forbidden(String),
    #[error("Conflict: `{0}`")]
    Conflict(String),
    #[error("UnprocessableEntity: `{0}`")]
    UnprocessableEntity(String),
    #[error("InternalError: `{0}`")]
    InternalError(String),
    #[error("DBError")]
    StorageError(#[from] StorageError),
}

impl From<DomainError> for WebError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Unauthenticated => WebError::Unauthorized,
            DomainError::InactiveAccount => WebError::Forbidden("account is inactive".into()),
            DomainError::Forbidden(msg) => WebError::Forbidden(msg),
            DomainError::NotFound(what) => WebError::NotFound(what),
            DomainError::Conflict(msg) => WebError::Conflict(msg),
            DomainError::InvalidInput(msg) => WebError::BadRequest(msg),
            transition @ DomainError::InvalidTransition { .. } => {
                WebError::UnprocessableEntity(transition.to_string())
            }
            DomainError::Storage(inner) => {
                tracing::error!(error = %inner, "storage failure while handling request");
                WebError::StorageError(inner)
            }
        }
    }
}

impl From<BFError> for WebError {
    fn from(e: BFError) -> Self {
        match e {
            BFError::DomainError(err) => WebError::from(err),
            BFError::StorageError(StorageError::EntityNotFound(msg)) => WebError::NotFound(msg),
            other => {
                tracing::error!(error = %other, "internal failure while handling request");
                WebError::InternalError("internal error".into())
            }
        }
    }
}

impl From<std::io::Error> for WebError {
    fn from(e: std::io::Error) -> Self {
        tracing::error!(error = %e, "io failure while handling request");
        WebError::InternalError("internal error".into())
    }
}

impl ResponseError for WebError {
    fn error_response(&self) -> HttpResponse {
        let mut body = json!({
            "message": self.to_string()
        });
        match self {
            WebError::Unauthorized => {
                body["error"] = json!("Unauthorized");
                HttpResponse::Unauthorized().json(body)
            }
            WebError::BadRequest(_) => {
                body["error"] = json!("Bad Request");
                HttpResponse::BadRequest().json(body)
            }
            WebError::NotFound(_) => {
                body["error"] = json!("Not Found");
                HttpResponse::NotFound().json(body)
            }
            WebError::Forbidden(_) => {
                body["error"] = json!("Forbidden");
                HttpResponse::Forbidden().json(body)
            }
            WebError::Conflict(_) => {
                body["error"] = json!("Conflict");
                HttpResponse::Conflict().json(body)
            }
            WebError::UnprocessableEntity(_) => {
                body["error"] = json!("Unprocessable Entity");
                HttpResponse::UnprocessableEntity().json(body)
            }
            WebError::InternalError(_) => {
                body["error"] = json!("Internal Server Error");
                HttpResponse::InternalServerError().json(body)
            }
            WebError::StorageError(_) => {
                // Never leak storage details across the boundary
                body["message"] = json!("internal error");
                body["error"] = json!("Storage Error");
                HttpResponse::InternalServerError().json(body)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_domain_errors_map_to_status_codes() {
        let cases = [
            (DomainError::Unauthenticated, StatusCode::UNAUTHORIZED),
            (DomainError::InactiveAccount, StatusCode::FORBIDDEN),
            (DomainError::forbidden("x"), StatusCode::FORBIDDEN),
            (DomainError::not_found("task"), StatusCode::NOT_FOUND),
            (DomainError::conflict("dup"), StatusCode::CONFLICT),
            (DomainError::invalid("budget"), StatusCode::BAD_REQUEST),
            (
                DomainError::transition("campaign", "completed", "draft"),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                DomainError::Storage(StorageError::StorageUnavailable),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (domain, status) in cases {
            let web = WebError::from(domain);
            assert_eq!(web.error_response().status(), status);
        }
    }
}
