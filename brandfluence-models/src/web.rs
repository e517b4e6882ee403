use actix_web::{body::BoxBody, http::StatusCode, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

/// Response code
pub enum ResponseCode {
    /// Success
    Success = 0,
    /// Error
    Error = 500,
}

/// Standard response envelope for all REST API endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct WebResponse<T> {
    /// Response code
    pub code: u16,
    /// Human-readable message describing the result
    pub message: String,
    /// Optional payload data
    pub data: Option<T>,
    #[serde(skip, default = "default_status")]
    status: StatusCode,
}

fn default_status() -> StatusCode {
    StatusCode::OK
}

impl<T> WebResponse<T> {
    /// Create a success response with data
    pub fn ok(data: T) -> Self {
        Self {
            code: ResponseCode::Success as u16,
            message: "success".into(),
            data: Some(data),
            status: StatusCode::OK,
        }
    }

    /// Create a success response for a newly created resource (HTTP 201)
    pub fn created(data: T) -> Self {
        Self {
            code: ResponseCode::Success as u16,
            message: "created".into(),
            data: Some(data),
            status: StatusCode::CREATED,
        }
    }

    /// Create an empty success response (no data)
    pub fn ok_empty() -> WebResponse<()> {
        WebResponse {
            code: ResponseCode::Success as u16,
            message: "success".into(),
            data: None,
            status: StatusCode::OK,
        }
    }

    /// Create an error response with message
    pub fn error(message: &str) -> Self {
        Self {
            code: ResponseCode::Error as u16,
            message: message.into(),
            data: None,
            status: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl<T> Responder for WebResponse<T>
where
    T: Serialize,
{
    type Body = BoxBody;

    fn respond_to(self, _req: &actix_web::HttpRequest) -> HttpResponse<BoxBody> {
        HttpResponse::build(self.status).json(&self)
    }
}
