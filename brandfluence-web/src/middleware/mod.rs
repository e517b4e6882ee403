pub(crate) mod auth;
pub(crate) mod cors;

use actix_web::{dev::Payload, Error, FromRequest, HttpMessage, HttpRequest};
use brandfluence_error::{web::WebError, WebResult};
use brandfluence_models::domain::prelude::Actor;
use futures::future::{ready, Ready};

/// Caller resolved by [`auth::Authentication`], if a bearer token was sent.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestContext {
    pub actor: Option<Actor>,
}

impl RequestContext {
    /// The authenticated caller; `401` for anonymous requests.
    #[inline]
    pub fn actor(&self) -> WebResult<&Actor> {
        self.actor.as_ref().ok_or(WebError::Unauthorized)
    }
}

impl FromRequest for RequestContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Ok(RequestContext {
            actor: req.extensions().get::<Actor>().copied(),
        }))
    }
}
