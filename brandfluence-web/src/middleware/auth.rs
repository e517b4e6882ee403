//! Bearer token authentication.
//!
//! Requests carrying `Authorization: Bearer <token>` are resolved into an
//! [`Actor`] which is attached to the request extensions. Requests without a
//! token pass through anonymously; handlers that need a caller reject them
//! through [`RequestContext::actor`](super::RequestContext::actor).

use crate::AppState;
use actix_service::{Service, Transform};
use actix_web::{
    body::{EitherBody, MessageBody},
    dev::{ServiceRequest, ServiceResponse},
    error::ErrorInternalServerError,
    http::{header::AUTHORIZATION, Method},
    web::Data,
    Error, HttpMessage, ResponseError,
};
use brandfluence_core::IdentityService;
use brandfluence_error::web::WebError;
use brandfluence_models::{constants::BEARER_TOKEN, domain::prelude::Actor};
use futures::{
    future::{ok, LocalBoxFuture, Ready},
    FutureExt,
};
use std::{
    cell::RefCell,
    rc::Rc,
    task::{Context, Poll},
};
use tracing::debug;

/// Authentication middleware factory.
pub struct Authentication;

impl<S, B> Transform<S, ServiceRequest> for Authentication
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: MessageBody,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthenticationMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(AuthenticationMiddleware {
            service: Rc::new(RefCell::new(service)),
        })
    }
}

pub struct AuthenticationMiddleware<S> {
    service: Rc<RefCell<S>>,
}

impl<S, B> Service<ServiceRequest> for AuthenticationMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: MessageBody,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = S::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        async move {
            if Method::OPTIONS == req.method() {
                return srv.call(req).await.map(|res| res.map_into_left_body());
            }
            let Some(token) = extract_bearer_token(&req).map(str::to_owned) else {
                return srv.call(req).await.map(|res| res.map_into_left_body());
            };
            let state = req
                .app_data::<Data<AppState>>()
                .cloned()
                .ok_or_else(|| ErrorInternalServerError("application state not configured"))?;

            let actor: Actor =
                match IdentityService::resolve(state.verifier(), &token, state.core().db()).await {
                    Ok(actor) => actor,
                    Err(e) => {
                        debug!(error = %e, path = req.path(), "Rejected bearer token");
                        let response = WebError::from(e).error_response();
                        return Ok(req.into_response(response).map_into_right_body());
                    }
                };
            req.extensions_mut().insert(actor);

            srv.call(req).await.map(|res| res.map_into_left_body())
        }
        .boxed_local()
    }
}

/// Extracts the bearer token from the request headers.
#[inline]
fn extract_bearer_token(req: &ServiceRequest) -> Option<&str> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix(BEARER_TOKEN)
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
