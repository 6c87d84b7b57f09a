//! API key middleware
//!
//! Rejects requests to protected resources before the handler runs, so no
//! body is read, nothing is staged and no provider is called for an
//! unauthenticated caller.

use super::helpers::extract_api_key;
use crate::server::state::AppState;
use crate::utils::error::GatewayError;
use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::web;
use futures::future::{Ready, ready};
use std::future::Future;
use std::pin::Pin;
use tracing::{debug, error};

/// Requires a valid `X-API-Key` on the wrapped resource
pub struct ApiKeyAuth;

impl<S, B> Transform<S, ServiceRequest> for ApiKeyAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = ApiKeyAuthService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ApiKeyAuthService { service }))
    }
}

/// Service implementation for the API key middleware
pub struct ApiKeyAuthService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for ApiKeyAuthService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let verdict = match req.app_data::<web::Data<AppState>>() {
            Some(state) => state
                .gate
                .verify(extract_api_key(req.headers()))
                .map(|_| ()),
            None => {
                error!("Application state missing; rejecting request");
                Err(GatewayError::internal("Application state not configured"))
            }
        };

        if let Err(e) = verdict {
            let response = req.error_response(e).map_into_right_body();
            return Box::pin(async move { Ok(response) });
        }

        debug!(path = req.path(), "API key accepted");

        let fut = self.service.call(req);
        Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) })
    }
}
