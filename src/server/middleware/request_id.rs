//! Request ID middleware

use super::helpers::{REQUEST_ID_HEADER, incoming_request_id};
use crate::utils::error::GatewayError;
use crate::utils::generate_request_id;
use actix_web::HttpMessage;
use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::http::header::{HeaderName, HeaderValue};
use futures::future::{Ready, ready};
use std::future::Future;
use std::pin::Pin;
use tracing::debug;

/// Request id attached to the request extensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(pub String);

/// Request ID middleware for Actix-web
///
/// Keeps a well-formed `x-request-id` sent by the caller, otherwise mints a
/// new one, and stamps it on both the request and the response. Gateway
/// error bodies are rebuilt so their `request_id` matches the header.
pub struct RequestIdMiddleware;

impl<S, B> Transform<S, ServiceRequest> for RequestIdMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = RequestIdMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestIdMiddlewareService { service }))
    }
}

/// Service implementation for request ID middleware
pub struct RequestIdMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequestIdMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, mut req: ServiceRequest) -> Self::Future {
        let request_id = incoming_request_id(req.headers()).unwrap_or_else(generate_request_id);
        let header_name = HeaderName::from_static(REQUEST_ID_HEADER);
        let header_value = HeaderValue::from_str(&request_id)
            .unwrap_or_else(|_| HeaderValue::from_static("invalid"));

        req.headers_mut()
            .insert(header_name.clone(), header_value.clone());
        req.extensions_mut().insert(RequestId(request_id.clone()));

        debug!("Processing request: {}", request_id);

        let fut = self.service.call(req);
        Box::pin(async move {
            let res = fut.await?;

            let tagged = res
                .response()
                .error()
                .and_then(|err| err.as_error::<GatewayError>())
                .map(|err| err.response_for_request(Some(request_id)));

            let mut res = match tagged {
                Some(body) => res.into_response(body).map_into_right_body(),
                None => res.map_into_left_body(),
            };
            res.headers_mut().insert(header_name, header_value);
            Ok(res)
        })
    }
}
