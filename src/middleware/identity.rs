use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorUnauthorized,
    Error, HttpMessage,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
};
use uuid::Uuid;

use crate::models::user::UserRef;

/// Caller identity asserted by the authenticating front proxy. This service
/// does not verify credentials itself; it trusts the identity headers the
/// proxy injects after stripping them from outside traffic.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: Uuid,
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
    pub is_admin: bool,
}

impl Identity {
    pub fn user_ref(&self) -> UserRef {
        UserRef {
            id: self.user_id,
            name: self.name.clone(),
            email: self.email.clone(),
            avatar: self.avatar.clone(),
        }
    }
}

fn header_value(req: &ServiceRequest, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

/// Extract the identity from the trusted headers. Fails when the user id is
/// missing or malformed; name and email fall back to placeholders so a
/// minimal proxy configuration still works.
pub fn identity_from_request(req: &ServiceRequest) -> Result<Identity, Error> {
    let user_id = header_value(req, "x-user-id")
        .ok_or_else(|| ErrorUnauthorized("Missing identity"))
        .and_then(|raw| {
            Uuid::parse_str(&raw).map_err(|_| ErrorUnauthorized("Malformed user id"))
        })?;
    let name = header_value(req, "x-user-name").unwrap_or_else(|| "unknown".to_string());
    let email = header_value(req, "x-user-email").unwrap_or_default();
    let avatar = header_value(req, "x-user-avatar");
    let is_admin = header_value(req, "x-user-admin")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);

    Ok(Identity {
        user_id,
        name,
        email,
        avatar,
        is_admin,
    })
}

pub struct IdentityMiddleware;

impl<S, B> Transform<S, ServiceRequest> for IdentityMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = IdentityMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(IdentityMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

pub struct IdentityMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for IdentityMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        let identity = match identity_from_request(&req) {
            Ok(identity) => identity,
            Err(e) => return Box::pin(async move { Err(e) }),
        };

        req.extensions_mut().insert(identity);

        Box::pin(async move { service.call(req).await })
    }
}
