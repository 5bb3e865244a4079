//! The authenticated identity resolved by the external auth provider.
//!
//! Session issuance, token refresh and the OAuth handshake are the
//! provider's business; the core only reads the identity stored in the
//! session cookie and threads it explicitly into every service call.

use actix_identity::Identity;
use actix_web::dev::Payload;
use actix_web::error::ErrorUnauthorized;
use actix_web::{Error, FromRequest, HttpRequest};
use serde::{Deserialize, Serialize};
use std::future::{Ready, ready};

/// Identity of the caller as asserted by the auth provider.
///
/// `sub` is the provider's id for this identity; the matching local profile
/// (with role) is looked up per operation by the service layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub sub: String,
    pub email: String,
    pub name: String,
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let resolved = Identity::from_request(req, payload)
            .into_inner()
            .and_then(|identity| identity.id().map_err(ErrorUnauthorized))
            .and_then(|raw| {
                serde_json::from_str::<AuthenticatedUser>(&raw)
                    .map_err(|_| ErrorUnauthorized("invalid session identity"))
            });
        ready(resolved)
    }
}
