//! Actor identity extractor.
//!
//! Derives the audit actor for write operations from the caller's session
//! header. Unidentified callers act as `"system"`; the extractor never
//! rejects a request.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use std::convert::Infallible;

/// Header carrying the session actor identity.
pub const ACTOR_HEADER: &str = "X-Actor";

/// Actor recorded when the caller is unauthenticated or unidentified.
pub const SYSTEM_ACTOR: &str = "system";

/// The audit actor for the current request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for Actor
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let actor = parts
            .headers
            .get(ACTOR_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(SYSTEM_ACTOR)
            .to_string();

        Ok(Actor(actor))
    }
}
