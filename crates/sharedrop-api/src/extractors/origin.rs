//! `ClientOrigin` extractor: the network address a request is attributed to.

use std::convert::Infallible;
use std::net::SocketAddr;

use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::HeaderMap;
use axum::http::request::Parts;

use sharedrop_service::RequestContext;

use crate::state::AppState;

/// Placeholder when neither a forwarded header nor a peer address is known.
const UNKNOWN_ORIGIN: &str = "unknown";

/// The caller's origin address, ready to become a [`RequestContext`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOrigin(pub String);

impl ClientOrigin {
    /// Builds the service-level context for this origin.
    pub fn context(&self) -> RequestContext {
        RequestContext::new(self.0.clone())
    }
}

impl FromRequestParts<AppState> for ClientOrigin {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| *addr);

        Ok(Self(resolve_origin(
            &parts.headers,
            peer,
            state.server.trust_forwarded_for,
        )))
    }
}

/// First `X-Forwarded-For` entry when trusted, else the peer IP.
pub fn resolve_origin(
    headers: &HeaderMap,
    peer: Option<SocketAddr>,
    trust_forwarded_for: bool,
) -> String {
    if trust_forwarded_for {
        let forwarded = headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|v| !v.is_empty());
        if let Some(addr) = forwarded {
            return addr.to_string();
        }
    }

    peer.map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| UNKNOWN_ORIGIN.to_string())
}
