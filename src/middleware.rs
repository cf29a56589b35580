/* src/middleware.rs */

use axum::{
    extract::{ConnectInfo, FromRequestParts, Request},
    http::request::Parts,
    response::Response,
};
use futures_util::future::BoxFuture;
use std::{
    borrow::Cow,
    convert::Infallible,
    net::SocketAddr,
    task::{Context, Poll},
};
use tower::{Layer, Service};

use crate::request::ClientRequest;
use crate::resolver::IpResolver;

/// Extension that holds the resolved client IP address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIp(pub String);

impl ClientIp {
    /// The resolved address, empty when it could not be determined.
    pub fn ip(&self) -> &str {
        &self.0
    }

    /// Whether no address could be determined.
    pub fn is_unknown(&self) -> bool {
        self.0.is_empty()
    }
}

fn connect_addr(extensions: &axum::http::Extensions) -> Cow<'_, str> {
    extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| Cow::Owned(addr.to_string()))
        .unwrap_or(Cow::Borrowed(""))
}

impl<B> ClientRequest for axum::http::Request<B> {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers().get(name).and_then(|value| value.to_str().ok())
    }

    fn remote_addr(&self) -> Cow<'_, str> {
        connect_addr(self.extensions())
    }
}

impl ClientRequest for Parts {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    fn remote_addr(&self) -> Cow<'_, str> {
        connect_addr(&self.extensions)
    }
}

/// Layer that resolves the client IP of every request.
///
/// The result is always stored as a [`ClientIp`] request extension, empty when
/// nothing qualified. Serve the router with
/// `into_make_service_with_connect_info::<SocketAddr>()` so the peer address
/// is available as the last fallback.
///
/// # Examples
///
/// ```rust,no_run
/// use axum::{Router, routing::get};
/// use publicip::{ClientIp, ClientIpLayer};
///
/// async fn handler(ip: ClientIp) -> String {
///     ip.ip().to_string()
/// }
///
/// let app: Router = Router::new()
///     .route("/", get(handler))
///     .layer(ClientIpLayer::default());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClientIpLayer {
    resolver: IpResolver,
    public_only: bool,
}

impl ClientIpLayer {
    /// Create a layer with the default resolver and remote address fallback.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom resolver configuration.
    pub fn with_resolver(resolver: IpResolver) -> Self {
        Self {
            resolver,
            public_only: false,
        }
    }

    /// Only resolve public addresses; never fall back to a private peer address.
    pub fn public_only() -> Self {
        Self::default().only_public(true)
    }

    /// Set whether the unfiltered remote address fallback is skipped.
    pub fn only_public(mut self, only: bool) -> Self {
        self.public_only = only;
        self
    }
}

impl<S> Layer<S> for ClientIpLayer {
    type Service = ClientIpService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        ClientIpService {
            inner,
            resolver: self.resolver.clone(),
            public_only: self.public_only,
        }
    }
}

/// Service that resolves client IP addresses.
#[derive(Debug, Clone)]
pub struct ClientIpService<S> {
    inner: S,
    resolver: IpResolver,
    public_only: bool,
}

impl<S> Service<Request> for ClientIpService<S>
where
    S: Service<Request, Response = Response> + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request) -> Self::Future {
        let ip = if self.public_only {
            self.resolver.client_public_ip(&req)
        } else {
            self.resolver.client_ip(&req)
        };

        req.extensions_mut().insert(ClientIp(ip));

        let future = self.inner.call(req);
        Box::pin(future)
    }
}

/// Axum extractor for the client IP.
///
/// Reads the extension set by [`ClientIpLayer`], which may be unknown (empty).
/// Only when no layer ran does it fall back to the connection peer, and to an
/// unknown value after that.
impl<S> FromRequestParts<S> for ClientIp
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(ip) = parts.extensions.get::<ClientIp>() {
            return Ok(ip.clone());
        }

        Ok(ClientIp(
            parts
                .extensions
                .get::<ConnectInfo<SocketAddr>>()
                .map(|ConnectInfo(addr)| addr.ip().to_string())
                .unwrap_or_default(),
        ))
    }
}
