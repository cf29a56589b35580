/* src/resolver.rs */

use std::net::IpAddr;

use tracing::{debug, trace};

use crate::addr::split_host_port;
use crate::network::PrivateNetworks;
use crate::request::ClientRequest;

/// Header carrying the proxy chain, original client first.
pub const X_FORWARDED_FOR: &str = "x-forwarded-for";
/// Header set by a single reverse proxy (nginx, haproxy).
pub const X_REAL_IP: &str = "x-real-ip";

/// Configuration for client IP resolution.
#[derive(Debug, Clone, Default)]
pub struct IpResolver {
    /// Ranges considered internal.
    pub networks: PrivateNetworks,
    /// Whether a candidate that does not parse as an IP address may be returned.
    pub accept_unparsable: bool,
}

impl IpResolver {
    /// Create a resolver using the default private network table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different private network table.
    pub fn with_networks(mut self, networks: PrivateNetworks) -> Self {
        self.networks = networks;
        self
    }

    /// Set whether non-address candidates count as public.
    ///
    /// Off by default. When on, any non-empty header token that is not a
    /// private address is returned, including tokens such as `unknown`.
    pub fn accept_unparsable(mut self, accept: bool) -> Self {
        self.accept_unparsable = accept;
        self
    }

    /// Best-effort public client IP, or an empty string.
    ///
    /// Walks `X-Forwarded-For` left to right, then `X-Real-Ip`, then the host
    /// of the remote address, returning the first candidate that is not a
    /// private or loopback address.
    pub fn client_public_ip<R: ClientRequest + ?Sized>(&self, req: &R) -> String {
        if let Some(forwarded) = req.header(X_FORWARDED_FOR) {
            for candidate in forwarded.split(',').map(str::trim) {
                if self.is_public(candidate) {
                    debug!(ip = candidate, "client ip from x-forwarded-for");
                    return candidate.to_string();
                }
                trace!(candidate, "skipping x-forwarded-for entry");
            }
        }

        if let Some(real_ip) = req.header(X_REAL_IP).map(str::trim) {
            if self.is_public(real_ip) {
                debug!(ip = real_ip, "client ip from x-real-ip");
                return real_ip.to_string();
            }
            trace!(candidate = real_ip, "skipping x-real-ip");
        }

        let remote_addr = req.remote_addr();
        if let Ok((host, _)) = split_host_port(remote_addr.trim()) {
            if self.is_public(host) {
                debug!(ip = host, "client ip from remote address");
                return host.to_string();
            }
        }

        debug!(remote_addr = %remote_addr, "no public client ip found");
        String::new()
    }

    /// Public IP if one can be found, otherwise the remote address host.
    pub fn client_ip<R: ClientRequest + ?Sized>(&self, req: &R) -> String {
        let ip = self.client_public_ip(req);
        if ip.is_empty() { remote_ip(req) } else { ip }
    }

    fn is_public(&self, candidate: &str) -> bool {
        if candidate.is_empty() {
            return false;
        }
        match candidate.parse::<IpAddr>() {
            Ok(ip) => !self.networks.is_private_or_loopback(ip),
            Err(_) => self.accept_unparsable,
        }
    }
}

/// Host part of the request's remote address without any filtering, or an
/// empty string when it is not in `host:port` form.
pub fn remote_ip<R: ClientRequest + ?Sized>(req: &R) -> String {
    split_host_port(req.remote_addr().trim())
        .map(|(host, _)| host.to_string())
        .unwrap_or_default()
}

/// Resolve the public client IP with the default configuration.
///
/// # Examples
///
/// ```rust
/// use publicip::{client_public_ip, RawRequest};
///
/// let req = RawRequest::new("10.0.0.2:51234")
///     .with_header("X-Forwarded-For", "192.168.1.10, 203.0.113.7, 10.0.0.1");
///
/// assert_eq!(client_public_ip(&req), "203.0.113.7");
/// ```
pub fn client_public_ip<R: ClientRequest + ?Sized>(req: &R) -> String {
    IpResolver::default().client_public_ip(req)
}

/// Resolve the public client IP, falling back to [`remote_ip`].
///
/// ```rust
/// use publicip::{client_ip, RawRequest};
///
/// let req = RawRequest::new("127.0.0.1:8080").with_header("X-Real-Ip", "10.1.2.3");
/// assert_eq!(client_ip(&req), "127.0.0.1");
/// ```
pub fn client_ip<R: ClientRequest + ?Sized>(req: &R) -> String {
    IpResolver::default().client_ip(req)
}
