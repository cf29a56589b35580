/* src/lib.rs */
//! # Public Client IP
//!
//! Best-effort resolution of the public client IP address of an HTTP request
//! behind reverse proxies.
//!
//! ## Features
//!
//! - Walk `X-Forwarded-For` left to right, then `X-Real-Ip`, then the remote address
//! - Skip private (RFC 1918, link-local, unique-local) and loopback addresses
//! - Injectable private network table
//! - Unfiltered remote address fallback and list deduplication helpers
//! - Optional Axum layer and extractor via the `axum` feature
//!
//! Failure is never an error: resolvers return an empty string when no
//! address can be determined.
//!
//! ## Examples
//!
//! ```rust
//! use publicip::{client_public_ip, remote_ip, RawRequest};
//!
//! let req = RawRequest::new("10.0.0.2:40112")
//!     .with_header("X-Forwarded-For", "203.0.113.9, 10.0.0.1");
//! assert_eq!(client_public_ip(&req), "203.0.113.9");
//!
//! let internal = RawRequest::new("192.168.1.5:40112");
//! assert_eq!(client_public_ip(&internal), "");
//! assert_eq!(remote_ip(&internal), "192.168.1.5");
//! ```

pub mod addr;
pub mod dedup;
pub mod error;
pub mod network;
pub mod request;
pub mod resolver;

#[cfg(feature = "axum")]
pub mod middleware;

pub use addr::split_host_port;
pub use dedup::dedup;
pub use error::{ClientIpError, Result};
pub use network::{
    DEFAULT_PRIVATE_CIDRS, PrivateNetworks, is_private_or_loopback, is_private_or_loopback_str,
};
pub use request::{ClientRequest, HeaderMap, RawRequest};
pub use resolver::{IpResolver, client_ip, client_public_ip, remote_ip};

#[cfg(feature = "axum")]
pub use middleware::{ClientIp, ClientIpLayer, ClientIpService};

/// Re-export commonly used types
pub use ipnet::IpNet;
pub use std::net::IpAddr;
