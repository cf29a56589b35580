/* src/request.rs */

use std::borrow::Cow;
use std::collections::HashMap;

/// Type alias for header maps. Keys are matched case-insensitively.
pub type HeaderMap = HashMap<String, String>;

/// The parts of an HTTP request that client IP resolution reads.
pub trait ClientRequest {
    /// First value of the header `name`, looked up case-insensitively.
    fn header(&self, name: &str) -> Option<&str>;

    /// Transport peer address in `host:port` form, or empty when unknown.
    fn remote_addr(&self) -> Cow<'_, str>;
}

impl<T: ClientRequest + ?Sized> ClientRequest for &T {
    fn header(&self, name: &str) -> Option<&str> {
        (**self).header(name)
    }

    fn remote_addr(&self) -> Cow<'_, str> {
        (**self).remote_addr()
    }
}

/// A framework-independent request: a header map and the peer address.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRequest {
    /// Header values keyed by name. [`RawRequest::with_header`] stores names
    /// lowercased; keys inserted directly should be lowercase too.
    pub headers: HeaderMap,
    /// Peer address in `host:port` form.
    pub remote_addr: String,
}

impl RawRequest {
    /// Create a request with no headers from the peer address.
    pub fn new(remote_addr: impl Into<String>) -> Self {
        Self {
            headers: HeaderMap::new(),
            remote_addr: remote_addr.into(),
        }
    }

    /// Add a header, replacing any existing value with the same name in any case.
    pub fn with_header(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.headers.insert(name.as_ref().to_ascii_lowercase(), value.into());
        self
    }
}

impl ClientRequest for RawRequest {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .or_else(|| {
                self.headers
                    .iter()
                    .find(|(key, _)| key.eq_ignore_ascii_case(name))
                    .map(|(_, value)| value)
            })
            .map(String::as_str)
    }

    fn remote_addr(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.remote_addr)
    }
}
