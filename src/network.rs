/* src/network.rs */

use ipnet::IpNet;
use std::net::IpAddr;
use std::sync::LazyLock;

use crate::error::{ClientIpError, Result};

/// Ranges treated as internal when no custom table is supplied.
pub const DEFAULT_PRIVATE_CIDRS: &[&str] = &[
    "10.0.0.0/8",
    "169.254.0.0/16",
    "172.16.0.0/12",
    "192.168.0.0/16",
    "fc00::/7",
    "fe80::/10",
];

static DEFAULT_NETWORKS: LazyLock<PrivateNetworks> = LazyLock::new(|| PrivateNetworks {
    networks: DEFAULT_PRIVATE_CIDRS
        .iter()
        .filter_map(|cidr| cidr.parse().ok())
        .collect(),
});

/// An immutable, ordered table of network ranges considered private.
///
/// Loopback addresses are always classified as private, whether or not the
/// table lists a loopback range.
#[derive(Debug, Clone, PartialEq)]
pub struct PrivateNetworks {
    networks: Vec<IpNet>,
}

impl Default for PrivateNetworks {
    fn default() -> Self {
        DEFAULT_NETWORKS.clone()
    }
}

impl PrivateNetworks {
    /// The process-wide default table, initialized on first use.
    pub fn global() -> &'static PrivateNetworks {
        &DEFAULT_NETWORKS
    }

    /// Build a table from already parsed ranges.
    pub fn new(networks: Vec<IpNet>) -> Self {
        Self { networks }
    }

    /// Build a table from CIDR strings such as `"10.0.0.0/8"`.
    pub fn from_cidrs<I, S>(cidrs: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let networks = cidrs
            .into_iter()
            .map(|cidr| {
                let cidr = cidr.as_ref();
                cidr.trim()
                    .parse::<IpNet>()
                    .map_err(|_| ClientIpError::InvalidNetwork(cidr.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { networks })
    }

    /// The ranges in this table, in insertion order.
    pub fn networks(&self) -> &[IpNet] {
        &self.networks
    }

    /// Whether `ip` is inside one of the ranges or is a loopback address.
    pub fn is_private_or_loopback(&self, ip: IpAddr) -> bool {
        // ::ffff:a.b.c.d is judged by its IPv4 form.
        let ip = match ip {
            IpAddr::V6(v6) => v6.to_ipv4_mapped().map(IpAddr::V4).unwrap_or(ip),
            v4 => v4,
        };

        self.networks.iter().any(|network| network.contains(&ip)) || ip.is_loopback()
    }

    /// Parse `ip` and classify it.
    ///
    /// Text that is not an IP address yields `false`: it is neither private
    /// nor loopback. Callers that must not accept such text have to check
    /// parseability themselves.
    pub fn is_private_or_loopback_str(&self, ip: &str) -> bool {
        ip.parse::<IpAddr>().is_ok_and(|ip| self.is_private_or_loopback(ip))
    }
}

/// Classify `ip` against the default table.
pub fn is_private_or_loopback(ip: IpAddr) -> bool {
    PrivateNetworks::global().is_private_or_loopback(ip)
}

/// Parse and classify `ip` against the default table. Unparsable text is `false`.
pub fn is_private_or_loopback_str(ip: &str) -> bool {
    PrivateNetworks::global().is_private_or_loopback_str(ip)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{Ipv4Addr, Ipv6Addr};

    #[test]
    fn test_default_table_is_complete() {
        assert_eq!(
            PrivateNetworks::global().networks().len(),
            DEFAULT_PRIVATE_CIDRS.len()
        );
    }

    #[test]
    fn test_private_ipv4() {
        for ip in ["127.0.0.1", "10.0.0.1", "192.168.1.1", "172.16.0.1", "169.254.10.20"] {
            assert!(is_private_or_loopback_str(ip), "{ip} should be private");
        }
        assert!(is_private_or_loopback(IpAddr::V4(Ipv4Addr::new(172, 31, 255, 255))));
    }

    #[test]
    fn test_public_ipv4() {
        assert!(!is_private_or_loopback_str("8.8.8.8"));
        assert!(!is_private_or_loopback_str("172.32.0.1"));
        assert!(!is_private_or_loopback_str("203.0.113.5"));
    }

    #[test]
    fn test_ipv6() {
        assert!(is_private_or_loopback(IpAddr::V6(Ipv6Addr::LOCALHOST)));
        assert!(is_private_or_loopback_str("fd12:3456::1"));
        assert!(is_private_or_loopback_str("fe80::1"));
        assert!(!is_private_or_loopback_str("2606:4700::1111"));
    }

    #[test]
    fn test_ipv4_mapped_ipv6() {
        assert!(is_private_or_loopback_str("::ffff:10.0.0.1"));
        assert!(is_private_or_loopback_str("::ffff:127.0.0.1"));
        assert!(!is_private_or_loopback_str("::ffff:8.8.8.8"));
    }

    #[test]
    fn test_unparsable_is_not_private() {
        assert!(!is_private_or_loopback_str(""));
        assert!(!is_private_or_loopback_str("unknown"));
        assert!(!is_private_or_loopback_str("10.0.0.1:80"));
    }

    #[test]
    fn test_custom_table() {
        let networks = PrivateNetworks::from_cidrs(["203.0.113.0/24"]).unwrap();
        assert!(networks.is_private_or_loopback_str("203.0.113.9"));
        assert!(!networks.is_private_or_loopback_str("10.0.0.1"));
        // Loopback does not depend on the table.
        assert!(networks.is_private_or_loopback_str("127.0.0.1"));

        let empty = PrivateNetworks::new(Vec::new());
        assert!(empty.is_private_or_loopback_str("::1"));
        assert!(!empty.is_private_or_loopback_str("192.168.0.1"));
    }

    #[test]
    fn test_invalid_cidr() {
        let err = PrivateNetworks::from_cidrs(["10.0.0.0/8", "not-a-network"]).unwrap_err();
        assert_eq!(err, ClientIpError::InvalidNetwork("not-a-network".to_string()));
    }
}
