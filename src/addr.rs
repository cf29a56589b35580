/* src/addr.rs */

use crate::error::{ClientIpError, Result};

/// Split `host:port` (or `[host]:port`) into its host and port parts.
///
/// The port is not validated and may be empty. IPv6 hosts must be bracketed.
///
/// ```rust
/// use publicip::split_host_port;
///
/// assert_eq!(split_host_port("203.0.113.5:443").unwrap(), ("203.0.113.5", "443"));
/// assert_eq!(split_host_port("[::1]:80").unwrap(), ("::1", "80"));
/// assert!(split_host_port("203.0.113.5").is_err());
/// ```
pub fn split_host_port(hostport: &str) -> Result<(&str, &str)> {
    let Some(colon) = hostport.rfind(':') else {
        return Err(ClientIpError::MissingPort(hostport.to_string()));
    };

    let (host, host_start, host_end) = if hostport.starts_with('[') {
        let Some(close) = hostport.find(']') else {
            return Err(ClientIpError::MissingBracket(hostport.to_string()));
        };
        if close + 1 != colon {
            // Either nothing follows `]`, or something other than the final colon does.
            return Err(if hostport.as_bytes().get(close + 1) == Some(&b':') {
                ClientIpError::TooManyColons(hostport.to_string())
            } else {
                ClientIpError::MissingPort(hostport.to_string())
            });
        }
        (&hostport[1..close], 1, close + 1)
    } else {
        let host = &hostport[..colon];
        if host.contains(':') {
            return Err(ClientIpError::TooManyColons(hostport.to_string()));
        }
        (host, 0, 0)
    };

    if hostport[host_start..].contains('[') || hostport[host_end..].contains(']') {
        return Err(ClientIpError::UnexpectedBracket(hostport.to_string()));
    }

    Ok((host, &hostport[colon + 1..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_ipv4() {
        assert_eq!(split_host_port("203.0.113.5:443"), Ok(("203.0.113.5", "443")));
    }

    #[test]
    fn test_split_bracketed_ipv6() {
        assert_eq!(split_host_port("[2001:db8::1]:8080"), Ok(("2001:db8::1", "8080")));
    }

    #[test]
    fn test_split_empty_port_and_host() {
        assert_eq!(split_host_port("example.com:"), Ok(("example.com", "")));
        assert_eq!(split_host_port(":80"), Ok(("", "80")));
    }

    #[test]
    fn test_missing_port() {
        assert!(matches!(
            split_host_port("203.0.113.5"),
            Err(ClientIpError::MissingPort(_))
        ));
        assert!(matches!(
            split_host_port("[::1]"),
            Err(ClientIpError::MissingPort(_))
        ));
        assert!(matches!(split_host_port(""), Err(ClientIpError::MissingPort(_))));
    }

    #[test]
    fn test_unbracketed_ipv6_rejected() {
        assert!(matches!(
            split_host_port("::1:80"),
            Err(ClientIpError::TooManyColons(_))
        ));
        assert!(matches!(
            split_host_port("[::1]:80:90"),
            Err(ClientIpError::TooManyColons(_))
        ));
    }

    #[test]
    fn test_bad_brackets() {
        assert!(matches!(
            split_host_port("[::1:80"),
            Err(ClientIpError::MissingBracket(_))
        ));
        assert!(matches!(
            split_host_port("host]:80"),
            Err(ClientIpError::UnexpectedBracket(_))
        ));
        assert!(matches!(
            split_host_port("[[::1]:80"),
            Err(ClientIpError::UnexpectedBracket(_))
        ));
    }
}
