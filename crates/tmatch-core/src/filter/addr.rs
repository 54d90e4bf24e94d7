//! Address token parsing
//!
//! One textual match token names an optional IP literal, an optional port,
//! or both joined by `@`: `10.0.0.1`, `10.0.0.1@8080`, `@8080`, `::1@443`.

use crate::error::{Error, Result};
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

/// One parsed match token: an optional IP literal and/or an optional port.
///
/// Both fields unset represents the empty token. Immutable once parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NetAddr {
    /// IP component, if the token named one
    pub ip: Option<IpAddr>,
    /// Port component, if the token named one
    pub port: Option<u16>,
}

impl NetAddr {
    /// The all-unset token
    pub const EMPTY: NetAddr = NetAddr {
        ip: None,
        port: None,
    };

    /// Presence signature: (has-IP, has-port)
    pub fn presence(&self) -> (bool, bool) {
        (self.ip.is_some(), self.port.is_some())
    }

    /// True when neither field is set
    pub fn is_empty(&self) -> bool {
        self.ip.is_none() && self.port.is_none()
    }
}

impl FromStr for NetAddr {
    type Err = Error;

    /// Parse one token. Split on the first `@`; the right side must be a
    /// decimal port in 0..=65535, the left side (or the whole token when no
    /// `@` is present) must be an IP literal or empty. Bare digits without
    /// `@` are rejected.
    fn from_str(token: &str) -> Result<Self> {
        let (ip_part, port_part) = match token.split_once('@') {
            Some((ip, port)) => (ip, Some(port)),
            None => (token, None),
        };

        let port = match port_part {
            Some(p) => Some(p.parse::<u16>().map_err(|_| Error::invalid_token(token))?),
            None => None,
        };

        let ip = if ip_part.contains(['.', ':']) {
            Some(
                ip_part
                    .parse::<IpAddr>()
                    .map_err(|_| Error::invalid_token(token))?,
            )
        } else if ip_part.is_empty() {
            None
        } else {
            // Non-empty, no IP-indicating characters. With a port this is a
            // garbage host part; without one it is a bare word (including
            // bare digits), which the grammar does not accept.
            return Err(Error::invalid_token(token));
        };

        Ok(NetAddr { ip, port })
    }
}

impl fmt::Display for NetAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.ip, self.port) {
            (Some(ip), Some(port)) => write!(f, "{ip}@{port}"),
            (Some(ip), None) => write!(f, "{ip}"),
            (None, Some(port)) => write!(f, "@{port}"),
            (None, None) => Ok(()),
        }
    }
}
