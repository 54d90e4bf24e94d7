//! Error types for tmatch-core
//!
//! Centralized error handling using `thiserror` for ergonomic error definitions.

use std::fmt;
use thiserror::Error;

/// Which field of a match list entry disagrees with the rest of the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictKind {
    /// Earlier entries carry an IP, this one does not
    MissingIp,
    /// Earlier entries carry no IP, this one does
    ExtraIp,
    /// Earlier entries carry a port, this one does not
    MissingPort,
    /// Earlier entries carry no port, this one does
    ExtraPort,
}

impl fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ConflictKind::MissingIp => "missing IP",
            ConflictKind::ExtraIp => "extra IP",
            ConflictKind::MissingPort => "missing port",
            ConflictKind::ExtraPort => "extra port",
        };
        f.write_str(s)
    }
}

/// Address family of a netmask
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddrFamily {
    /// IPv4
    V4,
    /// IPv6
    V6,
}

impl fmt::Display for AddrFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddrFamily::V4 => f.write_str("IPv4"),
            AddrFamily::V6 => f.write_str("IPv6"),
        }
    }
}

/// Main error type for tmatch-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Token is not empty, not an IP literal and not an `ip@port`/`@port` form
    #[error("invalid address token: '{token}'")]
    InvalidAddrToken {
        /// The offending token, verbatim
        token: String,
    },

    /// Entries of one address list disagree on which fields are present
    #[error("conflict in address list: {kind} [{token}]")]
    ListConflict {
        /// What the entry is missing or carrying in excess
        kind: ConflictKind,
        /// The offending token, verbatim
        token: String,
    },

    /// Requested netmask width is below the supported minimum
    #[error("unsupported {family} netmask width: {width}")]
    InvalidMaskWidth {
        /// Address family the width was requested for
        family: AddrFamily,
        /// The rejected width
        width: u32,
    },

    /// Host-style and src/dst-style roles were supplied together
    #[error("host criteria are exclusive with src/dst criteria")]
    ExclusiveRoles,

    /// Match-spec file not found
    #[error("match spec file not found: {path}")]
    SpecNotFound {
        /// Path to the missing spec file
        path: String,
    },

    /// Serializing a match spec failed
    #[error("match spec error: {0}")]
    Spec(String),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an invalid-token error
    pub fn invalid_token(token: impl Into<String>) -> Self {
        Self::InvalidAddrToken {
            token: token.into(),
        }
    }

    /// Create a list-conflict error
    pub fn conflict(kind: ConflictKind, token: impl Into<String>) -> Self {
        Self::ListConflict {
            kind,
            token: token.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_token("bogus");
        assert!(err.to_string().contains("bogus"));

        let err = Error::conflict(ConflictKind::MissingPort, "@81");
        assert!(err.to_string().contains("missing port"));
        assert!(err.to_string().contains("@81"));
    }

    #[test]
    fn test_mask_width_display() {
        let err = Error::InvalidMaskWidth {
            family: AddrFamily::V6,
            width: 48,
        };
        assert!(err.to_string().contains("IPv6"));
        assert!(err.to_string().contains("48"));
    }
}
