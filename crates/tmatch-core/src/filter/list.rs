//! Address list validation
//!
//! A role's tokens must agree on which fields they constrain: either every
//! entry names an IP or none does, and likewise for ports. Mixed lists are
//! rejected before a list value ever exists.

use crate::error::{ConflictKind, Error, Result};
use crate::filter::NetAddr;
use std::ops::Deref;

/// Ordered, presence-consistent sequence of [`NetAddr`] entries.
///
/// Insertion order mirrors the user-specified priority and is preserved.
/// Uniqueness is not enforced. Constructed only through
/// [`AddrList::parse_tokens`], so every element is guaranteed to share the
/// first element's presence signature.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddrList(Vec<NetAddr>);

impl AddrList {
    /// Parse and validate an ordered sequence of tokens.
    ///
    /// The first token establishes the presence baseline; every later token
    /// must match it. An empty input is valid and yields an empty list
    /// (callers treat that as "role not specified").
    pub fn parse_tokens<I, S>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries = Vec::new();
        let mut baseline = (false, false);

        for token in tokens {
            let token = token.as_ref();
            let na: NetAddr = token.parse()?;

            if entries.is_empty() {
                baseline = na.presence();
            } else {
                let (has_ip, has_port) = baseline;
                if has_ip && na.ip.is_none() {
                    return Err(Error::conflict(ConflictKind::MissingIp, token));
                }
                if !has_ip && na.ip.is_some() {
                    return Err(Error::conflict(ConflictKind::ExtraIp, token));
                }
                if has_port && na.port.is_none() {
                    return Err(Error::conflict(ConflictKind::MissingPort, token));
                }
                if !has_port && na.port.is_some() {
                    return Err(Error::conflict(ConflictKind::ExtraPort, token));
                }
            }

            entries.push(na);
        }

        Ok(AddrList(entries))
    }

    /// Presence signature of the list, `(false, false)` when empty.
    ///
    /// The first entry is representative for the whole list by construction.
    pub fn presence(&self) -> (bool, bool) {
        self.0.first().map_or((false, false), NetAddr::presence)
    }

    /// Entries in original order
    pub fn as_slice(&self) -> &[NetAddr] {
        &self.0
    }
}

impl Deref for AddrList {
    type Target = [NetAddr];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> IntoIterator for &'a AddrList {
    type Item = &'a NetAddr;
    type IntoIter = std::slice::Iter<'a, NetAddr>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_preserved() {
        let list = AddrList::parse_tokens(["10.0.0.1@80", "10.0.0.2@81"]).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].port, Some(80));
        assert_eq!(list[1].port, Some(81));
        assert_eq!(list.presence(), (true, true));
    }

    #[test]
    fn test_empty_input() {
        let list = AddrList::parse_tokens(Vec::<String>::new()).unwrap();
        assert!(list.is_empty());
        assert_eq!(list.presence(), (false, false));
    }

    #[test]
    fn test_missing_ip() {
        let err = AddrList::parse_tokens(["10.0.0.1@80", "@81"]).unwrap_err();
        match err {
            Error::ListConflict { kind, token } => {
                assert_eq!(kind, ConflictKind::MissingIp);
                assert_eq!(token, "@81");
            }
            other => panic!("wrong error: {other}"),
        }
    }

    #[test]
    fn test_extra_ip() {
        let err = AddrList::parse_tokens(["@80", "10.0.0.1@81"]).unwrap_err();
        assert!(matches!(
            err,
            Error::ListConflict {
                kind: ConflictKind::ExtraIp,
                ..
            }
        ));
    }

    #[test]
    fn test_missing_port() {
        let err = AddrList::parse_tokens(["10.0.0.1@80", "10.0.0.2"]).unwrap_err();
        assert!(matches!(
            err,
            Error::ListConflict {
                kind: ConflictKind::MissingPort,
                ..
            }
        ));
    }

    #[test]
    fn test_extra_port() {
        let err = AddrList::parse_tokens(["10.0.0.1", "10.0.0.2@81"]).unwrap_err();
        assert!(matches!(
            err,
            Error::ListConflict {
                kind: ConflictKind::ExtraPort,
                ..
            }
        ));
    }

    #[test]
    fn test_parse_error_short_circuits() {
        // The parse error from the bad token propagates unchanged; the
        // conflict that would follow it is never reached.
        let err = AddrList::parse_tokens(["10.0.0.1@80", "bogus", "@81"]).unwrap_err();
        assert!(matches!(err, Error::InvalidAddrToken { .. }));
    }

    #[test]
    fn test_duplicates_allowed() {
        let list = AddrList::parse_tokens(["10.0.0.1", "10.0.0.1"]).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0], list[1]);
    }
}
