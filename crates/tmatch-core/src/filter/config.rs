//! Match-criteria assembly
//!
//! Combines the raw role token lists and mask widths of a [`MatchSpec`]
//! into one validated, immutable [`FilterConfig`] for downstream matching
//! logic. All validation happens here, fail-fast; no partial config is
//! ever produced.

use crate::error::{Error, Result};
use crate::filter::{AddrList, NetmaskPair};
use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

bitflags! {
    /// Which fields each address role constrains.
    ///
    /// Derived from the first entry of each populated role list, never set
    /// directly by the user.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct RoleFlags: u8 {
        /// Destination list constrains ports
        const DST_PORT = 1 << 0;
        /// Source list constrains ports
        const SRC_PORT = 1 << 1;
        /// Either-host list constrains ports
        const EITHER_PORT = 1 << 2;
        /// Destination list constrains addresses
        const DST_ADDR = 1 << 4;
        /// Source list constrains addresses
        const SRC_ADDR = 1 << 5;
        /// Either-host list constrains addresses
        const EITHER_ADDR = 1 << 6;
    }
}

/// Raw, caller-assembled match criteria.
///
/// A plain data struct: the CLI builds one from its flags, or it is
/// deserialized from a TOML spec file. Nothing here is validated until
/// [`FilterConfig::assemble`] runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchSpec {
    /// Either-direction host tokens; exclusive with `src`/`dst`
    pub host: Vec<String>,
    /// Source-side tokens
    pub src: Vec<String>,
    /// Destination-side tokens
    pub dst: Vec<String>,
    /// IPv4 prefix width, 0 = full host mask
    pub msk4: u32,
    /// IPv6 prefix width, 0 = full host mask
    pub msk6: u32,
}

impl MatchSpec {
    /// Load a match spec from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|_| Error::SpecNotFound {
            path: path.display().to_string(),
        })?;
        Self::from_toml(&content)
    }

    /// Parse a match spec from a TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(Error::from)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Spec(e.to_string()))
    }

    /// True when no role and no mask width is specified
    pub fn is_empty(&self) -> bool {
        self.host.is_empty()
            && self.src.is_empty()
            && self.dst.is_empty()
            && self.msk4 == 0
            && self.msk6 == 0
    }
}

/// Validated, immutable match configuration.
///
/// Constructed only by [`FilterConfig::assemble`]; the either/src-dst
/// mutual exclusion and the per-list presence invariants hold by
/// construction. Equal specs assemble to value-equal configs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    /// Either-direction host entries, empty unless `host` was given
    pub either: AddrList,
    /// Source-side entries
    pub src: AddrList,
    /// Destination-side entries
    pub dst: AddrList,
    /// Masks applied to matched addresses
    pub masks: NetmaskPair,
    /// Per-role field-presence flags
    pub flags: RoleFlags,
}

impl FilterConfig {
    /// Validate a raw spec and assemble the final configuration.
    ///
    /// Single pass: exclusivity first, then masks, then each role list in
    /// host/src/dst order. The first failure aborts the whole assembly.
    pub fn assemble(spec: &MatchSpec) -> Result<Self> {
        if !spec.host.is_empty() && (!spec.src.is_empty() || !spec.dst.is_empty()) {
            return Err(Error::ExclusiveRoles);
        }

        let masks = NetmaskPair::from_widths(spec.msk4, spec.msk6)?;

        let either = AddrList::parse_tokens(&spec.host)?;
        let src = AddrList::parse_tokens(&spec.src)?;
        let dst = AddrList::parse_tokens(&spec.dst)?;

        let mut flags = RoleFlags::empty();
        for (list, addr_bit, port_bit) in [
            (&either, RoleFlags::EITHER_ADDR, RoleFlags::EITHER_PORT),
            (&src, RoleFlags::SRC_ADDR, RoleFlags::SRC_PORT),
            (&dst, RoleFlags::DST_ADDR, RoleFlags::DST_PORT),
        ] {
            let (has_ip, has_port) = list.presence();
            flags.set(addr_bit, has_ip);
            flags.set(port_bit, has_port);
        }

        debug!(
            either = either.len(),
            src = src.len(),
            dst = dst.len(),
            flags = ?flags,
            "assembled match config"
        );

        Ok(FilterConfig {
            either,
            src,
            dst,
            masks,
            flags,
        })
    }
}
