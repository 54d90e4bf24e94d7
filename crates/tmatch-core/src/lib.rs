//! # tmatch Core
//!
//! Platform-independent match-criteria library for traffic filtering tools.
//!
//! ## Architecture
//!
//! This crate provides:
//! - **Token parsing** - `IP@PORT` address tokens into [`NetAddr`] values
//! - **List validation** - presence-consistent, ordered [`AddrList`]s
//! - **Netmask construction** - CIDR prefix widths into mask bytes
//! - **Assembly** - one validated, immutable [`FilterConfig`]
//!
//! ## Example
//!
//! ```rust
//! use tmatch_core::{FilterConfig, MatchSpec};
//!
//! let spec = MatchSpec {
//!     src: vec!["10.0.0.1@80".into(), "10.0.0.2@81".into()],
//!     msk4: 24,
//!     ..MatchSpec::default()
//! };
//!
//! let config = FilterConfig::assemble(&spec)?;
//! assert_eq!(config.src.len(), 2);
//! # Ok::<(), tmatch_core::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod filter;

// Re-exports for convenience
pub use error::{AddrFamily, ConflictKind, Error, Result};
pub use filter::{AddrList, FilterConfig, MatchSpec, NetAddr, NetmaskPair, RoleFlags};
