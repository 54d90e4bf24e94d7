//! Match-criteria construction and validation
//!
//! Raw option strings flow through the token parser ([`NetAddr`]), the
//! list validator ([`AddrList`]) and the netmask builder into one
//! immutable [`FilterConfig`].

mod addr;
mod config;
mod list;
pub mod netmask;

pub use addr::NetAddr;
pub use config::{FilterConfig, MatchSpec, RoleFlags};
pub use list::AddrList;
pub use netmask::NetmaskPair;
