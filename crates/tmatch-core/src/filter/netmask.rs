//! CIDR netmask construction
//!
//! Turns a requested prefix width into fixed-length mask bytes. Width 0
//! means "match the exact address" and yields a full host mask. Widths
//! above the family maximum clamp to it; non-zero widths below the
//! supported granularity are rejected.

use crate::error::{AddrFamily, Error, Result};

/// Smallest usable IPv4 prefix width
pub const V4_MIN_WIDTH: u32 = 8;
/// IPv4 address width in bits
pub const V4_MAX_WIDTH: u32 = 32;
/// Smallest usable IPv6 prefix width
pub const V6_MIN_WIDTH: u32 = 64;
/// IPv6 address width in bits
pub const V6_MAX_WIDTH: u32 = 128;

/// Build an IPv4 mask for the given prefix width.
pub fn v4(width: u32) -> Result<[u8; 4]> {
    let mut mask = [0u8; 4];
    fill(
        &mut mask,
        width,
        AddrFamily::V4,
        V4_MIN_WIDTH,
        V4_MAX_WIDTH,
    )?;
    Ok(mask)
}

/// Build an IPv6 mask for the given prefix width.
pub fn v6(width: u32) -> Result<[u8; 16]> {
    let mut mask = [0u8; 16];
    fill(
        &mut mask,
        width,
        AddrFamily::V6,
        V6_MIN_WIDTH,
        V6_MAX_WIDTH,
    )?;
    Ok(mask)
}

fn fill(mask: &mut [u8], width: u32, family: AddrFamily, min: u32, max: u32) -> Result<()> {
    let width = match width {
        0 => max,
        w if w > max => max,
        w if w < min => return Err(Error::InvalidMaskWidth { family, width: w }),
        w => w,
    };

    for (i, byte) in mask.iter_mut().enumerate() {
        let covered = width.saturating_sub(i as u32 * 8);
        *byte = match covered {
            0 => 0x00,
            1..=7 => 0xffu8 << (8 - covered),
            _ => 0xff,
        };
    }
    Ok(())
}

/// The pair of masks applied to matched addresses, one per family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetmaskPair {
    /// IPv4 mask bytes
    pub v4: [u8; 4],
    /// IPv6 mask bytes
    pub v6: [u8; 16],
}

impl NetmaskPair {
    /// Build both masks from requested widths, 0 meaning full host mask.
    pub fn from_widths(v4_width: u32, v6_width: u32) -> Result<Self> {
        Ok(NetmaskPair {
            v4: v4(v4_width)?,
            v6: v6(v6_width)?,
        })
    }
}

impl Default for NetmaskPair {
    /// Full host masks (/32, /128)
    fn default() -> Self {
        NetmaskPair {
            v4: [0xff; 4],
            v6: [0xff; 16],
        }
    }
}
