// Smoldot
// Copyright (C) 2019-2022  Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later WITH Classpath-exception-2.0

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! Network identifier found at the start of an SS58 address.
//!
//! The network identifier, also known as address type or SS58 prefix, is a number between 0 and
//! 16383 included. It is encoded as one byte if it is inferior to 64, and as two bytes
//! otherwise.
//!
//! In the two-bytes form, the first byte always starts with the bits `01`. The six remaining
//! bits of the first byte are the bits 2 to 7 of the identifier. The second byte contains bits
//! 8 to 13 of the identifier in its lowest six bits, and bits 0 and 1 of the identifier in its
//! highest two bits.
//!
//! A first byte whose highest bit is set is reserved and isn't a valid prefix.

use arrayvec::ArrayVec;
use core::fmt;

/// Network identifier of an SS58 address. Guaranteed to be inferior or equal to
/// [`NetworkPrefix::MAX`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NetworkPrefix(u16);

impl NetworkPrefix {
    /// Highest possible network identifier.
    pub const MAX: u16 = 0b0011_1111_1111_1111;

    /// Builds a [`NetworkPrefix`]. Returns an error if `value` is superior to
    /// [`NetworkPrefix::MAX`].
    pub const fn new(value: u16) -> Result<Self, PrefixOutOfRange> {
        if value > Self::MAX {
            return Err(PrefixOutOfRange(value));
        }
        Ok(NetworkPrefix(value))
    }

    /// Builds a [`NetworkPrefix`] from a value that always fits.
    pub const fn from_u8(value: u8) -> Self {
        NetworkPrefix(value as u16)
    }

    /// Returns the numeric value of the network identifier.
    pub const fn get(&self) -> u16 {
        self.0
    }

    /// Returns the number of bytes [`encode_prefix`] produces for this prefix.
    pub const fn encoded_len(&self) -> usize {
        if self.0 < 64 {
            1
        } else {
            2
        }
    }
}

impl From<u8> for NetworkPrefix {
    fn from(value: u8) -> Self {
        NetworkPrefix(u16::from(value))
    }
}

impl TryFrom<u16> for NetworkPrefix {
    type Error = PrefixOutOfRange;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        NetworkPrefix::new(value)
    }
}

impl From<NetworkPrefix> for u16 {
    fn from(prefix: NetworkPrefix) -> u16 {
        prefix.0
    }
}

impl fmt::Display for NetworkPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Error potentially returned by [`NetworkPrefix::new`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, derive_more::Display)]
#[display(fmt = "Network prefix {} is superior to the maximum 16383", _0)]
pub struct PrefixOutOfRange(pub u16);

#[cfg(feature = "std")]
impl std::error::Error for PrefixOutOfRange {}

/// Encodes the network identifier into one or two bytes.
pub fn encode_prefix(prefix: NetworkPrefix) -> ArrayVec<u8, 2> {
    let value = prefix.get();
    let mut out = ArrayVec::new();

    if value < 64 {
        out.push(value as u8);
    } else {
        out.push((((value & 0b1111_1100) >> 2) as u8) | 0b0100_0000);
        out.push(((value >> 8) as u8) | (((value & 0b11) as u8) << 6));
    }

    debug_assert_eq!(out.len(), prefix.encoded_len());
    out
}

/// Decodes the network identifier found at the start of `bytes`.
///
/// Returns the identifier and the number of bytes it occupies. Only the first byte is used to
/// determine this length, and the bytes that follow the prefix are never read.
pub fn decode_prefix(bytes: &[u8]) -> Result<(NetworkPrefix, usize), InvalidPrefix> {
    let first = *bytes.first().ok_or(InvalidPrefix::Empty)?;

    match first {
        0..=63 => Ok((NetworkPrefix(u16::from(first)), 1)),
        64..=127 => {
            let second = *bytes.get(1).ok_or(InvalidPrefix::Truncated)?;
            let lower = ((first & 0b0011_1111) << 2) | (second >> 6);
            let upper = second & 0b0011_1111;
            let value = u16::from(lower) | (u16::from(upper) << 8);

            // Values inferior to 64 have a shorter encoding. Accepting them here would make
            // two different addresses designate the same account on the same network.
            if value < 64 {
                return Err(InvalidPrefix::NonCanonical(value));
            }

            Ok((NetworkPrefix(value), 2))
        }
        _ => Err(InvalidPrefix::Reserved(first)),
    }
}

/// Error potentially returned by [`decode_prefix`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InvalidPrefix {
    /// No byte to decode.
    #[display(fmt = "Missing network prefix")]
    Empty,
    /// First byte indicates a two-bytes prefix, but the second byte is missing.
    #[display(fmt = "Truncated two-bytes network prefix")]
    Truncated,
    /// First byte is in the reserved range.
    #[display(fmt = "Reserved network prefix byte 0x{:02x}", _0)]
    Reserved(u8),
    /// Two-bytes prefix designates a value that must be encoded as a single byte.
    #[display(fmt = "Network prefix {} uses a non-canonical two-bytes encoding", _0)]
    NonCanonical(u16),
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidPrefix {}
