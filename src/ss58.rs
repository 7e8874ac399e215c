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

//! SS58 is the Substrate-specific human-readable format for public keys.
//!
//! Examples:
//!
//! - `5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY`
//! - `12bzRJfh7arnnfPPUZHeJUaE62QLEwhK48QnH9LXeK2m1iZU`
//!
//! The format for public keys consists in:
//!
//! > base58(concat(prefix, 32-bytes-public-key, checksum))
//!
//! The prefix, also known as network identifier, also known as an address type is one or two
//! bytes identifying which blockchain network the address corresponds to. This is used for
//! UX-related purposes in order to prevent end users from using an address on a different
//! blockchain than the one the address was generated for. See the [`prefix`](crate::prefix)
//! module.
//!
//! A registry of existing network identifiers can be found
//! [here](https://wiki.polkadot.network/docs/build-ss58-registry).
//!
//! The checksum is verified when the human-readable format is turned into a public key. Its
//! presence of a checksum guarantees that simple copying mistakes will be caught. See the
//! [`checksum`](crate::checksum) module.

use alloc::{string::String, vec::Vec};
use core::{fmt, str::FromStr};

use crate::{base58, checksum, prefix, NetworkPrefix, PUBLIC_KEY_LEN};

/// Number of checksum bytes that follow a 32-bytes public key.
const CHECKSUM_LEN: usize = 2;

/// Turns a network identifier and a public key into an SS58 address.
pub fn to_address(prefix: NetworkPrefix, public_key: &[u8; PUBLIC_KEY_LEN]) -> String {
    debug_assert_eq!(
        checksum::checksum_len_for_key(PUBLIC_KEY_LEN),
        Some(CHECKSUM_LEN)
    );

    let capacity = prefix.encoded_len() + PUBLIC_KEY_LEN + CHECKSUM_LEN;
    let mut out = Vec::with_capacity(capacity);
    out.extend_from_slice(&prefix::encode_prefix(prefix));
    out.extend_from_slice(public_key);
    let checksum = checksum::checksum(checksum::SS58_CHECKSUM_CONTEXT, &out, CHECKSUM_LEN);
    out.extend_from_slice(&checksum);
    debug_assert_eq!(out.len(), capacity);

    base58::encode(&out)
}

/// Decodes an SS58 address into a network identifier and a public key.
pub fn from_address(
    address: &str,
) -> Result<(NetworkPrefix, [u8; PUBLIC_KEY_LEN]), Ss58DecodeError> {
    let decoded = base58::decode(address).map_err(Ss58DecodeError::Base58)?;

    // A one-byte prefix leads to 35 bytes, and a two-bytes prefix to 36 bytes.
    let min_len = 1 + PUBLIC_KEY_LEN + CHECKSUM_LEN;
    if decoded.len() != min_len && decoded.len() != min_len + 1 {
        return Err(Ss58DecodeError::BadLength(decoded.len()));
    }

    let (payload, checksum) = decoded.split_at(decoded.len() - CHECKSUM_LEN);
    if !checksum::verify(checksum::SS58_CHECKSUM_CONTEXT, payload, checksum) {
        return Err(Ss58DecodeError::ChecksumMismatch);
    }

    let (prefix, prefix_len) =
        prefix::decode_prefix(payload).map_err(Ss58DecodeError::InvalidPrefix)?;

    let public_key = <[u8; PUBLIC_KEY_LEN]>::try_from(&payload[prefix_len..])
        .map_err(|_| Ss58DecodeError::BadPublicKeyLength(payload.len() - prefix_len))?;

    Ok((prefix, public_key))
}

/// Decoded SS58 address.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Ss58Address {
    /// Network identifier of the address.
    pub prefix: NetworkPrefix,
    /// Public key the address designates.
    pub public_key: [u8; PUBLIC_KEY_LEN],
}

impl fmt::Display for Ss58Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_address(self.prefix, &self.public_key))
    }
}

impl FromStr for Ss58Address {
    type Err = Ss58DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (prefix, public_key) = from_address(s)?;
        Ok(Ss58Address { prefix, public_key })
    }
}

/// Error potentially returned by [`from_address`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum Ss58DecodeError {
    /// Address isn't valid base-58.
    #[display(fmt = "{}", _0)]
    Base58(base58::DecodeError),
    /// Address doesn't decode to a number of bytes that an SS58 address can have.
    #[display(fmt = "Decoded address has an invalid length of {} bytes", _0)]
    BadLength(usize),
    /// Checksum at the end of the address doesn't match the rest of the address.
    #[display(fmt = "Address checksum mismatch")]
    ChecksumMismatch,
    /// Failed to decode the network identifier.
    #[display(fmt = "{}", _0)]
    InvalidPrefix(prefix::InvalidPrefix),
    /// Bytes between the prefix and the checksum aren't a public key.
    #[display(fmt = "Address contains a public key of {} bytes", _0)]
    BadPublicKeyLength(usize),
}

#[cfg(feature = "std")]
impl std::error::Error for Ss58DecodeError {}
