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

//! Ethereum-style 20-bytes addresses, also known as H160.
//!
//! Chains that embed an Ethereum-compatible virtual machine (through Frontier) let accounts be
//! designated with an H160. Such an H160 is turned into a 32-bytes account id by hashing it:
//!
//! > blake2b_256(concat("evm:", h160))
//!
//! See [`derive_account_id`]. This mapping is one way: there is no way to find the H160 an
//! account id has been derived from.
//!
//! Frontier additionally defines a *truncated* mapping, where the H160 associated with an
//! account id is simply its first 20 bytes. This is what [`best_effort_h160`] returns. Please
//! note that deriving an account id from this truncated H160 does *not* give back the original
//! account id.

use alloc::string::String;
use core::{fmt, str::FromStr};

use crate::{hex_input, PUBLIC_KEY_LEN};

/// Number of bytes of an H160.
pub const H160_LEN: usize = 20;

/// Bytes prepended to the H160 before hashing it. See [`derive_account_id`].
pub const EVM_ACCOUNT_CONTEXT: &[u8] = b"evm:";

/// Ethereum-style 20-bytes account identifier.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct H160(pub [u8; H160_LEN]);

impl H160 {
    /// Parses an hexadecimal H160, optionally prefixed with `0x`.
    ///
    /// Letters can be lowercase or uppercase. Mixed-case checksums (EIP-55) aren't verified.
    pub fn from_hex(hex: &str) -> Result<Self, ParseH160Error> {
        hex_input::parse_fixed(hex)
            .map(H160)
            .map_err(ParseH160Error)
    }

    /// Returns the bytes of the H160.
    pub fn as_bytes(&self) -> &[u8; H160_LEN] {
        &self.0
    }

    /// Returns the `0x`-prefixed lowercase hexadecimal representation of the H160.
    pub fn to_hex(&self) -> String {
        let mut out = String::with_capacity(2 + H160_LEN * 2);
        out.push_str("0x");
        out.push_str(&hex::encode(self.0));
        out
    }
}

impl From<[u8; H160_LEN]> for H160 {
    fn from(bytes: [u8; H160_LEN]) -> Self {
        H160(bytes)
    }
}

impl FromStr for H160 {
    type Err = ParseH160Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        H160::from_hex(s)
    }
}

impl fmt::Debug for H160 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for H160 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

/// Error potentially returned by [`H160::from_hex`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display(fmt = "Invalid H160: {}", _0)]
pub struct ParseH160Error(hex_input::HexInputError);

#[cfg(feature = "std")]
impl std::error::Error for ParseH160Error {}

/// Derives the 32-bytes account id corresponding to an H160.
///
/// This is the mapping used by Frontier's `HashedAddressMapping<BlakeTwo256>`.
pub fn derive_account_id(h160: &H160) -> [u8; PUBLIC_KEY_LEN] {
    let mut hasher = blake2_rfc::blake2b::Blake2b::new(PUBLIC_KEY_LEN);
    hasher.update(EVM_ACCOUNT_CONTEXT);
    hasher.update(&h160.0);

    let mut out = [0; PUBLIC_KEY_LEN];
    out.copy_from_slice(hasher.finalize().as_bytes());
    out
}

/// H160 obtained by truncating an account id. See [`best_effort_h160`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TruncatedH160(pub H160);

impl TruncatedH160 {
    /// Returns the truncated H160.
    ///
    /// > **Note**: This is not the H160 the account id might have been derived from.
    pub fn into_inner(self) -> H160 {
        self.0
    }
}

/// Returns the first 20 bytes of the given account id, following Frontier's
/// `EnsureAddressTruncated` convention.
///
/// Passing the result to [`derive_account_id`] does *not* give back `account_id`. Use
/// [`recover_h160`] if the H160 the account id might have been derived from is known.
pub fn best_effort_h160(account_id: &[u8; PUBLIC_KEY_LEN]) -> TruncatedH160 {
    let mut out = [0; H160_LEN];
    out.copy_from_slice(&account_id[..H160_LEN]);
    TruncatedH160(H160(out))
}

/// Returns the H160 that `account_id` has been derived from.
///
/// Because [`derive_account_id`] can't be reversed, this only succeeds if `retained` is provided
/// and is indeed the H160 `account_id` has been derived from.
pub fn recover_h160(
    account_id: &[u8; PUBLIC_KEY_LEN],
    retained: Option<&H160>,
) -> Result<H160, NotInvertible> {
    match retained {
        Some(h160) if derive_account_id(h160) == *account_id => Ok(*h160),
        _ => Err(NotInvertible),
    }
}

/// Error returned by [`recover_h160`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, derive_more::Display)]
#[display(fmt = "The H160 an account id has been derived from can't be recovered")]
pub struct NotInvertible;

#[cfg(feature = "std")]
impl std::error::Error for NotInvertible {}
