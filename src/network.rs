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

//! Well-known network identifiers.
//!
//! The full list can be found in the
//! [SS58 registry](https://github.com/paritytech/ss58-registry). Only a handful of them are
//! known here, in order to let users designate a network by its name.

use core::str::FromStr;

use crate::NetworkPrefix;

/// Network identifier of Polkadot.
pub const POLKADOT: NetworkPrefix = NetworkPrefix::from_u8(0);
/// Network identifier of Kusama.
pub const KUSAMA: NetworkPrefix = NetworkPrefix::from_u8(2);
/// Network identifier of Moonbeam.
pub const MOONBEAM: NetworkPrefix = match NetworkPrefix::new(1284) {
    Ok(prefix) => prefix,
    Err(_) => panic!(),
};
/// Network identifier used by generic Substrate chains and development chains.
pub const SUBSTRATE: NetworkPrefix = NetworkPrefix::from_u8(42);

/// List of the networks known by name, as `(name, prefix)` tuples.
pub const KNOWN_NETWORKS: &[(&str, NetworkPrefix)] = &[
    ("polkadot", POLKADOT),
    ("kusama", KUSAMA),
    ("moonbeam", MOONBEAM),
    ("substrate", SUBSTRATE),
];

/// Returns the network identifier of the network with the given name. The name is
/// case-insensitive.
pub fn by_name(name: &str) -> Option<NetworkPrefix> {
    KNOWN_NETWORKS
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, prefix)| *prefix)
}

/// Returns the name of the network with the given identifier, if it is known.
pub fn name_of(prefix: NetworkPrefix) -> Option<&'static str> {
    KNOWN_NETWORKS
        .iter()
        .find(|(_, p)| *p == prefix)
        .map(|(name, _)| *name)
}

/// Network designated either by its name or by its numeric identifier.
///
/// Implements [`FromStr`], which makes it possible to parse for example `kusama` or `2`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct NetworkArg(pub NetworkPrefix);

impl FromStr for NetworkArg {
    type Err = UnknownNetwork;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(prefix) = by_name(s) {
            return Ok(NetworkArg(prefix));
        }

        s.parse::<u16>()
            .ok()
            .and_then(|n| NetworkPrefix::new(n).ok())
            .map(NetworkArg)
            .ok_or(UnknownNetwork)
    }
}

/// Error potentially returned when parsing a [`NetworkArg`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, derive_more::Display)]
#[display(fmt = "Network must be a known network name or a number between 0 and 16383")]
pub struct UnknownNetwork;

#[cfg(feature = "std")]
impl std::error::Error for UnknownNetwork {}
