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

//! Base-58 encoding, using the same alphabet as Bitcoin.
//!
//! Base-58 turns an arbitrary sequence of bytes into a string made of the 58 alphanumeric
//! characters that are hard to mistake for one another: `0`, `O`, `I` and `l` aren't part of
//! the alphabet.
//!
//! Each leading `0` byte of the input is encoded as a leading `1` character, and vice versa,
//! meaning that [`decode`] always returns exactly the bytes that were passed to [`encode`].

use alloc::{string::String, vec::Vec};

/// Encodes the given bytes into base-58.
pub fn encode(bytes: &[u8]) -> String {
    bs58::encode(bytes).into_string()
}

/// Decodes a base-58 string into bytes.
pub fn decode(string: &str) -> Result<Vec<u8>, DecodeError> {
    bs58::decode(string).into_vec().map_err(|err| match err {
        bs58::decode::Error::InvalidCharacter { character, index } => {
            DecodeError::InvalidCharacter { character, index }
        }
        bs58::decode::Error::NonAsciiCharacter { index } => {
            // The byte at `index` is the first non-ASCII byte, and is thus always the start of
            // a UTF-8 sequence.
            match string.get(index..).and_then(|s| s.chars().next()) {
                Some(character) => DecodeError::InvalidCharacter { character, index },
                None => DecodeError::Other(Bs58DecodeError(err)),
            }
        }
        err => DecodeError::Other(Bs58DecodeError(err)),
    })
}

/// Error potentially returned by [`decode`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum DecodeError {
    /// String contains a character that isn't part of the base-58 alphabet.
    #[display(fmt = "Invalid base-58 character {:?} at offset {}", character, index)]
    InvalidCharacter {
        /// Character that was found.
        character: char,
        /// Offset in bytes of the character within the string.
        index: usize,
    },
    /// Other error reported by the base-58 decoder.
    #[display(fmt = "{}", _0)]
    Other(Bs58DecodeError),
}

#[cfg(feature = "std")]
impl std::error::Error for DecodeError {}

/// Error when decoding Base58 encoding.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub struct Bs58DecodeError(bs58::decode::Error);
