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

//! Checksum found at the end of SS58 addresses.
//!
//! The checksum consists in the first bytes of the BLAKE2b-512 hash of the concatenation of
//! [`SS58_CHECKSUM_CONTEXT`] and of the payload. The context guarantees that an SS58 checksum
//! can't be confused with another BLAKE2b hash of the same data.

use arrayvec::ArrayVec;

/// Bytes prepended to the payload before hashing it.
pub const SS58_CHECKSUM_CONTEXT: &[u8] = b"SS58PRE";

/// Maximum length of a checksum, which is the length of a BLAKE2b-512 hash.
pub const MAX_CHECKSUM_LEN: usize = 64;

/// Calculates the checksum of the given payload, truncated to `len` bytes.
///
/// # Panic
///
/// Panics if `len` is 0 or superior to [`MAX_CHECKSUM_LEN`].
///
pub fn checksum(context: &[u8], payload: &[u8], len: usize) -> ArrayVec<u8, MAX_CHECKSUM_LEN> {
    assert!(len != 0 && len <= MAX_CHECKSUM_LEN);

    let mut hasher = blake2_rfc::blake2b::Blake2b::new(MAX_CHECKSUM_LEN);
    hasher.update(context);
    hasher.update(payload);

    let mut out = ArrayVec::new();
    out.try_extend_from_slice(&hasher.finalize().as_bytes()[..len])
        .unwrap_or_else(|_| unreachable!());
    out
}

/// Returns `true` if `digest` is the checksum of `payload`, truncated to the length of `digest`.
///
/// Returns `false` if the length of `digest` can't be the length of a checksum.
pub fn verify(context: &[u8], payload: &[u8], digest: &[u8]) -> bool {
    if digest.is_empty() || digest.len() > MAX_CHECKSUM_LEN {
        return false;
    }

    &checksum(context, payload, digest.len())[..] == digest
}

/// Returns the number of checksum bytes that follow a key of the given length in an SS58
/// address, or `None` if SS58 doesn't support keys of this length.
pub fn checksum_len_for_key(key_len: usize) -> Option<usize> {
    match key_len {
        1 | 2 | 4 | 8 => Some(1),
        32 | 33 => Some(2),
        _ => None,
    }
}
