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

//! Parsing of the hexadecimal strings used for public keys and H160 addresses.

use alloc::vec::Vec;

/// Parses a hexadecimal string, optionally prefixed with `0x`, into exactly `N` bytes.
///
/// Both lowercase and uppercase digits are accepted.
pub(crate) fn parse_fixed<const N: usize>(input: &str) -> Result<[u8; N], HexInputError> {
    let bytes = parse(input)?;
    <[u8; N]>::try_from(bytes).map_err(|bytes| HexInputError::BadLength {
        expected: N,
        actual: bytes.len(),
    })
}

/// Parses a hexadecimal string, optionally prefixed with `0x`, into bytes.
pub(crate) fn parse(input: &str) -> Result<Vec<u8>, HexInputError> {
    let parse_result: Result<_, nom::Err<nom::error::Error<&str>>> =
        nom::combinator::all_consuming(nom::sequence::preceded(
            nom::combinator::opt(nom::bytes::complete::tag("0x")),
            nom::character::complete::hex_digit0,
        ))(input);

    let digits = match parse_result {
        Ok((_, digits)) => digits,
        Err(nom::Err::Error(err)) | Err(nom::Err::Failure(err)) => {
            let index = input.len() - err.input.len();
            return Err(HexInputError::InvalidCharacter {
                character: err.input.chars().next().unwrap_or('\0'),
                index,
            });
        }
        Err(nom::Err::Incomplete(_)) => unreachable!(),
    };

    if digits.len() % 2 != 0 {
        return Err(HexInputError::OddLength);
    }

    // All the characters have been verified by `hex_digit0` above.
    hex::decode(digits).map_err(|_| HexInputError::OddLength)
}

/// Error potentially returned when parsing a hexadecimal string.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum HexInputError {
    /// String contains a character that isn't an hexadecimal digit.
    #[display(fmt = "Invalid hexadecimal character {:?} at offset {}", character, index)]
    InvalidCharacter { character: char, index: usize },
    /// Number of hexadecimal digits isn't even.
    #[display(fmt = "Odd number of hexadecimal digits")]
    OddLength,
    /// Number of decoded bytes isn't the expected one.
    #[display(fmt = "Expected {} bytes, found {}", expected, actual)]
    BadLength { expected: usize, actual: usize },
}

#[cfg(feature = "std")]
impl std::error::Error for HexInputError {}
