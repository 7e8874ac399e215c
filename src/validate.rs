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

//! Validation of SS58 addresses.
//!
//! An address is valid if it is made of base-58 characters, decodes to the length of a prefix
//! followed with a 32-bytes public key and a checksum, has a correct checksum, and starts with a
//! valid network identifier. See the [`ss58`](crate::ss58) module.

use crate::{base58, hex_input::HexInputError, prefix, ss58, NetworkPrefix};

/// Checks whether `address` is a valid SS58 address, for any network.
pub fn validate(address: &str) -> Result<(), ValidationError> {
    ss58::from_address(address)?;
    Ok(())
}

/// Checks whether `address` is a valid SS58 address of the network designated by `expected`.
pub fn validate_for_network(
    address: &str,
    expected: NetworkPrefix,
) -> Result<(), ValidationError> {
    let (actual, _) = ss58::from_address(address)?;
    if actual != expected {
        return Err(ValidationError::InvalidPrefix(
            InvalidPrefixReason::NetworkMismatch { expected, actual },
        ));
    }
    Ok(())
}

/// Error potentially returned by [`validate`] and [`validate_for_network`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ValidationError {
    /// Address contains a character outside of the base-58 alphabet.
    #[display(fmt = "{}", _0)]
    InvalidAlphabetCharacter(base58::DecodeError),
    /// Checksum at the end of the address doesn't match the rest of the address.
    #[display(fmt = "Address checksum mismatch")]
    ChecksumMismatch,
    /// Network identifier of the address is invalid or unexpected.
    #[display(fmt = "{}", _0)]
    InvalidPrefix(InvalidPrefixReason),
    /// Address doesn't have the length of an address.
    #[display(fmt = "Malformed address: {}", _0)]
    MalformedAddress(MalformedReason),
}

#[cfg(feature = "std")]
impl std::error::Error for ValidationError {}

impl From<ss58::Ss58DecodeError> for ValidationError {
    fn from(err: ss58::Ss58DecodeError) -> Self {
        match err {
            ss58::Ss58DecodeError::Base58(base58::DecodeError::Other(err)) => {
                ValidationError::MalformedAddress(MalformedReason::Base58(err))
            }
            ss58::Ss58DecodeError::Base58(err) => ValidationError::InvalidAlphabetCharacter(err),
            ss58::Ss58DecodeError::BadLength(len) => {
                ValidationError::MalformedAddress(MalformedReason::DecodedLength(len))
            }
            ss58::Ss58DecodeError::ChecksumMismatch => ValidationError::ChecksumMismatch,
            ss58::Ss58DecodeError::InvalidPrefix(err) => {
                ValidationError::InvalidPrefix(InvalidPrefixReason::Decode(err))
            }
            ss58::Ss58DecodeError::BadPublicKeyLength(len) => {
                ValidationError::MalformedAddress(MalformedReason::PublicKeyLength(len))
            }
        }
    }
}

/// Reason why a network identifier has been refused.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InvalidPrefixReason {
    /// Network identifier can't be decoded.
    #[display(fmt = "{}", _0)]
    Decode(prefix::InvalidPrefix),
    /// Network identifier is valid but isn't the one of the expected network.
    #[display(fmt = "Address belongs to network {}, expected network {}", actual, expected)]
    NetworkMismatch {
        /// Network the address was expected to belong to.
        expected: NetworkPrefix,
        /// Network found in the address.
        actual: NetworkPrefix,
    },
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidPrefixReason {}

/// Reason why an input has been considered as malformed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MalformedReason {
    /// SS58 address decodes to a number of bytes that no SS58 address can have.
    #[display(fmt = "decoded address has an invalid length of {} bytes", _0)]
    DecodedLength(usize),
    /// SS58 address contains a public key of the wrong length.
    #[display(fmt = "address contains a public key of {} bytes", _0)]
    PublicKeyLength(usize),
    /// Hexadecimal public key or H160 can't be parsed.
    #[display(fmt = "{}", _0)]
    Hex(HexInputError),
    /// Base-58 decoder failed for a reason other than an invalid character.
    #[display(fmt = "{}", _0)]
    Base58(base58::Bs58DecodeError),
}

#[cfg(feature = "std")]
impl std::error::Error for MalformedReason {}

#[cfg(test)]
mod tests {
    use super::{
        validate, validate_for_network, InvalidPrefixReason, MalformedReason, ValidationError,
    };
    use crate::{base58, hex_input::HexInputError, prefix::InvalidPrefix, ss58, NetworkPrefix};

    #[test]
    fn valid_addresses() {
        assert!(validate("5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY").is_ok());
        assert!(validate("15oF4uVJwmo4TdGW7VfQxNLavjCXviqxT9S1MgbjMNHr6Sp5").is_ok());
        assert!(validate("cEaNSpz4PxFcZ7nT1VEKrKewH67rfx6MfcM6yKojyyPz7qaqp").is_ok());
    }

    #[test]
    fn last_character_altered() {
        assert_eq!(
            validate("5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQZ"),
            Err(ValidationError::ChecksumMismatch)
        );
    }

    #[test]
    fn error_kinds() {
        assert!(matches!(
            validate("5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQl"),
            Err(ValidationError::InvalidAlphabetCharacter(
                base58::DecodeError::InvalidCharacter { character: 'l', .. }
            ))
        ));
        assert_eq!(
            validate("5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQ"),
            Err(ValidationError::MalformedAddress(
                MalformedReason::DecodedLength(34)
            ))
        );
        assert_eq!(
            validate("8yzriec8ZqmYcpkq2vXCyVF2smfFsxywynAYG2YS9Nqi2rs5"),
            Err(ValidationError::MalformedAddress(
                MalformedReason::PublicKeyLength(31)
            ))
        );
        assert_eq!(
            validate("M3FAmKmwoxiRhNBHFycAUbXaBmoLuNn4BGEGQPDwxPDNPAxD"),
            Err(ValidationError::InvalidPrefix(InvalidPrefixReason::Decode(
                InvalidPrefix::Reserved(200)
            )))
        );
    }

    #[test]
    fn network_binding() {
        let address = "15oF4uVJwmo4TdGW7VfQxNLavjCXviqxT9S1MgbjMNHr6Sp5";
        assert!(validate_for_network(address, NetworkPrefix::from(0)).is_ok());
        assert_eq!(
            validate_for_network(address, NetworkPrefix::from(42)),
            Err(ValidationError::InvalidPrefix(
                InvalidPrefixReason::NetworkMismatch {
                    expected: NetworkPrefix::from(42),
                    actual: NetworkPrefix::from(0),
                }
            ))
        );
    }

    #[test]
    fn base58_decoder_failure_is_malformed() {
        let err = base58::Bs58DecodeError::from(bs58::decode::Error::BufferTooSmall);
        assert_eq!(
            ValidationError::from(ss58::Ss58DecodeError::Base58(base58::DecodeError::Other(
                err.clone()
            ))),
            ValidationError::MalformedAddress(MalformedReason::Base58(err))
        );
    }

    #[cfg(feature = "std")]
    #[test]
    fn reasons_are_std_errors() {
        fn display_as_error(err: &(dyn std::error::Error + 'static)) -> String {
            err.to_string()
        }

        assert_eq!(
            display_as_error(&InvalidPrefixReason::Decode(InvalidPrefix::Reserved(200))),
            InvalidPrefix::Reserved(200).to_string()
        );
        assert_eq!(
            display_as_error(&MalformedReason::Hex(HexInputError::OddLength)),
            "Odd number of hexadecimal digits"
        );
        assert_eq!(
            display_as_error(&HexInputError::BadLength {
                expected: 20,
                actual: 19
            }),
            "Expected 20 bytes, found 19"
        );
    }
}
