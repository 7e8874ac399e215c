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

//! Conversion of an account between its SS58, H160 and public key representations.
//!
//! A conversion goes through the following steps:
//!
//! - The input is decoded according to its [`InputFormat`] into a network identifier and a
//! public key. When the input is an H160, the public key is derived from it using
//! [`h160::derive_account_id`], and the H160 itself is kept.
//! - The SS58 address built from the network identifier and the public key is validated.
//! - The three representations are built and returned together in a [`ConversionResult`].
//!
//! If any step fails, the conversion stops and the error is returned. No partial result is
//! ever produced.
//!
//! When the input isn't an H160, the H160 of the result is the public key truncated to 20 bytes,
//! and [`ConversionResult::h160_origin`] returns [`H160Origin::Truncated`]. This truncated H160
//! isn't the H160 that the public key might have been derived from, as this derivation can't
//! be reversed.

use alloc::string::{String, ToString as _};
use core::{fmt, str::FromStr};

use crate::{
    base58,
    h160::{self, NotInvertible, H160},
    hex_input, network, ss58,
    validate::{self, InvalidPrefixReason, MalformedReason, ValidationError},
    NetworkPrefix, PUBLIC_KEY_LEN,
};

#[cfg(test)]
mod tests;

const LOG_TARGET: &str = "address-converter";

/// Format of the string passed to [`Converter::convert`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum InputFormat {
    /// SS58 address.
    Ss58,
    /// Ethereum-style 20-bytes address, in hexadecimal.
    H160,
    /// 32-bytes public key, in hexadecimal.
    PubKey,
}

impl InputFormat {
    /// List of all the formats, in the order in which [`ConversionResult::iter`] yields them.
    pub const ALL: [InputFormat; 3] = [InputFormat::Ss58, InputFormat::H160, InputFormat::PubKey];

    /// Returns the name of the format, as accepted by the [`FromStr`] implementation.
    pub fn name(&self) -> &'static str {
        match self {
            InputFormat::Ss58 => "ss58",
            InputFormat::H160 => "h160",
            InputFormat::PubKey => "pubkey",
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InputFormat {
    type Err = UnsupportedFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InputFormat::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnsupportedFormat(s.to_string()))
    }
}

/// Name of a format that isn't one of the [`InputFormat`]s.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display(fmt = "Unsupported address format {:?}, expected ss58, h160 or pubkey", _0)]
pub struct UnsupportedFormat(pub String);

#[cfg(feature = "std")]
impl std::error::Error for UnsupportedFormat {}

/// Where the H160 of a [`ConversionResult`] comes from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum H160Origin {
    /// The H160 is the one that was passed as input. The public key has been derived from it.
    Input,
    /// The H160 consists in the first 20 bytes of the public key. It is *not* an H160 that the
    /// public key is derived from.
    Truncated,
}

/// Successful outcome of a conversion. Contains the three representations of the same account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionResult {
    prefix: NetworkPrefix,
    ss58: String,
    h160: String,
    h160_origin: H160Origin,
    pubkey: String,
}

impl ConversionResult {
    /// Returns the network identifier of the SS58 address.
    pub fn prefix(&self) -> NetworkPrefix {
        self.prefix
    }

    /// Returns the SS58 address.
    pub fn ss58(&self) -> &str {
        &self.ss58
    }

    /// Returns the `0x`-prefixed hexadecimal H160. See also [`ConversionResult::h160_origin`].
    pub fn h160(&self) -> &str {
        &self.h160
    }

    /// Returns where the value of [`ConversionResult::h160`] comes from.
    pub fn h160_origin(&self) -> H160Origin {
        self.h160_origin
    }

    /// Returns the `0x`-prefixed hexadecimal public key.
    pub fn pubkey(&self) -> &str {
        &self.pubkey
    }

    /// Returns the representation of the account in the given format.
    pub fn get(&self, format: InputFormat) -> &str {
        match format {
            InputFormat::Ss58 => &self.ss58,
            InputFormat::H160 => &self.h160,
            InputFormat::PubKey => &self.pubkey,
        }
    }

    /// Returns the three representations of the account, always in the same order: SS58, H160,
    /// then public key.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (InputFormat, &str)> + '_ {
        InputFormat::ALL
            .into_iter()
            .map(move |format| (format, self.get(format)))
    }
}

/// Configuration of a [`Converter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterConfig {
    /// Network identifier used to build the SS58 address when the input is an H160 or a public
    /// key.
    pub network_prefix: NetworkPrefix,

    /// If `true`, SS58 addresses whose network identifier isn't
    /// [`ConverterConfig::network_prefix`] are refused.
    pub strict_network: bool,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        ConverterConfig {
            network_prefix: network::SUBSTRATE,
            strict_network: false,
        }
    }
}

/// Converts accounts between their representations.
///
/// A `Converter` doesn't hold any state other than its configuration, and can be shared
/// between threads.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: ConverterConfig,
}

impl Converter {
    /// Initializes a new [`Converter`].
    pub fn new(config: ConverterConfig) -> Self {
        Converter { config }
    }

    /// Returns the configuration passed to [`Converter::new`].
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Converts `input`, which must be in the given format, to all the formats.
    ///
    /// `input` isn't trimmed, and must not contain any leading or trailing whitespace.
    pub fn convert(
        &self,
        input: &str,
        format: InputFormat,
    ) -> Result<ConversionResult, ConversionError> {
        log::trace!(
            target: LOG_TARGET,
            "Idle => Decoding(format={}, input={:?})",
            format,
            input
        );

        let outcome = self.convert_inner(input, format);

        match &outcome {
            Ok(result) => log::debug!(
                target: LOG_TARGET,
                "Converted(format={}, ss58={}, h160_origin={:?})",
                format,
                result.ss58,
                result.h160_origin
            ),
            Err(err) => log::debug!(
                target: LOG_TARGET,
                "Failed(format={}, kind={:?}): {}",
                format,
                err.kind(),
                err
            ),
        }

        outcome
    }

    /// Same as [`Converter::convert`], but the format is designated by its name.
    pub fn convert_named(
        &self,
        input: &str,
        format: &str,
    ) -> Result<ConversionResult, ConversionError> {
        let format = format.parse::<InputFormat>()?;
        self.convert(input, format)
    }

    fn convert_inner(
        &self,
        input: &str,
        format: InputFormat,
    ) -> Result<ConversionResult, ConversionError> {
        let decoded = self.decode(input, format)?;
        log::trace!(
            target: LOG_TARGET,
            "Decoding => Validating(prefix={})",
            decoded.prefix
        );

        let ss58 = ss58::to_address(decoded.prefix, &decoded.public_key);
        validate::validate(&ss58)?;
        if self.config.strict_network {
            validate::validate_for_network(&ss58, self.config.network_prefix)?;
        }
        log::trace!(target: LOG_TARGET, "Validating => Encoding");

        let (h160, h160_origin) = match decoded.retained_h160 {
            Some(retained) => (
                h160::recover_h160(&decoded.public_key, Some(&retained))?,
                H160Origin::Input,
            ),
            None => (
                h160::best_effort_h160(&decoded.public_key).into_inner(),
                H160Origin::Truncated,
            ),
        };

        Ok(ConversionResult {
            prefix: decoded.prefix,
            ss58,
            h160: h160.to_hex(),
            h160_origin,
            pubkey: encode_public_key(&decoded.public_key),
        })
    }

    fn decode(&self, input: &str, format: InputFormat) -> Result<Decoded, ConversionError> {
        match format {
            InputFormat::Ss58 => {
                let (prefix, public_key) =
                    ss58::from_address(input).map_err(ValidationError::from)?;
                Ok(Decoded {
                    prefix,
                    public_key,
                    retained_h160: None,
                })
            }
            InputFormat::H160 => {
                let h160 = hex_input::parse_fixed(input)
                    .map(H160)
                    .map_err(malformed_hex)?;
                Ok(Decoded {
                    prefix: self.config.network_prefix,
                    public_key: h160::derive_account_id(&h160),
                    retained_h160: Some(h160),
                })
            }
            InputFormat::PubKey => {
                let public_key = hex_input::parse_fixed(input).map_err(malformed_hex)?;
                Ok(Decoded {
                    prefix: self.config.network_prefix,
                    public_key,
                    retained_h160: None,
                })
            }
        }
    }
}

/// Converts `input`, which must be in the given format, to all the formats, using the default
/// [`ConverterConfig`].
///
/// See [`Converter::convert`].
pub fn convert(input: &str, format: InputFormat) -> Result<ConversionResult, ConversionError> {
    Converter::default().convert(input, format)
}

/// Canonical form of the input of a conversion.
struct Decoded {
    prefix: NetworkPrefix,
    public_key: [u8; PUBLIC_KEY_LEN],
    /// H160 found in the input, if the input was an H160.
    retained_h160: Option<H160>,
}

fn malformed_hex(err: hex_input::HexInputError) -> ConversionError {
    ConversionError::MalformedAddress(MalformedReason::Hex(err))
}

fn encode_public_key(public_key: &[u8; PUBLIC_KEY_LEN]) -> String {
    let mut out = String::with_capacity(2 + PUBLIC_KEY_LEN * 2);
    out.push_str("0x");
    out.push_str(&hex::encode(public_key));
    out
}

/// Error potentially returned by [`Converter::convert`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ConversionError {
    /// SS58 address contains a character outside of the base-58 alphabet.
    #[display(fmt = "{}", _0)]
    InvalidAlphabetCharacter(base58::DecodeError),
    /// Checksum at the end of the SS58 address doesn't match the rest of the address.
    #[display(fmt = "Address checksum mismatch")]
    ChecksumMismatch,
    /// Network identifier is invalid or unexpected.
    #[display(fmt = "{}", _0)]
    InvalidPrefix(InvalidPrefixReason),
    /// Input doesn't have the length or the shape expected for its format.
    #[display(fmt = "Malformed address: {}", _0)]
    MalformedAddress(MalformedReason),
    /// Name of the input format isn't supported.
    #[display(fmt = "{}", _0)]
    UnsupportedFormat(UnsupportedFormat),
    /// An H160 was requested from an account id without knowing the H160 it derives from.
    #[display(fmt = "{}", _0)]
    NotInvertible(NotInvertible),
}

impl ConversionError {
    /// Returns the kind of error, without any detail.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConversionError::InvalidAlphabetCharacter(_) => ErrorKind::InvalidAlphabetCharacter,
            ConversionError::ChecksumMismatch => ErrorKind::ChecksumMismatch,
            ConversionError::InvalidPrefix(_) => ErrorKind::InvalidPrefix,
            ConversionError::MalformedAddress(_) => ErrorKind::MalformedAddress,
            ConversionError::UnsupportedFormat(_) => ErrorKind::UnsupportedFormat,
            ConversionError::NotInvertible(_) => ErrorKind::NotInvertible,
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConversionError {}

impl From<ValidationError> for ConversionError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::InvalidAlphabetCharacter(err) => {
                ConversionError::InvalidAlphabetCharacter(err)
            }
            ValidationError::ChecksumMismatch => ConversionError::ChecksumMismatch,
            ValidationError::InvalidPrefix(reason) => ConversionError::InvalidPrefix(reason),
            ValidationError::MalformedAddress(reason) => ConversionError::MalformedAddress(reason),
        }
    }
}

impl From<UnsupportedFormat> for ConversionError {
    fn from(err: UnsupportedFormat) -> Self {
        ConversionError::UnsupportedFormat(err)
    }
}

impl From<NotInvertible> for ConversionError {
    fn from(err: NotInvertible) -> Self {
        ConversionError::NotInvertible(err)
    }
}

/// Kind of a [`ConversionError`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidAlphabetCharacter,
    ChecksumMismatch,
    InvalidPrefix,
    MalformedAddress,
    UnsupportedFormat,
    NotInvertible,
}
