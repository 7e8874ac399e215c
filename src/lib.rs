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

//! Conversion between the representations of a Substrate account.
//!
//! Substrate-based chains identify accounts with a 32-bytes public key. This public key is shown
//! to end users in one of three ways:
//!
//! - As an SS58 address, for example `5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY`. See the
//! [`ss58`] module.
//! - As a raw hexadecimal public key, for example
//! `0xd43593c715fdd31c61141abd04a99fd6822c8558854ccde39a5684e7a56da27d`.
//! - On chains that embed an Ethereum-compatible virtual machine, as an Ethereum-style 20-bytes
//! address ("H160"), for example `0x6be02d1d3665660d22ff9624b7be0551ee1ac91b`. See the [`h160`]
//! module.
//!
//! # Usage
//!
//! Call [`convert()`] (or [`Converter::convert`] in order to customize the network prefix) with an
//! input string and the [`InputFormat`] it is expected to be in. On success, a
//! [`ConversionResult`] containing the three representations of the same account is returned.
//!
//! Use [`validate()`] in order to only check whether a string is a valid SS58 address.
//!
//! ```
//! use address_converter::{convert, InputFormat};
//!
//! let result = convert(
//!     "0xd43593c715fdd31c61141abd04a99fd6822c8558854ccde39a5684e7a56da27d",
//!     InputFormat::PubKey,
//! )
//! .unwrap();
//! assert_eq!(result.ss58(), "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY");
//! ```
//!
//! # About H160 addresses
//!
//! Turning an H160 into a public key is done by hashing, and can't be reversed. The H160 that
//! is found in a [`ConversionResult`] is the input H160 when the input was an H160, and the
//! first 20 bytes of the public key otherwise. See [`ConversionResult::h160_origin`].

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(rustdoc::broken_intra_doc_links)]
// TODO: the `unused_crate_dependencies` lint is disabled because of dev-dependencies, see <https://github.com/rust-lang/rust/issues/95513>
// #![deny(unused_crate_dependencies)]

extern crate alloc;

pub mod base58;
pub mod checksum;
pub mod convert;
pub mod h160;
pub mod network;
pub mod prefix;
pub mod ss58;
pub mod validate;

mod hex_input;

pub use convert::{
    convert, ConversionError, ConversionResult, Converter, ConverterConfig, ErrorKind,
    H160Origin, InputFormat, UnsupportedFormat,
};
pub use h160::H160;
pub use hex_input::HexInputError;
pub use prefix::NetworkPrefix;
pub use validate::{
    validate, validate_for_network, InvalidPrefixReason, MalformedReason, ValidationError,
};

/// Number of bytes of a public key.
pub const PUBLIC_KEY_LEN: usize = 32;
