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

#![cfg(test)]

use super::{
    convert, ConversionError, Converter, ConverterConfig, ErrorKind, H160Origin, InputFormat,
    UnsupportedFormat,
};
use crate::{
    h160, ss58, validate::InvalidPrefixReason, HexInputError, MalformedReason, NetworkPrefix,
};

const ALICE_PUBKEY: &str = "0xd43593c715fdd31c61141abd04a99fd6822c8558854ccde39a5684e7a56da27d";
const ALICE_SS58: &str = "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY";
const ALICE_POLKADOT: &str = "15oF4uVJwmo4TdGW7VfQxNLavjCXviqxT9S1MgbjMNHr6Sp5";

#[test]
fn pubkey_input() {
    let result = convert(ALICE_PUBKEY, InputFormat::PubKey).unwrap();
    assert_eq!(result.prefix(), NetworkPrefix::from(42));
    assert_eq!(result.ss58(), ALICE_SS58);
    assert_eq!(result.pubkey(), ALICE_PUBKEY);
    assert_eq!(result.h160(), "0xd43593c715fdd31c61141abd04a99fd6822c8558");
    assert_eq!(result.h160_origin(), H160Origin::Truncated);
}

#[test]
fn pubkey_input_without_prefix_and_uppercase() {
    let result = convert(
        "D43593C715FDD31C61141ABD04A99FD6822C8558854CCDE39A5684E7A56DA27D",
        InputFormat::PubKey,
    )
    .unwrap();
    assert_eq!(result.ss58(), ALICE_SS58);
    assert_eq!(result.pubkey(), ALICE_PUBKEY);
}

#[test]
fn ss58_input() {
    let result = convert(ALICE_SS58, InputFormat::Ss58).unwrap();
    assert_eq!(result.ss58(), ALICE_SS58);
    assert_eq!(result.pubkey(), ALICE_PUBKEY);
    assert_eq!(result.h160_origin(), H160Origin::Truncated);

    // The network of the input is kept.
    let result = convert(ALICE_POLKADOT, InputFormat::Ss58).unwrap();
    assert_eq!(result.prefix(), NetworkPrefix::from(0));
    assert_eq!(result.ss58(), ALICE_POLKADOT);
    assert_eq!(result.pubkey(), ALICE_PUBKEY);
}

#[test]
fn h160_input_keeps_original() {
    let result = convert(
        "0x6be02d1d3665660d22ff9624b7be0551ee1ac91b",
        InputFormat::H160,
    )
    .unwrap();
    assert_eq!(result.h160(), "0x6be02d1d3665660d22ff9624b7be0551ee1ac91b");
    assert_eq!(result.h160_origin(), H160Origin::Input);
    assert_eq!(
        result.pubkey(),
        "0x0d6d2fcaed2f2ccd5c1d5c86468490f2aafeec8b7cb14af512cdf8c7980183a3"
    );
    assert_eq!(
        result.ss58(),
        "5CNJv1vQjABY9W3BtsV2tzaLCjZepWXaYYzuDGWUUNVvMjcG"
    );

    // Converting the SS58 address back doesn't give back the H160.
    let back = convert(result.ss58(), InputFormat::Ss58).unwrap();
    assert_eq!(back.pubkey(), result.pubkey());
    assert_eq!(back.h160_origin(), H160Origin::Truncated);
    assert_ne!(back.h160(), result.h160());
}

#[test]
fn h160_input_example() {
    let input = "0x1234567890123456789012345678901234567890";
    let result = convert(input, InputFormat::H160).unwrap();

    let h160 = h160::H160::from_hex(input).unwrap();
    let derived = h160::derive_account_id(&h160);
    assert_eq!(result.h160(), input);
    assert_eq!(result.pubkey(), format!("0x{}", hex::encode(derived)));
    assert_eq!(
        result.pubkey(),
        "0x7d38f3cb1b500ec529687bc53aae4d416152fb1db6c19ae071430333c8d83d79"
    );
    assert_eq!(
        result.ss58(),
        ss58::to_address(NetworkPrefix::from(42), &derived)
    );
    assert_eq!(
        result.ss58(),
        "5Ettm6fSye3WnsW22Z1UNYa7Mo4gm2KQdcVYHs6rYuJHnhtj"
    );
}

#[test]
fn h160_input_uppercase() {
    let result = convert(
        "0x6BE02D1D3665660D22FF9624B7BE0551EE1AC91B",
        InputFormat::H160,
    )
    .unwrap();
    assert_eq!(result.h160(), "0x6be02d1d3665660d22ff9624b7be0551ee1ac91b");
    assert_eq!(result.h160_origin(), H160Origin::Input);
}

#[test]
fn configured_network() {
    let converter = Converter::new(ConverterConfig {
        network_prefix: NetworkPrefix::from(0),
        strict_network: false,
    });

    let result = converter
        .convert(
            "0x6be02d1d3665660d22ff9624b7be0551ee1ac91b",
            InputFormat::H160,
        )
        .unwrap();
    assert_eq!(
        result.ss58(),
        "1Jc4MBUawT1b33hrWY339QV4MZJWp5id3jPNZVq2TXSY5of"
    );

    let result = converter.convert(ALICE_PUBKEY, InputFormat::PubKey).unwrap();
    assert_eq!(result.ss58(), ALICE_POLKADOT);

    let converter = Converter::new(ConverterConfig {
        network_prefix: NetworkPrefix::new(1284).unwrap(),
        strict_network: false,
    });
    let result = converter
        .convert(
            "0x6be02d1d3665660d22ff9624b7be0551ee1ac91b",
            InputFormat::H160,
        )
        .unwrap();
    assert_eq!(
        result.ss58(),
        "Vdqq8XkMNhfB7H5nBkTUPHa6Yfuom4LqLP6rpvTGQyFsiyv5r"
    );
}

#[test]
fn strict_network() {
    let converter = Converter::new(ConverterConfig {
        network_prefix: NetworkPrefix::from(42),
        strict_network: true,
    });

    assert!(converter.convert(ALICE_SS58, InputFormat::Ss58).is_ok());
    assert_eq!(
        converter.convert(ALICE_POLKADOT, InputFormat::Ss58),
        Err(ConversionError::InvalidPrefix(
            InvalidPrefixReason::NetworkMismatch {
                expected: NetworkPrefix::from(42),
                actual: NetworkPrefix::from(0),
            }
        ))
    );

    // The configured network is always used for the other formats.
    assert!(converter.convert(ALICE_PUBKEY, InputFormat::PubKey).is_ok());
}

#[test]
fn idempotent() {
    for (input, format) in [
        (ALICE_SS58, InputFormat::Ss58),
        (ALICE_PUBKEY, InputFormat::PubKey),
        ("0x6be02d1d3665660d22ff9624b7be0551ee1ac91b", InputFormat::H160),
    ] {
        assert_eq!(convert(input, format), convert(input, format));
    }
}

#[test]
fn random_pubkeys_round_trip() {
    for _ in 0..128 {
        let public_key = rand::random::<[u8; 32]>();
        let input = format!("0x{}", hex::encode(public_key));
        let from_pubkey = convert(&input, InputFormat::PubKey).unwrap();
        let from_ss58 = convert(from_pubkey.ss58(), InputFormat::Ss58).unwrap();
        assert_eq!(from_pubkey, from_ss58);
        assert_eq!(from_ss58.pubkey(), input);
    }
}

#[test]
fn short_pubkey() {
    let input = format!("0x{}", "ab".repeat(31));
    let err = convert(&input, InputFormat::PubKey).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedAddress);
    assert_eq!(
        err,
        ConversionError::MalformedAddress(MalformedReason::Hex(HexInputError::BadLength {
            expected: 32,
            actual: 31
        }))
    );
}

#[test]
fn bad_h160() {
    assert_eq!(
        convert("0x6be02d1d3665660d22ff9624b7be0551ee1ac9", InputFormat::H160)
            .unwrap_err()
            .kind(),
        ErrorKind::MalformedAddress
    );
    assert_eq!(
        convert("0xzz", InputFormat::H160).unwrap_err().kind(),
        ErrorKind::MalformedAddress
    );
    // An SS58 address isn't an H160.
    assert_eq!(
        convert(ALICE_SS58, InputFormat::H160).unwrap_err().kind(),
        ErrorKind::MalformedAddress
    );
}

#[test]
fn altered_ss58() {
    assert_eq!(
        convert(
            "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQZ",
            InputFormat::Ss58
        ),
        Err(ConversionError::ChecksumMismatch)
    );
    assert_eq!(
        convert(
            "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKut0Y",
            InputFormat::Ss58
        )
        .unwrap_err()
        .kind(),
        ErrorKind::InvalidAlphabetCharacter
    );
    // A public key isn't an SS58 address.
    assert_eq!(
        convert(ALICE_PUBKEY, InputFormat::Ss58).unwrap_err().kind(),
        ErrorKind::InvalidAlphabetCharacter
    );
}

#[test]
fn format_names() {
    assert_eq!("ss58".parse::<InputFormat>(), Ok(InputFormat::Ss58));
    assert_eq!("H160".parse::<InputFormat>(), Ok(InputFormat::H160));
    assert_eq!("pubkey".parse::<InputFormat>(), Ok(InputFormat::PubKey));
    assert_eq!(
        "bech32".parse::<InputFormat>(),
        Err(UnsupportedFormat("bech32".into()))
    );

    let err = Converter::default()
        .convert_named(ALICE_SS58, "bech32")
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedFormat);

    assert_eq!(
        Converter::default()
            .convert_named(ALICE_SS58, "ss58")
            .unwrap()
            .pubkey(),
        ALICE_PUBKEY
    );
}

#[test]
fn iteration_order() {
    let result = convert(ALICE_SS58, InputFormat::Ss58).unwrap();
    let entries = result
        .iter()
        .map(|(format, value)| (format.name(), value))
        .collect::<Vec<_>>();
    assert_eq!(
        entries,
        vec![
            ("ss58", ALICE_SS58),
            ("h160", "0xd43593c715fdd31c61141abd04a99fd6822c8558"),
            ("pubkey", ALICE_PUBKEY),
        ]
    );
}

#[test]
fn send_sync() {
    fn is_send_sync<T: Send + Sync>() {}
    is_send_sync::<Converter>();
    is_send_sync::<super::ConversionResult>();
    is_send_sync::<ConversionError>();
}
