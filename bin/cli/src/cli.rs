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

//! Provides the [`CliOptions`] struct that contains all the CLI options that can be passed to the
//! binary.
//!
//! See the documentation of the [`clap`] crate in order to learn more.

use address_converter::{network::NetworkArg, InputFormat};

// Note: the doc-comments applied to this struct and its field are visible when the binary is
// started with `--help`.

#[derive(Debug, clap::Parser)]
#[clap(about, author, version)]
pub enum CliOptions {
    /// Converts an address into its SS58, H160 and public key representations.
    Convert(CliOptionsConvert),
    /// Checks whether an SS58 address is valid.
    Validate(CliOptionsValidate),
    /// Lists the networks that can be passed by name to `--network`.
    Networks,
}

#[derive(Debug, clap::Parser)]
pub struct CliOptionsConvert {
    /// Address to convert. Leading and trailing whitespaces are ignored.
    pub address: String,
    /// Format of the address: ss58, h160, or pubkey.
    #[clap(long, default_value = "ss58")]
    pub from: InputFormat,
    /// Network of the generated SS58 address when converting from h160 or pubkey. Either a name
    /// or a number between 0 and 16383.
    #[clap(long, default_value = "substrate")]
    pub network: NetworkArg,
    /// Refuse SS58 addresses that don't belong to the network passed with `--network`.
    #[clap(long)]
    pub strict_network: bool,
    /// Output to stdout: text, json.
    #[clap(long, default_value = "text")]
    pub output: Output,
    #[clap(flatten)]
    pub log: LogOptions,
}

#[derive(Debug, clap::Parser)]
pub struct CliOptionsValidate {
    /// SS58 address to validate. Leading and trailing whitespaces are ignored.
    pub address: String,
    /// If passed, the address must belong to this network. Either a name or a number between 0
    /// and 16383.
    #[clap(long)]
    pub network: Option<NetworkArg>,
    #[clap(flatten)]
    pub log: LogOptions,
}

#[derive(Debug, clap::Args)]
pub struct LogOptions {
    /// Log filter. Example: `address-converter=trace`
    #[clap(long)]
    pub log: Vec<tracing_subscriber::filter::Directive>,
    /// Coloring: auto, always, never
    #[clap(long, default_value = "auto")]
    pub color: ColorChoice,
}

/// Whether the logs written to stderr contain ANSI color codes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ColorChoice {
    /// Colors are enabled only if stderr is a terminal.
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Resolves [`ColorChoice::Auto`] by checking whether stderr is a terminal.
    pub fn use_ansi(&self) -> bool {
        match self {
            ColorChoice::Auto => atty::is(atty::Stream::Stderr),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

impl core::str::FromStr for ColorChoice {
    type Err = UnknownColorChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            ("auto", ColorChoice::Auto),
            ("always", ColorChoice::Always),
            ("never", ColorChoice::Never),
        ]
        .into_iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(s))
        .map(|(_, choice)| choice)
        .ok_or_else(|| UnknownColorChoice(s.to_owned()))
    }
}

#[derive(Debug, derive_more::Display)]
#[display(fmt = "Unknown color choice {:?}, expected auto, always or never", _0)]
pub struct UnknownColorChoice(String);

impl std::error::Error for UnknownColorChoice {}

#[derive(Debug)]
pub enum Output {
    Text,
    Json,
}

impl core::str::FromStr for Output {
    type Err = OutputParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "text" {
            Ok(Output::Text)
        } else if s == "json" {
            Ok(Output::Json)
        } else {
            Err(OutputParseError)
        }
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display(fmt = "Output must be one of: text, json")]
pub struct OutputParseError;

#[cfg(test)]
mod tests {
    use super::{CliOptions, ColorChoice, Output};
    use address_converter::InputFormat;

    #[test]
    fn parse_convert() {
        let options = <CliOptions as clap::Parser>::try_parse_from([
            "address-converter",
            "convert",
            "0x6be02d1d3665660d22ff9624b7be0551ee1ac91b",
            "--from",
            "h160",
            "--network",
            "kusama",
            "--output",
            "json",
        ])
        .unwrap();

        match options {
            CliOptions::Convert(convert) => {
                assert_eq!(convert.from, InputFormat::H160);
                assert_eq!(convert.network.0.get(), 2);
                assert!(!convert.strict_network);
                assert!(matches!(convert.output, Output::Json));
            }
            _ => panic!(),
        }
    }

    #[test]
    fn unsupported_format_refused() {
        assert!(<CliOptions as clap::Parser>::try_parse_from([
            "address-converter",
            "convert",
            "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY",
            "--from",
            "bech32",
        ])
        .is_err());
    }

    #[test]
    fn network_out_of_range_refused() {
        assert!(<CliOptions as clap::Parser>::try_parse_from([
            "address-converter",
            "validate",
            "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY",
            "--network",
            "16384",
        ])
        .is_err());
    }

    #[test]
    fn color_choice() {
        assert_eq!("auto".parse::<ColorChoice>().unwrap(), ColorChoice::Auto);
        assert_eq!("Always".parse::<ColorChoice>().unwrap(), ColorChoice::Always);
        assert_eq!("NEVER".parse::<ColorChoice>().unwrap(), ColorChoice::Never);
        assert!(ColorChoice::Always.use_ansi());
        assert!(!ColorChoice::Never.use_ansi());

        let error = "rainbow".parse::<ColorChoice>().unwrap_err();
        assert_eq!(
            error.to_string(),
            "Unknown color choice \"rainbow\", expected auto, always or never"
        );

        let options = <CliOptions as clap::Parser>::try_parse_from([
            "address-converter",
            "networks",
        ]);
        assert!(matches!(options, Ok(CliOptions::Networks)));

        match <CliOptions as clap::Parser>::try_parse_from([
            "address-converter",
            "validate",
            "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY",
        ])
        .unwrap()
        {
            CliOptions::Validate(validate) => assert_eq!(validate.log.color, ColorChoice::Auto),
            _ => panic!(),
        }

        assert!(<CliOptions as clap::Parser>::try_parse_from([
            "address-converter",
            "validate",
            "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY",
            "--color",
            "rainbow",
        ])
        .is_err());
    }
}
