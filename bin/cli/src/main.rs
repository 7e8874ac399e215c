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

#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unused_crate_dependencies)]

use address_converter::{
    network, ConversionResult, Converter, ConverterConfig, H160Origin, InputFormat,
};
use std::{io, process};

mod cli;

fn main() {
    let exit_code = match <cli::CliOptions as clap::Parser>::parse() {
        cli::CliOptions::Convert(opt) => {
            init_logging(&opt.log);
            run_convert(opt)
        }
        cli::CliOptions::Validate(opt) => {
            init_logging(&opt.log);
            run_validate(opt)
        }
        cli::CliOptions::Networks => {
            for (name, prefix) in network::KNOWN_NETWORKS {
                println!("{}: {}", name, prefix);
            }
            0
        }
    };

    process::exit(exit_code)
}

/// Sets up the logging system of the binary. Logs are written to stderr, in order to not mix
/// them with the output.
fn init_logging(options: &cli::LogOptions) {
    let mut env_filter = tracing_subscriber::filter::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::filter::EnvFilter::new("WARN"));
    for filter in &options.log {
        env_filter = env_filter.add_directive(filter.clone());
    }

    // This registers a global process-wide subscriber, which also receives the records of the
    // `log` crate emitted by the library.
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_ansi(options.color.use_ansi())
        .init();
}

/// Prints the outcome of a sub-command and returns the exit code of the process.
fn finish(outcome: Result<String, String>) -> i32 {
    match outcome {
        Ok(output) => {
            print!("{}", output);
            0
        }
        Err(error) => {
            eprintln!("{}", error);
            1
        }
    }
}

fn run_convert(opt: cli::CliOptionsConvert) -> i32 {
    finish(convert_output(&opt))
}

fn run_validate(opt: cli::CliOptionsValidate) -> i32 {
    finish(validate_output(&opt))
}

/// Runs the `convert` sub-command. Returns either what to print on stdout, or the error message
/// to print on stderr.
fn convert_output(opt: &cli::CliOptionsConvert) -> Result<String, String> {
    let converter = Converter::new(ConverterConfig {
        network_prefix: opt.network.0,
        strict_network: opt.strict_network,
    });

    tracing::debug!(format = %opt.from, network = %opt.network.0, "convert");

    match converter.convert(opt.address.trim(), opt.from) {
        Ok(result) => Ok(match opt.output {
            cli::Output::Text => render_text(&result),
            cli::Output::Json => render_json(&result),
        }),
        Err(error) => {
            tracing::debug!(kind = ?error.kind(), "conversion-failed");
            Err(format!("Invalid {} address: {}", opt.from, error))
        }
    }
}

/// Runs the `validate` sub-command. Same return value as [`convert_output`].
fn validate_output(opt: &cli::CliOptionsValidate) -> Result<String, String> {
    let address = opt.address.trim();
    let outcome = match opt.network {
        Some(network) => address_converter::validate_for_network(address, network.0),
        None => address_converter::validate(address),
    };

    match outcome {
        Ok(()) => Ok("valid\n".to_owned()),
        Err(error) => Err(format!("Invalid ss58 address: {}", error)),
    }
}

/// One `format: value` line per representation, in the order of [`ConversionResult::iter`].
fn render_text(result: &ConversionResult) -> String {
    let mut out = String::new();
    for (format, value) in result.iter() {
        out.push_str(&format!("{}: {}", format, value));
        if format == InputFormat::H160 && result.h160_origin() == H160Origin::Truncated {
            out.push_str(" (truncated public key)");
        }
        out.push('\n');
    }
    out
}

fn render_json(result: &ConversionResult) -> String {
    #[derive(serde::Serialize)]
    struct JsonOutput<'a> {
        ss58: &'a str,
        h160: &'a str,
        pubkey: &'a str,
        network_prefix: u16,
        h160_origin: &'static str,
    }

    let output = JsonOutput {
        ss58: result.ss58(),
        h160: result.h160(),
        pubkey: result.pubkey(),
        network_prefix: result.prefix().get(),
        h160_origin: match result.h160_origin() {
            H160Origin::Input => "input",
            H160Origin::Truncated => "truncated",
        },
    };

    // Serializing a struct of strings and integers can't fail.
    let mut json = serde_json::to_string_pretty(&output).unwrap_or_else(|_| unreachable!());
    json.push('\n');
    json
}
