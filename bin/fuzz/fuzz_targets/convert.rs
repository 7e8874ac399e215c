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

#![no_main]

use address_converter::{convert, InputFormat};

libfuzzer_sys::fuzz_target!(|data: &[u8]| {
    let input = match core::str::from_utf8(data) {
        Ok(input) => input,
        Err(_) => return,
    };

    for format in InputFormat::ALL {
        if let Ok(result) = convert(input, format) {
            // The SS58 address and the public key of a result must designate the same account.
            let again = convert(result.ss58(), InputFormat::Ss58).unwrap();
            assert_eq!(again.pubkey(), result.pubkey());
            let again = convert(result.pubkey(), InputFormat::PubKey).unwrap();
            assert_eq!(again.pubkey(), result.pubkey());
        }
    }
});
