// Copyright (C) 2025 The es-log-endpoint Authors
//
// This file is part of es-log-endpoint.
//
// es-log-endpoint is free software: you can redistribute it and/or modify it under the terms of the
// GNU General Public License as published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// es-log-endpoint is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See
// the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with es-log-endpoint.
// If not, see <http://www.gnu.org/licenses/>.

//! Print the endpoint address for each connection string given on the command line.
//!
//! ```text
//! $ print-endpoint 'Server=es.local;Port=9200;Index=log;Rolling=true'
//! http://es.local:9200/log-2025.06.01/log
//! ```
//!
//! Put `--redact` ahead of the connection strings to mask passwords, and `--url` to also parse
//! each address as a URL (this will complain about addresses with no server).

use es_log_endpoint::endpoint::EndpointUriBuilder;

use tracing::{error, info};

pub fn main() {
    // Setup a subscriber so we can see what the library is doing...
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_writer(std::io::stderr)
        .finish();
    // and install it.
    let _guard = tracing::subscriber::set_default(subscriber);

    let mut redact = false;
    let mut check_url = false;
    let mut failures = 0;
    let builder = EndpointUriBuilder::default();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--redact" => redact = true,
            "--url" => check_url = true,
            raw => match builder.build_str(raw) {
                Ok(address) => {
                    if check_url {
                        if let Err(err) = address.to_url() {
                            error!("{}", err);
                            failures += 1;
                        }
                    }
                    if redact {
                        println!("{}", address.redacted());
                    } else {
                        println!("{}", address);
                    }
                }
                Err(err) => {
                    error!("{}", err);
                    failures += 1;
                }
            },
        }
    }
    info!("{} failure(s)", failures);
    if failures > 0 {
        std::process::exit(1);
    }
}
