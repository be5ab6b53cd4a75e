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
//! Turn an [Elasticsearch] logging connection string into the address to which log documents
//! should be sent.
//!
//! [Elasticsearch]: https://www.elastic.co/elasticsearch
//!
//! # Introduction
//!
//! Logging destinations that write to Elasticsearch (or one of its API-compatible cousins) are
//! conventionally configured with a single "connection string": a flat list of `name=value`
//! pairs separated by semicolons or ampersands, like
//!
//! ```text
//! Scheme=https;User=elastic;Pwd=changeme;Server=es.local;Port=9200;Index=log;Rolling=true;BufferSize=100
//! ```
//!
//! The nice thing about this format is that it fits in one environment variable or one line of a
//! configuration file. The not-so-nice thing is that the rules for getting from it to an actual
//! HTTP endpoint have accreted over the years: a default scheme, credentials that are included
//! only if complete, index names that roll over daily, a switch to the [bulk API] once events are
//! buffered, and a couple of pass-through query parameters ([routing] & [pipeline]).
//!
//! [bulk API]: https://www.elastic.co/guide/en/elasticsearch/reference/current/docs-bulk.html
//! [routing]: https://www.elastic.co/guide/en/elasticsearch/reference/current/mapping-routing-field.html
//! [pipeline]: https://www.elastic.co/guide/en/elasticsearch/reference/current/ingest.html
//!
//! This crate implements exactly those rules, and nothing else. It performs no I/O, sends no
//! requests & keeps no state; the HTTP client that actually ships log documents is somebody
//! else's problem.
//!
//! # Usage
//!
//! The simplest thing is to hand a connection string to [`endpoint_for`]:
//!
//! ```rust
//! let address = es_log_endpoint::endpoint_for("Server=es.local;Port=9200;Index=log").unwrap();
//! assert_eq!(address.as_str(), "http://es.local:9200/log/log");
//! ```
//!
//! Rolling index names depend on the date, which [`endpoint_for`] takes from the system clock. To
//! get reproducible results, give an [`EndpointUriBuilder`] a clock of your choosing:
//!
//! [`EndpointUriBuilder`]: crate::endpoint::EndpointUriBuilder
//!
//! ```rust
//! use es_log_endpoint::{clock::FixedClock, endpoint::EndpointUriBuilder};
//! use chrono::NaiveDate;
//!
//! let builder = EndpointUriBuilder::new(FixedClock::new(NaiveDate::from_ymd_opt(2024, 3, 7).unwrap()));
//! let address = builder.build_str("Server=es.local;Port=9200;Index=log;Rolling=true").unwrap();
//! assert_eq!(address.as_str(), "http://es.local:9200/log-2024.03.07/log");
//!
//! // Where a structured URL is needed, ask for one:
//! let url = address.to_url().unwrap();
//! assert_eq!(url.port(), Some(9200));
//! ```
//!
//! The only thing that will fail a build is a `BufferSize` that isn't an integer. A connection
//! string that leaves out the server will produce an address; it just won't be a very useful one.
//!
//! # Logging
//!
//! This crate reports what it's doing via [`tracing`] (dropped connection string fragments at
//! TRACE, completed addresses at DEBUG). Passwords are masked before anything is logged.
//!
//! [`tracing`]: https://docs.rs/tracing/latest/tracing/index.html

pub mod clock;
pub mod connection_string;
pub mod endpoint;
pub mod error;
pub mod key;

use crate::{endpoint::EndpointAddress, error::Result};

/// Parse `raw` & build the address it describes, rolling index names (if asked) on today's date
/// per the system clock.
pub fn endpoint_for(raw: &str) -> Result<EndpointAddress> {
    endpoint::EndpointUriBuilder::default().build_str(raw)
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn smoke() {
        assert_eq!(
            endpoint_for("Server=es.local;Index=log;Port=9200;BufferSize=2")
                .unwrap()
                .as_str(),
            "http://es.local:9200/log/log/_bulk"
        );
        assert!(endpoint_for("Server=es.local;BufferSize=lots").is_err());
    }
}
