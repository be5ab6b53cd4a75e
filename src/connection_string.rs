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

//! Connection string parsing.
//!
//! A connection string is a flat list of `name=value` fields separated by `;` or `&`:
//!
//! ```rust
//! use es_log_endpoint::{connection_string::ConnectionString, key::Key};
//! let parts = ConnectionString::parse("Server=localhost;Index=log;Port=9200");
//! assert_eq!(parts.get(Key::Server), Some("localhost"));
//! assert_eq!(parts.get(Key::Scheme), None);
//! ```
//!
//! Parsing never fails: fields without an `=` (or with a blank name) are dropped.

use crate::key::Key;

use tracing::trace;

use std::collections::HashMap;

type StdResult<T, E> = std::result::Result<T, E>;

/// The parsed form of a connection string: a case-preserving map from option name to value.
///
/// Names the endpoint builder doesn't understand are kept (they may be meaningful to other
/// consumers of the same connection string) but are never consulted.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ConnectionString {
    parts: HashMap<String, String>,
}

fn is_separator(c: char) -> bool {
    c == ';' || c == '&'
}

/// Interpret `text` as a boolean flag, the way the rest of our configuration does: "true", "1",
/// "yes" & "on" (in any case) are true, everything else is false.
pub fn is_truthy(text: &str) -> bool {
    matches!(
        text.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}

impl ConnectionString {
    /// Parse `raw` into its constituent fields. Later duplicates overwrite earlier ones.
    pub fn parse(raw: &str) -> ConnectionString {
        let mut parts = HashMap::new();
        for field in raw.split(is_separator) {
            if field.trim().is_empty() {
                continue;
            }
            match field.split_once('=') {
                Some((name, value)) if !name.trim().is_empty() => {
                    parts.insert(name.trim().to_string(), value.trim().to_string());
                }
                // Don't log the fragment itself; it may be a password with a stray separator in it.
                _ => trace!("Dropping malformed connection string field ({} bytes)", field.len()),
            }
        }
        ConnectionString { parts }
    }
    /// As [`ConnectionString::parse`], but an absent connection string yields an empty map.
    pub fn parse_opt(raw: Option<&str>) -> ConnectionString {
        raw.map(ConnectionString::parse).unwrap_or_default()
    }
    /// The raw value for `key`, if it was given at all (it may be blank).
    pub fn get(&self, key: Key) -> Option<&str> {
        self.parts.get(key.as_str()).map(String::as_str)
    }
    /// The value for `key`, treating blank values the same as missing ones.
    pub fn value(&self, key: Key) -> Option<&str> {
        self.get(key).filter(|v| !v.trim().is_empty())
    }
    /// True iff `key` is present & its value is truthy (see [`is_truthy`]).
    pub fn flag(&self, key: Key) -> bool {
        self.get(key).map(is_truthy).unwrap_or(false)
    }
    pub fn len(&self) -> usize {
        self.parts.len()
    }
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
    /// Iterate over every (name, value) pair, recognized or not, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.parts.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl std::fmt::Debug for ConnectionString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> StdResult<(), std::fmt::Error> {
        let mut names: Vec<&String> = self.parts.keys().collect();
        names.sort();
        let mut map = f.debug_map();
        for name in names {
            if name == Key::Pwd.as_str() {
                map.entry(name, &"****");
            } else {
                map.entry(name, &self.parts[name]);
            }
        }
        map.finish()
    }
}

impl std::str::FromStr for ConnectionString {
    type Err = std::convert::Infallible;
    fn from_str(s: &str) -> StdResult<Self, Self::Err> {
        Ok(ConnectionString::parse(s))
    }
}
