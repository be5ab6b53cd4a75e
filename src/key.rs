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
//! Connection string option names.
//!
//! [`Key`] names the options the endpoint builder understands. The textual forms are
//! case-sensitive: `server=localhost` does *not* set [`Key::Server`].

type StdResult<T, E> = std::result::Result<T, E>;

/// The options recognized in a connection string.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// URI scheme; defaults to "http"
    Scheme,
    /// user name for basic credentials
    User,
    /// password for basic credentials
    Pwd,
    /// host name or address of the indexing service
    Server,
    /// TCP port; omitted from the address when not given
    Port,
    /// index name
    Index,
    /// if truthy, suffix the index name with today's date
    Rolling,
    /// number of events buffered before a flush; above one selects the bulk endpoint
    BufferSize,
    /// `routing` query parameter
    Routing,
    /// `pipeline` query parameter
    Pipeline,
}

impl Key {
    /// Every [`Key`], in declaration order.
    pub const ALL: [Key; 10] = [
        Key::Scheme,
        Key::User,
        Key::Pwd,
        Key::Server,
        Key::Port,
        Key::Index,
        Key::Rolling,
        Key::BufferSize,
        Key::Routing,
        Key::Pipeline,
    ];

    /// The name of this option as it appears in a connection string
    pub const fn as_str(&self) -> &'static str {
        match self {
            Key::Scheme => "Scheme",
            Key::User => "User",
            Key::Pwd => "Pwd",
            Key::Server => "Server",
            Key::Port => "Port",
            Key::Index => "Index",
            Key::Rolling => "Rolling",
            Key::BufferSize => "BufferSize",
            Key::Routing => "Routing",
            Key::Pipeline => "Pipeline",
        }
    }

    /// Look up the [`Key`] with the given (case-sensitive) name
    pub fn from_name(name: &str) -> Option<Key> {
        Key::ALL.iter().copied().find(|k| k.as_str() == name)
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> StdResult<(), std::fmt::Error> {
        write!(f, "{}", self.as_str())
    }
}
