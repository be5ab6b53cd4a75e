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
//! [es-log-endpoint](crate) errors

use backtrace::Backtrace;

/// [es-log-endpoint](crate) error type
///
/// Like its siblings, this crate eschews libraries like [thiserror], [anyhow] & [Snafu] in favor
/// of a straightforward enumeration with a few match arms chosen on the basis what the caller will
/// need to respond.
///
/// Note that malformed connection-string fragments are *not* errors; they are simply dropped by
/// the parser. The only way to fail a build is a `BufferSize` that isn't an integer.
///
/// [thiserror]: https://docs.rs/thiserror
/// [anyhow]: https://docs.rs/anyhow
/// [Snafu]: https://docs.rs/snafu/latest/snafu
#[non_exhaustive]
pub enum Error {
    /// The `BufferSize` option was set, but could not be read as a 32-bit integer
    BadBufferSize {
        value: String,
        source: std::num::ParseIntError,
        back: Backtrace,
    },
    /// The assembled address could not be parsed as a URL
    BadUri {
        text: String,
        source: url::ParseError,
        back: Backtrace,
    },
}

impl std::fmt::Display for Error {
    // `Error` is non-exhaustive so that adding variants won't be a breaking change to our
    // callers. That means the compiler won't catch us if we miss a variant here, so we
    // always include a `_` arm.
    #[allow(unreachable_patterns)]
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::BadBufferSize { value, source, .. } => write!(
                f,
                "BufferSize '{}' is not an integer ({}); can't decide on the bulk endpoint",
                value, source
            ),
            // `text` may carry credentials, so don't echo it here.
            Error::BadUri { source, .. } => {
                write!(f, "The endpoint address is not a valid URL: {}", source)
            }
            _ => write!(f, "Other es-log-endpoint error"),
        }
    }
}

impl std::fmt::Debug for Error {
    #[allow(unreachable_patterns)]
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::BadBufferSize { back, .. } => write!(f, "{}\n{:?}", self, back),
            Error::BadUri { back, .. } => write!(f, "{}\n{:?}", self, back),
            err => write!(f, "es-log-endpoint error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::BadBufferSize { source, .. } => Some(source),
            Error::BadUri { source, .. } => Some(source),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
