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

//! Sources of "today's date".
//!
//! The only thing the endpoint builder needs to know about time is the calendar date on which
//! a rolling index name is computed. That's abstracted behind [`Clock`] so that builds can be
//! reproduced:
//!
//! ```rust
//! use es_log_endpoint::clock::{Clock, FixedClock};
//! use chrono::NaiveDate;
//!
//! let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
//! assert_eq!(FixedClock::new(date).today(), date);
//! ```

use chrono::prelude::*;

/// Operations all clocks must support.
pub trait Clock {
    /// The current calendar date
    fn today(&self) -> NaiveDate;
}

/// The wall clock. Dates are taken in UTC, so an index rolls over at midnight UTC regardless of
/// the host's time zone.
#[derive(Copy, Clone, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// A clock stopped at a given date.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FixedClock(NaiveDate);

impl FixedClock {
    pub fn new(date: NaiveDate) -> FixedClock {
        FixedClock(date)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}
