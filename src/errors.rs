/*
    Nyx, blazing fast astrodynamics
    Copyright (C) 2018-onwards Christopher Rabotin <christopher.rabotin@gmail.com>

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU Affero General Public License for more details.

    You should have received a copy of the GNU Affero General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

use snafu::prelude::*;
use std::io;

/// Every fallible operation of this crate returns an `OdmError`.
///
/// Value-level problems (an unknown enumerated token, a blank originator) are reported when the
/// object is constructed. Cross-field problems (a missing required keyword, both anomalies set)
/// are reported by `validate`, which is always called before anything is rendered.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum OdmError {
    #[snafu(display("`{value}` is not a valid {kind}"))]
    InvalidEnumValue { kind: &'static str, value: String },
    #[snafu(display("required keyword {keyword} is empty"))]
    EmptyRequiredField { keyword: String },
    #[snafu(display("required keyword {keyword} is missing"))]
    MissingRequiredKeyword { keyword: String },
    #[snafu(display("exactly one of {group} must be set"))]
    MutuallyExclusiveViolation { group: String },
    #[snafu(display("invalid field combination: {details}"))]
    InvalidFieldCombination { details: String },
    #[snafu(display("{keyword} = `{value}` is invalid, expected {expected}"))]
    InvalidFieldFormat {
        keyword: String,
        value: String,
        expected: &'static str,
    },
    #[snafu(display("could not read the system clock: {details}"))]
    Clock { details: String },
    #[snafu(display("{action} failed: {source}"))]
    Io {
        action: &'static str,
        source: io::Error,
    },
}

impl OdmError {
    /// Returns the keyword this error refers to, if any.
    pub fn keyword(&self) -> Option<&str> {
        match self {
            Self::EmptyRequiredField { keyword }
            | Self::MissingRequiredKeyword { keyword }
            | Self::InvalidFieldFormat { keyword, .. } => Some(keyword.as_str()),
            _ => None,
        }
    }
}
