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

use super::Value;
use crate::errors::{InvalidFieldFormatSnafu, OdmError};
use crate::io::{EpochStyle, KvnCfg};
use crate::time::Epoch;
use hifitime::prelude::{Format, Formatter};
use std::str::FromStr;

/// Non-zero reals smaller than this are written in scientific notation.
pub const SCIENTIFIC_BELOW: f64 = 1e-4;
/// Reals at least this large are written in scientific notation.
pub const SCIENTIFIC_FROM: f64 = 1e15;

const CALENDAR: &str = "%Y-%m-%dT%H:%M:%S";
const DAY_OF_YEAR: &str = "%Y-%jT%H:%M:%S";

/// Formats a real value with `decimals` digits after the decimal point.
///
/// Returns `None` for NaN and infinities, which cannot be written to a KVN file.
///
/// ```
/// use nyx_odm::kvn::format_real;
///
/// assert_eq!(format_real(6794.0, 6).unwrap(), "6794.000000");
/// assert_eq!(format_real(7.6, 1).unwrap(), "7.6");
/// assert_eq!(format_real(-0.0, 2).unwrap(), "0.00");
/// assert_eq!(format_real(1.5e-7, 3).unwrap(), "1.500e-7");
/// assert!(format_real(f64::NAN, 3).is_none());
/// ```
pub fn format_real(value: f64, decimals: usize) -> Option<String> {
    if !value.is_finite() {
        return None;
    }
    let decimals = decimals.max(1);
    // Avoids writing `-0.000`
    let value = if value == 0.0 { 0.0 } else { value };
    let magnitude = value.abs();
    if value != 0.0 && !(SCIENTIFIC_BELOW..SCIENTIFIC_FROM).contains(&magnitude) {
        Some(format!("{value:.decimals$e}"))
    } else {
        Some(format!("{value:.decimals$}"))
    }
}

/// Formats an epoch in its own time scale, e.g. `2014-11-07T15:30:23` or
/// `2014-11-12T13:14:15.999999`. The fractional seconds are truncated to microseconds and
/// omitted entirely when zero.
pub fn format_epoch(epoch: Epoch, style: EpochStyle) -> Result<String, OdmError> {
    let pattern = match style {
        EpochStyle::Calendar => CALENDAR,
        EpochStyle::DayOfYear => DAY_OF_YEAR,
    };

    let format = match Format::from_str(pattern) {
        Ok(format) => format,
        Err(e) => {
            debug!("epoch format `{pattern}` rejected: {e}");
            return InvalidFieldFormatSnafu {
                keyword: "EPOCH",
                value: format!("{epoch}"),
                expected: "a supported epoch format",
            }
            .fail();
        }
    };

    let whole = format!("{}", Formatter::new(epoch, format));

    let (_, _, _, _, _, _, nanos) = epoch.to_gregorian(epoch.time_scale);
    let micros = nanos / 1_000;

    if micros > 0 {
        Ok(format!("{whole}.{micros:06}"))
    } else {
        Ok(whole)
    }
}

/// Trims free text, which must fit on a single line.
pub fn format_text(keyword: &str, text: &str) -> Result<String, OdmError> {
    let trimmed = text.trim();
    if trimmed.contains(['\n', '\r']) {
        return InvalidFieldFormatSnafu {
            keyword,
            value: trimmed,
            expected: "single line text",
        }
        .fail();
    }
    Ok(trimmed.to_string())
}

impl Value {
    /// Renders this value as it appears after the `=` of a KVN line.
    pub fn to_kvn(&self, keyword: &str, cfg: &KvnCfg) -> Result<String, OdmError> {
        match self {
            Self::Text(text) => format_text(keyword, text),
            Self::Real(value) => format_real(*value, cfg.decimals()).ok_or_else(|| {
                OdmError::InvalidFieldFormat {
                    keyword: keyword.to_string(),
                    value: format!("{value}"),
                    expected: "a finite real number",
                }
            }),
            Self::Integer(value) => Ok(format!("{value}")),
            Self::Epoch(epoch) => format_epoch(*epoch, cfg.epoch_style).map_err(|e| match e {
                OdmError::InvalidFieldFormat {
                    value, expected, ..
                } => OdmError::InvalidFieldFormat {
                    keyword: keyword.to_string(),
                    value,
                    expected,
                },
                e => e,
            }),
            Self::Token(token) => Ok((*token).to_string()),
        }
    }
}
