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

/*
 * Enumerated values shared by the Orbit Data Messages.
 * This is coded from CCSDS 502.0-B-2, Annex A.
 */

use crate::errors::{InvalidEnumValueSnafu, InvalidFieldFormatSnafu, OdmError};
use crate::time::TimeScale;
use lazy_static::lazy_static;
use regex::Regex;
use serde_derive::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

lazy_static! {
    /// International designator: launch year, launch number of that year, piece of the launch.
    static ref OBJECT_DESIGNATOR: Regex = Regex::new(r"^[0-9]{4}-[0-9]{3}[A-Z]{1,3}$").unwrap();
}

/// Checks that the provided identifier is an international designator, e.g. `1998-067A`.
///
/// ```
/// use nyx_odm::ccsds::check_object_id;
///
/// assert!(check_object_id("1998-067A").is_ok());
/// assert!(check_object_id("2023-001ABC").is_ok());
/// assert!(check_object_id("ISS").is_err());
/// ```
pub fn check_object_id(object_id: &str) -> Result<(), OdmError> {
    if OBJECT_DESIGNATOR.is_match(object_id.trim()) {
        Ok(())
    } else {
        InvalidFieldFormatSnafu {
            keyword: "OBJECT_ID",
            value: object_id,
            expected: "an international designator like 1998-067A",
        }
        .fail()
    }
}

/// Reference frames of the ODM (CCSDS 502.0-B-2, Annex A, Table A-1)
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(clippy::upper_case_acronyms)]
pub enum RefFrame {
    /// Earth Mean Equator and Equinox of J2000
    EME2000,
    /// Geocentric Celestial Reference Frame
    GCRF,
    /// Greenwich Rotating Coordinates
    GRC,
    /// International Celestial Reference Frame
    ICRF,
    ITRF2000,
    #[serde(rename = "ITRF-93", alias = "ITRF_93")]
    ITRF93,
    #[serde(rename = "ITRF-97", alias = "ITRF_97")]
    ITRF97,
    /// Mars Centered Inertial
    MCI,
    /// True of Date, Rotating
    TDR,
    /// True Equator Mean Equinox
    TEME,
    /// True of Date
    TOD,
    /// Radial, along-track and cross-track (spacecraft local frame)
    RSW,
    /// Radial, transverse and normal (spacecraft local frame)
    RTN,
    /// Tangential, normal and cross-track (spacecraft local frame)
    TNW,
}

impl RefFrame {
    pub const ALL: [Self; 14] = [
        Self::EME2000,
        Self::GCRF,
        Self::GRC,
        Self::ICRF,
        Self::ITRF2000,
        Self::ITRF93,
        Self::ITRF97,
        Self::MCI,
        Self::TDR,
        Self::TEME,
        Self::TOD,
        Self::RSW,
        Self::RTN,
        Self::TNW,
    ];

    /// Token of this frame as written in a message.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::EME2000 => "EME2000",
            Self::GCRF => "GCRF",
            Self::GRC => "GRC",
            Self::ICRF => "ICRF",
            Self::ITRF2000 => "ITRF2000",
            Self::ITRF93 => "ITRF-93",
            Self::ITRF97 => "ITRF-97",
            Self::MCI => "MCI",
            Self::TDR => "TDR",
            Self::TEME => "TEME",
            Self::TOD => "TOD",
            Self::RSW => "RSW",
            Self::RTN => "RTN",
            Self::TNW => "TNW",
        }
    }

    /// Returns true for the frames attached to the spacecraft, which are only valid for maneuvers
    /// and covariances.
    pub const fn is_local(&self) -> bool {
        matches!(self, Self::RSW | Self::RTN | Self::TNW)
    }
}

impl FromStr for RefFrame {
    type Err = OdmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().replace('_', "-");
        match Self::ALL.iter().find(|frame| frame.as_str() == token) {
            Some(frame) => Ok(*frame),
            None => InvalidEnumValueSnafu {
                kind: "reference frame",
                value: s,
            }
            .fail(),
        }
    }
}

impl fmt::Display for RefFrame {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Time systems of the ODM (CCSDS 502.0-B-2, Annex A, Table A-2)
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(clippy::upper_case_acronyms)]
pub enum TimeSystem {
    /// Greenwich Mean Sidereal Time
    GMST,
    GPS,
    /// Mission Elapsed Time
    MET,
    /// Mission Relative Time
    MRT,
    /// Spacecraft Clock
    SCLK,
    TAI,
    TCB,
    TDB,
    TCG,
    TT,
    UT1,
    UTC,
}

impl TimeSystem {
    pub const ALL: [Self; 12] = [
        Self::GMST,
        Self::GPS,
        Self::MET,
        Self::MRT,
        Self::SCLK,
        Self::TAI,
        Self::TCB,
        Self::TDB,
        Self::TCG,
        Self::TT,
        Self::UT1,
        Self::UTC,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::GMST => "GMST",
            Self::GPS => "GPS",
            Self::MET => "MET",
            Self::MRT => "MRT",
            Self::SCLK => "SCLK",
            Self::TAI => "TAI",
            Self::TCB => "TCB",
            Self::TDB => "TDB",
            Self::TCG => "TCG",
            Self::TT => "TT",
            Self::UT1 => "UT1",
            Self::UTC => "UTC",
        }
    }

    /// Time scale of hifitime matching this time system, if any.
    pub const fn time_scale(&self) -> Option<TimeScale> {
        match self {
            Self::GPS => Some(TimeScale::GPST),
            Self::TAI => Some(TimeScale::TAI),
            Self::TDB => Some(TimeScale::TDB),
            Self::TT => Some(TimeScale::TT),
            Self::UTC => Some(TimeScale::UTC),
            _ => None,
        }
    }
}

impl FromStr for TimeSystem {
    type Err = OdmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        match Self::ALL.iter().find(|ts| ts.as_str() == token) {
            Some(ts) => Ok(*ts),
            None => InvalidEnumValueSnafu {
                kind: "time system",
                value: s,
            }
            .fail(),
        }
    }
}

impl TryFrom<TimeScale> for TimeSystem {
    type Error = OdmError;

    fn try_from(ts: TimeScale) -> Result<Self, Self::Error> {
        match ts {
            TimeScale::GPST => Ok(Self::GPS),
            TimeScale::TAI => Ok(Self::TAI),
            TimeScale::TDB => Ok(Self::TDB),
            TimeScale::TT => Ok(Self::TT),
            TimeScale::UTC => Ok(Self::UTC),
            _ => InvalidEnumValueSnafu {
                kind: "time system",
                value: format!("{ts:?}"),
            }
            .fail(),
        }
    }
}

impl fmt::Display for TimeSystem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
