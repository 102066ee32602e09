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

/*! # nyx-odm

Build, validate and write CCSDS Orbit Data Messages in keyword = value notation (KVN).

Only the Orbit Parameter Message (OPM, CCSDS 502.0-B-2) is supported: a header, the metadata, a
state vector and the optional Keplerian elements, spacecraft parameters, covariance and maneuvers.
Every message is validated in full before a single line is written.

```
use nyx_odm::prelude::*;

let epoch = Epoch::from_gregorian_utc_hms(2014, 11, 7, 15, 30, 23);
let sv = StateVector::builder()
    .epoch(epoch)
    .x(6794)
    .y(0)
    .z(0)
    .x_dot(0)
    .y_dot(7.6)
    .z_dot(0)
    .build();

let opm = Opm::new(
    Header::new("NASA")?,
    Metadata::new(
        "International Space Station",
        "1998-067A",
        "Earth",
        "EME2000".parse()?,
        "UTC".parse()?,
    )?,
    Data::new(sv),
);

let lines = opm.render(&KvnCfg::default())?;
assert_eq!(lines[12], "EPOCH   = 2014-11-07T15:30:23");
# Ok::<(), OdmError>(())
```
*/

/// Enumerated values shared by the Orbit Data Messages (reference frames, time systems).
pub mod ccsds;

mod errors;
/// Functions which may fail return an `OdmError`, never panic.
pub use self::errors::OdmError;

/// Rendering configuration, loadable from YAML.
pub mod io;

/// Keyword = value notation: values, keywords, block schemas and their rendering.
pub mod kvn;

/// Orbit Parameter Message
pub mod opm;

#[macro_use]
extern crate log;
extern crate hifitime;
extern crate nalgebra as na;

/// Re-export of hifitime
pub mod time {
    pub use hifitime::*;
}

/// Re-export nalgebra
pub mod linalg {
    pub use na::base::*;
}

/// Re-export some useful things
pub mod prelude {
    pub use crate::ccsds::{RefFrame, TimeSystem};
    pub use crate::io::{ConfigRepr, EpochStyle, KvnCfg};
    pub use crate::kvn::KvnBlock;
    pub use crate::opm::{
        CovarianceMatrix, Data, DataBlock, Header, KeplerianElements, ManeuverParameters,
        Metadata, Opm, SpacecraftParameters, StateVector, UserDefined,
    };
    pub use crate::time::{Duration, Epoch, TimeScale, Unit};
    pub use crate::OdmError;
}
