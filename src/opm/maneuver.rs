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

use crate::ccsds::RefFrame;
use crate::kvn::{BlockSchema, Keyword, KvnBlock, Value, COMMENT};
use crate::linalg::Vector3;
use crate::time::{Duration, Epoch, Unit};
use typed_builder::TypedBuilder;

static MANEUVER: BlockSchema = BlockSchema {
    name: "maneuver parameters",
    description: Some("Maneuver Parameters"),
    keywords: &[
        COMMENT,
        "MAN_EPOCH_IGNITION",
        "MAN_DURATION",
        "MAN_DELTA_MASS",
        "MAN_REF_FRAME",
        "MAN_DV_1",
        "MAN_DV_2",
        "MAN_DV_3",
    ],
    required: &[
        "MAN_EPOCH_IGNITION",
        "MAN_DURATION",
        "MAN_DELTA_MASS",
        "MAN_REF_FRAME",
        "MAN_DV_1",
        "MAN_DV_2",
        "MAN_DV_3",
    ],
    exclusive: &[],
};

/// One maneuver, there may be several in a message.
#[derive(Clone, Debug, PartialEq, TypedBuilder)]
#[builder(doc)]
pub struct ManeuverParameters {
    pub man_epoch_ignition: Epoch,
    /// Duration of the burn in seconds, zero for an impulsive maneuver
    #[builder(setter(into))]
    pub man_duration: f64,
    /// Mass change in kg, negative when mass is expelled
    #[builder(setter(into))]
    pub man_delta_mass: f64,
    pub man_ref_frame: RefFrame,
    /// Delta-v components in km/s in the maneuver frame
    #[builder(setter(into))]
    pub man_dv_1: f64,
    #[builder(setter(into))]
    pub man_dv_2: f64,
    #[builder(setter(into))]
    pub man_dv_3: f64,
    #[builder(default, setter(into, strip_option))]
    pub comment: Option<String>,
    /// Replaces the default description of this block
    #[builder(default, setter(into, strip_option))]
    pub name: Option<String>,
}

impl ManeuverParameters {
    /// Initializes a maneuver from its ignition epoch, burn duration and delta-v vector (km/s).
    pub fn from_delta_v(
        ignition: Epoch,
        duration: Duration,
        delta_mass_kg: f64,
        frame: RefFrame,
        delta_v_km_s: Vector3<f64>,
    ) -> Self {
        Self {
            man_epoch_ignition: ignition,
            man_duration: duration.to_seconds(),
            man_delta_mass: delta_mass_kg,
            man_ref_frame: frame,
            man_dv_1: delta_v_km_s[0],
            man_dv_2: delta_v_km_s[1],
            man_dv_3: delta_v_km_s[2],
            comment: None,
            name: None,
        }
    }

    /// Delta-v vector in km/s
    pub fn delta_v(&self) -> Vector3<f64> {
        Vector3::new(self.man_dv_1, self.man_dv_2, self.man_dv_3)
    }

    /// Epoch when the burn ends
    pub fn end_epoch(&self) -> Epoch {
        self.man_epoch_ignition + self.man_duration * Unit::Second
    }
}

impl KvnBlock for ManeuverParameters {
    fn schema(&self) -> &'static BlockSchema {
        &MANEUVER
    }

    fn keywords(&self) -> Vec<Keyword> {
        vec![
            Keyword::comment(self.comment.as_deref()),
            Keyword::new("MAN_EPOCH_IGNITION", self.man_epoch_ignition),
            Keyword::real("MAN_DURATION", self.man_duration, "s"),
            Keyword::real("MAN_DELTA_MASS", self.man_delta_mass, "kg"),
            Keyword::new("MAN_REF_FRAME", Value::Token(self.man_ref_frame.as_str())),
            Keyword::real("MAN_DV_1", self.man_dv_1, "km/s"),
            Keyword::real("MAN_DV_2", self.man_dv_2, "km/s"),
            Keyword::real("MAN_DV_3", self.man_dv_3, "km/s"),
        ]
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

#[cfg(test)]
mod ut_maneuver {
    use super::*;
    use crate::io::KvnCfg;

    #[test]
    fn render() {
        let ignition = Epoch::from_gregorian_utc_hms(2014, 11, 8, 9, 0, 0);
        let mnvr = ManeuverParameters::from_delta_v(
            ignition,
            2 * Unit::Minute,
            -25.5,
            RefFrame::RTN,
            Vector3::new(0.0, 0.0025, 0.0),
        );
        assert_eq!(mnvr.delta_v()[1], 0.0025);
        assert_eq!(mnvr.end_epoch(), ignition + 120 * Unit::Second);

        let built = ManeuverParameters::builder()
            .man_epoch_ignition(ignition)
            .man_duration(120)
            .man_delta_mass(-25.5)
            .man_ref_frame(RefFrame::RTN)
            .man_dv_1(0)
            .man_dv_2(0.0025)
            .man_dv_3(0)
            .build();
        assert_eq!(built, mnvr);

        assert_eq!(
            mnvr.render(&KvnCfg::builder().precision(4).build()).unwrap(),
            vec![
                "COMMENT Maneuver Parameters",
                "MAN_EPOCH_IGNITION = 2014-11-08T09:00:00",
                "MAN_DURATION       = 120.0000",
                "MAN_DELTA_MASS     = -25.5000",
                "MAN_REF_FRAME      = RTN",
                "MAN_DV_1           = 0.0000",
                "MAN_DV_2           = 0.0025",
                "MAN_DV_3           = 0.0000",
            ]
        );
    }
}
