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

use crate::errors::{MutuallyExclusiveViolationSnafu, OdmError};
use crate::kvn::{BlockSchema, Keyword, KvnBlock, COMMENT};
use snafu::ensure;

const ANOMALIES: &[&str] = &["TRUE_ANOMALY", "MEAN_ANOMALY"];

static KEPLERIAN: BlockSchema = BlockSchema {
    name: "keplerian elements",
    description: Some("Osculating Keplerian Elements"),
    keywords: &[
        COMMENT,
        "SEMI_MAJOR_AXIS",
        "ECCENTRICITY",
        "INCLINATION",
        "RA_OF_ASC_NODE",
        "ARG_OF_PERICENTER",
        "TRUE_ANOMALY",
        "MEAN_ANOMALY",
        "GM",
    ],
    required: &[
        "SEMI_MAJOR_AXIS",
        "ECCENTRICITY",
        "INCLINATION",
        "RA_OF_ASC_NODE",
        "ARG_OF_PERICENTER",
        "GM",
    ],
    exclusive: &[ANOMALIES],
};

/// Osculating Keplerian elements, at the epoch of the state vector.
///
/// Exactly one of the true anomaly and the mean anomaly must be set.
#[derive(Clone, Debug, PartialEq)]
pub struct KeplerianElements {
    /// Semi major axis in km
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    /// Inclination in degrees
    pub inclination: f64,
    /// Right ascension of the ascending node in degrees
    pub ra_of_asc_node: f64,
    /// Argument of pericenter in degrees
    pub arg_of_pericenter: f64,
    /// True anomaly in degrees
    pub true_anomaly: Option<f64>,
    /// Mean anomaly in degrees
    pub mean_anomaly: Option<f64>,
    /// Gravitational coefficient in km^3/s^2
    pub gm: f64,
    pub comment: Option<String>,
    /// Replaces the default description of this block
    pub name: Option<String>,
}

impl KeplerianElements {
    /// Initializes new Keplerian elements, fails unless exactly one anomaly is provided.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        semi_major_axis: impl Into<f64>,
        eccentricity: impl Into<f64>,
        inclination: impl Into<f64>,
        ra_of_asc_node: impl Into<f64>,
        arg_of_pericenter: impl Into<f64>,
        true_anomaly: Option<f64>,
        mean_anomaly: Option<f64>,
        gm: impl Into<f64>,
    ) -> Result<Self, OdmError> {
        ensure_single_anomaly(true_anomaly, mean_anomaly)?;
        Ok(Self {
            semi_major_axis: semi_major_axis.into(),
            eccentricity: eccentricity.into(),
            inclination: inclination.into(),
            ra_of_asc_node: ra_of_asc_node.into(),
            arg_of_pericenter: arg_of_pericenter.into(),
            true_anomaly,
            mean_anomaly,
            gm: gm.into(),
            comment: None,
            name: None,
        })
    }

    /// Sets the true anomaly, fails if the mean anomaly is already set.
    pub fn set_true_anomaly(&mut self, true_anomaly_deg: impl Into<f64>) -> Result<(), OdmError> {
        let true_anomaly_deg = true_anomaly_deg.into();
        ensure_single_anomaly(Some(true_anomaly_deg), self.mean_anomaly)?;
        self.true_anomaly = Some(true_anomaly_deg);
        Ok(())
    }

    /// Sets the mean anomaly, fails if the true anomaly is already set.
    pub fn set_mean_anomaly(&mut self, mean_anomaly_deg: impl Into<f64>) -> Result<(), OdmError> {
        let mean_anomaly_deg = mean_anomaly_deg.into();
        ensure_single_anomaly(self.true_anomaly, Some(mean_anomaly_deg))?;
        self.mean_anomaly = Some(mean_anomaly_deg);
        Ok(())
    }

    pub fn with_comment(mut self, comment: &str) -> Self {
        self.comment = Some(comment.to_string());
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }
}

fn ensure_single_anomaly(
    true_anomaly: Option<f64>,
    mean_anomaly: Option<f64>,
) -> Result<(), OdmError> {
    ensure!(
        true_anomaly.is_some() != mean_anomaly.is_some(),
        MutuallyExclusiveViolationSnafu {
            group: ANOMALIES.join(", ")
        }
    );
    Ok(())
}

impl KvnBlock for KeplerianElements {
    fn schema(&self) -> &'static BlockSchema {
        &KEPLERIAN
    }

    fn keywords(&self) -> Vec<Keyword> {
        vec![
            Keyword::comment(self.comment.as_deref()),
            Keyword::real("SEMI_MAJOR_AXIS", self.semi_major_axis, "km"),
            Keyword::new("ECCENTRICITY", self.eccentricity),
            Keyword::real("INCLINATION", self.inclination, "deg"),
            Keyword::real("RA_OF_ASC_NODE", self.ra_of_asc_node, "deg"),
            Keyword::real("ARG_OF_PERICENTER", self.arg_of_pericenter, "deg"),
            Keyword::maybe("TRUE_ANOMALY", self.true_anomaly).with_units("deg"),
            Keyword::maybe("MEAN_ANOMALY", self.mean_anomaly).with_units("deg"),
            Keyword::real("GM", self.gm, "km**3/s**2"),
        ]
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

#[cfg(test)]
mod ut_keplerian {
    use super::*;
    use crate::io::KvnCfg;

    const GM_EARTH: f64 = 398_600.4415;

    fn with_anomalies(ta: Option<f64>, ma: Option<f64>) -> Result<KeplerianElements, OdmError> {
        KeplerianElements::new(6_800.0, 0.0005, 51.6, 120.0, 90.0, ta, ma, GM_EARTH)
    }

    #[test]
    fn single_anomaly() {
        assert!(with_anomalies(Some(10.0), None).is_ok());
        assert!(with_anomalies(None, Some(10.0)).is_ok());
        for (ta, ma) in [(Some(10.0), Some(12.0)), (None, None)] {
            match with_anomalies(ta, ma) {
                Err(OdmError::MutuallyExclusiveViolation { group }) => {
                    assert!(group.contains("TRUE_ANOMALY") && group.contains("MEAN_ANOMALY"))
                }
                other => panic!("expected a violation, got {other:?}"),
            }
        }
    }

    #[test]
    fn setters() {
        let mut kep = with_anomalies(Some(10.0), None).unwrap();
        assert!(kep.set_true_anomaly(11.0).is_ok());
        assert_eq!(kep.true_anomaly, Some(11.0));
        assert!(kep.set_mean_anomaly(3.0).is_err());
        assert_eq!(kep.mean_anomaly, None);

        // Public fields may be mutated, the violation is then caught on render
        kep.mean_anomaly = Some(3.0);
        assert!(matches!(
            kep.render(&KvnCfg::default()),
            Err(OdmError::MutuallyExclusiveViolation { .. })
        ));
    }

    #[test]
    fn integer_inputs() {
        let mut kep =
            KeplerianElements::new(6800, 0, 51, 120, 90, None, Some(10.0), 398_600).unwrap();
        assert_eq!(kep.semi_major_axis, 6800.0);
        assert_eq!(kep.eccentricity, 0.0);
        assert_eq!(kep.gm, 398_600.0);
        assert_eq!(
            kep,
            KeplerianElements::new(6800.0, 0.0, 51.0, 120.0, 90.0, None, Some(10.0), 398_600.0)
                .unwrap()
        );

        assert!(kep.set_mean_anomaly(12).is_ok());
        assert_eq!(kep.mean_anomaly, Some(12.0));
        assert!(kep.set_true_anomaly(5).is_err());
    }

    #[test]
    fn render() {
        let kep = with_anomalies(None, Some(10.0))
            .unwrap()
            .with_name("Osculating elements");
        let lines = kep.render(&KvnCfg::builder().precision(4).build()).unwrap();
        assert_eq!(
            lines,
            vec![
                "COMMENT Osculating elements",
                "SEMI_MAJOR_AXIS   = 6800.0000",
                "ECCENTRICITY      = 0.0005",
                "INCLINATION       = 51.6000",
                "RA_OF_ASC_NODE    = 120.0000",
                "ARG_OF_PERICENTER = 90.0000",
                "MEAN_ANOMALY      = 10.0000",
                "GM                = 398600.4415",
            ]
        );
    }
}
