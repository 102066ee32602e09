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

use crate::kvn::{BlockSchema, Keyword, KvnBlock, COMMENT};
use crate::linalg::Vector3;
use crate::time::Epoch;
use typed_builder::TypedBuilder;

static STATE_VECTOR: BlockSchema = BlockSchema {
    name: "state vector",
    description: Some("State Vector Components"),
    keywords: &[COMMENT, "EPOCH", "X", "Y", "Z", "X_DOT", "Y_DOT", "Z_DOT"],
    required: &["EPOCH", "X", "Y", "Z", "X_DOT", "Y_DOT", "Z_DOT"],
    exclusive: &[],
};

/// Cartesian position and velocity at one epoch, in the frame and time system of the metadata.
#[derive(Clone, Debug, PartialEq, TypedBuilder)]
#[builder(doc)]
pub struct StateVector {
    pub epoch: Epoch,
    /// Position in km
    #[builder(setter(into))]
    pub x: f64,
    #[builder(setter(into))]
    pub y: f64,
    #[builder(setter(into))]
    pub z: f64,
    /// Velocity in km/s
    #[builder(setter(into))]
    pub x_dot: f64,
    #[builder(setter(into))]
    pub y_dot: f64,
    #[builder(setter(into))]
    pub z_dot: f64,
    #[builder(default, setter(into, strip_option))]
    pub comment: Option<String>,
    /// Replaces the default description of this block
    #[builder(default, setter(into, strip_option))]
    pub name: Option<String>,
}

impl StateVector {
    /// Initializes a state vector from its position (km) and velocity (km/s).
    pub fn from_vectors(epoch: Epoch, radius_km: Vector3<f64>, velocity_km_s: Vector3<f64>) -> Self {
        Self {
            epoch,
            x: radius_km[0],
            y: radius_km[1],
            z: radius_km[2],
            x_dot: velocity_km_s[0],
            y_dot: velocity_km_s[1],
            z_dot: velocity_km_s[2],
            comment: None,
            name: None,
        }
    }

    /// Position in km
    pub fn radius(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Velocity in km/s
    pub fn velocity(&self) -> Vector3<f64> {
        Vector3::new(self.x_dot, self.y_dot, self.z_dot)
    }
}

impl KvnBlock for StateVector {
    fn schema(&self) -> &'static BlockSchema {
        &STATE_VECTOR
    }

    fn keywords(&self) -> Vec<Keyword> {
        vec![
            Keyword::comment(self.comment.as_deref()),
            Keyword::new("EPOCH", self.epoch),
            Keyword::real("X", self.x, "km"),
            Keyword::real("Y", self.y, "km"),
            Keyword::real("Z", self.z, "km"),
            Keyword::real("X_DOT", self.x_dot, "km/s"),
            Keyword::real("Y_DOT", self.y_dot, "km/s"),
            Keyword::real("Z_DOT", self.z_dot, "km/s"),
        ]
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
