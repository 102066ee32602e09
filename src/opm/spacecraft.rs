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
use typed_builder::TypedBuilder;

static SPACECRAFT: BlockSchema = BlockSchema {
    name: "spacecraft parameters",
    description: Some("Spacecraft Parameters"),
    keywords: &[
        COMMENT,
        "MASS",
        "SOLAR_RAD_AREA",
        "SOLAR_RAD_COEFF",
        "DRAG_AREA",
        "DRAG_COEFF",
    ],
    required: &[],
    exclusive: &[],
};

/// Physical parameters of the spacecraft, all optional. Required if any maneuver is provided.
#[derive(Clone, Debug, Default, PartialEq, TypedBuilder)]
#[builder(doc)]
pub struct SpacecraftParameters {
    /// Mass in kg
    #[builder(default, setter(into, strip_option))]
    pub mass: Option<f64>,
    /// Solar radiation pressure area in m^2
    #[builder(default, setter(into, strip_option))]
    pub solar_rad_area: Option<f64>,
    /// Solar radiation pressure coefficient
    #[builder(default, setter(into, strip_option))]
    pub solar_rad_coeff: Option<f64>,
    /// Drag area in m^2
    #[builder(default, setter(into, strip_option))]
    pub drag_area: Option<f64>,
    #[builder(default, setter(into, strip_option))]
    pub drag_coeff: Option<f64>,
    #[builder(default, setter(into, strip_option))]
    pub comment: Option<String>,
    /// Replaces the default description of this block
    #[builder(default, setter(into, strip_option))]
    pub name: Option<String>,
}

impl KvnBlock for SpacecraftParameters {
    fn schema(&self) -> &'static BlockSchema {
        &SPACECRAFT
    }

    fn keywords(&self) -> Vec<Keyword> {
        vec![
            Keyword::comment(self.comment.as_deref()),
            Keyword::maybe("MASS", self.mass).with_units("kg"),
            Keyword::maybe("SOLAR_RAD_AREA", self.solar_rad_area).with_units("m**2"),
            Keyword::maybe("SOLAR_RAD_COEFF", self.solar_rad_coeff),
            Keyword::maybe("DRAG_AREA", self.drag_area).with_units("m**2"),
            Keyword::maybe("DRAG_COEFF", self.drag_coeff),
        ]
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
