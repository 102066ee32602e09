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

use super::require_text;
use crate::ccsds::{check_object_id, RefFrame, TimeSystem};
use crate::errors::OdmError;
use crate::kvn::{BlockSchema, Keyword, KvnBlock, Value, COMMENT};
use crate::time::Epoch;

static METADATA: BlockSchema = BlockSchema {
    name: "metadata",
    description: Some("Metadata"),
    keywords: &[
        COMMENT,
        "OBJECT_NAME",
        "OBJECT_ID",
        "CENTER_NAME",
        "REF_FRAME",
        "REF_FRAME_EPOCH",
        "TIME_SYSTEM",
    ],
    required: &[
        "OBJECT_NAME",
        "OBJECT_ID",
        "CENTER_NAME",
        "REF_FRAME",
        "TIME_SYSTEM",
    ],
    exclusive: &[],
};

/// Metadata of an OPM: what the message is about, and in which frame and time system.
#[derive(Clone, Debug, PartialEq)]
pub struct Metadata {
    /// Spacecraft name, e.g. `International Space Station`
    pub object_name: String,
    /// International designator, e.g. `1998-067A`
    pub object_id: String,
    /// Origin of the reference frame, e.g. `Earth`
    pub center_name: String,
    pub ref_frame: RefFrame,
    /// Epoch of the reference frame, if not intrinsic to its definition
    pub ref_frame_epoch: Option<Epoch>,
    pub time_system: TimeSystem,
    pub comment: Option<String>,
}

impl Metadata {
    pub fn new(
        object_name: &str,
        object_id: &str,
        center_name: &str,
        ref_frame: RefFrame,
        time_system: TimeSystem,
    ) -> Result<Self, OdmError> {
        let object_id = require_text("OBJECT_ID", object_id)?;
        check_object_id(&object_id)?;
        Ok(Self {
            object_name: require_text("OBJECT_NAME", object_name)?,
            object_id,
            center_name: require_text("CENTER_NAME", center_name)?,
            ref_frame,
            ref_frame_epoch: None,
            time_system,
            comment: None,
        })
    }

    pub fn with_ref_frame_epoch(mut self, epoch: Epoch) -> Self {
        self.ref_frame_epoch = Some(epoch);
        self
    }

    pub fn with_comment(mut self, comment: &str) -> Self {
        self.comment = Some(comment.to_string());
        self
    }
}

impl KvnBlock for Metadata {
    fn schema(&self) -> &'static BlockSchema {
        &METADATA
    }

    fn keywords(&self) -> Vec<Keyword> {
        vec![
            Keyword::comment(self.comment.as_deref()),
            Keyword::new("OBJECT_NAME", self.object_name.as_str()),
            Keyword::new("OBJECT_ID", self.object_id.as_str()),
            Keyword::new("CENTER_NAME", self.center_name.as_str()),
            Keyword::new("REF_FRAME", Value::Token(self.ref_frame.as_str())),
            Keyword::maybe("REF_FRAME_EPOCH", self.ref_frame_epoch),
            Keyword::new("TIME_SYSTEM", Value::Token(self.time_system.as_str())),
        ]
    }

    fn validate(&self) -> Result<(), OdmError> {
        self.keyword_block().validate()?;
        check_object_id(&self.object_id)
    }
}
